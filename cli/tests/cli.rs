use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write test file");
}

const CONTROLS: &str = r#"[
    {"type": "text", "name": "user[name]", "value": "Ada Lovelace"},
    {"type": "checkbox", "name": "user[admin]", "value": "on"},
    {"type": "checkbox", "name": "user[roles][]", "value": "dev", "checked": true},
    {"type": "submit", "name": "go", "value": "Send"}
]"#;

#[test]
fn encode_auto_detects_json() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("form.json");
    write_file(&input, CONTROLS);

    cargo_bin_cmd!("formser")
        .arg(&input)
        .assert()
        .success()
        .stdout("user%5Bname%5D=Ada+Lovelace&user%5Broles%5D%5B%5D=dev");
}

#[test]
fn encode_hash_prints_nested_json() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("form.json");
    write_file(&input, CONTROLS);

    let expected =
        "{\n  \"user\": {\n    \"name\": \"Ada Lovelace\",\n    \"roles\": [\n      \"dev\"\n    ]\n  }\n}";

    cargo_bin_cmd!("formser")
        .arg(&input)
        .arg("--hash")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn encode_empty_includes_unchecked_checkbox() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("form.json");
    write_file(&input, CONTROLS);

    cargo_bin_cmd!("formser")
        .arg(&input)
        .args(["--hash", "--empty", "--indent", "0"])
        .assert()
        .success()
        .stdout(r#"{"user":{"name":"Ada Lovelace","admin":"","roles":["dev"]}}"#);
}

#[test]
fn encode_raw_fields() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("fields.json");
    write_file(
        &input,
        r#"[{"name": "a", "value": "1"}, {"name": "a", "value": "2"}, {"name": "pets", "value": "cat", "listMember": true}]"#,
    );

    cargo_bin_cmd!("formser")
        .arg(&input)
        .args(["--fields", "--hash", "--indent", "0"])
        .assert()
        .success()
        .stdout(r#"{"a":["1","2"],"pets":["cat"]}"#);
}

#[test]
fn decode_auto_detects_query() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.query");
    write_file(&input, "people[0][name]=Ada&people[1][name]=Bob+B\n");

    cargo_bin_cmd!("formser")
        .arg(&input)
        .args(["--indent", "0"])
        .assert()
        .success()
        .stdout(r#"{"people":[{"name":"Ada"},{"name":"Bob B"}]}"#);
}

#[test]
fn structural_conflict_fails() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.txt");
    write_file(&input, "a=1&a[b]=2");

    cargo_bin_cmd!("formser")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("ERROR").and(contains("a[b]")));
}

#[test]
fn stdin_defaults_to_encode() {
    cargo_bin_cmd!("formser")
        .write_stdin(r#"[{"name": "q", "value": "a b"}]"#)
        .assert()
        .success()
        .stdout("q=a+b");
}

#[test]
fn unknown_extension_needs_mode() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.dat");
    write_file(&input, "a=1");

    cargo_bin_cmd!("formser")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("unable to auto-detect mode"));

    cargo_bin_cmd!("formser")
        .arg(&input)
        .args(["--decode", "--indent", "0"])
        .assert()
        .success()
        .stdout(r#"{"a":"1"}"#);
}

#[test]
fn writes_to_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("form.json");
    let output = dir.path().join("out.txt");
    write_file(&input, r#"[{"name": "a", "value": "1"}]"#);

    cargo_bin_cmd!("formser")
        .arg(&input)
        .args(["-o", output.to_str().expect("output path")])
        .assert()
        .success()
        .stdout(contains("Encoded").and(contains("out.txt")));

    let contents = fs::read_to_string(&output).expect("read output");
    assert_eq!(contents, "a=1");
}
