use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use serde::Serialize;
use serde_form::{Control, Field, FormValue, SerializeOptions, Serialized};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "formser", version, about = "Form field serializer")]
struct Args {
    /// Input file path (.json controls or .txt/.query string). Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Force encode mode (overrides auto-detection).
    #[arg(short = 'e', long)]
    encode: bool,

    /// Force decode mode (overrides auto-detection).
    #[arg(short = 'd', long)]
    decode: bool,

    /// Emit a nested JSON object instead of a query string when encoding.
    #[arg(long)]
    hash: bool,

    /// Include disabled controls.
    #[arg(long)]
    disabled: bool,

    /// Include valueless controls as empty strings.
    #[arg(long)]
    empty: bool,

    /// Treat the input as `{name, value, listMember}` fields rather than controls.
    #[arg(long)]
    fields: bool,

    /// JSON indentation size (default: 2, 0 for compact).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input_text, input_source) = read_input(args.input.as_deref())?;
    let mode = resolve_mode(&args, &input_source)?;
    debug!(?mode, ?input_source, "resolved mode");

    match mode {
        Mode::Encode => run_encode(&args, &input_text, &input_source),
        Mode::Decode => run_decode(&args, &input_text, &input_source),
    }
}

fn run_encode(args: &Args, input: &str, input_source: &InputSource) -> Result<(), Box<dyn Error>> {
    let options = SerializeOptions::new()
        .with_hash(args.hash)
        .with_disabled(args.disabled)
        .with_empty(args.empty);

    let serialized = if args.fields {
        let fields: Vec<Field> = serde_json::from_str(input)?;
        if options.hash {
            Serialized::Hash(serde_form::to_value(&fields)?)
        } else {
            Serialized::Query(serde_form::to_string(&fields)?)
        }
    } else {
        let controls: Vec<Control> = serde_json::from_str(input)?;
        serde_form::serialize(&controls, &options)?
    };

    with_output_writer(args.output.as_deref(), |writer| match &serialized {
        Serialized::Hash(tree) => write_json(writer, tree, args.indent),
        Serialized::Query(query) => {
            writer.write_all(query.as_bytes())?;
            Ok(())
        }
    })?;
    report_status(Mode::Encode, input_source, args.output.as_deref());
    Ok(())
}

fn run_decode(args: &Args, input: &str, input_source: &InputSource) -> Result<(), Box<dyn Error>> {
    let tree = serde_form::decode_to_value(input.trim_end_matches(['\r', '\n']))?;
    with_output_writer(args.output.as_deref(), |writer| {
        write_json(writer, &tree, args.indent)
    })?;
    report_status(Mode::Decode, input_source, args.output.as_deref());
    Ok(())
}

fn resolve_mode(args: &Args, input_source: &InputSource) -> Result<Mode, Box<dyn Error>> {
    if args.encode {
        return Ok(Mode::Encode);
    }

    if args.decode {
        return Ok(Mode::Decode);
    }

    match input_source {
        InputSource::Stdin => Ok(Mode::Encode),
        InputSource::File(path) => match Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Mode::Encode),
            Some("txt" | "query" | "qs") => Ok(Mode::Decode),
            _ => Err("unable to auto-detect mode; use --encode or --decode".into()),
        },
    }
}

fn read_input(input: Option<&str>) -> Result<(String, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(
    writer: &mut dyn Write,
    value: &FormValue,
    indent: usize,
) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

// Only file output gets a status line; stdout carries the payload.
fn report_status(mode: Mode, input_source: &InputSource, output: Option<&str>) {
    let Some(output) = output.filter(|path| *path != "-") else {
        return;
    };
    let input_label = match input_source {
        InputSource::Stdin => "stdin",
        InputSource::File(path) => path.as_str(),
    };
    let verb = match mode {
        Mode::Encode => "Encoded",
        Mode::Decode => "Decoded",
    };
    println!("✔ {verb} {input_label} → {output}");
}
