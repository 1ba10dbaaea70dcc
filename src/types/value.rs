use std::{
    fmt,
    ops::{Index, IndexMut},
};

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::path::{to_field_name, KeyPath, PathSegment};

pub type FormMap = IndexMap<String, FormValue>;

/// Tree produced by the hash serializer.
///
/// `Null` marks a slot that holds nothing yet: the empty root, or the gap an
/// indexed field such as `a[3]` leaves before its index.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FormValue {
    #[default]
    Null,
    Scalar(String),
    List(Vec<FormValue>),
    Map(FormMap),
}

impl FormValue {
    pub fn empty_map() -> Self {
        FormValue::Map(FormMap::new())
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, FormValue::Null)
    }

    pub const fn is_scalar(&self) -> bool {
        matches!(self, FormValue::Scalar(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, FormValue::List(_))
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, FormValue::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<FormValue>> {
        match self {
            FormValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<FormValue>> {
        match self {
            FormValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FormMap> {
        match self {
            FormValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut FormMap> {
        match self {
            FormValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        match self {
            FormValue::Map(map) => map.get(key),
            _ => None,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&FormValue> {
        match self {
            FormValue::List(items) => items.get(index),
            _ => None,
        }
    }

    pub fn take(&mut self) -> FormValue {
        std::mem::replace(self, FormValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FormValue::Null => "null",
            FormValue::Scalar(_) => "scalar",
            FormValue::List(_) => "list",
            FormValue::Map(_) => "map",
        }
    }

    /// Flatten the tree back into `(name, value)` pairs in bracket notation.
    ///
    /// List positions are written as explicit indices and `Null` slots are
    /// skipped. Map keys that themselves contain brackets or only digits do
    /// not survive a second tokenization unchanged.
    ///
    /// # Examples
    /// ```
    /// use serde_form::{FormValue, HashSerializer, FieldSerializer};
    ///
    /// let ser = HashSerializer;
    /// let tree = ser.serialize(ser.empty(), "people[0][name]", "Ada").unwrap();
    /// assert_eq!(
    ///     tree.to_fields(),
    ///     vec![("people[0][name]".to_string(), "Ada".to_string())]
    /// );
    /// ```
    pub fn to_fields(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut path = KeyPath::new();
        self.collect_fields(&mut path, &mut out);
        out
    }

    fn collect_fields(&self, path: &mut KeyPath, out: &mut Vec<(String, String)>) {
        match self {
            FormValue::Null => {}
            FormValue::Scalar(value) => out.push((to_field_name(path), value.clone())),
            FormValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    path.push(PathSegment::Indexed(index));
                    item.collect_fields(path, out);
                    path.pop();
                }
            }
            FormValue::Map(map) => {
                for (key, item) in map {
                    let segment = if path.is_empty() {
                        PathSegment::root(key)
                    } else {
                        PathSegment::named(key)
                    };
                    path.push(segment);
                    item.collect_fields(path, out);
                    path.pop();
                }
            }
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Null => write!(f, "null"),
            FormValue::Scalar(s) => write_quoted(f, s),
            FormValue::List(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            FormValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_quoted(f, k)?;
                    write!(f, ": {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quoted = serde_json::to_string(text).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

impl Index<usize> for FormValue {
    type Output = FormValue;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            FormValue::List(items) => items.get(index).unwrap_or_else(|| {
                panic!(
                    "index {index} out of bounds for list of length {}",
                    items.len()
                )
            }),
            _ => panic!(
                "cannot index into non-list value of type {}",
                self.type_name()
            ),
        }
    }
}

impl IndexMut<usize> for FormValue {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self {
            FormValue::List(items) => {
                let len = items.len();
                items.get_mut(index).unwrap_or_else(|| {
                    panic!("index {index} out of bounds for list of length {len}")
                })
            }
            _ => panic!(
                "cannot index into non-list value of type {}",
                self.type_name()
            ),
        }
    }
}

impl Index<&str> for FormValue {
    type Output = FormValue;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            FormValue::Map(map) => map
                .get(key)
                .unwrap_or_else(|| panic!("key '{key}' not found in map with {} entries", map.len())),
            _ => panic!(
                "cannot index into non-map value of type {}",
                self.type_name()
            ),
        }
    }
}

impl IndexMut<&str> for FormValue {
    fn index_mut(&mut self, key: &str) -> &mut Self::Output {
        match self {
            FormValue::Map(map) => {
                let len = map.len();
                map.get_mut(key)
                    .unwrap_or_else(|| panic!("key '{key}' not found in map with {len} entries"))
            }
            _ => panic!(
                "cannot index into non-map value of type {}",
                self.type_name()
            ),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Scalar(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Scalar(value)
    }
}

impl From<FormValue> for serde_json::Value {
    fn from(value: FormValue) -> Self {
        match value {
            FormValue::Null => serde_json::Value::Null,
            FormValue::Scalar(s) => serde_json::Value::String(s),
            FormValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            FormValue::Map(map) => {
                let mut new_obj = serde_json::Map::new();
                for (k, v) in map {
                    new_obj.insert(k, v.into());
                }
                serde_json::Value::Object(new_obj)
            }
        }
    }
}

impl From<&FormValue> for serde_json::Value {
    fn from(value: &FormValue) -> Self {
        value.clone().into()
    }
}

impl Serialize for FormValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormValue::Null => serializer.serialize_none(),
            FormValue::Scalar(s) => serializer.serialize_str(s),
            FormValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            FormValue::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use serde_json::json;

    use super::{FormMap, FormValue};

    fn sample() -> FormValue {
        let mut person = FormMap::new();
        person.insert("name".to_string(), FormValue::from("Ada"));
        let mut root = FormMap::new();
        root.insert(
            "people".to_string(),
            FormValue::List(vec![FormValue::Map(person)]),
        );
        root.insert(
            "tags".to_string(),
            FormValue::List(vec![FormValue::Null, FormValue::from("b")]),
        );
        FormValue::Map(root)
    }

    #[rstest::rstest]
    fn test_accessors_and_take() {
        let mut value = sample();
        assert!(value.is_map());
        assert_eq!(value.type_name(), "map");
        assert!(value.get("people").is_some_and(FormValue::is_list));
        assert!(value.get("missing").is_none());

        value
            .as_map_mut()
            .unwrap()
            .insert("extra".to_string(), FormValue::from("x"));
        assert_eq!(value.get("extra").and_then(FormValue::as_str), Some("x"));

        let mut list = FormValue::List(vec![]);
        list.as_list_mut().unwrap().push(FormValue::Null);
        assert_eq!(list.as_list().map(Vec::len), Some(1));
        assert!(list.get_index(0).is_some_and(FormValue::is_null));
        assert!(list.get_index(1).is_none());

        let mut taken = FormValue::from("take");
        let prior = taken.take();
        assert!(taken.is_null());
        assert_eq!(prior.as_str(), Some("take"));
    }

    #[rstest::rstest]
    fn test_indexing() {
        let mut value = sample();
        assert_eq!(value["people"][0]["name"].as_str(), Some("Ada"));
        value["tags"][0] = FormValue::from("a");
        assert_eq!(value["tags"][0].as_str(), Some("a"));
    }

    #[rstest::rstest]
    fn test_indexing_panics() {
        let value = FormValue::Null;
        assert!(catch_unwind(AssertUnwindSafe(|| {
            let _ = &value["missing"];
        }))
        .is_err());

        let empty = FormValue::List(Vec::new());
        assert!(catch_unwind(AssertUnwindSafe(|| {
            let _ = &empty[1];
        }))
        .is_err());
    }

    #[rstest::rstest]
    fn test_json_conversion_and_serialize_agree() {
        let value = sample();
        let expected = json!({"people": [{"name": "Ada"}], "tags": [null, "b"]});
        let converted: serde_json::Value = (&value).into();
        assert_eq!(converted, expected);
        assert_eq!(serde_json::to_value(&value).unwrap(), expected);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"people":[{"name":"Ada"}],"tags":[null,"b"]}"#
        );
    }

    #[rstest::rstest]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            r#"{"people": [{"name": "Ada"}], "tags": [null, "b"]}"#
        );
    }

    #[rstest::rstest]
    fn test_display_escapes_quotes() {
        let mut map = FormMap::new();
        map.insert("say \"hi\"".to_string(), FormValue::from("a\"b\\c\n"));
        let rendered = FormValue::Map(map).to_string();
        assert_eq!(rendered, r#"{"say \"hi\"": "a\"b\\c\n"}"#);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["say \"hi\""], "a\"b\\c\n");
    }

    #[rstest::rstest]
    fn test_to_fields_skips_null_slots() {
        assert_eq!(
            sample().to_fields(),
            vec![
                ("people[0][name]".to_string(), "Ada".to_string()),
                ("tags[1]".to_string(), "b".to_string()),
            ]
        );
    }
}
