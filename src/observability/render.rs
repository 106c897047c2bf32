//! Serialization of values to human-readable text

use eyre::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::cli::OutputFormat;

/// One indentation level in rendered output
pub const INDENT: &[u8] = b"  ";

/// Render any serializable value in the requested format.
///
/// JSON is pretty-printed with two spaces per nesting level and fields in
/// declaration order. The returned text never ends with a newline.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
            value.serialize(&mut ser).context("Failed to serialize as JSON")?;
            String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value).context("Failed to serialize as YAML")?;
            Ok(yaml.trim_end_matches('\n').to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use std::collections::{BTreeMap, HashMap};

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("value refuses to serialize"))
        }
    }

    #[derive(Serialize)]
    struct Nested {
        outer: BTreeMap<String, BTreeMap<String, String>>,
    }

    #[test]
    fn test_json_two_space_indent() {
        let mut inner = BTreeMap::new();
        inner.insert("k".to_string(), "v".to_string());
        let mut outer = BTreeMap::new();
        outer.insert("inner".to_string(), inner);

        let text = render(&Nested { outer }, OutputFormat::Json).unwrap();
        let expected = "{\n  \"outer\": {\n    \"inner\": {\n      \"k\": \"v\"\n    }\n  }\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_rerender_is_stable() {
        let value = serde_json::json!({"a": 1, "b": {"c": [1, 2]}});
        let first = render(&value, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&first).unwrap();
        let second = render(&parsed, OutputFormat::Json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_yaml_has_no_trailing_newline() {
        let mut map = BTreeMap::new();
        map.insert("key", "value");
        let text = render(&map, OutputFormat::Yaml).unwrap();
        assert_eq!(text, "key: value");
    }

    #[test]
    fn test_failing_value_is_an_error() {
        for format in [OutputFormat::Json, OutputFormat::Yaml] {
            let err = render(&Unserializable, format).unwrap_err();
            assert!(err.chain().any(|cause| cause.to_string().contains("value refuses to serialize")));
        }
    }

    #[test]
    fn test_non_string_map_keys_fail_as_json() {
        let mut map = HashMap::new();
        map.insert(vec![1u8, 2], "bytes");
        assert!(render(&map, OutputFormat::Json).is_err());
    }
}
