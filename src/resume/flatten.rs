// src/resume/flatten.rs
//! Flattens structured resume data (YAML/JSON) into readable text

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Common view over a decoded document so both structured formats flatten
/// through the same rules.
#[derive(Debug)]
pub(crate) enum Node {
    Map(Vec<(String, Node)>),
    Seq(Vec<Node>),
    Scalar(String),
}

impl Node {
    pub(crate) fn from_yaml(value: &YamlValue) -> Node {
        match value {
            YamlValue::Mapping(map) => Node::Map(
                map.iter()
                    .map(|(key, child)| (yaml_scalar_string(key), Node::from_yaml(child)))
                    .collect(),
            ),
            YamlValue::Sequence(items) => {
                Node::Seq(items.iter().map(Node::from_yaml).collect())
            }
            YamlValue::Tagged(tagged) => Node::from_yaml(&tagged.value),
            scalar => Node::Scalar(yaml_scalar_string(scalar)),
        }
    }

    pub(crate) fn from_json(value: &JsonValue) -> Node {
        match value {
            JsonValue::Object(map) => Node::Map(
                map.iter()
                    .map(|(key, child)| (key.clone(), Node::from_json(child)))
                    .collect(),
            ),
            JsonValue::Array(items) => Node::Seq(items.iter().map(Node::from_json).collect()),
            scalar => Node::Scalar(json_scalar_string(scalar)),
        }
    }
}

fn yaml_scalar_string(value: &YamlValue) -> String {
    match value {
        YamlValue::String(text) => text.clone(),
        YamlValue::Bool(flag) => flag.to_string(),
        YamlValue::Number(number) => number.to_string(),
        YamlValue::Null => "null".to_string(),
        // Mapping keys may themselves be collections; render them inline
        other => serde_yaml::to_string(other)
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
    }
}

fn json_scalar_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Render the whole document. Top-level mapping keys become upper-cased
/// section headers separated by blank lines; everything below follows the
/// generic indentation rules.
pub(crate) fn flatten(root: &Node) -> String {
    let mut out = String::new();

    match root {
        Node::Map(entries) => {
            for (key, value) in entries {
                out.push('\n');
                out.push_str(&key.to_uppercase().replace('_', " "));
                out.push_str(":\n");
                write_value(value, 1, &mut out);
            }
        }
        other => write_value(other, 0, &mut out),
    }

    out.trim().to_string()
}

fn write_value(value: &Node, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);

    match value {
        Node::Map(entries) => {
            for (key, child) in entries {
                out.push_str(&pad);
                out.push_str(key);
                out.push_str(": ");
                match child {
                    Node::Scalar(text) => {
                        out.push_str(text);
                        out.push('\n');
                    }
                    nested => {
                        out.push('\n');
                        write_value(nested, indent + 1, out);
                    }
                }
            }
        }
        Node::Seq(items) => {
            for item in items {
                out.push_str(&pad);
                out.push_str("- ");
                match item {
                    Node::Scalar(text) => {
                        out.push_str(text);
                        out.push('\n');
                    }
                    // The nested value continues on the same line with its
                    // own deeper indentation
                    nested => write_value(nested, indent + 1, out),
                }
            }
        }
        Node::Scalar(text) => {
            out.push_str(&pad);
            out.push_str(text);
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten_yaml(source: &str) -> String {
        let value: YamlValue = serde_yaml::from_str(source).expect("fixture must parse");
        flatten(&Node::from_yaml(&value))
    }

    #[test]
    fn top_level_keys_become_section_headers() {
        let text = flatten_yaml("contact_info:\n  email: jane@example.com\nsummary: Engineer\n");
        assert_eq!(
            text,
            "CONTACT INFO:\n  email: jane@example.com\n\nSUMMARY:\n  Engineer"
        );
    }

    #[test]
    fn scalar_sequences_get_dash_prefixes() {
        let text = flatten_yaml("skills:\n  - Go\n  - Rust\n");
        assert_eq!(text, "SKILLS:\n  - Go\n  - Rust");
    }

    #[test]
    fn mapping_elements_continue_after_the_dash() {
        let text = flatten_yaml("experience:\n  - company: Acme\n    years: 3\n");
        assert_eq!(text, "EXPERIENCE:\n  -     company: Acme\n    years: 3");
    }

    #[test]
    fn nested_mappings_indent_one_level() {
        let text = flatten_yaml("education:\n  degree:\n    level: MSc\n");
        assert_eq!(text, "EDUCATION:\n  degree: \n    level: MSc");
    }

    #[test]
    fn non_string_scalars_render_plainly() {
        let text = flatten_yaml("details:\n  remote: true\n  years: 7\n  middle_name: null\n");
        assert_eq!(
            text,
            "DETAILS:\n  remote: true\n  years: 7\n  middle_name: null"
        );
    }

    #[test]
    fn json_and_yaml_flatten_identically() {
        let json: JsonValue =
            serde_json::from_str(r#"{"name": "Alice", "skills": ["Go", "Rust"]}"#)
                .expect("fixture must parse");
        let from_json = flatten(&Node::from_json(&json));

        let from_yaml = flatten_yaml("name: Alice\nskills:\n  - Go\n  - Rust\n");

        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json, "NAME:\n  Alice\n\nSKILLS:\n  - Go\n  - Rust");
    }

    #[test]
    fn non_mapping_documents_flatten_without_headers() {
        let text = flatten_yaml("- one\n- two\n");
        assert_eq!(text, "- one\n- two");
    }
}
