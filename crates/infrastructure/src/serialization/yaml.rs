//! YAML decoding with key flattening.

use std::collections::HashMap;

use serde_yaml::Value;

use super::SerializationError;

/// Decodes a YAML document into flat properties.
///
/// Nested mappings are joined with `.` (`server.port`), sequence items are
/// indexed (`hosts[0]`), scalars keep their text and `null` becomes an
/// empty string. A document that is not a mapping yields no properties.
///
/// # Errors
/// Returns an error if the content is not valid YAML.
pub fn from_yaml(content: &str) -> Result<HashMap<String, String>, SerializationError> {
    let document: Value = serde_yaml::from_str(content)?;
    let mut properties = HashMap::new();
    flatten(None, &document, &mut properties);
    Ok(properties)
}

fn flatten(prefix: Option<&str>, value: &Value, properties: &mut HashMap<String, String>) {
    match value {
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                let key = scalar_text(key);
                let full = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
                flatten(Some(&full), child, properties);
            }
        }
        Value::Sequence(items) => {
            let prefix = prefix.unwrap_or_default();
            for (index, item) in items.iter().enumerate() {
                flatten(Some(&format!("{prefix}[{index}]")), item, properties);
            }
        }
        Value::Tagged(tagged) => flatten(prefix, &tagged.value, properties),
        scalar => {
            if let Some(key) = prefix {
                properties.insert(key.to_string(), scalar_text(scalar));
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim_end().to_string())
            .unwrap_or_default(),
    }
}
