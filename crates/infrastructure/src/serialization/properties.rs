//! Java `.properties` decoding.

use std::collections::HashMap;

use super::SerializationError;

/// Decodes Java properties text.
///
/// Follows the `java.util.Properties` format: `key=value`, `key: value`
/// and `key value` lines, `#`/`!` comments, line continuations and
/// `\uXXXX` escapes.
///
/// # Errors
/// Returns an error if the content is not valid properties text.
pub fn from_properties(content: &str) -> Result<HashMap<String, String>, SerializationError> {
    Ok(java_properties::read(content.as_bytes())?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_basic_properties() {
        let content = "\
# database settings
db.host=localhost
db.port: 5432
db.name postgres
";
        let props = from_properties(content).expect("valid properties");

        assert_eq!(props.len(), 3);
        assert_eq!(props["db.host"], "localhost");
        assert_eq!(props["db.port"], "5432");
        assert_eq!(props["db.name"], "postgres");
    }

    #[test]
    fn test_continuation_and_placeholders() {
        let content = "url=jdbc:postgresql://${db.host}:\\\n    ${db.port:5432}\n";
        let props = from_properties(content).expect("valid properties");

        assert_eq!(props["url"], "jdbc:postgresql://${db.host}:${db.port:5432}");
    }

    #[test]
    fn test_empty_content() {
        let props = from_properties("").expect("valid properties");
        assert!(props.is_empty());
    }
}
