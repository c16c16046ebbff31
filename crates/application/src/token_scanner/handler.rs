//! The resolver capability a scanner delegates token content to.

/// Produces the replacement text for the content of one token.
///
/// Any `Fn(&str) -> String` closure is a handler.
pub trait TokenHandler {
    /// Returns the text that replaces a token whose inner content is `content`.
    fn handle_token(&self, content: &str) -> String;
}

impl<F> TokenHandler for F
where
    F: Fn(&str) -> String,
{
    fn handle_token(&self, content: &str) -> String {
        self(content)
    }
}
