//! Escape-aware scanner for delimited tokens.

use propsub_domain::{DomainError, DomainResult};
use tracing::trace;

use super::handler::TokenHandler;

/// Marker that suppresses the delimiter immediately following it.
const ESCAPE: u8 = b'\\';

/// Scans text for `open ... close` tokens and replaces each one with the
/// output of a [`TokenHandler`].
///
/// The scan is a single left-to-right pass:
/// - `\` directly before `open` makes it literal text; the `\` is dropped.
/// - Inside a token, `\` directly before `close` makes it part of the
///   content; the `\` is dropped.
/// - The first unescaped `close` ends the token. Tokens do not nest.
/// - A token with no closing delimiter is emitted verbatim and the handler
///   is never called for it.
///
/// # Examples
///
/// ```
/// use propsub_application::token_scanner::TokenScanner;
///
/// let scanner = TokenScanner::new("${", "}", |content: &str| content.to_uppercase())?;
///
/// assert_eq!(scanner.parse("Hello ${name}!"), "Hello NAME!");
/// assert_eq!(scanner.parse(r"Hello \${name}!"), "Hello ${name}!");
/// assert_eq!(scanner.parse("Hello ${name"), "Hello ${name");
/// # Ok::<(), propsub_domain::DomainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TokenScanner<H> {
    open: String,
    close: String,
    handler: H,
}

impl<H: TokenHandler> TokenScanner<H> {
    /// Creates a scanner for the given delimiter pair.
    ///
    /// # Errors
    /// Returns an error if either delimiter is empty.
    pub fn new(open: impl Into<String>, close: impl Into<String>, handler: H) -> DomainResult<Self> {
        let open = open.into();
        let close = close.into();

        if open.is_empty() {
            return Err(DomainError::EmptyOpenDelimiter);
        }
        if close.is_empty() {
            return Err(DomainError::EmptyCloseDelimiter);
        }

        Ok(Self {
            open,
            close,
            handler,
        })
    }

    /// Creates a scanner for compile-time delimiters that are known to be non-empty.
    pub(crate) fn from_static(open: &'static str, close: &'static str, handler: H) -> Self {
        debug_assert!(!open.is_empty() && !close.is_empty());
        Self {
            open: open.to_string(),
            close: close.to_string(),
            handler,
        }
    }

    /// Returns the opening delimiter.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Returns the closing delimiter.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Returns the handler tokens are delegated to.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Replaces every token in `text` with its handler output.
    #[must_use]
    pub fn parse(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let Some(mut start) = text.find(self.open.as_str()) else {
            return text.to_string();
        };

        let mut builder = String::with_capacity(text.len());
        let mut expression = String::new();
        let mut offset = 0;

        loop {
            if is_escaped(text, start, offset) {
                // Literal open delimiter: drop the marker, keep scanning after it.
                builder.push_str(&text[offset..start - 1]);
                builder.push_str(&self.open);
                offset = start + self.open.len();
            } else {
                builder.push_str(&text[offset..start]);
                offset = start + self.open.len();
                expression.clear();

                match self.find_close(text, &mut offset, &mut expression) {
                    Some(end) => {
                        trace!(content = %expression, "resolving token");
                        builder.push_str(&self.handler.handle_token(&expression));
                        offset = end + self.close.len();
                    }
                    None => {
                        trace!(position = start, "unterminated token");
                        builder.push_str(&text[start..]);
                        offset = text.len();
                    }
                }
            }

            match find_from(text, &self.open, offset) {
                Some(next) => start = next,
                None => break,
            }
        }

        builder.push_str(&text[offset..]);
        builder
    }

    /// Finds the first unescaped close delimiter at or after `offset`,
    /// accumulating the token content into `expression`.
    ///
    /// Escaped close delimiters are unescaped into `expression` and advance
    /// `offset` past them. Returns the position of the terminating delimiter.
    fn find_close(&self, text: &str, offset: &mut usize, expression: &mut String) -> Option<usize> {
        let mut end = find_from(text, &self.close, *offset)?;

        while is_escaped(text, end, *offset) {
            expression.push_str(&text[*offset..end - 1]);
            expression.push_str(&self.close);
            *offset = end + self.close.len();
            end = find_from(text, &self.close, *offset)?;
        }

        expression.push_str(&text[*offset..end]);
        Some(end)
    }
}

/// Returns true if the byte before `index` is an escape marker lying at or
/// after `floor`.
fn is_escaped(text: &str, index: usize, floor: usize) -> bool {
    index > floor && text.as_bytes()[index - 1] == ESCAPE
}

fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .find(needle)
        .map(|position| position + from)
}
