//! Generic token scanning
//!
//! Locates `open ... close` delimited regions in a string, honoring
//! backslash escapes, and hands each region's content to a [`TokenHandler`].

mod handler;
mod scanner;

pub use handler::TokenHandler;
pub use scanner::TokenScanner;
