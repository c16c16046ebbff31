//! Property stores: the key/value bindings placeholders resolve against.

mod source;
mod stack;
mod store;

pub use source::PropertySource;
pub use stack::PropertyStack;
pub use store::PropertyStore;
