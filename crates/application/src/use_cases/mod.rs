//! Application use cases (business logic orchestration).

mod resolve_template;

pub use resolve_template::*;
