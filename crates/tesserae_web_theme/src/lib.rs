//! Appearance data model: design tokens, styleable slots and themes.
//!
//! Themes are plain serde types, so an appearance can be written in Rust or
//! loaded from JSON. Parsing is tolerant: unknown keys and malformed values
//! are dropped with a warning instead of failing the whole appearance.

use thiserror::Error;

mod deserializers;

mod elements;
pub use elements::*;

mod keys;
pub use keys::*;

mod schema;
pub use schema::*;

mod variables;
pub use variables::*;

/// Returned when a token or slot name is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key `{0}`")]
pub struct UnknownKeyError(pub String);
