//! Theme system: design tokens, styleable slots and appearance resolution.
//!
//! An appearance is layered over the built-in default variables and any base
//! themes it names, producing one effective set of variables and elements.

pub use tesserae_web_theme::*;

mod resolve;
pub use resolve::*;
