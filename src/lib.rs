//! Themeable styling for tesserae web components.
//!
//! An [`AppearanceProvider`] resolves an [`Appearance`](theme::Appearance)
//! against the built-in variables, turns it into scoped CSS custom properties
//! and generated class rules, and keeps them in a single style node. Rendering
//! code reads the generated classes through [`use_appearance`].

pub mod css;

pub mod stylesheet;

pub mod theme;

mod error;
pub use error::*;

mod options;
pub use options::*;

mod provider;
pub use provider::*;
