use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::de_theme_or_list;
use crate::{Elements, Variables};

/// Token values paired with per-slot styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub variables: Variables,
    pub elements: Elements,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub fn $name() -> &'static Theme {
                static THEME: LazyLock<Theme> = LazyLock::new(|| {
                    Theme::from_json(include_str!($path)).expect("bundled theme is valid json")
                });

                &THEME
            }
        )+
    };
}

impl Theme {
    generate_builtin_themes!(["../themes/dark.json", dark]);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn elements(mut self, elements: Elements) -> Self {
        self.elements = elements;
        self
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

/// Everything a caller can configure: a top-level theme layered over
/// zero or more base themes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appearance {
    #[serde(deserialize_with = "de_theme_or_list")]
    pub base_theme: SmallVec<[Theme; 1]>,
    pub variables: Variables,
    pub elements: Elements,
}

impl Appearance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Appearance, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    /// Appends a base theme. Later base themes take precedence over earlier ones.
    pub fn base_theme<T: AsRef<Theme>>(mut self, theme: T) -> Self {
        self.base_theme.push(theme.as_ref().clone());
        self
    }

    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn elements(mut self, elements: Elements) -> Self {
        self.elements = elements;
        self
    }
}

impl From<Theme> for Appearance {
    fn from(theme: Theme) -> Self {
        Self {
            base_theme: SmallVec::new(),
            variables: theme.variables,
            elements: theme.elements,
        }
    }
}
