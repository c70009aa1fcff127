#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr, sync::LazyLock};

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{UnknownKeyError, deserializers::de_variables};

/// Semantic design tokens that can be overridden by an appearance.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn css_token(&self) -> &'static str)]
#[func(pub fn has_shades(&self) -> bool)]
pub enum Variable {
    /// Base background of every surface.
    #[assoc(name = "colorBackground")]
    #[assoc(css_token = "color-background")]
    #[assoc(has_shades = false)]
    ColorBackground,
    /// Default text color.
    #[assoc(name = "colorForeground")]
    #[assoc(css_token = "color-foreground")]
    #[assoc(has_shades = false)]
    ColorForeground,
    /// Brand accent used by primary actions.
    #[assoc(name = "colorPrimary")]
    #[assoc(css_token = "color-primary")]
    #[assoc(has_shades = true)]
    ColorPrimary,
    /// Text drawn on top of the primary color.
    #[assoc(name = "colorPrimaryForeground")]
    #[assoc(css_token = "color-primary-foreground")]
    #[assoc(has_shades = false)]
    ColorPrimaryForeground,
    /// Accent used by secondary actions.
    #[assoc(name = "colorSecondary")]
    #[assoc(css_token = "color-secondary")]
    #[assoc(has_shades = true)]
    ColorSecondary,
    /// Text drawn on top of the secondary color.
    #[assoc(name = "colorSecondaryForeground")]
    #[assoc(css_token = "color-secondary-foreground")]
    #[assoc(has_shades = false)]
    ColorSecondaryForeground,
    /// Background of unread counters.
    #[assoc(name = "colorCounter")]
    #[assoc(css_token = "color-counter")]
    #[assoc(has_shades = true)]
    ColorCounter,
    /// Text drawn on top of the counter color.
    #[assoc(name = "colorCounterForeground")]
    #[assoc(css_token = "color-counter-foreground")]
    #[assoc(has_shades = false)]
    ColorCounterForeground,
    /// Borders, dividers and muted surfaces.
    #[assoc(name = "colorNeutral")]
    #[assoc(css_token = "color-neutral")]
    #[assoc(has_shades = true)]
    ColorNeutral,
    /// Color of drop shadows.
    #[assoc(name = "colorShadow")]
    #[assoc(css_token = "color-shadow")]
    #[assoc(has_shades = false)]
    ColorShadow,
    /// Base font size.
    #[assoc(name = "fontSize")]
    #[assoc(css_token = "font-size")]
    #[assoc(has_shades = false)]
    FontSize,
    /// Base corner radius.
    #[assoc(name = "borderRadius")]
    #[assoc(css_token = "border-radius")]
    #[assoc(has_shades = false)]
    BorderRadius,
}

impl Variable {
    /// Every token, in output order.
    pub const ALL: [Variable; 12] = [
        Variable::ColorBackground,
        Variable::ColorForeground,
        Variable::ColorPrimary,
        Variable::ColorPrimaryForeground,
        Variable::ColorSecondary,
        Variable::ColorSecondaryForeground,
        Variable::ColorCounter,
        Variable::ColorCounterForeground,
        Variable::ColorNeutral,
        Variable::ColorShadow,
        Variable::FontSize,
        Variable::BorderRadius,
    ];
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variable {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|variable| variable.name() == s)
            .ok_or_else(|| UnknownKeyError(s.to_string()))
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

static DEFAULT_VARIABLES: LazyLock<Variables> = LazyLock::new(|| {
    Variables::from_json(include_str!("../themes/default.json"))
        .expect("bundled default variables are valid json")
});

/// A set of token values. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    #[serde(deserialize_with = "de_variables")]
    values: IndexMap<Variable, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in variables every appearance is resolved against.
    pub fn defaults() -> &'static Variables {
        &DEFAULT_VARIABLES
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Variables, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn get(&self, variable: Variable) -> Option<&str> {
        self.values.get(&variable).map(String::as_str)
    }

    /// Sets a token. An empty value clears it instead.
    pub fn set(&mut self, variable: Variable, value: impl Into<String>) {
        let value = value.into();

        if value.trim().is_empty() {
            self.values.shift_remove(&variable);
        } else {
            self.values.insert(variable, value);
        }
    }

    pub fn with(mut self, variable: Variable, value: impl Into<String>) -> Self {
        self.set(variable, value);
        self
    }

    pub fn remove(&mut self, variable: Variable) -> Option<String> {
        self.values.shift_remove(&variable)
    }

    /// Overlays `other` on top of `self`; tokens present in `other` win.
    pub fn extend_from(&mut self, other: &Variables) {
        for (variable, value) in &other.values {
            self.values.insert(*variable, value.clone());
        }
    }

    /// Iterates present tokens in [`Variable::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &str)> + '_ {
        Variable::ALL
            .into_iter()
            .filter_map(|variable| self.get(variable).map(|value| (variable, value)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Variable, String)> for Variables {
    fn from_iter<I: IntoIterator<Item = (Variable, String)>>(iter: I) -> Self {
        let mut variables = Variables::new();
        for (variable, value) in iter {
            variables.set(variable, value);
        }
        variables
    }
}
