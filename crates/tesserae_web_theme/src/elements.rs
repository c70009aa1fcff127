use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{AppearanceKey, deserializers::de_elements};

/// Styling for a single appearance slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementStyle {
    /// A pre-formed class name applied as is.
    Class(String),
    /// Declarations that get a generated class.
    Rule(StyleRule),
}

impl From<&str> for ElementStyle {
    fn from(class: &str) -> Self {
        Self::Class(class.to_string())
    }
}

impl From<String> for ElementStyle {
    fn from(class: String) -> Self {
        Self::Class(class)
    }
}

impl From<StyleRule> for ElementStyle {
    fn from(rule: StyleRule) -> Self {
        Self::Rule(rule)
    }
}

/// A CSS-in-Rust declaration block, keyed by property name or nested selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRule(IndexMap<String, StyleValue>);

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Adds a nested block. `&` in `selector` stands for the generated class.
    pub fn nest(mut self, selector: impl Into<String>, rule: StyleRule) -> Self {
        self.0.insert(selector.into(), StyleValue::Nested(rule));
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> + '_ {
        self.0.iter().map(|(property, value)| (property.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
    Nested(StyleRule),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<StyleRule> for StyleValue {
    fn from(rule: StyleRule) -> Self {
        Self::Nested(rule)
    }
}

/// Per-slot styles of a theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Elements {
    #[serde(deserialize_with = "de_elements")]
    styles: IndexMap<AppearanceKey, ElementStyle>,
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AppearanceKey) -> Option<&ElementStyle> {
        self.styles.get(&key)
    }

    pub fn contains(&self, key: AppearanceKey) -> bool {
        self.styles.contains_key(&key)
    }

    pub fn insert(&mut self, key: AppearanceKey, style: impl Into<ElementStyle>) {
        self.styles.insert(key, style.into());
    }

    pub fn with(mut self, key: AppearanceKey, style: impl Into<ElementStyle>) -> Self {
        self.insert(key, style);
        self
    }

    /// Overlays `other` on top of `self`; slots present in `other` replace ours.
    pub fn extend_from(&mut self, other: &Elements) {
        for (key, style) in &other.styles {
            self.styles.insert(*key, style.clone());
        }
    }

    /// Iterates slots in [`AppearanceKey`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (AppearanceKey, &ElementStyle)> + '_ {
        let mut entries: Vec<_> = self.styles.iter().map(|(key, style)| (*key, style)).collect();
        entries.sort_by_key(|(key, _)| *key);
        entries.into_iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = AppearanceKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_is_sorted_by_key() {
        let elements = Elements::new()
            .with(AppearanceKey::BackButton, StyleRule::new().set("padding", "4px"))
            .with(AppearanceKey::Button, StyleRule::new().set("color", "red"));

        let keys: Vec<_> = elements.keys().collect();
        assert_eq!(keys, vec![AppearanceKey::Button, AppearanceKey::BackButton]);
    }

    #[test]
    fn test_extend_from_replaces_whole_slot() {
        let mut elements = Elements::new().with(
            AppearanceKey::Button,
            StyleRule::new().set("color", "red").set("margin", 0),
        );
        elements.extend_from(&Elements::new().with(AppearanceKey::Button, "my-button"));

        assert_eq!(
            elements.get(AppearanceKey::Button),
            Some(&ElementStyle::Class("my-button".into()))
        );
    }

    #[test]
    fn test_deserialize_class_rule_and_nested_values() {
        let elements: Elements = serde_json::from_str(
            r#"{
                "button": { "color": "red", "padding": 4, "&:hover": { "opacity": 0.5 } },
                "notification": "my-notification"
            }"#,
        )
        .unwrap();

        let expected_rule = StyleRule::new()
            .set("color", "red")
            .set("padding", 4)
            .nest("&:hover", StyleRule::new().set("opacity", 0.5));

        assert_eq!(
            elements.get(AppearanceKey::Button),
            Some(&ElementStyle::Rule(expected_rule))
        );
        assert_eq!(
            elements.get(AppearanceKey::Notification),
            Some(&ElementStyle::Class("my-notification".into()))
        );
    }

    #[test]
    fn test_deserialize_drops_unknown_keys_and_malformed_styles() {
        let elements: Elements = serde_json::from_str(
            r#"{ "button": true, "notAKey": { "color": "red" }, "tab": "", "icon": { "color": "blue" } }"#,
        )
        .unwrap();

        assert_eq!(elements.len(), 1);
        assert!(elements.contains(AppearanceKey::Icon));
    }
}
