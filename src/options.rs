use serde::{Deserialize, Serialize};

use crate::AppearanceError;

/// Naming used when materializing an appearance into CSS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppearanceOptions {
    /// Prefix of generated class names.
    pub class_prefix: String,
    /// Prefix of custom property names, without the leading `--`.
    pub variable_prefix: String,
    /// Attribute that marks the container variables are scoped to.
    pub scope_attribute: String,
    /// Whether color tokens also declare alpha steps.
    pub generate_shades: bool,
}

impl Default for AppearanceOptions {
    fn default() -> Self {
        Self {
            class_prefix: "tesserae".into(),
            variable_prefix: "tesserae".into(),
            scope_attribute: "data-tesserae-scope".into(),
            generate_shades: true,
        }
    }
}

impl AppearanceOptions {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<AppearanceOptions, AppearanceError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    pub fn scope_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.scope_attribute = attribute.into();
        self
    }

    pub fn generate_shades(mut self, generate_shades: bool) -> Self {
        self.generate_shades = generate_shades;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_missing_fields_with_defaults() {
        let options = AppearanceOptions::from_json(r#"{ "classPrefix": "acme" }"#).unwrap();

        assert_eq!(options.class_prefix, "acme");
        assert_eq!(options.variable_prefix, "tesserae");
        assert!(options.generate_shades);
    }

    #[test]
    fn test_from_json_reports_invalid_input() {
        let err = AppearanceOptions::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppearanceError::Parse(_)));
    }
}
