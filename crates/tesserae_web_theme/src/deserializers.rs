use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use smallvec::SmallVec;
use tracing::warn;

use crate::{AppearanceKey, ElementStyle, Theme, Variable};

pub fn de_theme_or_list<'de, D>(deserializer: D) -> Result<SmallVec<[Theme; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    let themes = match Value::deserialize(deserializer)? {
        Value::Null => SmallVec::new(),
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<Theme>(value) {
                Ok(theme) => Some(theme),
                Err(err) => {
                    warn!(index, %err, "ignoring malformed base theme");
                    None
                }
            })
            .collect(),
        value @ Value::Object(_) => match serde_json::from_value::<Theme>(value) {
            Ok(theme) => SmallVec::from_buf([theme]),
            Err(err) => {
                warn!(%err, "ignoring malformed base theme");
                SmallVec::new()
            }
        },
        other => {
            warn!(value = %other, "ignoring base theme that is neither a theme nor a list");
            SmallVec::new()
        }
    };

    Ok(themes)
}

/// Reads a JSON object; `null` and values of any other type count as empty.
fn object_entries<'de, D>(deserializer: D, field: &str) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(entries) => Ok(entries),
        Value::Null => Ok(Map::new()),
        other => {
            warn!(field, value = %other, "ignoring appearance field that is not an object");
            Ok(Map::new())
        }
    }
}

pub fn de_variables<'de, D>(deserializer: D) -> Result<IndexMap<Variable, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = object_entries(deserializer, "variables")?;
    let mut variables = IndexMap::with_capacity(raw.len());

    for (name, value) in raw {
        let Ok(variable) = name.parse::<Variable>() else {
            warn!(variable = %name, "ignoring unknown appearance variable");
            continue;
        };

        match value {
            Value::String(value) if !value.trim().is_empty() => {
                variables.insert(variable, value);
            }
            Value::Null => {}
            other => warn!(%variable, value = %other, "ignoring malformed appearance variable"),
        }
    }

    Ok(variables)
}

pub fn de_elements<'de, D>(deserializer: D) -> Result<IndexMap<AppearanceKey, ElementStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = object_entries(deserializer, "elements")?;
    let mut elements = IndexMap::with_capacity(raw.len());

    for (name, value) in raw {
        let Ok(key) = name.parse::<AppearanceKey>() else {
            warn!(key = %name, "ignoring unknown appearance key");
            continue;
        };

        if value.is_null() {
            continue;
        }

        match serde_json::from_value::<ElementStyle>(value) {
            Ok(ElementStyle::Class(class)) if class.trim().is_empty() => {
                warn!(%key, "ignoring empty class name");
            }
            Ok(style) => {
                elements.insert(key, style);
            }
            Err(err) => warn!(%key, %err, "ignoring malformed element style"),
        }
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use crate::Appearance;

    #[test]
    fn test_base_theme_accepts_single_theme() {
        let appearance =
            Appearance::from_json(r##"{ "baseTheme": { "variables": { "colorPrimary": "#111" } } }"##)
                .unwrap();
        assert_eq!(appearance.base_theme.len(), 1);
    }

    #[test]
    fn test_base_theme_accepts_list_and_null() {
        let appearance = Appearance::from_json(r#"{ "baseTheme": [{}, {}] }"#).unwrap();
        assert_eq!(appearance.base_theme.len(), 2);

        let appearance = Appearance::from_json(r#"{ "baseTheme": null }"#).unwrap();
        assert!(appearance.base_theme.is_empty());
    }

    #[test]
    fn test_wrongly_typed_fields_are_absent() {
        let appearance = Appearance::from_json(
            r##"{ "baseTheme": "dark", "variables": ["#111"], "elements": 4 }"##,
        )
        .unwrap();

        assert!(appearance.base_theme.is_empty());
        assert!(appearance.variables.is_empty());
        assert!(appearance.elements.is_empty());
    }

    #[test]
    fn test_malformed_base_theme_in_list_is_dropped() {
        let appearance = Appearance::from_json(
            r##"{ "baseTheme": [true, { "variables": { "colorPrimary": "#111" } }] }"##,
        )
        .unwrap();

        assert_eq!(appearance.base_theme.len(), 1);
    }

    #[test]
    fn test_null_maps_are_absent() {
        let appearance =
            Appearance::from_json(r#"{ "variables": null, "elements": null }"#).unwrap();
        assert!(appearance.variables.is_empty());
        assert!(appearance.elements.is_empty());
    }
}
