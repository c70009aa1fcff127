use std::borrow::Cow;

use tracing::warn;

const UNITLESS_PROPERTIES: &[&str] = &[
    "animation-iteration-count",
    "aspect-ratio",
    "column-count",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "grid-column",
    "grid-row",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "stroke-opacity",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
];

/// Converts a camelCase property name into its CSS spelling.
///
/// Custom properties and names that already contain a dash are kept as is.
pub fn css_property_name(name: &str) -> Cow<'_, str> {
    if name.contains('-') || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }

    let mut css = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") {
        css.push('-');
    }

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            css.push('-');
            css.push(c.to_ascii_lowercase());
        } else {
            css.push(c);
        }
    }

    Cow::Owned(css)
}

/// Formats a numeric value, adding `px` where the property takes a length.
pub fn css_number(property: &str, value: f64) -> Option<String> {
    if !value.is_finite() {
        warn!(property, value, "ignoring non-finite style value");
        return None;
    }

    if value == 0.0 || UNITLESS_PROPERTIES.contains(&property) {
        Some(value.to_string())
    } else {
        Some(format!("{value}px"))
    }
}

/// Whether `value` can be written into a declaration without breaking out of it.
pub(crate) fn is_valid_value(value: &str) -> bool {
    !value.trim().is_empty() && !value.contains(['{', '}', '<'])
}

/// Whether `name` can be written as a declaration's property.
pub(crate) fn is_valid_property(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['{', '}', ';', ':', '<'])
}

/// Whether `selector` can be used as a nested selector.
pub(crate) fn is_valid_selector(selector: &str) -> bool {
    !selector.trim().is_empty() && !selector.contains(['{', '}', ';', '<'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_becomes_kebab_case() {
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(css_property_name("color"), "color");
    }

    #[test]
    fn test_vendor_prefixes() {
        assert_eq!(css_property_name("WebkitAppearance"), "-webkit-appearance");
        assert_eq!(css_property_name("msTransform"), "-ms-transform");
    }

    #[test]
    fn test_dashed_names_are_untouched() {
        assert_eq!(css_property_name("--tesserae-Gap"), "--tesserae-Gap");
        assert_eq!(css_property_name("font-size"), "font-size");
    }

    #[test]
    fn test_numbers_get_px_unless_unitless() {
        assert_eq!(css_number("padding", 4.0).as_deref(), Some("4px"));
        assert_eq!(css_number("padding", 0.0).as_deref(), Some("0"));
        assert_eq!(css_number("opacity", 0.5).as_deref(), Some("0.5"));
        assert_eq!(css_number("z-index", 10.0).as_deref(), Some("10"));
        assert_eq!(css_number("width", f64::NAN), None);
    }

    #[test]
    fn test_property_names_that_escape_the_block_are_invalid() {
        assert!(is_valid_property("background-color"));
        assert!(is_valid_property("--tesserae-gap"));
        assert!(!is_valid_property("color:red}body{display"));
        assert!(!is_valid_property("color;x"));
        assert!(!is_valid_property(""));
    }

    #[test]
    fn test_values_that_escape_the_block_are_invalid() {
        assert!(is_valid_value("1px solid red"));
        assert!(!is_valid_value("red} body{color:blue"));
        assert!(!is_valid_value("</style>"));
        assert!(!is_valid_value("   "));
    }
}
