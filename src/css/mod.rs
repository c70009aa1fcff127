//! Materializes a resolved appearance into CSS text.
//!
//! Variables become custom properties scoped to the provider's container;
//! element styles become generated class rules.

mod class_name;
pub use class_name::*;

mod elements;
pub use elements::*;

mod properties;
pub use properties::{css_number, css_property_name};

mod registry;
pub use registry::*;

mod variables;
pub use variables::*;

/// Joins variable rules and element rules, variables first.
pub fn stylesheet_text(variable_rules: &[String], element_rules: &[String]) -> String {
    variable_rules
        .iter()
        .chain(element_rules)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_come_before_elements() {
        let text = stylesheet_text(&["a{}".into(), "b{}".into()], &[".c{}".into()]);
        assert_eq!(text, "a{}\nb{}\n.c{}");
    }

    #[test]
    fn test_empty_inputs_produce_empty_text() {
        assert_eq!(stylesheet_text(&[], &[]), "");
    }
}
