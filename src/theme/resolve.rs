use crate::theme::{Appearance, Elements, Variables};

/// The effective variables and elements of an appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAppearance {
    pub variables: Variables,
    pub elements: Elements,
}

/// Layers `appearance` over `defaults`.
///
/// Variables: defaults, then each base theme in order, then the top-level
/// variables. Elements: each base theme in order, then the top-level elements.
/// Later layers win per key; keys no layer supplies stay absent.
pub fn resolve(defaults: &Variables, appearance: &Appearance) -> ResolvedAppearance {
    let mut variables = defaults.clone();
    let mut elements = Elements::new();

    for theme in &appearance.base_theme {
        variables.extend_from(&theme.variables);
        elements.extend_from(&theme.elements);
    }

    variables.extend_from(&appearance.variables);
    elements.extend_from(&appearance.elements);

    ResolvedAppearance {
        variables,
        elements,
    }
}
