use indexmap::IndexMap;
use tracing::{trace, warn};

use super::{
    class_name::generate_class_name,
    properties::{
        css_number, css_property_name, is_valid_property, is_valid_selector, is_valid_value,
    },
};
use crate::{
    AppearanceOptions,
    theme::{AppearanceKey, ElementStyle, Elements, StyleRule, StyleValue},
};

/// CSS generated for an element map, plus the class of every slot in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRules {
    pub rules: Vec<String>,
    pub classes: IndexMap<AppearanceKey, String>,
}

/// Generates class rules for every slot of `elements`, in key order.
///
/// Literal class names produce no rule. Compound keys are registered as
/// `"<base class> <own class>"` when their base slot is styled too.
pub fn element_rules(elements: &Elements, options: &AppearanceOptions) -> ElementRules {
    let mut rules = Vec::new();
    let mut own_classes: IndexMap<AppearanceKey, String> = IndexMap::with_capacity(elements.len());

    for (key, style) in elements.iter() {
        match style {
            ElementStyle::Class(class) => {
                let class = class.trim();
                if class.is_empty() {
                    continue;
                }
                own_classes.insert(key, class.to_string());
            }
            ElementStyle::Rule(rule) => {
                let mut template = Vec::new();
                render_rule("&", rule, &mut template);

                let class = generate_class_name(key, &template.concat(), options);
                trace!(%key, %class, "generated class");

                render_rule(&format!(".{class}"), rule, &mut rules);
                own_classes.insert(key, class);
            }
        }
    }

    let classes = own_classes
        .iter()
        .map(|(key, own)| {
            let class = match key.base().and_then(|base| own_classes.get(&base)) {
                Some(base_class) => format!("{base_class} {own}"),
                None => own.clone(),
            };
            (*key, class)
        })
        .collect();

    ElementRules { rules, classes }
}

fn render_rule(selector: &str, rule: &StyleRule, out: &mut Vec<String>) {
    let mut declarations = String::new();
    let mut nested = Vec::new();

    for (property, value) in rule.iter() {
        if let StyleValue::Nested(inner) = value {
            nested.push((property, inner));
            continue;
        }

        if !is_valid_property(property) {
            warn!(property, "ignoring malformed style property");
            continue;
        }

        let name = css_property_name(property);

        match value {
            StyleValue::Text(text) if is_valid_value(text) => {
                declarations.push_str(&format!("{name}:{text};"));
            }
            StyleValue::Text(text) => {
                warn!(property, value = %text, "ignoring malformed style value");
            }
            StyleValue::Number(number) => {
                if let Some(text) = css_number(&name, *number) {
                    declarations.push_str(&format!("{name}:{text};"));
                }
            }
            StyleValue::Nested(_) => {}
        }
    }

    if !declarations.is_empty() {
        out.push(format!("{selector}{{{declarations}}}"));
    }

    for (nested_selector, inner) in nested {
        if !is_valid_selector(nested_selector) {
            warn!(selector = nested_selector, "ignoring malformed nested selector");
            continue;
        }

        if nested_selector.starts_with('@') {
            let mut inner_rules = Vec::new();
            render_rule(selector, inner, &mut inner_rules);
            if !inner_rules.is_empty() {
                out.push(format!("{nested_selector}{{{}}}", inner_rules.concat()));
            }
        } else {
            let scoped = nest_selector(selector, nested_selector);
            if scoped.is_empty() {
                warn!(selector = nested_selector, "ignoring empty nested selector");
                continue;
            }
            render_rule(&scoped, inner, out);
        }
    }
}

/// Scopes every entry of `nested` under every entry of `parent`.
///
/// `&` stands for the parent entry; entries without it become descendants.
fn nest_selector(parent: &str, nested: &str) -> String {
    let parents = split_selector_list(parent);
    let mut scoped = Vec::new();

    for part in split_selector_list(nested) {
        for parent in &parents {
            if part.contains('&') {
                scoped.push(part.replace('&', parent));
            } else {
                scoped.push(format!("{parent} {part}"));
            }
        }
    }

    scoped.join(", ")
}

/// Splits a selector list on top-level commas, keeping `:is(a, b)` intact.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());

    parts.retain(|part| !part.is_empty());
    parts
}
