use tracing::warn;

use super::properties::is_valid_value;
use crate::{
    AppearanceOptions,
    theme::{Variable, Variables},
};

const SHADE_STEPS: [u16; 11] = [25, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Selector of the container an appearance's variables are scoped to.
pub fn scope_selector(id: &str, options: &AppearanceOptions) -> String {
    let mut escaped = String::with_capacity(id.len());
    for c in id.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    format!("[{}=\"{escaped}\"]", options.scope_attribute)
}

/// Custom property a token is declared as, e.g. `--tesserae-color-primary`.
pub fn custom_property(variable: Variable, options: &AppearanceOptions) -> String {
    format!("--{}-{}", options.variable_prefix, variable.css_token())
}

/// One rule per present token, in [`Variable::ALL`] order.
pub fn variable_rules(variables: &Variables, id: &str, options: &AppearanceOptions) -> Vec<String> {
    let selector = scope_selector(id, options);
    let mut rules = Vec::with_capacity(variables.len());

    for (variable, value) in variables.iter() {
        if !is_valid_value(value) {
            warn!(%variable, value, "ignoring malformed variable value");
            continue;
        }

        let property = custom_property(variable, options);
        let mut declarations = format!("{property}:{value};");

        if options.generate_shades && variable.has_shades() {
            for step in SHADE_STEPS {
                let percent = f32::from(step) / 10.;
                declarations.push_str(&format!(
                    "{property}-{step}:color-mix(in srgb, var({property}) {percent}%, transparent);"
                ));
            }
        }

        rules.push(format!("{selector}{{{declarations}}}"));
    }

    rules
}
