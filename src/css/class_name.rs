use crate::{AppearanceOptions, theme::AppearanceKey};

/// Derives a class name from the slot and the rules it will carry.
///
/// Identical payloads always map to the same name, so re-rendering an
/// unchanged appearance produces byte-identical CSS.
pub fn generate_class_name(key: AppearanceKey, payload: &str, options: &AppearanceOptions) -> String {
    let mut input = String::with_capacity(key.name().len() + payload.len() + 1);
    input.push_str(key.name());
    input.push('\n');
    input.push_str(payload);

    format!(
        "{}-{}-{:x}",
        options.class_prefix,
        key.name(),
        seahash::hash(input.as_bytes())
    )
}
