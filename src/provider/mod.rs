//! The provider that owns an appearance's stylesheet and exposes its classes.

use std::rc::Rc;

use tracing::debug;

use crate::{
    AppearanceOptions,
    css::{ClassRegistry, ElementRules, element_rules, stylesheet_text, variable_rules},
    stylesheet::{SheetState, Stylesheet, StylesheetTarget},
    theme::{Appearance, ResolvedAppearance, Variables, resolve},
};

mod context;
pub use context::*;

/// Materializes an [`Appearance`] into a style node and keeps it up to date.
///
/// Inputs are compared on every update; only the parts whose resolved value
/// changed are regenerated, and the node is only rewritten when its text
/// changes. Dropping the provider tears the stylesheet down.
pub struct AppearanceProvider<T: StylesheetTarget> {
    options: AppearanceOptions,
    defaults: Variables,
    appearance: Appearance,
    resolved: ResolvedAppearance,
    variable_rules: Vec<String>,
    element_rules: Vec<String>,
    registry: ClassRegistry,
    context: Rc<AppearanceContext>,
    stylesheet: Stylesheet<T>,
}

impl<T: StylesheetTarget> AppearanceProvider<T> {
    pub fn mount(target: T, id: impl Into<String>, appearance: Appearance) -> Self {
        Self::mount_with_options(target, id, appearance, AppearanceOptions::default())
    }

    pub fn mount_with_options(
        target: T,
        id: impl Into<String>,
        appearance: Appearance,
        options: AppearanceOptions,
    ) -> Self {
        let mut stylesheet = Stylesheet::new(target, id);
        stylesheet.attach();

        let defaults = Variables::defaults().clone();
        let resolved = resolve(&defaults, &appearance);
        let variable_rules = variable_rules(&resolved.variables, stylesheet.id(), &options);
        let ElementRules { rules, classes } = element_rules(&resolved.elements, &options);
        let registry: ClassRegistry = classes.into_iter().collect();
        let context = Rc::new(build_context(stylesheet.id(), &resolved, &registry, &options));

        let mut provider = Self {
            options,
            defaults,
            appearance,
            resolved,
            variable_rules,
            element_rules: rules,
            registry,
            context,
            stylesheet,
        };

        provider.flush();
        provider
    }

    pub fn id(&self) -> &str {
        self.stylesheet.id()
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn defaults(&self) -> &Variables {
        &self.defaults
    }

    pub fn options(&self) -> &AppearanceOptions {
        &self.options
    }

    pub fn resolved(&self) -> &ResolvedAppearance {
        &self.resolved
    }

    /// Every class generated so far, including slots no longer styled.
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn state(&self) -> SheetState {
        self.stylesheet.state()
    }

    pub fn target(&self) -> &T {
        self.stylesheet.target()
    }

    /// The CSS the style node currently holds.
    pub fn stylesheet_text(&self) -> String {
        stylesheet_text(&self.variable_rules, &self.element_rules)
    }

    pub fn context(&self) -> Rc<AppearanceContext> {
        self.context.clone()
    }

    /// Runs `f` with this provider as the innermost one visible to [`use_appearance`].
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        context::provide(self.context(), f)
    }

    /// Replaces the appearance. Returns whether anything was recomputed.
    pub fn set_appearance(&mut self, appearance: Appearance) -> bool {
        if appearance == self.appearance {
            return false;
        }

        self.appearance = appearance;
        self.recompute(false);
        true
    }

    /// Replaces the variables the appearance is layered over.
    pub fn set_defaults(&mut self, defaults: Variables) -> bool {
        if defaults == self.defaults {
            return false;
        }

        self.defaults = defaults;
        self.recompute(false);
        true
    }

    pub fn set_options(&mut self, options: AppearanceOptions) -> bool {
        if options == self.options {
            return false;
        }

        self.options = options;
        self.recompute(true);
        true
    }

    /// Tears the stylesheet down. Dropping the provider does the same.
    pub fn unmount(mut self) {
        self.stylesheet.detach();
    }

    fn recompute(&mut self, force: bool) {
        let resolved = resolve(&self.defaults, &self.appearance);
        let variables_changed = force || resolved.variables != self.resolved.variables;
        let elements_changed = force || resolved.elements != self.resolved.elements;

        debug!(
            id = %self.id(),
            variables_changed,
            elements_changed,
            "recomputing appearance"
        );

        if variables_changed {
            self.variable_rules =
                variable_rules(&resolved.variables, self.stylesheet.id(), &self.options);
        }

        if elements_changed {
            let ElementRules { rules, classes } = element_rules(&resolved.elements, &self.options);
            self.element_rules = rules;
            self.registry.merge(classes);
        }

        self.resolved = resolved;

        if elements_changed {
            self.context = Rc::new(build_context(
                self.stylesheet.id(),
                &self.resolved,
                &self.registry,
                &self.options,
            ));
        }

        self.flush();
    }

    fn flush(&mut self) {
        let text = self.stylesheet_text();
        self.stylesheet.write(&text);
    }
}

impl<T: StylesheetTarget> Drop for AppearanceProvider<T> {
    fn drop(&mut self) {
        self.stylesheet.detach();
    }
}

fn build_context(
    id: &str,
    resolved: &ResolvedAppearance,
    registry: &ClassRegistry,
    options: &AppearanceOptions,
) -> AppearanceContext {
    AppearanceContext {
        id: id.to_string(),
        elements: resolved.elements.clone(),
        appearance_key_to_class: registry.restricted_to(&resolved.elements),
        scope_attribute: options.scope_attribute.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AppearanceError,
        stylesheet::MemoryDocument,
        theme::{AppearanceKey, Elements, StyleRule, Theme, Variable},
    };

    fn example_appearance() -> Appearance {
        Appearance::new()
            .base_theme(Theme::new().variables(
                Variables::new()
                    .with(Variable::ColorPrimary, "#111")
                    .with(Variable::FontSize, "14px"),
            ))
            .variables(Variables::new().with(Variable::FontSize, "16px"))
            .elements(
                Elements::new()
                    .with(AppearanceKey::Button, StyleRule::new().set("color", "red"))
                    .with(AppearanceKey::BackButton, StyleRule::new().set("padding", "4px")),
            )
    }

    #[test]
    fn test_mount_writes_variables_then_elements() {
        let document = MemoryDocument::new();
        let provider = AppearanceProvider::mount(document.clone(), "X", example_appearance());

        let text = document.text("X").unwrap();
        assert_eq!(text, provider.stylesheet_text());

        let variables_end = text.find("--tesserae-border-radius").unwrap();
        let elements_start = text.find(".tesserae-button-").unwrap();
        assert!(variables_end < elements_start);
        assert!(text.contains("--tesserae-color-primary:#111;"));
        assert!(text.contains("--tesserae-font-size:16px;"));
    }

    #[test]
    fn test_compound_class_in_context() -> anyhow::Result<()> {
        let provider = AppearanceProvider::mount(MemoryDocument::new(), "X", example_appearance());

        provider.provide(|| -> anyhow::Result<()> {
            let context = use_appearance()?;
            let button = context.class(AppearanceKey::Button).unwrap();
            let back = context.class(AppearanceKey::BackButton).unwrap();

            assert_eq!(context.id, "X");
            assert!(back.starts_with(&format!("{button} tesserae-back__button-")));
            Ok(())
        })
    }

    #[test]
    fn test_accessor_fails_without_provider() {
        let _provider = AppearanceProvider::mount(MemoryDocument::new(), "X", Appearance::new());
        assert!(matches!(use_appearance(), Err(AppearanceError::OutsideProvider)));
    }

    #[test]
    fn test_identical_inputs_produce_identical_css() {
        let first = AppearanceProvider::mount(MemoryDocument::new(), "X", example_appearance());
        let second = AppearanceProvider::mount(MemoryDocument::new(), "X", example_appearance());

        assert_eq!(first.stylesheet_text(), second.stylesheet_text());
    }

    #[test]
    fn test_unchanged_appearance_does_not_touch_the_document() {
        let document = MemoryDocument::new();
        let mut provider = AppearanceProvider::mount(document.clone(), "X", example_appearance());

        assert!(!provider.set_appearance(example_appearance()));
        assert_eq!(document.writes("X"), 1);
    }

    #[test]
    fn test_changed_appearance_rewrites_the_node() {
        let document = MemoryDocument::new();
        let mut provider = AppearanceProvider::mount(document.clone(), "X", example_appearance());

        let appearance = example_appearance()
            .variables(Variables::new().with(Variable::FontSize, "18px"));
        assert!(provider.set_appearance(appearance));

        assert_eq!(document.writes("X"), 2);
        assert!(document.text("X").unwrap().contains("--tesserae-font-size:18px;"));
    }

    #[test]
    fn test_defaults_change_is_picked_up() {
        let document = MemoryDocument::new();
        let mut provider = AppearanceProvider::mount(document.clone(), "X", Appearance::new());

        provider.set_defaults(Variables::new().with(Variable::ColorNeutral, "gray"));

        let expected = Variables::new().with(Variable::ColorNeutral, "gray");
        assert_eq!(provider.resolved().variables, expected);
        assert!(document.text("X").unwrap().starts_with(r#"[data-tesserae-scope="X"]{--tesserae-color-neutral:gray;"#));
    }

    #[test]
    fn test_registry_is_additive_but_context_tracks_current_elements() {
        let mut provider = AppearanceProvider::mount(MemoryDocument::new(), "X", example_appearance());

        provider.set_appearance(
            Appearance::new().elements(Elements::new().with(AppearanceKey::Tab, "my-tab")),
        );

        assert!(provider.registry().contains(AppearanceKey::Button));
        let context = provider.context();
        assert_eq!(context.appearance_key_to_class.len(), 1);
        assert_eq!(context.class(AppearanceKey::Tab), Some("my-tab"));
        assert_eq!(context.class(AppearanceKey::Button), None);
    }

    #[test]
    fn test_second_provider_adopts_the_node() {
        let document = MemoryDocument::new();
        let first = AppearanceProvider::mount(document.clone(), "X", Appearance::new());
        let second = AppearanceProvider::mount(document.clone(), "X", example_appearance());

        assert_eq!(first.state(), SheetState::Created);
        assert_eq!(second.state(), SheetState::Adopted);
        assert_eq!(document.len(), 1);

        drop(second);
        assert!(document.contains("X"), "Adopter should leave the node in place");

        drop(first);
        assert!(document.is_empty());
    }

    #[test]
    fn test_remount_starts_from_a_fresh_node() {
        let document = MemoryDocument::new();
        let provider = AppearanceProvider::mount(document.clone(), "X", example_appearance());
        let serial = document.serial("X");
        provider.unmount();
        assert!(!document.contains("X"));

        let provider = AppearanceProvider::mount(document.clone(), "X", Appearance::new());
        assert_ne!(document.serial("X"), serial);
        assert_eq!(document.text("X").unwrap(), provider.stylesheet_text());
        assert!(!document.text("X").unwrap().contains(".tesserae-button-"));
    }

    #[test]
    fn test_options_change_regenerates_everything() {
        let document = MemoryDocument::new();
        let mut provider = AppearanceProvider::mount(document.clone(), "X", example_appearance());

        provider.set_options(
            AppearanceOptions::default()
                .class_prefix("acme")
                .variable_prefix("acme")
                .generate_shades(false),
        );

        let text = document.text("X").unwrap();
        assert!(text.contains("--acme-color-primary:#111;"));
        assert!(text.contains(".acme-button-"));
        assert!(!text.contains("--tesserae-"));
        assert!(provider.context().class(AppearanceKey::Button).unwrap().starts_with("acme-button-"));
    }
}
