use indexmap::IndexMap;

use crate::theme::{AppearanceKey, Elements};

/// Class names rendering code attaches to each slot.
///
/// A compound key's entry already includes its base slot's class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRegistry {
    classes: IndexMap<AppearanceKey, String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AppearanceKey) -> Option<&str> {
        self.classes.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: AppearanceKey) -> bool {
        self.classes.contains_key(&key)
    }

    /// Adds or replaces entries; entries absent from `classes` are kept.
    pub fn merge(&mut self, classes: impl IntoIterator<Item = (AppearanceKey, String)>) {
        self.classes.extend(classes);
    }

    /// The entries whose slot is styled by `elements`.
    pub fn restricted_to(&self, elements: &Elements) -> ClassRegistry {
        let classes = elements
            .keys()
            .filter_map(|key| self.classes.get(&key).map(|class| (key, class.clone())))
            .collect();

        ClassRegistry { classes }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AppearanceKey, &str)> + '_ {
        self.classes.iter().map(|(key, class)| (*key, class.as_str()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<(AppearanceKey, String)> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = (AppearanceKey, String)>>(iter: I) -> Self {
        let mut registry = ClassRegistry::new();
        registry.merge(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_additive() {
        let mut registry: ClassRegistry =
            [(AppearanceKey::Button, "a".to_string())].into_iter().collect();
        registry.merge([(AppearanceKey::Tab, "b".to_string())]);
        registry.merge([(AppearanceKey::Tab, "c".to_string())]);

        assert_eq!(registry.get(AppearanceKey::Button), Some("a"));
        assert_eq!(registry.get(AppearanceKey::Tab), Some("c"));
    }

    #[test]
    fn test_restricted_to_drops_unstyled_slots() {
        let registry: ClassRegistry = [
            (AppearanceKey::Button, "a".to_string()),
            (AppearanceKey::Tab, "b".to_string()),
        ]
        .into_iter()
        .collect();
        let elements = Elements::new().with(AppearanceKey::Tab, "b");

        let view = registry.restricted_to(&elements);
        assert_eq!(view.len(), 1);
        assert!(view.contains(AppearanceKey::Tab));
    }
}
