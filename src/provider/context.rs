use std::{cell::RefCell, rc::Rc};

use crate::{
    AppearanceError,
    css::ClassRegistry,
    theme::{AppearanceKey, Elements},
};

thread_local! {
    static CONTEXT_STACK: RefCell<Vec<Rc<AppearanceContext>>> = const { RefCell::new(Vec::new()) };
}

/// What rendering code sees of the nearest provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceContext {
    pub id: String,
    pub elements: Elements,
    pub appearance_key_to_class: ClassRegistry,
    /// Attribute the container must carry (with `id` as value) to receive the variables.
    pub scope_attribute: String,
}

impl AppearanceContext {
    /// Class to attach to the element rendered for `key`.
    pub fn class(&self, key: AppearanceKey) -> Option<&str> {
        self.appearance_key_to_class.get(key)
    }
}

/// Returns the context of the innermost active provider.
///
/// Fails with [`AppearanceError::OutsideProvider`] when called outside
/// [`AppearanceProvider::provide`](crate::AppearanceProvider::provide).
pub fn use_appearance() -> Result<Rc<AppearanceContext>, AppearanceError> {
    CONTEXT_STACK
        .with_borrow(|stack| stack.last().cloned())
        .ok_or(AppearanceError::OutsideProvider)
}

pub(crate) fn provide<R>(context: Rc<AppearanceContext>, f: impl FnOnce() -> R) -> R {
    CONTEXT_STACK.with_borrow_mut(|stack| stack.push(context));
    let _scope = ContextScope;
    f()
}

struct ContextScope;

impl Drop for ContextScope {
    fn drop(&mut self) {
        // The stack may already be gone during thread teardown.
        let _ = CONTEXT_STACK.try_with(|stack| stack.borrow_mut().pop());
    }
}
