use tracing::warn;
use web_sys::{Document, Element};

use super::StylesheetTarget;

/// The browser document of the current window.
#[derive(Debug, Clone)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the global `window`, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl StylesheetTarget for DomDocument {
    type Node = Element;

    fn find(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create(&self, id: &str) -> Option<Element> {
        let element = match self.document.create_element("style") {
            Ok(element) => element,
            Err(err) => {
                warn!(id, ?err, "could not create style element");
                return None;
            }
        };
        element.set_id(id);

        let Some(head) = self.document.head() else {
            warn!(id, "document has no head");
            return None;
        };

        if let Err(err) = head.append_child(&element) {
            warn!(id, ?err, "could not append style element");
            return None;
        }

        Some(element)
    }

    fn write(&self, node: &Element, css: &str) {
        node.set_text_content(Some(css));
    }

    fn remove(&self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }
}
