use std::{cell::RefCell, rc::Rc};

use indexmap::IndexMap;

use super::StylesheetTarget;

/// A headless document holding style nodes in memory.
///
/// Clones share the same document, so several providers can be mounted
/// against it. Useful for tests and server-side rendering.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    head: Rc<RefCell<MemoryHead>>,
}

#[derive(Debug, Default)]
struct MemoryHead {
    next_serial: u64,
    nodes: IndexMap<String, MemoryNode>,
}

#[derive(Debug)]
struct MemoryNode {
    serial: u64,
    text: String,
    writes: usize,
}

/// Handle on a node of a [`MemoryDocument`]. Stale once the node is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNodeRef {
    id: String,
    serial: u64,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node as if some other code had already put it in the document.
    pub fn insert(&self, id: impl Into<String>, text: impl Into<String>) -> MemoryNodeRef {
        let mut head = self.head.borrow_mut();
        let id = id.into();
        let serial = head.next_serial;
        head.next_serial += 1;
        head.nodes.insert(
            id.clone(),
            MemoryNode {
                serial,
                text: text.into(),
                writes: 0,
            },
        );

        MemoryNodeRef { id, serial }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.head.borrow().nodes.contains_key(id)
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.head.borrow().nodes.get(id).map(|node| node.text.clone())
    }

    /// Identity of the node currently holding `id`; changes when the node is recreated.
    pub fn serial(&self, id: &str) -> Option<u64> {
        self.head.borrow().nodes.get(id).map(|node| node.serial)
    }

    /// How many times the node holding `id` has been written to.
    pub fn writes(&self, id: &str) -> usize {
        self.head
            .borrow()
            .nodes
            .get(id)
            .map_or(0, |node| node.writes)
    }

    /// The full document content: every node's text, in insertion order.
    pub fn html(&self) -> String {
        self.head
            .borrow()
            .nodes
            .iter()
            .map(|(id, node)| {
                format!(
                    "<style id=\"{}\">{}</style>",
                    escape_attribute(id),
                    escape_style_text(&node.text)
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.head.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.borrow().nodes.is_empty()
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

/// Style text is raw: `<` is written as a CSS escape so `</style>` cannot appear.
fn escape_style_text(text: &str) -> String {
    text.replace('<', "\\3c ")
}

impl StylesheetTarget for MemoryDocument {
    type Node = MemoryNodeRef;

    fn find(&self, id: &str) -> Option<MemoryNodeRef> {
        self.head.borrow().nodes.get(id).map(|node| MemoryNodeRef {
            id: id.to_string(),
            serial: node.serial,
        })
    }

    fn create(&self, id: &str) -> Option<MemoryNodeRef> {
        Some(self.insert(id, ""))
    }

    fn write(&self, node: &MemoryNodeRef, css: &str) {
        let mut head = self.head.borrow_mut();
        if let Some(current) = head.nodes.get_mut(&node.id)
            && current.serial == node.serial
        {
            current.text = css.to_string();
            current.writes += 1;
        }
    }

    fn remove(&self, id: &str) -> bool {
        self.head.borrow_mut().nodes.shift_remove(id).is_some()
    }
}
