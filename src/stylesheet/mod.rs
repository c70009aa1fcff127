//! Ownership of the single style node a provider writes its CSS into.
//!
//! The document is reached through [`StylesheetTarget`], so the same logic
//! drives a browser DOM, an in-memory document or any other sink.

use std::fmt;

use cfg_if::cfg_if;
use tracing::{debug, trace, warn};

mod memory;
pub use memory::*;

cfg_if!(
    if #[cfg(target_arch = "wasm32")] {
        mod dom;
        pub use dom::*;
    }
);

/// A document that can hold style nodes keyed by id.
///
/// Methods take `&self`: documents are shared between providers and mutate
/// through interior mutability, like the browser DOM.
pub trait StylesheetTarget {
    type Node: Clone + fmt::Debug;

    /// Looks up an existing node by id.
    fn find(&self, id: &str) -> Option<Self::Node>;

    /// Creates a style node with the given id and appends it to the document head.
    fn create(&self, id: &str) -> Option<Self::Node>;

    /// Replaces the node's text content.
    fn write(&self, node: &Self::Node, css: &str);

    /// Removes the node with the given id, if any. Returns whether one was removed.
    fn remove(&self, id: &str) -> bool;
}

/// Where a [`Stylesheet`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    Unmounted,
    /// Attached to a node that already existed in the document.
    Adopted,
    /// Attached to a node this stylesheet created.
    Created,
}

#[derive(Debug)]
enum Attachment<N> {
    Unmounted,
    Adopted(N),
    Created(N),
}

/// One provider's handle on its style node.
#[derive(Debug)]
pub struct Stylesheet<T: StylesheetTarget> {
    id: String,
    target: T,
    attachment: Attachment<T::Node>,
    written: Option<String>,
}

impl<T: StylesheetTarget> Stylesheet<T> {
    pub fn new(target: T, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target,
            attachment: Attachment::Unmounted,
            written: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn state(&self) -> SheetState {
        match self.attachment {
            Attachment::Unmounted => SheetState::Unmounted,
            Attachment::Adopted(_) => SheetState::Adopted,
            Attachment::Created(_) => SheetState::Created,
        }
    }

    /// Adopts the node with this id, or creates one. No-op when already attached.
    pub fn attach(&mut self) -> SheetState {
        if !matches!(self.attachment, Attachment::Unmounted) {
            return self.state();
        }

        self.attachment = if let Some(node) = self.target.find(&self.id) {
            debug!(id = %self.id, "adopting existing style node");
            Attachment::Adopted(node)
        } else if let Some(node) = self.target.create(&self.id) {
            debug!(id = %self.id, "created style node");
            Attachment::Created(node)
        } else {
            warn!(id = %self.id, "could not create style node");
            Attachment::Unmounted
        };

        self.state()
    }

    /// Overwrites the node's content. Returns whether the document was touched.
    ///
    /// Does nothing while unmounted or when `css` matches the last write.
    pub fn write(&mut self, css: &str) -> bool {
        let node = match &self.attachment {
            Attachment::Adopted(node) | Attachment::Created(node) => node,
            Attachment::Unmounted => {
                trace!(id = %self.id, "skipping write to unmounted stylesheet");
                return false;
            }
        };

        if self.written.as_deref() == Some(css) {
            return false;
        }

        trace!(id = %self.id, bytes = css.len(), "writing stylesheet");
        self.target.write(node, css);
        self.written = Some(css.to_string());
        true
    }

    /// Releases the node, removing it only if this stylesheet created it.
    /// Safe to call repeatedly.
    pub fn detach(&mut self) {
        match std::mem::replace(&mut self.attachment, Attachment::Unmounted) {
            Attachment::Created(_) => {
                if self.target.remove(&self.id) {
                    debug!(id = %self.id, "removed style node");
                } else {
                    debug!(id = %self.id, "style node was already removed");
                }
            }
            Attachment::Adopted(_) => debug!(id = %self.id, "releasing adopted style node"),
            Attachment::Unmounted => {}
        }

        self.written = None;
    }
}
