//! Handles and listener callbacks shared between descriptions and host documents.

use std::fmt::Debug;
use std::rc::Rc;

/// An opaque handle to a node that a host document has constructed.
///
/// Descriptions can carry an `ElementId` to splice an already-built node into a new tree instead of
/// building it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub usize);

/// An event delivered to a listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The event type, e.g. `click`.
    pub name: String,
    /// The node the listener was registered on.
    pub target: ElementId,
}

impl Event {
    /// Create a new event of the given type aimed at `target`.
    pub fn new(name: impl Into<String>, target: ElementId) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}

/// A callback subscribed to an event on a constructed element.
///
/// Handlers are reference counted so the same description can be built several times, each tree
/// sharing the callback. Two handlers are equal only if they point at the same closure.
#[derive(Clone)]
pub struct EventHandler {
    callback: Rc<dyn Fn(&Event)>,
}

impl EventHandler {
    /// Wrap a closure as an event handler.
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self {
            callback: Rc::new(f),
        }
    }

    /// Invoke the handler.
    pub fn call(&self, event: &Event) {
        (self.callback)(event)
    }
}

impl<F: Fn(&Event) + 'static> From<F> for EventHandler {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl Debug for EventHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandler")
            .field("callback", &Rc::as_ptr(&self.callback))
            .finish()
    }
}
