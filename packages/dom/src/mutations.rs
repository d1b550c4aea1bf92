//! The interface the builder uses to construct nodes in a host document.
//!
//! A host can be a real document, an in-memory [`Document`](crate::Document), or a
//! [`Mutations`] log that records each call so the edits can be applied somewhere else.

use crate::DomError;
use arbor_core::{ElementId, EventHandler};

/// A host document that the builder can create nodes in.
///
/// Every method may fail with a [`DomError`]. The builder does not catch or translate these
/// errors: they reach the caller of [`build`](crate::build) exactly as the host raised them.
pub trait WriteMutations {
    /// Create an element with the given tag name, in the namespace if one is given.
    fn create_element(&mut self, tag: &str, ns: Option<&str>) -> Result<ElementId, DomError>;

    /// Create a text node with the given contents.
    fn create_text_node(&mut self, text: &str) -> Result<ElementId, DomError>;

    /// Set an attribute on an element, in the namespace if one is given.
    fn set_attribute(
        &mut self,
        id: ElementId,
        name: &str,
        ns: Option<&str>,
        value: &str,
    ) -> Result<(), DomError>;

    /// Set a single inline style property on an element.
    fn set_style_property(
        &mut self,
        id: ElementId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError>;

    /// Subscribe a listener to events of type `name` on an element.
    fn new_event_listener(
        &mut self,
        id: ElementId,
        name: &str,
        handler: EventHandler,
    ) -> Result<(), DomError>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError>;
}

/// A single host call, as recorded by [`Mutations`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum Mutation {
    /// Create an element, optionally in a namespace.
    CreateElement {
        tag: String,
        ns: Option<String>,
        id: ElementId,
    },

    /// Create a text node.
    CreateTextNode { value: String, id: ElementId },

    /// Set an attribute, optionally in a namespace.
    SetAttribute {
        name: String,
        ns: Option<String>,
        value: String,
        id: ElementId,
    },

    /// Set an inline style property.
    SetStyleProperty {
        name: String,
        value: String,
        id: ElementId,
    },

    /// Subscribe a listener. The callback itself can't be recorded, only the event type.
    NewEventListener { name: String, id: ElementId },

    /// Append a child to a parent.
    AppendChild { parent: ElementId, child: ElementId },
}

/// A host that records every call instead of building anything.
///
/// Ids are handed out sequentially from zero. Listeners are kept alongside the edit log so the
/// callbacks can be attached when the edits are replayed.
#[derive(Debug, Default)]
pub struct Mutations {
    /// The recorded edits, in call order.
    pub edits: Vec<Mutation>,

    /// The listeners subscribed, paired with the element and event type.
    pub listeners: Vec<(ElementId, String, EventHandler)>,

    next_id: usize,
}

impl Mutations {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Apply the recorded edits to another host.
    ///
    /// Ids in the log are mapped to the ids the target hands out, so elements referenced from a
    /// description but created elsewhere can't be replayed and produce [`DomError::UnknownNode`].
    pub fn replay(&self, target: &mut impl WriteMutations) -> Result<Vec<ElementId>, DomError> {
        let mut ids = Vec::with_capacity(self.next_id);
        let mut listeners = self.listeners.iter();
        let lookup = |ids: &[ElementId], id: ElementId| {
            ids.get(id.0).copied().ok_or(DomError::UnknownNode(id))
        };

        for edit in &self.edits {
            match edit {
                Mutation::CreateElement { tag, ns, .. } => {
                    ids.push(target.create_element(tag, ns.as_deref())?);
                }
                Mutation::CreateTextNode { value, .. } => {
                    ids.push(target.create_text_node(value)?);
                }
                Mutation::SetAttribute {
                    name,
                    ns,
                    value,
                    id,
                } => target.set_attribute(lookup(&ids, *id)?, name, ns.as_deref(), value)?,
                Mutation::SetStyleProperty { name, value, id } => {
                    target.set_style_property(lookup(&ids, *id)?, name, value)?
                }
                Mutation::NewEventListener { name, id } => {
                    // listeners are recorded in the same order as their edits
                    if let Some((_, _, handler)) = listeners.next() {
                        target.new_event_listener(lookup(&ids, *id)?, name, handler.clone())?;
                    }
                }
                Mutation::AppendChild { parent, child } => {
                    target.append_child(lookup(&ids, *parent)?, lookup(&ids, *child)?)?
                }
            }
        }

        Ok(ids)
    }
}

impl WriteMutations for Mutations {
    fn create_element(&mut self, tag: &str, ns: Option<&str>) -> Result<ElementId, DomError> {
        let id = self.next_id();
        self.edits.push(Mutation::CreateElement {
            tag: tag.to_string(),
            ns: ns.map(str::to_string),
            id,
        });
        Ok(id)
    }

    fn create_text_node(&mut self, text: &str) -> Result<ElementId, DomError> {
        let id = self.next_id();
        self.edits.push(Mutation::CreateTextNode {
            value: text.to_string(),
            id,
        });
        Ok(id)
    }

    fn set_attribute(
        &mut self,
        id: ElementId,
        name: &str,
        ns: Option<&str>,
        value: &str,
    ) -> Result<(), DomError> {
        self.edits.push(Mutation::SetAttribute {
            name: name.to_string(),
            ns: ns.map(str::to_string),
            value: value.to_string(),
            id,
        });
        Ok(())
    }

    fn set_style_property(
        &mut self,
        id: ElementId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        self.edits.push(Mutation::SetStyleProperty {
            name: name.to_string(),
            value: value.to_string(),
            id,
        });
        Ok(())
    }

    fn new_event_listener(
        &mut self,
        id: ElementId,
        name: &str,
        handler: EventHandler,
    ) -> Result<(), DomError> {
        self.edits.push(Mutation::NewEventListener {
            name: name.to_string(),
            id,
        });
        self.listeners.push((id, name.to_string(), handler));
        Ok(())
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        self.edits.push(Mutation::AppendChild { parent, child });
        Ok(())
    }
}
