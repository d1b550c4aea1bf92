//! An in-memory host document.
//!
//! Nodes live in a slab and are addressed by [`ElementId`]. The document starts with an
//! `html > (head, body)` skeleton so callers have somewhere to put what they build, and a `head`
//! to register style sheets in.

use crate::mutations::WriteMutations;
use crate::DomError;
use arbor_core::{ElementId, Event, EventHandler};
use slab::Slab;

/// A node in a [`Document`].
#[derive(Debug, Clone)]
pub struct Node {
    /// The element this node is attached to, if any.
    pub parent: Option<ElementId>,
    /// What kind of node this is.
    pub kind: NodeKind,
}

/// The kinds of node a [`Document`] holds.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// An element node.
    Element(ElementData),
    /// A text node and its data.
    Text(String),
}

/// The data carried by an element node.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// The tag name, as given when the element was created.
    pub tag: String,
    /// The namespace the element was created in. `None` is plain markup.
    pub namespace: Option<String>,
    /// Attributes in the order they were first set.
    pub attributes: Vec<Attribute>,
    /// Inline style properties in the order they were first set.
    pub style: Vec<(String, String)>,
    /// Listeners paired with their event type, in registration order.
    pub listeners: Vec<(String, EventHandler)>,
    /// Child nodes in order.
    pub children: Vec<ElementId>,
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The qualified name, e.g. `xlink:href`.
    pub name: String,
    /// The attribute namespace, if it was set with one.
    pub namespace: Option<String>,
    /// The value.
    pub value: String,
}

/// An in-memory document.
#[derive(Debug)]
pub struct Document {
    nodes: Slab<Node>,
    root: ElementId,
    head: ElementId,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only `<html><head></head><body></body></html>`.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Slab::new(),
            root: ElementId(0),
            head: ElementId(0),
            body: ElementId(0),
        };

        let root = doc.insert_element("html", None);
        let head = doc.insert_element("head", None);
        let body = doc.insert_element("body", None);
        doc.attach(root, head);
        doc.attach(root, body);

        doc.root = root;
        doc.head = head;
        doc.body = body;
        doc
    }

    /// The `html` element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The `head` element.
    pub fn head(&self) -> ElementId {
        self.head
    }

    /// The `body` element.
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// The number of nodes the document holds, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds no nodes. Never true for a document made with [`Document::new`].
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    pub fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> Option<&ElementData> {
        match &self.node(id)?.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut ElementData, DomError> {
        match &mut self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))?.kind {
            NodeKind::Element(element) => Ok(element),
            NodeKind::Text(_) => Err(DomError::NotAnElement(id)),
        }
    }

    fn insert_element(&mut self, tag: &str, namespace: Option<&str>) -> ElementId {
        ElementId(self.nodes.insert(Node {
            parent: None,
            kind: NodeKind::Element(ElementData {
                tag: tag.to_string(),
                namespace: namespace.map(str::to_string),
                ..Default::default()
            }),
        }))
    }

    fn attach(&mut self, parent: ElementId, child: ElementId) {
        if let Some(NodeKind::Element(element)) = self.nodes.get_mut(parent.0).map(|n| &mut n.kind)
        {
            element.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
    }

    /// Create an element in no namespace.
    pub fn create_element(&mut self, tag: &str) -> Result<ElementId, DomError> {
        validate_name(tag)?;
        Ok(self.insert_element(tag, None))
    }

    /// Create an element in the given namespace. `None` behaves like [`Document::create_element`].
    pub fn create_element_ns(
        &mut self,
        namespace: Option<&str>,
        tag: &str,
    ) -> Result<ElementId, DomError> {
        validate_name(tag)?;
        Ok(self.insert_element(tag, namespace.filter(|ns| !ns.is_empty())))
    }

    /// Create a detached text node.
    pub fn create_text_node(&mut self, text: &str) -> ElementId {
        ElementId(self.nodes.insert(Node {
            parent: None,
            kind: NodeKind::Text(text.to_string()),
        }))
    }

    /// Set an attribute in no namespace.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> Result<(), DomError> {
        self.set_attribute_ns(id, None, name, value)
    }

    /// Set an attribute in the given namespace, replacing an attribute with the same name and
    /// namespace in place.
    pub fn set_attribute_ns(
        &mut self,
        id: ElementId,
        namespace: Option<&str>,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        validate_name(name)?;
        let element = self.element_mut(id)?;
        match element
            .attributes
            .iter_mut()
            .find(|attr| attr.name == name && attr.namespace.as_deref() == namespace)
        {
            Some(attr) => attr.value = value.to_string(),
            None => element.attributes.push(Attribute {
                name: name.to_string(),
                namespace: namespace.map(str::to_string),
                value: value.to_string(),
            }),
        }
        Ok(())
    }

    /// Get an attribute that was set in no namespace.
    pub fn get_attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get_attribute_ns(id, None, name)
    }

    /// Get an attribute that was set in the given namespace.
    pub fn get_attribute_ns(
        &self,
        id: ElementId,
        namespace: Option<&str>,
        name: &str,
    ) -> Option<&str> {
        self.element(id)?
            .attributes
            .iter()
            .find(|attr| attr.name == name && attr.namespace.as_deref() == namespace)
            .map(|attr| attr.value.as_str())
    }

    /// Set an inline style property. An empty value removes the property.
    pub fn set_style_property(
        &mut self,
        id: ElementId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        let element = self.element_mut(id)?;
        let existing = element.style.iter().position(|(prop, _)| prop == name);
        match (existing, value.is_empty()) {
            (Some(idx), true) => {
                element.style.remove(idx);
            }
            (Some(idx), false) => element.style[idx].1 = value.to_string(),
            (None, true) => {}
            (None, false) => element.style.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    /// Get an inline style property.
    pub fn style_property(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)?
            .style
            .iter()
            .find(|(prop, _)| prop == name)
            .map(|(_, value)| value.as_str())
    }

    /// Subscribe a listener to events of type `name` on an element.
    pub fn add_event_listener(
        &mut self,
        id: ElementId,
        name: &str,
        handler: impl Into<EventHandler>,
    ) -> Result<(), DomError> {
        self.element_mut(id)?
            .listeners
            .push((name.to_string(), handler.into()));
        Ok(())
    }

    /// Fire an event of type `name` at an element.
    ///
    /// The element's own listeners for that type run in registration order. Events don't bubble.
    /// Returns how many listeners ran.
    pub fn dispatch_event(&self, id: ElementId, name: &str) -> Result<usize, DomError> {
        let element = match &self.node(id).ok_or(DomError::UnknownNode(id))?.kind {
            NodeKind::Element(element) => element,
            NodeKind::Text(_) => return Ok(0),
        };

        let event = Event::new(name, id);
        let mut ran = 0;
        for (_, handler) in element.listeners.iter().filter(|(n, _)| n == name) {
            handler.call(&event);
            ran += 1;
        }
        Ok(ran)
    }

    /// Append `child` as the last child of `parent`, detaching it from its current parent first.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        self.element_mut(parent)?;
        if !self.nodes.contains(child.0) {
            return Err(DomError::UnknownNode(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        if let Some(old_parent) = self.nodes[child.0].parent {
            self.element_mut(old_parent)?
                .children
                .retain(|&existing| existing != child);
        }

        self.attach(parent, child);
        Ok(())
    }

    fn is_inclusive_ancestor(&self, ancestor: ElementId, mut node: ElementId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.node(node).and_then(|n| n.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// The children of a node. Text nodes and unknown ids have none.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element(id)
            .map(|element| element.children.as_slice())
            .unwrap_or_default()
    }

    /// The element a node is attached to.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id)?.parent
    }

    /// The tag name of an element.
    pub fn tag_name(&self, id: ElementId) -> Option<&str> {
        self.element(id).map(|element| element.tag.as_str())
    }

    /// The namespace of an element.
    pub fn namespace(&self, id: ElementId) -> Option<&str> {
        self.element(id)?.namespace.as_deref()
    }

    /// The concatenated data of every text node at or below `id`, in tree order.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: ElementId, buf: &mut String) {
        match self.node(id).map(|node| &node.kind) {
            Some(NodeKind::Text(data)) => buf.push_str(data),
            Some(NodeKind::Element(element)) => {
                for child in &element.children {
                    self.collect_text(*child, buf);
                }
            }
            None => {}
        }
    }

    /// Find the first element in tree order, starting from the root, whose `id` attribute matches.
    ///
    /// Detached nodes are never found.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if self.get_attribute(node, "id") == Some(id) {
                return Some(node);
            }
            stack.extend(self.children(node).iter().rev());
        }
        None
    }

    /// Whether two nodes are structurally equal: same kind, tag, namespace, attributes, inline
    /// style and text, with equal children in the same order.
    ///
    /// Attribute order doesn't matter. Listeners are not compared.
    pub fn is_equal_node(&self, a: ElementId, b: ElementId) -> bool {
        let (Some(left), Some(right)) = (self.node(a), self.node(b)) else {
            return false;
        };

        match (&left.kind, &right.kind) {
            (NodeKind::Text(left), NodeKind::Text(right)) => left == right,
            (NodeKind::Element(left), NodeKind::Element(right)) => {
                left.tag == right.tag
                    && left.namespace == right.namespace
                    && left.style == right.style
                    && left.attributes.len() == right.attributes.len()
                    && left
                        .attributes
                        .iter()
                        .all(|attr| right.attributes.contains(attr))
                    && left.children.len() == right.children.len()
                    && left
                        .children
                        .iter()
                        .zip(&right.children)
                        .all(|(l, r)| self.is_equal_node(*l, *r))
            }
            _ => false,
        }
    }
}

/// Reject names the way a host document would: empty names, names starting with something other
/// than a letter, `_` or `:`, and names containing whitespace or markup delimiters.
fn validate_name(name: &str) -> Result<(), DomError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':');
    let valid_rest = chars.all(|c| {
        c.is_alphanumeric()
            || matches!(c, '-' | '_' | '.' | ':')
            || (!c.is_ascii() && !c.is_whitespace())
    });

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(DomError::InvalidCharacter {
            name: name.to_string(),
        })
    }
}

impl WriteMutations for Document {
    fn create_element(&mut self, tag: &str, ns: Option<&str>) -> Result<ElementId, DomError> {
        self.create_element_ns(ns, tag)
    }

    fn create_text_node(&mut self, text: &str) -> Result<ElementId, DomError> {
        Ok(Document::create_text_node(self, text))
    }

    fn set_attribute(
        &mut self,
        id: ElementId,
        name: &str,
        ns: Option<&str>,
        value: &str,
    ) -> Result<(), DomError> {
        self.set_attribute_ns(id, ns, name, value)
    }

    fn set_style_property(
        &mut self,
        id: ElementId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        Document::set_style_property(self, id, name, value)
    }

    fn new_event_listener(
        &mut self,
        id: ElementId,
        name: &str,
        handler: EventHandler,
    ) -> Result<(), DomError> {
        self.add_event_listener(id, name, handler)
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        Document::append_child(self, parent, child)
    }
}
