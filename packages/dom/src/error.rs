use arbor_core::ElementId;

/// An error raised by a host document.
///
/// The builder never produces errors of its own: anything it returns came from the host and is
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// An element or attribute name that the host can't represent.
    #[error("invalid character in name {name:?}")]
    InvalidCharacter {
        /// The rejected name.
        name: String,
    },

    /// The id does not belong to a node of this document.
    #[error("no node with id {0:?} exists in this document")]
    UnknownNode(ElementId),

    /// The operation needs an element but the node is a text node.
    #[error("node {0:?} is not an element")]
    NotAnElement(ElementId),

    /// Appending the child would make a node its own ancestor.
    #[error("cannot append {child:?} to {parent:?}: the child contains the parent")]
    HierarchyRequest {
        /// The node being appended to.
        parent: ElementId,
        /// The node being appended.
        child: ElementId,
    },
}
