#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod renderer;

use arbor_core::ElementId;
use arbor_dom::Document;

pub use crate::renderer::Renderer;

/// A convenience function to render a node and its subtree to a string with the default settings.
///
/// For pretty printing or other options, create a [`Renderer`].
pub fn render_node(doc: &Document, id: ElementId) -> String {
    Renderer::new().render(doc, id)
}
