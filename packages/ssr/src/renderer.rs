//! Serialising a built subtree to markup.

use arbor_core::ElementId;
use arbor_dom::namespace::XLINK_NAMESPACE;
use arbor_dom::{Attribute, Document, ElementData, NodeKind};
use std::fmt::Write;

const INDENT: &str = "    ";

/// A renderer for nodes of a [`Document`].
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Put each child element on its own indented line.
    pub pretty: bool,

    /// Escape text nodes and attribute values. Text inside `style` and `script` is never escaped.
    pub sanitize: bool,

    /// Write childless elements in a namespace (SVG) as `<line/>` instead of `<line></line>`.
    pub self_close_empty: bool,

    /// Declare the namespace of the rendered root, and the XLink namespace if any `xlink:`
    /// attribute is used below it, so the output stands on its own as an XML document.
    pub declare_namespaces: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            pretty: false,
            sanitize: true,
            self_close_empty: true,
            declare_namespaces: true,
        }
    }
}

impl Renderer {
    /// A renderer with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn pretty printing on or off.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Render `id` and everything below it.
    pub fn render(&self, doc: &Document, id: ElementId) -> String {
        let mut buf = String::new();
        // writing to a String never fails
        let _ = self.render_to(&mut buf, doc, id);
        buf
    }

    /// Render `id` into an existing buffer.
    pub fn render_to(
        &self,
        buf: &mut impl Write,
        doc: &Document,
        id: ElementId,
    ) -> std::fmt::Result {
        self.render_node(buf, doc, id, 0, None)
    }

    fn render_node(
        &self,
        buf: &mut impl Write,
        doc: &Document,
        id: ElementId,
        depth: usize,
        parent: Option<&ElementData>,
    ) -> std::fmt::Result {
        let Some(node) = doc.node(id) else {
            tracing::debug!(?id, "skipping unknown node");
            return Ok(());
        };

        match &node.kind {
            NodeKind::Text(text) => {
                let raw = parent.is_some_and(|p| {
                    p.tag.eq_ignore_ascii_case("style") || p.tag.eq_ignore_ascii_case("script")
                });
                self.write_text(buf, text, raw)
            }
            NodeKind::Element(element) => self.render_element(buf, doc, element, depth, parent),
        }
    }

    fn render_element(
        &self,
        buf: &mut impl Write,
        doc: &Document,
        element: &ElementData,
        depth: usize,
        parent: Option<&ElementData>,
    ) -> std::fmt::Result {
        write!(buf, "<{}", element.tag)?;

        if self.declare_namespaces {
            if let Some(ns) = &element.namespace {
                let inherited = parent.is_some_and(|p| p.namespace.as_ref() == Some(ns));
                if !inherited && !has_attribute(element, "xmlns") {
                    write!(buf, " xmlns=\"{ns}\"")?;
                }
            }
            if parent.is_none()
                && !has_attribute(element, "xmlns:xlink")
                && uses_xlink(doc, element)
            {
                write!(buf, " xmlns:xlink=\"{XLINK_NAMESPACE}\"")?;
            }
        }

        let mut literal_style = None;
        for attr in &element.attributes {
            if attr.name == "style" && attr.namespace.is_none() && !element.style.is_empty() {
                literal_style = Some(attr.value.as_str());
                continue;
            }
            self.write_attribute(buf, &attr.name, &attr.value)?;
        }

        if !element.style.is_empty() {
            let mut style = String::new();
            if let Some(literal) = literal_style.map(str::trim).filter(|s| !s.is_empty()) {
                style.push_str(literal.trim_end_matches(';'));
                style.push(';');
            }
            for (prop, value) in &element.style {
                let _ = write!(style, "{prop}:{value};");
            }
            self.write_attribute(buf, "style", &style)?;
        }

        if element.children.is_empty() {
            if (self.self_close_empty && element.namespace.is_some()) || is_void(element) {
                return write!(buf, "/>");
            }
            return write!(buf, "></{}>", element.tag);
        }

        write!(buf, ">")?;

        let break_lines = self.pretty
            && element
                .children
                .iter()
                .any(|child| doc.element(*child).is_some());

        for child in &element.children {
            if break_lines {
                writeln!(buf)?;
                write_indent(buf, depth + 1)?;
            }
            self.render_node(buf, doc, *child, depth + 1, Some(element))?;
        }

        if break_lines {
            writeln!(buf)?;
            write_indent(buf, depth)?;
        }

        write!(buf, "</{}>", element.tag)
    }

    fn write_attribute(&self, buf: &mut impl Write, name: &str, value: &str) -> std::fmt::Result {
        if self.sanitize {
            write!(
                buf,
                " {name}=\"{}\"",
                askama_escape::escape(value, askama_escape::Html)
            )
        } else {
            write!(buf, " {name}=\"{value}\"")
        }
    }

    fn write_text(&self, buf: &mut impl Write, text: &str, raw: bool) -> std::fmt::Result {
        if self.sanitize && !raw {
            write!(buf, "{}", askama_escape::escape(text, askama_escape::Html))
        } else {
            write!(buf, "{text}")
        }
    }
}

fn write_indent(buf: &mut impl Write, depth: usize) -> std::fmt::Result {
    for _ in 0..depth {
        buf.write_str(INDENT)?;
    }
    Ok(())
}

fn has_attribute(element: &ElementData, name: &str) -> bool {
    element.attributes.iter().any(|attr| attr.name == name)
}

fn uses_xlink(doc: &Document, element: &ElementData) -> bool {
    let is_xlink = |attr: &Attribute| attr.namespace.as_deref() == Some(XLINK_NAMESPACE);
    element.attributes.iter().any(is_xlink)
        || element
            .children
            .iter()
            .filter_map(|child| doc.element(*child))
            .any(|child| uses_xlink(doc, child))
}

fn is_void(element: &ElementData) -> bool {
    element.namespace.is_none() && VOID_ELEMENTS.contains(&element.tag.to_ascii_lowercase().as_str())
}

pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];
