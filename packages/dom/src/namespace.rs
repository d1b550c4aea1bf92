//! Namespace resolution shared by the builder and the renderers.

/// The SVG namespace. Elements built under an `svg` root live here.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// The XLink namespace, used for `xlink:`-prefixed attributes such as `xlink:href`.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Attribute names starting with this prefix are set in the [`XLINK_NAMESPACE`].
pub const XLINK_PREFIX: &str = "xlink:";

/// A map under this key is applied as inline style instead of building a child element.
pub const STYLE_KEY: &str = "style";

/// The namespace a root element with this tag is created in when the caller doesn't choose one.
///
/// Only `svg` (in any letter case) resolves to a namespace. Everything else is plain markup.
pub fn resolve_namespace(tag: &str) -> Option<&'static str> {
    tag.eq_ignore_ascii_case("svg").then_some(SVG_NAMESPACE)
}

/// The namespace an attribute with this name is set in, regardless of its element's namespace.
pub fn attribute_namespace(name: &str) -> Option<&'static str> {
    name.starts_with(XLINK_PREFIX).then_some(XLINK_NAMESPACE)
}
