//! Turning a [`Description`] into an element tree.
//!
//! Each property is classified once, by the shape of its value, and then applied:
//!
//! | value                     | becomes                                              |
//! |---------------------------|------------------------------------------------------|
//! | map under `style`         | one inline style property per entry                  |
//! | list                      | one sibling per entry, each tagged with the key      |
//! | `Null`                    | a text node containing the key                       |
//! | element                   | that element, appended as is                         |
//! | listener                  | a listener for the event named by the key            |
//! | any other map             | a child element tagged with the key                  |
//! | string, number or boolean | an attribute, in the XLink namespace for `xlink:*`   |
//!
//! Properties are applied in description order, so siblings appear in the order their keys were
//! inserted.

use crate::namespace::{attribute_namespace, resolve_namespace, STYLE_KEY};
use crate::{DomError, WriteMutations};
use arbor_core::{Description, ElementId, EventHandler, Value};
use std::borrow::Cow;

/// Build `description` as an element named `tag`, resolving the namespace from the tag.
///
/// A tag equal to `svg` in any letter case puts the element and all of its descendants in the SVG
/// namespace. Any other tag builds plain markup. The namespace is resolved once, here, and
/// inherited unchanged by the whole subtree.
pub fn build<M>(dom: &mut M, tag: &str, description: &Description) -> Result<ElementId, DomError>
where
    M: WriteMutations + ?Sized,
{
    build_ns(dom, tag, description, resolve_namespace(tag))
}

/// Build `description` as an element named `tag` in an explicit namespace.
///
/// The namespace is used as given, even `None` for an `svg` tag, and inherited by every descendant.
pub fn build_ns<M>(
    dom: &mut M,
    tag: &str,
    description: &Description,
    namespace: Option<&str>,
) -> Result<ElementId, DomError>
where
    M: WriteMutations + ?Sized,
{
    let el = dom.create_element(tag, namespace)?;
    tracing::trace!(tag, ?namespace, id = el.0, "created element");

    for (name, value) in description.iter() {
        match Property::classify(name, value) {
            Property::Style(styles) => {
                for (prop, value) in styles.iter() {
                    match value.to_attribute_text() {
                        Some(text) => dom.set_style_property(el, prop, &text)?,
                        None => tracing::trace!(prop, "skipping non-scalar style value"),
                    }
                }
            }

            Property::Repeated(entries) => {
                for entry in entries {
                    let child = match entry {
                        Value::Element(existing) => *existing,
                        Value::Map(nested) => build_ns(dom, name, nested, namespace)?,
                        other => {
                            tracing::debug!(name, ?other, "building list entry without properties");
                            build_ns(dom, name, &Description::new(), namespace)?
                        }
                    };
                    dom.append_child(el, child)?;
                }
            }

            Property::Text => {
                let text = dom.create_text_node(name)?;
                dom.append_child(el, text)?;
            }

            Property::Element(existing) => dom.append_child(el, existing)?,

            Property::Listener(handler) => dom.new_event_listener(el, name, handler.clone())?,

            Property::Nested(nested) => {
                let child = build_ns(dom, name, nested, namespace)?;
                dom.append_child(el, child)?;
            }

            Property::Attribute(text) => {
                dom.set_attribute(el, name, attribute_namespace(name), &text)?
            }
        }
    }

    Ok(el)
}

/// What a single property turns into.
#[derive(Debug, PartialEq)]
enum Property<'a> {
    Style(&'a Description),
    Repeated(&'a [Value]),
    Text,
    Element(ElementId),
    Listener(&'a EventHandler),
    Nested(&'a Description),
    Attribute(Cow<'a, str>),
}

impl<'a> Property<'a> {
    // the style check has to come first, a style map is otherwise a nested description
    fn classify(name: &str, value: &'a Value) -> Self {
        match value {
            Value::Map(styles) if name == STYLE_KEY => Property::Style(styles),
            Value::List(entries) => Property::Repeated(entries),
            Value::Null => Property::Text,
            Value::Element(id) => Property::Element(*id),
            Value::Listener(handler) => Property::Listener(handler),
            Value::Map(nested) => Property::Nested(nested),
            Value::Text(text) => Property::Attribute(Cow::Borrowed(text)),
            scalar => Property::Attribute(scalar.to_attribute_text().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::desc;

    #[test]
    fn style_is_only_reserved_for_maps() {
        let styles = Value::from(desc! { "color" => "red" });
        assert_eq!(
            Property::classify("style", &styles),
            Property::Style(styles.as_map().unwrap())
        );
        assert_eq!(
            Property::classify("Style", &styles),
            Property::Nested(styles.as_map().unwrap())
        );

        let inline = Value::from("color: red");
        assert_eq!(
            Property::classify("style", &inline),
            Property::Attribute(Cow::Borrowed("color: red"))
        );
    }

    #[test]
    fn scalars_become_attribute_text() {
        assert_eq!(
            Property::classify("r", &Value::Int(25)),
            Property::Attribute(Cow::Borrowed("25"))
        );
        assert_eq!(
            Property::classify("hidden", &Value::Bool(true)),
            Property::Attribute(Cow::Borrowed("true"))
        );
    }

    #[test]
    fn remaining_shapes() {
        assert_eq!(Property::classify("?", &Value::Null), Property::Text);
        assert_eq!(
            Property::classify("line", &Value::List(vec![])),
            Property::Repeated(&[])
        );
        assert_eq!(
            Property::classify("slot", &Value::Element(ElementId(4))),
            Property::Element(ElementId(4))
        );
    }
}
