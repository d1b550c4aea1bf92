//! The description model: an ordered mapping from property names to [`Value`]s.

use crate::innerlude::*;
use indexmap::IndexMap;
use std::borrow::Cow;

/// A nested, insertion-ordered description of an element tree.
///
/// Each key is a property name and each value decides what the property becomes when the
/// description is built: an attribute, an inline style map, a child element, a group of sibling
/// elements, a text node, an existing element, or an event listener.
///
/// Inserting a key that already exists replaces the value *in place*. The key keeps the position it
/// was first inserted at.
///
/// Two descriptions are equal only if they hold equal properties in the same order, since the
/// order decides the order of the built children.
#[derive(Debug, Clone, Default)]
pub struct Description {
    entries: IndexMap<String, Value>,
}

impl PartialEq for Description {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Description {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty description with room for `capacity` properties.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Set a property, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Set a property and return the description, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a property mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Remove a property, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Check whether a property is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over the properties in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the description has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Description {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Description {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Description {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The value of a single property in a [`Description`].
///
/// The variant is the shape the property was given, and it alone decides how the property is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string attribute.
    Text(String),
    /// An integer attribute.
    Int(i64),
    /// A floating point attribute.
    Float(f64),
    /// A boolean attribute.
    Bool(bool),
    /// A nested description, or an inline style map under the `style` key.
    Map(Description),
    /// A group of sibling elements sharing the property name as their tag.
    List(Vec<Value>),
    /// A bare text node whose content is the property name itself.
    Null,
    /// An element that was already built, appended as is.
    Element(ElementId),
    /// An event listener subscribed under the property name.
    Listener(EventHandler),
}

impl Value {
    /// Whether this value is an attribute scalar (string, number or boolean).
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Text(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_)
        )
    }

    /// The nested description, if this value is a map.
    pub fn as_map(&self) -> Option<&Description> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The entries, if this value is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// The string form a scalar takes when it is written as an attribute or style property.
    ///
    /// Integral floats drop their fractional part (`50.0` becomes `"50"`), very large and very small
    /// magnitudes use exponent notation (`1e+21`, `1e-7`) and non-finite floats are spelled `NaN`,
    /// `Infinity` and `-Infinity`. Non-scalars have no attribute text.
    pub fn to_attribute_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(text) => Some(Cow::Borrowed(text.as_str())),
            Value::Int(int) => Some(Cow::Owned(int.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Float(f) if f.is_nan() => Some(Cow::Borrowed("NaN")),
            Value::Float(f) if f.is_infinite() => Some(Cow::Borrowed(if f.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            })),
            Value::Float(f) if *f == 0.0 => Some(Cow::Borrowed("0")),
            Value::Float(f) => Some(Cow::Owned(float_text(*f))),
            _ => None,
        }
    }
}

// finite, non-zero floats: positional between 1e-7 and 1e21, exponent notation outside
fn float_text(f: f64) -> String {
    let scientific = format!("{f:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exp) if exp >= 21 => format!("{mantissa}e+{exp}"),
        Ok(exp) if exp <= -7 => format!("{mantissa}e{exp}"),
        _ => f.to_string(),
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Text(value.into_owned())
    }
}

macro_rules! int_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32, isize);

// wider unsigned integers that don't fit are written as floats, like a host number would be
impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(int) => Value::Int(int),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Description> for Value {
    fn from(value: Description) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<ElementId> for Value {
    fn from(value: ElementId) -> Self {
        Value::Element(value)
    }
}

impl From<EventHandler> for Value {
    fn from(value: EventHandler) -> Self {
        Value::Listener(value)
    }
}
