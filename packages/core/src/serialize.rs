//! Converting descriptions to and from JSON.
//!
//! JSON has no notion of elements or listeners, so those only travel one way: an element is written
//! as its numeric id and a listener as `null`.

use crate::innerlude::*;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An error produced when a JSON document can't be turned into a [`Description`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DescriptionError {
    /// The JSON root was not an object.
    #[error("expected a JSON object at the root of a description, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(list) => Value::List(list.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Map(map.into_iter().collect()),
        }
    }
}

impl TryFrom<serde_json::Value> for Description {
    type Error = DescriptionError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(DescriptionError::NotAnObject {
                found: json_type(&other),
            }),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::Int(int) => serializer.serialize_i64(*int),
            Value::Float(float) => serializer.serialize_f64(*float),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Map(map) => map.serialize(serializer),
            Value::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for entry in list {
                    seq.serialize_element(entry)?;
                }
                seq.end()
            }
            Value::Element(id) => serializer.serialize_u64(id.0 as u64),
            Value::Null | Value::Listener(_) => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Description {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Description::try_from(json).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desc;

    #[test]
    fn json_objects_keep_their_key_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{ "z": 1, "a": { "y": "x" }, "m": [1, 2.5], "?": null }"#)
                .unwrap();
        let description = Description::try_from(json).unwrap();

        assert_eq!(description.keys().collect::<Vec<_>>(), ["z", "a", "m", "?"]);
        assert_eq!(
            description,
            desc! {
                "z" => 1,
                "a" => desc! { "y" => "x" },
                "m" => [Value::Int(1), Value::Float(2.5)],
                "?" => (),
            }
        );
    }

    #[test]
    fn json_root_must_be_an_object() {
        assert_eq!(
            Description::try_from(serde_json::json!([1, 2])),
            Err(DescriptionError::NotAnObject { found: "an array" })
        );
    }

    #[test]
    fn serializes_back_to_json() {
        let description = desc! { "b" => true, "a" => desc! { "x" => 1 }, "text" => () };
        assert_eq!(
            serde_json::to_string(&description).unwrap(),
            r#"{"b":true,"a":{"x":1},"text":null}"#
        );
    }
}
