//! Generic reconstruction of typed shapes from untyped payloads.
//!
//! A payload arrives as a `serde_json::Value` (or as JSON text) and is turned
//! into a [`Node`]: a constructed shape, an ordered list of nodes, or the raw
//! value forwarded unchanged. Shapes declare their nested fields through their
//! field types:
//!
//! - `Option<Node<U>>` for a field holding another shape (or a list of them)
//! - `Option<Keyed<U>>` for a field mapping arbitrary keys to shapes
//! - `Option<Scalar<T>>` for a primitive field
//! - `Option<Value>` for a field whose representation is not modelled
//!
//! Reconstruction never fails. Anything a shape cannot accept is kept as
//! [`Node::Raw`] or [`Scalar::Foreign`] so callers still see the producer's data.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

/// A reconstructed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    /// The payload was a keyed structure accepted by the shape.
    Item(T),
    /// The payload was a sequence; each element reconstructed in order.
    List(Vec<Node<T>>),
    /// Falsy, primitive or otherwise unrecognised payload, forwarded as-is.
    Raw(Value),
}

impl<T> Node<T> {
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Node::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            Node::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Constructed items at this level: the item itself, or the items of a list.
    ///
    /// Raw entries and nested lists are skipped.
    pub fn items(&self) -> Vec<&T> {
        match self {
            Node::Item(item) => vec![item],
            Node::List(nodes) => nodes.iter().filter_map(Node::as_item).collect(),
            Node::Raw(_) => Vec::new(),
        }
    }

    /// Entries at this level: one for an item, the element count for a list.
    ///
    /// A raw payload counts as zero whatever value it carries.
    pub fn len(&self) -> usize {
        match self {
            Node::List(nodes) => nodes.len(),
            Node::Item(_) => 1,
            Node::Raw(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Node::Raw(_))
    }
}

impl<T> From<T> for Node<T> {
    fn from(item: T) -> Self {
        Node::Item(item)
    }
}

impl<T: Serialize> Serialize for Node<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Item(item) => item.serialize(serializer),
            Node::List(nodes) => nodes.serialize(serializer),
            Node::Raw(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Node<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(build)
    }
}

/// A field whose value maps arbitrary string keys to shapes.
///
/// Every value is reconstructed on its own; the key set and its order are left
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyed<T> {
    Map(IndexMap<String, Node<T>>),
    Raw(Value),
}

impl<T> Keyed<T> {
    pub fn get(&self, key: &str) -> Option<&Node<T>> {
        match self {
            Keyed::Map(map) => map.get(key),
            Keyed::Raw(_) => None,
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        match self {
            Keyed::Map(map) => map.keys().map(String::as_str).collect(),
            Keyed::Raw(_) => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Keyed::Map(map) => map.is_empty(),
            Keyed::Raw(value) => is_falsy(value),
        }
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Keyed::Map(map) => map.serialize(serializer),
            Keyed::Raw(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keyed = match Value::deserialize(deserializer)? {
            Value::Object(map) => Keyed::Map(
                map.into_iter()
                    .map(|(key, value)| (key, build(value)))
                    .collect(),
            ),
            other => Keyed::Raw(other),
        };
        Ok(keyed)
    }
}

/// A primitive field: the declared type when the value has it, otherwise the
/// value exactly as the producer sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar<T> {
    Typed(T),
    Foreign(Value),
}

impl<T> Scalar<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            Scalar::Typed(value) => Some(value),
            Scalar::Foreign(_) => None,
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Scalar::Typed(value) => Some(value),
            Scalar::Foreign(_) => None,
        }
    }
}

impl<T> From<T> for Scalar<T> {
    fn from(value: T) -> Self {
        Scalar::Typed(value)
    }
}

/// Typed view of an optional primitive field.
pub(crate) fn scalar<T>(field: &Option<Scalar<T>>) -> Option<&T> {
    field.as_ref().and_then(Scalar::typed)
}

/// Typed view of an optional nested-shape field.
pub(crate) fn item<T>(field: &Option<Node<T>>) -> Option<&T> {
    field.as_ref().and_then(Node::as_item)
}

/// Reconstruct a payload into shape `T`.
///
/// A string payload is first decoded as JSON text; if it does not hold an
/// object or array it is treated as a plain string.
pub fn reconstruct<T: DeserializeOwned>(raw: Value) -> Node<T> {
    match raw {
        Value::String(text) if !text.is_empty() => match serde_json::from_str::<Value>(&text) {
            Ok(decoded @ (Value::Object(_) | Value::Array(_))) => build(decoded),
            _ => build(Value::String(text)),
        },
        other => build(other),
    }
}

/// Reconstruct a payload received as JSON text.
///
/// Text that is not valid JSON is forwarded as a raw string.
pub fn reconstruct_text<T: DeserializeOwned>(text: &str) -> Node<T> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => build(value),
        Err(err) => {
            debug!("Payload text is not JSON, forwarding unchanged: {}", err);
            Node::Raw(Value::String(text.to_string()))
        }
    }
}

fn build<T: DeserializeOwned>(raw: Value) -> Node<T> {
    if is_falsy(&raw) {
        return Node::Raw(raw);
    }
    match raw {
        Value::Array(elements) => Node::List(elements.into_iter().map(build).collect()),
        other => instantiate(other),
    }
}

fn instantiate<T: DeserializeOwned>(raw: Value) -> Node<T> {
    match T::deserialize(&raw) {
        Ok(item) => Node::Item(item),
        Err(err) => {
            debug!(
                "Payload does not fit {}, forwarding unchanged: {}",
                std::any::type_name::<T>(),
                err
            );
            Node::Raw(raw)
        }
    }
}

/// `null`, `false`, zero and the empty string short-circuit reconstruction.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
