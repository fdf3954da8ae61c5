//! Per-region attribute store - a string-keyed map of typed values.

use area_shapes::EntityId;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A value stored under an attribute key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Vector(Vec3),
    Entity(EntityId),
    /// Arbitrary structured data.
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Name of the stored type, as reported by a failed typed lookup.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Int(_) => "int",
            AttributeValue::Float(_) => "float",
            AttributeValue::Text(_) => "text",
            AttributeValue::Vector(_) => "vector",
            AttributeValue::Entity(_) => "entity",
            AttributeValue::Json(_) => "json",
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Bool(v) => write!(f, "{}", v),
            AttributeValue::Int(v) => write!(f, "{}", v),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Text(v) => f.write_str(v),
            AttributeValue::Vector(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            AttributeValue::Entity(v) => write!(f, "{}", v),
            AttributeValue::Json(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    String => Text,
    &str => Text,
    Vec3 => Vector,
    EntityId => Entity,
    serde_json::Value => Json,
}

/// Types that can be read back out of an [`AttributeValue`].
///
/// Retrieval is type-checked: asking for an `i64` when a `Text` is stored
/// yields `None` rather than a conversion.
pub trait FromAttribute: Sized {
    fn from_attribute(value: &AttributeValue) -> Option<Self>;
}

impl FromAttribute for bool {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for i64 {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for i32 {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromAttribute for f64 {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for f32 {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Float(v) => Some(*v as f32),
            _ => None,
        }
    }
}

impl FromAttribute for String {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromAttribute for Vec3 {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Vector(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for EntityId {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Entity(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for serde_json::Value {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Json(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromAttribute for AttributeValue {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        Some(value.clone())
    }
}

/// Result of a type-checked attribute lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeLookup<T> {
    Found(T),
    Missing,
    /// The key exists but holds a different type.
    TypeMismatch { stored: &'static str },
}

impl<T> AttributeLookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            AttributeLookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, AttributeLookup::Found(_))
    }
}

/// An overwrite of an existing key, passed to attribute-changed observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeChange {
    pub key: String,
    pub old: AttributeValue,
    pub new: AttributeValue,
}

/// Heterogeneous key/value map. Keys are case-sensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeStore {
    values: HashMap<String, AttributeValue>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    /// Typed lookup distinguishing a missing key from a type mismatch.
    pub fn lookup<T: FromAttribute>(&self, key: &str) -> AttributeLookup<T> {
        match self.values.get(key) {
            None => AttributeLookup::Missing,
            Some(value) => match T::from_attribute(value) {
                Some(typed) => AttributeLookup::Found(typed),
                None => AttributeLookup::TypeMismatch {
                    stored: value.type_name(),
                },
            },
        }
    }

    /// Insert or overwrite. Returns the previous value if the key existed.
    pub fn insert(&mut self, key: String, value: AttributeValue) -> Option<AttributeValue> {
        self.values.insert(key, value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
