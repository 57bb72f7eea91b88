//! The [`Codec`]: a configured entry point for reading and writing values.

use crate::flat_value::{self, check_len};
use crate::{CodecConfig, CodecError, Flat, FlatValue, Kind, MathValue, Result};
use serde_json::Value;
use std::any::{Any, TypeId};

/// Converts supported math values to and from flat JSON arrays.
///
/// The configuration is read on every call, so changing it through
/// [`Codec::config_mut`] takes effect immediately. Encoded arrays carry no
/// order marker: a quaternion must be read with the configuration it was
/// written with, otherwise it decodes to the wrong (but well-formed) value.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut CodecConfig {
        &mut self.config
    }

    /// Whether values of type `T` are handled by this codec.
    pub fn can_handle<T: ?Sized + 'static>() -> bool {
        Kind::of::<T>().is_some()
    }

    /// Flat components of `value`.
    pub fn encode<T: FlatValue>(&self, value: &T) -> Vec<f32> {
        flat_value::encode(value, &self.config)
    }

    /// Value from flat components; the length must match `T`'s kind.
    pub fn decode<T: FlatValue>(&self, components: &[f32]) -> Result<T> {
        flat_value::decode(components, &self.config)
    }

    /// Write `value` as a JSON array node.
    pub fn to_value<T: FlatValue>(&self, value: &T) -> Value {
        components_to_value(&self.encode(value))
    }

    /// Read a `T` from a JSON array node.
    pub fn from_value<T: FlatValue>(&self, node: &Value) -> Result<T> {
        let components = read_components(T::KIND, node)?;
        T::from_components(&components, &self.config)
    }

    /// Write `value` as JSON text.
    pub fn to_string<T: FlatValue>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(&Flat::new(value, &self.config))?)
    }

    /// Read a `T` from JSON text.
    ///
    /// The text is parsed into a document node first so that shape errors
    /// come back as [`CodecError::LengthMismatch`] or
    /// [`CodecError::MalformedElement`] rather than as opaque JSON errors.
    pub fn from_str<T: FlatValue>(&self, s: &str) -> Result<T> {
        let node: Value = serde_json::from_str(s)?;
        self.from_value(&node)
    }

    /// Write an erased value, or fail with [`CodecError::UnsupportedType`].
    pub fn write_any(&self, value: &dyn Any) -> Result<Value> {
        let value = MathValue::from_any(value).ok_or_else(|| CodecError::UnsupportedType {
            type_name: format!("{:?}", value.type_id()),
        })?;
        Ok(components_to_value(&value.encode(&self.config)))
    }

    /// Read a value whose type is only known by id.
    ///
    /// Unsupported ids fail with [`CodecError::UnsupportedType`] before the
    /// node is inspected.
    pub fn read_any(&self, type_id: TypeId, node: &Value) -> Result<MathValue> {
        let kind = Kind::from_type_id(type_id).ok_or_else(|| CodecError::UnsupportedType {
            type_name: format!("{:?}", type_id),
        })?;
        self.read_kind(kind, node)
    }

    /// Read a value of an explicit kind.
    pub fn read_kind(&self, kind: Kind, node: &Value) -> Result<MathValue> {
        let components = read_components(kind, node)?;
        MathValue::decode(kind, &components, &self.config)
    }

    /// Typed version of [`Codec::write_any`] for generic callers.
    pub fn try_to_value<T: 'static>(&self, value: &T) -> Result<Value> {
        if !Self::can_handle::<T>() {
            return Err(CodecError::unsupported::<T>());
        }
        self.write_any(value)
    }

    /// Typed version of [`Codec::read_any`] for generic callers.
    pub fn try_from_value<T: Copy + 'static>(&self, node: &Value) -> Result<T> {
        let Some(kind) = Kind::of::<T>() else {
            return Err(CodecError::unsupported::<T>());
        };
        let value = self.read_kind(kind, node)?;
        downcast(value).ok_or_else(CodecError::unsupported::<T>)
    }
}

fn downcast<T: Copy + 'static>(value: MathValue) -> Option<T> {
    let any: &dyn Any = match &value {
        MathValue::Vector2(v) => v,
        MathValue::Vector3(v) => v,
        MathValue::Vector4(v) => v,
        MathValue::Quaternion(q) => q,
        MathValue::Matrix4x4(m) => m,
        MathValue::Ray(r) => r,
        MathValue::Plane(p) => p,
    };
    any.downcast_ref::<T>().copied()
}

fn components_to_value(components: &[f32]) -> Value {
    Value::Array(components.iter().map(|&c| Value::from(c)).collect())
}

/// Validate that `node` is an array of exactly `kind.len()` numbers.
///
/// Stops at the first element that is not a number.
fn read_components(kind: Kind, node: &Value) -> Result<Vec<f32>> {
    let Value::Array(items) = node else {
        return Err(CodecError::NotAnArray {
            kind,
            found: json_type_name(node),
        });
    };
    check_len(kind, items.len())?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64()
                .map(|n| n as f32)
                .ok_or_else(|| CodecError::MalformedElement {
                    kind,
                    index,
                    found: item.to_string(),
                })
        })
        .collect()
}

fn json_type_name(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
