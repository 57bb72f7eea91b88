//! serde integration.
//!
//! [`Flat`] writes a value through any serde `Serializer` as a tuple of
//! numbers, and [`FlatSeed`] reads one back through any `Deserializer`.
//! Both take the codec configuration explicitly.
//!
//! For struct fields, this module doubles as a `with` adapter using the
//! default configuration:
//!
//! ```
//! use flatmath_math::{Quat, Vec3};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Transform {
//!     #[serde(with = "flatmath_codec::flat")]
//!     position: Vec3,
//!     #[serde(with = "flatmath_codec::flat::wxyz")]
//!     rotation: Quat,
//! }
//!
//! let t = Transform { position: Vec3::new(1.0, 2.0, 3.0), rotation: Quat::identity() };
//! let json = serde_json::to_string(&t).unwrap();
//! assert_eq!(json, r#"{"position":[1.0,2.0,3.0],"rotation":[1.0,0.0,0.0,0.0]}"#);
//! ```

use crate::{CodecConfig, CodecError, FlatValue, Kind};
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Serializes the wrapped value as a flat array of numbers.
pub struct Flat<'a, T> {
    value: &'a T,
    config: &'a CodecConfig,
}

impl<'a, T: FlatValue> Flat<'a, T> {
    /// Wrap `value` for serialization with `config`.
    pub fn new(value: &'a T, config: &'a CodecConfig) -> Self {
        Self { value, config }
    }
}

impl<T: FlatValue> Serialize for Flat<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let components = self.value.to_components(self.config);
        let mut tuple = serializer.serialize_tuple(components.len())?;
        for c in &components {
            tuple.serialize_element(c)?;
        }
        tuple.end()
    }
}

/// Deserializes a flat array of numbers into `T`.
pub struct FlatSeed<'a, T> {
    config: &'a CodecConfig,
    marker: PhantomData<T>,
}

impl<'a, T: FlatValue> FlatSeed<'a, T> {
    /// Seed that reads with `config`.
    pub fn new(config: &'a CodecConfig) -> Self {
        Self {
            config,
            marker: PhantomData,
        }
    }
}

impl<'de, T: FlatValue> DeserializeSeed<'de> for FlatSeed<'_, T> {
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(FlatVisitor::<T> {
            config: self.config,
            marker: PhantomData,
        })
    }
}

struct FlatVisitor<'a, T> {
    config: &'a CodecConfig,
    marker: PhantomData<T>,
}

impl<'de, T: FlatValue> Visitor<'de> for FlatVisitor<'_, T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} as an array of {} numbers", T::KIND, T::KIND.len())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<T, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let kind = T::KIND;
        let mut components = Vec::with_capacity(kind.len());
        while components.len() < kind.len() {
            let seed = ComponentSeed {
                kind,
                index: components.len(),
            };
            match seq.next_element_seed(seed)? {
                Some(c) => components.push(c),
                None => break,
            }
        }

        let mut found = components.len();
        if found == kind.len() {
            while seq.next_element::<IgnoredAny>()?.is_some() {
                found += 1;
            }
        }

        T::from_components(&components, self.config).map_err(|_| {
            de::Error::custom(CodecError::LengthMismatch {
                kind,
                expected: kind.len(),
                found,
            })
        })
    }
}

/// Reads one array element, reporting non-numbers as
/// [`CodecError::MalformedElement`].
#[derive(Clone, Copy)]
struct ComponentSeed {
    kind: Kind,
    index: usize,
}

impl ComponentSeed {
    fn malformed<E: de::Error>(self, found: Value) -> E {
        E::custom(CodecError::MalformedElement {
            kind: self.kind,
            index: self.index,
            found: found.to_string(),
        })
    }
}

impl<'de> DeserializeSeed<'de> for ComponentSeed {
    type Value = f32;

    fn deserialize<D>(self, deserializer: D) -> Result<f32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for ComponentSeed {
    type Value = f32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a number for {} component {}", self.kind, self.index)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f32, E> {
        Ok(v as f32)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f32, E> {
        Ok(v as f32)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f32, E> {
        Ok(v as f32)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f32, E> {
        Err(self.malformed(Value::Bool(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f32, E> {
        Err(self.malformed(Value::from(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f32, E> {
        Err(self.malformed(Value::Null))
    }

    fn visit_seq<A>(self, seq: A) -> Result<f32, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let found = Value::deserialize(SeqAccessDeserializer::new(seq))?;
        Err(self.malformed(found))
    }

    fn visit_map<A>(self, map: A) -> Result<f32, A::Error>
    where
        A: MapAccess<'de>,
    {
        let found = Value::deserialize(MapAccessDeserializer::new(map))?;
        Err(self.malformed(found))
    }
}

/// `serialize_with` entry point using the default configuration.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: FlatValue,
    S: Serializer,
{
    Flat::new(value, &CodecConfig::default()).serialize(serializer)
}

/// `deserialize_with` entry point using the default configuration.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FlatValue,
    D: Deserializer<'de>,
{
    FlatSeed::new(&CodecConfig::default()).deserialize(deserializer)
}

/// `with` adapter that writes quaternions `w` first.
///
/// Other kinds are unaffected.
pub mod wxyz {
    use super::{Flat, FlatSeed};
    use crate::{CodecConfig, FlatValue};
    use serde::de::{DeserializeSeed, Deserializer};
    use serde::ser::{Serialize, Serializer};

    const CONFIG: CodecConfig = CodecConfig::w_first();

    /// `serialize_with` entry point.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: FlatValue,
        S: Serializer,
    {
        Flat::new(value, &CONFIG).serialize(serializer)
    }

    /// `deserialize_with` entry point.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FlatValue,
        D: Deserializer<'de>,
    {
        FlatSeed::new(&CONFIG).deserialize(deserializer)
    }
}
