//! Runtime-typed values for callers that only hold `&dyn Any`.

use crate::FlatValue;
use crate::{CodecConfig, Kind, Result};
use flatmath_math::{Mat4, Plane, Quat, Ray, Vec2, Vec3, Vec4};
use std::any::Any;

/// A supported value with its kind known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathValue {
    /// 2D vector.
    Vector2(Vec2),
    /// 3D vector.
    Vector3(Vec3),
    /// 4D vector.
    Vector4(Vec4),
    /// Rotation quaternion.
    Quaternion(Quat),
    /// 4x4 matrix.
    Matrix4x4(Mat4),
    /// Ray.
    Ray(Ray),
    /// Plane.
    Plane(Plane),
}

impl MathValue {
    /// Kind of the wrapped value.
    pub fn kind(&self) -> Kind {
        match self {
            MathValue::Vector2(_) => Kind::Vector2,
            MathValue::Vector3(_) => Kind::Vector3,
            MathValue::Vector4(_) => Kind::Vector4,
            MathValue::Quaternion(_) => Kind::Quaternion,
            MathValue::Matrix4x4(_) => Kind::Matrix4x4,
            MathValue::Ray(_) => Kind::Ray,
            MathValue::Plane(_) => Kind::Plane,
        }
    }

    /// Wrap an erased value, or `None` if its type is not supported.
    pub fn from_any(value: &dyn Any) -> Option<Self> {
        let kind = Kind::from_type_id(value.type_id())?;
        Some(match kind {
            Kind::Vector2 => MathValue::Vector2(*value.downcast_ref()?),
            Kind::Vector3 => MathValue::Vector3(*value.downcast_ref()?),
            Kind::Vector4 => MathValue::Vector4(*value.downcast_ref()?),
            Kind::Quaternion => MathValue::Quaternion(*value.downcast_ref()?),
            Kind::Matrix4x4 => MathValue::Matrix4x4(*value.downcast_ref()?),
            Kind::Ray => MathValue::Ray(*value.downcast_ref()?),
            Kind::Plane => MathValue::Plane(*value.downcast_ref()?),
        })
    }

    /// Flat components in wire order.
    pub fn encode(&self, config: &CodecConfig) -> Vec<f32> {
        match self {
            MathValue::Vector2(v) => v.to_components(config),
            MathValue::Vector3(v) => v.to_components(config),
            MathValue::Vector4(v) => v.to_components(config),
            MathValue::Quaternion(q) => q.to_components(config),
            MathValue::Matrix4x4(m) => m.to_components(config),
            MathValue::Ray(r) => r.to_components(config),
            MathValue::Plane(p) => p.to_components(config),
        }
    }

    /// Decode components for an explicit kind.
    pub fn decode(kind: Kind, c: &[f32], config: &CodecConfig) -> Result<Self> {
        Ok(match kind {
            Kind::Vector2 => MathValue::Vector2(FlatValue::from_components(c, config)?),
            Kind::Vector3 => MathValue::Vector3(FlatValue::from_components(c, config)?),
            Kind::Vector4 => MathValue::Vector4(FlatValue::from_components(c, config)?),
            Kind::Quaternion => MathValue::Quaternion(FlatValue::from_components(c, config)?),
            Kind::Matrix4x4 => MathValue::Matrix4x4(FlatValue::from_components(c, config)?),
            Kind::Ray => MathValue::Ray(FlatValue::from_components(c, config)?),
            Kind::Plane => MathValue::Plane(FlatValue::from_components(c, config)?),
        })
    }
}

macro_rules! impl_from_for_math_value {
    ($($variant:ident($ty:ty)),*) => {
        $(
            impl From<$ty> for MathValue {
                fn from(v: $ty) -> Self {
                    MathValue::$variant(v)
                }
            }
        )*
    };
}

impl_from_for_math_value!(
    Vector2(Vec2),
    Vector3(Vec3),
    Vector4(Vec4),
    Quaternion(Quat),
    Matrix4x4(Mat4),
    Ray(Ray),
    Plane(Plane)
);
