//! Type dispatch over the closed set of supported shapes.

use flatmath_math::{Mat4, Plane, Quat, Ray, Vec2, Vec3, Vec4};
use std::any::TypeId;
use std::fmt;

/// One of the seven value shapes the codec knows how to flatten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `[x, y]`
    Vector2,
    /// `[x, y, z]`
    Vector3,
    /// `[x, y, z, w]`
    Vector4,
    /// `[x, y, z, w]` or `[w, x, y, z]` depending on configuration.
    Quaternion,
    /// 16 cells in column-major order.
    Matrix4x4,
    /// `[origin.x, origin.y, origin.z, direction.x, direction.y, direction.z]`
    Ray,
    /// `[normal.x, normal.y, normal.z, distance]`
    Plane,
}

impl Kind {
    /// Every supported kind.
    pub const ALL: [Kind; 7] = [
        Kind::Vector2,
        Kind::Vector3,
        Kind::Vector4,
        Kind::Quaternion,
        Kind::Matrix4x4,
        Kind::Ray,
        Kind::Plane,
    ];

    /// Number of numbers in the flat encoding.
    pub const fn len(self) -> usize {
        match self {
            Kind::Vector2 => 2,
            Kind::Vector3 => 3,
            Kind::Vector4 | Kind::Quaternion | Kind::Plane => 4,
            Kind::Ray => 6,
            Kind::Matrix4x4 => 16,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Vector2 => "Vector2",
            Kind::Vector3 => "Vector3",
            Kind::Vector4 => "Vector4",
            Kind::Quaternion => "Quaternion",
            Kind::Matrix4x4 => "Matrix4x4",
            Kind::Ray => "Ray",
            Kind::Plane => "Plane",
        }
    }

    /// Kind for an exact concrete type, or `None` if the codec does not handle it.
    pub fn of<T: ?Sized + 'static>() -> Option<Kind> {
        Self::from_type_id(TypeId::of::<T>())
    }

    /// Kind for an erased type id. Exact match only.
    pub fn from_type_id(id: TypeId) -> Option<Kind> {
        if id == TypeId::of::<Vec2>() {
            Some(Kind::Vector2)
        } else if id == TypeId::of::<Vec3>() {
            Some(Kind::Vector3)
        } else if id == TypeId::of::<Vec4>() {
            Some(Kind::Vector4)
        } else if id == TypeId::of::<Quat>() {
            Some(Kind::Quaternion)
        } else if id == TypeId::of::<Mat4>() {
            Some(Kind::Matrix4x4)
        } else if id == TypeId::of::<Ray>() {
            Some(Kind::Ray)
        } else if id == TypeId::of::<Plane>() {
            Some(Kind::Plane)
        } else {
            None
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
