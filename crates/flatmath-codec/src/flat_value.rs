//! Flattening of each supported type into its canonical number sequence.
//!
//! | Kind       | Components                                   |
//! |------------|----------------------------------------------|
//! | Vector2    | x y                                          |
//! | Vector3    | x y z                                        |
//! | Vector4    | x y z w                                      |
//! | Quaternion | x y z w, or w x y z when configured          |
//! | Matrix4x4  | m[0] .. m[15], column-major                  |
//! | Ray        | origin.x origin.y origin.z dir.x dir.y dir.z |
//! | Plane      | normal.x normal.y normal.z distance          |

use crate::{CodecConfig, CodecError, Kind, QuaternionOrder, Result};
use flatmath_math::{Mat4, Plane, Quat, Ray, Vec2, Vec3, Vec4};

mod sealed {
    pub trait Sealed {}
}

/// A value the codec can write as a flat array of numbers.
///
/// Implemented for exactly the seven supported types; the trait is sealed.
pub trait FlatValue: sealed::Sealed + Copy + 'static {
    /// Shape of this type's encoding.
    const KIND: Kind;

    /// Components in wire order.
    fn to_components(&self, config: &CodecConfig) -> Vec<f32>;

    /// Build a value from components in wire order.
    ///
    /// Fails with [`CodecError::LengthMismatch`] unless `c.len()` equals
    /// `Self::KIND.len()`.
    fn from_components(c: &[f32], config: &CodecConfig) -> Result<Self>;
}

/// Encode a value into its flat component sequence.
pub fn encode<T: FlatValue>(value: &T, config: &CodecConfig) -> Vec<f32> {
    value.to_components(config)
}

/// Decode a flat component sequence, rejecting any length other than the kind's.
pub fn decode<T: FlatValue>(components: &[f32], config: &CodecConfig) -> Result<T> {
    T::from_components(components, config)
}

pub(crate) fn check_len(kind: Kind, found: usize) -> Result<()> {
    if found != kind.len() {
        return Err(CodecError::LengthMismatch {
            kind,
            expected: kind.len(),
            found,
        });
    }
    Ok(())
}

/// View `c` as exactly `N` components of `kind`.
fn components<const N: usize>(kind: Kind, c: &[f32]) -> Result<[f32; N]> {
    check_len(kind, c.len())?;
    let mut out = [0.0; N];
    out.copy_from_slice(c);
    Ok(out)
}

impl sealed::Sealed for Vec2 {}
impl FlatValue for Vec2 {
    const KIND: Kind = Kind::Vector2;

    fn to_components(&self, _: &CodecConfig) -> Vec<f32> {
        vec![self.x, self.y]
    }

    fn from_components(c: &[f32], _: &CodecConfig) -> Result<Self> {
        let [x, y] = components(Self::KIND, c)?;
        Ok(Vec2::new(x, y))
    }
}

impl sealed::Sealed for Vec3 {}
impl FlatValue for Vec3 {
    const KIND: Kind = Kind::Vector3;

    fn to_components(&self, _: &CodecConfig) -> Vec<f32> {
        vec![self.x, self.y, self.z]
    }

    fn from_components(c: &[f32], _: &CodecConfig) -> Result<Self> {
        let [x, y, z] = components(Self::KIND, c)?;
        Ok(Vec3::new(x, y, z))
    }
}

impl sealed::Sealed for Vec4 {}
impl FlatValue for Vec4 {
    const KIND: Kind = Kind::Vector4;

    fn to_components(&self, _: &CodecConfig) -> Vec<f32> {
        vec![self.x, self.y, self.z, self.w]
    }

    fn from_components(c: &[f32], _: &CodecConfig) -> Result<Self> {
        let [x, y, z, w] = components(Self::KIND, c)?;
        Ok(Vec4::new(x, y, z, w))
    }
}

impl sealed::Sealed for Quat {}
impl FlatValue for Quat {
    const KIND: Kind = Kind::Quaternion;

    fn to_components(&self, config: &CodecConfig) -> Vec<f32> {
        // nalgebra stores quaternion coordinates as [i, j, k, w].
        let [x, y, z, w] = [self.coords[0], self.coords[1], self.coords[2], self.coords[3]];
        match config.quaternion_order() {
            QuaternionOrder::Xyzw => vec![x, y, z, w],
            QuaternionOrder::Wxyz => vec![w, x, y, z],
        }
    }

    fn from_components(c: &[f32], config: &CodecConfig) -> Result<Self> {
        let [c0, c1, c2, c3] = components(Self::KIND, c)?;
        Ok(match config.quaternion_order() {
            QuaternionOrder::Xyzw => Quat::new(c3, c0, c1, c2),
            QuaternionOrder::Wxyz => Quat::new(c0, c1, c2, c3),
        })
    }
}

impl sealed::Sealed for Mat4 {}
impl FlatValue for Mat4 {
    const KIND: Kind = Kind::Matrix4x4;

    fn to_components(&self, _: &CodecConfig) -> Vec<f32> {
        self.as_slice().to_vec()
    }

    fn from_components(c: &[f32], _: &CodecConfig) -> Result<Self> {
        let cells: [f32; 16] = components(Self::KIND, c)?;
        Ok(Mat4::from_column_slice(&cells))
    }
}

impl sealed::Sealed for Ray {}
impl FlatValue for Ray {
    const KIND: Kind = Kind::Ray;

    fn to_components(&self, _: &CodecConfig) -> Vec<f32> {
        self.to_array().to_vec()
    }

    fn from_components(c: &[f32], _: &CodecConfig) -> Result<Self> {
        Ok(Ray::from_array(components(Self::KIND, c)?))
    }
}

impl sealed::Sealed for Plane {}
impl FlatValue for Plane {
    const KIND: Kind = Kind::Plane;

    fn to_components(&self, _: &CodecConfig) -> Vec<f32> {
        self.to_array().to_vec()
    }

    fn from_components(c: &[f32], _: &CodecConfig) -> Result<Self> {
        Ok(Plane::from_array(components(Self::KIND, c)?))
    }
}
