#![warn(missing_docs)]

//! Math value types for the flatmath codec.
//!
//! Thin aliases over nalgebra for vectors, quaternions and matrices, plus
//! the two composite shapes the codec knows about ([`Ray`] and [`Plane`])
//! and a tolerance-based [`ApproxEq`] comparison.
//!
//! Components are single precision, matching the values host engines
//! typically hand to a JSON serializer.

use nalgebra::{Matrix4, Quaternion, Vector2, Vector3, Vector4};

/// A 2D vector.
pub type Vec2 = Vector2<f32>;

/// A 3D vector or point.
pub type Vec3 = Vector3<f32>;

/// A 4D vector.
pub type Vec4 = Vector4<f32>;

/// A rotation quaternion. Not required to be unit length.
pub type Quat = Quaternion<f32>;

/// A 4x4 transform matrix, stored column-major.
pub type Mat4 = Matrix4<f32>;

/// A ray defined by an origin and a direction.
///
/// The direction is stored as given; it is not normalized on construction
/// so that a decoded ray reproduces exactly what was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vec3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Origin components followed by direction components.
    pub fn to_array(&self) -> [f32; 6] {
        let (o, d) = (&self.origin, &self.direction);
        [o.x, o.y, o.z, d.x, d.y, d.z]
    }

    /// Inverse of [`Ray::to_array`].
    pub fn from_array(c: [f32; 6]) -> Self {
        Self {
            origin: Vec3::new(c[0], c[1], c[2]),
            direction: Vec3::new(c[3], c[4], c[5]),
        }
    }
}

/// A plane in Hessian form: points `p` with `normal · p + distance = 0`.
///
/// Like [`Ray`], the normal is kept exactly as supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal.
    pub normal: Vec3,
    /// Signed distance term.
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and a distance term.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` facing along `normal`.
    ///
    /// The normal is normalized here. A zero normal is kept unchanged.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.try_normalize(f32::EPSILON).unwrap_or(normal);
        Self {
            normal,
            distance: -normal.dot(&point),
        }
    }

    /// Signed distance from `point` to the plane (for a unit normal).
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Normal components followed by the distance.
    pub fn to_array(&self) -> [f32; 4] {
        let n = &self.normal;
        [n.x, n.y, n.z, self.distance]
    }

    /// Inverse of [`Plane::to_array`].
    pub fn from_array(c: [f32; 4]) -> Self {
        Self {
            normal: Vec3::new(c[0], c[1], c[2]),
            distance: c[3],
        }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vec3::y(), 0.0)
    }
}

/// Tolerance used for approximate comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Maximum absolute difference per component.
    pub absolute: f32,
}

impl Tolerance {
    /// 1e-5 absolute, roughly what a single-precision text round trip can lose.
    pub const DEFAULT: Self = Self { absolute: 1e-5 };

    /// Check if a scalar is effectively zero.
    pub fn is_zero(&self, d: f32) -> bool {
        d.abs() <= self.absolute
    }

    /// Check if two scalars are equal within tolerance.
    pub fn scalars_equal(&self, a: f32, b: f32) -> bool {
        self.is_zero(a - b)
    }

    fn slices_equal(&self, a: &[f32], b: &[f32]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.scalars_equal(*x, *y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Component-wise approximate equality.
pub trait ApproxEq {
    /// True when every component differs by at most `tol.absolute`.
    fn approx_eq_tol(&self, other: &Self, tol: Tolerance) -> bool;

    /// [`ApproxEq::approx_eq_tol`] with [`Tolerance::DEFAULT`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_tol(other, Tolerance::DEFAULT)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_tol(&self, other: &Self, tol: Tolerance) -> bool {
        tol.scalars_equal(*self, *other)
    }
}

macro_rules! impl_approx_eq_for_matrix {
    ($($ty:ty),*) => {
        $(
            impl ApproxEq for $ty {
                fn approx_eq_tol(&self, other: &Self, tol: Tolerance) -> bool {
                    tol.slices_equal(self.as_slice(), other.as_slice())
                }
            }
        )*
    };
}

impl_approx_eq_for_matrix!(Vec2, Vec3, Vec4, Mat4);

impl ApproxEq for Quat {
    fn approx_eq_tol(&self, other: &Self, tol: Tolerance) -> bool {
        tol.slices_equal(self.coords.as_slice(), other.coords.as_slice())
    }
}

impl ApproxEq for Ray {
    fn approx_eq_tol(&self, other: &Self, tol: Tolerance) -> bool {
        tol.slices_equal(&self.to_array(), &other.to_array())
    }
}

impl ApproxEq for Plane {
    fn approx_eq_tol(&self, other: &Self, tol: Tolerance) -> bool {
        tol.slices_equal(&self.to_array(), &other.to_array())
    }
}
