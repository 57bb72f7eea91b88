#![warn(missing_docs)]

//! Flat-array JSON codec for math value types.
//!
//! Seven shapes are supported, each written as a JSON array of numbers with
//! no field names:
//!
//! ```text
//! Vector2     [x, y]
//! Vector3     [x, y, z]
//! Vector4     [x, y, z, w]
//! Quaternion  [x, y, z, w]   or [w, x, y, z] with quaternion_w_component_first
//! Matrix4x4   [m0 .. m15]    column-major
//! Ray         [ox, oy, oz, dx, dy, dz]
//! Plane       [nx, ny, nz, distance]
//! ```
//!
//! Decoding rejects arrays of the wrong length and non-numeric elements.
//! Types outside the set are reported as [`CodecError::UnsupportedType`] so
//! the caller can fall back to its own handling.
//!
//! # Example
//!
//! ```
//! use flatmath_codec::{Codec, CodecConfig};
//! use flatmath_math::{Quat, Ray, Vec3};
//!
//! let codec = Codec::new(CodecConfig::w_first());
//! let q = Quat::new(1.0, 0.0, 0.0, 0.0);
//! assert_eq!(codec.to_string(&q).unwrap(), "[1.0,0.0,0.0,0.0]");
//!
//! let ray: Ray = codec.from_str("[1, 2, 3, 0, 0, 1]").unwrap();
//! assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod flat;
pub mod flat_value;
pub mod kind;
pub mod value;

pub use codec::Codec;
pub use config::{CodecConfig, QuaternionOrder};
pub use error::{CodecError, Result};
pub use flat::{Flat, FlatSeed};
pub use flat_value::{decode, encode, FlatValue};
pub use kind::Kind;
pub use value::MathValue;
