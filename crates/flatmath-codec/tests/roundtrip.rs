//! Randomized write/read round trips through JSON text for every supported kind.

use approx::assert_abs_diff_eq;
use flatmath_codec::{Codec, CodecConfig, CodecError, FlatValue, Kind};
use flatmath_math::{ApproxEq, Mat4, Plane, Quat, Ray, Vec2, Vec3, Vec4};
use nalgebra::UnitQuaternion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use std::f32::consts::PI;

const EPSILON: f32 = 1e-5;
const ITERATIONS: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_f1a7)
}

fn inside_unit_circle(rng: &mut StdRng) -> Vec2 {
    loop {
        let v = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        if v.norm_squared() <= 1.0 {
            return v;
        }
    }
}

fn inside_unit_sphere(rng: &mut StdRng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if v.norm_squared() <= 1.0 {
            return v;
        }
    }
}

fn on_unit_sphere(rng: &mut StdRng) -> Vec3 {
    loop {
        if let Some(v) = inside_unit_sphere(rng).try_normalize(1e-3) {
            return v;
        }
    }
}

fn rotation(rng: &mut StdRng) -> Quat {
    UnitQuaternion::from_euler_angles(
        rng.random_range(-PI..PI),
        rng.random_range(-PI..PI),
        rng.random_range(-PI..PI),
    )
    .into_inner()
}

/// Write `value`, check every array slot against `expected`, then read it back.
fn write_and_check<T: FlatValue>(codec: &Codec, value: &T, expected: &[f32]) -> T {
    let text = codec.to_string(value).unwrap();
    let array: Value = serde_json::from_str(&text).unwrap();
    let array = array.as_array().expect("encoded as array");
    assert_eq!(array.len(), T::KIND.len());
    assert_eq!(array.len(), expected.len());
    for (i, e) in expected.iter().enumerate() {
        assert_abs_diff_eq!(*e, array[i].as_f64().unwrap() as f32, epsilon = EPSILON);
    }
    codec.from_str(&text).unwrap()
}

#[test]
fn vector2_roundtrip() {
    let codec = Codec::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = inside_unit_circle(&mut rng);
        let restored = write_and_check(&codec, &v, &[v.x, v.y]);
        assert!(restored.approx_eq(&v));
    }
}

#[test]
fn vector3_roundtrip() {
    let codec = Codec::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = inside_unit_sphere(&mut rng);
        let restored = write_and_check(&codec, &v, &[v.x, v.y, v.z]);
        assert!(restored.approx_eq(&v));
    }
}

#[test]
fn vector4_roundtrip() {
    let codec = Codec::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = inside_unit_sphere(&mut rng).push(rng.random::<f32>());
        let restored = write_and_check(&codec, &v, &[v.x, v.y, v.z, v.w]);
        assert!(restored.approx_eq(&v));
    }
}

#[test]
fn quaternion_roundtrip() {
    let codec = Codec::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = rotation(&mut rng);
        let restored = write_and_check(&codec, &q, &[q.i, q.j, q.k, q.w]);
        assert!(restored.approx_eq(&q));
    }
}

#[test]
fn quaternion_w_first_roundtrip() {
    let mut codec = Codec::default();
    codec.config_mut().quaternion_w_component_first = true;
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = rotation(&mut rng);
        let restored = write_and_check(&codec, &q, &[q.w, q.i, q.j, q.k]);
        assert!(restored.approx_eq(&q));
    }
}

#[test]
fn matrix4x4_roundtrip() {
    let codec = Codec::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let mut m = Mat4::zeros();
        for i in 0..16 {
            m[i] = rng.random();
        }
        let expected: Vec<f32> = (0..16).map(|i| m[i]).collect();
        let restored = write_and_check(&codec, &m, &expected);
        assert!(restored.approx_eq(&m));
    }
}

#[test]
fn ray_roundtrip() {
    let codec = Codec::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let ray = Ray::new(inside_unit_sphere(&mut rng), on_unit_sphere(&mut rng));
        let (o, d) = (ray.origin, ray.direction);
        let restored = write_and_check(&codec, &ray, &[o.x, o.y, o.z, d.x, d.y, d.z]);
        assert!(restored.origin.approx_eq(&ray.origin));
        assert!(restored.direction.approx_eq(&ray.direction));
    }
}

#[test]
fn plane_roundtrip() {
    let codec = Codec::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let plane = Plane::new(on_unit_sphere(&mut rng), rng.random());
        let n = plane.normal;
        let restored = write_and_check(&codec, &plane, &[n.x, n.y, n.z, plane.distance]);
        assert!(restored.normal.approx_eq(&plane.normal));
        assert_abs_diff_eq!(restored.distance, plane.distance, epsilon = EPSILON);
    }
}

#[test]
fn composite_ordering() {
    let codec = Codec::default();
    let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(codec.to_string(&ray).unwrap(), "[1.0,2.0,3.0,0.0,0.0,1.0]");

    let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 5.0);
    assert_eq!(codec.to_string(&plane).unwrap(), "[0.0,1.0,0.0,5.0]");
}

#[test]
fn matrix_linearity() {
    let codec = Codec::default();
    let mut m = Mat4::zeros();
    for i in 0..16 {
        m[i] = i as f32;
    }
    assert_eq!(
        codec.encode(&m),
        (0..16).map(|i| i as f32).collect::<Vec<_>>()
    );

    let text = codec.to_string(&m).unwrap();
    let restored: Mat4 = codec.from_str(&text).unwrap();
    assert_eq!(restored, m);
}

#[test]
fn vector3_length_rejection() {
    let codec = Codec::default();
    for text in ["[1.0, 2.0]", "[1.0, 2.0, 3.0, 4.0]"] {
        match codec.from_str::<Vec3>(text) {
            Err(CodecError::LengthMismatch {
                kind: Kind::Vector3,
                expected: 3,
                ..
            }) => {}
            other => panic!("expected LengthMismatch for {text}, got {other:?}"),
        }
    }
}

#[test]
fn unsupported_type_passthrough() {
    let codec = Codec::default();
    assert!(!Codec::can_handle::<Vec<f32>>());
    assert!(matches!(
        codec.try_to_value(&vec![1.0_f32, 2.0]),
        Err(CodecError::UnsupportedType { .. })
    ));
    assert!(matches!(
        codec.try_from_value::<(f32, f32)>(&serde_json::json!([1.0, 2.0])),
        Err(CodecError::UnsupportedType { .. })
    ));
}

#[test]
fn every_kind_through_one_document() {
    let config = CodecConfig::w_first();
    let codec = Codec::new(config);
    let mut rng = rng();

    let values = [
        flatmath_codec::MathValue::from(inside_unit_circle(&mut rng)),
        inside_unit_sphere(&mut rng).into(),
        Vec4::new(rng.random(), rng.random(), rng.random(), rng.random()).into(),
        rotation(&mut rng).into(),
        Mat4::new_rotation(inside_unit_sphere(&mut rng)).into(),
        Ray::new(inside_unit_sphere(&mut rng), on_unit_sphere(&mut rng)).into(),
        Plane::from_normal_and_point(on_unit_sphere(&mut rng), inside_unit_sphere(&mut rng)).into(),
    ];

    let doc = Value::Array(
        values
            .iter()
            .map(|v| serde_json::to_value(v.encode(&config)).unwrap())
            .collect(),
    );
    let text = serde_json::to_string(&doc).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    let nodes = parsed.as_array().unwrap();

    for (value, node) in values.iter().zip(nodes) {
        let restored = codec.read_kind(value.kind(), node).unwrap();
        assert_eq!(restored.kind(), value.kind());
        assert_eq!(
            restored.encode(&config).len(),
            value.kind().len(),
            "{}",
            value.kind()
        );
        for (a, b) in restored.encode(&config).iter().zip(value.encode(&config)) {
            assert_abs_diff_eq!(*a, b, epsilon = EPSILON);
        }
    }
}
