// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use affine_math::{Mat4, Mat4x3, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx_vec3(a: Vec3, b: Vec3) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn conjugate_times_unit_quaternion_is_identity() {
    let q = Quat::from_axis_angle(&Vec3::new(1.0, -2.0, 0.5), 1.3);
    let p = q.conjugate() * q;
    let id = Quat::IDENTITY.to_array();
    for (i, (a, e)) in p.to_array().iter().zip(id.iter()).enumerate() {
        assert!((a - e).abs() <= EPS, "component {i}: {p:?}");
    }
}

#[test]
fn rotate_about_z_matches_matrix_convention() {
    let q = Quat::rotation_z(FRAC_PI_2);
    let m = Mat4::rotation_z(FRAC_PI_2);
    let expected = Vec3::new(0.0, -1.0, 0.0);
    approx_vec3(q.rotate(&Vec3::UNIT_X), expected);
    approx_vec3(m.transform_direction(&Vec3::UNIT_X), expected);
}

#[test]
fn quaternion_matrix_equals_axis_builders() {
    for angle in [0.0, FRAC_PI_4, FRAC_PI_3, -1.1, 2.5] {
        approx_eq16(
            Mat4::from_quat(&Quat::rotation_x(angle)).to_array(),
            Mat4::rotation_x(angle).to_array(),
        );
        approx_eq16(
            Mat4::from_quat(&Quat::rotation_y(angle)).to_array(),
            Mat4::rotation_y(angle).to_array(),
        );
        approx_eq16(
            Mat4::from_quat(&Quat::rotation_z(angle)).to_array(),
            Mat4::rotation_z(angle).to_array(),
        );
    }
}

#[test]
fn matrix_of_quaternion_transforms_like_rotate() {
    let q = Quat::from_axis_angle(&Vec3::new(0.3, 1.0, -0.7), 2.1);
    let v = Vec3::new(4.0, -1.0, 2.0);
    approx_vec3(q.to_mat4().transform_direction(&v), q.rotate(&v));
    approx_vec3(q.to_mat4x3().transform_direction(&v), q.rotate(&v));
    // Pure rotation: points and directions agree.
    approx_vec3(q.to_mat4x3().transform_point(&v), q.rotate(&v));
}

#[test]
fn product_applies_left_operand_first() {
    let a = Quat::rotation_x(FRAC_PI_3);
    let b = Quat::rotation_y(FRAC_PI_4);
    let v = Vec3::new(1.0, 2.0, 3.0);
    approx_vec3((a * b).rotate(&v), b.rotate(&a.rotate(&v)));

    let matrix = Mat4::from_quat(&a) * Mat4::from_quat(&b);
    approx_eq16(Mat4::from_quat(&(a * b)).to_array(), matrix.to_array());
}

#[test]
fn mul_assign_matches_operator() {
    let a = Quat::rotation_z(0.4);
    let b = Quat::rotation_x(-0.9);
    let mut c = a;
    c *= b;
    assert_eq!(c, a * b);
    assert_eq!(c, a.multiply(&b));
}

#[test]
fn rotate_preserves_length() {
    let q = Quat::from_axis_angle(&Vec3::new(2.0, 2.0, 1.0), 0.77);
    let v = Vec3::new(-3.0, 0.5, 8.0);
    assert!(
        (q.rotate(&v).length() - v.length()).abs() <= EPS * v.length()
    );
}

#[test]
fn normalized_restores_unit_length() {
    let q = Quat::new(1.0, 2.0, 3.0, 4.0).normalized();
    assert!((q.length() - 1.0).abs() <= 1e-6);
    let unchanged = Quat::rotation_y(0.3);
    let n = unchanged.normalized();
    for (a, b) in n.to_array().iter().zip(unchanged.to_array().iter()) {
        assert!((a - b).abs() <= 1e-6);
    }
}

#[test]
fn affine_rotation_has_zero_translation() {
    let m = Mat4x3::from_quat(&Quat::rotation_x(1.0));
    assert_eq!(m.translation_part(), Vec3::ZERO);
}

#[test]
fn parts_round_trip_through_accessors() {
    let q = Quat::from_parts(Vec3::new(0.1, 0.2, 0.3), 0.9);
    assert_eq!(q.vector(), Vec3::new(0.1, 0.2, 0.3));
    assert_eq!(q.scalar(), 0.9);
    assert_eq!(Quat::default(), Quat::IDENTITY);
}
