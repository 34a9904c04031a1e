// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use affine_math::{Mat4, MathError, Vec3, Vec4};

const EPS: f32 = 1e-5;

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_vec3(a: Vec3, b: Vec3) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn general() -> Mat4 {
    Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [2.0, 6.0, 4.0, 8.0],
        [3.0, 1.0, 1.0, 2.0],
    ])
}

fn singular() -> Mat4 {
    // Third column is zero, so every determinant term vanishes exactly.
    Mat4::from_rows([
        [1.0, 2.0, 0.0, 4.0],
        [5.0, 6.0, 0.0, 8.0],
        [9.0, 1.0, 0.0, 3.0],
        [4.0, 4.0, 0.0, 1.0],
    ])
}

#[test]
fn mul_operator_matches_method() {
    let s = Mat4::scale(2.0, 3.0, 4.0);
    let r = Mat4::rotation_x(FRAC_PI_4);
    approx_eq16((r * s).to_array(), r.multiply(&s).to_array());
    approx_eq16((s * r).to_array(), s.multiply(&r).to_array());
    assert_ne!((r * s).to_array(), (s * r).to_array());
}

#[test]
fn mul_assign_variants_work() {
    let lhs = Mat4::rotation_y(FRAC_PI_3);
    let rhs = Mat4::translation(1.0, 2.0, 3.0);
    let expected = (lhs * rhs).to_array();

    let mut owned = lhs;
    owned *= rhs;
    approx_eq16(owned.to_array(), expected);

    let mut borrowed = lhs;
    borrowed *= &rhs;
    approx_eq16(borrowed.to_array(), expected);
    assert_eq!((lhs * &rhs).to_array(), expected);
}

#[test]
fn identity_is_neutral_for_multiplication() {
    let m = general();
    assert_eq!(Mat4::identity() * m, m);
    assert_eq!(m * Mat4::IDENTITY, m);
    assert_eq!(Mat4::default(), Mat4::IDENTITY);
}

#[test]
fn determinant_of_known_matrices() {
    assert_eq!(general().determinant(), 72.0);
    assert_eq!(Mat4::scale(2.0, 3.0, 4.0).determinant(), 24.0);
    assert_eq!(Mat4::translation(7.0, -1.0, 3.0).determinant(), 1.0);
    assert!((Mat4::rotation_z(0.7).determinant() - 1.0).abs() <= EPS);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = general();
    let inv = m.inverse();
    approx_eq16((m * inv).to_array(), Mat4::IDENTITY.to_array());
    approx_eq16((inv * m).to_array(), Mat4::IDENTITY.to_array());

    let mut in_place = m;
    in_place.invert();
    assert_eq!(in_place, inv);
    assert_eq!(m.try_inverse(), Ok(inv));
}

#[test]
fn inverse_of_scale_is_reciprocal_scale() {
    let inv = Mat4::scale(2.0, 4.0, 8.0).inverse();
    assert_eq!(inv, Mat4::scale(0.5, 0.25, 0.125));
}

#[test]
fn singular_inverse_leaves_matrix_bit_identical() {
    let m = singular();
    assert_eq!(m.determinant(), 0.0);
    let bits = m.to_array().map(f32::to_bits);
    assert_eq!(m.inverse().to_array().map(f32::to_bits), bits);

    let mut in_place = m;
    in_place.invert();
    assert_eq!(in_place.to_array().map(f32::to_bits), bits);

    assert!(matches!(
        m.try_inverse(),
        Err(MathError::Singular { determinant }) if determinant == 0.0
    ));
    assert_eq!(Mat4::ZERO.inverse(), Mat4::ZERO);
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = general();
    let t = m.transposed();
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(t.get(row, col), m.get(col, row));
        }
    }
    assert_eq!(t.transposed(), m);

    let mut in_place = m;
    in_place.transpose();
    assert_eq!(in_place, t);
}

#[test]
fn translation_moves_points_but_not_directions() {
    let m = Mat4::translation(1.0, 2.0, 3.0);
    let p = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(m.transform_point(&p), Vec3::new(5.0, 7.0, 9.0));
    assert_eq!(m.transform_direction(&p), p);
    assert_eq!(m.row(3), Some(Vec4::new(1.0, 2.0, 3.0, 1.0)));
}

#[test]
fn axis_rotations_follow_row_vector_convention() {
    // v * M with the rotation block in the upper-left 3x3.
    approx_vec3(
        Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::UNIT_X),
        Vec3::new(0.0, -1.0, 0.0),
    );
    approx_vec3(
        Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y),
        Vec3::new(0.0, 0.0, -1.0),
    );
    approx_vec3(
        Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z),
        Vec3::new(-1.0, 0.0, 0.0),
    );
}

#[test]
fn append_builders_post_multiply() {
    let base = Mat4::rotation_x(0.3);

    let mut m = base;
    m.append_translation(1.0, 2.0, 3.0);
    assert_eq!(m, base * Mat4::translation(1.0, 2.0, 3.0));

    let mut m = base;
    m.append_scale(2.0, 2.0, 2.0).append_rotation_y(0.5);
    assert_eq!(m, base * Mat4::scale(2.0, 2.0, 2.0) * Mat4::rotation_y(0.5));

    let mut m = base;
    m.append_rotation_x(0.1).append_rotation_z(-0.4);
    assert_eq!(m, base * Mat4::rotation_x(0.1) * Mat4::rotation_z(-0.4));
}

#[test]
fn translate_then_scale_scales_the_translation() {
    let mut m = Mat4::translation(1.0, 2.0, 3.0);
    m.append_scale(2.0, 2.0, 2.0);
    assert_eq!(m.transform_point(&Vec3::ZERO), Vec3::new(2.0, 4.0, 6.0));
}

#[test]
fn vec4_times_matrix_matches_transform() {
    let m = general();
    let v = Vec4::new(1.0, -1.0, 2.0, 1.0);
    assert_eq!(v * m, m.transform_vec4(&v));
    assert_eq!(v * m, Vec4::new(3.0, 9.0, 5.0, 14.0));
}

#[test]
fn scalar_multiplication_scales_every_element() {
    let m = general();
    let doubled = m * 2.0;
    assert_eq!(doubled, 2.0 * m);
    assert_eq!(doubled, m.scaled(2.0));
    let mut assigned = m;
    assigned *= 2.0;
    assert_eq!(assigned, doubled);
    assert_eq!(doubled.get(1, 2), Some(14.0));
}

#[test]
fn element_access_is_bounds_checked() {
    let mut m = Mat4::zero();
    assert_eq!(m.set(3, 1, 9.0), Ok(()));
    assert_eq!(m.get(3, 1), Some(9.0));
    assert_eq!(m.to_array()[13], 9.0);
    assert_eq!(m.get(4, 0), None);
    assert_eq!(m.row(4), None);
    assert!(matches!(
        m.set(0, 4, 1.0),
        Err(MathError::IndexOutOfRange { len: 16, .. })
    ));
}

#[test]
fn reset_helpers_overwrite_contents() {
    let mut m = general();
    m.set_zero();
    assert_eq!(m, Mat4::ZERO);
    m.set_identity();
    assert_eq!(m, Mat4::IDENTITY);
    assert_eq!(Mat4::from([[1.0; 4]; 4]), Mat4::new([1.0; 16]));
}
