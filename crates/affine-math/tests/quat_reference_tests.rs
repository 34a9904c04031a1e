// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use affine_math::{scalar, Quat};

const EPS: f32 = 1e-5;

fn approx_quat(actual: Quat, expected: [f32; 4]) {
    let a = actual.to_array();
    for i in 0..4 {
        assert!(
            (a[i] - expected[i]).abs() <= EPS,
            "component {i}: {a:?} vs {expected:?}"
        );
    }
}

fn half_right_angles() -> (Quat, Quat, Quat) {
    let angle = scalar::deg_to_rad(45.0);
    (
        Quat::rotation_x(angle),
        Quat::rotation_y(angle),
        Quat::rotation_z(angle),
    )
}

#[test]
fn single_axis_rotations_match_reference() {
    let (qx, qy, qz) = half_right_angles();
    approx_quat(qx, [0.3826835, 0.0, 0.0, 0.9238795]);
    approx_quat(qy, [0.0, 0.3826835, 0.0, 0.9238795]);
    approx_quat(qz, [0.0, 0.0, 0.3826835, 0.9238795]);
}

#[test]
fn pairwise_products_match_reference() {
    let (qx, qy, qz) = half_right_angles();
    approx_quat(qz * qx, [0.3535534, 0.1464466, 0.3535534, 0.8535534]);
    approx_quat(qy * qx, [0.3535534, 0.3535534, -0.1464466, 0.8535534]);
    approx_quat(qz * qy, [-0.1464466, 0.3535534, 0.3535534, 0.8535534]);
}

#[test]
fn triple_product_is_left_associative_and_matches_reference() {
    let (qx, qy, qz) = half_right_angles();
    let chained = qz * qy * qx;
    approx_quat(chained, [0.1913417, 0.4619398, 0.1913417, 0.8446231]);
    // Associativity holds up to rounding.
    approx_quat(qz * (qy * qx), chained.to_array());
}

#[test]
fn degree_constructors_agree_with_radian_ones() {
    let q = Quat::from_axis_angle_deg(&affine_math::Vec3::UNIT_Y, 45.0);
    let (_, qy, _) = half_right_angles();
    approx_quat(q, qy.to_array());

    let mut r = Quat::identity();
    r.set_axis_angle_deg(&affine_math::Vec3::UNIT_X, 45.0);
    approx_quat(r, [0.3826835, 0.0, 0.0, 0.9238795]);
}
