// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reference batches with known-good literal values.
//!
//! Float expectations are rounded to seven decimals, so every float check
//! runs at [`CheckConfig::reference_absolute`](crate::CheckConfig).

use core::f32::consts::FRAC_PI_2;

use affine_math::{scalar, IVec3, Mat4, Mat4x3, Quat, Vec3};
use tracing::debug;

use crate::checker::{CheckReport, ValueChecker};
use crate::config::CheckConfig;

fn check_quat(checker: &mut ValueChecker, label: &str, q: Quat, expected: [f32; 4]) {
    let eps = checker.config().reference_absolute;
    let axes = ["x", "y", "z", "w"];
    for ((axis, est), exp) in axes.iter().zip(q.to_array()).zip(expected) {
        checker.equal_eps(&format!("QT {label}.{axis}"), est, exp, eps);
    }
}

/// 45° rotations about each axis and their products.
///
/// Products read right to left: `qZ * qX` rotates by `qX` first.
pub fn quaternion_batch(checker: &mut ValueChecker) {
    debug!("running quaternion reference batch");
    let angle = scalar::deg_to_rad(45.0);
    let q_x = Quat::rotation_x(angle);
    let q_y = Quat::rotation_y(angle);
    let q_z = Quat::rotation_z(angle);

    check_quat(checker, "rotX", q_x, [0.3826835, 0.0, 0.0, 0.9238795]);
    check_quat(checker, "rotY", q_y, [0.0, 0.3826835, 0.0, 0.9238795]);
    check_quat(checker, "rotZ", q_z, [0.0, 0.0, 0.3826835, 0.9238795]);

    check_quat(
        checker,
        "qXZ",
        q_z * q_x,
        [0.3535534, 0.1464466, 0.3535534, 0.8535534],
    );
    check_quat(
        checker,
        "qXY",
        q_y * q_x,
        [0.3535534, 0.3535534, -0.1464466, 0.8535534],
    );
    check_quat(
        checker,
        "qYZ",
        q_z * q_y,
        [-0.1464466, 0.3535534, 0.3535534, 0.8535534],
    );
    check_quat(
        checker,
        "qXYZ",
        q_z * q_y * q_x,
        [0.1913417, 0.4619398, 0.1913417, 0.8446231],
    );
}

/// Matrix, affine and vector behaviours that the rest of the crate relies on:
/// inversion, singular fallbacks, rotation conventions and saturating
/// division.
pub fn affine_batch(checker: &mut ValueChecker) {
    debug!("running affine reference batch");
    let eps = checker.config().reference_absolute;

    checker.equal(
        "M4 det scale",
        Mat4::scale(2.0, 3.0, 4.0).determinant(),
        24.0,
    );

    let singular = Mat4::from_rows([
        [1.0, 2.0, 0.0, 4.0],
        [5.0, 6.0, 0.0, 8.0],
        [9.0, 1.0, 0.0, 3.0],
        [4.0, 4.0, 0.0, 1.0],
    ]);
    checker.equal(
        "M4 singular inverse unchanged",
        singular.inverse() == singular,
        true,
    );
    checker.equal(
        "M4 singular try_inverse",
        singular.try_inverse().is_err(),
        true,
    );

    let affine = Mat4x3::from_rows([
        [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 0.0, 2.0],
        [3.0, 4.0, 5.0],
    ]);
    checker.equal_eps("M4x3 det", affine.determinant(), 2.0, eps);
    checker.equal_eps(
        "M4x3 inverse translation",
        affine.inverse().translation_part(),
        Vec3::new(-4.0, 3.0, -2.5),
        eps,
    );
    checker.equal(
        "M4x3 widened column",
        affine.to_array4x4()[15].to_bits(),
        1.0_f32.to_bits(),
    );

    let quarter_z = Vec3::new(0.0, -1.0, 0.0);
    checker.equal_eps(
        "M4 rotZ 90 X",
        Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::UNIT_X),
        quarter_z,
        eps,
    );
    checker.equal_eps(
        "QT rotZ 90 X",
        Quat::rotation_z(FRAC_PI_2).rotate(&Vec3::UNIT_X),
        quarter_z,
        eps,
    );

    checker.equal(
        "V3 div zero",
        Vec3::new(1.0, 2.0, 3.0) / Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, f32::MAX, 3.0),
    );
    checker.equal(
        "I3 div zero",
        IVec3::new(6, 6, 6) / IVec3::new(2, 0, 3),
        IVec3::new(3, i32::MAX, 2),
    );
    checker.equal("I3 dot", IVec3::new(1, 2, 3).dot(&IVec3::new(4, 5, 6)), 32);
}

/// Runs every reference batch under `config`, logs the report and returns it.
pub fn run_reference_batches(config: CheckConfig) -> CheckReport {
    let mut checker = ValueChecker::with_config(config);
    quaternion_batch(&mut checker);
    affine_batch(&mut checker);
    let report = checker.finish();
    report.log();
    report
}
