// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![cfg(feature = "serde")]
use affine_math::{Mat4x3, Quat, Vec3};

#[test]
fn affine_matrix_serializes_as_twelve_row_major_floats() {
    let m = Mat4x3::translation(1.0, 2.0, 3.0);
    let json = serde_json::to_value(m).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "data": [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0]
        })
    );
}

#[test]
fn quaternion_fields_use_component_names() {
    let q: Quat = serde_json::from_str(r#"{"x":0.0,"y":0.0,"z":0.0,"w":1.0}"#).expect("parse");
    assert_eq!(q, Quat::IDENTITY);
    let v: Vec3 = serde_json::from_str(r#"{"x":1.0,"y":2.0,"z":3.0}"#).expect("parse");
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}
