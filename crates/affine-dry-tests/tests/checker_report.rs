// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
use affine_dry_tests::{CheckConfig, ValueChecker};
use affine_math::{IVec3, Vec3};

#[test]
fn failed_batch_renders_error_block() {
    let mut checker = ValueChecker::new();
    checker.equal("count", 3, 4);
    checker.equal("flag", false, true);
    checker.equal("cell", IVec3::new(1, 1, 1), IVec3::new(1, 1, 1));
    let report = checker.finish();

    assert_eq!(report.checks(), 3);
    assert_eq!(
        report.to_string(),
        "-------------------------------\n\
         Test Result: 2 error(s)\n\
         ---------------------------\n\
         \x20 count: Not equal: true = 4  ->  est = 3\n\
         \x20 flag: Not equal: true = t  ->  est = f\n\
         -------------------------------\n"
    );

    let err = report.into_result().expect_err("batch should fail");
    assert_eq!(err.checks, 3);
    assert_eq!(err.errors.len(), 2);
    assert_eq!(
        err.to_string(),
        "2 of 3 value checks failed:\n  count: Not equal: true = 4  ->  est = 3\n  \
         flag: Not equal: true = t  ->  est = f"
    );
}

#[test]
fn batch_continues_after_first_failure() {
    let mut checker = ValueChecker::new();
    assert!(!checker.equal("first", 1.0_f32, 2.0));
    assert!(checker.equal("second", 2.0_f32, 2.0));
    assert!(!checker.equal("third", Vec3::ONE, Vec3::ZERO));
    assert!(!checker.is_clean());
    assert_eq!(checker.errors().len(), 2);
}

#[test]
fn configured_tolerance_applies_to_default_comparisons() {
    let mut checker = ValueChecker::with_config(CheckConfig::reference());
    assert!(checker.equal("close", 0.382_683_5_f32, 0.382_683_4));
    assert!(checker.equal("vec", Vec3::new(1.0, 1.000_005, 1.0), Vec3::ONE));
    assert!(!checker.equal("far", 0.5_f32, 0.6));
    // Integers ignore the tolerance.
    assert!(!checker.equal("int", 1, 2));
}

#[test]
fn config_deserializes_with_defaults() {
    let empty: CheckConfig = serde_json::from_str("{}").expect("parse empty config");
    assert_eq!(empty, CheckConfig::default());

    let custom: CheckConfig =
        serde_json::from_str(r#"{"absolute": 0.001}"#).expect("parse partial config");
    assert_eq!(custom.absolute, 0.001);
    assert_eq!(custom.reference_absolute, 0.00001);
    assert_eq!(CheckConfig::reference().absolute, 0.00001);
}
