// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use affine_dry_tests::{
    affine_batch, quaternion_batch, run_reference_batches, CheckConfig, ValueChecker,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn quaternion_reference_batch_passes() {
    let mut checker = ValueChecker::new();
    quaternion_batch(&mut checker);
    assert_eq!(checker.checks(), 28);
    let report = checker.finish();
    assert!(report.passed(), "{report}");
}

#[test]
fn affine_reference_batch_passes() {
    let mut checker = ValueChecker::new();
    affine_batch(&mut checker);
    let report = checker.finish();
    assert!(report.passed(), "{report}");
}

#[test]
fn all_batches_pass_and_render_clean_summary() {
    init_tracing();
    let report = run_reference_batches(CheckConfig::default());
    assert_eq!(
        report.to_string(),
        "-------------------------------\n\
         Test Result: No error\n\
         -------------------------------\n"
    );
    assert_eq!(report.into_result(), Ok(()));
}

#[test]
fn zero_reference_tolerance_surfaces_rounding_mismatches() {
    init_tracing();
    let config = CheckConfig {
        absolute: 0.0,
        reference_absolute: 0.0,
    };
    let mut checker = ValueChecker::with_config(config);
    quaternion_batch(&mut checker);
    let report = checker.finish();
    report.log();
    // Rounded seven-decimal literals cannot all match single-precision results.
    assert!(!report.passed());
    for line in report.errors() {
        assert!(line.starts_with("QT "), "{line}");
        assert!(line.contains(": Not equal: true = "), "{line}");
    }
}
