// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mismatch collector for literal-value test batches.

use std::fmt;

use affine_math::{IVec3, Vec3};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::CheckConfig;

const OUTER_RULE: &str = "-------------------------------";
const INNER_RULE: &str = "---------------------------";

/// A value [`ValueChecker`] knows how to compare and print.
///
/// Integers, booleans and integer vectors compare exactly and ignore the
/// tolerance. Floats and float vectors pass when every component is within
/// `eps` of the expected value; NaN never passes.
pub trait CheckValue {
    /// True when `self` is acceptable for `expected` under tolerance `eps`.
    fn within(&self, expected: &Self, eps: f32) -> bool;

    /// Text used in mismatch lines.
    fn render(&self) -> String;
}

impl CheckValue for i32 {
    fn within(&self, expected: &Self, _eps: f32) -> bool {
        self == expected
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl CheckValue for u32 {
    fn within(&self, expected: &Self, _eps: f32) -> bool {
        self == expected
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl CheckValue for bool {
    fn within(&self, expected: &Self, _eps: f32) -> bool {
        self == expected
    }

    fn render(&self) -> String {
        (if *self { "t" } else { "f" }).to_owned()
    }
}

impl CheckValue for f32 {
    fn within(&self, expected: &Self, eps: f32) -> bool {
        (self - expected).abs() <= eps
    }

    fn render(&self) -> String {
        format!("{self:.6}")
    }
}

impl CheckValue for Vec3 {
    fn within(&self, expected: &Self, eps: f32) -> bool {
        self.x.within(&expected.x, eps)
            && self.y.within(&expected.y, eps)
            && self.z.within(&expected.z, eps)
    }

    fn render(&self) -> String {
        format!("({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

impl CheckValue for IVec3 {
    fn within(&self, expected: &Self, _eps: f32) -> bool {
        self == expected
    }

    fn render(&self) -> String {
        format!("({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Collects mismatches across a batch of named comparisons.
///
/// # Example
///
/// ```
/// use affine_dry_tests::ValueChecker;
///
/// let mut checker = ValueChecker::new();
/// checker.equal("answer", 42, 42);
/// checker.equal("flag", true, false);
/// let report = checker.finish();
/// assert_eq!(report.errors(), ["flag: Not equal: true = f  ->  est = t"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueChecker {
    config: CheckConfig,
    checks: usize,
    errors: Vec<String>,
}

impl ValueChecker {
    /// Checker with [`CheckConfig::default`] (exact float comparison).
    pub fn new() -> Self {
        Self::default()
    }

    /// Checker with an explicit configuration.
    pub fn with_config(config: CheckConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Compares `estimate` to `expected` using the configured default
    /// tolerance. Returns whether the check passed.
    pub fn equal<T: CheckValue>(&mut self, name: &str, estimate: T, expected: T) -> bool {
        let eps = self.config.absolute;
        self.equal_eps(name, estimate, expected, eps)
    }

    /// Compares `estimate` to `expected` with an explicit tolerance.
    pub fn equal_eps<T: CheckValue>(
        &mut self,
        name: &str,
        estimate: T,
        expected: T,
        eps: f32,
    ) -> bool {
        self.checks += 1;
        if estimate.within(&expected, eps) {
            return true;
        }
        self.errors.push(format!(
            "{name}: Not equal: true = {}  ->  est = {}",
            expected.render(),
            estimate.render()
        ));
        false
    }

    /// Mismatches recorded so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of comparisons made so far.
    pub fn checks(&self) -> usize {
        self.checks
    }

    /// True while no comparison has failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Ends the batch.
    pub fn finish(self) -> CheckReport {
        CheckReport {
            checks: self.checks,
            errors: self.errors,
        }
    }
}

/// Outcome of a finished batch.
///
/// `Display` renders the summary block:
///
/// ```text
/// -------------------------------
/// Test Result: 1 error(s)
/// ---------------------------
///   flag: Not equal: true = f  ->  est = t
/// -------------------------------
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    checks: usize,
    errors: Vec<String>,
}

impl CheckReport {
    /// Mismatch lines in the order they were recorded.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of comparisons in the batch.
    pub fn checks(&self) -> usize {
        self.checks
    }

    /// True when every comparison passed.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Emits the report through `tracing`: one `info` event on success,
    /// otherwise a `warn` summary followed by one `warn` per mismatch.
    pub fn log(&self) {
        if self.passed() {
            info!(checks = self.checks, "value checks passed");
            return;
        }
        warn!(
            checks = self.checks,
            failures = self.errors.len(),
            "value checks failed"
        );
        for err in &self.errors {
            warn!(mismatch = %err);
        }
    }

    /// `Ok(())` when the batch passed, otherwise the mismatches as an error.
    pub fn into_result(self) -> Result<(), CheckFailed> {
        if self.passed() {
            Ok(())
        } else {
            Err(CheckFailed {
                checks: self.checks,
                errors: self.errors,
            })
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{OUTER_RULE}")?;
        write!(f, "Test Result: ")?;
        if self.errors.is_empty() {
            writeln!(f, "No error")?;
        } else {
            writeln!(f, "{} error(s)", self.errors.len())?;
            writeln!(f, "{INNER_RULE}")?;
            for err in &self.errors {
                writeln!(f, "  {err}")?;
            }
        }
        writeln!(f, "{OUTER_RULE}")
    }
}

/// A batch finished with at least one mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} of {checks} value checks failed:\n  {}", .errors.len(), .errors.join("\n  "))]
pub struct CheckFailed {
    /// Number of comparisons in the batch.
    pub checks: usize,
    /// Mismatch lines.
    pub errors: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn float_tolerance_is_inclusive_and_defaults_to_exact() {
        let mut checker = ValueChecker::new();
        assert!(checker.equal("exact", 0.5_f32, 0.5));
        assert!(!checker.equal("off", 0.5_f32, 0.500_001));
        assert!(checker.equal_eps("loose", 0.5_f32, 0.75, 0.25));
        assert!(!checker.equal_eps("nan", f32::NAN, 0.0, 1.0));
        assert_eq!(checker.checks(), 4);
        assert_eq!(checker.errors().len(), 2);
    }

    #[test]
    fn mismatch_lines_use_fixed_point_floats() {
        let mut checker = ValueChecker::new();
        checker.equal("QT rotX.x", 0.25_f32, 0.5);
        checker.equal("v", Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        checker.equal("i", IVec3::new(1, 2, 3), IVec3::ZERO);
        checker.equal("u", 7_u32, 8);
        assert_eq!(
            checker.errors(),
            [
                "QT rotX.x: Not equal: true = 0.500000  ->  est = 0.250000",
                "v: Not equal: true = (0.000000, 0.000000, 0.000000)  ->  \
                 est = (1.000000, 2.000000, 3.000000)",
                "i: Not equal: true = (0, 0, 0)  ->  est = (1, 2, 3)",
                "u: Not equal: true = 8  ->  est = 7",
            ]
        );
    }
}
