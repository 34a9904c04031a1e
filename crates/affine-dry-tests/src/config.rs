// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tolerance configuration for [`crate::ValueChecker`].

use serde::{Deserialize, Serialize};

/// Absolute tolerances applied to float comparisons.
///
/// Missing fields fall back to their defaults, so `{}` is a valid
/// configuration.
///
/// # Example
///
/// ```
/// use affine_dry_tests::CheckConfig;
///
/// let config = CheckConfig::default();
/// assert_eq!(config.absolute, 0.0);
/// assert_eq!(config.reference_absolute, 0.00001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Tolerance used by [`crate::ValueChecker::equal`]. Defaults to `0.0`,
    /// i.e. exact float comparison.
    #[serde(default = "CheckConfig::default_absolute")]
    pub absolute: f32,
    /// Tolerance the reference batches pass explicitly.
    #[serde(default = "CheckConfig::default_reference_absolute")]
    pub reference_absolute: f32,
}

impl CheckConfig {
    const fn default_absolute() -> f32 {
        0.0
    }

    const fn default_reference_absolute() -> f32 {
        0.00001
    }

    /// Config whose default tolerance is the reference tolerance, for
    /// callers that compare against rounded literals throughout.
    pub fn reference() -> Self {
        let base = Self::default();
        Self {
            absolute: base.reference_absolute,
            ..base
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            reference_absolute: Self::default_reference_absolute(),
        }
    }
}
