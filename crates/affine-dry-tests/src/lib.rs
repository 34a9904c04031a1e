// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value-checking harness and embedded reference batches for `affine-math`.
#![forbid(unsafe_code)]
//!
//! A batch feeds literal inputs through the library, compares each result to
//! its expected literal, and collects every mismatch as a readable line. The
//! batch always runs to completion; the caller decides what a failure means.
//!
//! # Modules
//!
//! - [`checker`] - [`ValueChecker`] and the [`CheckReport`] it produces
//! - [`config`] - Tolerance configuration
//! - [`reference`] - Reference batches with known-good values

pub mod checker;
pub mod config;
pub mod reference;

pub use checker::{CheckFailed, CheckReport, CheckValue, ValueChecker};
pub use config::CheckConfig;
pub use reference::{affine_batch, quaternion_batch, run_reference_batches};
