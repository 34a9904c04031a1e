// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors surfaced by the strict (`try_*` / bounds-checked) APIs.
///
/// The default operations never produce these; they fall back to documented
/// values instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The matrix determinant is exactly zero, so no inverse exists.
    #[error("matrix is singular (determinant = {determinant})")]
    Singular {
        /// Determinant that was computed before giving up.
        determinant: f32,
    },
    /// A component or element index was outside the container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },
}
