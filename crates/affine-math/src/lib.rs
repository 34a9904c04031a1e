// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! affine-math: small linear-algebra primitives for scene graphs, cameras and
//! skeletal rotations.
//!
//! The interesting part of the crate is the affine transform and rotation
//! algebra: [`Mat4`], its implicit-bottom-row sibling [`Mat4x3`], and
//! [`Quat`]. Vectors and the [`scalar`] helpers are plain data and utility
//! calls around that core.
//!
//! # Conventions
//! - Matrices are stored row-major (`m[row][col]`).
//! - Vectors are **row vectors**: `v' = v * M`. A product `A * B` therefore
//!   applies `A` first and `B` second.
//! - Quaternions rotate with the sandwich `conj(q) * v * q`, which composes in
//!   the same order as matrices: `(a * b).rotate(v) == b.rotate(a.rotate(v))`.
//!
//! # Degenerate input
//! Nothing here panics or returns an error on the default path. Singular
//! matrices are left unchanged by inversion, zero-length vectors normalise to
//! zero, and component division by exactly zero saturates to the type's
//! maximum. Callers that want a signal use the `try_*` variants.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions
)]

mod error;
mod ivec;
mod mat4;
mod mat4x3;
mod quat;
pub mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use ivec::{IVec2, IVec3, IVec4};
pub use mat4::Mat4;
pub use mat4x3::Mat4x3;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
