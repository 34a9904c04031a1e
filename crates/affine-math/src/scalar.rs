// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, matrix and quaternion types.
//!
//! Everything operates on `f32` (or `i32` where noted). Angles are radians
//! unless the function name ends in `_deg`.

use core::ops::{Add, Mul};

/// π in single precision.
pub const PI: f32 = core::f32::consts::PI;

/// 1/π.
pub const INV_PI: f32 = 1.0 / PI;

/// 2π.
pub const TAU: f32 = core::f32::consts::TAU;

/// 1/2π.
pub const INV_TAU: f32 = 1.0 / TAU;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// Unlike `f32::clamp` this never panics: an inverted range resolves to
/// `min` for values below it and `max` otherwise.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Integer counterpart of [`clamp`].
pub fn clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Linear interpolation `(1 - t) * a + t * b`.
///
/// Works for any value that can be added and scaled by an `f32`, so vectors
/// interpolate component-wise. `t` is not clamped.
///
/// # Examples
/// ```
/// use affine_math::{scalar, Vec3};
/// assert_eq!(scalar::lerp(2.0_f32, 4.0, 0.5), 3.0);
/// let v = scalar::lerp(Vec3::ZERO, Vec3::new(2.0, 4.0, 8.0), 0.25);
/// assert_eq!(v.to_array(), [0.5, 1.0, 2.0]);
/// ```
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Add<Output = T> + Mul<f32, Output = T>,
{
    a * (1.0 - t) + b * t
}

/// Square of `value`.
pub fn pow2(value: f32) -> f32 {
    value * value
}

/// Squared distance between two scalars. Vectors provide
/// [`Vec3::distance_squared`](crate::Vec3::distance_squared) and friends.
pub fn distance_squared(a: f32, b: f32) -> f32 {
    pow2(a - b)
}

/// Cotangent of `rad`. Infinite at multiples of π.
pub fn cot(rad: f32) -> f32 {
    1.0 / rad.tan()
}

/// Sine of an angle in degrees.
pub fn sin_deg(deg: f32) -> f32 {
    deg_to_rad(deg).sin()
}

/// Cosine of an angle in degrees.
pub fn cos_deg(deg: f32) -> f32 {
    deg_to_rad(deg).cos()
}

/// Tangent of an angle in degrees.
pub fn tan_deg(deg: f32) -> f32 {
    deg_to_rad(deg).tan()
}

/// Arc sine, in degrees.
pub fn asin_deg(value: f32) -> f32 {
    rad_to_deg(value.asin())
}

/// Arc cosine, in degrees.
pub fn acos_deg(value: f32) -> f32 {
    rad_to_deg(value.acos())
}

/// Arc tangent, in degrees.
pub fn atan_deg(value: f32) -> f32 {
    rad_to_deg(value.atan())
}

/// Four-quadrant arc tangent of `y / x`, in degrees.
pub fn atan2_deg(y: f32, x: f32) -> f32 {
    rad_to_deg(y.atan2(x))
}

/// Smallest of three values. Ties resolve to the later argument.
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    if a < b && a < c {
        return a;
    }
    if b < c {
        b
    } else {
        c
    }
}

/// Largest of three values. Ties resolve to the later argument.
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    if a > b && a > c {
        return a;
    }
    if b > c {
        b
    } else {
        c
    }
}
