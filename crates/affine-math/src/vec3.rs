// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar;
use crate::MathError;

/// Lengths below this are treated as zero by [`Vec3::normalized`].
pub(crate) const NORMALIZE_EPSILON: f32 = 1e-7;

/// Divides `num` by `den`, saturating to `f32::MAX` when `den` is exactly zero.
#[allow(clippy::float_cmp)]
pub(crate) fn saturating_div(num: f32, den: f32) -> f32 {
    if den == 0.0 {
        f32::MAX
    } else {
        num / den
    }
}

/// Three-component `f32` vector.
///
/// Used both for points and directions; which one is meant depends on the
/// call site ([`crate::Mat4::transform_point`] vs
/// [`crate::Mat4::transform_direction`]).
///
/// Component division by exactly `0.0` yields `f32::MAX` for that component
/// rather than infinity or NaN.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component (also red).
    pub x: f32,
    /// Y component (also green).
    pub y: f32,
    /// Z component (also blue).
    pub z: f32,
}

impl Vec3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as `[x, y, z]`.
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Red channel alias of `x`.
    pub const fn r(&self) -> f32 {
        self.x
    }

    /// Green channel alias of `y`.
    pub const fn g(&self) -> f32 {
        self.y
    }

    /// Blue channel alias of `z`.
    pub const fn b(&self) -> f32 {
        self.z
    }

    /// Component at `index` (0..=2), or `None` when out of range.
    pub const fn get(&self, index: usize) -> Option<f32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Writes the component at `index` (0..=2).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(MathError::IndexOutOfRange { index, len: 3 }),
        }
        Ok(())
    }

    /// Resets every component to zero.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// True when every component is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// The vector form of [`scalar::distance_squared`].
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*self - *other).length_squared()
    }

    /// Distance to `other`.
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Normalises in place. A vector of exactly zero length is left as is.
    #[allow(clippy::float_cmp)]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self
    }

    /// Returns a normalised copy, or [`Vec3::ZERO`] when the length is below
    /// `1e-7`.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            return Self::ZERO;
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Negates every component in place.
    pub fn negate(&mut self) {
        *self = self.negated();
    }

    /// Returns the negated vector.
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Component-wise clamp against per-axis bounds.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
            scalar::clamp(self.z, min.z, max.z),
        )
    }

    /// Component-wise clamp against a single scalar range.
    pub fn clamp_scalar(&self, min: f32, max: f32) -> Self {
        Self::new(
            scalar::clamp(self.x, min, max),
            scalar::clamp(self.y, min, max),
            scalar::clamp(self.z, min, max),
        )
    }

    /// Interprets the components as degrees and converts each to radians.
    pub fn to_radians(&self) -> Self {
        Self::new(
            scalar::deg_to_rad(self.x),
            scalar::deg_to_rad(self.y),
            scalar::deg_to_rad(self.z),
        )
    }

    /// Interprets the components as radians and converts each to degrees.
    pub fn to_degrees(&self) -> Self {
        Self::new(
            scalar::rad_to_deg(self.x),
            scalar::rad_to_deg(self.y),
            scalar::rad_to_deg(self.z),
        )
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise product.
impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

/// Component-wise quotient; zero divisors saturate to `f32::MAX`.
impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(
            saturating_div(self.x, rhs.x),
            saturating_div(self.y, rhs.y),
            saturating_div(self.z, rhs.z),
        )
    }
}

/// Division by a scalar; a zero divisor saturates every component.
impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(
            saturating_div(self.x, rhs),
            saturating_div(self.y, rhs),
            saturating_div(self.z, rhs),
        )
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec3 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn indexed_access_is_bounds_checked() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(2), Some(3.0));
        assert_eq!(v.get(3), None);
        assert!(v.set(1, 9.0).is_ok());
        assert_eq!(v.y, 9.0);
        assert_eq!(
            v.set(3, 0.0),
            Err(MathError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn in_place_normalize_leaves_zero_vector_alone() {
        let mut v = Vec3::ZERO;
        v.normalize();
        assert_eq!(v, Vec3::ZERO);
        assert!(v.is_zero());
    }

    #[test]
    fn saturating_div_only_triggers_on_exact_zero() {
        assert_eq!(saturating_div(1.0, 0.0), f32::MAX);
        assert_eq!(saturating_div(-1.0, 0.0), f32::MAX);
        assert_eq!(saturating_div(1.0, -0.0), f32::MAX);
        assert_eq!(saturating_div(1.0, 2.0), 0.5);
    }
}
