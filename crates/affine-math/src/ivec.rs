// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Integer vectors (grid coordinates, pixel positions, cell indices).
//!
//! Arithmetic wraps on overflow. Division by zero saturates the affected
//! component to `i32::MAX`, mirroring the float vectors' `f32::MAX` policy.

#![allow(clippy::cast_precision_loss)]

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::clamp_i32;
use crate::{MathError, Vec2, Vec3, Vec4};

fn saturating_div(num: i32, den: i32) -> i32 {
    if den == 0 {
        i32::MAX
    } else {
        num.wrapping_div(den)
    }
}

/// Operator impls shared by every integer vector; `$f` lists the fields.
macro_rules! ivec_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f.wrapping_add(rhs.$f)),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f.wrapping_sub(rhs.$f)),+ }
            }
        }

        impl Mul for $ty {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f.wrapping_mul(rhs.$f)),+ }
            }
        }

        impl Mul<i32> for $ty {
            type Output = Self;
            fn mul(self, rhs: i32) -> Self {
                Self { $($f: self.$f.wrapping_mul(rhs)),+ }
            }
        }

        impl Mul<$ty> for i32 {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl Div for $ty {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Self { $($f: saturating_div(self.$f, rhs.$f)),+ }
            }
        }

        impl Div<i32> for $ty {
            type Output = Self;
            fn div(self, rhs: i32) -> Self {
                Self { $($f: saturating_div(self.$f, rhs)),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                self.negated()
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $ty {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl MulAssign<i32> for $ty {
            fn mul_assign(&mut self, rhs: i32) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for $ty {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl DivAssign<i32> for $ty {
            fn div_assign(&mut self, rhs: i32) {
                *self = *self / rhs;
            }
        }

        impl $ty {
            /// Dot product (wrapping).
            pub fn dot(&self, other: &Self) -> i32 {
                0i32 $(.wrapping_add(self.$f.wrapping_mul(other.$f)))+
            }

            /// Squared length as `f32`, accumulated in `i64` so it cannot
            /// overflow before the conversion.
            pub fn length_squared(&self) -> f32 {
                let sum: i64 = 0 $(+ i64::from(self.$f) * i64::from(self.$f))+;
                sum as f32
            }

            /// Length as `f32`.
            pub fn length(&self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns the negated vector (wrapping).
            pub fn negated(&self) -> Self {
                Self { $($f: self.$f.wrapping_neg()),+ }
            }

            /// Negates every component in place.
            pub fn negate(&mut self) {
                *self = self.negated();
            }
        }
    };
}

/// Two-component `i32` vector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IVec2 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
}

ivec_ops!(IVec2 { x, y });

impl IVec2 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a vector from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the components as `[x, y]`.
    pub const fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Component at `index` (0..=1).
    pub const fn get(&self, index: usize) -> Option<i32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Writes the component at `index` (0..=1).
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), MathError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(MathError::IndexOutOfRange { index, len: 2 }),
        }
        Ok(())
    }

    /// Resets every component to zero.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Component-wise clamp against per-axis bounds.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        Self::new(
            clamp_i32(self.x, min.x, max.x),
            clamp_i32(self.y, min.y, max.y),
        )
    }

    /// Component-wise clamp against one range.
    pub fn clamp_scalar(&self, min: i32, max: i32) -> Self {
        Self::new(clamp_i32(self.x, min, max), clamp_i32(self.y, min, max))
    }

    /// Converts to a float vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl From<IVec2> for Vec2 {
    fn from(value: IVec2) -> Self {
        value.to_vec2()
    }
}

/// Three-component `i32` vector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IVec3 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
}

ivec_ops!(IVec3 { x, y, z });

impl IVec3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// All components one.
    pub const ONE: Self = Self::new(1, 1, 1);

    /// Creates a vector from components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as `[x, y, z]`.
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component at `index` (0..=2).
    pub const fn get(&self, index: usize) -> Option<i32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Writes the component at `index` (0..=2).
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), MathError> {
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

    /// Component-wise clamp against per-axis bounds.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        Self::new(
            clamp_i32(self.x, min.x, max.x),
            clamp_i32(self.y, min.y, max.y),
            clamp_i32(self.z, min.z, max.z),
        )
    }

    /// Component-wise clamp against one range.
    pub fn clamp_scalar(&self, min: i32, max: i32) -> Self {
        Self::new(
            clamp_i32(self.x, min, max),
            clamp_i32(self.y, min, max),
            clamp_i32(self.z, min, max),
        )
    }

    /// Converts to a float vector.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<IVec3> for Vec3 {
    fn from(value: IVec3) -> Self {
        value.to_vec3()
    }
}

/// Four-component `i32` vector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IVec4 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
    /// W component.
    pub w: i32,
}

ivec_ops!(IVec4 { x, y, z, w });

impl IVec4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a vector from components.
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the components as `[x, y, z, w]`.
    pub const fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component at `index` (0..=3).
    pub const fn get(&self, index: usize) -> Option<i32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            3 => Some(self.w),
            _ => None,
        }
    }

    /// Writes the component at `index` (0..=3).
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), MathError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
        Ok(())
    }

    /// Resets every component to zero.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Converts to a float vector.
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x as f32, self.y as f32, self.z as f32, self.w as f32)
    }
}

impl From<IVec4> for Vec4 {
    fn from(value: IVec4) -> Self {
        value.to_vec4()
    }
}
