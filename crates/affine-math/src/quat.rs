// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, MulAssign};

use crate::{scalar, Mat4, Mat4x3, Vec3, Vec4};

/// Quaternion `(x, y, z, w)`: vector part `e = (x, y, z)`, scalar part
/// `s = w`.
///
/// * All angles are radians unless the method name ends in `_deg`.
/// * Rotation methods assume a unit quaternion. Nothing renormalises
///   implicitly, so long composition chains drift; call
///   [`Quat::normalized`] when that matters.
/// * The default value is the identity rotation `(0, 0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// Vector part, X.
    pub x: f32,
    /// Vector part, Y.
    pub y: f32,
    /// Vector part, Z.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    ///
    /// Use [`Quat::from_axis_angle`] for rotations.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from its vector part `e` and scalar part `s`.
    pub const fn from_parts(e: Vec3, s: f32) -> Self {
        Self::new(e.x, e.y, e.z, s)
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Resets to the identity rotation.
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Vector part `e`.
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Scalar part `s`.
    pub const fn scalar(&self) -> f32 {
        self.w
    }

    /// Returns `[x, y, z, w]`.
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the components as a [`Vec4`].
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Turns the receiver into a rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalised on a copy; the caller's vector is untouched.
    /// A zero axis normalises to zero and yields the non-unit quaternion
    /// `(0, 0, 0, cos(angle / 2))`.
    pub fn set_axis_angle(&mut self, axis: &Vec3, angle: f32) -> &mut Self {
        let half = angle / 2.0;
        let e = axis.normalized() * half.sin();
        *self = Self::from_parts(e, half.cos());
        self
    }

    /// Degree variant of [`Quat::set_axis_angle`].
    pub fn set_axis_angle_deg(&mut self, axis: &Vec3, degrees: f32) -> &mut Self {
        self.set_axis_angle(axis, scalar::deg_to_rad(degrees))
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// # Examples
    /// ```
    /// use affine_math::{Quat, Vec3};
    /// let q = Quat::from_axis_angle(&Vec3::new(0.0, 0.0, 5.0), core::f32::consts::PI);
    /// assert!((q.z - 1.0).abs() < 1e-6);
    /// assert!(q.w.abs() < 1e-6);
    /// ```
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let mut q = Self::IDENTITY;
        q.set_axis_angle(axis, angle);
        q
    }

    /// Degree variant of [`Quat::from_axis_angle`].
    pub fn from_axis_angle_deg(axis: &Vec3, degrees: f32) -> Self {
        Self::from_axis_angle(axis, scalar::deg_to_rad(degrees))
    }

    /// Rotation about +X.
    pub fn rotation_x(angle: f32) -> Self {
        Self::from_axis_angle(&Vec3::UNIT_X, angle)
    }

    /// Rotation about +Y.
    pub fn rotation_y(angle: f32) -> Self {
        Self::from_axis_angle(&Vec3::UNIT_Y, angle)
    }

    /// Rotation about +Z.
    pub fn rotation_z(angle: f32) -> Self {
        Self::from_axis_angle(&Vec3::UNIT_Z, angle)
    }

    /// Hamilton product `self * other`.
    ///
    /// `e = a.s * b.e + b.s * a.e + a.e × b.e`, `s = a.s * b.s - a.e · b.e`.
    ///
    /// Operand order matters. With the [`Quat::rotate`] sandwich, `a * b`
    /// rotates by `a` first and `b` second, matching `Mat4` products.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use affine_math::Quat;
    /// let yaw = Quat::rotation_y(FRAC_PI_2);
    /// let pitch = Quat::rotation_x(FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (ae, sa) = (self.vector(), self.w);
        let (be, sb) = (other.vector(), other.w);
        let e = be * sa + ae * sb + ae.cross(&be);
        Self::from_parts(e, sa * sb - ae.dot(&be))
    }

    /// Conjugate: vector part negated. The inverse rotation for unit input.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotates `v`: the vector part of `conj(q) * (v, 0) * q`.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let p = Self::from_parts(*v, 0.0);
        self.conjugate().multiply(&p).multiply(self).vector()
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.to_vec4().dot(&other.to_vec4())
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit-length copy; a (near-)zero quaternion becomes the
    /// identity.
    pub fn normalized(&self) -> Self {
        let v = self.to_vec4().normalized();
        if v == Vec4::ZERO {
            return Self::IDENTITY;
        }
        Self::from(v)
    }

    /// Rotation matrix, see [`Mat4::from_quat`].
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self)
    }

    /// Affine rotation matrix with zero translation.
    pub fn to_mat4x3(&self) -> Mat4x3 {
        Mat4x3::from_quat(self)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Components are taken verbatim as `(x, y, z, w)`.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Vec4> for Quat {
    fn from(value: Vec4) -> Self {
        Self::new(value.x, value.y, value.z, value.w)
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
