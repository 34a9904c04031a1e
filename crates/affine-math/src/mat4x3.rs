// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, MulAssign};

use crate::mat4::rotation_block;
use crate::{Mat4, MathError, Quat, Vec3, Vec4};

/// Affine 4×3 matrix: a [`Mat4`] whose fourth column is implicitly
/// `(0, 0, 0, 1)`.
///
/// Rows 0..=2 hold the linear (rotation/scale) block and row 3 holds the
/// translation. Only 12 floats are stored; the implicit column is
/// re-materialised whenever the matrix meets full 4×4 semantics.
///
/// Every product, determinant and inverse is computed by widening to
/// [`Mat4`], running the 4×4 formula, and dropping the fourth column again.
/// Terms that meet the implicit zeros and one are exact, so the results
/// equal the dedicated 3×3-block formulas while the two types can never
/// drift apart.
///
/// # Examples
/// ```
/// use affine_math::{Mat4x3, Vec3};
/// let m = Mat4x3::translation(1.0, 2.0, 3.0);
/// let inv = m.inverse();
/// assert_eq!(inv.translation_part(), Vec3::new(-1.0, -2.0, -3.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4x3 {
    data: [f32; 12],
}

impl Mat4x3 {
    /// Identity linear block with zero translation.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0, //
        0.0, 0.0, 0.0, //
    ]);

    /// All twelve stored elements zero.
    pub const ZERO: Self = Self::new([0.0; 12]);

    /// Returns [`Mat4x3::IDENTITY`].
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns [`Mat4x3::ZERO`].
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Overwrites the receiver with the identity.
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Overwrites the receiver with zeros.
    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    /// Creates a matrix from row-major data (4 rows of 3).
    pub const fn new(data: [f32; 12]) -> Self {
        Self { data }
    }

    /// Creates a matrix from four rows.
    pub const fn from_rows(rows: [[f32; 3]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new([
            r0[0], r0[1], r0[2], //
            r1[0], r1[1], r1[2], //
            r2[0], r2[1], r2[2], //
            r3[0], r3[1], r3[2], //
        ])
    }

    /// Creates a matrix from three basis rows and a translation row.
    pub const fn from_row_vecs(r0: Vec3, r1: Vec3, r2: Vec3, translation: Vec3) -> Self {
        Self::from_rows([
            r0.to_array(),
            r1.to_array(),
            r2.to_array(),
            translation.to_array(),
        ])
    }

    /// Keeps the first three columns of `m`, discarding the fourth.
    pub fn from_mat4(m: &Mat4) -> Self {
        let mut data = [0.0; 12];
        for row in 0..4 {
            for col in 0..3 {
                data[row * 3 + col] = m.at(row, col);
            }
        }
        Self::new(data)
    }

    /// Returns the stored elements row-major.
    pub const fn to_array(self) -> [f32; 12] {
        self.data
    }

    /// Returns the four stored rows.
    pub fn rows(&self) -> [[f32; 3]; 4] {
        [0, 1, 2, 3].map(|r| {
            let b = r * 3;
            [self.data[b], self.data[b + 1], self.data[b + 2]]
        })
    }

    /// Row `row` as a vector, or `None` past the fourth row.
    pub fn row(&self, row: usize) -> Option<Vec3> {
        if row >= 4 {
            return None;
        }
        let b = row * 3;
        Some(Vec3::new(self.data[b], self.data[b + 1], self.data[b + 2]))
    }

    /// The translation row.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.data[9], self.data[10], self.data[11])
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 3 + col]
    }

    /// Stored element at `(row, col)`; `None` for `col >= 3` or `row >= 4`.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        (row < 4 && col < 3).then(|| self.at(row, col))
    }

    /// Writes a stored element. The implicit column cannot be written.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MathError> {
        if row >= 4 || col >= 3 {
            return Err(MathError::IndexOutOfRange {
                index: row * 3 + col,
                len: 12,
            });
        }
        self.data[row * 3 + col] = value;
        Ok(())
    }

    /// Widens to a [`Mat4`] with the fourth column set to `(0, 0, 0, 1)`.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::new(self.to_array4x4())
    }

    /// Widens to 16 row-major floats with the fourth column `(0, 0, 0, 1)`.
    pub fn to_array4x4(&self) -> [f32; 16] {
        let d = &self.data;
        [
            d[0], d[1], d[2], 0.0, //
            d[3], d[4], d[5], 0.0, //
            d[6], d[7], d[8], 0.0, //
            d[9], d[10], d[11], 1.0, //
        ]
    }

    /// Writes the widened 4×4 form into `out`.
    pub fn copy_as_4x4(&self, out: &mut [f32; 16]) {
        *out = self.to_array4x4();
    }

    /// Translation-only affine matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_mat4(&Mat4::translation(x, y, z))
    }

    /// Non-uniform scale.
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::from_mat4(&Mat4::scale(x, y, z))
    }

    /// Rotation about X by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        Self::from_mat4(&Mat4::rotation_x(angle))
    }

    /// Rotation about Y by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        Self::from_mat4(&Mat4::rotation_y(angle))
    }

    /// Rotation about Z by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        Self::from_mat4(&Mat4::rotation_z(angle))
    }

    /// Rotation equivalent to `q`; see [`Mat4::from_quat`].
    pub fn from_quat(q: &Quat) -> Self {
        let [a, b, c] = rotation_block(q);
        Self::from_rows([a, b, c, [0.0, 0.0, 0.0]])
    }

    /// `self = self * translation(x, y, z)`.
    pub fn append_translation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = self.multiply(&Self::translation(x, y, z));
        self
    }

    /// `self = self * scale(x, y, z)`.
    pub fn append_scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = self.multiply(&Self::scale(x, y, z));
        self
    }

    /// `self = self * rotation_x(angle)`.
    pub fn append_rotation_x(&mut self, angle: f32) -> &mut Self {
        *self = self.multiply(&Self::rotation_x(angle));
        self
    }

    /// `self = self * rotation_y(angle)`.
    pub fn append_rotation_y(&mut self, angle: f32) -> &mut Self {
        *self = self.multiply(&Self::rotation_y(angle));
        self
    }

    /// `self = self * rotation_z(angle)`.
    pub fn append_rotation_z(&mut self, angle: f32) -> &mut Self {
        *self = self.multiply(&Self::rotation_z(angle));
        self
    }

    /// Affine product with both fourth columns taken as `(0, 0, 0, 1)`.
    ///
    /// The linear blocks multiply as 3×3 matrices and the translation row
    /// becomes `self.row4 · rhs.linear + rhs.row4`: `self` is applied first,
    /// then `rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_mat4(&self.to_mat4().multiply(&rhs.to_mat4()))
    }

    /// `self * rhs` with only the receiver's fourth column taken as implicit;
    /// `rhs`'s fourth column does not reach the stored result.
    pub fn multiply_mat4(&self, rhs: &Mat4) -> Self {
        Self::from_mat4(&self.to_mat4().multiply(rhs))
    }

    /// `lhs * self` for a full 4×4 `lhs`, keeping the first three columns.
    pub fn premultiply_mat4(&self, lhs: &Mat4) -> Self {
        Self::from_mat4(&lhs.multiply(&self.to_mat4()))
    }

    /// Multiplies every stored element by `s`.
    pub fn scaled(&self, s: f32) -> Self {
        Self::new(self.data.map(|e| e * s))
    }

    /// Row vector `(v.x, v.y, v.z, v.w)` times the 4×3 matrix.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec3 {
        self.to_mat4().transform_vec4(v).to_vec3()
    }

    /// Transforms a point (`w = 1`).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_vec3(*point, 1.0))
    }

    /// Transforms a direction (`w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_vec3(*direction, 0.0))
    }

    /// Determinant of the top-left 3×3 block, which is the determinant of
    /// the widened 4×4 matrix.
    pub fn determinant(&self) -> f32 {
        self.to_mat4().determinant()
    }

    /// Affine inverse, or `Err(Singular)` for a zero determinant.
    ///
    /// The linear block becomes its inverse `R⁻¹` and the translation row
    /// becomes `-t · R⁻¹`.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        self.to_mat4()
            .try_inverse()
            .map(|inv| Self::from_mat4(&inv))
    }

    /// Returns the inverse; a singular matrix comes back unchanged.
    pub fn inverse(&self) -> Self {
        Self::from_mat4(&self.to_mat4().inverse())
    }

    /// Inverts in place; a singular matrix is left unchanged.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }
}

impl Default for Mat4x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 12]> for Mat4x3 {
    fn from(value: [f32; 12]) -> Self {
        Self::new(value)
    }
}

impl From<Mat4x3> for Mat4 {
    fn from(value: Mat4x3) -> Self {
        value.to_mat4()
    }
}

impl Mul for Mat4x3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl MulAssign for Mat4x3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// Full 4×4 on the left of an affine matrix.
impl Mul<Mat4x3> for Mat4 {
    type Output = Mat4x3;
    fn mul(self, rhs: Mat4x3) -> Mat4x3 {
        rhs.premultiply_mat4(&self)
    }
}

impl Mul<f32> for Mat4x3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scaled(rhs)
    }
}

impl Mul<Mat4x3> for f32 {
    type Output = Mat4x3;
    fn mul(self, rhs: Mat4x3) -> Mat4x3 {
        rhs.scaled(self)
    }
}

impl MulAssign<f32> for Mat4x3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scaled(rhs);
    }
}

impl Mul<Mat4x3> for Vec4 {
    type Output = Vec3;
    fn mul(self, rhs: Mat4x3) -> Vec3 {
        rhs.transform_vec4(&self)
    }
}
