// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, MulAssign};

use tracing::trace;

use crate::{MathError, Quat, Vec3, Vec4};

/// Row‑major 4×4 homogeneous matrix.
///
/// - Element `(row, col)` lives at `data[row * 4 + col]`; rows and columns
///   are zero-based in the API.
/// - Vectors are row vectors on the left: `v' = v * M`. The translation
///   therefore sits in the fourth row, and `A * B` means "apply `A`, then
///   `B`".
/// - Nothing is enforced about the contents; the matrix may be singular or
///   projective.
///
/// # Examples
/// ```
/// use affine_math::{Mat4, Vec3};
/// let m = Mat4::scale(2.0, 2.0, 2.0) * Mat4::translation(1.0, 0.0, 0.0);
/// // Scale first, then translate.
/// let p = m.transform_point(&Vec3::new(1.0, 1.0, 1.0));
/// assert_eq!(p.to_array(), [3.0, 2.0, 2.0]);
/// ```
///
/// # Singular matrices
/// [`Mat4::invert`] and [`Mat4::inverse`] leave a matrix whose determinant is
/// exactly `0.0` untouched. Call [`Mat4::determinant`] first, or use
/// [`Mat4::try_inverse`], when the caller needs to know.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    /// The all-zero matrix.
    pub const ZERO: Self = Self::new([0.0; 16]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the zero matrix.
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

    /// Creates a matrix from row-major data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from four rows.
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new([
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3], //
        ])
    }

    /// Creates a matrix from four row vectors.
    pub const fn from_row_vecs(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_rows([
            r0.to_array(),
            r1.to_array(),
            r2.to_array(),
            r3.to_array(),
        ])
    }

    /// Returns the matrix as a row‑major array.
    pub const fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Returns the four rows.
    pub fn rows(&self) -> [[f32; 4]; 4] {
        [0, 1, 2, 3].map(|r| {
            let b = r * 4;
            [
                self.data[b],
                self.data[b + 1],
                self.data[b + 2],
                self.data[b + 3],
            ]
        })
    }

    /// Row `row` as a vector, or `None` past the fourth row.
    pub fn row(&self, row: usize) -> Option<Vec4> {
        if row >= 4 {
            return None;
        }
        let b = row * 4;
        Some(Vec4::new(
            self.data[b],
            self.data[b + 1],
            self.data[b + 2],
            self.data[b + 3],
        ))
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    /// Element at `(row, col)`, or `None` when either index is past 3.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        (row < 4 && col < 4).then(|| self.at(row, col))
    }

    /// Writes the element at `(row, col)`.
    ///
    /// The reported index on failure is the flat row-major index.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MathError> {
        if row >= 4 || col >= 4 {
            return Err(MathError::IndexOutOfRange {
                index: row * 4 + col,
                len: 16,
            });
        }
        self.data[row * 4 + col] = value;
        Ok(())
    }

    /// Builds a translation matrix; the offset occupies the fourth row.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            tx, ty, tz, 1.0, //
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation about the X axis by `angle` radians.
    ///
    /// Same layout family as [`Mat4::rotation_y`]/[`Mat4::rotation_z`], and
    /// equal to `Mat4::from_quat(&Quat::rotation_x(angle))`.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Rotation matrix equivalent to `q`: `v * Mat4::from_quat(&q)` equals
    /// `q.rotate(v)` for unit `q`.
    ///
    /// `q` is used as given; a non-unit quaternion produces a scaled/sheared
    /// matrix exactly as the sandwich product would.
    pub fn from_quat(q: &Quat) -> Self {
        let [a, b, c] = rotation_block(q);
        Self::from_rows([
            [a[0], a[1], a[2], 0.0],
            [b[0], b[1], b[2], 0.0],
            [c[0], c[1], c[2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Post-concatenates a translation: `self = self * translation(x, y, z)`.
    pub fn append_translation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = self.multiply(&Self::translation(x, y, z));
        self
    }

    /// Post-concatenates a scale: `self = self * scale(x, y, z)`.
    pub fn append_scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = self.multiply(&Self::scale(x, y, z));
        self
    }

    /// Post-concatenates an X rotation.
    pub fn append_rotation_x(&mut self, angle: f32) -> &mut Self {
        *self = self.multiply(&Self::rotation_x(angle));
        self
    }

    /// Post-concatenates a Y rotation: `self = self * rotation_y(angle)`.
    pub fn append_rotation_y(&mut self, angle: f32) -> &mut Self {
        *self = self.multiply(&Self::rotation_y(angle));
        self
    }

    /// Post-concatenates a Z rotation.
    pub fn append_rotation_z(&mut self, angle: f32) -> &mut Self {
        *self = self.multiply(&Self::rotation_z(angle));
        self
    }

    /// Matrix product `self * rhs`: row `r` of the result is `self[r] · rhs`.
    ///
    /// Under the row-vector convention the result applies `self` first and
    /// `rhs` second. The product is not commutative.
    ///
    /// # Examples
    /// ```
    /// use affine_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, 0) * rhs.at(0, col)
                    + self.at(row, 1) * rhs.at(1, col)
                    + self.at(row, 2) * rhs.at(2, col)
                    + self.at(row, 3) * rhs.at(3, col);
            }
        }
        Self::new(out)
    }

    /// Multiplies every element by `s`.
    pub fn scaled(&self, s: f32) -> Self {
        Self::new(self.data.map(|e| e * s))
    }

    /// Transforms a homogeneous row vector: `v * self`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        let (mut x, mut y, mut z, mut w) = (v.x, v.y, v.z, v.w);
        self.transform_xyzw(&mut x, &mut y, &mut z, &mut w);
        Vec4::new(x, y, z, w)
    }

    /// Transforms the four scalars in place as the row vector `(x, y, z, w)`.
    ///
    /// All inputs are read before any output is written.
    pub fn transform_xyzw(&self, x: &mut f32, y: &mut f32, z: &mut f32, w: &mut f32) {
        let (tx, ty, tz, tw) = (*x, *y, *z, *w);
        *x = tx * self.at(0, 0) + ty * self.at(1, 0) + tz * self.at(2, 0) + tw * self.at(3, 0);
        *y = tx * self.at(0, 1) + ty * self.at(1, 1) + tz * self.at(2, 1) + tw * self.at(3, 1);
        *z = tx * self.at(0, 2) + ty * self.at(1, 2) + tz * self.at(2, 2) + tw * self.at(3, 2);
        *w = tx * self.at(0, 3) + ty * self.at(1, 3) + tz * self.at(2, 3) + tw * self.at(3, 3);
    }

    /// Transforms a point (`w = 1`); the resulting `w` is dropped without a
    /// perspective divide.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_vec3(*point, 1.0)).to_vec3()
    }

    /// Transforms a direction (`w = 0`), ignoring the translation row.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_vec3(*direction, 0.0))
            .to_vec3()
    }

    /// Transposes in place by swapping the six off-diagonal pairs.
    pub fn transpose(&mut self) -> &mut Self {
        for (a, b) in [(1, 4), (2, 8), (3, 12), (6, 9), (7, 13), (11, 14)] {
            self.data.swap(a, b);
        }
        self
    }

    /// Returns the transpose, leaving the receiver unchanged.
    pub fn transposed(&self) -> Self {
        let mut out = *self;
        out.transpose();
        out
    }

    /// Determinant by full cofactor expansion (24 signed terms).
    #[rustfmt::skip]
    pub fn determinant(&self) -> f32 {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] =
            self.data;
        m11 * m22 * m33 * m44 + m11 * m23 * m34 * m42 + m11 * m24 * m32 * m43
            + m12 * m21 * m34 * m43 + m12 * m23 * m31 * m44 + m12 * m24 * m33 * m41
            + m13 * m21 * m32 * m44 + m13 * m22 * m34 * m41 + m13 * m24 * m31 * m42
            + m14 * m21 * m33 * m42 + m14 * m22 * m31 * m43 + m14 * m23 * m32 * m41
            - m11 * m22 * m34 * m43 - m11 * m23 * m32 * m44 - m11 * m24 * m33 * m42
            - m12 * m21 * m33 * m44 - m12 * m23 * m34 * m41 - m12 * m24 * m31 * m43
            - m13 * m21 * m34 * m42 - m13 * m22 * m31 * m44 - m13 * m24 * m32 * m41
            - m14 * m21 * m32 * m43 - m14 * m22 * m33 * m41 - m14 * m23 * m31 * m42
    }

    /// Adjugate (transposed cofactor matrix), row-major.
    #[rustfmt::skip]
    fn adjugate(&self) -> [f32; 16] {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] =
            self.data;
        [
            m22 * m33 * m44 + m23 * m34 * m42 + m24 * m32 * m43 - m22 * m34 * m43 - m23 * m32 * m44 - m24 * m33 * m42,
            m12 * m34 * m43 + m13 * m32 * m44 + m14 * m33 * m42 - m12 * m33 * m44 - m13 * m34 * m42 - m14 * m32 * m43,
            m12 * m23 * m44 + m13 * m24 * m42 + m14 * m22 * m43 - m12 * m24 * m43 - m13 * m22 * m44 - m14 * m23 * m42,
            m12 * m24 * m33 + m13 * m22 * m34 + m14 * m23 * m32 - m12 * m23 * m34 - m13 * m24 * m32 - m14 * m22 * m33,
            m21 * m34 * m43 + m23 * m31 * m44 + m24 * m33 * m41 - m21 * m33 * m44 - m23 * m34 * m41 - m24 * m31 * m43,
            m11 * m33 * m44 + m13 * m34 * m41 + m14 * m31 * m43 - m11 * m34 * m43 - m13 * m31 * m44 - m14 * m33 * m41,
            m11 * m24 * m43 + m13 * m21 * m44 + m14 * m23 * m41 - m11 * m23 * m44 - m13 * m24 * m41 - m14 * m21 * m43,
            m11 * m23 * m34 + m13 * m24 * m31 + m14 * m21 * m33 - m11 * m24 * m33 - m13 * m21 * m34 - m14 * m23 * m31,
            m21 * m32 * m44 + m22 * m34 * m41 + m24 * m31 * m42 - m21 * m34 * m42 - m22 * m31 * m44 - m24 * m32 * m41,
            m11 * m34 * m42 + m12 * m31 * m44 + m14 * m32 * m41 - m11 * m32 * m44 - m12 * m34 * m41 - m14 * m31 * m42,
            m11 * m22 * m44 + m12 * m24 * m41 + m14 * m21 * m42 - m11 * m24 * m42 - m12 * m21 * m44 - m14 * m22 * m41,
            m11 * m24 * m32 + m12 * m21 * m34 + m14 * m22 * m31 - m11 * m22 * m34 - m12 * m24 * m31 - m14 * m21 * m32,
            m21 * m33 * m42 + m22 * m31 * m43 + m23 * m32 * m41 - m21 * m32 * m43 - m22 * m33 * m41 - m23 * m31 * m42,
            m11 * m32 * m43 + m12 * m33 * m41 + m13 * m31 * m42 - m11 * m33 * m42 - m12 * m31 * m43 - m13 * m32 * m41,
            m11 * m23 * m42 + m12 * m21 * m43 + m13 * m22 * m41 - m11 * m22 * m43 - m12 * m23 * m41 - m13 * m21 * m42,
            m11 * m22 * m33 + m12 * m23 * m31 + m13 * m21 * m32 - m11 * m23 * m32 - m12 * m21 * m33 - m13 * m22 * m31,
        ]
    }

    /// Inverse, or `Err(Singular)` when the determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let d = self.determinant();
        if d == 0.0 {
            return Err(MathError::Singular { determinant: d });
        }
        Ok(Self::new(self.adjugate().map(|b| b / d)))
    }

    /// Returns the inverse; a singular matrix comes back unchanged.
    ///
    /// The return value alone cannot tell "already its own inverse" from
    /// "not invertible"; see [`Mat4::try_inverse`].
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|err| {
            trace!(%err, "inversion skipped, returning input");
            *self
        })
    }

    /// Inverts in place; a singular matrix is left unchanged.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }
}

/// Top-left 3×3 rotation block for `q` under the row-vector convention.
pub(crate) fn rotation_block(q: &Quat) -> [[f32; 3]; 3] {
    let Quat { x, y, z, w } = *q;
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);
    [
        [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
        [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
        [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
    ]
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::new(value)
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(value: [[f32; 4]; 4]) -> Self {
        Self::from_rows(value)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs.scaled(self)
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scaled(rhs);
    }
}

/// Row vector times matrix.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    fn mul(self, rhs: Mat4) -> Vec4 {
        rhs.transform_vec4(&self)
    }
}
