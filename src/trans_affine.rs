//! Affine transformation matrix.
//!
//! 2×3 matrices in row-vector convention: a point is transformed as
//! `p' = p · M`, so `a.multiply(&b)` means "apply `a`, then `b`".
//! Chained transforms (scale, then rotate, then translate) rely on that order.

use crate::basics::{iround, PointD, PointI};
use crate::error::{GeometryError, Result};
use crate::log::debug;

/// Epsilon for matrix comparisons.
pub const AFFINE_EPSILON: f64 = 1e-14;

/// Smallest representable positive double. A determinant below this in
/// magnitude makes the matrix singular.
pub const INVERT_EPSILON: f64 = 5e-324;

/// 2D affine transformation matrix.
///
/// ```text
///   | a00 a01 |
///   | a10 a11 |
///   | a20 a21 |
/// ```
///
/// Transform: `x' = x*a00 + y*a10 + a20`, `y' = x*a01 + y*a11 + a21`.
#[derive(Debug, Clone, Copy)]
pub struct AffineMatrix {
    pub a00: f64,
    pub a01: f64,
    pub a10: f64,
    pub a11: f64,
    pub a20: f64,
    pub a21: f64,
}

impl AffineMatrix {
    /// The identity matrix.
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        a00: 1.0,
        a01: 0.0,
        a10: 0.0,
        a11: 1.0,
        a20: 0.0,
        a21: 0.0,
    };

    /// Matrix filled with NaN, written by a failed inversion.
    pub const NAN: AffineMatrix = AffineMatrix {
        a00: f64::NAN,
        a01: f64::NAN,
        a10: f64::NAN,
        a11: f64::NAN,
        a20: f64::NAN,
        a21: f64::NAN,
    };

    // ====================================================================
    // Construction
    // ====================================================================

    /// Identity matrix.
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Custom matrix from six components.
    pub fn new_custom(a00: f64, a01: f64, a10: f64, a11: f64, a20: f64, a21: f64) -> Self {
        Self {
            a00,
            a01,
            a10,
            a11,
            a20,
            a21,
        }
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Non-uniform scaling about the origin.
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Self::new_custom(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Non-uniform scaling about `center`.
    ///
    /// Equivalent to translate(-c) · scale · translate(c), expanded analytically.
    pub fn new_scale_at(sx: f64, sy: f64, center: PointD) -> Self {
        Self::new_custom(
            sx,
            0.0,
            0.0,
            sy,
            center.x * (1.0 - sx),
            center.y * (1.0 - sy),
        )
    }

    /// Skew (shear) by angles in radians about the origin.
    pub fn new_skew(rad_x: f64, rad_y: f64) -> Self {
        Self::new_custom(1.0, rad_y.tan(), rad_x.tan(), 1.0, 0.0, 0.0)
    }

    /// Skew (shear) by angles in radians about `center`.
    pub fn new_skew_at(rad_x: f64, rad_y: f64, center: PointD) -> Self {
        let tx = rad_x.tan();
        let ty = rad_y.tan();
        Self::new_custom(1.0, ty, tx, 1.0, -center.y * tx, -center.x * ty)
    }

    /// Rotation by `radians` about the origin.
    pub fn new_rotation(radians: f64) -> Self {
        let (sa, ca) = radians.sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Rotation by `radians` about `center`.
    pub fn new_rotation_at(radians: f64, center: PointD) -> Self {
        let (sa, ca) = radians.sin_cos();
        Self::new_custom(
            ca,
            sa,
            -sa,
            ca,
            center.x * (1.0 - ca) + center.y * sa,
            center.y * (1.0 - ca) - center.x * sa,
        )
    }

    // ====================================================================
    // Operations
    // ====================================================================

    /// Post-multiply: `self = self · m` (apply `self` first, then `m`).
    pub fn multiply(&mut self, m: &AffineMatrix) -> &mut Self {
        let t00 = self.a00 * m.a00 + self.a01 * m.a10;
        let t10 = self.a10 * m.a00 + self.a11 * m.a10;
        let t20 = self.a20 * m.a00 + self.a21 * m.a10 + m.a20;
        self.a01 = self.a00 * m.a01 + self.a01 * m.a11;
        self.a11 = self.a10 * m.a01 + self.a11 * m.a11;
        self.a21 = self.a20 * m.a01 + self.a21 * m.a11 + m.a21;
        self.a00 = t00;
        self.a10 = t10;
        self.a20 = t20;
        self
    }

    /// Compose two matrices: the result applies `m1` first, then `m2`.
    pub fn compose(m1: &AffineMatrix, m2: &AffineMatrix) -> AffineMatrix {
        let mut r = *m1;
        r.multiply(m2);
        r
    }

    /// Invert into `result`.
    ///
    /// Returns `false` and fills `result` with NaN when the determinant is
    /// smaller in magnitude than [`INVERT_EPSILON`].
    pub fn invert_into(&self, result: &mut AffineMatrix) -> bool {
        let det = self.determinant();
        if det.is_nan() || det.abs() < INVERT_EPSILON {
            debug!(determinant = det, "matrix is not invertible");
            *result = Self::NAN;
            return false;
        }
        let d = 1.0 / det;
        *result = Self::new_custom(
            self.a11 * d,
            -self.a01 * d,
            -self.a10 * d,
            self.a00 * d,
            (self.a10 * self.a21 - self.a20 * self.a11) * d,
            (self.a20 * self.a01 - self.a00 * self.a21) * d,
        );
        true
    }

    /// Inverse matrix, or `None` when singular.
    pub fn inverted(&self) -> Option<AffineMatrix> {
        let mut r = Self::NAN;
        self.invert_into(&mut r).then_some(r)
    }

    /// Inverse matrix, or [`GeometryError::SingularMatrix`].
    pub fn try_invert(&self) -> Result<AffineMatrix> {
        self.inverted().ok_or(GeometryError::SingularMatrix {
            determinant: self.determinant(),
        })
    }

    /// Componentwise linear interpolation: `t = 0` gives `m1`, `t = 1` gives `m2`.
    pub fn lerp(m1: &AffineMatrix, m2: &AffineMatrix, t: f64) -> AffineMatrix {
        Self::new_custom(
            m1.a00 + (m2.a00 - m1.a00) * t,
            m1.a01 + (m2.a01 - m1.a01) * t,
            m1.a10 + (m2.a10 - m1.a10) * t,
            m1.a11 + (m2.a11 - m1.a11) * t,
            m1.a20 + (m2.a20 - m1.a20) * t,
            m1.a21 + (m2.a21 - m1.a21) * t,
        )
    }

    // ====================================================================
    // Transformations
    // ====================================================================

    /// Forward transform of `(x, y)`.
    #[inline]
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.a00 + y * self.a10 + self.a20,
            x * self.a01 + y * self.a11 + self.a21,
        )
    }

    /// Forward transform of a point.
    #[inline]
    pub fn transform_point(&self, p: PointD) -> PointD {
        let (x, y) = self.transform(p.x, p.y);
        PointD::new(x, y)
    }

    /// Integer transform. Each output component is rounded on its own.
    #[inline]
    pub fn transform_i(&self, p: PointI) -> PointI {
        let (x, y) = self.transform(p.x as f64, p.y as f64);
        PointI::new(iround(x), iround(y))
    }

    /// Linear part only. For direction vectors.
    #[inline]
    pub fn transform_normal(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.a00 + y * self.a10, x * self.a01 + y * self.a11)
    }

    // ====================================================================
    // Auxiliary
    // ====================================================================

    /// Determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a00 * self.a11 - self.a10 * self.a01
    }

    /// Check if this is an identity matrix.
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.is_equal(&Self::IDENTITY, epsilon)
    }

    /// Check if two matrices are equal within epsilon.
    pub fn is_equal(&self, m: &AffineMatrix, epsilon: f64) -> bool {
        (self.a00 - m.a00).abs() <= epsilon
            && (self.a01 - m.a01).abs() <= epsilon
            && (self.a10 - m.a10).abs() <= epsilon
            && (self.a11 - m.a11).abs() <= epsilon
            && (self.a20 - m.a20).abs() <= epsilon
            && (self.a21 - m.a21).abs() <= epsilon
    }

    /// Extract the translation components.
    pub fn translation(&self) -> (f64, f64) {
        (self.a20, self.a21)
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AffineMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other, AFFINE_EPSILON)
    }
}

impl std::ops::Mul for AffineMatrix {
    type Output = AffineMatrix;
    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        AffineMatrix::compose(&self, &rhs)
    }
}

impl std::ops::MulAssign for AffineMatrix {
    fn mul_assign(&mut self, rhs: AffineMatrix) {
        self.multiply(&rhs);
    }
}

// ============================================================================
// Tests
// ============================================================================
