//! Foundation types, rounding, and interval helpers.
//!
//! Everything else in the crate leans on these: integer rounding with
//! half-away-from-zero semantics, ordered pairs, interval membership,
//! clamping, and the point / corner-box value types.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Floor a double to the nearest integer toward negative infinity.
#[inline]
pub fn ifloor(v: f64) -> i32 {
    let i = v as i32;
    i.saturating_sub((i as f64 > v) as i32)
}

/// Ceiling of a double as a signed integer.
#[inline]
pub fn iceil(v: f64) -> i32 {
    v.ceil() as i32
}

// ============================================================================
// Ordering, intervals, clamping
// ============================================================================

/// Swap `a` and `b` so that `a <= b` afterwards.
#[inline]
pub fn order<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        core::mem::swap(a, b);
    }
}

/// Exchange two values.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

/// Returns the pair ordered ascending.
#[inline]
pub fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Inclusive membership: `v` lies in `[lo, hi]`, bounds given in any order.
#[inline]
pub fn is_within<T: PartialOrd + Copy>(v: T, a: T, b: T) -> bool {
    let (lo, hi) = ordered(a, b);
    v >= lo && v <= hi
}

/// Exclusive membership: `v` lies in `(lo, hi)`, bounds given in any order.
#[inline]
pub fn in_between<T: PartialOrd + Copy>(v: T, a: T, b: T) -> bool {
    let (lo, hi) = ordered(a, b);
    v > lo && v < hi
}

/// Clamp `v` into `[min, max]`.
///
/// Both bounds at exactly zero mean "no constraint configured" and return
/// `v` untouched, so a genuine `[0, 0]` clamp cannot be expressed here.
#[inline]
pub fn confine(v: f64, min: f64, max: f64) -> f64 {
    if min == 0.0 && max == 0.0 {
        return v;
    }
    let (lo, hi) = ordered(min, max);
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Integer variant of [`confine`], with the same zero-bounds sentinel.
#[inline]
pub fn confine_i(v: i32, min: i32, max: i32) -> i32 {
    if min == 0 && max == 0 {
        return v;
    }
    let (lo, hi) = ordered(min, max);
    v.clamp(lo, hi)
}

/// Midpoint of two values, independent of their order.
#[inline]
pub fn middle(a: f64, b: f64) -> f64 {
    let (lo, hi) = ordered(a, b);
    lo + (hi - lo) / 2.0
}

// ============================================================================
// Filling rule
// ============================================================================

/// Filling rule for polygon scan conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillingRule {
    #[default]
    NonZero,
    EvenOdd,
}

// ============================================================================
// Angles
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Degrees per radian. Used by every angle computation in the crate.
pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg / DEGREES_PER_RADIAN
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
    rad * DEGREES_PER_RADIAN
}

// ============================================================================
// Rect (corner box)
// ============================================================================

/// A box defined by two corner points. Used as the device clip extent
/// for line clipping; shapes use [`crate::rectangle::Rectangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        order(&mut self.x1, &mut self.x2);
        order(&mut self.y1, &mut self.y2);
        self
    }

    /// Returns `true` if the box is non-inverted.
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if (x, y) is inside, edges included.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Corner box in floating coordinates, used as a device clip extent.
pub type ClipBox = Rect<f64>;

// ============================================================================
// Point
// ============================================================================

/// A 2D point. Plain value, no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointI = PointBase<i32>;
pub type PointD = PointBase<f64>;

impl PointD {
    /// True when either coordinate is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Round both coordinates independently.
    #[inline]
    pub fn round(&self) -> PointI {
        PointI::new(iround(self.x), iround(self.y))
    }
}

impl From<PointI> for PointD {
    fn from(p: PointI) -> Self {
        PointD::new(p.x as f64, p.y as f64)
    }
}

// ============================================================================
// Tests
// ============================================================================
