//! Rectangles: clipping against a source extent, equality, and
//! scale / rotate / skew about a center.
//!
//! A rectangle is `(x, y, width, height)` with the origin at the top-left
//! and y growing downward. Width or height at or below zero makes it empty;
//! empty rectangles never contain a point, never compare equal, and never
//! produce scanlines.

use core::ops::{Add, Sub};

use crate::basics::{ifloor, iceil, iround, PointD};
use crate::rotation::Rotation;
use crate::trans_affine::AffineMatrix;

/// Numeric requirements for rectangle coordinates.
pub trait Coord: Copy + PartialOrd + Default + Add<Output = Self> + Sub<Output = Self> {}

impl<T> Coord for T where T: Copy + PartialOrd + Default + Add<Output = T> + Sub<Output = T> {}

#[inline]
fn pmin<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

// ============================================================================
// Rectangle
// ============================================================================

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle<T: Copy> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

pub type RectangleI = Rectangle<i32>;
pub type RectangleD = Rectangle<f64>;

impl<T: Coord> Rectangle<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The canonical empty rectangle: all zero.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// Width or height at or below zero (or NaN).
    #[inline]
    pub fn is_empty(&self) -> bool {
        let zero = T::default();
        !(self.width > zero && self.height > zero)
    }

    /// Inclusive on all four edges: `x == right()` is inside.
    #[inline]
    pub fn contains_point(&self, x: T, y: T) -> bool {
        !self.is_empty() && x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

impl RectangleD {
    /// Rectangle spanning two corner points.
    pub fn from_corners(tl: PointD, br: PointD) -> Self {
        Self::new(tl.x, tl.y, br.x - tl.x, br.y - tl.y)
    }

    /// Axis-aligned bounding box of a point set; empty for no points.
    pub fn bounding(points: &[PointD]) -> Self {
        let Some(first) = points.first() else {
            return Self::empty();
        };
        let (mut x1, mut y1, mut x2, mut y2) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            x1 = x1.min(p.x);
            y1 = y1.min(p.y);
            x2 = x2.max(p.x);
            y2 = y2.max(p.y);
        }
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn center(&self) -> PointD {
        PointD::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corners clockwise on screen from the top-left.
    pub fn corners(&self) -> [PointD; 4] {
        [
            PointD::new(self.x, self.y),
            PointD::new(self.right(), self.y),
            PointD::new(self.right(), self.bottom()),
            PointD::new(self.x, self.bottom()),
        ]
    }

    /// Smallest integer rectangle covering this one.
    pub fn to_int_bounds(&self) -> RectangleI {
        if self.is_empty() {
            return RectangleI::empty();
        }
        let x = ifloor(self.x);
        let y = ifloor(self.y);
        RectangleI::new(
            x,
            y,
            iceil(self.right()).saturating_sub(x),
            iceil(self.bottom()).saturating_sub(y),
        )
    }

    /// Round origin and far corner independently.
    pub fn round(&self) -> RectangleI {
        let x = iround(self.x);
        let y = iround(self.y);
        RectangleI::new(
            x,
            y,
            iround(self.right()).saturating_sub(x),
            iround(self.bottom()).saturating_sub(y),
        )
    }
}

impl From<RectangleI> for RectangleD {
    fn from(r: RectangleI) -> Self {
        RectangleD::new(r.x as f64, r.y as f64, r.width as f64, r.height as f64)
    }
}

// ============================================================================
// Compatibility with a source extent
// ============================================================================

/// Clip `(x, y, w, h)` in place into the source extent `[0, src_w) × [0, src_h)`.
///
/// Negative offsets move to zero and shrink the size by the same amount;
/// the size is then capped to what remains of the source. When the result
/// collapses all four components are zeroed and `false` is returned.
pub fn compatible_rect_in_place(
    src_w: i32,
    src_h: i32,
    x: &mut i32,
    y: &mut i32,
    w: &mut i32,
    h: &mut i32,
) -> bool {
    if *x < 0 {
        *w = w.saturating_add(*x);
        *x = 0;
    }
    if *y < 0 {
        *h = h.saturating_add(*y);
        *y = 0;
    }
    *w = (*w).min(src_w.saturating_sub(*x));
    *h = (*h).min(src_h.saturating_sub(*y));
    if *w <= 0 || *h <= 0 {
        *x = 0;
        *y = 0;
        *w = 0;
        *h = 0;
        return false;
    }
    true
}

/// Clip `rect` into the source extent; the empty rectangle when it collapses.
pub fn compatible_rect(src_w: i32, src_h: i32, rect: RectangleI) -> RectangleI {
    let RectangleI {
        mut x,
        mut y,
        width: mut w,
        height: mut h,
    } = rect;
    if compatible_rect_in_place(src_w, src_h, &mut x, &mut y, &mut w, &mut h) {
        RectangleI::new(x, y, w, h)
    } else {
        RectangleI::empty()
    }
}

/// How a candidate's origin relates to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateSpace {
    /// Same coordinate system as the container.
    #[default]
    Absolute,
    /// Offset from the container's origin.
    Relative,
}

/// Intersect `candidate` with `container` (absolute coordinates).
///
/// The empty rectangle comes back when the candidate's origin, after being
/// pulled up to the container's origin, lies outside the container, or
/// when nothing is left of it.
pub fn compatible_rect_within<T: Coord>(
    candidate: Rectangle<T>,
    container: Rectangle<T>,
    space: CoordinateSpace,
) -> Rectangle<T> {
    let zero = T::default();
    let Rectangle {
        mut x,
        mut y,
        width: mut w,
        height: mut h,
    } = candidate;
    if space == CoordinateSpace::Relative {
        x = x + container.x;
        y = y + container.y;
    }
    if x < container.x {
        w = w - (container.x - x);
        x = container.x;
    }
    if y < container.y {
        h = h - (container.y - y);
        y = container.y;
    }
    if x > container.right() || y > container.bottom() {
        return Rectangle::empty();
    }
    w = pmin(w, container.right() - x);
    h = pmin(h, container.bottom() - y);
    if !(w > zero && h > zero) {
        return Rectangle::empty();
    }
    Rectangle::new(x, y, w, h)
}

// ============================================================================
// Equality
// ============================================================================

/// Structural equality with `(x, y, w, h)`. Empty on either side is never equal.
pub fn equals<T: Coord>(bounds: Option<&Rectangle<T>>, x: T, y: T, w: T, h: T) -> bool {
    let other = Rectangle::new(x, y, w, h);
    match bounds {
        Some(b) => !b.is_empty() && !other.is_empty() && *b == other,
        None => false,
    }
}

/// Structural equality of two optional bounds.
///
/// Two absent bounds are equal; an empty rectangle equals nothing, not even
/// an identical empty rectangle.
pub fn equals_bounds<T: Coord>(a: Option<&Rectangle<T>>, b: Option<&Rectangle<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => !a.is_empty() && !b.is_empty() && a == b,
        _ => false,
    }
}

// ============================================================================
// Scale, rotate, skew
// ============================================================================

/// Scale both corners of `rect` about `center` (default: its own center),
/// then apply the descriptor's skew if it carries one.
///
/// Width and height are recomputed from the moved corners, which matters
/// once the scale or skew center is not the rectangle's own.
pub fn scale_rect(
    rect: &RectangleD,
    rotation: Option<&Rotation>,
    sx: f64,
    sy: f64,
    center: Option<PointD>,
) -> RectangleD {
    let c = center.unwrap_or_else(|| rect.center());
    let m = AffineMatrix::new_scale_at(sx, sy, c);
    let mut tl = m.transform_point(PointD::new(rect.x, rect.y));
    let mut br = m.transform_point(PointD::new(rect.right(), rect.bottom()));

    if let Some(r) = rotation {
        if let Some(skew) = r.skew.filter(|s| !s.is_identity()) {
            let sm = skew.matrix(r.skew_center_or(c));
            tl = sm.transform_point(tl);
            br = sm.transform_point(br);
        }
    }
    RectangleD::from_corners(tl, br)
}

/// The four corners of `rect` after rotation (and skew, if any).
///
/// [`rotate_rect`] reduces these to a bounding box; callers that need the
/// true outline take them from here.
pub fn rotated_corners(rect: &RectangleD, rotation: &Rotation) -> [PointD; 4] {
    let m = rotation.matrix(rect.center(), false);
    rect.corners().map(|p| m.transform_point(p))
}

/// Axis-aligned bounding box of `rect` rotated about the descriptor's
/// center (default: the rectangle center), skew included.
pub fn rotate_rect(rect: &RectangleD, rotation: &Rotation) -> RectangleD {
    RectangleD::bounding(&rotated_corners(rect, rotation))
}

/// Integer variant of [`rotate_rect`]; the box is rounded corner by corner.
pub fn rotate_rect_i(rect: &RectangleI, rotation: &Rotation) -> RectangleI {
    rotate_rect(&RectangleD::from(*rect), rotation).round()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::{Skew, SkewKind};

    const EPS: f64 = 1e-9;

    fn near(a: &RectangleD, b: &RectangleD) -> bool {
        (a.x - b.x).abs() < EPS
            && (a.y - b.y).abs() < EPS
            && (a.width - b.width).abs() < EPS
            && (a.height - b.height).abs() < EPS
    }

    #[test]
    fn test_empty_rectangles() {
        assert!(RectangleI::new(0, 0, 0, 5).is_empty());
        assert!(RectangleI::new(0, 0, 5, -1).is_empty());
        assert!(RectangleD::new(0.0, 0.0, f64::NAN, 1.0).is_empty());
        assert!(!RectangleI::new(0, 0, 1, 1).is_empty());
        assert_eq!(RectangleI::empty(), RectangleI::new(0, 0, 0, 0));
    }

    #[test]
    fn test_contains_point_inclusive_edges() {
        let r = RectangleI::new(10, 10, 20, 5);
        assert!(r.contains_point(30, 15));
        assert!(r.contains_point(10, 10));
        assert!(!r.contains_point(31, 15));
        assert!(!r.contains_point(30, 16));
        assert!(!RectangleI::new(0, 0, 0, 0).contains_point(0, 0));
    }

    #[test]
    fn test_compatible_rect_negative_origin() {
        let r = compatible_rect(100, 100, RectangleI::new(-10, -10, 50, 50));
        assert_eq!(r, RectangleI::new(0, 0, 40, 40));
    }

    #[test]
    fn test_compatible_rect_caps_to_source() {
        let r = compatible_rect(100, 80, RectangleI::new(90, 70, 50, 50));
        assert_eq!(r, RectangleI::new(90, 70, 10, 10));
    }

    #[test]
    fn test_compatible_rect_collapse() {
        assert_eq!(
            compatible_rect(100, 100, RectangleI::new(120, 0, 10, 10)),
            RectangleI::empty()
        );
        let (mut x, mut y, mut w, mut h) = (-60, 5, 50, 10);
        assert!(!compatible_rect_in_place(100, 100, &mut x, &mut y, &mut w, &mut h));
        assert_eq!((x, y, w, h), (0, 0, 0, 0));
    }

    #[test]
    fn test_compatible_rect_within() {
        let container = RectangleI::new(10, 10, 100, 50);
        let r = compatible_rect_within(RectangleI::new(0, 20, 50, 100), container, CoordinateSpace::Absolute);
        assert_eq!(r, RectangleI::new(10, 20, 40, 40));

        let r = compatible_rect_within(RectangleI::new(5, 5, 10, 10), container, CoordinateSpace::Relative);
        assert_eq!(r, RectangleI::new(15, 15, 10, 10));

        let r = compatible_rect_within(RectangleI::new(111, 20, 5, 5), container, CoordinateSpace::Absolute);
        assert_eq!(r, RectangleI::empty());

        let r = compatible_rect_within(
            RectangleD::new(0.5, 0.5, 2.0, 2.0),
            RectangleD::new(0.0, 0.0, 2.0, 2.0),
            CoordinateSpace::Absolute,
        );
        assert!(near(&r, &RectangleD::new(0.5, 0.5, 1.5, 1.5)));
    }

    #[test]
    fn test_equals() {
        let r = RectangleI::new(1, 2, 3, 4);
        assert!(equals(Some(&r), 1, 2, 3, 4));
        assert!(!equals(Some(&r), 1, 2, 3, 5));
        assert!(!equals(None, 1, 2, 3, 4));

        let empty = RectangleI::new(1, 2, 0, 4);
        assert!(!equals(Some(&empty), 1, 2, 0, 4));
        assert!(!equals_bounds(Some(&empty), Some(&empty)));
        assert!(equals_bounds::<i32>(None, None));
        assert!(!equals_bounds(Some(&r), None));
        assert!(equals_bounds(Some(&r), Some(&RectangleI::new(1, 2, 3, 4))));
    }

    #[test]
    fn test_scale_rect_about_own_center() {
        let r = RectangleD::new(0.0, 0.0, 10.0, 20.0);
        let s = scale_rect(&r, None, 2.0, 0.5, None);
        assert!(near(&s, &RectangleD::new(-5.0, 5.0, 20.0, 10.0)));
    }

    #[test]
    fn test_scale_rect_about_explicit_center() {
        let r = RectangleD::new(10.0, 10.0, 10.0, 10.0);
        let s = scale_rect(&r, None, 2.0, 2.0, Some(PointD::new(0.0, 0.0)));
        assert!(near(&s, &RectangleD::new(20.0, 20.0, 20.0, 20.0)));
    }

    #[test]
    fn test_scale_rect_with_skew() {
        let r = RectangleD::new(0.0, 0.0, 10.0, 10.0);
        let rot = Rotation::new(0.0).with_skew(
            Skew::new(SkewKind::Horizontal, 0.5, 0.0).with_center(PointD::new(0.0, 0.0)),
        );
        let s = scale_rect(&r, Some(&rot), 1.0, 1.0, None);
        // bottom-right (10,10) shifts by 0.5*10 in x; top-left stays
        assert!(near(&s, &RectangleD::new(0.0, 0.0, 15.0, 10.0)));
    }

    #[test]
    fn test_rotate_rect_zero_is_identity() {
        let r = RectangleD::new(3.0, 4.0, 10.0, 6.0);
        assert!(near(&rotate_rect(&r, &Rotation::new(0.0)), &r));

        let ri = RectangleI::new(3, 4, 10, 6);
        assert_eq!(rotate_rect_i(&ri, &Rotation::new(0.0)), ri);
    }

    #[test]
    fn test_rotate_rect_90_swaps_extent() {
        let r = RectangleD::new(0.0, 0.0, 10.0, 4.0);
        let b = rotate_rect(&r, &Rotation::new(90.0));
        assert!(near(&b, &RectangleD::new(3.0, -3.0, 4.0, 10.0)));
    }

    #[test]
    fn test_rotate_rect_45_bounding_box() {
        let r = RectangleD::new(-1.0, -1.0, 2.0, 2.0);
        let b = rotate_rect(&r, &Rotation::new(45.0));
        let h = 2.0_f64.sqrt();
        assert!(near(&b, &RectangleD::new(-h, -h, 2.0 * h, 2.0 * h)));
        let corners = rotated_corners(&r, &Rotation::new(45.0));
        assert!(corners.iter().all(|p| (p.x.hypot(p.y) - h).abs() < EPS));
    }

    #[test]
    fn test_to_int_bounds() {
        let r = RectangleD::new(0.5, 1.2, 3.0, 2.0);
        assert_eq!(r.to_int_bounds(), RectangleI::new(0, 1, 4, 3));
        assert_eq!(RectangleD::new(0.0, 0.0, -1.0, 2.0).to_int_bounds(), RectangleI::empty());
    }

    #[test]
    fn test_to_int_bounds_saturates() {
        let r = RectangleD::new(-3.0e9, 0.5, 6.0e9, 2.0);
        let ri = r.to_int_bounds();
        assert_eq!(ri.x, i32::MIN);
        assert_eq!(ri.width, i32::MAX);
        assert_eq!((ri.y, ri.height), (0, 3));
        assert_eq!(r.round().width, i32::MAX);
    }

    #[test]
    fn test_compatible_rect_extreme_origin() {
        assert_eq!(compatible_rect(100, 80, RectangleI::new(i32::MIN, 0, 10, 10)), RectangleI::empty());
        assert_eq!(compatible_rect(100, 80, RectangleI::new(0, i32::MIN, 10, i32::MAX)), RectangleI::empty());
        assert_eq!(
            compatible_rect(100, 80, RectangleI::new(-5, -5, i32::MAX, i32::MAX)),
            RectangleI::new(0, 0, 100, 80)
        );
        assert_eq!(compatible_rect(i32::MIN, 80, RectangleI::new(10, 0, 10, 10)), RectangleI::empty());
    }

    #[test]
    fn test_bounding() {
        let b = RectangleD::bounding(&[
            PointD::new(3.0, -1.0),
            PointD::new(-2.0, 4.0),
            PointD::new(1.0, 1.0),
        ]);
        assert!(near(&b, &RectangleD::new(-2.0, -1.0, 5.0, 5.0)));
        assert_eq!(RectangleD::bounding(&[]), RectangleD::empty());
    }
}
