//! Line metrics and classification.
//!
//! Lines are never stored as objects: every function takes the two
//! endpoints directly. A line whose endpoints coincide is degenerate and
//! produces NaN wherever a length is divided by.

use crate::basics::{PointD, DEGREES_PER_RADIAN};
use crate::math::{calc_distance, calc_orthogonal, cross_product, VERTEX_DIST_EPSILON};
use crate::rotation::Rotation;

// ============================================================================
// Points along and around a line
// ============================================================================

/// Point reached by moving `distance` along a line of the given `slope`
/// (dy/dx) starting at (x1, y1).
///
/// For a `steep` line (|slope| > 1) the step is taken on y and x is solved
/// from the line equation, so near-vertical lines never divide by a tiny dx.
pub fn find_point(x1: f64, y1: f64, slope: f64, distance: f64, steep: bool) -> PointD {
    if steep {
        let y = y1 + distance;
        PointD::new(x1 + (y - y1) / slope, y)
    } else {
        PointD::new(x1 + distance, y1 + slope * distance)
    }
}

/// Two segments are parallel when the cross product of their direction
/// vectors is exactly zero. Inputs are expected pre-normalized; there is no
/// tolerance.
pub fn is_parallel(p1: PointD, p2: PointD, p3: PointD, p4: PointD) -> bool {
    let (dx1, dy1) = (p2.x - p1.x, p2.y - p1.y);
    let (dx2, dy2) = (p4.x - p3.x, p4.y - p3.y);
    dx1 * dy2 - dy1 * dx2 == 0.0
}

/// Offset the segment p1→p2 perpendicular to itself by `deviation`.
///
/// `length` may carry the already-known segment length to skip the sqrt.
/// Positive deviation moves to the right of the direction of travel in
/// y-up coordinates. A zero-length segment comes back unchanged.
pub fn parallel(p1: PointD, p2: PointD, deviation: f64, length: Option<f64>) -> (PointD, PointD) {
    let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
    let d = length.unwrap_or_else(|| calc_distance(p1.x, p1.y, p2.x, p2.y));
    if d < VERTEX_DIST_EPSILON {
        return (p1, p2);
    }
    let (ox, oy) = calc_orthogonal(deviation, dx, dy, d);
    (
        PointD::new(p1.x + ox, p1.y + oy),
        PointD::new(p2.x + ox, p2.y + oy),
    )
}

/// Foot of the perpendicular from `p` onto the infinite line through
/// p1 and p2. NaN when the line is degenerate.
pub fn perpendicular(p1: PointD, p2: PointD, p: PointD) -> PointD {
    let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
    let u = ((p.x - p1.x) * dx + (p.y - p1.y) * dy) / (dx * dx + dy * dy);
    PointD::new(p1.x + u * dx, p1.y + u * dy)
}

// ============================================================================
// Angles
// ============================================================================

/// Angle in degrees of the directed segment p1→p2, in `[0, 360)`.
///
/// Offset by 180°: a segment pointing along -x reads 0°, along +x reads 180°.
pub fn line_angle(p1: PointD, p2: PointD) -> f64 {
    let a = (p2.y - p1.y).atan2(p2.x - p1.x) * DEGREES_PER_RADIAN + 180.0;
    if a >= 360.0 {
        a - 360.0
    } else {
        a
    }
}

/// Angle in degrees from line a to line b, in `[0, 360)`.
pub fn angle_between(a1: PointD, a2: PointD, b1: PointD, b2: PointD) -> f64 {
    let a = (line_angle(b1, b2) - line_angle(a1, a2)).rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Acute angle in degrees between the line and the x-axis, in `[0, 90]`.
pub fn axis_angle(p1: PointD, p2: PointD) -> f64 {
    ((p2.y - p1.y).abs() / (p2.x - p1.x).abs()).atan() * DEGREES_PER_RADIAN
}

// ============================================================================
// Classification
// ============================================================================

/// Which way a line's influence runs toward `axis_value` on a scan axis.
///
/// With `horizontal` the scan runs along x and `axis_value` is a row (y);
/// otherwise the scan runs along y and `axis_value` is a column (x). The
/// endpoint nearer the axis value is compared with the far one along the
/// scan axis; agreement with the natural p1/p2 ordering gives `+1`,
/// disagreement `-1`. Any NaN gives `0`.
pub fn direction(p1: PointD, p2: PointD, axis_value: f64, horizontal: bool) -> i32 {
    if p1.is_nan() || p2.is_nan() || axis_value.is_nan() {
        return 0;
    }
    // (distance to axis, position along scan axis)
    let (d1, s1, d2, s2) = if horizontal {
        ((p1.y - axis_value).abs(), p1.x, (p2.y - axis_value).abs(), p2.x)
    } else {
        ((p1.x - axis_value).abs(), p1.y, (p2.x - axis_value).abs(), p2.y)
    };
    let (near, far) = if d1 <= d2 { (s1, s2) } else { (s2, s1) };
    let near_first = near <= far;
    let natural = s1 <= s2;
    if near_first == natural {
        1
    } else {
        -1
    }
}

/// Half-plane test for `p` against the directed line p1→p2.
///
/// `+1` for a counter-clockwise turn p1→p2→p in y-up coordinates, `-1`
/// for clockwise, `0` when collinear or any input is NaN.
pub fn orientation(p1: PointD, p2: PointD, p: PointD) -> i32 {
    let cp = cross_product(p1.x, p1.y, p2.x, p2.y, p.x, p.y);
    if cp < 0.0 {
        1
    } else if cp > 0.0 {
        -1
    } else {
        0
    }
}

// ============================================================================
// Rotation
// ============================================================================

/// Rotate both endpoints by `degree`.
///
/// The pivot is the line's own midpoint unless `descriptor` supplies an
/// explicit center. Skew from the descriptor is applied only when
/// `no_skew` is false.
pub fn rotate_line(
    degree: f64,
    p1: &mut PointD,
    p2: &mut PointD,
    anti_clock: bool,
    no_skew: bool,
    descriptor: Option<&Rotation>,
) {
    let rotation = Rotation {
        angle: degree,
        anti_clock,
        center: descriptor.and_then(|r| r.center),
        skew: descriptor.and_then(|r| r.skew),
    };
    let mid = PointD::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
    let m = rotation.matrix(mid, no_skew);
    *p1 = m.transform_point(*p1);
    *p2 = m.transform_point(*p2);
}

// ============================================================================
// Tests
// ============================================================================
