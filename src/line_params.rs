//! Device clipping and incremental line parameters.
//!
//! [`draw_params`] turns two endpoints into everything a rasterizer needs
//! to walk a line one row (or column) at a time: the integer index range,
//! the step direction, and the per-step change of the other coordinate.
//!
//! Two modes share the computation:
//!
//! - [`ScanMode::Scanning`] feeds polygon fill. It must never miss a row
//!   the edge touches, so any fractional overhang widens the index range.
//! - [`ScanMode::Draw`] strokes a visible line. Overhangs up to
//!   [`START_EPSILON`] / [`END_EPSILON`] are ignored so a line ending a hair
//!   past a row does not light a stray pixel there.

use crate::basics::{ClipBox, PointD, PointI};
use crate::log::trace;

/// Overhang tolerated at the low end of the index range in draw mode.
pub const START_EPSILON: f64 = 0.05;

/// Overhang tolerated at the high end of the index range in draw mode.
pub const END_EPSILON: f64 = 0.05;

/// Device extent used when no clip box is supplied: twice the 8K UHD width.
pub const MAX_DEVICE_EXTENT: f64 = 15360.0;

/// Fill scanning versus line stroking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Draw,
    Scanning,
}

/// Tolerances and extents for [`draw_params_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSettings {
    pub start_epsilon: f64,
    pub end_epsilon: f64,
    pub max_extent: f64,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            start_epsilon: START_EPSILON,
            end_epsilon: END_EPSILON,
            max_extent: MAX_DEVICE_EXTENT,
        }
    }
}

impl DrawSettings {
    /// Clip box used when the caller gives none.
    ///
    /// Draw mode clips to the canvas `[0, max]²`; scanning is unbounded in
    /// practice and clips to `[-max, max]²`.
    pub fn default_clip(&self, mode: ScanMode) -> ClipBox {
        let m = self.max_extent;
        match mode {
            ScanMode::Draw => ClipBox::new(0.0, 0.0, m, m),
            ScanMode::Scanning => ClipBox::new(-m, -m, m, m),
        }
    }

    fn epsilons(&self, mode: ScanMode) -> (f64, f64) {
        match mode {
            ScanMode::Draw => (self.start_epsilon, self.end_epsilon),
            ScanMode::Scanning => (0.0, 0.0),
        }
    }
}

// ============================================================================
// Clipping
// ============================================================================

/// Pull both endpoints of the line p1→p2 into `clip`.
///
/// An endpoint outside the box is moved along the line itself: the
/// out-of-range coordinate is set to the boundary and the other one is
/// solved from the line equation, so the direction survives. x is handled
/// before y; a horizontal or vertical line never divides by its zero delta.
///
/// An inverted clip box is used in its normalized form.
///
/// Returns `false` (and leaves the points alone) when any coordinate, of
/// the line or the box, is NaN. Applying it twice gives the same result as
/// once.
pub fn make_drawable(p1: &mut PointD, p2: &mut PointD, clip: &ClipBox) -> bool {
    if p1.is_nan() || p2.is_nan() {
        return false;
    }
    if clip.x1.is_nan() || clip.y1.is_nan() || clip.x2.is_nan() || clip.y2.is_nan() {
        return false;
    }
    let mut clip = *clip;
    clip.normalize();
    let o1 = *p1;
    let dx = p2.x - o1.x;
    let dy = p2.y - o1.y;
    clip_endpoint(p1, o1, dx, dy, &clip);
    clip_endpoint(p2, o1, dx, dy, &clip);
    true
}

fn clip_endpoint(p: &mut PointD, origin: PointD, dx: f64, dy: f64, clip: &ClipBox) {
    if p.x < clip.x1 || p.x > clip.x2 {
        p.x = if p.x < clip.x1 { clip.x1 } else { clip.x2 };
        if dx != 0.0 {
            p.y = origin.y + (p.x - origin.x) * dy / dx;
        }
    }
    if p.y < clip.y1 || p.y > clip.y2 {
        p.y = if p.y < clip.y1 { clip.y1 } else { clip.y2 };
        if dy != 0.0 {
            p.x = origin.x + (p.y - origin.y) * dx / dy;
        }
    }
    // Only reachable when the line misses the box entirely.
    p.x = p.x.max(clip.x1).min(clip.x2);
}

// ============================================================================
// Draw parameters
// ============================================================================

/// Incremental walk of one line along a scan axis.
///
/// With a horizontal scan the index is the row (y) and the value is x;
/// otherwise the index is the column (x) and the value is y. Iterate
/// `start → end` inclusive with `index += step`; each step adds `slope`
/// to the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Value change per step, already signed for `step`.
    pub slope: f64,
    /// `+1` or `-1`.
    pub step: i32,
    pub start: i32,
    pub end: i32,
    /// Value at `start`.
    pub initial: f64,
    /// Number of indices, `|end - start| + 1`.
    pub length: i32,
    /// Value where the line crosses index 0.
    pub intercept: f64,
    pub horizontal: bool,
}

impl DrawParams {
    /// Value on the line at `index`.
    #[inline]
    pub fn value_at(&self, index: i32) -> f64 {
        self.initial + self.slope * ((index - self.start) * self.step) as f64
    }

    /// Lazy `(index, value)` walk from `start` to `end`.
    pub fn iter(&self) -> DrawSteps {
        DrawSteps {
            index: self.start,
            value: self.initial,
            slope: self.slope,
            step: self.step,
            remaining: self.length,
        }
    }
}

/// Iterator over the indices of a [`DrawParams`].
#[derive(Debug, Clone)]
pub struct DrawSteps {
    index: i32,
    value: f64,
    slope: f64,
    step: i32,
    remaining: i32,
}

impl Iterator for DrawSteps {
    type Item = (i32, f64);

    fn next(&mut self) -> Option<(i32, f64)> {
        if self.remaining <= 0 {
            return None;
        }
        let item = (self.index, self.value);
        self.remaining -= 1;
        self.index += self.step;
        self.value += self.slope;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DrawSteps {}

/// True when a stroke of p1→p2 should step row by row (steep line).
pub fn prefers_horizontal_scan(p1: PointD, p2: PointD) -> bool {
    (p2.y - p1.y).abs() > (p2.x - p1.x).abs()
}

/// [`draw_params_with`] using [`DrawSettings::default`].
pub fn draw_params(
    p1: PointD,
    p2: PointD,
    horizontal: bool,
    mode: ScanMode,
    clip: Option<&ClipBox>,
) -> Option<DrawParams> {
    draw_params_with(p1, p2, horizontal, mode, clip, &DrawSettings::default())
}

/// Integer-coordinate variant of [`draw_params`].
pub fn draw_params_i(
    p1: PointI,
    p2: PointI,
    horizontal: bool,
    mode: ScanMode,
    clip: Option<&ClipBox>,
) -> Option<DrawParams> {
    draw_params(p1.into(), p2.into(), horizontal, mode, clip)
}

/// Compute the incremental parameters for the line p1→p2.
///
/// Returns `None` when any coordinate is NaN, or in draw mode when both
/// endpoints lie before the canvas on the scan axis.
pub fn draw_params_with(
    p1: PointD,
    p2: PointD,
    horizontal: bool,
    mode: ScanMode,
    clip: Option<&ClipBox>,
    settings: &DrawSettings,
) -> Option<DrawParams> {
    if p1.is_nan() || p2.is_nan() {
        trace!("draw params rejected: NaN coordinate");
        return None;
    }
    let axis = |p: PointD| if horizontal { (p.y, p.x) } else { (p.x, p.y) };

    let (raw1, _) = axis(p1);
    let (raw2, _) = axis(p2);
    if mode == ScanMode::Draw && raw1 < 0.0 && raw2 < 0.0 {
        trace!(raw1, raw2, "draw params rejected: off canvas");
        return None;
    }

    let clip = clip.copied().unwrap_or_else(|| settings.default_clip(mode));
    let (mut q1, mut q2) = (p1, p2);
    if !make_drawable(&mut q1, &mut q2, &clip) {
        trace!("draw params rejected: NaN clip box");
        return None;
    }

    let (s1, v1) = axis(q1);
    let (s2, v2) = axis(q2);
    let ds = s2 - s1;
    let natural_slope = if ds == 0.0 { 0.0 } else { (v2 - v1) / ds };

    let (start_eps, end_eps) = settings.epsilons(mode);
    let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
    let low = outward_low(lo, start_eps);
    let high = outward_high(hi, end_eps);

    let descending = s2 < s1;
    let (start, end, step) = if descending {
        (high, low, -1)
    } else {
        (low, high, 1)
    };

    Some(DrawParams {
        slope: natural_slope * step as f64,
        step,
        start,
        end,
        initial: v1 + (start as f64 - s1) * natural_slope,
        length: (end - start).abs() + 1,
        intercept: v1 - natural_slope * s1,
        horizontal,
    })
}

/// Truncate, then move down one unit when `v` lies below the truncation by
/// more than `eps`.
fn outward_low(v: f64, eps: f64) -> i32 {
    let t = v.trunc();
    let i = t as i32;
    if v - t < -eps {
        i - 1
    } else {
        i
    }
}

/// Truncate, then move up one unit when `v` lies above the truncation by
/// more than `eps`.
fn outward_high(v: f64, eps: f64) -> i32 {
    let t = v.trunc();
    let i = t as i32;
    if v - t > eps {
        i + 1
    } else {
        i
    }
}

// ============================================================================
// Tests
// ============================================================================
