//! Rotation and skew descriptors.
//!
//! A [`Rotation`] carries an angle in degrees, an optional explicit center,
//! and an optional [`Skew`]. Without an explicit center the geometric
//! center of whatever is being rotated is used.
//!
//! Coordinates follow the screen convention (y grows downward), so a
//! positive angle turns clockwise on screen; `anti_clock` flips it.

use crate::basics::{deg2rad, PointD};
use crate::trans_affine::AffineMatrix;

/// Which shear components of a [`Skew`] apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkewKind {
    /// Shift x in proportion to y.
    #[default]
    Horizontal,
    /// Shift y in proportion to x.
    Vertical,
    /// Both shifts.
    Diagonal,
}

/// Shear factors with their own type tag and optional center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Skew {
    pub kind: SkewKind,
    pub x: f64,
    pub y: f64,
    pub center: Option<PointD>,
}

impl Skew {
    pub fn new(kind: SkewKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            center: None,
        }
    }

    pub fn with_center(mut self, center: PointD) -> Self {
        self.center = Some(center);
        self
    }

    /// Effective (x, y) shear factors after applying the kind.
    pub fn factors(&self) -> (f64, f64) {
        match self.kind {
            SkewKind::Horizontal => (self.x, 0.0),
            SkewKind::Vertical => (0.0, self.y),
            SkewKind::Diagonal => (self.x, self.y),
        }
    }

    /// True when the skew would leave every point in place.
    pub fn is_identity(&self) -> bool {
        let (fx, fy) = self.factors();
        fx == 0.0 && fy == 0.0
    }

    /// Shear matrix about `center`.
    pub fn matrix(&self, center: PointD) -> AffineMatrix {
        let (fx, fy) = self.factors();
        AffineMatrix::new_custom(1.0, fy, fx, 1.0, -center.y * fx, -center.x * fy)
    }
}

/// Rotation descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Angle in degrees.
    pub angle: f64,
    pub center: Option<PointD>,
    pub skew: Option<Skew>,
    pub anti_clock: bool,
}

impl Rotation {
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            ..Default::default()
        }
    }

    pub fn with_center(mut self, center: PointD) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_skew(mut self, skew: Skew) -> Self {
        self.skew = Some(skew);
        self
    }

    pub fn anti_clockwise(mut self) -> Self {
        self.anti_clock = true;
        self
    }

    /// A rotation is usable when its angle and any center are finite.
    pub fn is_valid(&self) -> bool {
        let finite = |p: &PointD| p.x.is_finite() && p.y.is_finite();
        self.angle.is_finite()
            && self.center.as_ref().map_or(true, finite)
            && self
                .skew
                .as_ref()
                .map_or(true, |s| s.x.is_finite() && s.y.is_finite())
    }

    /// True when the descriptor carries non-trivial skew data.
    pub fn has_skew(&self) -> bool {
        self.skew.is_some_and(|s| !s.is_identity())
    }

    /// Rotation center: the explicit one, or `shape_center`.
    pub fn center_or(&self, shape_center: PointD) -> PointD {
        self.center.unwrap_or(shape_center)
    }

    /// Skew center: the skew's own, then the rotation's, then `shape_center`.
    pub fn skew_center_or(&self, shape_center: PointD) -> PointD {
        self.skew
            .and_then(|s| s.center)
            .or(self.center)
            .unwrap_or(shape_center)
    }

    /// Signed angle in radians, with `anti_clock` applied.
    pub fn radians(&self) -> f64 {
        let rad = deg2rad(self.angle);
        if self.anti_clock {
            -rad
        } else {
            rad
        }
    }

    /// Full matrix: rotate about the effective center, then skew unless
    /// `no_skew` is set.
    pub fn matrix(&self, shape_center: PointD, no_skew: bool) -> AffineMatrix {
        let mut m = AffineMatrix::new_rotation_at(self.radians(), self.center_or(shape_center));
        if !no_skew {
            if let Some(skew) = self.skew.filter(|s| !s.is_identity()) {
                m.multiply(&skew.matrix(self.skew_center_or(shape_center)));
            }
        }
        m
    }
}

/// Rotate `p` by `degrees` about `center`.
pub fn rotate_point(p: PointD, center: PointD, degrees: f64, anti_clock: bool) -> PointD {
    Rotation {
        angle: degrees,
        anti_clock,
        ..Default::default()
    }
    .matrix(center, true)
    .transform_point(p)
}
