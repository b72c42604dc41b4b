//! Shapes and their optional capabilities.
//!
//! Every shape has bounds. Some shapes also know how to hit-test a point
//! precisely ([`HitTest`]) or can hand out their outline as a closed point
//! sequence ([`Polygonal`]). The capability is resolved once per shape by
//! matching on [`Shape`]; callers that get `None` fall back to the bounds.

use std::borrow::Cow;

use crate::basics::PointD;
use crate::error::{GeometryError, Result};
use crate::math::point_in_polygon;
use crate::rectangle::{rotate_rect, rotated_corners, RectangleD};
use crate::rotation::Rotation;
use crate::trans_affine::{AffineMatrix, AFFINE_EPSILON};

/// Precise point containment.
pub trait HitTest {
    fn hit_test(&self, x: f64, y: f64) -> bool;
}

/// Closed outline. The last point connects back to the first.
pub trait Polygonal {
    fn points(&self) -> Cow<'_, [PointD]>;
}

// ============================================================================
// Polygon
// ============================================================================

/// Closed polygon of at least three finite points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<PointD>,
}

impl Polygon {
    pub fn new(points: Vec<PointD>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::DegeneratePolygon {
                points: points.len(),
            });
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self { points })
    }

    pub fn as_slice(&self) -> &[PointD] {
        &self.points
    }

    pub fn bounds(&self) -> RectangleD {
        RectangleD::bounding(&self.points)
    }
}

impl HitTest for Polygon {
    fn hit_test(&self, x: f64, y: f64) -> bool {
        point_in_polygon(&self.points, x, y)
    }
}

impl Polygonal for Polygon {
    fn points(&self) -> Cow<'_, [PointD]> {
        Cow::Borrowed(&self.points)
    }
}

// ============================================================================
// RotatedRect
// ============================================================================

/// Rectangle under a rotation (and optional skew).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    pub rect: RectangleD,
    pub rotation: Rotation,
}

impl RotatedRect {
    pub fn new(rect: RectangleD, rotation: Rotation) -> Self {
        Self { rect, rotation }
    }

    pub fn corners(&self) -> [PointD; 4] {
        rotated_corners(&self.rect, &self.rotation)
    }

    /// Empty when the underlying rectangle is empty.
    pub fn bounds(&self) -> RectangleD {
        if self.rect.is_empty() {
            return RectangleD::empty();
        }
        rotate_rect(&self.rect, &self.rotation)
    }
}

impl HitTest for RotatedRect {
    fn hit_test(&self, x: f64, y: f64) -> bool {
        !self.rect.is_empty() && point_in_polygon(&self.corners(), x, y)
    }
}

impl Polygonal for RotatedRect {
    fn points(&self) -> Cow<'_, [PointD]> {
        if self.rect.is_empty() {
            return Cow::Borrowed(&[]);
        }
        Cow::Owned(self.corners().to_vec())
    }
}

// ============================================================================
// Shape
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectangleD),
    Polygon(Polygon),
    Rotated(RotatedRect),
}

impl Shape {
    pub fn bounds(&self) -> RectangleD {
        match self {
            Shape::Rect(r) => *r,
            Shape::Polygon(p) => p.bounds(),
            Shape::Rotated(r) => r.bounds(),
        }
    }

    /// Precise hit tester, when the shape has one.
    pub fn hit_tester(&self) -> Option<&dyn HitTest> {
        match self {
            Shape::Rect(_) => None,
            Shape::Polygon(p) => Some(p),
            Shape::Rotated(r) => Some(r),
        }
    }

    /// Outline provider, when the shape has one.
    pub fn outline(&self) -> Option<&dyn Polygonal> {
        match self {
            Shape::Rect(_) => None,
            Shape::Polygon(p) => Some(p),
            Shape::Rotated(r) => Some(r),
        }
    }

    /// The shape mapped through `m`.
    ///
    /// Rectangles only stay rectangles under the identity, so every other
    /// result is a polygon of the mapped outline. An empty rectangle, plain
    /// or rotated, maps to the empty rectangle.
    pub fn transformed(&self, m: &AffineMatrix) -> Shape {
        match self {
            Shape::Rect(r) | Shape::Rotated(RotatedRect { rect: r, .. }) if r.is_empty() => {
                return Shape::Rect(RectangleD::empty());
            }
            _ => {}
        }
        if m.is_identity(AFFINE_EPSILON) {
            return self.clone();
        }
        let source: Cow<'_, [PointD]> = match self {
            Shape::Rect(r) => Cow::Owned(r.corners().to_vec()),
            Shape::Polygon(p) => p.points(),
            Shape::Rotated(r) => r.points(),
        };
        let points = source.iter().map(|&p| m.transform_point(p)).collect();
        Shape::Polygon(Polygon { points })
    }
}

impl From<RectangleD> for Shape {
    fn from(r: RectangleD) -> Self {
        Shape::Rect(r)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<RotatedRect> for Shape {
    fn from(r: RotatedRect) -> Self {
        Shape::Rotated(r)
    }
}

/// Point containment: the shape's own hit test when it has one, otherwise
/// the bounds with inclusive edges. Empty bounds contain nothing.
pub fn contains(shape: &Shape, x: f64, y: f64) -> bool {
    match shape.hit_tester() {
        Some(tester) => tester.hit_test(x, y),
        None => shape.bounds().contains_point(x, y),
    }
}
