//! # scangeom
//!
//! Planar geometry for raster-oriented graphics: affine matrices, line
//! math, rectangle clipping and rotation, and polygon scanline generation.
//!
//! Coordinates are screen coordinates: the origin is the top-left and y
//! grows downward. Angles are in degrees at the public surface and a
//! positive angle turns clockwise on screen.
//!
//! ## Layout
//!
//! 1. **Foundation**: rounding, ordering, points, clip boxes
//!    ([`basics`], [`math`]).
//! 2. **Transforms**: the 2×3 [`trans_affine::AffineMatrix`] and the
//!    [`rotation::Rotation`] descriptor that builds one.
//! 3. **Lines**: angles, parallels and perpendiculars ([`line`]), device
//!    clipping and incremental draw parameters ([`line_params`]).
//! 4. **Rectangles and shapes**: clipping against a source extent,
//!    scale/rotate/skew ([`rectangle`]); shapes with optional hit-test and
//!    outline capabilities ([`shape`]).
//! 5. **Scanning**: polygon fill into axis-aligned spans
//!    ([`line_scanner`]) and per-shape scanlines ([`scan_lines`]).
//!
//! Logging goes through `tracing` when the `tracing` feature is enabled and
//! compiles away otherwise.

pub mod log;

// Foundation
pub mod basics;
pub mod error;
pub mod math;

// Transforms
pub mod rotation;
pub mod trans_affine;

// Lines
pub mod line;
pub mod line_params;

// Rectangles and shapes
pub mod rectangle;
pub mod shape;

// Scanning
pub mod line_scanner;
pub mod scan_lines;

pub use basics::{FillingRule, PointD, PointI};
pub use error::{GeometryError, Result};
pub use line_scanner::{AxisLine, LineScanner, Orientation};
pub use rectangle::{RectangleD, RectangleI};
pub use rotation::{Rotation, Skew, SkewKind};
pub use scan_lines::{scan_lines, ScanLines};
pub use shape::{contains, HitTest, Polygon, Polygonal, RotatedRect, Shape};
pub use trans_affine::AffineMatrix;
