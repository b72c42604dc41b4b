//! Error types for the fallible geometry constructors.
//!
//! Most of the crate signals degenerate input through a `bool`, an `Option`,
//! or a sentinel value. These errors back the few entry points that have no
//! natural sentinel.

use thiserror::Error;

/// Result type alias using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised by fallible geometry constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The matrix determinant is too small to invert.
    #[error("singular matrix: determinant {determinant:e}")]
    SingularMatrix {
        /// The offending determinant.
        determinant: f64,
    },

    /// A polygon needs at least three boundary points.
    #[error("degenerate polygon: {points} point(s), at least 3 required")]
    DegeneratePolygon {
        /// Number of points supplied.
        points: usize,
    },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate")]
    NonFinite,
}
