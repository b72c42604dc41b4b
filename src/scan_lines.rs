//! Scanlines for any [`Shape`].
//!
//! Shapes with an outline go through a [`LineScanner`]; everything else
//! is covered by one full-width span per row (or column) of its integer
//! bounds.

use crate::basics::FillingRule;
use crate::line_scanner::{AxisLine, LineScanner, Orientation, Spans};
use crate::log::debug;
use crate::rectangle::RectangleI;
use crate::shape::Shape;

/// Scan configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub orientation: Orientation,
    pub rule: FillingRule,
}

/// Lazy, single-pass scanline sequence for one shape.
#[derive(Debug)]
pub enum ScanLines {
    /// Fill of a polygonal outline.
    Outline(Spans),
    /// One span per index of a rectangular bounds.
    Bands {
        orientation: Orientation,
        next: i32,
        last: i32,
        offset: i32,
        length: i32,
    },
}

impl ScanLines {
    fn bands(bounds: RectangleI, orientation: Orientation) -> Self {
        let (first, count, offset, length) = match orientation {
            Orientation::Horizontal => (bounds.y, bounds.height, bounds.x, bounds.width),
            Orientation::Vertical => (bounds.x, bounds.width, bounds.y, bounds.height),
        };
        let (next, last) = if bounds.is_empty() {
            (1, 0)
        } else {
            (first, first.saturating_add(count - 1))
        };
        ScanLines::Bands {
            orientation,
            next,
            last,
            offset,
            length,
        }
    }
}

impl Iterator for ScanLines {
    type Item = AxisLine;

    fn next(&mut self) -> Option<AxisLine> {
        match self {
            ScanLines::Outline(spans) => spans.next(),
            ScanLines::Bands {
                orientation,
                next,
                last,
                offset,
                length,
            } => {
                if *next > *last {
                    return None;
                }
                let line = AxisLine::new(*next, *orientation, *offset, *length);
                match next.checked_add(1) {
                    Some(n) => *next = n,
                    None => *last = *next - 1,
                }
                Some(line)
            }
        }
    }
}

/// Row scanlines of `shape` with the non-zero rule.
pub fn scan_lines(shape: &Shape) -> ScanLines {
    scan_lines_with(shape, &ScanOptions::default())
}

pub fn scan_lines_with(shape: &Shape, options: &ScanOptions) -> ScanLines {
    match shape.outline() {
        Some(outline) => {
            let mut scanner = LineScanner::new(options.orientation);
            scanner.filling_rule(options.rule);
            scanner.add_polygon(&outline.points());
            debug!(edges = scanner.len(), "scanning outline");
            ScanLines::Outline(scanner.scan())
        }
        None => ScanLines::bands(shape.bounds().to_int_bounds(), options.orientation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PointD;
    use crate::rectangle::RectangleD;
    use crate::shape::Polygon;

    #[test]
    fn test_rect_rows() {
        let shape = Shape::from(RectangleD::new(0.0, 0.0, 10.0, 3.0));
        let lines: Vec<_> = scan_lines(&shape).collect();
        assert_eq!(lines.len(), 3);
        for (i, l) in lines.iter().enumerate() {
            assert_eq!(*l, AxisLine::new(i as i32, Orientation::Horizontal, 0, 10));
        }
    }

    #[test]
    fn test_rect_columns() {
        let shape = Shape::from(RectangleD::new(1.0, 2.0, 2.0, 5.0));
        let opts = ScanOptions {
            orientation: Orientation::Vertical,
            ..Default::default()
        };
        let lines: Vec<_> = scan_lines_with(&shape, &opts).collect();
        assert_eq!(
            lines,
            vec![
                AxisLine::new(1, Orientation::Vertical, 2, 5),
                AxisLine::new(2, Orientation::Vertical, 2, 5),
            ]
        );
    }

    #[test]
    fn test_empty_rect_has_no_lines() {
        let shape = Shape::from(RectangleD::new(4.0, 4.0, 0.0, 3.0));
        assert_eq!(scan_lines(&shape).count(), 0);
    }

    #[test]
    fn test_bands_at_integer_limits() {
        let top = ScanLines::bands(RectangleI::new(0, i32::MAX - 1, 4, 10), Orientation::Horizontal);
        let rows: Vec<_> = top.map(|l| l.index).collect();
        assert_eq!(rows, vec![i32::MAX - 1, i32::MAX]);

        let empty = ScanLines::bands(RectangleI::new(0, i32::MIN, 4, 0), Orientation::Horizontal);
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn test_polygon_goes_through_scanner() {
        let poly = Polygon::new(vec![
            PointD::new(0.0, 0.0),
            PointD::new(4.0, 0.0),
            PointD::new(4.0, 2.0),
            PointD::new(0.0, 2.0),
        ])
        .unwrap();
        let mut lines = scan_lines(&Shape::from(poly));
        assert!(matches!(lines, ScanLines::Outline(_)));
        assert_eq!(lines.next(), Some(AxisLine::new(0, Orientation::Horizontal, 0, 4)));
        assert_eq!(lines.next(), Some(AxisLine::new(1, Orientation::Horizontal, 0, 4)));
        assert_eq!(lines.next(), None);
        assert_eq!(lines.next(), None);
    }
}
