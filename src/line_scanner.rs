//! Polygon fill as axis-aligned spans.
//!
//! Collect edges into a [`LineScanner`], then call [`LineScanner::scan`]
//! for a lazy iterator of [`AxisLine`]s. The classic edge table / active
//! edge list approach:
//!
//! - every non-horizontal edge is entered once, keyed by the first row it
//!   can touch (from [`draw_params`] in scanning mode);
//! - rows are sampled at their centers (`row + 0.5`) with half-open
//!   membership, so shared vertices are counted once;
//! - crossings are sorted by x and paired according to the [`FillingRule`];
//! - each pair covers `floor(xa) .. ceil(xb)`; overlapping or touching spans
//!   on one row are merged.
//!
//! Vertical orientation scans columns instead of rows by swapping the axes
//! on the way in; the spans then carry x as their index and y as offset.

use std::collections::VecDeque;

use crate::basics::{iceil, ifloor, ordered, ClipBox, FillingRule, PointD};
use crate::line_params::{draw_params, ScanMode, MAX_DEVICE_EXTENT};
use crate::log::trace;

/// Axis a span runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Rows: index is y, offset is x.
    #[default]
    Horizontal,
    /// Columns: index is x, offset is y.
    Vertical,
}

/// One run of covered cells on a row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLine {
    /// Row (horizontal) or column (vertical).
    pub index: i32,
    pub orientation: Orientation,
    pub length: i32,
    /// First covered cell along the span.
    pub offset: i32,
}

impl AxisLine {
    pub fn new(index: i32, orientation: Orientation, offset: i32, length: i32) -> Self {
        Self {
            index,
            orientation,
            length,
            offset,
        }
    }

    /// One past the last covered cell.
    #[inline]
    pub fn end(&self) -> i32 {
        self.offset.saturating_add(self.length)
    }

    /// Cell coordinates `(x, y)` of the first covered cell.
    pub fn origin(&self) -> (i32, i32) {
        match self.orientation {
            Orientation::Horizontal => (self.offset, self.index),
            Orientation::Vertical => (self.index, self.offset),
        }
    }
}

// In scan space: y is always the stepping axis.
#[derive(Debug, Clone, Copy)]
struct Edge {
    first_row: i32,
    last_row: i32,
    lo: PointD,
    hi: PointD,
    // x change per row
    slope: f64,
    winding: i32,
}

impl Edge {
    // Clamped to the edge's own x extent so near-horizontal edges stay finite.
    #[inline]
    fn x_at(&self, yc: f64) -> f64 {
        let (x1, x2) = ordered(self.lo.x, self.hi.x);
        (self.lo.x + self.slope * (yc - self.lo.y)).clamp(x1, x2)
    }
}

// ============================================================================
// LineScanner
// ============================================================================

/// Edge accumulator for one polygon fill.
#[derive(Debug, Clone, Default)]
pub struct LineScanner {
    orientation: Orientation,
    rule: FillingRule,
    edges: Vec<Edge>,
}

impl LineScanner {
    pub fn new(orientation: Orientation) -> Self {
        trace!(?orientation, "line scanner created");
        Self {
            orientation,
            rule: FillingRule::default(),
            edges: Vec::new(),
        }
    }

    pub fn filling_rule(&mut self, rule: FillingRule) {
        self.rule = rule;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of edges that will take part in the scan.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Add one directed edge. Edges parallel to the scan direction and
    /// edges with non-finite coordinates are ignored.
    pub fn add_line(&mut self, p1: PointD, p2: PointD) {
        let (a, b) = match self.orientation {
            Orientation::Horizontal => (p1, p2),
            Orientation::Vertical => (PointD::new(p1.y, p1.x), PointD::new(p2.y, p2.x)),
        };
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }
        if a.y == b.y {
            return;
        }
        let (lo, hi, winding) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
        // Rows are limited by the device extent; x is not, so an edge running
        // far off to the side keeps its full row range.
        let rows = ClipBox::new(f64::NEG_INFINITY, -MAX_DEVICE_EXTENT, f64::INFINITY, MAX_DEVICE_EXTENT);
        let Some(params) = draw_params(lo, hi, true, ScanMode::Scanning, Some(&rows)) else {
            return;
        };
        self.edges.push(Edge {
            first_row: params.start,
            last_row: params.end,
            lo,
            hi,
            slope: params.slope,
            winding,
        });
    }

    /// Add every segment of a line list.
    pub fn add_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = (PointD, PointD)>,
    {
        for (p1, p2) in lines {
            self.add_line(p1, p2);
        }
    }

    /// Add a closed outline; the last point connects back to the first.
    pub fn add_polygon(&mut self, points: &[PointD]) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.add_line(pair[0], pair[1]);
        }
        self.add_line(points[points.len() - 1], points[0]);
    }

    /// Hand the accumulated edges to a lazy span iterator.
    pub fn scan(mut self) -> Spans {
        let edges = std::mem::take(&mut self.edges);
        Spans::new(self.orientation, self.rule, edges)
    }
}

// ============================================================================
// Spans
// ============================================================================

/// Lazy span iterator; owns the edge table and releases it on drop,
/// whether or not iteration ran to completion.
#[derive(Debug)]
pub struct Spans {
    orientation: Orientation,
    rule: FillingRule,
    edges: Vec<Edge>,
    next_edge: usize,
    active: Vec<usize>,
    row: i32,
    last_row: i32,
    crossings: Vec<(f64, i32)>,
    pending: VecDeque<AxisLine>,
}

impl Spans {
    fn new(orientation: Orientation, rule: FillingRule, mut edges: Vec<Edge>) -> Self {
        edges.sort_by_key(|e| e.first_row);
        let row = edges.first().map_or(0, |e| e.first_row);
        let last_row = edges.iter().map(|e| e.last_row).max().unwrap_or(-1);
        trace!(edges = edges.len(), row, last_row, "scan started");
        Self {
            orientation,
            rule,
            edges,
            next_edge: 0,
            active: Vec::new(),
            row,
            last_row: if row > last_row { row - 1 } else { last_row },
            crossings: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    fn fill_row(&mut self, row: i32) {
        while self.next_edge < self.edges.len() && self.edges[self.next_edge].first_row <= row {
            self.active.push(self.next_edge);
            self.next_edge += 1;
        }
        let edges = &self.edges;
        self.active.retain(|&i| edges[i].last_row >= row);

        let yc = row as f64 + 0.5;
        self.crossings.clear();
        for &i in &self.active {
            let e = &edges[i];
            if e.lo.y <= yc && yc < e.hi.y {
                self.crossings.push((e.x_at(yc), e.winding));
            }
        }
        self.crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut last: Option<AxisLine> = None;
        let mut winding = 0;
        let mut open = 0.0;
        for (k, &(x, w)) in self.crossings.iter().enumerate() {
            let closed = match self.rule {
                FillingRule::EvenOdd => {
                    if k % 2 == 0 {
                        open = x;
                        None
                    } else {
                        Some((open, x))
                    }
                }
                FillingRule::NonZero => {
                    let before = winding;
                    winding += w;
                    if before == 0 && winding != 0 {
                        open = x;
                        None
                    } else if before != 0 && winding == 0 {
                        Some((open, x))
                    } else {
                        None
                    }
                }
            };
            let Some((xa, xb)) = closed else { continue };
            let from = ifloor(xa);
            let to = iceil(xb);
            if to <= from {
                continue;
            }
            last = match last {
                Some(mut span) if from <= span.end() => {
                    span.length = span.length.max(to.saturating_sub(span.offset));
                    Some(span)
                }
                Some(span) => {
                    self.pending.push_back(span);
                    Some(AxisLine::new(row, self.orientation, from, to.saturating_sub(from)))
                }
                None => Some(AxisLine::new(row, self.orientation, from, to.saturating_sub(from))),
            };
        }
        if let Some(span) = last {
            self.pending.push_back(span);
        }
    }
}

impl Iterator for Spans {
    type Item = AxisLine;

    fn next(&mut self) -> Option<AxisLine> {
        loop {
            if let Some(span) = self.pending.pop_front() {
                return Some(span);
            }
            if self.row > self.last_row {
                return None;
            }
            if self.active.is_empty() {
                // jump the gap to the next edge's first row
                match self.edges.get(self.next_edge) {
                    Some(e) if e.first_row > self.row => self.row = e.first_row,
                    Some(_) => {}
                    None => {
                        self.row = self.last_row + 1;
                        return None;
                    }
                }
            }
            let row = self.row;
            self.fill_row(row);
            self.row += 1;
        }
    }
}

impl Drop for Spans {
    fn drop(&mut self) {
        trace!(
            edges = self.edges.len(),
            finished = self.row > self.last_row,
            "scan released"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, w: f64, h: f64) -> Vec<PointD> {
        vec![
            PointD::new(x, y),
            PointD::new(x + w, y),
            PointD::new(x + w, y + h),
            PointD::new(x, y + h),
        ]
    }

    fn spans(points: &[PointD], orientation: Orientation, rule: FillingRule) -> Vec<AxisLine> {
        let mut s = LineScanner::new(orientation);
        s.filling_rule(rule);
        s.add_polygon(points);
        s.scan().collect()
    }

    #[test]
    fn test_square_rows() {
        let out = spans(&square(0.0, 0.0, 10.0, 3.0), Orientation::Horizontal, FillingRule::NonZero);
        assert_eq!(
            out,
            vec![
                AxisLine::new(0, Orientation::Horizontal, 0, 10),
                AxisLine::new(1, Orientation::Horizontal, 0, 10),
                AxisLine::new(2, Orientation::Horizontal, 0, 10),
            ]
        );
    }

    #[test]
    fn test_square_columns() {
        let out = spans(&square(2.0, 1.0, 3.0, 4.0), Orientation::Vertical, FillingRule::NonZero);
        assert_eq!(out.len(), 3);
        for (i, span) in out.iter().enumerate() {
            assert_eq!(span.index, 2 + i as i32);
            assert_eq!(span.orientation, Orientation::Vertical);
            assert_eq!((span.offset, span.length), (1, 4));
        }
        assert_eq!(out[0].origin(), (2, 1));
    }

    #[test]
    fn test_triangle_spans_narrow() {
        // apex at the top, base on row 10
        let tri = [PointD::new(10.0, 0.0), PointD::new(20.0, 10.0), PointD::new(0.0, 10.0)];
        let out = spans(&tri, Orientation::Horizontal, FillingRule::NonZero);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0].index, 0);
        // row 0 samples y = 0.5 → x in [9.5, 10.5]
        assert_eq!((out[0].offset, out[0].length), (9, 2));
        // row 9 samples y = 9.5 → x in [0.5, 19.5]
        assert_eq!((out[9].offset, out[9].length), (0, 20));
        for w in out.windows(2) {
            assert!(w[1].length >= w[0].length);
        }
    }

    #[test]
    fn test_fill_rules_on_overlapping_squares() {
        // two overlapping squares, same winding
        let mut s = LineScanner::new(Orientation::Horizontal);
        s.add_polygon(&square(0.0, 0.0, 6.0, 1.0));
        s.add_polygon(&square(3.0, 0.0, 6.0, 1.0));
        let nonzero: Vec<_> = s.clone().scan().collect();
        assert_eq!(nonzero, vec![AxisLine::new(0, Orientation::Horizontal, 0, 9)]);

        s.filling_rule(FillingRule::EvenOdd);
        let evenodd: Vec<_> = s.scan().collect();
        // [0,3) and [6,9) stay apart; the overlap is a hole
        assert_eq!(
            evenodd,
            vec![
                AxisLine::new(0, Orientation::Horizontal, 0, 3),
                AxisLine::new(0, Orientation::Horizontal, 6, 3),
            ]
        );
    }

    #[test]
    fn test_touching_spans_merge() {
        let mut s = LineScanner::new(Orientation::Horizontal);
        s.add_polygon(&square(0.0, 0.0, 2.0, 1.0));
        s.add_polygon(&square(2.0, 0.0, 2.0, 1.0));
        s.filling_rule(FillingRule::EvenOdd);
        let out: Vec<_> = s.scan().collect();
        assert_eq!(out, vec![AxisLine::new(0, Orientation::Horizontal, 0, 4)]);
    }

    #[test]
    fn test_gap_rows_are_skipped() {
        let mut s = LineScanner::new(Orientation::Horizontal);
        s.add_polygon(&square(0.0, 0.0, 1.0, 1.0));
        s.add_polygon(&square(0.0, 100.0, 1.0, 1.0));
        let rows: Vec<i32> = s.scan().map(|l| l.index).collect();
        assert_eq!(rows, vec![0, 100]);
    }

    #[test]
    fn test_horizontal_and_degenerate_edges_ignored() {
        let mut s = LineScanner::new(Orientation::Horizontal);
        s.add_line(PointD::new(0.0, 5.0), PointD::new(10.0, 5.0));
        s.add_line(PointD::new(f64::NAN, 0.0), PointD::new(1.0, 5.0));
        assert!(s.is_empty());
        assert_eq!(s.scan().count(), 0);
    }

    #[test]
    fn test_early_drop_is_fine() {
        let mut s = LineScanner::new(Orientation::Horizontal);
        s.add_polygon(&square(0.0, 0.0, 4.0, 50.0));
        let mut it = s.scan();
        assert!(it.next().is_some());
        drop(it);
    }

    #[test]
    fn test_add_lines() {
        let pts = square(1.0, 1.0, 2.0, 2.0);
        let mut s = LineScanner::new(Orientation::Horizontal);
        s.add_lines((0..4).map(|i| (pts[i], pts[(i + 1) % 4])));
        assert_eq!(s.len(), 2);
        let out: Vec<_> = s.scan().collect();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.offset == 1 && l.length == 2));
    }

    #[test]
    fn test_vertex_past_device_extent_keeps_rows() {
        let tri = [PointD::new(0.0, 0.0), PointD::new(20000.0, 100.0), PointD::new(0.0, 100.0)];
        let out = spans(&tri, Orientation::Horizontal, FillingRule::NonZero);
        assert_eq!(out.len(), 100);
        for (row, span) in out.iter().enumerate() {
            assert_eq!(span.index, row as i32);
            assert_eq!(span.offset, 0);
            // right edge at x = 200 * (row + 0.5)
            let x = 200.0 * (row as f64 + 0.5);
            assert!((span.end() as f64 - x).abs() < 1.0 + 1e-9, "row {row}: {span:?}");
        }
    }

    #[test]
    fn test_rows_clip_to_device_extent() {
        let tall = square(0.0, -20000.0, 2.0, 40000.0);
        let mut s = LineScanner::new(Orientation::Horizontal);
        s.add_polygon(&tall);
        let mut it = s.scan();
        let first = it.next().unwrap();
        assert_eq!(first.index, -15360);
        assert_eq!((first.offset, first.length), (0, 2));
        assert_eq!(it.last().map(|l| l.index), Some(15360));
    }

    #[test]
    fn test_axis_line_end_saturates() {
        let l = AxisLine::new(0, Orientation::Horizontal, i32::MAX - 1, 10);
        assert_eq!(l.end(), i32::MAX);
    }
}
