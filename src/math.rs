//! Vector helpers shared by the line and shape code.

/// Lengths below this are treated as degenerate.
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

/// Cross product of vectors (x2-x1, y2-y1) and (x-x2, y-y2).
/// The sign tells which side of the line (x1,y1)→(x2,y2) the point (x,y) is on.
#[inline]
pub fn cross_product(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> f64 {
    (x - x2) * (y2 - y1) - (y - y2) * (x2 - x1)
}

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Displacement of magnitude `thickness` perpendicular to (x1,y1)→(x2,y2),
/// given the segment length `d`.
#[inline]
pub fn calc_orthogonal(thickness: f64, dx: f64, dy: f64, d: f64) -> (f64, f64) {
    (thickness * dy / d, -thickness * dx / d)
}

/// Even-odd point-in-polygon test over a closed ring of vertices.
pub fn point_in_polygon(vertices: &[crate::basics::PointD], x: f64, y: f64) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (vertices[i], vertices[j]);
        if (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
