// Overlap detection between placed hexagons.
//
// Each hexagon is treated as its circumscribed circle. This rejects a few
// positions a true hexagon test would accept, in exchange for a check that is
// a single distance comparison. Category counts are small, so the placed list
// is scanned linearly.

use super::Placement;

/// Distances this close to the limit count as touching, not overlapping.
/// Candidates are generated at exactly the limit distance and the recomputed
/// distance can land an ulp either side of it.
const TOUCH_TOLERANCE: f64 = 1e-9;

/// True if two circles, kept `gap` apart, would overlap.
#[allow(clippy::too_many_arguments)]
pub fn overlaps(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64, gap: f64) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let distance = (dx * dx + dy * dy).sqrt();
    let min_distance = r1 + r2 + gap;
    distance + TOUCH_TOLERANCE < min_distance
}

/// True if a circle at (x, y) with radius `r` overlaps any placed hexagon.
pub fn has_collision(x: f64, y: f64, r: f64, placed: &[Placement], gap: f64) -> bool {
    placed
        .iter()
        .any(|p| overlaps(x, y, r, p.x, p.y, p.radius, gap))
}
