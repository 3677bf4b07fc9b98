// Hexagon geometry.
//
// A category's weight becomes a hexagon width (`size`), the width becomes a
// circumradius for collision checks, and the presentation layer gets the
// pointy-top shape it draws at each placement.

use std::fmt::Write;

use super::{LayoutConfig, PointF, RectF};

/// Height of a pointy-top hexagon relative to its width (2 / sqrt(3)).
const HEIGHT_RATIO: f64 = 1.154_700_538_379_251_5;

/// Hexagon width for a category weight.
/// Weights at or above `reference_weight` saturate at `max_scale`; zero or
/// negative weights still get `min_scale`.
pub fn size_of(weight: f64, cfg: &LayoutConfig) -> f64 {
    let normalized = if cfg.reference_weight > 0.0 {
        (weight.max(0.0) / cfg.reference_weight).min(1.0)
    } else {
        1.0
    };
    let scale = cfg.min_scale + normalized * (cfg.max_scale - cfg.min_scale);
    cfg.base_size * scale
}

/// Circumradius of a pointy-top hexagon of width `size`, plus the safety buffer.
pub fn radius_of(size: f64, cfg: &LayoutConfig) -> f64 {
    (size / 3f64.sqrt()) * cfg.radius_buffer
}

pub fn hex_height(size: f64) -> f64 {
    size * HEIGHT_RATIO
}

/// Bounding box of the hexagon drawn at `center`.
pub fn hex_bounds(center: PointF, size: f64) -> RectF {
    let h = hex_height(size);
    RectF { x: center.x - size / 2.0, y: center.y - h / 2.0, w: size, h }
}

/// Vertices clockwise from the top point.
pub fn hex_vertices(bounds: &RectF) -> [PointF; 6] {
    let RectF { x, y, w, h } = *bounds;
    [
        PointF { x: x + w / 2.0, y },
        PointF { x: x + w, y: y + h * 0.25 },
        PointF { x: x + w, y: y + h * 0.75 },
        PointF { x: x + w / 2.0, y: y + h },
        PointF { x, y: y + h * 0.75 },
        PointF { x, y: y + h * 0.25 },
    ]
}

/// SVG path of the hexagon in its own box, origin at the top-left corner.
pub fn hex_svg_path(size: f64) -> String {
    let local = RectF { x: 0.0, y: 0.0, w: size, h: hex_height(size) };
    let mut path = String::new();
    for (i, v) in hex_vertices(&local).iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        // Writing into a String can't fail.
        let _ = write!(path, "{} {:.2} {:.2} ", cmd, v.x, v.y);
    }
    path.push('Z');
    path
}
