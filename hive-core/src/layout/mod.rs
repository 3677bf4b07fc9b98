// Hexagon packing layouter for the spending grid.
//
// Goals:
// - Deterministic: no randomness, same input order + width => same output
// - Size from weight: bigger share, bigger hexagon
// - No overlap (circumscribed circles + gap), except the last-resort tier
// - Wide rather than tall clusters
// - Always recomputed from scratch, no incremental path
//
// Submodules:
// - geometry: size/radius derivation and the pointy-top render shape
// - collision: circle overlap checks
// - placement: adjacent/ring/fallback position search
//
// Output:
// - HexLayout with placements pinned to the anchor + container height.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

mod collision;
mod geometry;
mod placement;

pub use collision::{has_collision, overlaps};
pub use geometry::{hex_bounds, hex_height, hex_svg_path, hex_vertices, radius_of, size_of};
pub use placement::{find_position, PlacementTier};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }

    pub fn union(&self, other: &RectF) -> RectF {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        RectF { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }
}

/// One spending category as the packer sees it.
/// Everything else the dashboard knows about a category is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryWeight {
    pub id: String,
    #[serde(alias = "percentage")]
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Hexagon width at scale 1.0.
    pub base_size: f64,
    /// Minimum space between two circumscribed circles.
    pub gap: f64,
    /// Vertical anchor; the horizontal one comes from the container width.
    pub anchor_y: f64,
    /// Weight at which hexagons stop growing.
    pub reference_weight: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Inflation applied to the circumradius so neighbours never touch.
    pub radius_buffer: f64,
    /// Penalty on vertical distance from the anchor when scoring candidates.
    pub horizontal_bias: f64,
    /// Rings probed around the anchor once adjacent search is exhausted.
    pub max_rings: usize,
    pub ring_probes: usize,
    /// Horizontal step of the last-resort position, per placed hexagon.
    pub fallback_step: f64,
    pub height_padding: f64,
    pub min_height: f64,
    /// Container height when there is nothing to lay out.
    pub empty_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_size: 180.0,
            gap: 12.0,
            anchor_y: 380.0,
            reference_weight: 40.0,
            min_scale: 0.6,
            max_scale: 1.3,
            radius_buffer: 1.05,
            horizontal_bias: 1.6,
            max_rings: 10,
            ring_probes: 12,
            fallback_step: 100.0,
            height_padding: 150.0,
            min_height: 650.0,
            empty_height: 750.0,
        }
    }
}

/// A hexagon placed by the packer. Coordinates are the hexagon's center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub radius: f64,
    pub tier: PlacementTier,
    /// Position in descending-size order, largest first.
    pub rank: usize,
}

impl Placement {
    pub fn center(&self) -> PointF {
        PointF { x: self.x, y: self.y }
    }

    /// Square around the circumscribed circle.
    pub fn circle_bounds(&self) -> RectF {
        RectF {
            x: self.x - self.radius,
            y: self.y - self.radius,
            w: 2.0 * self.radius,
            h: 2.0 * self.radius,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HexLayout {
    pub anchor: PointF,
    /// Placements in placement order (descending weight).
    pub placements: Vec<Placement>,
    /// Container height needed to show the whole cluster.
    pub height: f64,
    /// True when at least one hexagon came from the last-resort tier and may overlap.
    pub degraded: bool,
}

impl HexLayout {
    pub fn get(&self, id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Placements that had to accept a possibly overlapping position.
    pub fn fallback_ids(&self) -> Vec<&str> {
        self.placements
            .iter()
            .filter(|p| p.tier == PlacementTier::Fallback)
            .map(|p| p.id.as_str())
            .collect()
    }
}

/// Anchor for a container of the given width. Degenerate widths pin to x = 0.
pub fn anchor_point(container_width: f64, cfg: &LayoutConfig) -> PointF {
    let width = if container_width.is_finite() { container_width.max(0.0) } else { 0.0 };
    PointF { x: width / 2.0, y: cfg.anchor_y }
}

/// Lay out one hexagon per category around the anchor derived from `container_width`.
pub fn layout_categories(
    categories: &[CategoryWeight],
    container_width: f64,
    cfg: &LayoutConfig,
) -> HexLayout {
    let anchor = anchor_point(container_width, cfg);

    // Largest first; sort_by is stable so equal weights keep input order.
    let mut ordered: Vec<&CategoryWeight> = categories.iter().collect();
    ordered.sort_by(|a, b| {
        sort_weight(b.weight)
            .partial_cmp(&sort_weight(a.weight))
            .unwrap_or(Ordering::Equal)
    });

    let mut placed: Vec<Placement> = Vec::with_capacity(ordered.len());
    for category in ordered {
        let size = size_of(category.weight, cfg);
        let radius = radius_of(size, cfg);
        let (pos, tier) = find_position(radius, &placed, anchor, cfg);
        placed.push(Placement {
            id: category.id.clone(),
            x: pos.x,
            y: pos.y,
            size,
            radius,
            tier,
            rank: 0,
        });
    }

    recenter_on_anchor(&mut placed, anchor);
    assign_ranks(&mut placed);

    let height = container_height(&placed, cfg);
    let degraded = placed.iter().any(|p| p.tier == PlacementTier::Fallback);

    HexLayout { anchor, placements: placed, height, degraded }
}

fn sort_weight(weight: f64) -> f64 {
    if weight.is_nan() { 0.0 } else { weight }
}

/// Translate the whole cluster so the first placement sits exactly on the anchor.
fn recenter_on_anchor(placed: &mut [Placement], anchor: PointF) {
    let Some(first) = placed.first() else {
        return;
    };
    let dx = anchor.x - first.x;
    let dy = anchor.y - first.y;
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    for p in placed.iter_mut() {
        p.x += dx;
        p.y += dy;
    }
    // Pin exactly; the translation alone can be off by an ulp.
    placed[0].x = anchor.x;
    placed[0].y = anchor.y;
}

fn assign_ranks(placed: &mut [Placement]) {
    let mut by_size: Vec<usize> = (0..placed.len()).collect();
    by_size.sort_by(|&a, &b| {
        placed[b].size.partial_cmp(&placed[a].size).unwrap_or(Ordering::Equal)
    });
    for (rank, idx) in by_size.into_iter().enumerate() {
        placed[idx].rank = rank;
    }
}

/// Bounding box of all circumscribed circles, or None for an empty layout.
pub fn cluster_extent(placed: &[Placement]) -> Option<RectF> {
    placed
        .iter()
        .map(Placement::circle_bounds)
        .reduce(|acc, r| acc.union(&r))
}

fn container_height(placed: &[Placement], cfg: &LayoutConfig) -> f64 {
    match cluster_extent(placed) {
        Some(extent) => (extent.h + cfg.height_padding).max(cfg.min_height),
        None => cfg.empty_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str, weight: f64) -> CategoryWeight {
        CategoryWeight { id: id.to_string(), weight }
    }

    /// Shares of the dashboard's December sample month.
    fn december() -> Vec<CategoryWeight> {
        vec![
            cat("housing", 39.4),
            cat("food", 11.1),
            cat("travel", 9.7),
            cat("groceries", 9.5),
            cat("transportation", 7.8),
            cat("shopping", 6.8),
            cat("utilities", 5.6),
            cat("entertainment", 4.3),
            cat("healthcare", 3.6),
            cat("fitness", 2.2),
        ]
    }

    fn assert_no_overlap(layout: &HexLayout, gap: f64) {
        let ps: Vec<&Placement> = layout
            .placements
            .iter()
            .filter(|p| p.tier != PlacementTier::Fallback)
            .collect();
        for (i, a) in ps.iter().enumerate() {
            for b in &ps[i + 1..] {
                let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                let min = a.radius + b.radius + gap;
                assert!(
                    dist + 1e-6 >= min,
                    "{} and {} overlap: {} < {}",
                    a.id, b.id, dist, min
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let cfg = LayoutConfig::default();
        let layout = layout_categories(&[], 900.0, &cfg);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.height, cfg.empty_height);
        assert!(!layout.degraded);
    }

    #[test]
    fn test_single_category_sits_on_anchor() {
        let cfg = LayoutConfig::default();
        let layout = layout_categories(&[cat("a", 100.0)], 900.0, &cfg);

        assert_eq!(layout.placements.len(), 1);
        let a = &layout.placements[0];
        assert_eq!((a.x, a.y), (450.0, 380.0));
        assert!((a.size - cfg.base_size * 1.3).abs() < 1e-9);
        assert_eq!(a.tier, PlacementTier::Anchor);
        assert_eq!(a.rank, 0);
    }

    #[test]
    fn test_two_equal_categories() {
        let cfg = LayoutConfig::default();
        let layout = layout_categories(&[cat("a", 20.0), cat("b", 20.0)], 900.0, &cfg);

        let a = layout.get("a").unwrap();
        let b = layout.get("b").unwrap();
        assert_eq!(a.size, b.size);

        // Input order breaks the tie, so "a" is the one on the anchor.
        assert_eq!((a.x, a.y), (450.0, 380.0));
        let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        assert!(dist + 1e-9 >= 2.0 * a.radius + cfg.gap);

        // First direction tried is straight right.
        assert!(b.x > a.x);
        assert!((b.y - a.y).abs() < 1e-9);
    }

    #[test]
    fn test_largest_weight_is_pinned_regardless_of_input_order() {
        let cfg = LayoutConfig::default();
        let cats = vec![cat("small", 3.0), cat("mid", 12.0), cat("big", 30.0)];
        let layout = layout_categories(&cats, 640.0, &cfg);

        assert_eq!(layout.placements[0].id, "big");
        let big = layout.get("big").unwrap();
        assert_eq!((big.x, big.y), (320.0, 380.0));
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let cfg = LayoutConfig::default();
        let cats = vec![cat("c", 5.0), cat("a", 5.0), cat("b", 5.0)];
        let layout = layout_categories(&cats, 900.0, &cfg);

        let ids: Vec<&str> = layout.placements.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert!(layout.placements.iter().all(|p| p.size == layout.placements[0].size));
        let ranks: Vec<usize> = layout.placements.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn test_december_cluster_is_wide_and_overlap_free() {
        let cfg = LayoutConfig::default();
        let layout = layout_categories(&december(), 900.0, &cfg);

        assert_eq!(layout.placements.len(), 10);
        assert!(!layout.degraded);
        assert_no_overlap(&layout, cfg.gap);

        let xs = layout.placements.iter().map(|p| p.x);
        let ys = layout.placements.iter().map(|p| p.y);
        let x_spread = xs.clone().fold(f64::MIN, f64::max) - xs.fold(f64::MAX, f64::min);
        let y_spread = ys.clone().fold(f64::MIN, f64::max) - ys.fold(f64::MAX, f64::min);
        assert!(x_spread > y_spread, "x spread {} vs y spread {}", x_spread, y_spread);

        let housing = layout.get("housing").unwrap();
        assert_eq!((housing.x, housing.y), (450.0, 380.0));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let cfg = LayoutConfig::default();
        let first = layout_categories(&december(), 900.0, &cfg);
        let second = layout_categories(&december(), 900.0, &cfg);
        assert_eq!(first.placements, second.placements);
        assert_eq!(first.height, second.height);
    }

    #[test]
    fn test_resize_moves_whole_cluster_with_anchor() {
        let cfg = LayoutConfig::default();
        let wide = layout_categories(&december(), 900.0, &cfg);
        let narrow = layout_categories(&december(), 400.0, &cfg);

        assert_eq!(narrow.anchor, PointF { x: 200.0, y: 380.0 });
        let housing = narrow.get("housing").unwrap();
        assert_eq!((housing.x, housing.y), (200.0, 380.0));

        for w in &wide.placements {
            let n = narrow.get(&w.id).unwrap();
            assert!(((w.x - wide.anchor.x) - (n.x - narrow.anchor.x)).abs() < 1e-6, "{}", w.id);
            assert!(((w.y - wide.anchor.y) - (n.y - narrow.anchor.y)).abs() < 1e-6, "{}", w.id);
        }
    }

    #[test]
    fn test_degenerate_widths_anchor_at_zero() {
        let cfg = LayoutConfig::default();
        for width in [0.0, -250.0, f64::NAN, f64::INFINITY] {
            let layout = layout_categories(&[cat("a", 10.0), cat("b", 4.0)], width, &cfg);
            assert_eq!(layout.anchor.x, 0.0);
            let a = layout.get("a").unwrap();
            assert_eq!((a.x, a.y), (0.0, cfg.anchor_y));
        }
    }

    #[test]
    fn test_height_has_floor_and_padding() {
        let cfg = LayoutConfig::default();
        let single = layout_categories(&[cat("a", 2.0)], 900.0, &cfg);
        assert_eq!(single.height, cfg.min_height);

        let cfg = LayoutConfig { min_height: 0.0, ..LayoutConfig::default() };
        let single = layout_categories(&[cat("a", 2.0)], 900.0, &cfg);
        let r = single.placements[0].radius;
        assert!((single.height - (2.0 * r + cfg.height_padding)).abs() < 1e-9);
    }

    #[test]
    fn test_rect_union() {
        let a = RectF { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = RectF { x: 5.0, y: -5.0, w: 20.0, h: 5.0 };
        assert_eq!(a.union(&b), RectF { x: 0.0, y: -5.0, w: 25.0, h: 15.0 });
    }
}
