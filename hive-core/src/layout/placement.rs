// Greedy placement search.
//
// Places one hexagon at a time next to the ones already placed:
// 1. First hexagon goes on the anchor
// 2. Otherwise try the six hex-grid neighbours of every placed hexagon and
//    keep the free candidate closest to the anchor, vertical distance weighted
//    by `horizontal_bias`
// 3. If none is free, walk rings outward from the anchor
// 4. If the rings are full too, step right from the anchor and accept overlap
//
// The search never fails; step 4 is reported through `PlacementTier::Fallback`.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI, TAU};

use serde::Serialize;

use super::collision::has_collision;
use super::{LayoutConfig, PointF, Placement};

/// Which step of the search produced a position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementTier {
    Anchor,
    Adjacent,
    Ring,
    /// Last resort; may overlap other hexagons.
    Fallback,
}

/// Neighbour directions of a pointy-top hex grid: right, left, then the
/// diagonals (y grows downwards, so 60° is lower-right).
const DIRECTIONS: [f64; 6] = [
    0.0,
    PI,
    FRAC_PI_3,
    5.0 * FRAC_PI_3,
    2.0 * FRAC_PI_3,
    4.0 * FRAC_PI_3,
];

/// Ring probes tried before the evenly spaced fill angles.
const RING_ANGLES: [f64; 6] = [
    0.0,
    PI,
    FRAC_PI_6,
    -FRAC_PI_6,
    PI + FRAC_PI_6,
    PI - FRAC_PI_6,
];

/// Scores closer than this are a tie, and ties go to the earlier candidate.
const SCORE_TOLERANCE: f64 = 1e-9;

/// Find a center for a hexagon of circumradius `radius`.
pub fn find_position(
    radius: f64,
    placed: &[Placement],
    anchor: PointF,
    cfg: &LayoutConfig,
) -> (PointF, PlacementTier) {
    if placed.is_empty() {
        return (anchor, PlacementTier::Anchor);
    }
    if let Some(pos) = adjacent_search(radius, placed, anchor, cfg) {
        return (pos, PlacementTier::Adjacent);
    }
    if let Some(pos) = ring_search(radius, placed, anchor, cfg) {
        return (pos, PlacementTier::Ring);
    }
    (fallback_position(placed.len(), anchor, cfg), PlacementTier::Fallback)
}

fn score(candidate: PointF, anchor: PointF, cfg: &LayoutConfig) -> f64 {
    (candidate.x - anchor.x).abs() + cfg.horizontal_bias * (candidate.y - anchor.y).abs()
}

/// Best free neighbour slot over all placed hexagons, in placement order.
fn adjacent_search(
    radius: f64,
    placed: &[Placement],
    anchor: PointF,
    cfg: &LayoutConfig,
) -> Option<PointF> {
    let mut best: Option<(PointF, f64)> = None;

    for existing in placed {
        let distance = existing.radius + radius + cfg.gap;
        for angle in DIRECTIONS {
            let candidate = PointF {
                x: existing.x + angle.cos() * distance,
                y: existing.y + angle.sin() * distance,
            };
            if has_collision(candidate.x, candidate.y, radius, placed, cfg.gap) {
                continue;
            }
            let s = score(candidate, anchor, cfg);
            let better = match best {
                Some((_, best_score)) => s < best_score - SCORE_TOLERANCE,
                None => true,
            };
            if better {
                best = Some((candidate, s));
            }
        }
    }

    best.map(|(pos, _)| pos)
}

fn ring_probe_angle(i: usize, probes: usize) -> f64 {
    match RING_ANGLES.get(i) {
        Some(&angle) => angle,
        None => i as f64 / probes as f64 * TAU,
    }
}

/// First free probe on rings of growing radius around the anchor.
fn ring_search(
    radius: f64,
    placed: &[Placement],
    anchor: PointF,
    cfg: &LayoutConfig,
) -> Option<PointF> {
    for ring in 1..=cfg.max_rings {
        let ring_radius = ring as f64 * (radius * 2.0 + cfg.gap);
        for i in 0..cfg.ring_probes {
            let angle = ring_probe_angle(i, cfg.ring_probes);
            let x = anchor.x + angle.cos() * ring_radius;
            let y = anchor.y + angle.sin() * ring_radius;
            if !has_collision(x, y, radius, placed, cfg.gap) {
                return Some(PointF { x, y });
            }
        }
    }
    None
}

/// Deterministic last resort, not checked for collisions.
fn fallback_position(placed_count: usize, anchor: PointF, cfg: &LayoutConfig) -> PointF {
    PointF {
        x: anchor.x + placed_count as f64 * cfg.fallback_step,
        y: anchor.y,
    }
}
