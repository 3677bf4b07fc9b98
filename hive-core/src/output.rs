//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the dashboard, which
//! renders each hexagon at the given bounds with no geometry of its own.

use serde::Serialize;

use crate::input::InputError;
use crate::layout::{hex_bounds, hex_height, hex_svg_path, HexLayout, PlacementTier, PointF, RectF};
use crate::summary::CategoryShare;

/// A placed hexagon ready for React to display
#[derive(Debug, Clone, Serialize)]
pub struct HexagonOutput {
    pub id: String,
    pub center: PointF,
    /// Hexagon width
    pub size: f64,
    /// Hexagon height (pointy-top, so taller than wide)
    pub height: f64,
    pub radius: f64,
    /// Box to position the hexagon in (left/top/width/height)
    pub bounds: RectF,
    /// SVG path relative to `bounds`
    pub path: String,
    /// Largest first; drives the staggered entrance animation
    pub rank: usize,
    pub tier: PlacementTier,
}

/// Error information for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,   // 1-based line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>, // 1-based column number
}

impl From<&InputError> for ErrorInfo {
    fn from(e: &InputError) -> Self {
        let position = e.position();
        ErrorInfo {
            message: e.to_string(),
            line: position.map(|(line, _)| line),
            column: position.map(|(_, column)| column),
        }
    }
}

/// The hexagon grid sent to React
#[derive(Debug, Clone, Serialize)]
pub struct HexGridOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hexagons: Vec<HexagonOutput>,
    pub anchor: PointF,
    /// Container height in the same units as the width passed in
    pub height: f64,
    /// Some hexagon had to take a position that may overlap
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl HexGridOutput {
    pub fn from_layout(layout: &HexLayout) -> Self {
        let hexagons = layout
            .placements
            .iter()
            .map(|p| HexagonOutput {
                id: p.id.clone(),
                center: p.center(),
                size: p.size,
                height: hex_height(p.size),
                radius: p.radius,
                bounds: hex_bounds(p.center(), p.size),
                path: hex_svg_path(p.size),
                rank: p.rank,
                tier: p.tier,
            })
            .collect();

        HexGridOutput {
            hexagons,
            anchor: layout.anchor,
            height: layout.height,
            degraded: layout.degraded,
            error: None,
        }
    }

    /// Empty grid carrying an error; the dashboard keeps its previous layout.
    pub fn from_error(e: &InputError, anchor: PointF, height: f64) -> Self {
        HexGridOutput {
            hexagons: vec![],
            anchor,
            height,
            degraded: false,
            error: Some(ErrorInfo::from(e)),
        }
    }
}

/// Category shares sent to React
#[derive(Debug, Clone, Serialize)]
pub struct SharesOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shares: Vec<CategoryShare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}
