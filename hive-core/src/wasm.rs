//! WASM bindings for the hive-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;
use serde_json::to_string;

use crate::input::{self, InputError};
use crate::layout::{anchor_point, layout_categories, LayoutConfig, PlacementTier};
use crate::output::{ErrorInfo, HexGridOutput, SharesOutput};
use crate::summary::{category_shares, spending_summary};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

const SERIALIZE_ERROR: &str = "{\"error\": {\"message\": \"Serialization error\"}}";

/// Lay out the spending hexagons for a container of the given width.
/// `categories_json` is an array of `{ id, weight }` (or `{ id, percentage }`).
#[wasm_bindgen]
pub fn layout_hexagons(categories_json: &str, container_width: f64) -> String {
    grid_json(categories_json, container_width, &LayoutConfig::default())
}

/// Same as `layout_hexagons`, with any subset of the layout config overridden.
#[wasm_bindgen]
pub fn layout_hexagons_with_config(categories_json: &str, container_width: f64, config_json: &str) -> String {
    let cfg = match input::parse_config(config_json) {
        Ok(cfg) => cfg,
        Err(e) => {
            console_error(&format!("Error reading layout config: {}", e));
            let defaults = LayoutConfig::default();
            return error_grid_json(&e, container_width, &defaults);
        }
    };
    grid_json(categories_json, container_width, &cfg)
}

fn grid_json(categories_json: &str, container_width: f64, cfg: &LayoutConfig) -> String {
    let categories = match input::parse_categories(categories_json) {
        Ok(categories) => categories,
        Err(e) => {
            console_error(&format!("Error reading categories: {}", e));
            return error_grid_json(&e, container_width, cfg);
        }
    };

    let layout = layout_categories(&categories, container_width, cfg);

    let ring_count = layout.placements.iter().filter(|p| p.tier == PlacementTier::Ring).count();
    if ring_count > 0 {
        console_log(&format!("Hexagon layout used ring search for {} of {} hexagons", ring_count, layout.placements.len()));
    }
    if layout.degraded {
        console_error(&format!(
            "Hexagon layout could not find free positions for: {}; they may overlap",
            layout.fallback_ids().join(", ")
        ));
    }

    let output = HexGridOutput::from_layout(&layout);
    to_string(&output).unwrap_or_else(|_| SERIALIZE_ERROR.to_string())
}

fn error_grid_json(e: &InputError, container_width: f64, cfg: &LayoutConfig) -> String {
    let output = HexGridOutput::from_error(e, anchor_point(container_width, cfg), cfg.empty_height);
    to_string(&output).unwrap_or_else(|_| SERIALIZE_ERROR.to_string())
}

/// Percentage shares from an array of `{ id, amount }`, largest first.
#[wasm_bindgen]
pub fn compute_category_shares(amounts_json: &str) -> String {
    let output = match input::parse_amounts(amounts_json) {
        Ok(amounts) => SharesOutput { shares: category_shares(&amounts), error: None },
        Err(e) => {
            console_error(&format!("Error reading category amounts: {}", e));
            SharesOutput { shares: vec![], error: Some(ErrorInfo::from(&e)) }
        }
    };
    to_string(&output).unwrap_or_else(|_| SERIALIZE_ERROR.to_string())
}

/// Spent / income / saved / savings rate for the summary strip.
#[wasm_bindgen]
pub fn compute_spending_summary(total_spent: f64, total_income: f64) -> String {
    let summary = spending_summary(total_spent, total_income);
    to_string(&summary).unwrap_or_else(|_| SERIALIZE_ERROR.to_string())
}
