//! Spending numbers shown around the hexagon grid.
//!
//! Turns raw category amounts into the percentage shares the grid is sized
//! by, and computes the summary strip (spent, income, saved, savings rate).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::layout::CategoryWeight;

/// A category's spend for the period, as sent by the front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryAmount {
    pub id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub id: String,
    pub amount: f64,
    /// Share of total spend in percent, one decimal.
    pub percentage: f64,
}

impl From<&CategoryShare> for CategoryWeight {
    fn from(share: &CategoryShare) -> Self {
        CategoryWeight { id: share.id.clone(), weight: share.percentage }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    pub total_spent: f64,
    pub total_income: f64,
    pub saved: f64,
    /// Whole percent of income not spent. Negative when overspending.
    pub savings_rate: i64,
}

/// Rounds halves towards positive infinity, the way the dashboard displays numbers.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Percentage of `total` that `amount` represents, rounded to one decimal.
pub fn share_of(amount: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    round_half_up(amount / total * 1000.0) / 10.0
}

/// Shares of total spend, largest amount first. Equal amounts keep input order.
pub fn category_shares(categories: &[CategoryAmount]) -> Vec<CategoryShare> {
    let total: f64 = categories.iter().map(|c| c.amount).sum();

    let mut shares: Vec<CategoryShare> = categories
        .iter()
        .map(|c| CategoryShare {
            id: c.id.clone(),
            amount: c.amount,
            percentage: share_of(c.amount, total),
        })
        .collect();

    shares.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    shares
}

pub fn spending_summary(total_spent: f64, total_income: f64) -> SpendingSummary {
    let saved = total_income - total_spent;
    let savings_rate = if total_income != 0.0 && total_income.is_finite() {
        round_half_up(saved / total_income * 100.0) as i64
    } else {
        0
    };
    SpendingSummary { total_spent, total_income, saved, savings_rate }
}
