//! # Chart Datasets
//!
//! Categorical datasets shown by the bar and donut charts and repeated on the
//! second page of the exported report.
//!
//! ## Key Functions:
//! - `expenses_breakdown()` - Development, hardware, total monthly price and tax amount
//! - `profit_vs_cost()` - Minimum profit, maximum profit and total cost

use serde::{Deserialize, Serialize};

use crate::i18n::LabelKey;
use crate::pricing::{PricingMetrics, PricingParameters};

/// One bar (or slice) of a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub key: LabelKey,
    pub value: f64,
}

/// A titled list of chart entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub title: LabelKey,
    pub entries: Vec<ChartEntry>,
}

impl ChartDataset {
    /// Sum of all entry values
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.value).sum()
    }

    /// Fraction of the total held by each entry, in entry order.
    ///
    /// Returns `None` when the dataset cannot be drawn as a pie: a negative or
    /// non-finite entry, or a total that is not positive.
    pub fn shares(&self) -> Option<Vec<f64>> {
        if self.entries.iter().any(|entry| !entry.value.is_finite() || entry.value < 0.0) {
            return None;
        }

        let total = self.total();
        if !(total.is_finite() && total > 0.0) {
            return None;
        }

        Some(self.entries.iter().map(|entry| entry.value / total).collect())
    }
}

/// Where the money goes: one-time costs, recurring cost and taxes
pub fn expenses_breakdown(params: &PricingParameters) -> ChartDataset {
    ChartDataset {
        title: LabelKey::ExpensesBreakdown,
        entries: vec![
            ChartEntry { key: LabelKey::DevelopmentCost, value: params.development_cost },
            ChartEntry { key: LabelKey::HardwareCost, value: params.hardware_cost },
            ChartEntry { key: LabelKey::MonthlyPrices, value: params.total_monthly_price() },
            ChartEntry { key: LabelKey::Taxes, value: params.tax_amount() },
        ],
    }
}

/// Target profit against achievable profit and total cost
pub fn profit_vs_cost(metrics: &PricingMetrics) -> ChartDataset {
    ChartDataset {
        title: LabelKey::ProfitVsCost,
        entries: vec![
            ChartEntry { key: LabelKey::MinProfit, value: metrics.min_profit },
            ChartEntry { key: LabelKey::MaxProfit, value: metrics.max_profit },
            ChartEntry { key: LabelKey::TotalCost, value: metrics.total_cost },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute;

    #[test]
    fn test_expenses_breakdown_defaults() {
        let dataset = expenses_breakdown(&PricingParameters::default());

        let values: Vec<f64> = dataset.entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![20_000.0, 10_000.0, 60_000.0, 15_000.0]);
        assert_eq!(dataset.title, LabelKey::ExpensesBreakdown);
        assert_eq!(dataset.entries[2].key, LabelKey::MonthlyPrices);
    }

    #[test]
    fn test_expenses_total_matches_total_cost() {
        let params = PricingParameters::default();
        let dataset = expenses_breakdown(&params);
        assert_eq!(dataset.total(), compute(&params).total_cost);
    }

    #[test]
    fn test_profit_vs_cost_defaults() {
        let dataset = profit_vs_cost(&compute(&PricingParameters::default()));

        let keys: Vec<LabelKey> = dataset.entries.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![LabelKey::MinProfit, LabelKey::MaxProfit, LabelKey::TotalCost]);
        assert_eq!(dataset.entries[1].value, -5_000.0);
        assert_eq!(dataset.entries[2].value, 105_000.0);
    }

    #[test]
    fn test_shares() {
        let dataset = expenses_breakdown(&PricingParameters::default());
        let shares = dataset.shares().unwrap();

        assert_eq!(shares.len(), 4);
        assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((shares[2] - 60_000.0 / 105_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_shares_unavailable_for_degenerate_data() {
        let empty = expenses_breakdown(&PricingParameters {
            development_cost: 0.0,
            hardware_cost: 0.0,
            monthly_price: 0.0,
            tax_rate_percent: 0.0,
            ..Default::default()
        });
        assert!(empty.shares().is_none());

        // max profit is negative for the defaults
        let profit = profit_vs_cost(&compute(&PricingParameters::default()));
        assert!(profit.shares().is_none());
    }
}
