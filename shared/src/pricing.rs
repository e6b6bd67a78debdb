//! # Pricing Model
//!
//! Pure computation of the derived financial metrics from the user supplied
//! pricing parameters.
//!
//! ## Key Types:
//! - `PricingParameters` - Raw inputs entered by the user
//! - `PricingMetrics` - Metrics derived from the parameters
//! - `ParameterField` - Closed set of input fields, used to drive forms generically
//! - `PricingSession` - Current parameters plus the last computed metrics
//!
//! ## Key Functions:
//! - `compute()` - Map a parameter set to its full metrics set
//!
//! Degenerate inputs (zero cost, zero income, 100% tax, zero months) are not
//! rejected. Divisions by zero propagate as infinity or NaN and it is up to the
//! presentation layer to show them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::i18n::LabelKey;

/// Fixed markup used by the lowest monthly price formula.
///
/// This is independent of `target_profit_percent`.
pub const LOWEST_PRICE_MARKUP: f64 = 0.2;

/// Months per year, used to spread the projected income over monthly revenue
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// User supplied cost and revenue parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingParameters {
    /// Projected gross income for the operating period
    pub max_income: f64,
    /// One-time development cost
    pub development_cost: f64,
    /// One-time hardware cost
    pub hardware_cost: f64,
    /// Recurring monthly cost
    pub monthly_price: f64,
    /// Percentage of `max_income` paid in tax
    pub tax_rate_percent: f64,
    /// Desired profit as a percentage of `max_income`
    pub target_profit_percent: f64,
    /// Number of months of operation
    pub months: u32,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            max_income: 100_000.0,
            development_cost: 20_000.0,
            hardware_cost: 10_000.0,
            monthly_price: 5_000.0,
            tax_rate_percent: 15.0,
            target_profit_percent: 20.0,
            months: 12,
        }
    }
}

impl PricingParameters {
    /// Recurring cost over the whole operating period
    pub fn total_monthly_price(&self) -> f64 {
        self.monthly_price * self.months as f64
    }

    /// Tax paid on the projected income
    pub fn tax_amount(&self) -> f64 {
        (self.max_income * self.tax_rate_percent) / 100.0
    }
}

/// Metrics derived from a `PricingParameters` record.
///
/// Values are kept at full precision. Use `display::DisplayMetrics` for the
/// rounded values shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingMetrics {
    pub total_cost: f64,
    pub max_profit: f64,
    pub min_profit: f64,
    /// Return on investment, in percent
    pub roi: f64,
    pub break_even_months: f64,
    pub monthly_revenue: f64,
    /// Profit margin, in percent
    pub profit_margin: f64,
    pub lowest_price: f64,
    pub lowest_price_to_call: f64,
}

impl PricingMetrics {
    /// True when every metric is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.total_cost,
            self.max_profit,
            self.min_profit,
            self.roi,
            self.break_even_months,
            self.monthly_revenue,
            self.profit_margin,
            self.lowest_price,
            self.lowest_price_to_call,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Compute the full metrics set for the given parameters.
///
/// Never panics. Zero or negative denominators produce non-finite values.
pub fn compute(params: &PricingParameters) -> PricingMetrics {
    let months = params.months as f64;
    let tax_fraction = params.tax_rate_percent / 100.0;
    let profit_fraction = params.target_profit_percent / 100.0;

    let total_cost = params.development_cost
        + params.hardware_cost
        + params.total_monthly_price()
        + params.tax_amount();

    let max_profit = params.max_income - total_cost;
    let min_profit = (params.max_income * params.target_profit_percent) / 100.0;
    let monthly_revenue = params.max_income / MONTHS_PER_YEAR;

    PricingMetrics {
        total_cost,
        max_profit,
        min_profit,
        roi: (max_profit / total_cost) * 100.0,
        break_even_months: total_cost / monthly_revenue,
        monthly_revenue,
        profit_margin: (max_profit / params.max_income) * 100.0,
        lowest_price: (total_cost / (1.0 - tax_fraction)) / (1.0 - LOWEST_PRICE_MARKUP) / months,
        lowest_price_to_call: ((total_cost * (1.0 + tax_fraction)) * months) * (1.0 + profit_fraction),
    }
}

/// The seven input fields of the calculator, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterField {
    MaxIncome,
    DevelopmentCost,
    HardwareCost,
    MonthlyPrice,
    TaxRatePercent,
    TargetProfitPercent,
    Months,
}

impl ParameterField {
    pub const ALL: [ParameterField; 7] = [
        ParameterField::MaxIncome,
        ParameterField::DevelopmentCost,
        ParameterField::HardwareCost,
        ParameterField::MonthlyPrice,
        ParameterField::TaxRatePercent,
        ParameterField::TargetProfitPercent,
        ParameterField::Months,
    ];

    /// Label used for this field in the input form
    pub fn label_key(&self) -> LabelKey {
        match self {
            ParameterField::MaxIncome => LabelKey::MaxIncome,
            ParameterField::DevelopmentCost => LabelKey::DevelopmentCost,
            ParameterField::HardwareCost => LabelKey::HardwareCost,
            ParameterField::MonthlyPrice => LabelKey::MonthlyPrices,
            ParameterField::TaxRatePercent => LabelKey::Taxes,
            ParameterField::TargetProfitPercent => LabelKey::ProfitPercentage,
            ParameterField::Months => LabelKey::MonthsOfOperation,
        }
    }

    /// Stable identifier, used for widget ids
    pub fn id(&self) -> &'static str {
        match self {
            ParameterField::MaxIncome => "max_income",
            ParameterField::DevelopmentCost => "development_cost",
            ParameterField::HardwareCost => "hardware_cost",
            ParameterField::MonthlyPrice => "monthly_price",
            ParameterField::TaxRatePercent => "tax_rate_percent",
            ParameterField::TargetProfitPercent => "target_profit_percent",
            ParameterField::Months => "months",
        }
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, ParameterField::TaxRatePercent | ParameterField::TargetProfitPercent)
    }

    pub fn is_whole_number(&self) -> bool {
        matches!(self, ParameterField::Months)
    }

    /// Read the field as a float
    pub fn get(&self, params: &PricingParameters) -> f64 {
        match self {
            ParameterField::MaxIncome => params.max_income,
            ParameterField::DevelopmentCost => params.development_cost,
            ParameterField::HardwareCost => params.hardware_cost,
            ParameterField::MonthlyPrice => params.monthly_price,
            ParameterField::TaxRatePercent => params.tax_rate_percent,
            ParameterField::TargetProfitPercent => params.target_profit_percent,
            ParameterField::Months => params.months as f64,
        }
    }

    /// Write the field from a float.
    ///
    /// Months are rounded to the nearest whole month; negative and NaN values become 0.
    pub fn set(&self, params: &mut PricingParameters, value: f64) {
        match self {
            ParameterField::MaxIncome => params.max_income = value,
            ParameterField::DevelopmentCost => params.development_cost = value,
            ParameterField::HardwareCost => params.hardware_cost = value,
            ParameterField::MonthlyPrice => params.monthly_price = value,
            ParameterField::TaxRatePercent => params.tax_rate_percent = value,
            ParameterField::TargetProfitPercent => params.target_profit_percent = value,
            ParameterField::Months => {
                // `as` saturates: NaN and negatives land on 0, huge values on u32::MAX
                params.months = value.round() as u32;
            }
        }
    }
}

/// Current parameters together with the metrics last computed from them.
///
/// Every mutation goes through `on_parameters_changed`, so the metrics are
/// always a full recomputation of the current parameters.
#[derive(Debug, Clone)]
pub struct PricingSession {
    parameters: PricingParameters,
    metrics: PricingMetrics,
    recompute_count: u64,
}

impl PricingSession {
    pub fn new(parameters: PricingParameters) -> Self {
        let metrics = compute(&parameters);
        debug!(
            "🧮 PRICING: initial compute total_cost={} max_profit={}",
            metrics.total_cost, metrics.max_profit
        );
        Self {
            parameters,
            metrics,
            recompute_count: 1,
        }
    }

    pub fn parameters(&self) -> &PricingParameters {
        &self.parameters
    }

    pub fn metrics(&self) -> &PricingMetrics {
        &self.metrics
    }

    /// Number of recomputation passes run so far
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Replace all parameters and recompute
    pub fn set_parameters(&mut self, parameters: PricingParameters) {
        self.parameters = parameters;
        self.on_parameters_changed();
    }

    /// Edit the parameters in place, then recompute once
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut PricingParameters),
    {
        edit(&mut self.parameters);
        self.on_parameters_changed();
    }

    /// Set a single field and recompute
    pub fn set_field(&mut self, field: ParameterField, value: f64) {
        self.update(|params| field.set(params, value));
    }

    /// Recompute the whole metrics set from the current parameters
    pub fn on_parameters_changed(&mut self) {
        self.metrics = compute(&self.parameters);
        self.recompute_count += 1;
        debug!(
            "🧮 PRICING: recompute #{} total_cost={} max_profit={}",
            self.recompute_count, self.metrics.total_cost, self.metrics.max_profit
        );
    }
}

impl Default for PricingSession {
    fn default() -> Self {
        Self::new(PricingParameters::default())
    }
}
