//! Shared domain types and pure computation for the NEXUSOFT SaaS pricer.
//!
//! Nothing in this crate performs I/O. The egui frontend owns the window,
//! the export files and the configuration; it reads everything it shows
//! from the types defined here.

pub mod charts;
pub mod display;
pub mod i18n;
pub mod pricing;
pub mod report;

pub use charts::{expenses_breakdown, profit_vs_cost, ChartDataset, ChartEntry};
pub use display::{format_money, format_number, format_percent, parse_number, round_to, DisplayMetrics};
pub use i18n::{labels_for, labels_for_tag, I18nError, LabelKey, Labels, Language};
pub use pricing::{
    compute, ParameterField, PricingMetrics, PricingParameters, PricingSession, LOWEST_PRICE_MARKUP,
    MONTHS_PER_YEAR,
};
pub use report::{PricingReport, ReportError, ReportFormat, PAGE_BREAK, REPORT_FILE_STEM};
