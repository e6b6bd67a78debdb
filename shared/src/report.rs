//! # Pricing Report
//!
//! Static summary of a pricing session, rendered as a two-page text document,
//! a CSV table or JSON. The report is a snapshot: it is built from the
//! parameters at the moment the user asks for it and never changes afterwards.
//!
//! ## Text layout:
//! - Page 1: title, input parameters, results
//! - Page 2: expenses breakdown, profit vs cost
//!
//! Pages are separated by a form feed character.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charts::{expenses_breakdown, profit_vs_cost, ChartDataset};
use crate::display::{format_money, format_number, format_percent, DisplayMetrics};
use crate::i18n::{labels_for, LabelKey, Language, Labels};
use crate::pricing::{compute, ParameterField, PricingMetrics, PricingParameters};

/// File name used for exported reports, without extension
pub const REPORT_FILE_STEM: &str = "nexusoft-saas-pricing-results";

/// Separator between the two pages of the text report
pub const PAGE_BREAK: char = '\u{000C}';

/// Errors raised while rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to finish CSV output: {0}")]
    CsvFlush(String),
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format of an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Text, ReportFormat::Csv, ReportFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportFormat::Text => "Text",
            ReportFormat::Csv => "CSV",
            ReportFormat::Json => "JSON",
        }
    }

    /// Default report file name for this format
    pub fn file_name(&self) -> String {
        format!("{}.{}", REPORT_FILE_STEM, self.extension())
    }
}

/// Snapshot of a pricing session ready to be exported
#[derive(Debug, Clone, PartialEq)]
pub struct PricingReport {
    language: Language,
    parameters: PricingParameters,
    metrics: PricingMetrics,
    expenses: ChartDataset,
    profit: ChartDataset,
}

/// JSON shape of an exported report
#[derive(Serialize)]
struct JsonReport<'a> {
    language: Language,
    parameters: &'a PricingParameters,
    metrics: &'a PricingMetrics,
    expenses_breakdown: &'a ChartDataset,
    profit_vs_cost: &'a ChartDataset,
}

impl PricingReport {
    /// Snapshot the parameters and compute everything the report shows
    pub fn new(language: Language, parameters: PricingParameters) -> Self {
        let metrics = compute(&parameters);
        Self {
            language,
            parameters,
            metrics,
            expenses: expenses_breakdown(&parameters),
            profit: profit_vs_cost(&metrics),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn metrics(&self) -> &PricingMetrics {
        &self.metrics
    }

    /// Render in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Csv => self.to_csv(),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Two-page plain text document
    pub fn to_text(&self) -> String {
        let labels = labels_for(self.language);
        let na = labels.get(LabelKey::NotAvailable);
        let display = DisplayMetrics::from(&self.metrics);

        let money = |value: f64| format_money(value).unwrap_or_else(|| na.to_string());
        let percent = |value: f64| format_percent(value).unwrap_or_else(|| na.to_string());

        let mut page_one = Vec::new();
        page_one.push(labels.get(LabelKey::Title).to_string());
        page_one.push(String::new());
        page_one.push(labels.get(LabelKey::InputParameters).to_string());
        for field in ParameterField::ALL {
            page_one.push(format!(
                "  {}: {}",
                labels.get(field.label_key()),
                self.format_parameter(field, na)
            ));
        }

        page_one.push(String::new());
        page_one.push(labels.get(LabelKey::Results).to_string());
        let break_even = match format_number(display.break_even_months, 1) {
            Some(months) => format!("{} {}", months, labels.get(LabelKey::Months)),
            None => na.to_string(),
        };
        let results = [
            (LabelKey::TotalCost, money(display.total_cost)),
            (LabelKey::MaxProfit, money(display.max_profit)),
            (LabelKey::MinProfit, money(display.min_profit)),
            (LabelKey::Roi, percent(display.roi)),
            (LabelKey::BreakEven, break_even),
            (LabelKey::MonthlyRevenue, money(display.monthly_revenue)),
            (LabelKey::ProfitMargin, percent(display.profit_margin)),
            (LabelKey::LowestPrice, money(display.lowest_price)),
            (LabelKey::LowestPriceToCall, money(display.lowest_price_to_call)),
        ];
        for (key, value) in results {
            page_one.push(format!("  {}: {}", labels.get(key), value));
        }

        let mut page_two = Vec::new();
        push_dataset_lines(&mut page_two, &labels, &self.expenses, na);
        page_two.push(String::new());
        push_dataset_lines(&mut page_two, &labels, &self.profit, na);

        format!("{}\n{}{}\n", page_one.join("\n"), PAGE_BREAK, page_two.join("\n"))
    }

    /// CSV table with `section,label,value` rows at full precision
    pub fn to_csv(&self) -> Result<String, ReportError> {
        let labels = labels_for(self.language);
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["section", "label", "value"])?;

        let inputs = labels.get(LabelKey::InputParameters);
        for field in ParameterField::ALL {
            let value = csv_value(field.get(&self.parameters));
            writer.write_record([inputs, labels.get(field.label_key()), value.as_str()])?;
        }

        let results = labels.get(LabelKey::Results);
        let metrics = [
            (LabelKey::TotalCost, self.metrics.total_cost),
            (LabelKey::MaxProfit, self.metrics.max_profit),
            (LabelKey::MinProfit, self.metrics.min_profit),
            (LabelKey::Roi, self.metrics.roi),
            (LabelKey::BreakEven, self.metrics.break_even_months),
            (LabelKey::MonthlyRevenue, self.metrics.monthly_revenue),
            (LabelKey::ProfitMargin, self.metrics.profit_margin),
            (LabelKey::LowestPrice, self.metrics.lowest_price),
            (LabelKey::LowestPriceToCall, self.metrics.lowest_price_to_call),
        ];
        for (key, value) in metrics {
            let value = csv_value(value);
            writer.write_record([results, labels.get(key), value.as_str()])?;
        }

        for dataset in [&self.expenses, &self.profit] {
            let section = labels.get(dataset.title);
            for entry in &dataset.entries {
                let value = csv_value(entry.value);
                writer.write_record([section, labels.get(entry.key), value.as_str()])?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::CsvFlush(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Pretty-printed JSON. Non-finite numbers are written as `null`.
    pub fn to_json(&self) -> Result<String, ReportError> {
        let report = JsonReport {
            language: self.language,
            parameters: &self.parameters,
            metrics: &self.metrics,
            expenses_breakdown: &self.expenses,
            profit_vs_cost: &self.profit,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn format_parameter(&self, field: ParameterField, na: &str) -> String {
        let value = field.get(&self.parameters);
        let decimals = if field.is_whole_number() { 0 } else { 2 };
        match format_number(value, decimals) {
            Some(number) if field.is_percentage() => format!("{}%", number),
            Some(number) => number,
            None => na.to_string(),
        }
    }
}

fn push_dataset_lines(lines: &mut Vec<String>, labels: &Labels, dataset: &ChartDataset, na: &str) {
    lines.push(labels.get(dataset.title).to_string());
    for entry in &dataset.entries {
        let value = format_money(entry.value).unwrap_or_else(|| na.to_string());
        lines.push(format!("  {}: {}", labels.get(entry.key), value));
    }
}

fn csv_value(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_has_two_pages() {
        let report = PricingReport::new(Language::En, PricingParameters::default());
        let text = report.to_text();

        let pages: Vec<&str> = text.split(PAGE_BREAK).collect();
        assert_eq!(pages.len(), 2);

        assert!(pages[0].starts_with("NEXUSOFT SaaS Pricer\n"));
        assert!(pages[0].contains("Input Parameters"));
        assert!(pages[0].contains("  Max Income: 100,000.00"));
        assert!(pages[0].contains("  Taxes (%): 15.00%"));
        assert!(pages[0].contains("  Months of Operation: 12\n"));
        assert!(pages[0].contains("  Total Cost: $105,000.00"));
        assert!(pages[0].contains("  Max Profit: -$5,000.00"));
        assert!(pages[0].contains("  ROI: -4.76%"));
        assert!(pages[0].contains("  Break-even: 12.6 months"));
        assert!(pages[0].contains("  Monthly Revenue: $8,333.33"));
        assert!(pages[0].contains("  Profit Margin: -5.00%"));

        assert!(pages[1].starts_with("Expenses Breakdown\n"));
        assert!(pages[1].contains("  Monthly Prices: $60,000.00"));
        assert!(pages[1].contains("Profit vs Cost"));
        assert!(pages[1].contains("  Min Profit: $20,000.00"));
    }

    #[test]
    fn test_text_report_in_portuguese() {
        let report = PricingReport::new(Language::Pt, PricingParameters::default());
        let text = report.to_text();

        assert!(text.starts_with("Precificador SaaS NEXUSOFT"));
        assert!(text.contains("  Custo Total: $105,000.00"));
        assert!(text.contains("  Ponto de Equilíbrio: 12.6 meses"));
        assert!(text.contains("Detalhamento de Despesas"));
    }

    #[test]
    fn test_text_report_marks_non_finite_values() {
        let params = PricingParameters { tax_rate_percent: 100.0, ..Default::default() };
        let text = PricingReport::new(Language::En, params).to_text();
        assert!(text.contains("  Lowest Monthly Price: N/A"));

        let text = PricingReport::new(Language::Pt, params).to_text();
        assert!(text.contains("  Preço Mensal Mais Baixo: N/D"));
    }

    #[test]
    fn test_csv_report_parses_back() {
        let report = PricingReport::new(Language::En, PricingParameters::default());
        let csv_text = report.to_csv().unwrap();

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();

        // 7 inputs, 9 results, 4 expenses, 3 profit entries
        assert_eq!(rows.len(), 23);
        assert_eq!(&rows[0][1], "Max Income");
        assert_eq!(&rows[0][2], "100000");
        assert_eq!(&rows[7][0], "Results");
        assert_eq!(&rows[7][2], "105000");
        assert_eq!(&rows[16][0], "Expenses Breakdown");
    }

    #[test]
    fn test_csv_report_leaves_non_finite_blank() {
        let params = PricingParameters { months: 0, ..Default::default() };
        let csv_text = PricingReport::new(Language::En, params).to_csv().unwrap();
        assert!(csv_text.contains("Results,Lowest Monthly Price,\n"));
    }

    #[test]
    fn test_json_report() {
        let params = PricingParameters { tax_rate_percent: 100.0, ..Default::default() };
        let json = PricingReport::new(Language::Pt, params).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["language"], "pt");
        assert_eq!(value["parameters"]["months"], 12);
        assert!(value["metrics"]["lowest_price"].is_null());
        assert_eq!(value["expenses_breakdown"]["entries"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_report_format_file_names() {
        assert_eq!(ReportFormat::Text.file_name(), "nexusoft-saas-pricing-results.txt");
        assert_eq!(ReportFormat::Csv.extension(), "csv");
        assert_eq!(ReportFormat::Json.extension(), "json");
    }

    #[test]
    fn test_render_dispatches_by_format() {
        let report = PricingReport::new(Language::En, PricingParameters::default());
        assert_eq!(report.render(ReportFormat::Text).unwrap(), report.to_text());
        assert!(report.render(ReportFormat::Csv).unwrap().starts_with("section,label,value\n"));
        assert!(report.render(ReportFormat::Json).unwrap().starts_with('{'));
    }
}
