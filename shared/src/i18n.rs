//! # Localization Table
//!
//! Static bilingual labels for every string shown by the pricer.
//! The label set is closed, so lookups are a `match` on `(Language, LabelKey)`
//! compiled into the binary rather than a runtime dictionary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when resolving a language from user or config input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("Unsupported language tag: '{0}' (expected 'en' or 'pt')")]
    UnsupportedLanguage(String),
}

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    /// Short language tag ("en", "pt")
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Name of the language in the language itself, for the selector buttons
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Português",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            _ => Err(I18nError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Every translatable label in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKey {
    Title,
    InputParameters,
    MaxIncome,
    DevelopmentCost,
    HardwareCost,
    MonthlyPrices,
    Taxes,
    ProfitPercentage,
    MonthsOfOperation,
    Results,
    TotalCost,
    MaxProfit,
    MinProfit,
    Roi,
    BreakEven,
    MonthlyRevenue,
    ProfitMargin,
    ExpensesBreakdown,
    ExpensesDistribution,
    ProfitVsCost,
    SaveReport,
    Months,
    LowestPrice,
    LowestPriceToCall,
    Language,
    ExportFormat,
    ExportSuccess,
    ExportFailed,
    NotAvailable,
}

impl LabelKey {
    pub const ALL: [LabelKey; 29] = [
        LabelKey::Title,
        LabelKey::InputParameters,
        LabelKey::MaxIncome,
        LabelKey::DevelopmentCost,
        LabelKey::HardwareCost,
        LabelKey::MonthlyPrices,
        LabelKey::Taxes,
        LabelKey::ProfitPercentage,
        LabelKey::MonthsOfOperation,
        LabelKey::Results,
        LabelKey::TotalCost,
        LabelKey::MaxProfit,
        LabelKey::MinProfit,
        LabelKey::Roi,
        LabelKey::BreakEven,
        LabelKey::MonthlyRevenue,
        LabelKey::ProfitMargin,
        LabelKey::ExpensesBreakdown,
        LabelKey::ExpensesDistribution,
        LabelKey::ProfitVsCost,
        LabelKey::SaveReport,
        LabelKey::Months,
        LabelKey::LowestPrice,
        LabelKey::LowestPriceToCall,
        LabelKey::Language,
        LabelKey::ExportFormat,
        LabelKey::ExportSuccess,
        LabelKey::ExportFailed,
        LabelKey::NotAvailable,
    ];
}

/// Label set for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    language: Language,
}

impl Labels {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Display string for a label key
    pub fn get(&self, key: LabelKey) -> &'static str {
        match self.language {
            Language::En => english(key),
            Language::Pt => portuguese(key),
        }
    }
}

/// Labels for a supported language
pub fn labels_for(language: Language) -> Labels {
    Labels { language }
}

/// Labels for a raw language tag such as "pt"
pub fn labels_for_tag(tag: &str) -> Result<Labels, I18nError> {
    Ok(labels_for(tag.parse()?))
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::Title => "NEXUSOFT SaaS Pricer",
        LabelKey::InputParameters => "Input Parameters",
        LabelKey::MaxIncome => "Max Income",
        LabelKey::DevelopmentCost => "Development Cost",
        LabelKey::HardwareCost => "Hardware Cost",
        LabelKey::MonthlyPrices => "Monthly Prices",
        LabelKey::Taxes => "Taxes (%)",
        LabelKey::ProfitPercentage => "Profit Percentage",
        LabelKey::MonthsOfOperation => "Months of Operation",
        LabelKey::Results => "Results",
        LabelKey::TotalCost => "Total Cost",
        LabelKey::MaxProfit => "Max Profit",
        LabelKey::MinProfit => "Min Profit",
        LabelKey::Roi => "ROI",
        LabelKey::BreakEven => "Break-even",
        LabelKey::MonthlyRevenue => "Monthly Revenue",
        LabelKey::ProfitMargin => "Profit Margin",
        LabelKey::ExpensesBreakdown => "Expenses Breakdown",
        LabelKey::ExpensesDistribution => "Expenses Distribution",
        LabelKey::ProfitVsCost => "Profit vs Cost",
        LabelKey::SaveReport => "Save Report",
        LabelKey::Months => "months",
        LabelKey::LowestPrice => "Lowest Monthly Price",
        LabelKey::LowestPriceToCall => "Lowest Price to Call",
        LabelKey::Language => "Language",
        LabelKey::ExportFormat => "Format",
        LabelKey::ExportSuccess => "Report saved to",
        LabelKey::ExportFailed => "Could not save report",
        LabelKey::NotAvailable => "N/A",
    }
}

fn portuguese(key: LabelKey) -> &'static str {
    match key {
        LabelKey::Title => "Precificador SaaS NEXUSOFT",
        LabelKey::InputParameters => "Parâmetros de Entrada",
        LabelKey::MaxIncome => "Renda Máxima",
        LabelKey::DevelopmentCost => "Custo de Desenvolvimento",
        LabelKey::HardwareCost => "Custo de Hardware",
        LabelKey::MonthlyPrices => "Preços Mensais",
        LabelKey::Taxes => "Impostos (%)",
        LabelKey::ProfitPercentage => "Porcentagem de Lucro",
        LabelKey::MonthsOfOperation => "Meses de Operação",
        LabelKey::Results => "Resultados",
        LabelKey::TotalCost => "Custo Total",
        LabelKey::MaxProfit => "Lucro Máximo",
        LabelKey::MinProfit => "Lucro Mínimo",
        LabelKey::Roi => "ROI",
        LabelKey::BreakEven => "Ponto de Equilíbrio",
        LabelKey::MonthlyRevenue => "Receita Mensal",
        LabelKey::ProfitMargin => "Margem de Lucro",
        LabelKey::ExpensesBreakdown => "Detalhamento de Despesas",
        LabelKey::ExpensesDistribution => "Distribuição de Despesas",
        LabelKey::ProfitVsCost => "Lucro vs Custo",
        LabelKey::SaveReport => "Salvar Relatório",
        LabelKey::Months => "meses",
        LabelKey::LowestPrice => "Preço Mensal Mais Baixo",
        LabelKey::LowestPriceToCall => "Preço Mínimo de Chamada",
        LabelKey::Language => "Idioma",
        LabelKey::ExportFormat => "Formato",
        LabelKey::ExportSuccess => "Relatório salvo em",
        LabelKey::ExportFailed => "Não foi possível salvar o relatório",
        LabelKey::NotAvailable => "N/D",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_is_translated() {
        for language in Language::ALL {
            let labels = labels_for(language);
            for key in LabelKey::ALL {
                assert!(!labels.get(key).trim().is_empty(), "{:?} missing for {}", key, language);
            }
        }
    }

    #[test]
    fn test_known_labels() {
        let en = labels_for(Language::En);
        let pt = labels_for(Language::Pt);

        assert_eq!(en.get(LabelKey::Title), "NEXUSOFT SaaS Pricer");
        assert_eq!(pt.get(LabelKey::Title), "Precificador SaaS NEXUSOFT");
        assert_eq!(en.get(LabelKey::BreakEven), "Break-even");
        assert_eq!(pt.get(LabelKey::BreakEven), "Ponto de Equilíbrio");
        assert_eq!(pt.get(LabelKey::Months), "meses");
        // ROI is the same in both languages
        assert_eq!(en.get(LabelKey::Roi), pt.get(LabelKey::Roi));
    }

    #[test]
    fn test_translations_differ() {
        let en = labels_for(Language::En);
        let pt = labels_for(Language::Pt);
        let differing = LabelKey::ALL.iter().filter(|key| en.get(**key) != pt.get(**key)).count();
        assert_eq!(differing, LabelKey::ALL.len() - 1);
    }

    #[test]
    fn test_parse_language_tags() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" PT ".parse::<Language>().unwrap(), Language::Pt);
        assert_eq!(
            "fr".parse::<Language>(),
            Err(I18nError::UnsupportedLanguage("fr".to_string()))
        );
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_labels_for_tag() {
        assert_eq!(labels_for_tag("pt").unwrap().language(), Language::Pt);
        assert!(labels_for_tag("de").is_err());
    }

    #[test]
    fn test_language_serde_uses_tag() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
