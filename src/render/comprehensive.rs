//! Layer 3: comprehensive analysis, one tab at a time.

use std::fmt::Write;

use super::{heading, rule};
use crate::assessment::{ComprehensiveData, ConfidenceBand, CorrelationStrength};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComprehensiveTab {
    #[default]
    Analysis,
    Research,
    Technical,
    Correlations,
    Trends,
}

impl ComprehensiveTab {
    pub const ALL: [ComprehensiveTab; 5] = [
        ComprehensiveTab::Analysis,
        ComprehensiveTab::Research,
        ComprehensiveTab::Technical,
        ComprehensiveTab::Correlations,
        ComprehensiveTab::Trends,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Research => "research",
            Self::Technical => "technical",
            Self::Correlations => "correlations",
            Self::Trends => "trends",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Analysis => "Full Analysis",
            Self::Research => "Research",
            Self::Technical => "Technical",
            Self::Correlations => "Correlations",
            Self::Trends => "Trends",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == raw)
    }
}

#[must_use]
pub fn render(data: &ComprehensiveData, tab: ComprehensiveTab) -> String {
    let mut out = String::new();
    heading(&mut out, "Comprehensive Analysis");

    let tabs: Vec<String> = ComprehensiveTab::ALL
        .iter()
        .map(|t| if *t == tab { format!("[{}]", t.label()) } else { t.label().to_owned() })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("  "));
    rule(&mut out);

    match tab {
        ComprehensiveTab::Analysis => {
            for paragraph in data.full_analysis.split('\n').filter(|p| !p.trim().is_empty()) {
                let _ = writeln!(out, "{paragraph}\n");
            }
        }
        ComprehensiveTab::Research => {
            for reference in &data.research_references {
                let _ = writeln!(out, "{} ({}), {}", reference.title, reference.year, reference.author);
                let _ = writeln!(out, "  {}", reference.relevance);
                if let Some(url) = &reference.url {
                    let _ = writeln!(out, "  {url}");
                }
            }
        }
        ComprehensiveTab::Technical => {
            for detail in &data.technical_details {
                let _ = writeln!(
                    out,
                    "{:<34} {:>8} {:<12} {:>3}% ({} confidence)",
                    detail.parameter,
                    detail.value,
                    detail.unit,
                    detail.confidence,
                    ConfidenceBand::from_percent(detail.confidence).label()
                );
                let _ = writeln!(out, "  method: {}", detail.methodology);
            }
        }
        ComprehensiveTab::Correlations => {
            for corr in &data.biomarker_correlations {
                let _ = writeln!(
                    out,
                    "{} ↔ {}: r = {:.2} ({})",
                    corr.biomarker1,
                    corr.biomarker2,
                    corr.correlation,
                    CorrelationStrength::from_coefficient(corr.correlation).label()
                );
                let _ = writeln!(out, "  {}", corr.significance);
            }
        }
        ComprehensiveTab::Trends => {
            for trend in &data.historical_trends {
                let _ = writeln!(out, "{}  {:<24} {}{}", trend.date.date(), trend.metric, trend.value, trend.unit);
            }
        }
    }

    out.push_str("\nNext: `tab <name>`, `download` the PDF report, or `book` a consultation.\n");
    out
}
