//! Derived view data: the layer-1 snapshot and display bands.

use super::model::{DetailedInsight, HealthAssessment, ImmediateAction, KeyFinding, Severity};

/// Category name that selects every insight.
pub const ALL_CATEGORIES: &str = "all";

/// Direction indicator on a quick stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTrend {
    Up,
    Down,
    Stable,
}

/// One headline score on the snapshot layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
    pub status: Severity,
    pub icon: &'static str,
    pub trend: StatTrend,
}

/// Everything the snapshot layer renders.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthSnapshot {
    pub overall_score: f64,
    pub key_findings: Vec<KeyFinding>,
    pub immediate_actions: Vec<ImmediateAction>,
    pub quick_stats: Vec<QuickStat>,
}

impl HealthSnapshot {
    #[must_use]
    pub fn from_assessment(assessment: &HealthAssessment) -> Self {
        let quick_stats = vec![
            higher_is_better("Energy Level", "zap", assessment.energy_level),
            higher_is_better("Metabolic Health", "activity", assessment.metabolic_health),
            stress_stat(assessment.stress_level),
            higher_is_better("Thyroid Function", "heart", assessment.thyroid_function),
        ];
        Self {
            overall_score: assessment.overall_score,
            key_findings: assessment.key_findings.clone(),
            immediate_actions: assessment.immediate_actions.clone(),
            quick_stats,
        }
    }
}

fn score_value(score: f64) -> String {
    format!("{}/100", score.round())
}

fn higher_is_better(label: &'static str, icon: &'static str, score: f64) -> QuickStat {
    let status = if score >= 80.0 {
        Severity::Optimal
    } else if score >= 60.0 {
        Severity::Good
    } else if score >= 40.0 {
        Severity::Concerning
    } else {
        Severity::Critical
    };
    let trend = if score >= 75.0 {
        StatTrend::Up
    } else if score >= 50.0 {
        StatTrend::Stable
    } else {
        StatTrend::Down
    };
    QuickStat { label, value: score_value(score), status, icon, trend }
}

// Stress reads inverted: low is healthy, and a rising trend is bad news.
fn stress_stat(score: f64) -> QuickStat {
    let status = if score <= 20.0 {
        Severity::Optimal
    } else if score <= 40.0 {
        Severity::Good
    } else if score <= 60.0 {
        Severity::Concerning
    } else {
        Severity::Critical
    };
    let trend = if score <= 30.0 {
        StatTrend::Down
    } else if score <= 50.0 {
        StatTrend::Stable
    } else {
        StatTrend::Up
    };
    QuickStat { label: "Stress Level", value: score_value(score), status, icon: "brain", trend }
}

/// Headline wording for the overall score.
#[must_use]
pub fn score_description(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else if score >= 40.0 {
        "Fair"
    } else {
        "Needs Attention"
    }
}

// =============================================================================
// INSIGHT CATEGORIES
// =============================================================================

/// `all` followed by each distinct insight category in first-seen order.
#[must_use]
pub fn insight_categories(insights: &[DetailedInsight]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_owned()];
    for insight in insights {
        if !categories.contains(&insight.category) {
            categories.push(insight.category.clone());
        }
    }
    categories
}

#[must_use]
pub fn filter_insights<'a>(insights: &'a [DetailedInsight], category: &str) -> Vec<&'a DetailedInsight> {
    insights
        .iter()
        .filter(|i| category == ALL_CATEGORIES || i.category == category)
        .collect()
}

// =============================================================================
// COMPREHENSIVE BANDS
// =============================================================================

/// Confidence of a technical measurement (percent).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
    VeryLow,
}

impl ConfidenceBand {
    #[must_use]
    pub fn from_percent(confidence: f64) -> Self {
        if confidence >= 90.0 {
            Self::High
        } else if confidence >= 70.0 {
            Self::Moderate
        } else if confidence >= 50.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::VeryLow => "very low",
        }
    }
}

/// Strength of a biomarker correlation, by absolute coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl CorrelationStrength {
    #[must_use]
    pub fn from_coefficient(correlation: f64) -> Self {
        let abs = correlation.abs();
        if abs >= 0.7 {
            Self::Strong
        } else if abs >= 0.5 {
            Self::Moderate
        } else if abs >= 0.3 {
            Self::Weak
        } else {
            Self::Negligible
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Negligible => "negligible",
        }
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
