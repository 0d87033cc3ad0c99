//! Assessment record: the data handed to the three layer views.
//!
//! Field names serialize in camelCase so records exported by the web
//! dashboard load unchanged.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::navigator::Layer;

// =============================================================================
// VOCABULARIES
// =============================================================================

/// Four-step health rating shared by findings and quick stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Optimal,
    Good,
    Concerning,
    Critical,
}

impl Severity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Good => "good",
            Self::Concerning => "concerning",
            Self::Critical => "critical",
        }
    }
}

/// Direction a finding has moved since the previous assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingTrend {
    Improving,
    Stable,
    Declining,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

// =============================================================================
// LAYER 1
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFinding {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub icon: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<FindingTrend>,
}

/// A recommended next step shown on the snapshot layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmediateAction {
    pub id: String,
    pub priority: Priority,
    pub action: String,
    pub timeframe: String,
    pub category: String,
    pub icon: String,
}

// =============================================================================
// LAYER 2
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedInsight {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ray_peat_context: Option<String>,
    pub significance: String,
    pub related_biomarkers: Vec<String>,
    pub action_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curiosity_gap: Option<String>,
}

// =============================================================================
// LAYER 3
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveData {
    pub full_analysis: String,
    pub research_references: Vec<ResearchReference>,
    pub technical_details: Vec<TechnicalDetail>,
    pub biomarker_correlations: Vec<BiomarkerCorrelation>,
    pub historical_trends: Vec<HistoricalTrend>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchReference {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub relevance: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetail {
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    pub methodology: String,
    /// Percent, 0–100.
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerCorrelation {
    pub biomarker1: String,
    pub biomarker2: String,
    /// Pearson coefficient in [-1, 1].
    pub correlation: f64,
    pub significance: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalTrend {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub metric: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub evidence: String,
    pub difficulty: Difficulty,
    pub timeline: String,
    pub expected_outcome: String,
}

// =============================================================================
// LAYER PROGRESS
// =============================================================================

/// Per-layer engagement bookkeeping for one session.
///
/// Time spent is counted in whole seconds, one per navigator tick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerProgress {
    pub layer1_viewed: bool,
    pub layer2_viewed: bool,
    pub layer3_viewed: bool,
    pub layer1_time_spent: u64,
    pub layer2_time_spent: u64,
    pub layer3_time_spent: u64,
    /// Insight ids currently expanded, in expansion order.
    pub expanded_cards: Vec<String>,
    #[serde(rename = "downloadedPDF")]
    pub downloaded_pdf: bool,
    pub booked_consultation: bool,
}

impl LayerProgress {
    pub fn mark_viewed(&mut self, layer: Layer) {
        *self.viewed_mut(layer) = true;
    }

    #[must_use]
    pub fn viewed(&self, layer: Layer) -> bool {
        match layer {
            Layer::Snapshot => self.layer1_viewed,
            Layer::Insights => self.layer2_viewed,
            Layer::Comprehensive => self.layer3_viewed,
        }
    }

    pub fn add_second(&mut self, layer: Layer) {
        let slot = self.time_spent_mut(layer);
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub fn time_spent(&self, layer: Layer) -> u64 {
        match layer {
            Layer::Snapshot => self.layer1_time_spent,
            Layer::Insights => self.layer2_time_spent,
            Layer::Comprehensive => self.layer3_time_spent,
        }
    }

    /// Expand a collapsed card or collapse an expanded one. Returns whether
    /// the card is expanded afterwards.
    pub fn toggle_card(&mut self, id: &str) -> bool {
        if let Some(pos) = self.expanded_cards.iter().position(|c| c == id) {
            self.expanded_cards.remove(pos);
            false
        } else {
            self.expanded_cards.push(id.to_owned());
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_cards.iter().any(|c| c == id)
    }

    fn viewed_mut(&mut self, layer: Layer) -> &mut bool {
        match layer {
            Layer::Snapshot => &mut self.layer1_viewed,
            Layer::Insights => &mut self.layer2_viewed,
            Layer::Comprehensive => &mut self.layer3_viewed,
        }
    }

    fn time_spent_mut(&mut self, layer: Layer) -> &mut u64 {
        match layer {
            Layer::Snapshot => &mut self.layer1_time_spent,
            Layer::Insights => &mut self.layer2_time_spent,
            Layer::Comprehensive => &mut self.layer3_time_spent,
        }
    }
}

// =============================================================================
// ASSESSMENT
// =============================================================================

/// A complete bioenergetic assessment. Scores are on a 0–100 scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAssessment {
    pub id: String,
    pub user_id: String,
    pub assessment_type: String,
    pub status: String,
    pub overall_score: f64,
    pub energy_level: f64,
    pub metabolic_health: f64,
    pub stress_level: f64,
    pub thyroid_function: f64,
    pub mitochondrial_health: f64,
    pub hormonal_balance: f64,
    pub inflammation_level: f64,
    pub key_findings: Vec<KeyFinding>,
    pub detailed_insights: Vec<DetailedInsight>,
    pub comprehensive_data: ComprehensiveData,
    pub immediate_actions: Vec<ImmediateAction>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub view_count: u32,
    #[serde(default)]
    pub time_spent: u64,
    #[serde(default)]
    pub layer_progress: LayerProgress,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl HealthAssessment {
    #[must_use]
    pub fn insight(&self, id: &str) -> Option<&DetailedInsight> {
        self.detailed_insights.iter().find(|i| i.id == id)
    }

    #[must_use]
    pub fn immediate_action(&self, id: &str) -> Option<&ImmediateAction> {
        self.immediate_actions.iter().find(|a| a.id == id)
    }
}
