//! Built-in demonstration assessment, used when no record file is given.

use time::macros::datetime;

use super::model::{
    BiomarkerCorrelation, ComprehensiveData, DetailedInsight, Difficulty, FindingTrend, HealthAssessment,
    HistoricalTrend, ImmediateAction, KeyFinding, LayerProgress, Priority, Recommendation, ResearchReference,
    Severity, TechnicalDetail,
};

const FULL_ANALYSIS: &str = "\
Your bioenergetic assessment reveals a metabolically healthy individual with excellent thyroid function and strong mitochondrial capacity. The key area for optimization is stress management, which appears to be creating a cascade of inflammatory responses that could impact long-term health outcomes.

Your thyroid function is exceptional, with optimal T3/T4 conversion rates indicating efficient metabolic processes. This is particularly important as thyroid hormones are the master regulators of cellular metabolism and energy production.

The mitochondrial health markers suggest your cells are efficiently producing ATP and managing oxidative stress. This is crucial for maintaining energy levels and supporting cellular repair processes.

However, the elevated stress markers indicate that your hypothalamic-pituitary-adrenal (HPA) axis is under chronic activation. This can lead to disrupted sleep patterns, impaired recovery, and increased inflammation over time.

The inflammatory markers show moderate elevation, which is consistent with chronic stress exposure. This suggests that while your metabolic machinery is functioning well, the stress response is creating downstream effects that could impact optimal health.

Recommendations focus on stress management techniques, sleep optimization, and targeted nutritional interventions to support your already strong metabolic foundation.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[must_use]
pub fn demo_assessment() -> HealthAssessment {
    HealthAssessment {
        id: "assessment-1".into(),
        user_id: "user-1".into(),
        assessment_type: "bioenergetic".into(),
        status: "active".into(),
        overall_score: 78.0,
        energy_level: 85.0,
        metabolic_health: 72.0,
        stress_level: 35.0,
        thyroid_function: 88.0,
        mitochondrial_health: 75.0,
        hormonal_balance: 70.0,
        inflammation_level: 40.0,
        key_findings: key_findings(),
        detailed_insights: detailed_insights(),
        comprehensive_data: comprehensive_data(),
        immediate_actions: immediate_actions(),
        recommendations: vec![Recommendation {
            id: "rec-1".into(),
            category: "stress".into(),
            title: "Stress Management Protocol".into(),
            description: "Implement daily meditation, breathing exercises, and regular stress-reduction activities"
                .into(),
            evidence: "Multiple studies show that consistent stress management can reduce cortisol levels by 20-30%"
                .into(),
            difficulty: Difficulty::Moderate,
            timeline: "2-4 weeks".into(),
            expected_outcome: "Reduced inflammation markers and improved energy levels".into(),
        }],
        view_count: 0,
        time_spent: 0,
        layer_progress: LayerProgress::default(),
        created_at: datetime!(2024-01-15 0:00 UTC),
        updated_at: datetime!(2024-01-15 0:00 UTC),
    }
}

fn key_findings() -> Vec<KeyFinding> {
    vec![
        KeyFinding {
            id: "finding-1".into(),
            title: "Optimal Thyroid Function".into(),
            severity: Severity::Optimal,
            icon: "✨".into(),
            summary: "Your thyroid markers indicate excellent metabolic efficiency and energy production capacity."
                .into(),
            value: Some(88.0),
            unit: Some("%".into()),
            trend: Some(FindingTrend::Improving),
        },
        KeyFinding {
            id: "finding-2".into(),
            title: "Elevated Stress Markers".into(),
            severity: Severity::Concerning,
            icon: "⚠️".into(),
            summary: "Cortisol levels suggest chronic stress response. This may be impacting your sleep quality and recovery."
                .into(),
            value: Some(35.0),
            unit: Some("ng/mL".into()),
            trend: Some(FindingTrend::Stable),
        },
        KeyFinding {
            id: "finding-3".into(),
            title: "Strong Metabolic Flexibility".into(),
            severity: Severity::Good,
            icon: "🔥".into(),
            summary: "Your body efficiently switches between glucose and fat metabolism, indicating good mitochondrial health."
                .into(),
            value: Some(72.0),
            unit: Some("%".into()),
            trend: Some(FindingTrend::Improving),
        },
    ]
}

fn detailed_insights() -> Vec<DetailedInsight> {
    vec![
        DetailedInsight {
            id: "insight-1".into(),
            category: "metabolic".into(),
            title: "Mitochondrial Energy Production".into(),
            description: "Your cellular energy production is functioning well, with strong ATP synthesis capacity. This indicates healthy mitochondrial function and efficient nutrient utilization.".into(),
            ray_peat_context: Some("According to Ray Peat, optimal mitochondrial function requires adequate thyroid hormones, B vitamins, and magnesium. Your results suggest these systems are well-balanced.".into()),
            significance: "Strong mitochondrial function correlates with longevity, mental clarity, and physical resilience. This is a key indicator of overall health.".into(),
            related_biomarkers: strings(&["ATP synthesis", "Oxygen consumption", "Lactate levels"]),
            action_items: strings(&[
                "Continue current nutrition and exercise routine",
                "Consider adding CoQ10 supplementation",
                "Monitor sleep quality for optimal recovery",
            ]),
            curiosity_gap: Some("Did you know that mitochondria contain their own DNA and can multiply when energy demands increase?".into()),
        },
        DetailedInsight {
            id: "insight-2".into(),
            category: "hormonal".into(),
            title: "Thyroid Hormone Optimization".into(),
            description: "Your thyroid function shows excellent T3/T4 conversion rates and proper hormone utilization at the cellular level.".into(),
            ray_peat_context: Some("Ray Peat emphasized that optimal thyroid function requires not just adequate hormone production, but proper conversion of T4 to T3 and cellular uptake.".into()),
            significance: "Optimal thyroid function is the foundation of metabolic health, affecting everything from body temperature to cognitive function.".into(),
            related_biomarkers: strings(&["TSH", "Free T3", "Free T4", "Reverse T3"]),
            action_items: strings(&[
                "Maintain adequate selenium intake",
                "Continue stress management practices",
                "Monitor body temperature trends",
            ]),
            curiosity_gap: None,
        },
        DetailedInsight {
            id: "insight-3".into(),
            category: "inflammatory".into(),
            title: "Inflammatory Balance".into(),
            description: "Your inflammatory markers show moderate elevation, suggesting the need for targeted anti-inflammatory interventions.".into(),
            ray_peat_context: None,
            significance: "Chronic low-grade inflammation can impact energy production and accelerate aging processes.".into(),
            related_biomarkers: strings(&["CRP", "IL-6", "TNF-alpha"]),
            action_items: strings(&[
                "Increase omega-3 fatty acid intake",
                "Consider curcumin supplementation",
                "Evaluate sleep quality and duration",
            ]),
            curiosity_gap: Some("Inflammation can actually be beneficial in small doses - it's how your body repairs and adapts to stress!".into()),
        },
    ]
}

fn comprehensive_data() -> ComprehensiveData {
    ComprehensiveData {
        full_analysis: FULL_ANALYSIS.into(),
        research_references: vec![
            ResearchReference {
                id: "ref-1".into(),
                title: "Thyroid Hormone Action on Mitochondria".into(),
                author: "Harper ME, Seifert EL".into(),
                year: 2008,
                url: Some("https://example.com/thyroid-mitochondria".into()),
                relevance: "Demonstrates the direct relationship between thyroid hormones and mitochondrial biogenesis"
                    .into(),
            },
            ResearchReference {
                id: "ref-2".into(),
                title: "Stress-Induced Inflammation and Metabolic Dysfunction".into(),
                author: "Rohleder N".into(),
                year: 2014,
                url: Some("https://example.com/stress-inflammation".into()),
                relevance: "Shows how chronic stress leads to inflammatory responses and metabolic disruption".into(),
            },
            ResearchReference {
                id: "ref-3".into(),
                title: "Bioenergetic Health Index and Longevity".into(),
                author: "Gonzalez-Freire M, et al.".into(),
                year: 2018,
                url: Some("https://example.com/bioenergetic-longevity".into()),
                relevance: "Establishes the connection between mitochondrial function and healthy aging".into(),
            },
        ],
        technical_details: vec![
            technical("ATP/ADP Ratio", 2.8, "ratio", "HPLC analysis of cellular nucleotides", 92.0),
            technical("Mitochondrial Membrane Potential", 145.0, "mV", "Fluorescence-based measurement", 88.0),
            technical("Oxygen Consumption Rate", 82.0, "pmol/min/µg", "Seahorse XF analyzer", 95.0),
            technical("Cortisol Awakening Response", 18.5, "nmol/L", "Saliva cortisol immunoassay", 90.0),
        ],
        biomarker_correlations: vec![
            correlation(
                "T3",
                "ATP Production",
                0.78,
                "Strong positive correlation indicating efficient thyroid-mediated energy production",
            ),
            correlation(
                "Cortisol",
                "Inflammatory Markers",
                0.65,
                "Moderate positive correlation showing stress-induced inflammation",
            ),
            correlation(
                "Mitochondrial Function",
                "Energy Levels",
                0.82,
                "Very strong correlation between cellular energy production and subjective energy",
            ),
        ],
        historical_trends: vec![
            HistoricalTrend {
                date: datetime!(2024-01-01 0:00 UTC),
                metric: "Overall Health Score".into(),
                value: 72.0,
                unit: "%".into(),
            },
            HistoricalTrend {
                date: datetime!(2024-02-01 0:00 UTC),
                metric: "Overall Health Score".into(),
                value: 75.0,
                unit: "%".into(),
            },
            HistoricalTrend {
                date: datetime!(2024-03-01 0:00 UTC),
                metric: "Overall Health Score".into(),
                value: 78.0,
                unit: "%".into(),
            },
        ],
    }
}

fn technical(parameter: &str, value: f64, unit: &str, methodology: &str, confidence: f64) -> TechnicalDetail {
    TechnicalDetail {
        parameter: parameter.into(),
        value,
        unit: unit.into(),
        methodology: methodology.into(),
        confidence,
    }
}

fn correlation(first: &str, second: &str, correlation: f64, significance: &str) -> BiomarkerCorrelation {
    BiomarkerCorrelation {
        biomarker1: first.into(),
        biomarker2: second.into(),
        correlation,
        significance: significance.into(),
    }
}

fn immediate_actions() -> Vec<ImmediateAction> {
    vec![
        ImmediateAction {
            id: "action-1".into(),
            priority: Priority::High,
            action: "Implement stress management routine".into(),
            timeframe: "This week".into(),
            category: "lifestyle".into(),
            icon: "alert".into(),
        },
        ImmediateAction {
            id: "action-2".into(),
            priority: Priority::Medium,
            action: "Optimize sleep schedule".into(),
            timeframe: "Next 2 weeks".into(),
            category: "recovery".into(),
            icon: "clock".into(),
        },
        ImmediateAction {
            id: "action-3".into(),
            priority: Priority::Low,
            action: "Consider magnesium supplementation".into(),
            timeframe: "This month".into(),
            category: "nutrition".into(),
            icon: "check".into(),
        },
    ]
}
