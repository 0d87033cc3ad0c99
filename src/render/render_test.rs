use std::sync::Arc;

use uuid::Uuid;

use super::*;
use crate::assessment::{HealthSnapshot, LayerProgress, demo_assessment};
use crate::navigator::{Layer, LayerNavigator, NoopObserver};

#[test]
fn heading_is_underlined_to_width() {
    let mut out = String::new();
    heading(&mut out, "Trends");
    assert_eq!(out, "Trends\n======\n");
}

#[test]
fn snapshot_view_lists_stats_findings_and_actions() {
    let text = snapshot::render(&HealthSnapshot::from_assessment(&demo_assessment()));
    assert!(text.contains("Overall score: 78/100 (Good)"));
    assert!(text.contains("Energy Level"));
    assert!(text.contains("85/100"));
    assert!(text.contains("Elevated Stress Markers (concerning) [35ng/mL]"));
    assert!(text.contains("[action-1] high"));
}

#[test]
fn insights_view_shows_details_only_when_expanded() {
    let insights = demo_assessment().detailed_insights;
    let mut progress = LayerProgress::default();

    let collapsed = insights::render(&insights, "all", &progress);
    assert!(collapsed.contains("+ [insight-1] Mitochondrial Energy Production"));
    assert!(!collapsed.contains("Consider adding CoQ10 supplementation"));

    progress.toggle_card("insight-1");
    let expanded = insights::render(&insights, "all", &progress);
    assert!(expanded.contains("- [insight-1]"));
    assert!(expanded.contains("Consider adding CoQ10 supplementation"));
    assert!(expanded.contains("Did you know?"));
}

#[test]
fn insights_view_filters_and_marks_category() {
    let insights = demo_assessment().detailed_insights;
    let text = insights::render(&insights, "hormonal", &LayerProgress::default());
    assert!(text.contains("[hormonal]"));
    assert!(text.contains("insight-2"));
    assert!(!text.contains("insight-1"));
}

#[test]
fn comprehensive_tabs_render_their_section() {
    let data = demo_assessment().comprehensive_data;

    let analysis = comprehensive::render(&data, ComprehensiveTab::Analysis);
    assert!(analysis.contains("[Full Analysis]"));
    assert!(analysis.contains("hypothalamic-pituitary-adrenal"));

    let technical = comprehensive::render(&data, ComprehensiveTab::Technical);
    assert!(technical.contains("Oxygen Consumption Rate"));
    assert!(technical.contains("high confidence"));

    let correlations = comprehensive::render(&data, ComprehensiveTab::Correlations);
    assert!(correlations.contains("r = 0.65 (moderate)"));

    let trends = comprehensive::render(&data, ComprehensiveTab::Trends);
    assert!(trends.contains("2024-02-01"));
}

#[test]
fn tab_parse_accepts_keys_only() {
    assert_eq!(ComprehensiveTab::parse("trends"), Some(ComprehensiveTab::Trends));
    assert_eq!(ComprehensiveTab::parse("Trends"), None);
    assert_eq!(ComprehensiveTab::default(), ComprehensiveTab::Analysis);
}

#[test]
fn sidebar_reflects_navigator_state() {
    let mut nav = LayerNavigator::new(Uuid::new_v4(), Arc::new(NoopObserver));
    nav.go_to_layer(Layer::Insights);
    nav.go_to_layer(Layer::Comprehensive);
    for _ in 0..65 {
        nav.tick();
    }

    let text = sidebar::render(&nav);
    assert!(text.contains("✓ Layer 1"));
    assert!(text.contains("✓ Layer 2"));
    assert!(text.contains("▶ Layer 3"));
    assert!(text.contains("Time 1:05"));
    assert!(text.contains("Layers explored 3 / 3"));
    assert!(text.contains("Earned: Explorer"));
    assert!(text.contains("Locked: Engaged, Deep Diver, Pdf Downloaded, Consultation Booked"));
}

#[test]
fn sidebar_splits_earned_and_locked_achievements() {
    let mut nav = LayerNavigator::new(Uuid::new_v4(), Arc::new(NoopObserver));
    let text = sidebar::render(&nav);
    assert!(!text.contains("Earned:"));
    assert!(text.contains("Locked: Engaged, Explorer, Deep Diver"));

    nav.record_download();
    nav.record_booking();
    let text = sidebar::render(&nav);
    assert!(text.contains("Earned: Pdf Downloaded, Consultation Booked"));
    assert!(text.contains("Locked: Engaged, Explorer, Deep Diver\n"));
}
