//! Layer 2: detailed insights with category filter and expandable cards.

use std::fmt::Write;

use super::{heading, rule};
use crate::assessment::{DetailedInsight, LayerProgress, filter_insights, insight_categories};

#[must_use]
pub fn render(insights: &[DetailedInsight], category: &str, progress: &LayerProgress) -> String {
    let mut out = String::new();
    heading(&mut out, "Detailed Insights");

    let categories: Vec<String> = insight_categories(insights)
        .into_iter()
        .map(|c| if c == category { format!("[{c}]") } else { c })
        .collect();
    let _ = writeln!(out, "Categories: {}\n", categories.join("  "));

    let visible = filter_insights(insights, category);
    if visible.is_empty() {
        out.push_str("  No insights in this category.\n");
    }

    for insight in visible {
        rule(&mut out);
        let expanded = progress.is_expanded(&insight.id);
        let marker = if expanded { "-" } else { "+" };
        let _ = writeln!(out, "{marker} [{}] {} ({})", insight.id, insight.title, insight.category);
        let _ = writeln!(out, "  {}", insight.description);
        if !expanded {
            continue;
        }
        let _ = writeln!(out, "\n  Why it matters: {}", insight.significance);
        if let Some(context) = &insight.ray_peat_context {
            let _ = writeln!(out, "  Bioenergetic context: {context}");
        }
        let _ = writeln!(out, "  Related biomarkers: {}", insight.related_biomarkers.join(", "));
        out.push_str("  Action items:\n");
        for item in &insight.action_items {
            let _ = writeln!(out, "    - {item}");
        }
        if let Some(gap) = &insight.curiosity_gap {
            let _ = writeln!(out, "  Did you know? {gap}");
        }
    }

    out.push_str("\nNext: `expand <id>`, `filter <category>`, or `comprehensive` for the full analysis.\n");
    out
}
