//! Layer 1: health snapshot.

use std::fmt::Write;

use super::{heading, rule};
use crate::assessment::{FindingTrend, HealthSnapshot, StatTrend, score_description};

fn stat_arrow(trend: StatTrend) -> &'static str {
    match trend {
        StatTrend::Up => "↑",
        StatTrend::Down => "↓",
        StatTrend::Stable => "→",
    }
}

fn finding_arrow(trend: Option<FindingTrend>) -> &'static str {
    match trend {
        Some(FindingTrend::Improving) => "↑",
        Some(FindingTrend::Declining) => "↓",
        Some(FindingTrend::Stable) | None => "→",
    }
}

#[must_use]
pub fn render(snapshot: &HealthSnapshot) -> String {
    let mut out = String::new();
    heading(&mut out, "Health Snapshot");
    let _ = writeln!(
        out,
        "Overall score: {}/100 ({})\n",
        snapshot.overall_score.round(),
        score_description(snapshot.overall_score)
    );

    for stat in &snapshot.quick_stats {
        let _ = writeln!(
            out,
            "  {:<18} {:>7}  {:<10} {}",
            stat.label,
            stat.value,
            stat.status.label(),
            stat_arrow(stat.trend)
        );
    }

    out.push('\n');
    rule(&mut out);
    out.push_str("Key findings\n");
    for finding in &snapshot.key_findings {
        let measured = match (finding.value, finding.unit.as_deref()) {
            (Some(v), Some(unit)) => format!(" [{v}{unit}]"),
            (Some(v), None) => format!(" [{v}]"),
            _ => String::new(),
        };
        let _ = writeln!(
            out,
            "  {} {} ({}){} {}",
            finding.icon,
            finding.title,
            finding.severity.label(),
            measured,
            finding_arrow(finding.trend)
        );
        let _ = writeln!(out, "      {}", finding.summary);
    }

    rule(&mut out);
    out.push_str("Immediate actions (action <id>)\n");
    for action in &snapshot.immediate_actions {
        let _ = writeln!(
            out,
            "  [{}] {:<6} {} ({})",
            action.id,
            action.priority.label(),
            action.action,
            action.timeframe
        );
    }

    out.push_str("\nNext: `insights` to explore detailed insights.\n");
    out
}
