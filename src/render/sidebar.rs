//! Journey indicator, session stats and achievement progress.

use std::fmt::Write;

use super::rule;
use crate::navigator::{Achievement, Layer, LayerNavigator, LayerStatus, format_elapsed};

fn status_icon(status: LayerStatus) -> &'static str {
    match status {
        LayerStatus::Completed => "✓",
        LayerStatus::Current => "▶",
        LayerStatus::Upcoming => "○",
    }
}

#[must_use]
pub fn render(nav: &LayerNavigator) -> String {
    let mut out = String::new();
    out.push_str("Your Journey\n");
    for layer in Layer::ALL {
        let _ = writeln!(
            out,
            "  {} Layer {} {:<18} {}",
            status_icon(nav.layer_status(layer)),
            layer.number(),
            layer.label(),
            layer.description()
        );
    }

    let _ = writeln!(
        out,
        "Time {}  |  Layers explored {} / {}  |  Achievements {}",
        format_elapsed(nav.elapsed_secs()),
        nav.layers_explored(),
        Layer::ALL.len(),
        nav.achievements().len()
    );
    if !nav.achievements().is_empty() {
        let titles: Vec<&str> = nav.achievements().iter().map(|a| a.title()).collect();
        let _ = writeln!(out, "Earned: {}", titles.join(", "));
    }
    let locked: Vec<&str> = Achievement::ALL
        .into_iter()
        .filter(|a| !nav.has_achievement(*a))
        .map(Achievement::title)
        .collect();
    if !locked.is_empty() {
        let _ = writeln!(out, "Locked: {}", locked.join(", "));
    }
    rule(&mut out);
    out
}
