//! Plain-text layer views.
//!
//! DESIGN
//! ======
//! Each view is a pure function from data to a `String`. Views hold no
//! state: the dashboard passes in whatever view-local selection applies
//! (insight category, expanded cards, comprehensive tab) and the navigator
//! state for the sidebar.

pub mod comprehensive;
pub mod insights;
pub mod sidebar;
pub mod snapshot;

pub use comprehensive::ComprehensiveTab;

const RULE_WIDTH: usize = 72;

/// Section heading underlined to the heading's width.
pub(crate) fn heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');
}

pub(crate) fn rule(out: &mut String) {
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
