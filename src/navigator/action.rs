//! Typed user actions accepted by the navigator.

use crate::assessment::ImmediateAction;

use super::Layer;

/// Everything a layer view can ask the navigator to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardAction {
    /// Journey indicator, "explore insights", "view comprehensive" or "back".
    Navigate(Layer),
    /// An immediate action card on the snapshot layer was chosen.
    ImmediateAction(ImmediateAction),
    /// An insight card on the insights layer was expanded or collapsed.
    ExpandInsight(String),
    DownloadPdf,
    BookConsultation,
}

impl DashboardAction {
    /// Short name used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::ImmediateAction(_) => "immediate_action",
            Self::ExpandInsight(_) => "expand_insight",
            Self::DownloadPdf => "download_pdf",
            Self::BookConsultation => "book_consultation",
        }
    }
}
