//! Dashboard host: binds an assessment, a mounted session and view state.
//!
//! DESIGN
//! ======
//! The dashboard plays the hosting page: it owns the immutable assessment,
//! the derived snapshot, and the view-local selections (insight category,
//! comprehensive tab). Commands are validated here, against the assessment
//! and the current layer, before anything is dispatched to the navigator,
//! so the navigator only ever sees well-formed typed actions.

pub mod command;

use crate::assessment::{HealthAssessment, HealthSnapshot, snapshot::ALL_CATEGORIES};
use crate::navigator::{DashboardAction, Layer, NavigatorSnapshot, Session};
use crate::render::{self, ComprehensiveTab};

pub use command::{Command, CommandError, HELP};

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub struct Dashboard {
    assessment: HealthAssessment,
    snapshot: HealthSnapshot,
    session: Session,
    category: String,
    tab: ComprehensiveTab,
}

impl Dashboard {
    #[must_use]
    pub fn new(assessment: HealthAssessment, session: Session) -> Self {
        let snapshot = HealthSnapshot::from_assessment(&assessment);
        Self {
            assessment,
            snapshot,
            session,
            category: ALL_CATEGORIES.to_owned(),
            tab: ComprehensiveTab::default(),
        }
    }

    #[must_use]
    pub fn current_layer(&self) -> Layer {
        self.session.with(|nav| nav.current_layer())
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when the command names an unknown id or
    /// category, or is not available on the current layer. Navigator state
    /// is unchanged in that case.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let output = match command {
            Command::Go(layer) => self.navigate(layer),
            Command::Back => self.navigate(Layer::Snapshot),
            Command::Show => self.render_current(),
            Command::Action(id) => {
                self.require_layer("action", Layer::Snapshot)?;
                let action = self
                    .assessment
                    .immediate_action(&id)
                    .cloned()
                    .ok_or(CommandError::UnknownAction(id))?;
                let text = format!("Action noted: {} ({})", action.action, action.timeframe);
                self.dispatch(DashboardAction::ImmediateAction(action));
                text
            }
            Command::Expand(id) => {
                self.require_layer("expand", Layer::Insights)?;
                if self.assessment.insight(&id).is_none() {
                    return Err(CommandError::UnknownInsight(id));
                }
                self.dispatch(DashboardAction::ExpandInsight(id));
                self.render_current()
            }
            Command::Filter(category) => {
                self.require_layer("filter", Layer::Insights)?;
                let known = category == ALL_CATEGORIES
                    || self.assessment.detailed_insights.iter().any(|i| i.category == category);
                if !known {
                    return Err(CommandError::UnknownCategory(category));
                }
                self.category = category;
                self.render_current()
            }
            Command::Tab(tab) => {
                self.require_layer("tab", Layer::Comprehensive)?;
                self.tab = tab;
                self.render_current()
            }
            Command::Download => {
                self.require_layer("download", Layer::Comprehensive)?;
                self.dispatch(DashboardAction::DownloadPdf);
                "Preparing your PDF report...".to_owned()
            }
            Command::Book => {
                self.require_layer("book", Layer::Comprehensive)?;
                self.dispatch(DashboardAction::BookConsultation);
                "Opening consultation booking...".to_owned()
            }
            Command::Stats => self.session.with(|nav| render::sidebar::render(nav)),
            Command::Export => serde_json::to_string_pretty(&self.session.snapshot())?,
            Command::Help => HELP.to_owned(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }

    /// Sidebar plus the view for the current layer.
    #[must_use]
    pub fn render_current(&self) -> String {
        self.session.with(|nav| {
            let mut out = render::sidebar::render(nav);
            let view = match nav.current_layer() {
                Layer::Snapshot => render::snapshot::render(&self.snapshot),
                Layer::Insights => {
                    render::insights::render(&self.assessment.detailed_insights, &self.category, nav.progress())
                }
                Layer::Comprehensive => render::comprehensive::render(&self.assessment.comprehensive_data, self.tab),
            };
            out.push_str(&view);
            out
        })
    }

    /// Unmount the session and return its final state.
    #[must_use]
    pub fn close(self) -> NavigatorSnapshot {
        self.session.unmount()
    }

    fn navigate(&self, layer: Layer) -> String {
        self.dispatch(DashboardAction::Navigate(layer));
        self.render_current()
    }

    fn dispatch(&self, action: DashboardAction) {
        self.session.with(|nav| nav.dispatch(action));
    }

    fn require_layer(&self, command: &'static str, layer: Layer) -> Result<(), CommandError> {
        if self.current_layer() == layer {
            Ok(())
        } else {
            Err(CommandError::WrongLayer { command, layer })
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
