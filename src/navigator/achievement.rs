//! Session-scoped engagement milestones.

use serde::{Deserialize, Serialize};

/// Session clock value (seconds) at which `engaged` unlocks.
pub const ENGAGED_AFTER_SECS: u64 = 180;
/// Completed-layer count at which `explorer` unlocks.
pub const EXPLORER_MIN_COMPLETED: usize = 2;
/// Completed-layer count at which `deep_diver` unlocks.
pub const DEEP_DIVER_COMPLETED: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    Engaged,
    Explorer,
    DeepDiver,
    PdfDownloaded,
    ConsultationBooked,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::Engaged,
        Achievement::Explorer,
        Achievement::DeepDiver,
        Achievement::PdfDownloaded,
        Achievement::ConsultationBooked,
    ];

    /// Stable snake_case key, as serialized.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Engaged => "engaged",
            Self::Explorer => "explorer",
            Self::DeepDiver => "deep_diver",
            Self::PdfDownloaded => "pdf_downloaded",
            Self::ConsultationBooked => "consultation_booked",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Engaged => "Engaged",
            Self::Explorer => "Explorer",
            Self::DeepDiver => "Deep Diver",
            Self::PdfDownloaded => "Pdf Downloaded",
            Self::ConsultationBooked => "Consultation Booked",
        }
    }
}

/// Append-only set of earned achievements, kept in unlock order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AchievementSet {
    earned: Vec<Achievement>,
}

impl AchievementSet {
    /// Add `achievement`. Returns `true` only on the first insert.
    pub fn insert(&mut self, achievement: Achievement) -> bool {
        if self.contains(achievement) {
            return false;
        }
        self.earned.push(achievement);
        true
    }

    #[must_use]
    pub fn contains(&self, achievement: Achievement) -> bool {
        self.earned.contains(&achievement)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.earned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.earned.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Achievement> {
        self.earned.clone()
    }
}
