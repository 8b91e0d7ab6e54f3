use thiserror::Error;

use crate::analysis::AnalysisStage;

/// Failures that abort an analysis. Everything else degrades to empty data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("could not load the competition standings")]
    StandingsUnavailable { reason: String },

    #[error("one or both teams were not found")]
    TeamNotFound,
}

impl AnalysisError {
    pub fn stage(&self) -> AnalysisStage {
        match self {
            AnalysisError::StandingsUnavailable { .. } => AnalysisStage::FetchingStandings,
            AnalysisError::TeamNotFound => AnalysisStage::ResolvingTeams,
        }
    }
}
