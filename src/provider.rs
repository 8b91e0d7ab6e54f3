use anyhow::Result;

use crate::model::{Match, MatchFilter, Scorer, StandingEntry};

/// Ordered competition table.
pub trait StandingsProvider {
    fn standings(&self, competition_code: &str) -> Result<Vec<StandingEntry>>;
}

pub trait MatchProvider {
    fn matches(&self, team_id: u32, filter: &MatchFilter) -> Result<Vec<Match>>;
}

pub trait ScorersProvider {
    fn top_scorers(&self, competition_code: &str, limit: u32) -> Result<Vec<Scorer>>;
}

/// Everything one analysis needs from upstream.
pub trait CompetitionData: StandingsProvider + MatchProvider + ScorersProvider {}

impl<T> CompetitionData for T where T: StandingsProvider + MatchProvider + ScorersProvider {}
