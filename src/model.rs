use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A club resolved against the competition table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub crest: Option<String>,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamRef {
    pub id: u32,
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StandingEntry {
    pub position: u32,
    pub team: TeamRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Cancelled,
    Awarded,
    #[serde(other)]
    Unknown,
}

impl MatchStatus {
    pub fn as_api_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Timed => "TIMED",
            MatchStatus::InPlay => "IN_PLAY",
            MatchStatus::Paused => "PAUSED",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Postponed => "POSTPONED",
            MatchStatus::Suspended => "SUSPENDED",
            MatchStatus::Cancelled => "CANCELLED",
            MatchStatus::Awarded => "AWARDED",
            MatchStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ScorePair {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

impl ScorePair {
    pub fn new(home: u32, away: u32) -> Self {
        Self {
            home: Some(home),
            away: Some(away),
        }
    }

    pub fn both(&self) -> Option<(u32, u32)> {
        Some((self.home?, self.away?))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Score {
    #[serde(rename = "fullTime", default)]
    pub full_time: ScorePair,
    #[serde(rename = "halfTime", default)]
    pub half_time: ScorePair,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchSide {
    // Null while a fixture's participant is still undecided.
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "utcDate", default)]
    pub utc_date: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    #[serde(rename = "homeTeam")]
    pub home_team: MatchSide,
    #[serde(rename = "awayTeam")]
    pub away_team: MatchSide,
    #[serde(default)]
    pub score: Score,
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    pub name: String,
    pub team: String,
    pub goals: u32,
}

/// Query filters for a team's match list. The default value carries no filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub opponent_id: Option<u32>,
    pub status: Option<MatchStatus>,
    pub limit: Option<u32>,
}

impl MatchFilter {
    pub fn head_to_head(opponent_id: u32) -> Self {
        Self {
            opponent_id: Some(opponent_id),
            ..Self::default()
        }
    }

    pub fn last_finished(limit: u32) -> Self {
        Self {
            opponent_id: None,
            status: Some(MatchStatus::Finished),
            limit: Some(limit),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(id) = self.opponent_id {
            out.push(("competitors", id.to_string()));
        }
        if let Some(status) = self.status {
            out.push(("status", status.as_api_str().to_string()));
        }
        if let Some(limit) = self.limit {
            out.push(("limit", limit.to_string()));
        }
        out
    }
}

/// Aggregate over a set of matches, seen from one team's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MatchStatistics {
    pub games: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goals_for_ht: u32,
    pub goals_against_ht: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub crest: Option<String>,
    pub position: u32,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            crest: team.crest.clone(),
            position: team.position,
        }
    }
}

/// Percentages rounded to one decimal; they are not forced to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probabilities {
    pub team1_win: f64,
    pub team2_win: f64,
    pub draw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairStatistics {
    pub team1: MatchStatistics,
    pub team2: MatchStatistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisStats {
    pub current_form: PairStatistics,
    pub head_to_head: PairStatistics,
}

/// Upstream data that was missing and replaced by an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    MatchHistory { team_id: u32, reason: String },
    Scorers { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub team1: TeamSummary,
    pub team2: TeamSummary,
    pub probabilities: Probabilities,
    pub stats: AnalysisStats,
    pub top_scorers: Vec<Scorer>,
    #[serde(skip)]
    pub degraded: Vec<Degradation>,
}
