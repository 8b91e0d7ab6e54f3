use std::fmt;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::model::{
    AnalysisResult, AnalysisStats, Degradation, Match, MatchFilter, PairStatistics, Scorer,
    TeamSummary,
};
use crate::provider::CompetitionData;
use crate::resolve::resolve_team;
use crate::scoring::{MatchupInputs, compute_probabilities};
use crate::stats::analyze_stats;

pub const H2H_WINDOW: usize = 5;
pub const FORM_WINDOW: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    FetchingStandings,
    ResolvingTeams,
    FetchingMatches,
    Computing,
    Done,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AnalysisStage::FetchingStandings => "fetching_standings",
            AnalysisStage::ResolvingTeams => "resolving_teams",
            AnalysisStage::FetchingMatches => "fetching_matches",
            AnalysisStage::Computing => "computing",
            AnalysisStage::Done => "done",
        };
        f.write_str(label)
    }
}

/// Holds no per-request state, so one instance can serve concurrent requests.
pub struct Analyzer<P> {
    provider: P,
    config: AppConfig,
}

impl<P: CompetitionData> Analyzer<P> {
    pub fn new(provider: P, config: AppConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn top_scorers(&self) -> Vec<Scorer> {
        let mut degraded = Vec::new();
        self.fetch_scorers(&mut degraded)
    }

    pub fn run_full_analysis(
        &self,
        team1_name: &str,
        team2_name: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        info!(team1 = team1_name, team2 = team2_name, "analysis requested");
        let competition = self.config.competition_code.as_str();

        enter(AnalysisStage::FetchingStandings);
        let standings = match self.provider.standings(competition) {
            Ok(rows) if !rows.is_empty() => rows,
            Ok(_) => {
                return Err(fail(AnalysisError::StandingsUnavailable {
                    reason: "empty standings table".to_string(),
                }));
            }
            Err(err) => {
                return Err(fail(AnalysisError::StandingsUnavailable {
                    reason: format!("{err:#}"),
                }));
            }
        };

        enter(AnalysisStage::ResolvingTeams);
        let team1 = resolve_team(team1_name, &standings);
        let team2 = resolve_team(team2_name, &standings);
        let (Some(team1), Some(team2)) = (team1, team2) else {
            return Err(fail(AnalysisError::TeamNotFound));
        };
        debug!(team1 = %team1.name, team2 = %team2.name, "teams resolved");

        enter(AnalysisStage::FetchingMatches);
        let mut degraded = Vec::new();
        let h2h_filter = MatchFilter::head_to_head(team2.id);
        let h2h = self.fetch_matches(team1.id, &h2h_filter, &mut degraded);
        let form_filter = MatchFilter::last_finished(FORM_WINDOW);
        let t1_recent = self.fetch_matches(team1.id, &form_filter, &mut degraded);
        let t2_recent = self.fetch_matches(team2.id, &form_filter, &mut degraded);
        let top_scorers = self.fetch_scorers(&mut degraded);

        enter(AnalysisStage::Computing);
        let h2h = last_finished(h2h, H2H_WINDOW);
        let t1_recent = last_finished(t1_recent, FORM_WINDOW as usize);
        let t2_recent = last_finished(t2_recent, FORM_WINDOW as usize);

        let h2h_t1 = analyze_stats(team1.id, Some(h2h.as_slice()));
        let h2h_t2 = h2h_t1.mirrored();
        let form_t1 = analyze_stats(team1.id, Some(t1_recent.as_slice()));
        let form_t2 = analyze_stats(team2.id, Some(t2_recent.as_slice()));

        let probabilities = compute_probabilities(
            &MatchupInputs {
                h2h_team1: &h2h_t1,
                form_team1: &form_t1,
                form_team2: &form_t2,
                position_team1: team1.position,
                position_team2: team2.position,
                total_teams: standings.len(),
            },
            &self.config.weights,
        );

        enter(AnalysisStage::Done);
        info!(
            team1_win = probabilities.team1_win,
            team2_win = probabilities.team2_win,
            draw = probabilities.draw,
            h2h_games = h2h_t1.games,
            degraded = degraded.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            team1: TeamSummary::from(&team1),
            team2: TeamSummary::from(&team2),
            probabilities,
            stats: AnalysisStats {
                current_form: PairStatistics {
                    team1: form_t1,
                    team2: form_t2,
                },
                head_to_head: PairStatistics {
                    team1: h2h_t1,
                    team2: h2h_t2,
                },
            },
            top_scorers,
            degraded,
        })
    }

    fn fetch_matches(
        &self,
        team_id: u32,
        filter: &MatchFilter,
        degraded: &mut Vec<Degradation>,
    ) -> Vec<Match> {
        match self.provider.matches(team_id, filter) {
            Ok(matches) => matches,
            Err(err) => {
                warn!(team_id, error = %format!("{err:#}"), "match history unavailable");
                degraded.push(Degradation::MatchHistory {
                    team_id,
                    reason: format!("{err:#}"),
                });
                Vec::new()
            }
        }
    }

    fn fetch_scorers(&self, degraded: &mut Vec<Degradation>) -> Vec<Scorer> {
        match self
            .provider
            .top_scorers(&self.config.competition_code, self.config.scorers_limit)
        {
            Ok(scorers) => scorers,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "top scorers unavailable");
                degraded.push(Degradation::Scorers {
                    reason: format!("{err:#}"),
                });
                Vec::new()
            }
        }
    }
}

// Undated matches keep their upstream order and sort ahead of dated ones.
pub fn last_finished(matches: Vec<Match>, window: usize) -> Vec<Match> {
    let mut finished: Vec<Match> = matches.into_iter().filter(Match::is_finished).collect();
    finished.sort_by_key(|m| m.utc_date);
    let skip = finished.len().saturating_sub(window);
    finished.split_off(skip)
}

fn enter(stage: AnalysisStage) {
    debug!(%stage, "analysis stage");
}

fn fail(err: AnalysisError) -> AnalysisError {
    match &err {
        AnalysisError::StandingsUnavailable { reason } => {
            warn!(stage = %err.stage(), reason = %reason, "{err}");
        }
        AnalysisError::TeamNotFound => warn!(stage = %err.stage(), "{err}"),
    }
    err
}
