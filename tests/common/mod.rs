#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};

use matchup_odds::model::{
    Match, MatchFilter, MatchSide, MatchStatus, Score, ScorePair, Scorer, StandingEntry, TeamRef,
};
use matchup_odds::provider::{MatchProvider, ScorersProvider, StandingsProvider};

#[derive(Default)]
pub struct FakeData {
    pub standings: Option<Vec<StandingEntry>>,
    pub head_to_head: Vec<Match>,
    pub recent: HashMap<u32, Vec<Match>>,
    pub failing_teams: HashSet<u32>,
    pub scorers: Option<Vec<Scorer>>,
    pub match_calls: Mutex<Vec<(u32, MatchFilter)>>,
}

impl StandingsProvider for FakeData {
    fn standings(&self, _competition_code: &str) -> Result<Vec<StandingEntry>> {
        self.standings
            .clone()
            .ok_or_else(|| anyhow!("http 503 Service Unavailable"))
    }
}

impl MatchProvider for FakeData {
    fn matches(&self, team_id: u32, filter: &MatchFilter) -> Result<Vec<Match>> {
        self.match_calls
            .lock()
            .expect("calls lock")
            .push((team_id, *filter));
        if self.failing_teams.contains(&team_id) {
            return Err(anyhow!("http 429 Too Many Requests"));
        }
        if filter.opponent_id.is_some() {
            return Ok(self.head_to_head.clone());
        }
        Ok(self.recent.get(&team_id).cloned().unwrap_or_default())
    }
}

impl ScorersProvider for FakeData {
    fn top_scorers(&self, _competition_code: &str, limit: u32) -> Result<Vec<Scorer>> {
        let scorers = self
            .scorers
            .clone()
            .ok_or_else(|| anyhow!("scorers request failed"))?;
        Ok(scorers.into_iter().take(limit as usize).collect())
    }
}

pub fn entry(position: u32, id: u32, name: &str, short_name: Option<&str>) -> StandingEntry {
    StandingEntry {
        position,
        team: TeamRef {
            id,
            name: name.to_string(),
            short_name: short_name.map(|s| s.to_string()),
            crest: Some(format!("https://crests.example/{id}.png")),
        },
    }
}

/// Ten-team table; team ids equal their positions.
pub fn ten_team_table() -> Vec<StandingEntry> {
    let names = [
        ("SE Palmeiras", "Palmeiras"),
        ("CR Flamengo", "Flamengo"),
        ("Botafogo FR", "Botafogo"),
        ("São Paulo FC", "São Paulo"),
        ("Grêmio FBPA", "Grêmio"),
        ("Fluminense FC", "Fluminense"),
        ("CA Mineiro", "Mineiro"),
        ("SC Internacional", "Internacional"),
        ("Cruzeiro EC", "Cruzeiro"),
        ("EC Bahia", "Bahia"),
    ];
    names
        .iter()
        .enumerate()
        .map(|(idx, (name, short))| {
            let pos = idx as u32 + 1;
            entry(pos, pos, name, Some(short))
        })
        .collect()
}

pub fn kickoff(raw: &str) -> Option<DateTime<Utc>> {
    Some(raw.parse::<DateTime<Utc>>().expect("valid kickoff"))
}

pub fn game(home: u32, away: u32, full: (u32, u32), half: Option<(u32, u32)>) -> Match {
    Match {
        id: 0,
        utc_date: None,
        status: MatchStatus::Finished,
        home_team: MatchSide {
            id: Some(home),
            name: None,
        },
        away_team: MatchSide {
            id: Some(away),
            name: None,
        },
        score: Score {
            full_time: ScorePair::new(full.0, full.1),
            half_time: half
                .map(|(h, a)| ScorePair::new(h, a))
                .unwrap_or_default(),
        },
    }
}

pub fn dated(mut m: Match, raw: &str) -> Match {
    m.utc_date = kickoff(raw);
    m
}

pub fn unplayed(home: u32, away: u32, status: MatchStatus) -> Match {
    Match {
        id: 0,
        utc_date: None,
        status,
        home_team: MatchSide {
            id: Some(home),
            name: None,
        },
        away_team: MatchSide {
            id: Some(away),
            name: None,
        },
        score: Score::default(),
    }
}

pub fn scorer(name: &str, team: &str, goals: u32) -> Scorer {
    Scorer {
        name: name.to_string(),
        team: team.to_string(),
        goals,
    }
}
