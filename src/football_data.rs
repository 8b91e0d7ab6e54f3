use anyhow::{Context, Result};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::http_cache::ResponseCache;
use crate::http_client::build_http_client;
use crate::model::{Match, MatchFilter, Scorer, StandingEntry};
use crate::provider::{MatchProvider, ScorersProvider, StandingsProvider};

/// Blocking client for the football-data.org v4 API.
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    cache: ResponseCache,
}

impl FootballDataClient {
    pub fn new(cfg: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(cfg)?,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            cache: ResponseCache::new(cfg.cache_ttl),
        })
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        }
        .with_context(|| format!("invalid url {raw}"))?;
        self.cache.fetch_text(&self.client, url.as_str())
    }
}

impl StandingsProvider for FootballDataClient {
    fn standings(&self, competition_code: &str) -> Result<Vec<StandingEntry>> {
        let body = self
            .get(&format!("/competitions/{competition_code}/standings"), &[])
            .context("standings request failed")?;
        parse_standings_json(&body)
    }
}

impl MatchProvider for FootballDataClient {
    fn matches(&self, team_id: u32, filter: &MatchFilter) -> Result<Vec<Match>> {
        let body = self
            .get(&format!("/teams/{team_id}/matches"), &filter.query_pairs())
            .context("matches request failed")?;
        parse_matches_json(&body)
    }
}

impl ScorersProvider for FootballDataClient {
    fn top_scorers(&self, competition_code: &str, limit: u32) -> Result<Vec<Scorer>> {
        let body = self
            .get(
                &format!("/competitions/{competition_code}/scorers"),
                &[("limit", limit.to_string())],
            )
            .context("scorers request failed")?;
        parse_scorers_json(&body)
    }
}

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    #[serde(default)]
    standings: Vec<StandingsGroup>,
}

#[derive(Debug, Deserialize)]
struct StandingsGroup {
    #[serde(default)]
    table: Vec<StandingEntry>,
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct ScorersResponse {
    #[serde(default)]
    scorers: Vec<ApiScorer>,
}

#[derive(Debug, Deserialize)]
struct ApiScorer {
    player: NamedRef,
    team: NamedRef,
    #[serde(default)]
    goals: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

/// Table of the first standings group (the overall table).
pub fn parse_standings_json(raw: &str) -> Result<Vec<StandingEntry>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let resp: StandingsResponse =
        serde_json::from_str(trimmed).context("invalid standings json")?;
    Ok(resp
        .standings
        .into_iter()
        .next()
        .map(|group| group.table)
        .unwrap_or_default())
}

pub fn parse_matches_json(raw: &str) -> Result<Vec<Match>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let resp: MatchesResponse = serde_json::from_str(trimmed).context("invalid matches json")?;
    Ok(resp.matches)
}

pub fn parse_scorers_json(raw: &str) -> Result<Vec<Scorer>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let resp: ScorersResponse = serde_json::from_str(trimmed).context("invalid scorers json")?;
    Ok(resp
        .scorers
        .into_iter()
        .map(|s| Scorer {
            name: s.player.name,
            team: s.team.name,
            goals: s.goals.unwrap_or(0),
        })
        .collect())
}
