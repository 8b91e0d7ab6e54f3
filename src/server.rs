use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::analysis::Analyzer;
use crate::error::AnalysisError;
use crate::model::Scorer;
use crate::provider::CompetitionData;

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    team1: Option<String>,
    team2: Option<String>,
}

pub fn router<P>(analyzer: Arc<Analyzer<P>>) -> Router
where
    P: CompetitionData + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_handler::<P>))
        .route("/analyze", get(analyze_handler::<P>))
        .with_state(analyzer)
}

async fn index_handler<P>(State(analyzer): State<Arc<Analyzer<P>>>) -> Response
where
    P: CompetitionData + Send + Sync + 'static,
{
    let worker = Arc::clone(&analyzer);
    match tokio::task::spawn_blocking(move || worker.top_scorers()).await {
        Ok(scorers) => {
            Html(render_index(&analyzer.config().competition_code, &scorers)).into_response()
        }
        Err(err) => {
            error!(error = %err, "top scorers task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Internal error</h1>".to_string()),
            )
                .into_response()
        }
    }
}

async fn analyze_handler<P>(
    State(analyzer): State<Arc<Analyzer<P>>>,
    Query(params): Query<AnalyzeParams>,
) -> Response
where
    P: CompetitionData + Send + Sync + 'static,
{
    let team1 = non_blank(params.team1);
    let team2 = non_blank(params.team2);
    let (Some(team1), Some(team2)) = (team1, team2) else {
        return error_response(StatusCode::BAD_REQUEST, "team1 and team2 are required");
    };

    let outcome =
        tokio::task::spawn_blocking(move || analyzer.run_full_analysis(&team1, &team2)).await;
    match outcome {
        Ok(Ok(result)) => Json(result).into_response(),
        Ok(Err(err)) => analysis_error_response(&err),
        Err(err) => {
            error!(error = %err, "analysis task failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

fn analysis_error_response(err: &AnalysisError) -> Response {
    match err {
        AnalysisError::StandingsUnavailable { .. } | AnalysisError::TeamNotFound => {
            error_response(StatusCode::NOT_FOUND, &err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn render_index(competition_code: &str, scorers: &[Scorer]) -> String {
    let mut rows = String::new();
    for (idx, scorer) in scorers.iter().enumerate() {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            idx + 1,
            escape_html(&scorer.name),
            escape_html(&scorer.team),
            scorer.goals
        ));
    }
    if scorers.is_empty() {
        rows.push_str("<tr><td colspan=\"4\">Top scorers are unavailable right now.</td></tr>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Matchup odds - {code}</title>
</head>
<body>
<h1>Matchup odds ({code})</h1>
<form action="/analyze" method="get">
<input name="team1" placeholder="Team 1" required>
<input name="team2" placeholder="Team 2" required>
<button type="submit">Analyze</button>
</form>
<h2>Top scorers</h2>
<table>
<thead><tr><th>#</th><th>Player</th><th>Team</th><th>Goals</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
        code = escape_html(competition_code),
        rows = rows
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
