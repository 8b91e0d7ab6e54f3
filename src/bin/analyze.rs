use std::process::ExitCode;

use anyhow::{Context, Result};

use matchup_odds::analysis::Analyzer;
use matchup_odds::config::AppConfig;
use matchup_odds::football_data::FootballDataClient;
use matchup_odds::logging::init_logging;

fn main() -> Result<ExitCode> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_logging();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (Some(team1), Some(team2)) = (parse_arg(&args, "team1"), parse_arg(&args, "team2")) else {
        eprintln!("usage: analyze --team1 <name> --team2 <name>");
        return Ok(ExitCode::from(2));
    };

    let config = AppConfig::from_env();
    let provider = FootballDataClient::new(&config.api)?;
    let analyzer = Analyzer::new(provider, config);

    match analyzer.run_full_analysis(&team1, &team2) {
        Ok(result) => {
            let json = serde_json::to_string_pretty(&result).context("serialize analysis")?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn parse_arg(args: &[String], name: &str) -> Option<String> {
    let flag = format!("--{name}");
    let prefix = format!("--{name}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if *arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    None
}
