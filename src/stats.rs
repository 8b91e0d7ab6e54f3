use crate::model::{Match, MatchStatistics};

/// Matches without a full-time score on both sides are skipped. A missing
/// half-time score keeps the match in the full-time tally only.
pub fn analyze_stats(team_id: u32, matches: Option<&[Match]>) -> MatchStatistics {
    let mut out = MatchStatistics::default();
    let Some(matches) = matches else {
        return out;
    };

    for m in matches {
        let Some((home, away)) = m.score.full_time.both() else {
            continue;
        };
        let is_home = m.home_team.id == Some(team_id);
        let (scored, conceded) = if is_home { (home, away) } else { (away, home) };

        out.goals_for += scored;
        out.goals_against += conceded;
        if let Some((ht_home, ht_away)) = m.score.half_time.both() {
            if is_home {
                out.goals_for_ht += ht_home;
                out.goals_against_ht += ht_away;
            } else {
                out.goals_for_ht += ht_away;
                out.goals_against_ht += ht_home;
            }
        }

        if scored > conceded {
            out.wins += 1;
        } else if scored == conceded {
            out.draws += 1;
        } else {
            out.losses += 1;
        }
    }

    out.games = out.wins + out.draws + out.losses;
    out.win_rate = rate(out.wins, out.games);
    out
}

impl MatchStatistics {
    pub fn mirrored(&self) -> Self {
        Self {
            games: self.games,
            goals_for: self.goals_against,
            goals_against: self.goals_for,
            goals_for_ht: self.goals_against_ht,
            goals_against_ht: self.goals_for_ht,
            wins: self.losses,
            draws: self.draws,
            losses: self.wins,
            win_rate: rate(self.losses, self.games),
        }
    }
}

fn rate(count: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        count as f64 / games as f64
    }
}
