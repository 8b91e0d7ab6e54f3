use crate::model::{MatchStatistics, Probabilities};

const H2H_WEIGHT: f64 = 0.40;
const FORM_WEIGHT: f64 = 0.35;
const TABLE_WEIGHT: f64 = 0.25;

const DEFAULT_H2H_FACTOR: f64 = 0.5;
const DEFAULT_DRAW_PROB: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub head_to_head: f64,
    pub form: f64,
    pub table: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            head_to_head: H2H_WEIGHT,
            form: FORM_WEIGHT,
            table: TABLE_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.head_to_head + self.form + self.table
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorSet {
    pub head_to_head: f64,
    pub form: f64,
    pub table: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchupInputs<'a> {
    pub h2h_team1: &'a MatchStatistics,
    pub form_team1: &'a MatchStatistics,
    pub form_team2: &'a MatchStatistics,
    pub position_team1: u32,
    pub position_team2: u32,
    pub total_teams: usize,
}

/// Head-to-head factors for (team1, team2). They always sum to 1.
pub fn h2h_factors(h2h_team1: &MatchStatistics) -> (f64, f64) {
    let t1 = if h2h_team1.games == 0 {
        DEFAULT_H2H_FACTOR
    } else {
        h2h_team1.win_rate
    };
    (t1, 1.0 - t1)
}

pub fn table_factor(position: u32, total_teams: usize) -> f64 {
    if total_teams == 0 {
        return 0.0;
    }
    let total = total_teams as f64;
    ((total - position as f64) / total).clamp(0.0, 1.0)
}

pub fn power_score(factors: &FactorSet, weights: &ScoringWeights) -> f64 {
    factors.head_to_head * weights.head_to_head
        + factors.form * weights.form
        + factors.table * weights.table
}

pub fn normalize(power_team1: f64, power_team2: f64) -> (f64, f64) {
    let total = power_team1 + power_team2;
    if total > 0.0 {
        (power_team1 / total, power_team2 / total)
    } else {
        (0.5, 0.5)
    }
}

pub fn draw_probability(h2h_team1: &MatchStatistics) -> f64 {
    if h2h_team1.games == 0 {
        DEFAULT_DRAW_PROB
    } else {
        h2h_team1.draws as f64 / h2h_team1.games as f64
    }
}

/// Fraction to percentage, rounded half away from zero to one decimal.
pub fn to_percent(p: f64) -> f64 {
    (p * 1000.0).round() / 10.0
}

pub fn matchup_factors(inputs: &MatchupInputs<'_>) -> (FactorSet, FactorSet) {
    let (h2h_t1, h2h_t2) = h2h_factors(inputs.h2h_team1);
    let team1 = FactorSet {
        head_to_head: h2h_t1,
        form: inputs.form_team1.win_rate,
        table: table_factor(inputs.position_team1, inputs.total_teams),
    };
    let team2 = FactorSet {
        head_to_head: h2h_t2,
        form: inputs.form_team2.win_rate,
        table: table_factor(inputs.position_team2, inputs.total_teams),
    };
    (team1, team2)
}

pub fn probabilities_from(power_team1: f64, power_team2: f64, draw: f64) -> Probabilities {
    let (raw_t1, raw_t2) = normalize(power_team1, power_team2);
    let not_draw = 1.0 - draw;
    Probabilities {
        team1_win: to_percent(raw_t1 * not_draw),
        team2_win: to_percent(raw_t2 * not_draw),
        draw: to_percent(draw),
    }
}

pub fn compute_probabilities(
    inputs: &MatchupInputs<'_>,
    weights: &ScoringWeights,
) -> Probabilities {
    let (team1, team2) = matchup_factors(inputs);
    let power_t1 = power_score(&team1, weights);
    let power_t2 = power_score(&team2, weights);
    probabilities_from(power_t1, power_t2, draw_probability(inputs.h2h_team1))
}
