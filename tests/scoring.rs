use matchup_odds::model::MatchStatistics;
use matchup_odds::scoring::{
    FactorSet, MatchupInputs, ScoringWeights, compute_probabilities, draw_probability,
    normalize, power_score, probabilities_from, table_factor,
};

fn form(wins: u32, draws: u32, losses: u32) -> MatchStatistics {
    let games = wins + draws + losses;
    MatchStatistics {
        games,
        wins,
        draws,
        losses,
        win_rate: if games == 0 { 0.0 } else { wins as f64 / games as f64 },
        ..MatchStatistics::default()
    }
}

#[test]
fn weights_sum_to_exactly_one() {
    let w = ScoringWeights::default();
    assert_eq!(w.head_to_head, 0.40);
    assert_eq!(w.form, 0.35);
    assert_eq!(w.table, 0.25);
    assert_eq!(w.head_to_head + w.form + w.table, 1.0);
}

#[test]
fn table_factor_rewards_better_rank() {
    assert!((table_factor(1, 10) - 0.9).abs() < 1e-12);
    assert_eq!(table_factor(10, 10), 0.0);
    assert!(table_factor(1, 20) < 1.0);
    assert!(table_factor(3, 20) > table_factor(4, 20));
}

#[test]
fn zero_power_splits_evenly() {
    assert_eq!(normalize(0.0, 0.0), (0.5, 0.5));
    let p = probabilities_from(0.0, 0.0, 0.0);
    assert_eq!(p.team1_win, 50.0);
    assert_eq!(p.team2_win, 50.0);
}

#[test]
fn draw_share_is_taken_out_before_rounding() {
    let p = probabilities_from(0.6, 0.4, 0.25);
    assert_eq!(p.team1_win, 45.0);
    assert_eq!(p.team2_win, 30.0);
    assert_eq!(p.draw, 25.0);
}

#[test]
fn draw_probability_uses_h2h_frequency() {
    assert_eq!(draw_probability(&MatchStatistics::default()), 0.25);
    assert_eq!(draw_probability(&form(1, 2, 1)), 0.5);
    assert_eq!(draw_probability(&form(3, 0, 0)), 0.0);
}

#[test]
fn power_score_is_weighted_sum() {
    let factors = FactorSet {
        head_to_head: 0.5,
        form: 1.0,
        table: 0.9,
    };
    let power = power_score(&factors, &ScoringWeights::default());
    assert!((power - 0.775).abs() < 1e-12);
}

#[test]
fn leader_in_form_against_bottom_without_history() {
    let no_h2h = MatchStatistics::default();
    let leader = form(5, 0, 0);
    let bottom = form(0, 0, 5);
    let p = compute_probabilities(
        &MatchupInputs {
            h2h_team1: &no_h2h,
            form_team1: &leader,
            form_team2: &bottom,
            position_team1: 1,
            position_team2: 10,
            total_teams: 10,
        },
        &ScoringWeights::default(),
    );
    assert_eq!(p.team1_win, 59.6);
    assert_eq!(p.team2_win, 15.4);
    assert_eq!(p.draw, 25.0);
}

#[test]
fn h2h_factor_is_complementary_when_history_exists() {
    let h2h = form(4, 0, 1);
    let even = form(2, 0, 2);
    let p = compute_probabilities(
        &MatchupInputs {
            h2h_team1: &h2h,
            form_team1: &even,
            form_team2: &even,
            position_team1: 5,
            position_team2: 5,
            total_teams: 10,
        },
        &ScoringWeights::default(),
    );
    // power1 = 0.8*0.4 + 0.5*0.35 + 0.5*0.25 = 0.62, power2 = 0.2*0.4 + 0.3 = 0.38
    assert_eq!(p.draw, 0.0);
    assert_eq!(p.team1_win, 62.0);
    assert_eq!(p.team2_win, 38.0);
}
