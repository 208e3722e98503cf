// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{played, season_row, unplayed};
use crate::{rank_division, recent_form, team_record, team_totals};
use gaffer_domain::MatchResult;

#[test]
fn win_plus_draw_totals() {
    // Team 1 scores 80 in a win (opponent 70) and 60 in a draw.
    let fixtures = vec![played(1, 1, 2, 80.0, 70.0), played(2, 3, 1, 60.0, 60.0)];

    let totals = team_totals(1, &fixtures);
    assert_eq!(totals.points, 4);
    assert_eq!(totals.total_score, 140.0);
}

#[test]
fn totals_are_zero_with_no_played_fixtures() {
    let fixtures = vec![unplayed(1, 1, 2), unplayed(2, 3, 1)];

    let totals = team_totals(1, &fixtures);
    assert_eq!(totals.points, 0);
    assert_eq!(totals.total_score, 0.0);
}

#[test]
fn totals_ignore_half_scored_fixtures() {
    let mut half = unplayed(1, 1, 2);
    half.home_score = Some(55.0);
    let fixtures = vec![half, played(2, 1, 3, 40.0, 50.0)];

    let totals = team_totals(1, &fixtures);
    assert_eq!(totals.points, 0);
    assert_eq!(totals.total_score, 40.0);
}

#[test]
fn totals_are_independent_of_fixture_order() {
    let mut fixtures = vec![
        played(1, 1, 2, 80.0, 70.0),
        played(2, 3, 1, 60.0, 60.0),
        played(3, 1, 4, 45.5, 62.0),
    ];
    let forward = team_totals(1, &fixtures);
    fixtures.reverse();
    let reversed = team_totals(1, &fixtures);

    assert_eq!(forward, reversed);
    // points = 3 * wins + 1 * draws
    assert_eq!(forward.points, 3 + 1);
    assert_eq!(forward.total_score, 80.0 + 60.0 + 45.5);
}

#[test]
fn repeated_recalculation_is_idempotent() {
    let fixtures = vec![played(1, 1, 2, 80.0, 70.0), played(2, 3, 1, 60.0, 60.0)];

    let first = team_totals(1, &fixtures);
    let second = team_totals(1, &fixtures);
    assert_eq!(first, second);
}

#[test]
fn record_breaks_down_results() {
    let fixtures = vec![
        played(1, 1, 2, 80.0, 70.0),
        played(2, 3, 1, 60.0, 60.0),
        played(3, 1, 4, 45.0, 62.0),
        unplayed(4, 1, 5),
    ];

    let record = team_record(1, &fixtures);
    assert_eq!(record.played, 3);
    assert_eq!(record.wins, 1);
    assert_eq!(record.draws, 1);
    assert_eq!(record.losses, 1);
    assert_eq!(record.goals_for, 185.0);
    assert_eq!(record.goals_against, 192.0);
    assert_eq!(record.goal_difference, -7.0);
    assert_eq!(record.points, 4);
}

#[test]
fn recent_form_is_newest_first_and_limited() {
    let fixtures = vec![
        played(1, 1, 2, 80.0, 70.0), // W
        played(2, 3, 1, 60.0, 60.0), // D
        played(3, 1, 4, 45.0, 62.0), // L
        played(4, 1, 5, 70.0, 50.0), // W
    ];

    let form = recent_form(1, &fixtures, 3);
    assert_eq!(
        form,
        vec![MatchResult::Win, MatchResult::Loss, MatchResult::Draw]
    );
}

#[test]
fn ranking_sorts_by_points_then_total_score() {
    let rows = vec![
        season_row(1, 10, 500.0),
        season_row(2, 12, 450.0),
        season_row(3, 10, 520.0),
    ];

    let ranked = rank_division(&rows);
    assert_eq!(ranked[0].team_season.team_id, 2);
    assert_eq!(ranked[0].position, 1);
    assert_eq!(ranked[1].team_season.team_id, 3);
    assert_eq!(ranked[1].position, 2);
    assert_eq!(ranked[2].team_season.team_id, 1);
    assert_eq!(ranked[2].position, 3);
}

#[test]
fn exact_ties_share_a_position() {
    let rows = vec![
        season_row(1, 10, 500.0),
        season_row(2, 10, 500.0),
        season_row(3, 8, 600.0),
    ];

    let ranked = rank_division(&rows);
    assert_eq!(ranked[0].position, 1);
    assert_eq!(ranked[1].position, 1);
    // Two teams share first, so the next rank is 3, not 2.
    assert_eq!(ranked[2].position, 3);
    assert_eq!(ranked[2].team_season.team_id, 3);
}

#[test]
fn empty_division_ranks_to_empty() {
    assert!(rank_division(&[]).is_empty());
}
