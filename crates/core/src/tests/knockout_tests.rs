// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{played, unplayed};
use crate::{KnockoutOutcome, leg_score_for, sync_and_resolve};
use gaffer_domain::CupMatch;

#[test]
fn away_side_wins_on_aggregate() {
    // First leg 50-40 from the tie's home perspective, second leg
    // 30-45: aggregate home 80, away 85.
    let mut tie = CupMatch::new(1, 10, 20);
    let first_leg = vec![played(5, 10, 20, 50.0, 40.0)];
    let second_leg = vec![played(6, 20, 10, 45.0, 30.0)];

    let outcome = sync_and_resolve(&mut tie, &first_leg, &second_leg);
    assert_eq!(outcome, KnockoutOutcome::AwayAdvanced);
    assert_eq!(tie.aggregate_home_score(), Some(80.0));
    assert_eq!(tie.aggregate_away_score(), Some(85.0));
    assert_eq!(tie.winner_id, Some(20));
}

#[test]
fn missing_second_leg_leaves_winner_unset() {
    let mut tie = CupMatch::new(1, 10, 20);
    let first_leg = vec![played(5, 10, 20, 50.0, 40.0)];
    let second_leg = vec![unplayed(6, 20, 10)];

    let outcome = sync_and_resolve(&mut tie, &first_leg, &second_leg);
    assert_eq!(outcome, KnockoutOutcome::Pending);
    assert_eq!(tie.aggregate_home_score(), Some(50.0));
    assert_eq!(tie.aggregate_away_score(), Some(40.0));
    assert_eq!(tie.winner_id, None);
}

#[test]
fn aggregate_tie_reports_tied_and_sets_no_winner() {
    let mut tie = CupMatch::new(1, 10, 20);
    let first_leg = vec![played(5, 10, 20, 50.0, 40.0)];
    let second_leg = vec![played(6, 20, 10, 40.0, 30.0)];

    let outcome = sync_and_resolve(&mut tie, &first_leg, &second_leg);
    assert_eq!(outcome, KnockoutOutcome::AggregateTied);
    assert_eq!(tie.aggregate_home_score(), Some(80.0));
    assert_eq!(tie.aggregate_away_score(), Some(80.0));
    assert_eq!(tie.winner_id, None);
}

#[test]
fn scores_reorient_to_the_tie_framing() {
    // The tie's home team plays as the league fixture's away side in
    // both legs; its own score must still land in the home slots.
    let mut tie = CupMatch::new(1, 10, 20);
    let first_leg = vec![played(5, 99, 10, 33.0, 61.0), played(5, 20, 98, 44.0, 12.0)];
    let second_leg = vec![played(6, 97, 10, 20.0, 55.0), played(6, 96, 20, 18.0, 30.0)];

    let outcome = sync_and_resolve(&mut tie, &first_leg, &second_leg);
    assert_eq!(tie.first_leg_home_score, Some(61.0));
    assert_eq!(tie.first_leg_away_score, Some(44.0));
    assert_eq!(tie.second_leg_home_score, Some(55.0));
    assert_eq!(tie.second_leg_away_score, Some(30.0));
    assert_eq!(outcome, KnockoutOutcome::HomeAdvanced);
    assert_eq!(tie.winner_id, Some(10));
}

#[test]
fn resolver_recomputes_from_scratch() {
    let mut tie = CupMatch::new(1, 10, 20);
    // Stale values from an earlier sync against fixtures that have
    // since been corrected away.
    tie.first_leg_home_score = Some(99.0);
    tie.second_leg_away_score = Some(99.0);
    tie.winner_id = Some(10);

    let first_leg = vec![played(5, 10, 20, 50.0, 40.0)];
    let second_leg: Vec<gaffer_domain::FixtureRecord> = Vec::new();

    let outcome = sync_and_resolve(&mut tie, &first_leg, &second_leg);
    assert_eq!(outcome, KnockoutOutcome::Pending);
    assert_eq!(tie.first_leg_home_score, Some(50.0));
    assert_eq!(tie.second_leg_home_score, None);
    assert_eq!(tie.second_leg_away_score, None);
    assert_eq!(tie.winner_id, None);
}

#[test]
fn resolver_is_idempotent() {
    let mut tie = CupMatch::new(1, 10, 20);
    let first_leg = vec![played(5, 10, 20, 50.0, 40.0)];
    let second_leg = vec![played(6, 20, 10, 45.0, 30.0)];

    let first = sync_and_resolve(&mut tie, &first_leg, &second_leg);
    let snapshot = tie.clone();
    let second = sync_and_resolve(&mut tie, &first_leg, &second_leg);

    assert_eq!(first, second);
    assert_eq!(tie, snapshot);
}

#[test]
fn winner_iff_both_legs_complete_and_aggregates_differ() {
    let mut tie = CupMatch::new(1, 10, 20);

    // No legs at all.
    assert_eq!(
        sync_and_resolve(&mut tie, &[], &[]),
        KnockoutOutcome::Pending
    );
    assert_eq!(tie.winner_id, None);

    // Both legs, decisive.
    let first_leg = vec![played(5, 10, 20, 50.0, 40.0)];
    let second_leg = vec![played(6, 20, 10, 10.0, 10.0)];
    assert_eq!(
        sync_and_resolve(&mut tie, &first_leg, &second_leg),
        KnockoutOutcome::HomeAdvanced
    );
    assert_eq!(tie.winner_id, Some(10));
}

#[test]
fn leg_score_requires_fully_scored_fixture() {
    let mut half = unplayed(5, 10, 20);
    half.home_score = Some(50.0);

    // A half-scored fixture contributes nothing, even for the side
    // whose score is present.
    assert_eq!(leg_score_for(10, &[half.clone()]), None);
    assert_eq!(leg_score_for(20, &[half]), None);

    assert_eq!(leg_score_for(10, &[played(5, 10, 20, 50.0, 40.0)]), Some(50.0));
    assert_eq!(leg_score_for(30, &[played(5, 10, 20, 50.0, 40.0)]), None);
}
