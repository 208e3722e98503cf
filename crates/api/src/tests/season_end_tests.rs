// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{league, play_fixture, register_teams};
use crate::{EndSeasonRequest, end_season};
use gaffer::TransitionPolicy;
use gaffer_domain::{Division, TitleKind};

fn end_request(season_id: i64) -> EndSeasonRequest {
    EndSeasonRequest {
        season_id,
        name: String::from("2026/27"),
        start_date: String::from("2026-08-01"),
        end_date: String::from("2027-05-31"),
    }
}

#[test]
fn six_team_premier_league_splits_four_and_two() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(
        &mut store,
        season_id,
        division_id,
        &["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"],
    );

    // One decisive round with strictly distinct totals on both sides,
    // so every final position is unique: winners 0, 2, 4 rank 1-3 by
    // total score, losers 1, 3, 5 rank 4-6.
    play_fixture(&mut store, season_id, division_id, 1, ids[0], ids[1], 90.0, 30.0);
    play_fixture(&mut store, season_id, division_id, 1, ids[2], ids[3], 80.0, 20.0);
    play_fixture(&mut store, season_id, division_id, 1, ids[4], ids[5], 70.0, 10.0);

    let outcome = end_season(
        &mut store,
        &end_request(season_id),
        &TransitionPolicy::default(),
    )
    .unwrap();
    assert_eq!(outcome.teams_placed, 6);
    assert_eq!(outcome.titles_awarded, 2);

    let new_divisions = store.divisions(outcome.new_season_id).unwrap();
    assert_eq!(new_divisions.len(), 2);
    assert_eq!(new_divisions[0].name, Division::PREMIER_LEAGUE);
    assert_eq!(new_divisions[1].name, Division::CHAMPIONSHIP);

    let rows = store.team_seasons(outcome.new_season_id).unwrap();
    assert_eq!(rows.len(), 6);
    let premier_count = rows
        .iter()
        .filter(|row| row.division_id == new_divisions[0].division_id.unwrap())
        .count();
    let championship_count = rows
        .iter()
        .filter(|row| row.division_id == new_divisions[1].division_id.unwrap())
        .count();
    assert_eq!(premier_count, 4);
    assert_eq!(championship_count, 2);
    assert!(rows.iter().all(|row| row.points == 0 && row.position.is_none()));
}

#[test]
fn league_titles_go_to_the_top_two_and_never_duplicate() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(&mut store, season_id, division_id, &["Alpha", "Beta"]);

    play_fixture(&mut store, season_id, division_id, 1, ids[0], ids[1], 80.0, 70.0);

    let outcome = end_season(
        &mut store,
        &end_request(season_id),
        &TransitionPolicy::default(),
    )
    .unwrap();
    assert_eq!(outcome.titles_awarded, 2);

    let champion_titles = store.titles(ids[0]).unwrap();
    assert_eq!(champion_titles.len(), 1);
    assert!(matches!(
        champion_titles[0].kind,
        TitleKind::League { .. }
    ));
    assert!(!champion_titles[0].is_runner_up);

    let runner_up_titles = store.titles(ids[1]).unwrap();
    assert_eq!(runner_up_titles.len(), 1);
    assert!(runner_up_titles[0].is_runner_up);

    // Running the title pass again (e.g. a second end attempt against
    // the same final table) must not duplicate titles.
    let second = end_season(
        &mut store,
        &end_request(season_id),
        &TransitionPolicy::default(),
    )
    .unwrap();
    assert_eq!(second.titles_awarded, 0);
    assert_eq!(store.titles(ids[0]).unwrap().len(), 1);
}

#[test]
fn positions_are_persisted_on_the_old_season() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(&mut store, season_id, division_id, &["Alpha", "Beta"]);

    play_fixture(&mut store, season_id, division_id, 1, ids[0], ids[1], 80.0, 70.0);
    end_season(
        &mut store,
        &end_request(season_id),
        &TransitionPolicy::default(),
    )
    .unwrap();

    let alpha = store.team_season(ids[0], season_id).unwrap();
    let beta = store.team_season(ids[1], season_id).unwrap();
    assert_eq!(alpha.position, Some(1));
    assert_eq!(beta.position, Some(2));
}
