// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{season_spec, seed_league, store};
use crate::PersistenceError;
use gaffer::GAMEWEEKS_PER_SEASON;
use gaffer_domain::Division;

#[test]
fn creating_a_season_creates_its_gameweeks() {
    let mut store = store();
    let season = store.create_season(&season_spec("2025/26")).unwrap();
    let season_id = season.season_id.unwrap();

    let weeks = store.gameweeks(season_id).unwrap();
    assert_eq!(weeks.len(), usize::try_from(GAMEWEEKS_PER_SEASON).unwrap());
    assert_eq!(weeks.first().unwrap().number, 1);
    assert_eq!(weeks.last().unwrap().number, GAMEWEEKS_PER_SEASON);
    // Placeholder deadlines step a week at a time.
    assert_eq!(
        weeks[1].deadline - weeks[0].deadline,
        time::Duration::weeks(1)
    );
}

#[test]
fn at_most_one_season_is_current() {
    let mut store = store();
    let first = store.create_season(&season_spec("2024/25")).unwrap();
    let second = store.create_season(&season_spec("2025/26")).unwrap();

    store.set_current_season(first.season_id.unwrap()).unwrap();
    store.set_current_season(second.season_id.unwrap()).unwrap();

    let current = store.current_season().unwrap();
    assert_eq!(current.season_id, second.season_id);

    let flagged: Vec<_> = store
        .seasons()
        .unwrap()
        .into_iter()
        .filter(|season| season.is_current)
        .collect();
    assert_eq!(flagged.len(), 1);
}

#[test]
fn setting_a_missing_season_current_fails() {
    let mut store = store();
    assert!(matches!(
        store.set_current_season(999),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn divisions_come_back_in_rank_order() {
    let mut store = store();
    let season = store.create_season(&season_spec("2025/26")).unwrap();
    let season_id = season.season_id.unwrap();

    // Insert out of display order.
    store.create_division(season_id, "League One").unwrap();
    store
        .create_division(season_id, Division::PREMIER_LEAGUE)
        .unwrap();
    store
        .create_division(season_id, Division::CHAMPIONSHIP)
        .unwrap();
    store.create_division(season_id, "Sunday Legends").unwrap();

    let names: Vec<String> = store
        .divisions(season_id)
        .unwrap()
        .into_iter()
        .map(|division| division.name)
        .collect();
    assert_eq!(
        names,
        vec![
            Division::PREMIER_LEAGUE.to_string(),
            Division::CHAMPIONSHIP.to_string(),
            "League One".to_string(),
            "Sunday Legends".to_string(),
        ]
    );
}

#[test]
fn registered_team_starts_zeroed() {
    let mut store = store();
    let (season, division, registered) =
        seed_league(&mut store, Division::PREMIER_LEAGUE, &["Dave's XI"]);
    let (team, team_season) = &registered[0];

    assert!(team.team_id.is_some());
    assert_eq!(team_season.points, 0);
    assert_eq!(team_season.total_score, 0.0);
    assert_eq!(team_season.position, None);
    assert_eq!(team_season.season_id, season.season_id.unwrap());
    assert_eq!(team_season.division_id, division.division_id.unwrap());
}

#[test]
fn team_lookup_normalizes_the_queried_name() {
    let mut store = store();
    let (_, _, registered) =
        seed_league(&mut store, Division::PREMIER_LEAGUE, &["Dave\u{2019}s XI"]);
    let (team, _) = &registered[0];
    assert_eq!(team.name(), "Dave's XI");

    let found = store.team_by_name("  Dave\u{2018}s XI ").unwrap();
    assert_eq!(found.map(|t| t.team_id), Some(team.team_id));
}

#[test]
fn gameweek_by_number_finds_the_right_week() {
    let mut store = store();
    let season = store.create_season(&season_spec("2025/26")).unwrap();
    let season_id = season.season_id.unwrap();

    let week = store.gameweek_by_number(season_id, 17).unwrap();
    assert_eq!(week.number, 17);
    assert!(matches!(
        store.gameweek_by_number(season_id, 99),
        Err(PersistenceError::NotFound(_))
    ));
}
