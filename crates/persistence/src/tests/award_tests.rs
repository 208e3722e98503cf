// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{seed_league, store};
use gaffer_domain::{Division, ManagerMonth, Title, TitleKind};

#[test]
fn title_creation_is_idempotent_on_the_natural_key() {
    let mut store = store();
    let (season, division, registered) =
        seed_league(&mut store, Division::PREMIER_LEAGUE, &["Alpha"]);
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let team_id = registered[0].0.team_id.unwrap();

    let title = Title::new(
        team_id,
        season_id,
        TitleKind::League { division_id },
        false,
    );

    assert!(store.award_title(&title).unwrap());
    assert!(!store.award_title(&title).unwrap());
    assert_eq!(store.titles(team_id).unwrap().len(), 1);
}

#[test]
fn runner_up_is_a_distinct_natural_key() {
    let mut store = store();
    let (season, division, registered) =
        seed_league(&mut store, Division::PREMIER_LEAGUE, &["Alpha"]);
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let team_id = registered[0].0.team_id.unwrap();

    let champion = Title::new(
        team_id,
        season_id,
        TitleKind::League { division_id },
        false,
    );
    let runner_up = Title::new(
        team_id,
        season_id,
        TitleKind::League { division_id },
        true,
    );

    assert!(store.award_title(&champion).unwrap());
    assert!(store.award_title(&runner_up).unwrap());
    assert_eq!(store.titles(team_id).unwrap().len(), 2);
}

#[test]
fn month_award_upsert_never_duplicates() {
    let mut store = store();
    let (season, _, registered) = seed_league(
        &mut store,
        Division::PREMIER_LEAGUE,
        &["Alpha", "Beta"],
    );
    let season_id = season.season_id.unwrap();
    let alpha = registered[0].0.team_id.unwrap();
    let beta = registered[1].0.team_id.unwrap();

    let start = store.gameweek_by_number(season_id, 1).unwrap();
    let end = store.gameweek_by_number(season_id, 4).unwrap();
    let month = store
        .create_manager_month(&ManagerMonth::new(
            season_id,
            String::from("September"),
            start.gameweek_id.unwrap(),
            end.gameweek_id.unwrap(),
        ))
        .unwrap();
    let month_id = month.month_id.unwrap();

    let first = store.upsert_month_award(month_id, alpha, 240.5).unwrap();
    // Re-running with a different computed winner updates in place.
    let second = store.upsert_month_award(month_id, beta, 251.0).unwrap();

    assert_eq!(first.award_id, second.award_id);
    let award = store.month_award(month_id).unwrap().unwrap();
    assert_eq!(award.team_id, beta);
    assert_eq!(award.total_score, 251.0);
    assert_eq!(store.month_awards(season_id).unwrap().len(), 1);
}

#[test]
fn month_winner_can_be_set_and_cleared() {
    let mut store = store();
    let (season, _, registered) =
        seed_league(&mut store, Division::PREMIER_LEAGUE, &["Alpha"]);
    let season_id = season.season_id.unwrap();
    let alpha = registered[0].0.team_id.unwrap();

    let start = store.gameweek_by_number(season_id, 1).unwrap();
    let end = store.gameweek_by_number(season_id, 4).unwrap();
    let month = store
        .create_manager_month(&ManagerMonth::new(
            season_id,
            String::from("September"),
            start.gameweek_id.unwrap(),
            end.gameweek_id.unwrap(),
        ))
        .unwrap();
    let month_id = month.month_id.unwrap();

    store.set_month_winner(month_id, Some(alpha)).unwrap();
    assert_eq!(
        store.manager_month(month_id).unwrap().winner_id,
        Some(alpha)
    );

    store.set_month_winner(month_id, None).unwrap();
    assert_eq!(store.manager_month(month_id).unwrap().winner_id, None);
}
