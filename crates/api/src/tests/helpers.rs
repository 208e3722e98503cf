// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RegisterTeamRequest, register_team};
use gaffer_domain::{Division, Season};
use gaffer_persistence::{Persistence, ScoreUpdate, SeasonSpec};
use time::macros::date;

/// A fresh in-memory store with one current season and one division.
pub fn league() -> (Persistence, Season, Division) {
    let mut store = Persistence::new_in_memory().expect("in-memory database should initialize");
    let season = store
        .create_season(&SeasonSpec {
            name: String::from("2025/26"),
            start_date: date!(2025 - 08 - 01),
            end_date: date!(2026 - 05 - 31),
        })
        .expect("season should be created");
    let season_id = season.season_id.expect("created season has an id");
    store
        .set_current_season(season_id)
        .expect("season should become current");
    let division = store
        .create_division(season_id, Division::PREMIER_LEAGUE)
        .expect("division should be created");
    (store, season, division)
}

/// Registers teams through the service layer, returning their ids.
pub fn register_teams(
    store: &mut Persistence,
    season_id: i64,
    division_id: i64,
    names: &[&str],
) -> Vec<i64> {
    names
        .iter()
        .map(|name| {
            register_team(
                store,
                &RegisterTeamRequest {
                    season_id,
                    division_id,
                    name: (*name).to_string(),
                    manager_name: format!("Manager of {name}"),
                },
            )
            .expect("team should register")
            .team_id
        })
        .collect()
}

/// Creates a played fixture directly through the store.
pub fn play_fixture(
    store: &mut Persistence,
    season_id: i64,
    division_id: i64,
    week: i32,
    home: i64,
    away: i64,
    home_score: f64,
    away_score: f64,
) -> i64 {
    let gameweek = store
        .gameweek_by_number(season_id, week)
        .expect("gameweek should exist");
    let gameweek_id = gameweek.gameweek_id.expect("gameweek has an id");
    store
        .insert_fixtures(&[gaffer_domain::Fixture::new(
            gameweek_id,
            division_id,
            home,
            away,
        )])
        .expect("fixture should insert");
    let fixture = store
        .fixtures_for_gameweek_division(gameweek_id, division_id)
        .expect("fixtures should load")
        .into_iter()
        .find(|fixture| fixture.home_team_id == home && fixture.away_team_id == away)
        .expect("inserted fixture should be found");
    let fixture_id = fixture.fixture_id.expect("fixture has an id");
    store
        .record_scores(&[ScoreUpdate {
            fixture_id,
            home_score,
            away_score,
        }])
        .expect("scores should record");
    fixture_id
}
