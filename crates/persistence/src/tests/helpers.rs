// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Persistence, SeasonSpec};
use gaffer_domain::{Division, Season, Team, TeamSeason};
use time::macros::date;

/// A fresh in-memory store.
pub fn store() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

/// A default one-year season spec.
pub fn season_spec(name: &str) -> SeasonSpec {
    SeasonSpec {
        name: String::from(name),
        start_date: date!(2025 - 08 - 01),
        end_date: date!(2026 - 05 - 31),
    }
}

/// Seeds a season with one division and the given team names.
pub fn seed_league(
    store: &mut Persistence,
    division_name: &str,
    team_names: &[&str],
) -> (Season, Division, Vec<(Team, TeamSeason)>) {
    let season = store
        .create_season(&season_spec("2025/26"))
        .expect("season should be created");
    let season_id = season.season_id.expect("created season has an id");
    store
        .set_current_season(season_id)
        .expect("season should become current");

    let division = store
        .create_division(season_id, division_name)
        .expect("division should be created");
    let division_id = division.division_id.expect("created division has an id");

    let registered = team_names
        .iter()
        .map(|name| {
            let team = Team::new(name, format!("Manager of {name}"));
            store
                .register_team(&team, season_id, division_id)
                .expect("team should register")
        })
        .collect();

    (season, division, registered)
}
