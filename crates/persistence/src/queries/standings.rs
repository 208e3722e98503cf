// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::TeamSeasonRow;
use crate::diesel_schema::team_seasons;
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::TeamSeason;

/// Returns a division's table rows in cached standings order
/// (points descending, total score descending).
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn division_table(
    conn: &mut SqliteConnection,
    season_id: i64,
    division_id: i64,
) -> Result<Vec<TeamSeason>, PersistenceError> {
    Ok(team_seasons::table
        .filter(team_seasons::season_id.eq(season_id))
        .filter(team_seasons::division_id.eq(division_id))
        .order((
            team_seasons::points.desc(),
            team_seasons::total_score.desc(),
        ))
        .select(TeamSeasonRow::as_select())
        .load::<TeamSeasonRow>(conn)?
        .into_iter()
        .map(TeamSeason::from)
        .collect())
}

/// Returns every `TeamSeason` row of a season.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn team_seasons_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<TeamSeason>, PersistenceError> {
    Ok(team_seasons::table
        .filter(team_seasons::season_id.eq(season_id))
        .select(TeamSeasonRow::as_select())
        .load::<TeamSeasonRow>(conn)?
        .into_iter()
        .map(TeamSeason::from)
        .collect())
}

/// Returns one team's `TeamSeason` row for a season.
///
/// # Errors
///
/// Returns `NotFound` if the team is not registered in the season.
pub fn team_season(
    conn: &mut SqliteConnection,
    team_id: i64,
    season_id: i64,
) -> Result<TeamSeason, PersistenceError> {
    Ok(team_seasons::table
        .filter(team_seasons::team_id.eq(team_id))
        .filter(team_seasons::season_id.eq(season_id))
        .select(TeamSeasonRow::as_select())
        .first::<TeamSeasonRow>(conn)?
        .into())
}
