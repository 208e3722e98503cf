// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{DivisionRow, GameweekRow, SeasonRow};
use crate::diesel_schema::{divisions, gameweeks, seasons};
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::{Division, Gameweek, Season};

/// Returns the season currently flagged as current.
///
/// # Errors
///
/// Returns `NotFound` if no season is current, or a database error.
pub fn current_season(conn: &mut SqliteConnection) -> Result<Season, PersistenceError> {
    seasons::table
        .filter(seasons::is_current.eq(1))
        .select(SeasonRow::as_select())
        .first::<SeasonRow>(conn)?
        .into_domain()
}

/// Returns a season by ID.
///
/// # Errors
///
/// Returns `NotFound` if the season does not exist.
pub fn season(conn: &mut SqliteConnection, season_id: i64) -> Result<Season, PersistenceError> {
    seasons::table
        .filter(seasons::season_id.eq(season_id))
        .select(SeasonRow::as_select())
        .first::<SeasonRow>(conn)?
        .into_domain()
}

/// Returns all seasons, most recent first.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_seasons(conn: &mut SqliteConnection) -> Result<Vec<Season>, PersistenceError> {
    seasons::table
        .order(seasons::start_date.desc())
        .select(SeasonRow::as_select())
        .load::<SeasonRow>(conn)?
        .into_iter()
        .map(SeasonRow::into_domain)
        .collect()
}

/// Returns a season's divisions in display order.
///
/// Order is the fixed name-to-rank lookup, ties broken by insertion
/// (id) order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn divisions_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<Division>, PersistenceError> {
    let mut loaded: Vec<Division> = divisions::table
        .filter(divisions::season_id.eq(season_id))
        .order(divisions::division_id.asc())
        .select(DivisionRow::as_select())
        .load::<DivisionRow>(conn)?
        .into_iter()
        .map(Division::from)
        .collect();
    loaded.sort_by_key(|division| (division.rank(), division.division_id));
    Ok(loaded)
}

/// Returns a division by ID.
///
/// # Errors
///
/// Returns `NotFound` if the division does not exist.
pub fn division(
    conn: &mut SqliteConnection,
    division_id: i64,
) -> Result<Division, PersistenceError> {
    Ok(divisions::table
        .filter(divisions::division_id.eq(division_id))
        .select(DivisionRow::as_select())
        .first::<DivisionRow>(conn)?
        .into())
}

/// Returns a season's gameweeks ordered by number.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn gameweeks_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<Gameweek>, PersistenceError> {
    gameweeks::table
        .filter(gameweeks::season_id.eq(season_id))
        .order(gameweeks::number.asc())
        .select(GameweekRow::as_select())
        .load::<GameweekRow>(conn)?
        .into_iter()
        .map(GameweekRow::into_domain)
        .collect()
}

/// Returns a gameweek by ID.
///
/// # Errors
///
/// Returns `NotFound` if the gameweek does not exist.
pub fn gameweek(
    conn: &mut SqliteConnection,
    gameweek_id: i64,
) -> Result<Gameweek, PersistenceError> {
    gameweeks::table
        .filter(gameweeks::gameweek_id.eq(gameweek_id))
        .select(GameweekRow::as_select())
        .first::<GameweekRow>(conn)?
        .into_domain()
}

/// Returns the gameweek with the given number within a season.
///
/// # Errors
///
/// Returns `NotFound` if no gameweek has that number.
pub fn gameweek_by_number(
    conn: &mut SqliteConnection,
    season_id: i64,
    number: i32,
) -> Result<Gameweek, PersistenceError> {
    gameweeks::table
        .filter(gameweeks::season_id.eq(season_id))
        .filter(gameweeks::number.eq(number))
        .select(GameweekRow::as_select())
        .first::<GameweekRow>(conn)?
        .into_domain()
}
