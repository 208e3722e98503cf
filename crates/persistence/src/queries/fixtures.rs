// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Fixture Store accessor.
//!
//! Read-only views over persisted fixtures, joined with their
//! gameweek numbers so calculators never need a second lookup.

use crate::data_models::FixtureRow;
use crate::diesel_schema::{fixtures, gameweeks};
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::{Fixture, FixtureRecord};

type FixtureRecordTuple = (i32, i64, i64, i64, Option<f64>, Option<f64>);

fn into_record(row: FixtureRecordTuple) -> FixtureRecord {
    let (gameweek_number, division_id, home_team_id, away_team_id, home_score, away_score) = row;
    FixtureRecord {
        gameweek_number,
        division_id,
        home_team_id,
        away_team_id,
        home_score,
        away_score,
    }
}

/// Returns every fixture record in a season, ordered by gameweek.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn season_fixture_records(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<FixtureRecord>, PersistenceError> {
    let rows = fixtures::table
        .inner_join(gameweeks::table)
        .filter(gameweeks::season_id.eq(season_id))
        .order(gameweeks::number.asc())
        .select((
            gameweeks::number,
            fixtures::division_id,
            fixtures::home_team_id,
            fixtures::away_team_id,
            fixtures::home_score,
            fixtures::away_score,
        ))
        .load::<FixtureRecordTuple>(conn)?;
    Ok(rows.into_iter().map(into_record).collect())
}

/// Returns a team's fixture records in a season, ordered by gameweek.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn team_fixture_records(
    conn: &mut SqliteConnection,
    season_id: i64,
    team_id: i64,
) -> Result<Vec<FixtureRecord>, PersistenceError> {
    let rows = fixtures::table
        .inner_join(gameweeks::table)
        .filter(gameweeks::season_id.eq(season_id))
        .filter(
            fixtures::home_team_id
                .eq(team_id)
                .or(fixtures::away_team_id.eq(team_id)),
        )
        .order(gameweeks::number.asc())
        .select((
            gameweeks::number,
            fixtures::division_id,
            fixtures::home_team_id,
            fixtures::away_team_id,
            fixtures::home_score,
            fixtures::away_score,
        ))
        .load::<FixtureRecordTuple>(conn)?;
    Ok(rows.into_iter().map(into_record).collect())
}

/// Returns every fixture record in one gameweek.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn gameweek_fixture_records(
    conn: &mut SqliteConnection,
    gameweek_id: i64,
) -> Result<Vec<FixtureRecord>, PersistenceError> {
    let rows = fixtures::table
        .inner_join(gameweeks::table)
        .filter(fixtures::gameweek_id.eq(gameweek_id))
        .select((
            gameweeks::number,
            fixtures::division_id,
            fixtures::home_team_id,
            fixtures::away_team_id,
            fixtures::home_score,
            fixtures::away_score,
        ))
        .load::<FixtureRecordTuple>(conn)?;
    Ok(rows.into_iter().map(into_record).collect())
}

/// Returns a fixture entity by ID.
///
/// # Errors
///
/// Returns `NotFound` if the fixture does not exist.
pub fn fixture(conn: &mut SqliteConnection, fixture_id: i64) -> Result<Fixture, PersistenceError> {
    Ok(fixtures::table
        .filter(fixtures::fixture_id.eq(fixture_id))
        .select(FixtureRow::as_select())
        .first::<FixtureRow>(conn)?
        .into())
}

/// Returns the fixture entities for one gameweek and division.
///
/// This is the lookup surface the score-sheet upload matches parsed
/// lines against.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn fixtures_for_gameweek_division(
    conn: &mut SqliteConnection,
    gameweek_id: i64,
    division_id: i64,
) -> Result<Vec<Fixture>, PersistenceError> {
    Ok(fixtures::table
        .filter(fixtures::gameweek_id.eq(gameweek_id))
        .filter(fixtures::division_id.eq(division_id))
        .select(FixtureRow::as_select())
        .load::<FixtureRow>(conn)?
        .into_iter()
        .map(Fixture::from)
        .collect())
}

/// Returns every fixture entity in a season paired with its gameweek
/// number, ordered by gameweek.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn season_fixtures_with_weeks(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<(Fixture, i32)>, PersistenceError> {
    let rows = fixtures::table
        .inner_join(gameweeks::table)
        .filter(gameweeks::season_id.eq(season_id))
        .order((gameweeks::number.asc(), fixtures::division_id.asc()))
        .select((FixtureRow::as_select(), gameweeks::number))
        .load::<(FixtureRow, i32)>(conn)?;
    Ok(rows
        .into_iter()
        .map(|(row, number)| (Fixture::from(row), number))
        .collect())
}

/// Returns whether a fixture already exists for the pairing in the
/// given gameweek.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn fixture_exists(
    conn: &mut SqliteConnection,
    gameweek_id: i64,
    home_team_id: i64,
    away_team_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = fixtures::table
        .filter(fixtures::gameweek_id.eq(gameweek_id))
        .filter(fixtures::home_team_id.eq(home_team_id))
        .filter(fixtures::away_team_id.eq(away_team_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}
