// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{NewDivision, NewGameweek, NewSeason, format_date};
use crate::diesel_schema::{divisions, gameweeks, seasons};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use diesel::prelude::*;
use gaffer::GAMEWEEKS_PER_SEASON;
use gaffer_domain::{Division, Season};
use tracing::info;

/// What to create a season from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSpec {
    /// Display name, e.g. "2026/27".
    pub name: String,
    /// First day of the season.
    pub start_date: time::Date,
    /// Last day of the season.
    pub end_date: time::Date,
}

/// Inserts a season row plus its full set of placeholder gameweeks.
///
/// Not transactional on its own; callers wrap it. Gameweek deadlines
/// are placeholders spaced a week apart from the season start.
pub(crate) fn insert_season_with_gameweeks(
    conn: &mut SqliteConnection,
    spec: &SeasonSpec,
) -> Result<Season, PersistenceError> {
    let row = NewSeason {
        name: spec.name.clone(),
        start_date: format_date(spec.start_date)?,
        end_date: format_date(spec.end_date)?,
        is_current: 0,
    };
    diesel::insert_into(seasons::table)
        .values(&row)
        .execute(conn)?;
    let season_id = get_last_insert_rowid(conn)?;

    let mut weeks: Vec<NewGameweek> = Vec::new();
    for number in 1..=GAMEWEEKS_PER_SEASON {
        let deadline = spec
            .start_date
            .checked_add(time::Duration::weeks(i64::from(number - 1)))
            .ok_or_else(|| {
                PersistenceError::DataIntegrity(format!(
                    "Deadline overflow for gameweek {number} of season '{}'",
                    spec.name
                ))
            })?;
        weeks.push(NewGameweek {
            season_id,
            number,
            deadline: format_date(deadline)?,
            is_current: 0,
        });
    }
    diesel::insert_into(gameweeks::table)
        .values(&weeks)
        .execute(conn)?;

    info!(season_id, name = %spec.name, "Created season with placeholder gameweeks");

    Ok(Season {
        season_id: Some(season_id),
        name: spec.name.clone(),
        start_date: spec.start_date,
        end_date: spec.end_date,
        is_current: false,
    })
}

/// Creates a season together with its 38 placeholder gameweeks.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is committed then.
pub fn create_season(
    conn: &mut SqliteConnection,
    spec: &SeasonSpec,
) -> Result<Season, PersistenceError> {
    conn.transaction(|conn| insert_season_with_gameweeks(conn, spec))
}

/// Flags a season as the current one, clearing the flag everywhere
/// else. At most one season is current afterwards.
///
/// # Errors
///
/// Returns `NotFound` if the season does not exist; the previous
/// current flag is untouched then.
pub fn set_current_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        diesel::update(seasons::table)
            .set(seasons::is_current.eq(0))
            .execute(conn)?;
        let updated = diesel::update(seasons::table.filter(seasons::season_id.eq(season_id)))
            .set(seasons::is_current.eq(1))
            .execute(conn)?;
        if updated == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Season {season_id} does not exist"
            )));
        }
        Ok(())
    })
}

/// Flags a gameweek as current within its season, clearing the flag
/// on the season's other gameweeks.
///
/// # Errors
///
/// Returns `NotFound` if the gameweek does not exist in the season.
pub fn set_current_gameweek(
    conn: &mut SqliteConnection,
    season_id: i64,
    gameweek_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        diesel::update(gameweeks::table.filter(gameweeks::season_id.eq(season_id)))
            .set(gameweeks::is_current.eq(0))
            .execute(conn)?;
        let updated = diesel::update(
            gameweeks::table
                .filter(gameweeks::gameweek_id.eq(gameweek_id))
                .filter(gameweeks::season_id.eq(season_id)),
        )
        .set(gameweeks::is_current.eq(1))
        .execute(conn)?;
        if updated == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Gameweek {gameweek_id} does not exist in season {season_id}"
            )));
        }
        Ok(())
    })
}

/// Creates a division within a season.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_division(
    conn: &mut SqliteConnection,
    season_id: i64,
    name: &str,
) -> Result<Division, PersistenceError> {
    let row = NewDivision {
        season_id,
        name: name.to_string(),
    };
    diesel::insert_into(divisions::table)
        .values(&row)
        .execute(conn)?;
    let division_id = get_last_insert_rowid(conn)?;
    Ok(Division {
        division_id: Some(division_id),
        season_id,
        name: name.to_string(),
    })
}
