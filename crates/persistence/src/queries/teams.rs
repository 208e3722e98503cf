// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::TeamRow;
use crate::diesel_schema::teams;
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::{Team, normalize_team_name};

/// Returns every team, ordered by name.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_teams(conn: &mut SqliteConnection) -> Result<Vec<Team>, PersistenceError> {
    Ok(teams::table
        .order(teams::name.asc())
        .select(TeamRow::as_select())
        .load::<TeamRow>(conn)?
        .into_iter()
        .map(Team::from)
        .collect())
}

/// Returns a team by ID.
///
/// # Errors
///
/// Returns `NotFound` if the team does not exist.
pub fn team(conn: &mut SqliteConnection, team_id: i64) -> Result<Team, PersistenceError> {
    Ok(teams::table
        .filter(teams::team_id.eq(team_id))
        .select(TeamRow::as_select())
        .first::<TeamRow>(conn)?
        .into())
}

/// Looks a team up by name.
///
/// The lookup normalizes the input the same way stored names were
/// normalized, so pasted variants match.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn team_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Team>, PersistenceError> {
    let normalized = normalize_team_name(name);
    Ok(teams::table
        .filter(teams::name.eq(normalized))
        .select(TeamRow::as_select())
        .first::<TeamRow>(conn)
        .optional()?
        .map(Team::from))
}
