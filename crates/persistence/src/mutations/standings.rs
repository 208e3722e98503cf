// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::team_seasons;
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer::TeamTotals;
use tracing::debug;

/// Writes a team's recomputed totals back to its season cache.
///
/// # Errors
///
/// Returns `NotFound` if the team has no record in the season.
pub fn write_team_totals(
    conn: &mut SqliteConnection,
    team_id: i64,
    season_id: i64,
    totals: TeamTotals,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(
        team_seasons::table
            .filter(team_seasons::team_id.eq(team_id))
            .filter(team_seasons::season_id.eq(season_id)),
    )
    .set((
        team_seasons::points.eq(totals.points),
        team_seasons::total_score.eq(totals.total_score),
    ))
    .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Team {team_id} has no record in season {season_id}"
        )));
    }
    debug!(team_id, season_id, points = totals.points, "Wrote team totals");
    Ok(())
}

/// Writes recomputed division positions back, atomically.
///
/// # Errors
///
/// Returns an error if any update fails; the whole batch rolls back
/// then.
pub fn write_positions(
    conn: &mut SqliteConnection,
    season_id: i64,
    positions: &[(i64, i32)],
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        for &(team_id, position) in positions {
            diesel::update(
                team_seasons::table
                    .filter(team_seasons::team_id.eq(team_id))
                    .filter(team_seasons::season_id.eq(season_id)),
            )
            .set(team_seasons::position.eq(Some(position)))
            .execute(conn)?;
        }
        Ok(())
    })
}
