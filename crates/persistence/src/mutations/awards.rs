// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{ManagerMonthAwardRow, NewManagerMonth, NewManagerMonthAward, NewTitle};
use crate::diesel_schema::{manager_month_awards, manager_months, titles};
use crate::error::PersistenceError;
use crate::queries::awards::title_exists;
use crate::sqlite::get_last_insert_rowid;
use diesel::prelude::*;
use gaffer_domain::{ManagerMonth, ManagerOfTheMonth, Title};
use tracing::info;

/// Creates a manager month. The caller has validated the window.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_manager_month(
    conn: &mut SqliteConnection,
    month: &ManagerMonth,
) -> Result<ManagerMonth, PersistenceError> {
    let row = NewManagerMonth {
        season_id: month.season_id,
        name: month.name.clone(),
        start_gameweek_id: month.start_gameweek_id,
        end_gameweek_id: month.end_gameweek_id,
        winner_id: month.winner_id,
    };
    diesel::insert_into(manager_months::table)
        .values(&row)
        .execute(conn)?;
    let month_id = get_last_insert_rowid(conn)?;
    let mut persisted = month.clone();
    persisted.month_id = Some(month_id);
    Ok(persisted)
}

/// Sets or clears a month's resolved winner.
///
/// # Errors
///
/// Returns `NotFound` if the month does not exist.
pub fn set_month_winner(
    conn: &mut SqliteConnection,
    month_id: i64,
    winner_id: Option<i64>,
) -> Result<(), PersistenceError> {
    let updated =
        diesel::update(manager_months::table.filter(manager_months::month_id.eq(month_id)))
            .set(manager_months::winner_id.eq(winner_id))
            .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Manager month {month_id} does not exist"
        )));
    }
    Ok(())
}

/// Creates or updates a month's award in place.
///
/// One award row per month: if a row exists it is updated when the
/// winner or score changed, otherwise a row is created. Re-running
/// resolution never duplicates an award.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_month_award(
    conn: &mut SqliteConnection,
    month_id: i64,
    team_id: i64,
    total_score: f64,
) -> Result<ManagerOfTheMonth, PersistenceError> {
    conn.transaction(|conn| {
        let existing = manager_month_awards::table
            .filter(manager_month_awards::month_id.eq(month_id))
            .select(ManagerMonthAwardRow::as_select())
            .first::<ManagerMonthAwardRow>(conn)
            .optional()?;

        if let Some(row) = existing {
            #[allow(clippy::float_cmp)]
            let changed = row.team_id != team_id || row.total_score != total_score;
            if changed {
                diesel::update(
                    manager_month_awards::table
                        .filter(manager_month_awards::award_id.eq(row.award_id)),
                )
                .set((
                    manager_month_awards::team_id.eq(team_id),
                    manager_month_awards::total_score.eq(total_score),
                ))
                .execute(conn)?;
                info!(month_id, team_id, "Updated manager of the month award");
            }
            return Ok(ManagerOfTheMonth {
                award_id: Some(row.award_id),
                month_id,
                team_id,
                total_score,
            });
        }

        let new_row = NewManagerMonthAward {
            month_id,
            team_id,
            total_score,
        };
        diesel::insert_into(manager_month_awards::table)
            .values(&new_row)
            .execute(conn)?;
        let award_id = get_last_insert_rowid(conn)?;
        info!(month_id, team_id, "Created manager of the month award");
        Ok(ManagerOfTheMonth {
            award_id: Some(award_id),
            month_id,
            team_id,
            total_score,
        })
    })
}

/// Awards a title if it does not already exist on its natural key.
///
/// # Errors
///
/// Returns an error if the pre-check or insert fails.
///
/// # Returns
///
/// `true` if a row was created, `false` if the title already existed
/// and the call was a no-op.
pub fn award_title(conn: &mut SqliteConnection, title: &Title) -> Result<bool, PersistenceError> {
    conn.transaction(|conn| {
        if title_exists(conn, title)? {
            return Ok(false);
        }
        let row = NewTitle::from_domain(title);
        diesel::insert_into(titles::table)
            .values(&row)
            .execute(conn)?;
        info!(
            team_id = title.team_id,
            season_id = title.season_id,
            kind = title.kind.as_str(),
            is_runner_up = title.is_runner_up,
            "Awarded title"
        );
        Ok(true)
    })
}
