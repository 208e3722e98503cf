// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{ManagerMonthAwardRow, ManagerMonthRow, TitleRow};
use crate::diesel_schema::{manager_month_awards, manager_months, titles};
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::{ManagerMonth, ManagerOfTheMonth, Title, TitleKind};

/// Returns a season's manager months.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn months_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<ManagerMonth>, PersistenceError> {
    Ok(manager_months::table
        .filter(manager_months::season_id.eq(season_id))
        .order(manager_months::month_id.asc())
        .select(ManagerMonthRow::as_select())
        .load::<ManagerMonthRow>(conn)?
        .into_iter()
        .map(ManagerMonth::from)
        .collect())
}

/// Returns a manager month by ID.
///
/// # Errors
///
/// Returns `NotFound` if the month does not exist.
pub fn month(conn: &mut SqliteConnection, month_id: i64) -> Result<ManagerMonth, PersistenceError> {
    Ok(manager_months::table
        .filter(manager_months::month_id.eq(month_id))
        .select(ManagerMonthRow::as_select())
        .first::<ManagerMonthRow>(conn)?
        .into())
}

/// Returns a month's award, if one has been materialized.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn award_for_month(
    conn: &mut SqliteConnection,
    month_id: i64,
) -> Result<Option<ManagerOfTheMonth>, PersistenceError> {
    Ok(manager_month_awards::table
        .filter(manager_month_awards::month_id.eq(month_id))
        .select(ManagerMonthAwardRow::as_select())
        .first::<ManagerMonthAwardRow>(conn)
        .optional()?
        .map(ManagerOfTheMonth::from))
}

/// Returns every award in a season, newest month first.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn awards_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<ManagerOfTheMonth>, PersistenceError> {
    Ok(manager_month_awards::table
        .inner_join(manager_months::table)
        .filter(manager_months::season_id.eq(season_id))
        .order(manager_months::start_gameweek_id.desc())
        .select(ManagerMonthAwardRow::as_select())
        .load::<ManagerMonthAwardRow>(conn)?
        .into_iter()
        .map(ManagerOfTheMonth::from)
        .collect())
}

/// Returns a team's titles.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored row
/// is malformed.
pub fn titles_for_team(
    conn: &mut SqliteConnection,
    team_id: i64,
) -> Result<Vec<Title>, PersistenceError> {
    titles::table
        .filter(titles::team_id.eq(team_id))
        .order(titles::season_id.desc())
        .select(TitleRow::as_select())
        .load::<TitleRow>(conn)?
        .into_iter()
        .map(TitleRow::into_domain)
        .collect()
}

/// Returns whether a title already exists on its natural key
/// (team, season, kind, division-or-cup, runner-up flag).
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn title_exists(conn: &mut SqliteConnection, title: &Title) -> Result<bool, PersistenceError> {
    let mut query = titles::table
        .filter(titles::team_id.eq(title.team_id))
        .filter(titles::season_id.eq(title.season_id))
        .filter(titles::kind.eq(title.kind.as_str()))
        .filter(titles::is_runner_up.eq(i32::from(title.is_runner_up)))
        .into_boxed();

    query = match title.kind {
        TitleKind::League { division_id } => query.filter(titles::division_id.eq(division_id)),
        TitleKind::Cup { cup_id } => query.filter(titles::cup_id.eq(cup_id)),
    };

    let count: i64 = query.count().get_result(conn)?;
    Ok(count > 0)
}
