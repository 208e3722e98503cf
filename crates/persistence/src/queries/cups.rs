// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{
    CupCompetitionRow, CupGroupMatchRow, CupGroupRow, CupGroupTeamRow, CupMatchRow, CupRoundRow,
};
use crate::diesel_schema::{
    cup_competitions, cup_group_matches, cup_group_teams, cup_groups, cup_matches, cup_rounds,
};
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::{CupCompetition, CupGroup, CupGroupMatch, CupGroupTeam, CupMatch, CupRound};

/// Returns a cup competition by ID.
///
/// # Errors
///
/// Returns `NotFound` if the competition does not exist.
pub fn cup(conn: &mut SqliteConnection, cup_id: i64) -> Result<CupCompetition, PersistenceError> {
    cup_competitions::table
        .filter(cup_competitions::cup_id.eq(cup_id))
        .select(CupCompetitionRow::as_select())
        .first::<CupCompetitionRow>(conn)?
        .into_domain()
}

/// Returns a season's cup competitions.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn cups_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<CupCompetition>, PersistenceError> {
    cup_competitions::table
        .filter(cup_competitions::season_id.eq(season_id))
        .order(cup_competitions::cup_id.asc())
        .select(CupCompetitionRow::as_select())
        .load::<CupCompetitionRow>(conn)?
        .into_iter()
        .map(CupCompetitionRow::into_domain)
        .collect()
}

/// Returns a competition's groups in display order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn groups_for_cup(
    conn: &mut SqliteConnection,
    cup_id: i64,
) -> Result<Vec<CupGroup>, PersistenceError> {
    Ok(cup_groups::table
        .filter(cup_groups::cup_id.eq(cup_id))
        .order(cup_groups::sort_order.asc())
        .select(CupGroupRow::as_select())
        .load::<CupGroupRow>(conn)?
        .into_iter()
        .map(CupGroup::from)
        .collect())
}

/// Returns a group's roster.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn roster_for_group(
    conn: &mut SqliteConnection,
    group_id: i64,
) -> Result<Vec<CupGroupTeam>, PersistenceError> {
    Ok(cup_group_teams::table
        .filter(cup_group_teams::group_id.eq(group_id))
        .order(cup_group_teams::id.asc())
        .select(CupGroupTeamRow::as_select())
        .load::<CupGroupTeamRow>(conn)?
        .into_iter()
        .map(CupGroupTeam::from)
        .collect())
}

/// Returns a group's matches.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn matches_for_group(
    conn: &mut SqliteConnection,
    group_id: i64,
) -> Result<Vec<CupGroupMatch>, PersistenceError> {
    Ok(cup_group_matches::table
        .filter(cup_group_matches::group_id.eq(group_id))
        .order(cup_group_matches::id.asc())
        .select(CupGroupMatchRow::as_select())
        .load::<CupGroupMatchRow>(conn)?
        .into_iter()
        .map(CupGroupMatch::from)
        .collect())
}

/// Returns every group match sourced from the given gameweek.
///
/// Used by the score fan-out to find group matches a freshly scored
/// fixture may affect.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn group_matches_for_gameweek(
    conn: &mut SqliteConnection,
    gameweek_id: i64,
) -> Result<Vec<CupGroupMatch>, PersistenceError> {
    Ok(cup_group_matches::table
        .filter(cup_group_matches::gameweek_id.eq(gameweek_id))
        .select(CupGroupMatchRow::as_select())
        .load::<CupGroupMatchRow>(conn)?
        .into_iter()
        .map(CupGroupMatch::from)
        .collect())
}

/// Returns a competition's rounds in stage order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn rounds_for_cup(
    conn: &mut SqliteConnection,
    cup_id: i64,
) -> Result<Vec<CupRound>, PersistenceError> {
    Ok(cup_rounds::table
        .filter(cup_rounds::cup_id.eq(cup_id))
        .order(cup_rounds::sort_order.asc())
        .select(CupRoundRow::as_select())
        .load::<CupRoundRow>(conn)?
        .into_iter()
        .map(CupRound::from)
        .collect())
}

/// Returns every round with a leg sourced from the given gameweek.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn rounds_touching_gameweek(
    conn: &mut SqliteConnection,
    gameweek_id: i64,
) -> Result<Vec<CupRound>, PersistenceError> {
    Ok(cup_rounds::table
        .filter(
            cup_rounds::first_leg_gameweek_id
                .eq(gameweek_id)
                .or(cup_rounds::second_leg_gameweek_id.eq(gameweek_id)),
        )
        .select(CupRoundRow::as_select())
        .load::<CupRoundRow>(conn)?
        .into_iter()
        .map(CupRound::from)
        .collect())
}

/// Returns a round's matches.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn matches_for_round(
    conn: &mut SqliteConnection,
    round_id: i64,
) -> Result<Vec<CupMatch>, PersistenceError> {
    Ok(cup_matches::table
        .filter(cup_matches::round_id.eq(round_id))
        .order(cup_matches::match_id.asc())
        .select(CupMatchRow::as_select())
        .load::<CupMatchRow>(conn)?
        .into_iter()
        .map(CupMatch::from)
        .collect())
}
