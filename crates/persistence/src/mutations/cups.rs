// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{
    NewCupCompetition, NewCupGroup, NewCupGroupMatch, NewCupGroupTeam, NewCupMatch, NewCupRound,
};
use crate::diesel_schema::{
    cup_competitions, cup_group_matches, cup_group_teams, cup_groups, cup_matches, cup_rounds,
};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use diesel::prelude::*;
use gaffer_domain::{
    CompetitionFormat, CupCompetition, CupGroup, CupGroupMatch, CupGroupTeam, CupMatch, CupRound,
    group_name,
};
use tracing::info;

/// Creates a cup competition; group-format cups get their empty
/// groups ("Group A"...) in the same transaction.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is committed then.
pub fn create_cup(
    conn: &mut SqliteConnection,
    season_id: i64,
    name: &str,
    format: CompetitionFormat,
) -> Result<(CupCompetition, Vec<CupGroup>), PersistenceError> {
    conn.transaction(|conn| {
        let (has_groups, num_groups, teams_per_group) = match format {
            CompetitionFormat::Groups(config) => (
                1,
                i32::try_from(config.num_groups).unwrap_or(i32::MAX),
                i32::try_from(config.teams_per_group).unwrap_or(i32::MAX),
            ),
            CompetitionFormat::Knockout => (0, 0, 0),
        };
        let row = NewCupCompetition {
            season_id,
            name: name.to_string(),
            has_groups,
            num_groups,
            teams_per_group,
        };
        diesel::insert_into(cup_competitions::table)
            .values(&row)
            .execute(conn)?;
        let cup_id = get_last_insert_rowid(conn)?;

        let mut groups: Vec<CupGroup> = Vec::new();
        if let CompetitionFormat::Groups(config) = format {
            for index in 0..config.num_groups {
                let group_row = NewCupGroup {
                    cup_id,
                    name: group_name(index),
                    sort_order: i32::try_from(index).unwrap_or(i32::MAX) + 1,
                };
                diesel::insert_into(cup_groups::table)
                    .values(&group_row)
                    .execute(conn)?;
                let group_id = get_last_insert_rowid(conn)?;
                groups.push(CupGroup {
                    group_id: Some(group_id),
                    cup_id,
                    name: group_name(index),
                    order: i32::try_from(index).unwrap_or(i32::MAX) + 1,
                });
            }
        }

        info!(cup_id, name, groups = groups.len(), "Created cup competition");

        Ok((
            CupCompetition {
                cup_id: Some(cup_id),
                season_id,
                name: name.to_string(),
                format,
            },
            groups,
        ))
    })
}

/// Adds a team to a group's roster.
///
/// The caller validates roster capacity and duplicates against the
/// competition's group configuration first.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_group_team(
    conn: &mut SqliteConnection,
    group_id: i64,
    team_id: i64,
) -> Result<CupGroupTeam, PersistenceError> {
    let row = NewCupGroupTeam { group_id, team_id };
    diesel::insert_into(cup_group_teams::table)
        .values(&row)
        .execute(conn)?;
    let id = get_last_insert_rowid(conn)?;
    Ok(CupGroupTeam {
        id: Some(id),
        group_id,
        team_id,
    })
}

/// Inserts a batch of group matches atomically.
///
/// # Errors
///
/// Returns an error if any insert fails; the whole batch rolls back
/// then.
pub fn insert_group_matches(
    conn: &mut SqliteConnection,
    batch: &[CupGroupMatch],
) -> Result<usize, PersistenceError> {
    conn.transaction(|conn| {
        let rows: Vec<NewCupGroupMatch> = batch
            .iter()
            .map(|group_match| NewCupGroupMatch {
                group_id: group_match.group_id,
                home_team_id: group_match.home_team_id,
                away_team_id: group_match.away_team_id,
                gameweek_id: group_match.gameweek_id,
                home_score: group_match.home_score,
                away_score: group_match.away_score,
            })
            .collect();
        Ok(diesel::insert_into(cup_group_matches::table)
            .values(&rows)
            .execute(conn)?)
    })
}

/// Schedules a group match into the gameweek its score will be
/// sourced from.
///
/// # Errors
///
/// Returns `NotFound` if the match row does not exist.
pub fn schedule_group_match(
    conn: &mut SqliteConnection,
    id: i64,
    gameweek_id: i64,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(cup_group_matches::table.filter(cup_group_matches::id.eq(id)))
        .set(cup_group_matches::gameweek_id.eq(Some(gameweek_id)))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Group match {id} does not exist"
        )));
    }
    Ok(())
}

/// Writes a group match's synced scores back.
///
/// # Errors
///
/// Returns `NotFound` if the match row does not exist.
pub fn save_group_match_scores(
    conn: &mut SqliteConnection,
    group_match: &CupGroupMatch,
) -> Result<(), PersistenceError> {
    let Some(id) = group_match.id else {
        return Err(PersistenceError::DataIntegrity(String::from(
            "Cannot save a group match that has never been persisted",
        )));
    };
    let updated = diesel::update(cup_group_matches::table.filter(cup_group_matches::id.eq(id)))
        .set((
            cup_group_matches::home_score.eq(group_match.home_score),
            cup_group_matches::away_score.eq(group_match.away_score),
        ))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Group match {id} does not exist"
        )));
    }
    Ok(())
}

/// Creates a knockout round.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_round(
    conn: &mut SqliteConnection,
    round: &CupRound,
) -> Result<CupRound, PersistenceError> {
    let row = NewCupRound {
        cup_id: round.cup_id,
        name: round.name.clone(),
        sort_order: round.order,
        first_leg_gameweek_id: round.first_leg_gameweek_id,
        second_leg_gameweek_id: round.second_leg_gameweek_id,
        num_matches: round.num_matches,
    };
    diesel::insert_into(cup_rounds::table)
        .values(&row)
        .execute(conn)?;
    let round_id = get_last_insert_rowid(conn)?;
    let mut persisted = round.clone();
    persisted.round_id = Some(round_id);
    Ok(persisted)
}

/// Inserts a batch of knockout ties atomically.
///
/// # Errors
///
/// Returns an error if any insert fails; the whole batch rolls back
/// then.
pub fn insert_cup_matches(
    conn: &mut SqliteConnection,
    batch: &[CupMatch],
) -> Result<usize, PersistenceError> {
    conn.transaction(|conn| {
        let rows: Vec<NewCupMatch> = batch
            .iter()
            .map(|tie| NewCupMatch {
                round_id: tie.round_id,
                home_team_id: tie.home_team_id,
                away_team_id: tie.away_team_id,
                first_leg_home_score: tie.first_leg_home_score,
                first_leg_away_score: tie.first_leg_away_score,
                second_leg_home_score: tie.second_leg_home_score,
                second_leg_away_score: tie.second_leg_away_score,
                winner_id: tie.winner_id,
            })
            .collect();
        Ok(diesel::insert_into(cup_matches::table)
            .values(&rows)
            .execute(conn)?)
    })
}

/// Writes a tie's synced leg scores and resolved winner back.
///
/// # Errors
///
/// Returns `NotFound` if the tie row does not exist.
pub fn save_cup_match(conn: &mut SqliteConnection, tie: &CupMatch) -> Result<(), PersistenceError> {
    let Some(match_id) = tie.match_id else {
        return Err(PersistenceError::DataIntegrity(String::from(
            "Cannot save a cup match that has never been persisted",
        )));
    };
    let updated = diesel::update(cup_matches::table.filter(cup_matches::match_id.eq(match_id)))
        .set((
            cup_matches::first_leg_home_score.eq(tie.first_leg_home_score),
            cup_matches::first_leg_away_score.eq(tie.first_leg_away_score),
            cup_matches::second_leg_home_score.eq(tie.second_leg_home_score),
            cup_matches::second_leg_away_score.eq(tie.second_leg_away_score),
            cup_matches::winner_id.eq(tie.winner_id),
        ))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Cup match {match_id} does not exist"
        )));
    }
    Ok(())
}
