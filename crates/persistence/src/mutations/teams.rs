// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{NewTeam, NewTeamSeason};
use crate::diesel_schema::{team_seasons, teams};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use diesel::prelude::*;
use gaffer_domain::{Team, TeamSeason};
use tracing::info;

/// Registers a team and its zeroed season record in one transaction.
///
/// The caller has already validated the team's fields and checked the
/// normalized name for duplicates; the unique constraint on the name
/// column backs that check up.
///
/// # Errors
///
/// Returns an error if either insert fails; nothing is committed then.
pub fn register_team(
    conn: &mut SqliteConnection,
    team: &Team,
    season_id: i64,
    division_id: i64,
) -> Result<(Team, TeamSeason), PersistenceError> {
    conn.transaction(|conn| {
        let row = NewTeam {
            name: team.name().to_string(),
            manager_name: team.manager_name.clone(),
        };
        diesel::insert_into(teams::table)
            .values(&row)
            .execute(conn)?;
        let team_id = get_last_insert_rowid(conn)?;

        let season_row = NewTeamSeason {
            team_id,
            season_id,
            division_id,
            points: 0,
            total_score: 0.0,
            position: None,
        };
        diesel::insert_into(team_seasons::table)
            .values(&season_row)
            .execute(conn)?;
        let team_season_id = get_last_insert_rowid(conn)?;

        info!(team_id, season_id, division_id, name = team.name(), "Registered team");

        let mut persisted_season = TeamSeason::new(team_id, season_id, division_id);
        persisted_season.id = Some(team_season_id);
        Ok((
            Team::with_id(team_id, team.name(), team.manager_name.clone()),
            persisted_season,
        ))
    })
}

/// Updates a team's name and manager.
///
/// # Errors
///
/// Returns `NotFound` if the team does not exist.
pub fn update_team(conn: &mut SqliteConnection, team: &Team) -> Result<(), PersistenceError> {
    let Some(team_id) = team.team_id else {
        return Err(PersistenceError::DataIntegrity(String::from(
            "Cannot update a team that has never been persisted",
        )));
    };
    let updated = diesel::update(teams::table.filter(teams::team_id.eq(team_id)))
        .set((
            teams::name.eq(team.name()),
            teams::manager_name.eq(&team.manager_name),
        ))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Team {team_id} does not exist"
        )));
    }
    Ok(())
}

/// Enrolls an existing team into a season's division with a zeroed
/// record.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn enroll_team_season(
    conn: &mut SqliteConnection,
    team_id: i64,
    season_id: i64,
    division_id: i64,
) -> Result<TeamSeason, PersistenceError> {
    let row = NewTeamSeason {
        team_id,
        season_id,
        division_id,
        points: 0,
        total_score: 0.0,
        position: None,
    };
    diesel::insert_into(team_seasons::table)
        .values(&row)
        .execute(conn)?;
    let id = get_last_insert_rowid(conn)?;
    let mut team_season = TeamSeason::new(team_id, season_id, division_id);
    team_season.id = Some(id);
    Ok(team_season)
}
