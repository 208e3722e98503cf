// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The end-of-season transition.
//!
//! One transaction creates the new season, its divisions (derived
//! from the placement destinations), its placeholder gameweeks, and a
//! fresh zeroed `TeamSeason` for every placed team. Any failure rolls
//! the entire transition back; the old season is never half-migrated.

use crate::error::PersistenceError;
use crate::mutations::seasons::{SeasonSpec, insert_season_with_gameweeks};
use crate::mutations::teams::enroll_team_season;
use diesel::prelude::*;
use gaffer::TeamPlacement;
use gaffer_domain::{Division, Season};
use tracing::info;

/// Creates the next season and re-enrolls every placed team.
///
/// Destination divisions are created in rank order from the distinct
/// destinations named by the placements. The new season is not
/// flagged current; callers switch over explicitly once satisfied.
///
/// # Errors
///
/// Returns an error if any step fails; the whole transition rolls
/// back then.
pub fn advance_season(
    conn: &mut SqliteConnection,
    spec: &SeasonSpec,
    placements: &[TeamPlacement],
) -> Result<Season, PersistenceError> {
    conn.transaction(|conn| {
        let season = insert_season_with_gameweeks(conn, spec)?;
        let season_id = season.season_id.ok_or_else(|| {
            PersistenceError::DataIntegrity(String::from("Created season has no id"))
        })?;

        let mut destinations: Vec<String> = Vec::new();
        for placement in placements {
            if !destinations.contains(&placement.destination) {
                destinations.push(placement.destination.clone());
            }
        }
        destinations.sort_by_key(|name| Division::new(season_id, name.clone()).rank());

        let mut division_ids: Vec<(String, i64)> = Vec::new();
        for name in &destinations {
            let division = super::seasons::create_division(conn, season_id, name)?;
            let division_id = division.division_id.ok_or_else(|| {
                PersistenceError::DataIntegrity(String::from("Created division has no id"))
            })?;
            division_ids.push((name.clone(), division_id));
        }

        for placement in placements {
            let division_id = division_ids
                .iter()
                .find(|(name, _)| *name == placement.destination)
                .map(|(_, id)| *id)
                .ok_or_else(|| {
                    PersistenceError::DataIntegrity(format!(
                        "No division created for destination '{}'",
                        placement.destination
                    ))
                })?;
            enroll_team_season(conn, placement.team_id, season_id, division_id)?;
        }

        info!(
            season_id,
            teams = placements.len(),
            divisions = division_ids.len(),
            "Advanced to new season"
        );

        Ok(season)
    })
}
