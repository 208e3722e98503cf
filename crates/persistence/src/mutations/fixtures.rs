// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::NewFixture;
use crate::diesel_schema::fixtures;
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::Fixture;
use tracing::info;

/// A single score assignment within a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreUpdate {
    /// The fixture to score.
    pub fixture_id: i64,
    /// The home side's score.
    pub home_score: f64,
    /// The away side's score.
    pub away_score: f64,
}

/// Inserts a batch of fixtures atomically.
///
/// # Errors
///
/// Returns an error if any insert fails; the whole batch rolls back
/// then.
pub fn insert_fixtures(
    conn: &mut SqliteConnection,
    batch: &[Fixture],
) -> Result<usize, PersistenceError> {
    conn.transaction(|conn| {
        let rows: Vec<NewFixture> = batch
            .iter()
            .map(|fixture| NewFixture {
                gameweek_id: fixture.gameweek_id,
                division_id: fixture.division_id,
                home_team_id: fixture.home_team_id,
                away_team_id: fixture.away_team_id,
                home_score: fixture.home_score,
                away_score: fixture.away_score,
            })
            .collect();
        let inserted = diesel::insert_into(fixtures::table)
            .values(&rows)
            .execute(conn)?;
        info!(inserted, "Inserted fixture batch");
        Ok(inserted)
    })
}

/// Applies a batch of score updates atomically.
///
/// Partial commits are disallowed: if any fixture in the batch does
/// not exist, the entire batch rolls back.
///
/// # Errors
///
/// Returns `NotFound` naming the first missing fixture, or a database
/// error. Nothing is committed in either case.
pub fn record_scores(
    conn: &mut SqliteConnection,
    batch: &[ScoreUpdate],
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        for update in batch {
            let updated = diesel::update(
                fixtures::table.filter(fixtures::fixture_id.eq(update.fixture_id)),
            )
            .set((
                fixtures::home_score.eq(Some(update.home_score)),
                fixtures::away_score.eq(Some(update.away_score)),
            ))
            .execute(conn)?;
            if updated == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "Fixture {} does not exist",
                    update.fixture_id
                )));
            }
        }
        info!(count = batch.len(), "Recorded score batch");
        Ok(())
    })
}
