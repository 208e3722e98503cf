// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Gaffer league system.
//!
//! This crate provides the relational store behind the standings
//! engine: seasons, divisions, teams, gameweeks, fixtures, cup
//! competitions, manager months, and titles, each mapped 1:1 to a
//! table. It is built on Diesel over `SQLite` with embedded
//! migrations.
//!
//! Derived values (`TeamSeason` totals and positions, cup match leg
//! scores, month winners) are performance caches: every one of them
//! is recomputable from the fixtures table, and the mutations here
//! only ever write what a calculator recomputed from source.
//!
//! ## Testing
//!
//! Tests run against named shared-cache in-memory databases; an
//! atomic counter isolates each test's database deterministically.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod diesel_schema;
mod error;
pub mod mutations;
pub mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::fixtures::ScoreUpdate;
pub use mutations::seasons::SeasonSpec;

use gaffer::{TeamPlacement, TeamTotals};
use gaffer_domain::{
    CompetitionFormat, CupCompetition, CupGroup, CupGroupMatch, CupGroupTeam, CupMatch, CupRound,
    Division, Fixture, FixtureRecord, Gameweek, ManagerMonth, ManagerOfTheMonth, Season, Team,
    TeamSeason, Title,
};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating
/// time-based collisions. Each call to `new_in_memory()` receives a
/// unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the league store.
///
/// Owns the single `SQLite` connection; all reads and writes go
/// through it. The web layer serializes access with a mutex, matching
/// the one-request-at-a-time execution model.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter over an in-memory `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Unique shared in-memory database name per call so tests are
        // isolated without time-based collisions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let url = format!("file:gaffer_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn = sqlite::initialize_database(&url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;
        Ok(Self { conn })
    }

    /// Creates a persistence adapter over a file-based `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or
    /// initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;
        let mut conn = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;
        Ok(Self { conn })
    }

    // ========================================================================
    // Seasons, divisions, gameweeks
    // ========================================================================

    /// Returns the season currently flagged as current.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no season is current.
    pub fn current_season(&mut self) -> Result<Season, PersistenceError> {
        queries::seasons::current_season(&mut self.conn)
    }

    /// Returns a season by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the season does not exist.
    pub fn season(&mut self, season_id: i64) -> Result<Season, PersistenceError> {
        queries::seasons::season(&mut self.conn, season_id)
    }

    /// Returns all seasons, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn seasons(&mut self) -> Result<Vec<Season>, PersistenceError> {
        queries::seasons::list_seasons(&mut self.conn)
    }

    /// Returns a season's divisions in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn divisions(&mut self, season_id: i64) -> Result<Vec<Division>, PersistenceError> {
        queries::seasons::divisions_for_season(&mut self.conn, season_id)
    }

    /// Returns a division by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the division does not exist.
    pub fn division(&mut self, division_id: i64) -> Result<Division, PersistenceError> {
        queries::seasons::division(&mut self.conn, division_id)
    }

    /// Returns a season's gameweeks ordered by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn gameweeks(&mut self, season_id: i64) -> Result<Vec<Gameweek>, PersistenceError> {
        queries::seasons::gameweeks_for_season(&mut self.conn, season_id)
    }

    /// Returns a gameweek by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the gameweek does not exist.
    pub fn gameweek(&mut self, gameweek_id: i64) -> Result<Gameweek, PersistenceError> {
        queries::seasons::gameweek(&mut self.conn, gameweek_id)
    }

    /// Returns the gameweek with the given number within a season.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no gameweek has that number.
    pub fn gameweek_by_number(
        &mut self,
        season_id: i64,
        number: i32,
    ) -> Result<Gameweek, PersistenceError> {
        queries::seasons::gameweek_by_number(&mut self.conn, season_id, number)
    }

    /// Creates a season together with its placeholder gameweeks.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub fn create_season(&mut self, spec: &SeasonSpec) -> Result<Season, PersistenceError> {
        mutations::seasons::create_season(&mut self.conn, spec)
    }

    /// Flags a season as current, exclusively.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the season does not exist.
    pub fn set_current_season(&mut self, season_id: i64) -> Result<(), PersistenceError> {
        mutations::seasons::set_current_season(&mut self.conn, season_id)
    }

    /// Flags a gameweek as current within its season, exclusively.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the gameweek does not exist in the season.
    pub fn set_current_gameweek(
        &mut self,
        season_id: i64,
        gameweek_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::seasons::set_current_gameweek(&mut self.conn, season_id, gameweek_id)
    }

    /// Creates a division within a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_division(
        &mut self,
        season_id: i64,
        name: &str,
    ) -> Result<Division, PersistenceError> {
        mutations::seasons::create_division(&mut self.conn, season_id, name)
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// Returns every team, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn teams(&mut self) -> Result<Vec<Team>, PersistenceError> {
        queries::teams::list_teams(&mut self.conn)
    }

    /// Returns a team by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the team does not exist.
    pub fn team(&mut self, team_id: i64) -> Result<Team, PersistenceError> {
        queries::teams::team(&mut self.conn, team_id)
    }

    /// Looks a team up by (normalized) name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn team_by_name(&mut self, name: &str) -> Result<Option<Team>, PersistenceError> {
        queries::teams::team_by_name(&mut self.conn, name)
    }

    /// Registers a team and its zeroed season record.
    ///
    /// # Errors
    ///
    /// Returns an error if either insert fails.
    pub fn register_team(
        &mut self,
        team: &Team,
        season_id: i64,
        division_id: i64,
    ) -> Result<(Team, TeamSeason), PersistenceError> {
        mutations::teams::register_team(&mut self.conn, team, season_id, division_id)
    }

    /// Updates a team's name and manager.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the team does not exist.
    pub fn update_team(&mut self, team: &Team) -> Result<(), PersistenceError> {
        mutations::teams::update_team(&mut self.conn, team)
    }

    // ========================================================================
    // Fixtures (the Fixture Store)
    // ========================================================================

    /// Returns every fixture record in a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn season_fixture_records(
        &mut self,
        season_id: i64,
    ) -> Result<Vec<FixtureRecord>, PersistenceError> {
        queries::fixtures::season_fixture_records(&mut self.conn, season_id)
    }

    /// Returns a team's fixture records in a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn team_fixture_records(
        &mut self,
        season_id: i64,
        team_id: i64,
    ) -> Result<Vec<FixtureRecord>, PersistenceError> {
        queries::fixtures::team_fixture_records(&mut self.conn, season_id, team_id)
    }

    /// Returns every fixture record in one gameweek.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn gameweek_fixture_records(
        &mut self,
        gameweek_id: i64,
    ) -> Result<Vec<FixtureRecord>, PersistenceError> {
        queries::fixtures::gameweek_fixture_records(&mut self.conn, gameweek_id)
    }

    /// Returns a fixture entity by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the fixture does not exist.
    pub fn fixture(&mut self, fixture_id: i64) -> Result<Fixture, PersistenceError> {
        queries::fixtures::fixture(&mut self.conn, fixture_id)
    }

    /// Returns the fixture entities for one gameweek and division.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn fixtures_for_gameweek_division(
        &mut self,
        gameweek_id: i64,
        division_id: i64,
    ) -> Result<Vec<Fixture>, PersistenceError> {
        queries::fixtures::fixtures_for_gameweek_division(&mut self.conn, gameweek_id, division_id)
    }

    /// Returns every fixture entity in a season paired with its
    /// gameweek number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn season_fixtures_with_weeks(
        &mut self,
        season_id: i64,
    ) -> Result<Vec<(Fixture, i32)>, PersistenceError> {
        queries::fixtures::season_fixtures_with_weeks(&mut self.conn, season_id)
    }

    /// Returns whether a fixture already exists for the pairing in
    /// the given gameweek.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn fixture_exists(
        &mut self,
        gameweek_id: i64,
        home_team_id: i64,
        away_team_id: i64,
    ) -> Result<bool, PersistenceError> {
        queries::fixtures::fixture_exists(&mut self.conn, gameweek_id, home_team_id, away_team_id)
    }

    /// Inserts a batch of fixtures atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; the batch rolls back.
    pub fn insert_fixtures(&mut self, batch: &[Fixture]) -> Result<usize, PersistenceError> {
        mutations::fixtures::insert_fixtures(&mut self.conn, batch)
    }

    /// Applies a batch of score updates atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any update fails; the batch rolls back.
    pub fn record_scores(&mut self, batch: &[ScoreUpdate]) -> Result<(), PersistenceError> {
        mutations::fixtures::record_scores(&mut self.conn, batch)
    }

    // ========================================================================
    // Standings caches
    // ========================================================================

    /// Returns a division's table rows in cached standings order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn division_table(
        &mut self,
        season_id: i64,
        division_id: i64,
    ) -> Result<Vec<TeamSeason>, PersistenceError> {
        queries::standings::division_table(&mut self.conn, season_id, division_id)
    }

    /// Returns every `TeamSeason` row of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn team_seasons(&mut self, season_id: i64) -> Result<Vec<TeamSeason>, PersistenceError> {
        queries::standings::team_seasons_for_season(&mut self.conn, season_id)
    }

    /// Returns one team's `TeamSeason` row for a season.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the team is not registered in the season.
    pub fn team_season(
        &mut self,
        team_id: i64,
        season_id: i64,
    ) -> Result<TeamSeason, PersistenceError> {
        queries::standings::team_season(&mut self.conn, team_id, season_id)
    }

    /// Writes a team's recomputed totals back to its season cache.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the team has no record in the season.
    pub fn write_team_totals(
        &mut self,
        team_id: i64,
        season_id: i64,
        totals: TeamTotals,
    ) -> Result<(), PersistenceError> {
        mutations::standings::write_team_totals(&mut self.conn, team_id, season_id, totals)
    }

    /// Writes recomputed division positions back, atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any update fails; the batch rolls back.
    pub fn write_positions(
        &mut self,
        season_id: i64,
        positions: &[(i64, i32)],
    ) -> Result<(), PersistenceError> {
        mutations::standings::write_positions(&mut self.conn, season_id, positions)
    }

    // ========================================================================
    // Cups
    // ========================================================================

    /// Returns a cup competition by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the competition does not exist.
    pub fn cup(&mut self, cup_id: i64) -> Result<CupCompetition, PersistenceError> {
        queries::cups::cup(&mut self.conn, cup_id)
    }

    /// Returns a season's cup competitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn cups(&mut self, season_id: i64) -> Result<Vec<CupCompetition>, PersistenceError> {
        queries::cups::cups_for_season(&mut self.conn, season_id)
    }

    /// Returns a competition's groups in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn cup_groups(&mut self, cup_id: i64) -> Result<Vec<CupGroup>, PersistenceError> {
        queries::cups::groups_for_cup(&mut self.conn, cup_id)
    }

    /// Returns a group's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn group_roster(&mut self, group_id: i64) -> Result<Vec<CupGroupTeam>, PersistenceError> {
        queries::cups::roster_for_group(&mut self.conn, group_id)
    }

    /// Returns a group's matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn group_matches(&mut self, group_id: i64) -> Result<Vec<CupGroupMatch>, PersistenceError> {
        queries::cups::matches_for_group(&mut self.conn, group_id)
    }

    /// Returns every group match sourced from the given gameweek.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn group_matches_for_gameweek(
        &mut self,
        gameweek_id: i64,
    ) -> Result<Vec<CupGroupMatch>, PersistenceError> {
        queries::cups::group_matches_for_gameweek(&mut self.conn, gameweek_id)
    }

    /// Returns a competition's rounds in stage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn cup_rounds(&mut self, cup_id: i64) -> Result<Vec<CupRound>, PersistenceError> {
        queries::cups::rounds_for_cup(&mut self.conn, cup_id)
    }

    /// Returns every round with a leg sourced from the given gameweek.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn rounds_touching_gameweek(
        &mut self,
        gameweek_id: i64,
    ) -> Result<Vec<CupRound>, PersistenceError> {
        queries::cups::rounds_touching_gameweek(&mut self.conn, gameweek_id)
    }

    /// Returns a round's matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn cup_round_matches(&mut self, round_id: i64) -> Result<Vec<CupMatch>, PersistenceError> {
        queries::cups::matches_for_round(&mut self.conn, round_id)
    }

    /// Creates a cup competition (plus its groups, for the group
    /// format).
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub fn create_cup(
        &mut self,
        season_id: i64,
        name: &str,
        format: CompetitionFormat,
    ) -> Result<(CupCompetition, Vec<CupGroup>), PersistenceError> {
        mutations::cups::create_cup(&mut self.conn, season_id, name, format)
    }

    /// Adds a team to a group's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_group_team(
        &mut self,
        group_id: i64,
        team_id: i64,
    ) -> Result<CupGroupTeam, PersistenceError> {
        mutations::cups::insert_group_team(&mut self.conn, group_id, team_id)
    }

    /// Inserts a batch of group matches atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; the batch rolls back.
    pub fn insert_group_matches(
        &mut self,
        batch: &[CupGroupMatch],
    ) -> Result<usize, PersistenceError> {
        mutations::cups::insert_group_matches(&mut self.conn, batch)
    }

    /// Schedules a group match into a gameweek.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the match row does not exist.
    pub fn schedule_group_match(
        &mut self,
        id: i64,
        gameweek_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::cups::schedule_group_match(&mut self.conn, id, gameweek_id)
    }

    /// Writes a group match's synced scores back.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the match row does not exist.
    pub fn save_group_match_scores(
        &mut self,
        group_match: &CupGroupMatch,
    ) -> Result<(), PersistenceError> {
        mutations::cups::save_group_match_scores(&mut self.conn, group_match)
    }

    /// Creates a knockout round.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_cup_round(&mut self, round: &CupRound) -> Result<CupRound, PersistenceError> {
        mutations::cups::create_round(&mut self.conn, round)
    }

    /// Inserts a batch of knockout ties atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; the batch rolls back.
    pub fn insert_cup_matches(&mut self, batch: &[CupMatch]) -> Result<usize, PersistenceError> {
        mutations::cups::insert_cup_matches(&mut self.conn, batch)
    }

    /// Writes a tie's synced leg scores and resolved winner back.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the tie row does not exist.
    pub fn save_cup_match(&mut self, tie: &CupMatch) -> Result<(), PersistenceError> {
        mutations::cups::save_cup_match(&mut self.conn, tie)
    }

    // ========================================================================
    // Awards
    // ========================================================================

    /// Returns a season's manager months.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn manager_months(&mut self, season_id: i64) -> Result<Vec<ManagerMonth>, PersistenceError> {
        queries::awards::months_for_season(&mut self.conn, season_id)
    }

    /// Returns a manager month by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the month does not exist.
    pub fn manager_month(&mut self, month_id: i64) -> Result<ManagerMonth, PersistenceError> {
        queries::awards::month(&mut self.conn, month_id)
    }

    /// Returns a month's award, if materialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn month_award(
        &mut self,
        month_id: i64,
    ) -> Result<Option<ManagerOfTheMonth>, PersistenceError> {
        queries::awards::award_for_month(&mut self.conn, month_id)
    }

    /// Returns every award in a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn month_awards(
        &mut self,
        season_id: i64,
    ) -> Result<Vec<ManagerOfTheMonth>, PersistenceError> {
        queries::awards::awards_for_season(&mut self.conn, season_id)
    }

    /// Returns a team's titles.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn titles(&mut self, team_id: i64) -> Result<Vec<Title>, PersistenceError> {
        queries::awards::titles_for_team(&mut self.conn, team_id)
    }

    /// Creates a manager month.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_manager_month(
        &mut self,
        month: &ManagerMonth,
    ) -> Result<ManagerMonth, PersistenceError> {
        mutations::awards::create_manager_month(&mut self.conn, month)
    }

    /// Sets or clears a month's resolved winner.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the month does not exist.
    pub fn set_month_winner(
        &mut self,
        month_id: i64,
        winner_id: Option<i64>,
    ) -> Result<(), PersistenceError> {
        mutations::awards::set_month_winner(&mut self.conn, month_id, winner_id)
    }

    /// Creates or updates a month's award in place, never duplicating.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_month_award(
        &mut self,
        month_id: i64,
        team_id: i64,
        total_score: f64,
    ) -> Result<ManagerOfTheMonth, PersistenceError> {
        mutations::awards::upsert_month_award(&mut self.conn, month_id, team_id, total_score)
    }

    /// Awards a title if absent on its natural key.
    ///
    /// # Errors
    ///
    /// Returns an error if the pre-check or insert fails.
    pub fn award_title(&mut self, title: &Title) -> Result<bool, PersistenceError> {
        mutations::awards::award_title(&mut self.conn, title)
    }

    // ========================================================================
    // Season transition
    // ========================================================================

    /// Creates the next season and re-enrolls every placed team in
    /// one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails; the whole transition rolls
    /// back then.
    pub fn advance_season(
        &mut self,
        spec: &SeasonSpec,
        placements: &[TeamPlacement],
    ) -> Result<Season, PersistenceError> {
        mutations::transition::advance_season(&mut self.conn, spec, placements)
    }
}
