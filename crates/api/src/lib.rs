// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service boundary layer for the Gaffer league system.
//!
//! Every function here follows the same shape: validate the request,
//! load fixture views through the persistence layer, run the pure
//! calculators, write derived caches back, and map the result into a
//! DTO. The season being operated on is always an explicit argument;
//! nothing consults a "current season" ambient.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod fixture_sheet;
mod request_response;
mod score_sheet;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use fixture_sheet::{
    FixtureLine, FixtureLineError, FixtureSheetPreview, ParsedFixtureLine, parse_fixture_sheet,
};
pub use request_response::{
    CreateMonthRequest, CupOverviewResponse, EndSeasonRequest, EndSeasonResponse, FixtureDto,
    FixtureFilter, FixtureUploadRequest, GroupDto, GroupTableEntry, LeagueTableEntry,
    LeagueTableResponse, MonthResolutionResponse, MonthStandingDto, QualifierDto,
    RegisterTeamRequest, RegisterTeamResponse, RoundDto, ScoreUploadRequest, TeamProfileResponse,
    TieDto, TitleDto, UpdateTeamRequest, UploadOutcome,
};
pub use score_sheet::{
    ParsedScoreLine, ScoreLine, ScoreLineError, ScoreSheetPreview, SheetLineStatus,
    parse_score_sheet,
};

use gaffer::{
    GroupTableRow, KnockoutOutcome, MIN_SCORED_FIXTURES_PER_GAMEWEEK, MonthWindow,
    TransitionPolicy, group_table, leg_score_for, league_title_awards, month_standings,
    qualification, rank_division, recent_form, round_robin_pairs, season_placements,
    sync_and_resolve, team_record, team_totals, window_gate,
};
use gaffer_domain::{
    CompetitionFormat, CupGroupMatch, CupGroupTeam, CupRound, Division, Fixture, FixtureRecord,
    ManagerMonth, Team, Title, TitleKind, normalize_team_name, validate_group_roster,
    validate_team_fields,
};
use gaffer_persistence::{Persistence, ScoreUpdate, SeasonSpec};
use std::collections::HashMap;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::{info, warn};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn parse_request_date(field: &'static str, value: &str) -> Result<time::Date, ApiError> {
    time::Date::parse(value, DATE_FORMAT).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("'{value}' is not a yyyy-mm-dd date: {e}"),
    })
}

fn require_id(id: Option<i64>, what: &str) -> Result<i64, ApiError> {
    id.ok_or_else(|| ApiError::Internal {
        message: format!("{what} has no persisted id"),
    })
}

fn team_name_map(store: &mut Persistence) -> Result<HashMap<i64, Team>, ApiError> {
    let mut map = HashMap::new();
    for team in store.teams()? {
        let team_id = require_id(team.team_id, "team")?;
        map.insert(team_id, team);
    }
    Ok(map)
}

fn name_of(map: &HashMap<i64, Team>, team_id: i64) -> String {
    map.get(&team_id)
        .map_or_else(|| format!("Team {team_id}"), |team| team.name().to_string())
}

// ============================================================================
// Teams
// ============================================================================

/// Registers a team into a season's division.
///
/// # Errors
///
/// Returns an error if the division does not belong to the season,
/// the fields are invalid, or the normalized name is already taken.
pub fn register_team(
    store: &mut Persistence,
    request: &RegisterTeamRequest,
) -> Result<RegisterTeamResponse, ApiError> {
    let division = store.division(request.division_id)?;
    if division.season_id != request.season_id {
        return Err(ApiError::InvalidInput {
            field: String::from("division_id"),
            message: format!(
                "Division {} belongs to season {}, not season {}",
                request.division_id, division.season_id, request.season_id
            ),
        });
    }

    let team = Team::new(&request.name, request.manager_name.clone());
    validate_team_fields(&team)?;
    if store.team_by_name(team.name())?.is_some() {
        return Err(ApiError::DomainRuleViolation {
            message: format!("A team named '{}' already exists", team.name()),
        });
    }

    let (persisted, _) = store.register_team(&team, request.season_id, request.division_id)?;
    let team_id = require_id(persisted.team_id, "team")?;
    info!(team_id, name = persisted.name(), "Registered team");
    Ok(RegisterTeamResponse {
        team_id,
        name: persisted.name().to_string(),
        message: format!("Team {} created successfully", persisted.name()),
    })
}

/// Renames a team or changes its manager.
///
/// # Errors
///
/// Returns an error if the team does not exist, the new fields are
/// invalid, or the new normalized name belongs to another team.
pub fn update_team(
    store: &mut Persistence,
    team_id: i64,
    request: &UpdateTeamRequest,
) -> Result<(), ApiError> {
    let mut team = store.team(team_id)?;
    team.set_name(&request.name);
    team.manager_name = request.manager_name.clone();
    validate_team_fields(&team)?;

    if let Some(existing) = store.team_by_name(team.name())? {
        if existing.team_id != Some(team_id) {
            return Err(ApiError::DomainRuleViolation {
                message: format!("A team named '{}' already exists", team.name()),
            });
        }
    }

    store.update_team(&team)?;
    info!(team_id, name = team.name(), "Updated team");
    Ok(())
}

/// Builds a team's profile for one season, recomputing and persisting
/// its division position on the way.
///
/// # Errors
///
/// Returns an error if the team or its season record does not exist.
pub fn team_profile(
    store: &mut Persistence,
    season_id: i64,
    team_id: i64,
) -> Result<TeamProfileResponse, ApiError> {
    let team = store.team(team_id)?;
    let team_season = store.team_season(team_id, season_id)?;

    let rows = store.division_table(season_id, team_season.division_id)?;
    let ranked = rank_division(&rows);
    let position = ranked
        .iter()
        .find(|entry| entry.team_season.team_id == team_id)
        .map_or(0, |entry| entry.position);
    store.write_positions(season_id, &[(team_id, position)])?;

    let records = store.team_fixture_records(season_id, team_id)?;
    let record = team_record(team_id, &records);
    let form: String = recent_form(team_id, &records, 5)
        .iter()
        .map(|result| result.letter())
        .collect();

    let titles = store
        .titles(team_id)?
        .into_iter()
        .map(|title| {
            let (division_id, cup_id) = match title.kind {
                TitleKind::League { division_id } => (Some(division_id), None),
                TitleKind::Cup { cup_id } => (None, Some(cup_id)),
            };
            TitleDto {
                season_id: title.season_id,
                kind: title.kind.as_str().to_string(),
                division_id,
                cup_id,
                is_runner_up: title.is_runner_up,
            }
        })
        .collect();

    Ok(TeamProfileResponse {
        team_id,
        name: team.name().to_string(),
        manager_name: team.manager_name,
        division_id: team_season.division_id,
        position,
        points: team_season.points,
        total_score: team_season.total_score,
        played: record.played,
        wins: record.wins,
        draws: record.draws,
        losses: record.losses,
        recent_form: form,
        titles,
    })
}

// ============================================================================
// Uploads
// ============================================================================

/// Applies a pasted score sheet to one gameweek and division, then
/// fans the recalculation out to everything the scores touch.
///
/// Lines that fail to parse or to match a fixture are reported and
/// skipped; the database batch itself is atomic.
///
/// # Errors
///
/// Returns an error if the batch write or any recalculation fails.
pub fn upload_scores(
    store: &mut Persistence,
    request: &ScoreUploadRequest,
) -> Result<UploadOutcome, ApiError> {
    let preview = parse_score_sheet(&request.scores_text);
    let fixtures = store.fixtures_for_gameweek_division(request.gameweek_id, request.division_id)?;
    let teams = team_name_map(store)?;

    let mut errors: Vec<String> = Vec::new();
    let mut failed = 0_usize;
    let mut updates: Vec<ScoreUpdate> = Vec::new();

    for line in &preview.lines {
        let Some(parsed) = &line.parsed else {
            failed += 1;
            for error in &line.errors {
                errors.push(format!("line {}: {error}", line.line_number));
            }
            continue;
        };
        let home = normalize_team_name(&parsed.home_team);
        let away = normalize_team_name(&parsed.away_team);

        let matched = fixtures.iter().find(|fixture| {
            name_of(&teams, fixture.home_team_id) == home
                && name_of(&teams, fixture.away_team_id) == away
        });
        match matched {
            Some(fixture) => match fixture.fixture_id {
                Some(fixture_id) => updates.push(ScoreUpdate {
                    fixture_id,
                    home_score: parsed.home_score,
                    away_score: parsed.away_score,
                }),
                None => {
                    failed += 1;
                    errors.push(format!(
                        "line {}: matched fixture has no id",
                        line.line_number
                    ));
                }
            },
            None => {
                failed += 1;
                errors.push(format!(
                    "line {}: could not find fixture for {home} vs {away}",
                    line.line_number
                ));
            }
        }
    }

    if !updates.is_empty() {
        store.record_scores(&updates)?;
        for update in &updates {
            let fixture = store.fixture(update.fixture_id)?;
            on_fixture_scored(store, request.season_id, &fixture)?;
        }
    }

    info!(
        updated = updates.len(),
        failed,
        gameweek_id = request.gameweek_id,
        "Processed score sheet"
    );
    Ok(UploadOutcome {
        updated: updates.len(),
        failed,
        errors,
    })
}

/// Applies a pasted fixture sheet to a season and division.
///
/// Lines that fail to parse, name unknown teams, or duplicate an
/// existing fixture are reported and skipped; the surviving rows are
/// inserted atomically.
///
/// # Errors
///
/// Returns an error if the batch insert fails.
pub fn upload_fixtures(
    store: &mut Persistence,
    request: &FixtureUploadRequest,
) -> Result<UploadOutcome, ApiError> {
    let preview = parse_fixture_sheet(&request.fixtures_text);

    let mut errors: Vec<String> = Vec::new();
    let mut failed = 0_usize;
    let mut batch: Vec<Fixture> = Vec::new();

    for line in &preview.lines {
        let Some(parsed) = &line.parsed else {
            failed += 1;
            for error in &line.errors {
                errors.push(format!("line {}: {error}", line.line_number));
            }
            continue;
        };

        let gameweek =
            match store.gameweek_by_number(request.season_id, parsed.gameweek_number) {
                Ok(gameweek) => gameweek,
                Err(_) => {
                    failed += 1;
                    errors.push(format!(
                        "line {}: could not find gameweek number {}",
                        line.line_number, parsed.gameweek_number
                    ));
                    continue;
                }
            };
        let gameweek_id = require_id(gameweek.gameweek_id, "gameweek")?;

        let home = store.team_by_name(&parsed.home_team)?;
        let away = store.team_by_name(&parsed.away_team)?;
        let (Some(home), Some(away)) = (home, away) else {
            failed += 1;
            errors.push(format!(
                "line {}: could not find team(s) for '{}' vs '{}'",
                line.line_number, parsed.home_team, parsed.away_team
            ));
            continue;
        };
        let home_id = require_id(home.team_id, "team")?;
        let away_id = require_id(away.team_id, "team")?;

        if store.fixture_exists(gameweek_id, home_id, away_id)? {
            failed += 1;
            errors.push(format!(
                "line {}: fixture already exists: GW{} - {} vs {}",
                line.line_number,
                parsed.gameweek_number,
                home.name(),
                away.name()
            ));
            continue;
        }

        batch.push(Fixture::new(
            gameweek_id,
            request.division_id,
            home_id,
            away_id,
        ));
    }

    let inserted = if batch.is_empty() {
        0
    } else {
        store.insert_fixtures(&batch)?
    };

    info!(
        inserted,
        failed,
        season_id = request.season_id,
        "Processed fixture sheet"
    );
    Ok(UploadOutcome {
        updated: inserted,
        failed,
        errors,
    })
}

// ============================================================================
// Recalculation fan-out
// ============================================================================

/// Recalculates everything a freshly scored fixture can affect: both
/// teams' season caches, cup group matches and knockout ties sourced
/// from the fixture's gameweek, and any manager month whose window
/// covers it.
///
/// Safe to call redundantly; every step recomputes from source.
///
/// # Errors
///
/// Returns an error if a recalculation or write-back fails.
pub fn on_fixture_scored(
    store: &mut Persistence,
    season_id: i64,
    fixture: &Fixture,
) -> Result<(), ApiError> {
    for team_id in [fixture.home_team_id, fixture.away_team_id] {
        let records = store.team_fixture_records(season_id, team_id)?;
        let totals = team_totals(team_id, &records);
        store.write_team_totals(team_id, season_id, totals)?;
    }

    let leg_records = store.gameweek_fixture_records(fixture.gameweek_id)?;
    for mut group_match in store.group_matches_for_gameweek(fixture.gameweek_id)? {
        sync_group_match(&mut group_match, &leg_records);
        store.save_group_match_scores(&group_match)?;
    }

    for round in store.rounds_touching_gameweek(fixture.gameweek_id)? {
        resync_round(store, &round)?;
    }

    let gameweek_number = store.gameweek(fixture.gameweek_id)?.number;
    for month in store.manager_months(season_id)? {
        let window = month_window(store, &month)?;
        if window.contains(gameweek_number) {
            resolve_month(store, &month, window)?;
        }
    }

    Ok(())
}

/// Re-sources a group match's single-leg scores from its gameweek's
/// fixtures. A match with no scheduled gameweek keeps its nulls.
fn sync_group_match(group_match: &mut CupGroupMatch, leg_records: &[FixtureRecord]) {
    if group_match.gameweek_id.is_none() {
        return;
    }
    group_match.home_score = leg_score_for(group_match.home_team_id, leg_records);
    group_match.away_score = leg_score_for(group_match.away_team_id, leg_records);
}

/// Re-syncs and re-resolves every tie in a knockout round from its
/// leg gameweeks.
fn resync_round(store: &mut Persistence, round: &CupRound) -> Result<(), ApiError> {
    let round_id = require_id(round.round_id, "cup round")?;
    let first_leg = match round.first_leg_gameweek_id {
        Some(gameweek_id) => store.gameweek_fixture_records(gameweek_id)?,
        None => Vec::new(),
    };
    let second_leg = match round.second_leg_gameweek_id {
        Some(gameweek_id) => store.gameweek_fixture_records(gameweek_id)?,
        None => Vec::new(),
    };

    for mut tie in store.cup_round_matches(round_id)? {
        let outcome = sync_and_resolve(&mut tie, &first_leg, &second_leg);
        if outcome == KnockoutOutcome::AggregateTied {
            warn!(
                round = %round.name,
                home_team_id = tie.home_team_id,
                away_team_id = tie.away_team_id,
                "Aggregate tie with no tie-break rule; winner left unset"
            );
        }
        store.save_cup_match(&tie)?;
    }
    Ok(())
}

// ============================================================================
// League tables and fixture listings
// ============================================================================

/// Computes a division's league table, persisting refreshed positions.
///
/// # Errors
///
/// Returns an error if the division does not belong to the season or
/// a write-back fails.
pub fn league_table(
    store: &mut Persistence,
    season_id: i64,
    division_id: i64,
) -> Result<LeagueTableResponse, ApiError> {
    let division = store.division(division_id)?;
    if division.season_id != season_id {
        return Err(ApiError::InvalidInput {
            field: String::from("division_id"),
            message: format!("Division {division_id} does not belong to season {season_id}"),
        });
    }

    let rows = store.division_table(season_id, division_id)?;
    let ranked = rank_division(&rows);
    let positions: Vec<(i64, i32)> = ranked
        .iter()
        .map(|entry| (entry.team_season.team_id, entry.position))
        .collect();
    store.write_positions(season_id, &positions)?;

    let season_records = store.season_fixture_records(season_id)?;
    let teams = team_name_map(store)?;
    let entries = ranked
        .iter()
        .map(|entry| {
            let team_id = entry.team_season.team_id;
            let record = team_record(team_id, &season_records);
            LeagueTableEntry {
                position: entry.position,
                team_id,
                team_name: name_of(&teams, team_id),
                manager_name: teams
                    .get(&team_id)
                    .map_or_else(String::new, |team| team.manager_name.clone()),
                played: record.played,
                wins: record.wins,
                draws: record.draws,
                losses: record.losses,
                points: entry.team_season.points,
                total_score: entry.team_season.total_score,
            }
        })
        .collect();

    Ok(LeagueTableResponse {
        season_id,
        division_id,
        division_name: division.name,
        entries,
    })
}

/// Lists a season's fixtures with optional filters.
///
/// Played listings come back most recent gameweek first (a results
/// page); upcoming listings in ascending gameweek order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_fixtures(
    store: &mut Persistence,
    season_id: i64,
    filter: FixtureFilter,
) -> Result<Vec<FixtureDto>, ApiError> {
    let teams = team_name_map(store)?;
    let mut rows: Vec<(Fixture, i32)> = store
        .season_fixtures_with_weeks(season_id)?
        .into_iter()
        .filter(|(fixture, week)| {
            filter.played.is_none_or(|played| fixture.is_played() == played)
                && filter.gameweek.is_none_or(|number| *week == number)
                && filter
                    .division_id
                    .is_none_or(|division_id| fixture.division_id == division_id)
                && filter.team_id.is_none_or(|team_id| fixture.involves(team_id))
        })
        .collect();

    if filter.played == Some(true) {
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.division_id.cmp(&b.0.division_id)));
    }

    rows.into_iter()
        .map(|(fixture, gameweek_number)| {
            Ok(FixtureDto {
                fixture_id: require_id(fixture.fixture_id, "fixture")?,
                gameweek_number,
                division_id: fixture.division_id,
                home_team_id: fixture.home_team_id,
                home_team_name: name_of(&teams, fixture.home_team_id),
                away_team_id: fixture.away_team_id,
                away_team_name: name_of(&teams, fixture.away_team_id),
                home_score: fixture.home_score,
                away_score: fixture.away_score,
            })
        })
        .collect()
}

// ============================================================================
// Cups
// ============================================================================

/// Adds a team to a cup group, enforcing the competition's group
/// configuration.
///
/// # Errors
///
/// Returns an error if the competition is not group-format, the group
/// is unknown, or the roster rules reject the team.
pub fn add_group_team(
    store: &mut Persistence,
    cup_id: i64,
    group_id: i64,
    team_id: i64,
) -> Result<CupGroupTeam, ApiError> {
    let cup = store.cup(cup_id)?;
    let Some(config) = cup.format.group_config() else {
        return Err(ApiError::DomainRuleViolation {
            message: format!("Cup '{}' has no group stage", cup.name),
        });
    };
    let group = store
        .cup_groups(cup_id)?
        .into_iter()
        .find(|group| group.group_id == Some(group_id))
        .ok_or_else(|| ApiError::ResourceNotFound {
            message: format!("Group {group_id} not found in cup {cup_id}"),
        })?;
    let roster = store.group_roster(group_id)?;
    validate_group_roster(&group, config, &roster, team_id)?;
    Ok(store.insert_group_team(group_id, team_id)?)
}

/// Generates the missing round-robin matches for a group's roster.
///
/// Idempotent: pairs that already have a match are skipped, so
/// repeated invocation never duplicates a pairing.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn generate_group_matches(
    store: &mut Persistence,
    group_id: i64,
) -> Result<usize, ApiError> {
    let roster: Vec<i64> = store
        .group_roster(group_id)?
        .iter()
        .map(|entry| entry.team_id)
        .collect();
    let existing: Vec<(i64, i64)> = store
        .group_matches(group_id)?
        .iter()
        .map(|group_match| {
            let (a, b) = (group_match.home_team_id, group_match.away_team_id);
            if a < b { (a, b) } else { (b, a) }
        })
        .collect();

    let batch: Vec<CupGroupMatch> = round_robin_pairs(&roster)
        .into_iter()
        .filter(|&(home, away)| {
            let key = if home < away { (home, away) } else { (away, home) };
            !existing.contains(&key)
        })
        .map(|(home, away)| CupGroupMatch::new(group_id, home, away))
        .collect();

    if batch.is_empty() {
        return Ok(0);
    }
    Ok(store.insert_group_matches(&batch)?)
}

/// Builds a cup competition overview, re-syncing every score from
/// fixtures on the way (the same always-recompute discipline the
/// original pages used).
///
/// Completing the final awards the cup's champion and runner-up
/// titles idempotently.
///
/// # Errors
///
/// Returns an error if loading or a write-back fails.
#[allow(clippy::too_many_lines)]
pub fn cup_overview(
    store: &mut Persistence,
    cup_id: i64,
) -> Result<CupOverviewResponse, ApiError> {
    let cup = store.cup(cup_id)?;
    let teams = team_name_map(store)?;

    let mut groups: Vec<GroupDto> = Vec::new();
    let mut tables: Vec<(i64, Vec<GroupTableRow>)> = Vec::new();

    if let CompetitionFormat::Groups(_) = cup.format {
        for group in store.cup_groups(cup_id)? {
            let group_id = require_id(group.group_id, "cup group")?;
            let roster: Vec<i64> = store
                .group_roster(group_id)?
                .iter()
                .map(|entry| entry.team_id)
                .collect();

            let mut matches = store.group_matches(group_id)?;
            let mut leg_cache: Vec<(i64, Vec<FixtureRecord>)> = Vec::new();
            for group_match in &mut matches {
                let Some(gameweek_id) = group_match.gameweek_id else {
                    continue;
                };
                if !leg_cache.iter().any(|(id, _)| *id == gameweek_id) {
                    let records = store.gameweek_fixture_records(gameweek_id)?;
                    leg_cache.push((gameweek_id, records));
                }
                let records = leg_cache
                    .iter()
                    .find(|(id, _)| *id == gameweek_id)
                    .map(|(_, records)| records.as_slice())
                    .unwrap_or_default();
                sync_group_match(group_match, records);
                store.save_group_match_scores(group_match)?;
            }

            let table = group_table(&roster, &matches);
            groups.push(GroupDto {
                group_id,
                name: group.name.clone(),
                table: table
                    .iter()
                    .map(|row| GroupTableEntry {
                        team_id: row.team_id,
                        team_name: name_of(&teams, row.team_id),
                        played: row.record.played,
                        won: row.record.wins,
                        drawn: row.record.draws,
                        lost: row.record.losses,
                        goals_for: row.record.goals_for,
                        goals_against: row.record.goals_against,
                        goal_difference: row.record.goal_difference,
                        points: row.record.points,
                    })
                    .collect(),
            });
            tables.push((group_id, table));
        }
    }

    let split = qualification(&tables);
    let to_qualifier = |entry: &gaffer::GroupQualifier| QualifierDto {
        group_id: entry.group_id,
        group_position: entry.group_position,
        team_id: entry.row.team_id,
        team_name: name_of(&teams, entry.row.team_id),
        points: entry.row.record.points,
        goals_for: entry.row.record.goals_for,
    };
    let direct_qualifiers: Vec<QualifierDto> = split.direct.iter().map(to_qualifier).collect();
    let playoff_pool: Vec<QualifierDto> = split.playoff.iter().map(to_qualifier).collect();

    let rounds = store.cup_rounds(cup_id)?;
    let mut round_dtos: Vec<RoundDto> = Vec::new();
    for round in &rounds {
        resync_round(store, round)?;
        let round_id = require_id(round.round_id, "cup round")?;
        let ties = store
            .cup_round_matches(round_id)?
            .into_iter()
            .map(|tie| {
                let aggregate_home = tie.aggregate_home_score();
                let aggregate_away = tie.aggregate_away_score();
                let aggregate_tied = tie.first_leg_complete()
                    && tie.second_leg_complete()
                    && tie.winner_id.is_none();
                Ok(TieDto {
                    match_id: require_id(tie.match_id, "cup match")?,
                    home_team_id: tie.home_team_id,
                    home_team_name: name_of(&teams, tie.home_team_id),
                    away_team_id: tie.away_team_id,
                    away_team_name: name_of(&teams, tie.away_team_id),
                    first_leg_home_score: tie.first_leg_home_score,
                    first_leg_away_score: tie.first_leg_away_score,
                    second_leg_home_score: tie.second_leg_home_score,
                    second_leg_away_score: tie.second_leg_away_score,
                    aggregate_home,
                    aggregate_away,
                    winner_id: tie.winner_id,
                    aggregate_tied,
                })
            })
            .collect::<Result<Vec<TieDto>, ApiError>>()?;
        round_dtos.push(RoundDto {
            round_id,
            name: round.name.clone(),
            order: round.order,
            ties,
        });
    }

    award_cup_final_titles(store, cup.season_id, cup_id, &rounds)?;

    Ok(CupOverviewResponse {
        cup_id,
        name: cup.name,
        season_id: cup.season_id,
        format: match cup.format {
            CompetitionFormat::Groups(_) => String::from("groups"),
            CompetitionFormat::Knockout => String::from("knockout"),
        },
        groups,
        direct_qualifiers,
        playoff_pool,
        rounds: round_dtos,
    })
}

/// Awards champion and runner-up cup titles once the final round has
/// a winner in every tie. Idempotent on the title natural keys.
fn award_cup_final_titles(
    store: &mut Persistence,
    season_id: i64,
    cup_id: i64,
    rounds: &[CupRound],
) -> Result<(), ApiError> {
    let Some(final_round) = rounds.iter().max_by_key(|round| round.order) else {
        return Ok(());
    };
    let round_id = require_id(final_round.round_id, "cup round")?;
    let matches = store.cup_round_matches(round_id)?;
    if matches.is_empty() || matches.iter().any(|tie| tie.winner_id.is_none()) {
        return Ok(());
    }

    let final_tie = &matches[0];
    let Some(winner_id) = final_tie.winner_id else {
        return Ok(());
    };
    let loser_id = if winner_id == final_tie.home_team_id {
        final_tie.away_team_id
    } else {
        final_tie.home_team_id
    };

    store.award_title(&Title::new(
        winner_id,
        season_id,
        TitleKind::Cup { cup_id },
        false,
    ))?;
    store.award_title(&Title::new(
        loser_id,
        season_id,
        TitleKind::Cup { cup_id },
        true,
    ))?;
    Ok(())
}

// ============================================================================
// Manager of the Month
// ============================================================================

/// Creates a manager month over a gameweek-number window.
///
/// # Errors
///
/// Returns an error if the window is inverted or a boundary gameweek
/// does not exist.
pub fn create_manager_month(
    store: &mut Persistence,
    request: &CreateMonthRequest,
) -> Result<ManagerMonth, ApiError> {
    MonthWindow::new(request.start_gameweek, request.end_gameweek)?;
    let start = store.gameweek_by_number(request.season_id, request.start_gameweek)?;
    let end = store.gameweek_by_number(request.season_id, request.end_gameweek)?;
    Ok(store.create_manager_month(&ManagerMonth::new(
        request.season_id,
        request.name.clone(),
        require_id(start.gameweek_id, "gameweek")?,
        require_id(end.gameweek_id, "gameweek")?,
    ))?)
}

fn month_window(store: &mut Persistence, month: &ManagerMonth) -> Result<MonthWindow, ApiError> {
    let start = store.gameweek(month.start_gameweek_id)?.number;
    let end = store.gameweek(month.end_gameweek_id)?.number;
    Ok(MonthWindow::new(start, end)?)
}

/// Attempts to resolve a manager month's award.
///
/// The standings are always computed; the winner is set and the award
/// materialized only once every gameweek in the window has its full
/// complement of scored fixtures.
///
/// # Errors
///
/// Returns an error if the month does not exist or a write fails.
pub fn resolve_manager_month(
    store: &mut Persistence,
    month_id: i64,
) -> Result<MonthResolutionResponse, ApiError> {
    let month = store.manager_month(month_id)?;
    let window = month_window(store, &month)?;
    resolve_month(store, &month, window)
}

fn resolve_month(
    store: &mut Persistence,
    month: &ManagerMonth,
    window: MonthWindow,
) -> Result<MonthResolutionResponse, ApiError> {
    let month_id = require_id(month.month_id, "manager month")?;
    let records = store.season_fixture_records(month.season_id)?;
    let standings = month_standings(window, &records);
    let gate = window_gate(window, &records, MIN_SCORED_FIXTURES_PER_GAMEWEEK);

    let mut winner_team_id = None;
    if gate {
        if let Some(top) = standings.first() {
            store.set_month_winner(month_id, Some(top.team_id))?;
            store.upsert_month_award(month_id, top.team_id, top.record.goals_for)?;
            winner_team_id = Some(top.team_id);
            info!(month_id, team_id = top.team_id, "Resolved manager of the month");
        }
    }

    let teams = team_name_map(store)?;
    Ok(MonthResolutionResponse {
        month_id,
        resolved: gate && winner_team_id.is_some(),
        winner_team_id,
        standings: standings
            .iter()
            .map(|standing| MonthStandingDto {
                team_id: standing.team_id,
                team_name: name_of(&teams, standing.team_id),
                played: standing.record.played,
                wins: standing.record.wins,
                draws: standing.record.draws,
                losses: standing.record.losses,
                goals_for: standing.record.goals_for,
                goals_against: standing.record.goals_against,
                goal_difference: standing.record.goal_difference,
                points: standing.record.points,
            })
            .collect(),
    })
}

// ============================================================================
// Season end
// ============================================================================

/// Ends a season: final positions, league titles, and the promotion/
/// relegation transition into a freshly created next season.
///
/// # Errors
///
/// Returns an error if any step fails; the transition itself is
/// atomic in the persistence layer.
pub fn end_season(
    store: &mut Persistence,
    request: &EndSeasonRequest,
    policy: &TransitionPolicy,
) -> Result<EndSeasonResponse, ApiError> {
    let old_season = store.season(request.season_id)?;
    let old_season_id = require_id(old_season.season_id, "season")?;

    let mut final_tables: Vec<(Division, Vec<gaffer::RankedTeamSeason>)> = Vec::new();
    for division in store.divisions(old_season_id)? {
        let division_id = require_id(division.division_id, "division")?;
        let rows = store.division_table(old_season_id, division_id)?;
        let ranked = rank_division(&rows);
        let positions: Vec<(i64, i32)> = ranked
            .iter()
            .map(|entry| (entry.team_season.team_id, entry.position))
            .collect();
        store.write_positions(old_season_id, &positions)?;
        final_tables.push((division, ranked));
    }

    let mut titles_awarded = 0;
    for award in league_title_awards(&final_tables) {
        let created = store.award_title(&Title::new(
            award.team_id,
            old_season_id,
            TitleKind::League {
                division_id: award.division_id,
            },
            award.is_runner_up,
        ))?;
        if created {
            titles_awarded += 1;
        }
    }

    let placements = season_placements(policy, &final_tables);
    let spec = SeasonSpec {
        name: request.name.clone(),
        start_date: parse_request_date("start_date", &request.start_date)?,
        end_date: parse_request_date("end_date", &request.end_date)?,
    };
    let new_season = store.advance_season(&spec, &placements)?;
    let new_season_id = require_id(new_season.season_id, "season")?;

    info!(
        old_season_id,
        new_season_id,
        titles_awarded,
        teams_placed = placements.len(),
        "Ended season"
    );
    Ok(EndSeasonResponse {
        old_season_id,
        new_season_id,
        titles_awarded,
        teams_placed: placements.len(),
    })
}
