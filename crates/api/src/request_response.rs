// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These are distinct from domain types and represent the API
//! contract; dates cross the boundary as `yyyy-mm-dd` strings.

use serde::{Deserialize, Serialize};

/// API request to register a team into a season's division.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterTeamRequest {
    /// The season to register into.
    pub season_id: i64,
    /// The division to register into.
    pub division_id: i64,
    /// Team name.
    pub name: String,
    /// Manager name.
    pub manager_name: String,
}

/// API response for a successful team registration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterTeamResponse {
    /// The new team's ID.
    pub team_id: i64,
    /// The normalized team name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to rename a team or change its manager.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTeamRequest {
    /// New team name.
    pub name: String,
    /// New manager name.
    pub manager_name: String,
}

/// API request for a bulk score upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreUploadRequest {
    /// The season being scored.
    pub season_id: i64,
    /// The gameweek the pasted scores belong to.
    pub gameweek_id: i64,
    /// The division the pasted scores belong to.
    pub division_id: i64,
    /// The pasted score sheet.
    pub scores_text: String,
}

/// API request for a bulk fixture upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureUploadRequest {
    /// The season the fixtures belong to.
    pub season_id: i64,
    /// The division the fixtures belong to.
    pub division_id: i64,
    /// The pasted fixture sheet.
    pub fixtures_text: String,
}

/// Outcome of a bulk upload: how many rows landed, how many were
/// rejected, and why.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadOutcome {
    /// Rows successfully applied.
    pub updated: usize,
    /// Rows rejected.
    pub failed: usize,
    /// One message per rejected row.
    pub errors: Vec<String>,
}

/// One row of a league table response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueTableEntry {
    /// 1-based position; exact ties share a position.
    pub position: i32,
    /// The team.
    pub team_id: i64,
    /// The team's name.
    pub team_name: String,
    /// The team's manager.
    pub manager_name: String,
    /// Played fixtures.
    pub played: u32,
    /// Wins.
    pub wins: u32,
    /// Draws.
    pub draws: u32,
    /// Losses.
    pub losses: u32,
    /// League points.
    pub points: i32,
    /// Sum of own scores.
    pub total_score: f64,
}

/// A division's league table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueTableResponse {
    /// The season.
    pub season_id: i64,
    /// The division.
    pub division_id: i64,
    /// The division's name.
    pub division_name: String,
    /// Ranked rows.
    pub entries: Vec<LeagueTableEntry>,
}

/// One fixture in a fixtures/results listing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureDto {
    /// The fixture.
    pub fixture_id: i64,
    /// Gameweek number.
    pub gameweek_number: i32,
    /// The division.
    pub division_id: i64,
    /// Home team.
    pub home_team_id: i64,
    /// Home team name.
    pub home_team_name: String,
    /// Away team.
    pub away_team_id: i64,
    /// Away team name.
    pub away_team_name: String,
    /// Home score, if played.
    pub home_score: Option<f64>,
    /// Away score, if played.
    pub away_score: Option<f64>,
}

/// Filters for a fixtures/results listing.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct FixtureFilter {
    /// Restrict to played (`Some(true)`) or upcoming (`Some(false)`)
    /// fixtures.
    pub played: Option<bool>,
    /// Restrict to one gameweek number.
    pub gameweek: Option<i32>,
    /// Restrict to one division.
    pub division_id: Option<i64>,
    /// Restrict to fixtures involving one team.
    pub team_id: Option<i64>,
}

/// One row of a cup group table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupTableEntry {
    /// The team.
    pub team_id: i64,
    /// The team's name.
    pub team_name: String,
    /// Played matches.
    pub played: u32,
    /// Wins.
    pub won: u32,
    /// Draws.
    pub drawn: u32,
    /// Losses.
    pub lost: u32,
    /// Points scored by the team.
    pub goals_for: f64,
    /// Points scored against the team.
    pub goals_against: f64,
    /// Goals for minus goals against.
    pub goal_difference: f64,
    /// Group points.
    pub points: i32,
}

/// A cup group with its computed table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupDto {
    /// The group.
    pub group_id: i64,
    /// Display name, e.g. "Group A".
    pub name: String,
    /// The computed table, winner first.
    pub table: Vec<GroupTableEntry>,
}

/// A group winner or runner-up in the qualification split.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QualifierDto {
    /// The group the team came from.
    pub group_id: i64,
    /// 1 for the group winner, 2 for the runner-up.
    pub group_position: i32,
    /// The team.
    pub team_id: i64,
    /// The team's name.
    pub team_name: String,
    /// Group points.
    pub points: i32,
    /// Points scored, the cross-group tie-break.
    pub goals_for: f64,
}

/// A two-leg knockout tie.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TieDto {
    /// The tie.
    pub match_id: i64,
    /// Home team.
    pub home_team_id: i64,
    /// Home team name.
    pub home_team_name: String,
    /// Away team.
    pub away_team_id: i64,
    /// Away team name.
    pub away_team_name: String,
    /// Home side's first-leg score.
    pub first_leg_home_score: Option<f64>,
    /// Away side's first-leg score.
    pub first_leg_away_score: Option<f64>,
    /// Home side's second-leg score.
    pub second_leg_home_score: Option<f64>,
    /// Away side's second-leg score.
    pub second_leg_away_score: Option<f64>,
    /// Home aggregate, once the first leg is complete.
    pub aggregate_home: Option<f64>,
    /// Away aggregate, once the first leg is complete.
    pub aggregate_away: Option<f64>,
    /// The winner, once resolved.
    pub winner_id: Option<i64>,
    /// True when both legs are complete but the aggregates are
    /// exactly equal: the tie is stalled, not pending.
    pub aggregate_tied: bool,
}

/// A knockout round with its ties.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoundDto {
    /// The round.
    pub round_id: i64,
    /// Round name.
    pub name: String,
    /// Stage order.
    pub order: i32,
    /// The round's ties.
    pub ties: Vec<TieDto>,
}

/// A cup competition overview.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CupOverviewResponse {
    /// The competition.
    pub cup_id: i64,
    /// Competition name.
    pub name: String,
    /// The season.
    pub season_id: i64,
    /// "groups" or "knockout".
    pub format: String,
    /// Group tables (group format only).
    pub groups: Vec<GroupDto>,
    /// Direct qualifiers out of the group stage.
    pub direct_qualifiers: Vec<QualifierDto>,
    /// The playoff pool out of the group stage.
    pub playoff_pool: Vec<QualifierDto>,
    /// Knockout rounds.
    pub rounds: Vec<RoundDto>,
}

/// One team's entry in a month's standings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthStandingDto {
    /// The team.
    pub team_id: i64,
    /// The team's name.
    pub team_name: String,
    /// Played fixtures in the window.
    pub played: u32,
    /// Wins.
    pub wins: u32,
    /// Draws.
    pub draws: u32,
    /// Losses.
    pub losses: u32,
    /// Points scored by the team.
    pub goals_for: f64,
    /// Points scored against the team.
    pub goals_against: f64,
    /// Goals for minus goals against.
    pub goal_difference: f64,
    /// Window points.
    pub points: i32,
}

/// Result of attempting to resolve a manager month.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthResolutionResponse {
    /// The month.
    pub month_id: i64,
    /// Whether the completeness gate passed and the award was
    /// materialized.
    pub resolved: bool,
    /// The winning team, when resolved.
    pub winner_team_id: Option<i64>,
    /// The window standings (empty when nothing has been played).
    pub standings: Vec<MonthStandingDto>,
}

/// API request to create a manager month.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateMonthRequest {
    /// The season.
    pub season_id: i64,
    /// Display name, e.g. "September".
    pub name: String,
    /// First gameweek number of the window.
    pub start_gameweek: i32,
    /// Last gameweek number of the window (inclusive).
    pub end_gameweek: i32,
}

/// API request to end a season and start the next one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndSeasonRequest {
    /// The season being ended.
    pub season_id: i64,
    /// The new season's name.
    pub name: String,
    /// The new season's first day, `yyyy-mm-dd`.
    pub start_date: String,
    /// The new season's last day, `yyyy-mm-dd`.
    pub end_date: String,
}

/// API response after a season transition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndSeasonResponse {
    /// The old season.
    pub old_season_id: i64,
    /// The new season.
    pub new_season_id: i64,
    /// League titles newly awarded during the transition.
    pub titles_awarded: usize,
    /// Teams re-enrolled into the new season.
    pub teams_placed: usize,
}

/// A title in a team profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TitleDto {
    /// The season the title was won in.
    pub season_id: i64,
    /// "league" or "cup".
    pub kind: String,
    /// The division, for league titles.
    pub division_id: Option<i64>,
    /// The competition, for cup titles.
    pub cup_id: Option<i64>,
    /// Whether this records a runner-up finish.
    pub is_runner_up: bool,
}

/// A team's profile within a season.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamProfileResponse {
    /// The team.
    pub team_id: i64,
    /// The team's name.
    pub name: String,
    /// The team's manager.
    pub manager_name: String,
    /// The division the team plays in this season.
    pub division_id: i64,
    /// Current position within the division.
    pub position: i32,
    /// Cached league points.
    pub points: i32,
    /// Cached total score.
    pub total_score: f64,
    /// Played fixtures.
    pub played: u32,
    /// Wins.
    pub wins: u32,
    /// Draws.
    pub draws: u32,
    /// Losses.
    pub losses: u32,
    /// Recent results, newest first, as "W"/"D"/"L" letters.
    pub recent_form: String,
    /// The team's titles across seasons.
    pub titles: Vec<TitleDto>,
}
