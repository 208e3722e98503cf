// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row models for the league schema.
//!
//! Each table has a `*Row` struct for reads and, where rows are
//! created from domain values, a `New*` struct for inserts. Dates are
//! stored as ISO `yyyy-mm-dd` text; flags as integers. The conversion
//! functions here are the only place storage representations and
//! domain types meet.

use crate::diesel_schema::{
    cup_competitions, cup_group_matches, cup_group_teams, cup_groups, cup_matches, cup_rounds,
    divisions, fixtures, gameweeks, manager_month_awards, manager_months, seasons, team_seasons,
    teams, titles,
};
use crate::error::PersistenceError;
use diesel::prelude::*;
use gaffer_domain::{
    CompetitionFormat, CupCompetition, CupGroup, CupGroupMatch, CupGroupTeam, CupMatch, CupRound,
    Division, Fixture, Gameweek, GroupConfig, ManagerMonth, ManagerOfTheMonth, Season, Team,
    TeamSeason, Title, TitleKind, TitleKindTag,
};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a stored `yyyy-mm-dd` date.
pub fn parse_date(text: &str) -> Result<time::Date, PersistenceError> {
    time::Date::parse(text, DATE_FORMAT)
        .map_err(|e| PersistenceError::DataIntegrity(format!("Bad stored date '{text}': {e}")))
}

/// Formats a date for storage as `yyyy-mm-dd`.
pub fn format_date(date: time::Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::DataIntegrity(format!("Unformattable date: {e}")))
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = seasons)]
pub struct SeasonRow {
    pub season_id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: i32,
}

impl SeasonRow {
    /// Converts the row into a domain `Season`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored date does not parse.
    pub fn into_domain(self) -> Result<Season, PersistenceError> {
        Ok(Season {
            season_id: Some(self.season_id),
            name: self.name,
            start_date: parse_date(&self.start_date)?,
            end_date: parse_date(&self.end_date)?,
            is_current: self.is_current != 0,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = seasons)]
pub struct NewSeason {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = divisions)]
pub struct DivisionRow {
    pub division_id: i64,
    pub season_id: i64,
    pub name: String,
}

impl From<DivisionRow> for Division {
    fn from(row: DivisionRow) -> Self {
        Self {
            division_id: Some(row.division_id),
            season_id: row.season_id,
            name: row.name,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = divisions)]
pub struct NewDivision {
    pub season_id: i64,
    pub name: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = teams)]
pub struct TeamRow {
    pub team_id: i64,
    pub name: String,
    pub manager_name: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self::with_id(row.team_id, &row.name, row.manager_name)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = teams)]
pub struct NewTeam {
    pub name: String,
    pub manager_name: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = team_seasons)]
pub struct TeamSeasonRow {
    pub id: i64,
    pub team_id: i64,
    pub season_id: i64,
    pub division_id: i64,
    pub points: i32,
    pub total_score: f64,
    pub position: Option<i32>,
}

impl From<TeamSeasonRow> for TeamSeason {
    fn from(row: TeamSeasonRow) -> Self {
        Self {
            id: Some(row.id),
            team_id: row.team_id,
            season_id: row.season_id,
            division_id: row.division_id,
            points: row.points,
            total_score: row.total_score,
            position: row.position,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = team_seasons)]
pub struct NewTeamSeason {
    pub team_id: i64,
    pub season_id: i64,
    pub division_id: i64,
    pub points: i32,
    pub total_score: f64,
    pub position: Option<i32>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = gameweeks)]
pub struct GameweekRow {
    pub gameweek_id: i64,
    pub season_id: i64,
    pub number: i32,
    pub deadline: String,
    pub is_current: i32,
}

impl GameweekRow {
    /// Converts the row into a domain `Gameweek`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored deadline does not parse.
    pub fn into_domain(self) -> Result<Gameweek, PersistenceError> {
        Ok(Gameweek {
            gameweek_id: Some(self.gameweek_id),
            season_id: self.season_id,
            number: self.number,
            deadline: parse_date(&self.deadline)?,
            is_current: self.is_current != 0,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = gameweeks)]
pub struct NewGameweek {
    pub season_id: i64,
    pub number: i32,
    pub deadline: String,
    pub is_current: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = fixtures)]
pub struct FixtureRow {
    pub fixture_id: i64,
    pub gameweek_id: i64,
    pub division_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: Option<f64>,
    pub away_score: Option<f64>,
}

impl From<FixtureRow> for Fixture {
    fn from(row: FixtureRow) -> Self {
        Self {
            fixture_id: Some(row.fixture_id),
            gameweek_id: row.gameweek_id,
            division_id: row.division_id,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            home_score: row.home_score,
            away_score: row.away_score,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = fixtures)]
pub struct NewFixture {
    pub gameweek_id: i64,
    pub division_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: Option<f64>,
    pub away_score: Option<f64>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cup_competitions)]
pub struct CupCompetitionRow {
    pub cup_id: i64,
    pub season_id: i64,
    pub name: String,
    pub has_groups: i32,
    pub num_groups: i32,
    pub teams_per_group: i32,
}

impl CupCompetitionRow {
    /// Converts the row into a domain `CupCompetition`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored group counts are negative.
    pub fn into_domain(self) -> Result<CupCompetition, PersistenceError> {
        let format = if self.has_groups == 0 {
            CompetitionFormat::Knockout
        } else {
            let num_groups = u32::try_from(self.num_groups).map_err(|_| {
                PersistenceError::DataIntegrity(format!("Bad group count {}", self.num_groups))
            })?;
            let teams_per_group = u32::try_from(self.teams_per_group).map_err(|_| {
                PersistenceError::DataIntegrity(format!(
                    "Bad teams-per-group {}",
                    self.teams_per_group
                ))
            })?;
            CompetitionFormat::Groups(GroupConfig {
                num_groups,
                teams_per_group,
            })
        };
        Ok(CupCompetition {
            cup_id: Some(self.cup_id),
            season_id: self.season_id,
            name: self.name,
            format,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cup_competitions)]
pub struct NewCupCompetition {
    pub season_id: i64,
    pub name: String,
    pub has_groups: i32,
    pub num_groups: i32,
    pub teams_per_group: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cup_groups)]
pub struct CupGroupRow {
    pub group_id: i64,
    pub cup_id: i64,
    pub name: String,
    pub sort_order: i32,
}

impl From<CupGroupRow> for CupGroup {
    fn from(row: CupGroupRow) -> Self {
        Self {
            group_id: Some(row.group_id),
            cup_id: row.cup_id,
            name: row.name,
            order: row.sort_order,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cup_groups)]
pub struct NewCupGroup {
    pub cup_id: i64,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cup_group_teams)]
pub struct CupGroupTeamRow {
    pub id: i64,
    pub group_id: i64,
    pub team_id: i64,
}

impl From<CupGroupTeamRow> for CupGroupTeam {
    fn from(row: CupGroupTeamRow) -> Self {
        Self {
            id: Some(row.id),
            group_id: row.group_id,
            team_id: row.team_id,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cup_group_teams)]
pub struct NewCupGroupTeam {
    pub group_id: i64,
    pub team_id: i64,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cup_group_matches)]
pub struct CupGroupMatchRow {
    pub id: i64,
    pub group_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub gameweek_id: Option<i64>,
    pub home_score: Option<f64>,
    pub away_score: Option<f64>,
}

impl From<CupGroupMatchRow> for CupGroupMatch {
    fn from(row: CupGroupMatchRow) -> Self {
        Self {
            id: Some(row.id),
            group_id: row.group_id,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            gameweek_id: row.gameweek_id,
            home_score: row.home_score,
            away_score: row.away_score,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cup_group_matches)]
pub struct NewCupGroupMatch {
    pub group_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub gameweek_id: Option<i64>,
    pub home_score: Option<f64>,
    pub away_score: Option<f64>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cup_rounds)]
pub struct CupRoundRow {
    pub round_id: i64,
    pub cup_id: i64,
    pub name: String,
    pub sort_order: i32,
    pub first_leg_gameweek_id: Option<i64>,
    pub second_leg_gameweek_id: Option<i64>,
    pub num_matches: i32,
}

impl From<CupRoundRow> for CupRound {
    fn from(row: CupRoundRow) -> Self {
        Self {
            round_id: Some(row.round_id),
            cup_id: row.cup_id,
            name: row.name,
            order: row.sort_order,
            first_leg_gameweek_id: row.first_leg_gameweek_id,
            second_leg_gameweek_id: row.second_leg_gameweek_id,
            num_matches: row.num_matches,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cup_rounds)]
pub struct NewCupRound {
    pub cup_id: i64,
    pub name: String,
    pub sort_order: i32,
    pub first_leg_gameweek_id: Option<i64>,
    pub second_leg_gameweek_id: Option<i64>,
    pub num_matches: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cup_matches)]
pub struct CupMatchRow {
    pub match_id: i64,
    pub round_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub first_leg_home_score: Option<f64>,
    pub first_leg_away_score: Option<f64>,
    pub second_leg_home_score: Option<f64>,
    pub second_leg_away_score: Option<f64>,
    pub winner_id: Option<i64>,
}

impl From<CupMatchRow> for CupMatch {
    fn from(row: CupMatchRow) -> Self {
        Self {
            match_id: Some(row.match_id),
            round_id: row.round_id,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            first_leg_home_score: row.first_leg_home_score,
            first_leg_away_score: row.first_leg_away_score,
            second_leg_home_score: row.second_leg_home_score,
            second_leg_away_score: row.second_leg_away_score,
            winner_id: row.winner_id,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cup_matches)]
pub struct NewCupMatch {
    pub round_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub first_leg_home_score: Option<f64>,
    pub first_leg_away_score: Option<f64>,
    pub second_leg_home_score: Option<f64>,
    pub second_leg_away_score: Option<f64>,
    pub winner_id: Option<i64>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = manager_months)]
pub struct ManagerMonthRow {
    pub month_id: i64,
    pub season_id: i64,
    pub name: String,
    pub start_gameweek_id: i64,
    pub end_gameweek_id: i64,
    pub winner_id: Option<i64>,
}

impl From<ManagerMonthRow> for ManagerMonth {
    fn from(row: ManagerMonthRow) -> Self {
        Self {
            month_id: Some(row.month_id),
            season_id: row.season_id,
            name: row.name,
            start_gameweek_id: row.start_gameweek_id,
            end_gameweek_id: row.end_gameweek_id,
            winner_id: row.winner_id,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = manager_months)]
pub struct NewManagerMonth {
    pub season_id: i64,
    pub name: String,
    pub start_gameweek_id: i64,
    pub end_gameweek_id: i64,
    pub winner_id: Option<i64>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = manager_month_awards)]
pub struct ManagerMonthAwardRow {
    pub award_id: i64,
    pub month_id: i64,
    pub team_id: i64,
    pub total_score: f64,
}

impl From<ManagerMonthAwardRow> for ManagerOfTheMonth {
    fn from(row: ManagerMonthAwardRow) -> Self {
        Self {
            award_id: Some(row.award_id),
            month_id: row.month_id,
            team_id: row.team_id,
            total_score: row.total_score,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = manager_month_awards)]
pub struct NewManagerMonthAward {
    pub month_id: i64,
    pub team_id: i64,
    pub total_score: f64,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = titles)]
pub struct TitleRow {
    pub title_id: i64,
    pub team_id: i64,
    pub season_id: i64,
    pub kind: String,
    pub division_id: Option<i64>,
    pub cup_id: Option<i64>,
    pub is_runner_up: i32,
}

impl TitleRow {
    /// Converts the row into a domain `Title`.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind discriminant is unknown or the
    /// matching foreign key is missing.
    pub fn into_domain(self) -> Result<Title, PersistenceError> {
        let tag = TitleKindTag::from_str(&self.kind)
            .map_err(|e| PersistenceError::DataIntegrity(e.to_string()))?;
        let kind = match tag {
            TitleKindTag::League => {
                let division_id = self.division_id.ok_or_else(|| {
                    PersistenceError::DataIntegrity(format!(
                        "League title {} has no division",
                        self.title_id
                    ))
                })?;
                TitleKind::League { division_id }
            }
            TitleKindTag::Cup => {
                let cup_id = self.cup_id.ok_or_else(|| {
                    PersistenceError::DataIntegrity(format!(
                        "Cup title {} has no competition",
                        self.title_id
                    ))
                })?;
                TitleKind::Cup { cup_id }
            }
        };
        Ok(Title {
            title_id: Some(self.title_id),
            team_id: self.team_id,
            season_id: self.season_id,
            kind,
            is_runner_up: self.is_runner_up != 0,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = titles)]
pub struct NewTitle {
    pub team_id: i64,
    pub season_id: i64,
    pub kind: String,
    pub division_id: Option<i64>,
    pub cup_id: Option<i64>,
    pub is_runner_up: i32,
}

impl NewTitle {
    /// Builds an insertable row from a domain `Title`.
    #[must_use]
    pub fn from_domain(title: &Title) -> Self {
        let (division_id, cup_id) = match title.kind {
            TitleKind::League { division_id } => (Some(division_id), None),
            TitleKind::Cup { cup_id } => (None, Some(cup_id)),
        };
        Self {
            team_id: title.team_id,
            season_id: title.season_id,
            kind: title.kind.as_str().to_string(),
            division_id,
            cup_id,
            is_runner_up: i32::from(title.is_runner_up),
        }
    }
}
