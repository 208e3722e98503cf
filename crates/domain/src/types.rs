// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::normalize::normalize_team_name;
use serde::{Deserialize, Serialize};

/// A league season.
///
/// At most one season may be current at a time. The exclusivity is
/// enforced by the `set_current_season` mutation in the persistence
/// layer, never assumed by calculators: every calculator takes the
/// season it operates on as an explicit argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the season has not been persisted yet.
    pub season_id: Option<i64>,
    /// Display name, e.g. "2025/26".
    pub name: String,
    /// First day of the season.
    pub start_date: time::Date,
    /// Last day of the season.
    pub end_date: time::Date,
    /// Whether this is the season currently being administered.
    pub is_current: bool,
}

impl Season {
    /// Creates a new `Season` without a persisted ID.
    #[must_use]
    pub const fn new(name: String, start_date: time::Date, end_date: time::Date) -> Self {
        Self {
            season_id: None,
            name,
            start_date,
            end_date,
            is_current: false,
        }
    }
}

/// A division within a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// The canonical numeric identifier assigned by the database.
    pub division_id: Option<i64>,
    /// The season this division belongs to.
    pub season_id: i64,
    /// Division name, e.g. "Premier League".
    pub name: String,
}

impl Division {
    /// The top division name.
    pub const PREMIER_LEAGUE: &'static str = "Premier League";
    /// The second division name.
    pub const CHAMPIONSHIP: &'static str = "Championship";
    /// The third division name.
    pub const LEAGUE_ONE: &'static str = "League One";

    /// Creates a new `Division` without a persisted ID.
    #[must_use]
    pub const fn new(season_id: i64, name: String) -> Self {
        Self {
            division_id: None,
            season_id,
            name,
        }
    }

    /// Returns the display/processing rank for this division.
    ///
    /// Known division names map to a fixed rank; anything else sorts
    /// last (99), with ties broken by insertion order.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self.name.as_str() {
            Self::PREMIER_LEAGUE => 1,
            Self::CHAMPIONSHIP => 2,
            Self::LEAGUE_ONE => 3,
            _ => 99,
        }
    }
}

/// A team. Identity is stable across seasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The canonical numeric identifier assigned by the database.
    pub team_id: Option<i64>,
    /// Normalized display name, unique across the system.
    name: String,
    /// The manager running this team.
    pub manager_name: String,
}

impl Team {
    /// Creates a new `Team` without a persisted ID.
    ///
    /// The name is normalized (trimmed, apostrophes folded) so that
    /// lookups against pasted text behave consistently.
    #[must_use]
    pub fn new(name: &str, manager_name: String) -> Self {
        Self {
            team_id: None,
            name: normalize_team_name(name),
            manager_name,
        }
    }

    /// Creates a `Team` with an existing persisted ID.
    #[must_use]
    pub fn with_id(team_id: i64, name: &str, manager_name: String) -> Self {
        Self {
            team_id: Some(team_id),
            name: normalize_team_name(name),
            manager_name,
        }
    }

    /// Returns the normalized team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the team, re-normalizing the new name.
    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_team_name(name);
    }
}

/// A team's participation record for one season.
///
/// `points` and `total_score` are derived caches: they must always
/// equal the recomputation over that team's played fixtures in the
/// season. The cache is refreshed after every score mutation and is
/// never treated as an independent source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeason {
    /// The canonical numeric identifier assigned by the database.
    pub id: Option<i64>,
    /// The team.
    pub team_id: i64,
    /// The season.
    pub season_id: i64,
    /// The division the team plays in this season.
    pub division_id: i64,
    /// Cached league points (3 per win, 1 per draw).
    pub points: i32,
    /// Cached sum of the team's own scores across played fixtures.
    pub total_score: f64,
    /// 1-based rank within the division, recomputed on demand.
    pub position: Option<i32>,
}

impl TeamSeason {
    /// Creates a fresh zeroed `TeamSeason` without a persisted ID.
    #[must_use]
    pub const fn new(team_id: i64, season_id: i64, division_id: i64) -> Self {
        Self {
            id: None,
            team_id,
            season_id,
            division_id,
            points: 0,
            total_score: 0.0,
            position: None,
        }
    }
}

/// A numbered round of fixtures within a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gameweek {
    /// The canonical numeric identifier assigned by the database.
    pub gameweek_id: Option<i64>,
    /// The season this gameweek belongs to.
    pub season_id: i64,
    /// Gameweek number, 1-based. 38 per season in practice; the
    /// calculators do not enforce a ceiling.
    pub number: i32,
    /// Lineup deadline for this gameweek.
    pub deadline: time::Date,
    /// Whether this is the gameweek currently in play.
    pub is_current: bool,
}

impl Gameweek {
    /// Creates a new `Gameweek` without a persisted ID.
    #[must_use]
    pub const fn new(season_id: i64, number: i32, deadline: time::Date) -> Self {
        Self {
            gameweek_id: None,
            season_id,
            number,
            deadline,
            is_current: false,
        }
    }
}

/// Which side of a fixture a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureSide {
    /// The home side.
    Home,
    /// The away side.
    Away,
}

/// One scheduled or scored match between two teams.
///
/// A fixture is "played" iff both scores are set. Unplayed fixtures are
/// excluded from every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// The canonical numeric identifier assigned by the database.
    pub fixture_id: Option<i64>,
    /// The gameweek this fixture belongs to.
    pub gameweek_id: i64,
    /// The division this fixture belongs to.
    pub division_id: i64,
    /// The home team.
    pub home_team_id: i64,
    /// The away team.
    pub away_team_id: i64,
    /// Home side's score, `None` until played.
    pub home_score: Option<f64>,
    /// Away side's score, `None` until played.
    pub away_score: Option<f64>,
}

impl Fixture {
    /// Creates a new unplayed `Fixture` without a persisted ID.
    #[must_use]
    pub const fn new(gameweek_id: i64, division_id: i64, home_team_id: i64, away_team_id: i64) -> Self {
        Self {
            fixture_id: None,
            gameweek_id,
            division_id,
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
        }
    }

    /// Returns whether both scores are set.
    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    /// Returns whether the given team plays in this fixture.
    #[must_use]
    pub const fn involves(&self, team_id: i64) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Returns the side the given team occupies, if it plays here.
    #[must_use]
    pub const fn side_of(&self, team_id: i64) -> Option<FixtureSide> {
        if self.home_team_id == team_id {
            Some(FixtureSide::Home)
        } else if self.away_team_id == team_id {
            Some(FixtureSide::Away)
        } else {
            None
        }
    }
}

/// The Fixture Store read model: a fixture joined with its gameweek
/// number. Every calculator consumes slices of these; the persistence
/// layer produces them and the calculators never touch the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    /// Gameweek number the fixture was played in.
    pub gameweek_number: i32,
    /// The division the fixture belongs to.
    pub division_id: i64,
    /// The home team.
    pub home_team_id: i64,
    /// The away team.
    pub away_team_id: i64,
    /// Home side's score, `None` until played.
    pub home_score: Option<f64>,
    /// Away side's score, `None` until played.
    pub away_score: Option<f64>,
}

impl FixtureRecord {
    /// Returns whether both scores are set.
    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    /// Returns whether the given team plays in this fixture.
    #[must_use]
    pub const fn involves(&self, team_id: i64) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Returns the given team's own score, if the fixture is played
    /// and the team participates.
    #[must_use]
    pub fn own_score(&self, team_id: i64) -> Option<f64> {
        if !self.is_played() {
            return None;
        }
        if self.home_team_id == team_id {
            self.home_score
        } else if self.away_team_id == team_id {
            self.away_score
        } else {
            None
        }
    }

    /// Returns the opposing side's score, if the fixture is played and
    /// the team participates.
    #[must_use]
    pub fn opponent_score(&self, team_id: i64) -> Option<f64> {
        if !self.is_played() {
            return None;
        }
        if self.home_team_id == team_id {
            self.away_score
        } else if self.away_team_id == team_id {
            self.home_score
        } else {
            None
        }
    }

    /// Returns the result from the given team's perspective, if the
    /// fixture is played and the team participates.
    #[must_use]
    pub fn result_for(&self, team_id: i64) -> Option<MatchResult> {
        let own = self.own_score(team_id)?;
        let opponent = self.opponent_score(team_id)?;
        Some(MatchResult::from_scores(own, opponent))
    }
}

/// The outcome of a played fixture from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Strictly higher score than the opponent.
    Win,
    /// Exactly equal scores.
    Draw,
    /// Strictly lower score than the opponent.
    Loss,
}

impl MatchResult {
    /// Classifies a played fixture from the perspective of the side
    /// that scored `own`.
    ///
    /// Draws require exact equality of the two scores. Scores are
    /// entered values, not computed ones, so identical entries compare
    /// equal; no epsilon is applied.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_scores(own: f64, opponent: f64) -> Self {
        if own > opponent {
            Self::Win
        } else if own == opponent {
            Self::Draw
        } else {
            Self::Loss
        }
    }

    /// League points awarded for this result: 3 for a win, 1 for a
    /// draw, 0 for a loss.
    #[must_use]
    pub const fn points(self) -> i32 {
        match self {
            Self::Win => 3,
            Self::Draw => 1,
            Self::Loss => 0,
        }
    }

    /// Single-letter form abbreviation (W/D/L).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Win => 'W',
            Self::Draw => 'D',
            Self::Loss => 'L',
        }
    }
}
