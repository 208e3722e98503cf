// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named gameweek window within a season, used for the Manager of
/// the Month award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerMonth {
    /// The canonical numeric identifier assigned by the database.
    pub month_id: Option<i64>,
    /// The season this month belongs to.
    pub season_id: i64,
    /// Display name, e.g. "September".
    pub name: String,
    /// The first gameweek of the window.
    pub start_gameweek_id: i64,
    /// The last gameweek of the window (inclusive).
    pub end_gameweek_id: i64,
    /// The winning team, once the window's fixtures are fully scored.
    pub winner_id: Option<i64>,
}

impl ManagerMonth {
    /// Creates a new unresolved `ManagerMonth` without a persisted ID.
    #[must_use]
    pub const fn new(
        season_id: i64,
        name: String,
        start_gameweek_id: i64,
        end_gameweek_id: i64,
    ) -> Self {
        Self {
            month_id: None,
            season_id,
            name,
            start_gameweek_id,
            end_gameweek_id,
            winner_id: None,
        }
    }
}

/// An awarded Manager of the Month record.
///
/// Append-only per month: resolution may update the team and score in
/// place when the computed winner changes, but never creates a second
/// row for the same month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerOfTheMonth {
    /// The canonical numeric identifier assigned by the database.
    pub award_id: Option<i64>,
    /// The month this award belongs to.
    pub month_id: i64,
    /// The winning team.
    pub team_id: i64,
    /// The winner's score within the month window.
    pub total_score: f64,
}

/// What a title was won for: a division championship or a cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleKind {
    /// A league title in the given division.
    League {
        /// The division the title was won in.
        division_id: i64,
    },
    /// A cup title in the given competition.
    Cup {
        /// The competition the title was won in.
        cup_id: i64,
    },
}

impl TitleKind {
    /// The storage discriminant for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::League { .. } => "league",
            Self::Cup { .. } => "cup",
        }
    }
}

/// The storage discriminant alone, without its target id.
///
/// Used when reassembling a `TitleKind` from its discriminant column
/// and the nullable division/cup foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKindTag {
    /// A league title.
    League,
    /// A cup title.
    Cup,
}

impl FromStr for TitleKindTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "league" => Ok(Self::League),
            "cup" => Ok(Self::Cup),
            _ => Err(DomainError::InvalidTitleKind(s.to_string())),
        }
    }
}

/// An awarded championship or runner-up record.
///
/// Creation is idempotent on the natural key
/// (team, season, kind, division-or-cup, runner-up flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// The canonical numeric identifier assigned by the database.
    pub title_id: Option<i64>,
    /// The team the title belongs to.
    pub team_id: i64,
    /// The season the title was won in.
    pub season_id: i64,
    /// League or cup, with the competition won.
    pub kind: TitleKind,
    /// Whether this records a runner-up finish rather than a win.
    pub is_runner_up: bool,
}

impl Title {
    /// Creates a new `Title` without a persisted ID.
    #[must_use]
    pub const fn new(team_id: i64, season_id: i64, kind: TitleKind, is_runner_up: bool) -> Self {
        Self {
            title_id: None,
            team_id,
            season_id,
            kind,
            is_runner_up,
        }
    }
}
