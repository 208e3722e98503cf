// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Team name is empty or invalid.
    InvalidTeamName(String),
    /// Manager name is empty or invalid.
    InvalidManagerName(String),
    /// A team with the same normalized name already exists.
    DuplicateTeam(String),
    /// Season does not exist.
    SeasonNotFound(i64),
    /// No season is currently marked as the current season.
    NoCurrentSeason,
    /// Division does not exist in the specified season.
    DivisionNotFound {
        /// The season id.
        season_id: i64,
        /// The division name or id that was looked up.
        division: String,
    },
    /// Team does not exist.
    TeamNotFound(String),
    /// Gameweek does not exist in the specified season.
    GameweekNotFound {
        /// The season id.
        season_id: i64,
        /// The gameweek number.
        number: i32,
    },
    /// Gameweek number is outside the acceptable upload range.
    InvalidGameweekNumber {
        /// The rejected number.
        number: i32,
    },
    /// A cup group roster is already at capacity.
    GroupRosterFull {
        /// The group name.
        group: String,
        /// The configured teams-per-group capacity.
        capacity: u32,
    },
    /// A team appears more than once in a cup group roster.
    DuplicateGroupTeam {
        /// The group name.
        group: String,
        /// The duplicated team id.
        team_id: i64,
    },
    /// A manager month window is inverted.
    InvalidMonthWindow {
        /// The starting gameweek number.
        start: i32,
        /// The ending gameweek number.
        end: i32,
    },
    /// A title kind string from storage was not recognized.
    InvalidTitleKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::InvalidManagerName(msg) => write!(f, "Invalid manager name: {msg}"),
            Self::DuplicateTeam(name) => write!(f, "A team named '{name}' already exists"),
            Self::SeasonNotFound(id) => write!(f, "Season {id} not found"),
            Self::NoCurrentSeason => write!(f, "No current season is set"),
            Self::DivisionNotFound {
                season_id,
                division,
            } => {
                write!(f, "Division '{division}' not found in season {season_id}")
            }
            Self::TeamNotFound(name) => write!(f, "Team '{name}' not found"),
            Self::GameweekNotFound { season_id, number } => {
                write!(f, "Gameweek {number} not found in season {season_id}")
            }
            Self::InvalidGameweekNumber { number } => {
                write!(
                    f,
                    "Invalid gameweek number {number}. Must be between 1 and 38"
                )
            }
            Self::GroupRosterFull { group, capacity } => {
                write!(f, "Group '{group}' already has {capacity} teams")
            }
            Self::DuplicateGroupTeam { group, team_id } => {
                write!(f, "Team {team_id} is already in group '{group}'")
            }
            Self::InvalidMonthWindow { start, end } => {
                write!(
                    f,
                    "Manager month window is inverted: starts at gameweek {start}, ends at {end}"
                )
            }
            Self::InvalidTitleKind(kind) => write!(f, "Unknown title kind: {kind}"),
        }
    }
}

impl std::error::Error for DomainError {}
