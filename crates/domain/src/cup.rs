// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cup competition entities.
//!
//! A competition is either a group-stage format (round-robin groups
//! feeding a knockout bracket) or a pure knockout. The two formats are
//! a tagged variant so that group-size and round-ordering invariants
//! attach to the variant that owns them instead of hanging off a
//! boolean column.

use serde::{Deserialize, Serialize};

/// Configuration for the group stage of a group-format competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Number of groups.
    pub num_groups: u32,
    /// Maximum roster size per group.
    pub teams_per_group: u32,
}

impl Default for GroupConfig {
    /// The deployed group shape: twelve groups of three.
    fn default() -> Self {
        Self {
            num_groups: 12,
            teams_per_group: 3,
        }
    }
}

/// The format of a cup competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionFormat {
    /// Round-robin groups feeding a knockout bracket.
    Groups(GroupConfig),
    /// Two-leg knockout rounds only.
    Knockout,
}

impl CompetitionFormat {
    /// Returns the group configuration for a group-format competition.
    #[must_use]
    pub const fn group_config(&self) -> Option<GroupConfig> {
        match self {
            Self::Groups(config) => Some(*config),
            Self::Knockout => None,
        }
    }
}

/// A cup competition within a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupCompetition {
    /// The canonical numeric identifier assigned by the database.
    pub cup_id: Option<i64>,
    /// The season this competition belongs to.
    pub season_id: i64,
    /// Competition name.
    pub name: String,
    /// Group-stage or knockout format.
    pub format: CompetitionFormat,
}

impl CupCompetition {
    /// Creates a new `CupCompetition` without a persisted ID.
    #[must_use]
    pub const fn new(season_id: i64, name: String, format: CompetitionFormat) -> Self {
        Self {
            cup_id: None,
            season_id,
            name,
            format,
        }
    }
}

/// Returns the display name for the group at the given zero-based
/// index: "Group A" through "Group Z", then "Group 27" onward.
#[must_use]
pub fn group_name(index: u32) -> String {
    u8::try_from(index).ok().map_or_else(
        || format!("Group {}", index + 1),
        |i| {
            if i < 26 {
                format!("Group {}", char::from(b'A' + i))
            } else {
                format!("Group {}", u32::from(i) + 1)
            }
        },
    )
}

/// An ordered subdivision of a group-format competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupGroup {
    /// The canonical numeric identifier assigned by the database.
    pub group_id: Option<i64>,
    /// The competition this group belongs to.
    pub cup_id: i64,
    /// Display name, e.g. "Group A".
    pub name: String,
    /// 1-based ordering within the competition.
    pub order: i32,
}

impl CupGroup {
    /// Creates a new `CupGroup` without a persisted ID.
    #[must_use]
    pub const fn new(cup_id: i64, name: String, order: i32) -> Self {
        Self {
            group_id: None,
            cup_id,
            name,
            order,
        }
    }
}

/// A team's membership in a cup group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupGroupTeam {
    /// The canonical numeric identifier assigned by the database.
    pub id: Option<i64>,
    /// The group.
    pub group_id: i64,
    /// The team.
    pub team_id: i64,
}

/// A single-leg match inside a cup group.
///
/// The score is not entered directly: it is pulled from the league
/// fixture the two teams play in the linked gameweek, and stays unset
/// until that fixture is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CupGroupMatch {
    /// The canonical numeric identifier assigned by the database.
    pub id: Option<i64>,
    /// The group this match belongs to.
    pub group_id: i64,
    /// The home team.
    pub home_team_id: i64,
    /// The away team.
    pub away_team_id: i64,
    /// The gameweek the scores are sourced from, if scheduled.
    pub gameweek_id: Option<i64>,
    /// Home side's sourced score.
    pub home_score: Option<f64>,
    /// Away side's sourced score.
    pub away_score: Option<f64>,
}

impl CupGroupMatch {
    /// Creates a new unscored `CupGroupMatch` without a persisted ID.
    #[must_use]
    pub const fn new(group_id: i64, home_team_id: i64, away_team_id: i64) -> Self {
        Self {
            id: None,
            group_id,
            home_team_id,
            away_team_id,
            gameweek_id: None,
            home_score: None,
            away_score: None,
        }
    }

    /// Returns whether both scores are set.
    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}

/// An ordered stage of a knockout competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupRound {
    /// The canonical numeric identifier assigned by the database.
    pub round_id: Option<i64>,
    /// The competition this round belongs to.
    pub cup_id: i64,
    /// Round name, e.g. "Semi Final".
    pub name: String,
    /// 1-based ordering within the competition.
    pub order: i32,
    /// The gameweek first legs are sourced from.
    pub first_leg_gameweek_id: Option<i64>,
    /// The gameweek second legs are sourced from.
    pub second_leg_gameweek_id: Option<i64>,
    /// Expected number of matches in this round. Not hard-enforced,
    /// but assumed by downstream pairing logic.
    pub num_matches: i32,
}

/// A two-leg knockout tie.
///
/// The four leg scores are sourced from league fixtures by gameweek
/// and team-pair join; `winner_id` is set only once both legs are
/// complete and the aggregates differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CupMatch {
    /// The canonical numeric identifier assigned by the database.
    pub match_id: Option<i64>,
    /// The round this tie belongs to.
    pub round_id: i64,
    /// The home team of the tie.
    pub home_team_id: i64,
    /// The away team of the tie.
    pub away_team_id: i64,
    /// Home side's first-leg score.
    pub first_leg_home_score: Option<f64>,
    /// Away side's first-leg score.
    pub first_leg_away_score: Option<f64>,
    /// Home side's second-leg score.
    pub second_leg_home_score: Option<f64>,
    /// Away side's second-leg score.
    pub second_leg_away_score: Option<f64>,
    /// The winning team, once resolved.
    pub winner_id: Option<i64>,
}

impl CupMatch {
    /// Creates a new unscored `CupMatch` without a persisted ID.
    #[must_use]
    pub const fn new(round_id: i64, home_team_id: i64, away_team_id: i64) -> Self {
        Self {
            match_id: None,
            round_id,
            home_team_id,
            away_team_id,
            first_leg_home_score: None,
            first_leg_away_score: None,
            second_leg_home_score: None,
            second_leg_away_score: None,
            winner_id: None,
        }
    }

    /// Returns whether both first-leg scores are set.
    #[must_use]
    pub const fn first_leg_complete(&self) -> bool {
        self.first_leg_home_score.is_some() && self.first_leg_away_score.is_some()
    }

    /// Returns whether both second-leg scores are set.
    #[must_use]
    pub const fn second_leg_complete(&self) -> bool {
        self.second_leg_home_score.is_some() && self.second_leg_away_score.is_some()
    }

    /// The home side's aggregate score across completed legs.
    ///
    /// Undefined until the first leg is complete; the second leg is
    /// added only once it, too, is complete.
    #[must_use]
    pub fn aggregate_home_score(&self) -> Option<f64> {
        if !self.first_leg_complete() {
            return None;
        }
        let mut total = self.first_leg_home_score?;
        if self.second_leg_complete() {
            total += self.second_leg_home_score?;
        }
        Some(total)
    }

    /// The away side's aggregate score across completed legs.
    #[must_use]
    pub fn aggregate_away_score(&self) -> Option<f64> {
        if !self.first_leg_complete() {
            return None;
        }
        let mut total = self.first_leg_away_score?;
        if self.second_leg_complete() {
            total += self.second_leg_away_score?;
        }
        Some(total)
    }
}
