// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-of-season promotion and relegation.
//!
//! The cutoffs are policy data rather than code: each division names
//! an ordered list of position bands, each band naming the destination
//! division in the next season. The shipped default encodes the
//! league's two-tier rule; running more divisions means supplying a
//! different policy, not editing a match statement.

use crate::standings::RankedTeamSeason;
use gaffer_domain::Division;
use serde::{Deserialize, Serialize};

/// Gameweeks created for each new season, with placeholder deadlines.
pub const GAMEWEEKS_PER_SEASON: i32 = 38;

/// One position band within a division's transition policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// The band applies to positions up to and including this value.
    /// `None` is the catch-all for every remaining position.
    pub max_position: Option<i32>,
    /// Destination division name in the new season.
    pub destination: String,
}

/// The ordered bands for one source division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionBands {
    /// Source division name.
    pub division: String,
    /// Bands checked in order; the first match wins.
    pub bands: Vec<Band>,
}

/// The full promotion/relegation policy for a season transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionPolicy {
    /// Per-division band lists.
    pub divisions: Vec<DivisionBands>,
    /// Destination for teams in a division the policy does not name.
    pub fallback: String,
}

impl Default for TransitionPolicy {
    /// The observed two-tier rule: Premier League positions 1-4 stay
    /// and 5+ drop to the Championship; Championship positions 1-2
    /// rise and the rest stay; any other division defaults its teams
    /// into the Championship.
    fn default() -> Self {
        Self {
            divisions: vec![
                DivisionBands {
                    division: String::from(Division::PREMIER_LEAGUE),
                    bands: vec![
                        Band {
                            max_position: Some(4),
                            destination: String::from(Division::PREMIER_LEAGUE),
                        },
                        Band {
                            max_position: None,
                            destination: String::from(Division::CHAMPIONSHIP),
                        },
                    ],
                },
                DivisionBands {
                    division: String::from(Division::CHAMPIONSHIP),
                    bands: vec![
                        Band {
                            max_position: Some(2),
                            destination: String::from(Division::PREMIER_LEAGUE),
                        },
                        Band {
                            max_position: None,
                            destination: String::from(Division::CHAMPIONSHIP),
                        },
                    ],
                },
            ],
            fallback: String::from(Division::CHAMPIONSHIP),
        }
    }
}

impl TransitionPolicy {
    /// Resolves the destination division for a final position in a
    /// source division.
    #[must_use]
    pub fn destination_for(&self, division_name: &str, position: i32) -> &str {
        let Some(bands) = self
            .divisions
            .iter()
            .find(|entry| entry.division == division_name)
        else {
            return &self.fallback;
        };
        for band in &bands.bands {
            match band.max_position {
                Some(max) if position <= max => return &band.destination,
                Some(_) => {}
                None => return &band.destination,
            }
        }
        &self.fallback
    }
}

/// A team's destination division for the new season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPlacement {
    /// The team being placed.
    pub team_id: i64,
    /// Destination division name in the new season.
    pub destination: String,
}

/// Maps every team's final position to its next-season division.
///
/// Final tables are the ranked divisions of the old season, computed
/// with the league ranking rule (ties share a position).
#[must_use]
pub fn season_placements(
    policy: &TransitionPolicy,
    final_tables: &[(Division, Vec<RankedTeamSeason>)],
) -> Vec<TeamPlacement> {
    let mut placements = Vec::new();
    for (division, table) in final_tables {
        for ranked in table {
            placements.push(TeamPlacement {
                team_id: ranked.team_season.team_id,
                destination: policy
                    .destination_for(&division.name, ranked.position)
                    .to_string(),
            });
        }
    }
    placements
}

/// A league title to award at season end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleAward {
    /// The team receiving the title.
    pub team_id: i64,
    /// The division the title was won in.
    pub division_id: i64,
    /// Whether this is the runner-up record.
    pub is_runner_up: bool,
}

/// Derives the champion and runner-up titles for every division.
///
/// The first team at position 1 takes the championship and the first
/// at position 2 the runner-up record. With shared positions a
/// division can lack a position 2; no runner-up is derived then.
#[must_use]
pub fn league_title_awards(
    final_tables: &[(Division, Vec<RankedTeamSeason>)],
) -> Vec<TitleAward> {
    let mut awards = Vec::new();
    for (division, table) in final_tables {
        let Some(division_id) = division.division_id else {
            continue;
        };
        if let Some(champion) = table.iter().find(|ranked| ranked.position == 1) {
            awards.push(TitleAward {
                team_id: champion.team_season.team_id,
                division_id,
                is_runner_up: false,
            });
        }
        if let Some(runner_up) = table.iter().find(|ranked| ranked.position == 2) {
            awards.push(TitleAward {
                team_id: runner_up.team_season.team_id,
                division_id,
                is_runner_up: true,
            });
        }
    }
    awards
}
