// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Manager of the Month window scoring.

use crate::standings::{TeamRecord, team_record};
use gaffer_domain::{DomainError, FixtureRecord, validate_month_window};
use serde::{Deserialize, Serialize};

/// Minimum fully-scored fixtures each gameweek in a month window must
/// have before the award may be resolved. Matches the deployed league
/// shape of six fixtures per division across two divisions; a
/// deployment constant, not a general invariant.
pub const MIN_SCORED_FIXTURES_PER_GAMEWEEK: usize = 12;

/// An inclusive gameweek-number window within one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    start: i32,
    end: i32,
}

impl MonthWindow {
    /// Creates a window spanning `start..=end` gameweek numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is inverted.
    pub fn new(start: i32, end: i32) -> Result<Self, DomainError> {
        validate_month_window(start, end)?;
        Ok(Self { start, end })
    }

    /// The first gameweek number of the window.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// The last gameweek number of the window (inclusive).
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Returns whether the gameweek number falls inside the window.
    #[must_use]
    pub const fn contains(&self, gameweek_number: i32) -> bool {
        gameweek_number >= self.start && gameweek_number <= self.end
    }
}

/// The completeness gate for award resolution.
///
/// True only if every gameweek number in the window has at least
/// `min_scored` fully-scored fixtures. Award resolution must not run
/// while this is false: a half-scored gameweek would hand the award to
/// whoever's fixtures were entered first.
#[must_use]
pub fn window_gate(window: MonthWindow, fixtures: &[FixtureRecord], min_scored: usize) -> bool {
    (window.start()..=window.end()).all(|number| {
        fixtures
            .iter()
            .filter(|fixture| fixture.gameweek_number == number && fixture.is_played())
            .count()
            >= min_scored
    })
}

/// One team's entry in a month's award standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthStanding {
    /// The team.
    pub team_id: i64,
    /// The team's record over the window.
    pub record: TeamRecord,
}

/// Computes one team's record restricted to the window.
#[must_use]
pub fn month_stats(team_id: i64, window: MonthWindow, fixtures: &[FixtureRecord]) -> TeamRecord {
    let windowed: Vec<FixtureRecord> = fixtures
        .iter()
        .filter(|fixture| window.contains(fixture.gameweek_number))
        .cloned()
        .collect();
    team_record(team_id, &windowed)
}

/// Ranks every team that played inside the window.
///
/// Teams with zero played fixtures in the window are excluded by
/// construction. The ranking is points descending then goals-for
/// descending; no goal-difference tie-break at this level.
#[must_use]
pub fn month_standings(window: MonthWindow, fixtures: &[FixtureRecord]) -> Vec<MonthStanding> {
    let mut team_ids: Vec<i64> = Vec::new();
    for fixture in fixtures {
        if !window.contains(fixture.gameweek_number) || !fixture.is_played() {
            continue;
        }
        for team_id in [fixture.home_team_id, fixture.away_team_id] {
            if !team_ids.contains(&team_id) {
                team_ids.push(team_id);
            }
        }
    }

    let mut standings: Vec<MonthStanding> = team_ids
        .into_iter()
        .map(|team_id| MonthStanding {
            team_id,
            record: month_stats(team_id, window, fixtures),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.record
            .points
            .cmp(&a.record.points)
            .then_with(|| b.record.goals_for.total_cmp(&a.record.goals_for))
    });
    standings
}
