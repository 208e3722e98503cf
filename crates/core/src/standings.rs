// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League standings computation.
//!
//! Totals are recomputed in full from the played fixtures each time.
//! The `TeamSeason` cache the persistence layer carries is a derived
//! value: calling these functions twice with no intervening fixture
//! change yields identical results.

use gaffer_domain::{FixtureRecord, MatchResult, TeamSeason};
use serde::{Deserialize, Serialize};

/// The two cached league scalars for one team in one season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamTotals {
    /// League points: 3 per win, 1 per draw.
    pub points: i32,
    /// Sum of the team's own scores across played fixtures.
    pub total_score: f64,
}

/// A full win/draw/loss breakdown over some set of fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Played fixtures.
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
    /// `goals_for - goals_against`.
    pub goal_difference: f64,
    /// League points: 3 per win, 1 per draw.
    pub points: i32,
}

impl TeamRecord {
    /// Folds one played fixture into the record.
    pub fn add_result(&mut self, result: MatchResult, own: f64, opponent: f64) {
        self.played += 1;
        self.goals_for += own;
        self.goals_against += opponent;
        self.goal_difference = self.goals_for - self.goals_against;
        self.points += result.points();
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Draw => self.draws += 1,
            MatchResult::Loss => self.losses += 1,
        }
    }
}

/// Recomputes a team's cached league totals from its fixtures.
///
/// Only fixtures with both scores set contribute. A team with no
/// played fixtures yields zero points and zero total score; that is
/// not an error.
#[must_use]
pub fn team_totals(team_id: i64, fixtures: &[FixtureRecord]) -> TeamTotals {
    let mut totals = TeamTotals {
        points: 0,
        total_score: 0.0,
    };
    for fixture in fixtures {
        let Some(own) = fixture.own_score(team_id) else {
            continue;
        };
        let Some(result) = fixture.result_for(team_id) else {
            continue;
        };
        totals.total_score += own;
        totals.points += result.points();
    }
    totals
}

/// Computes a team's full record over the given fixtures.
#[must_use]
pub fn team_record(team_id: i64, fixtures: &[FixtureRecord]) -> TeamRecord {
    let mut record = TeamRecord::default();
    for fixture in fixtures {
        let (Some(own), Some(opponent)) = (
            fixture.own_score(team_id),
            fixture.opponent_score(team_id),
        ) else {
            continue;
        };
        record.add_result(MatchResult::from_scores(own, opponent), own, opponent);
    }
    record
}

/// Returns the team's most recent results, newest first.
#[must_use]
pub fn recent_form(team_id: i64, fixtures: &[FixtureRecord], limit: usize) -> Vec<MatchResult> {
    let mut played: Vec<(i32, MatchResult)> = fixtures
        .iter()
        .filter_map(|fixture| {
            fixture
                .result_for(team_id)
                .map(|result| (fixture.gameweek_number, result))
        })
        .collect();
    played.sort_by(|a, b| b.0.cmp(&a.0));
    played.into_iter().take(limit).map(|(_, r)| r).collect()
}

/// A division table row with its computed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeamSeason {
    /// The underlying season record.
    pub team_season: TeamSeason,
    /// 1-based rank. Teams with equal points and total score share a
    /// position, producing duplicate ranks rather than an arbitrary
    /// order.
    pub position: i32,
}

/// Returns whether `a` strictly outranks `b`.
fn strictly_better(a: &TeamSeason, b: &TeamSeason) -> bool {
    a.points > b.points || (a.points == b.points && a.total_score > b.total_score)
}

/// Orders a division's rows and assigns positions.
///
/// Sort key is points descending then total score descending. The
/// position of each row is one plus the number of strictly better
/// rows, so exact ties share a position. There is no head-to-head or
/// goal-difference tie-break at division level.
#[must_use]
pub fn rank_division(rows: &[TeamSeason]) -> Vec<RankedTeamSeason> {
    let mut sorted: Vec<TeamSeason> = rows.to_vec();
    sorted.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.total_score.total_cmp(&a.total_score))
    });

    sorted
        .iter()
        .map(|row| {
            let better = i32::try_from(
                sorted
                    .iter()
                    .filter(|other| strictly_better(other, row))
                    .count(),
            )
            .unwrap_or(i32::MAX);
            RankedTeamSeason {
                team_season: row.clone(),
                position: better.saturating_add(1),
            }
        })
        .collect()
}
