// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cup group tables and knockout qualification.

use crate::standings::TeamRecord;
use gaffer_domain::{CupGroupMatch, MatchResult};
use serde::{Deserialize, Serialize};

/// Group winners ranked this high across all groups qualify straight
/// to the knockout entry round; the rest join the playoff pool. A
/// fixed design constant, not configuration.
pub const DIRECT_QUALIFIER_COUNT: usize = 8;

/// One row of a cup group table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTableRow {
    /// The team.
    pub team_id: i64,
    /// The accumulated record over the group's played matches.
    pub record: TeamRecord,
}

/// Computes a group's round-robin table.
///
/// Every played match is accumulated symmetrically for both sides with
/// the usual 3/1/0 rule. Teams with no played matches appear with an
/// all-zero record; they are never dropped. The sort key is points
/// descending, goal difference descending, goals-for descending.
#[must_use]
pub fn group_table(roster: &[i64], matches: &[CupGroupMatch]) -> Vec<GroupTableRow> {
    let mut rows: Vec<GroupTableRow> = roster
        .iter()
        .map(|&team_id| GroupTableRow {
            team_id,
            record: TeamRecord::default(),
        })
        .collect();

    for group_match in matches {
        let (Some(home_score), Some(away_score)) = (group_match.home_score, group_match.away_score)
        else {
            continue;
        };
        accumulate(&mut rows, group_match.home_team_id, home_score, away_score);
        accumulate(&mut rows, group_match.away_team_id, away_score, home_score);
    }

    rows.sort_by(|a, b| {
        b.record
            .points
            .cmp(&a.record.points)
            .then_with(|| {
                b.record
                    .goal_difference
                    .total_cmp(&a.record.goal_difference)
            })
            .then_with(|| b.record.goals_for.total_cmp(&a.record.goals_for))
    });
    rows
}

fn accumulate(rows: &mut [GroupTableRow], team_id: i64, own: f64, opponent: f64) {
    // Matches referencing a team outside the roster are ignored.
    if let Some(row) = rows.iter_mut().find(|row| row.team_id == team_id) {
        row.record
            .add_result(MatchResult::from_scores(own, opponent), own, opponent);
    }
}

/// A group winner or runner-up in the cross-group qualification
/// ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupQualifier {
    /// The group the team came from.
    pub group_id: i64,
    /// 1 for the group winner, 2 for the runner-up.
    pub group_position: i32,
    /// The team's table row.
    pub row: GroupTableRow,
}

/// The qualification split out of the group stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    /// Group winners qualifying straight to the knockout entry round.
    pub direct: Vec<GroupQualifier>,
    /// Remaining group winners plus every second-place team.
    pub playoff: Vec<GroupQualifier>,
}

/// Derives the qualification split from the per-group tables.
///
/// Group winners are ranked across all groups by points descending
/// then goals-for descending; the top [`DIRECT_QUALIFIER_COUNT`]
/// qualify directly. The remaining winners and every group's
/// second-place team form the playoff pool.
#[must_use]
pub fn qualification(tables: &[(i64, Vec<GroupTableRow>)]) -> Qualification {
    let mut winners: Vec<GroupQualifier> = tables
        .iter()
        .filter_map(|(group_id, table)| {
            table.first().map(|row| GroupQualifier {
                group_id: *group_id,
                group_position: 1,
                row: row.clone(),
            })
        })
        .collect();

    winners.sort_by(|a, b| {
        b.row
            .record
            .points
            .cmp(&a.row.record.points)
            .then_with(|| b.row.record.goals_for.total_cmp(&a.row.record.goals_for))
    });

    let direct_count = winners.len().min(DIRECT_QUALIFIER_COUNT);
    let playoff_winners = winners.split_off(direct_count);

    let mut playoff = playoff_winners;
    for (group_id, table) in tables {
        if let Some(row) = table.get(1) {
            playoff.push(GroupQualifier {
                group_id: *group_id,
                group_position: 2,
                row: row.clone(),
            });
        }
    }

    Qualification {
        direct: winners,
        playoff,
    }
}
