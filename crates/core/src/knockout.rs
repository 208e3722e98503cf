// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Two-leg knockout tie resolution.
//!
//! Leg scores are never entered directly on a cup match: each side's
//! score for a leg is sourced from the league fixture that side played
//! in the round's leg gameweek, reoriented to the cup match's
//! home/away framing. The resolver recomputes all four leg fields from
//! source on every call, so it is safe to re-invoke any number of
//! times as the underlying fixtures change.

use gaffer_domain::{CupMatch, FixtureRecord};
use serde::{Deserialize, Serialize};

/// The resolution state of a two-leg tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnockoutOutcome {
    /// At least one leg is incomplete; no winner can be determined.
    Pending,
    /// The home side won on aggregate.
    HomeAdvanced,
    /// The away side won on aggregate.
    AwayAdvanced,
    /// Both legs complete with exactly equal aggregates. No tie-break
    /// rule is modeled; the winner stays unset and the round stalls
    /// until the tie is resolved out of band.
    AggregateTied,
}

/// Finds a team's own score in a leg's fixture set.
///
/// Locates the single fixture in the leg gameweek in which the team
/// participated (as either league side) and returns the team's own
/// score. Returns `None` if no such fixture exists or the fixture is
/// not fully scored.
#[must_use]
pub fn leg_score_for(team_id: i64, leg_fixtures: &[FixtureRecord]) -> Option<f64> {
    leg_fixtures
        .iter()
        .find(|fixture| fixture.involves(team_id))
        .and_then(|fixture| fixture.own_score(team_id))
}

/// Re-syncs a cup match's leg scores from fixtures and resolves the
/// winner if possible.
///
/// All four leg fields are recomputed from the supplied fixture sets;
/// stale values are discarded rather than patched. The winner is
/// determined only once both legs are complete: a strictly higher
/// aggregate wins, and an exact aggregate tie clears the winner and
/// reports [`KnockoutOutcome::AggregateTied`].
pub fn sync_and_resolve(
    tie: &mut CupMatch,
    first_leg: &[FixtureRecord],
    second_leg: &[FixtureRecord],
) -> KnockoutOutcome {
    tie.first_leg_home_score = leg_score_for(tie.home_team_id, first_leg);
    tie.first_leg_away_score = leg_score_for(tie.away_team_id, first_leg);
    tie.second_leg_home_score = leg_score_for(tie.home_team_id, second_leg);
    tie.second_leg_away_score = leg_score_for(tie.away_team_id, second_leg);
    tie.winner_id = None;

    if !tie.first_leg_complete() || !tie.second_leg_complete() {
        return KnockoutOutcome::Pending;
    }

    let (Some(home_aggregate), Some(away_aggregate)) =
        (tie.aggregate_home_score(), tie.aggregate_away_score())
    else {
        return KnockoutOutcome::Pending;
    };

    if home_aggregate > away_aggregate {
        tie.winner_id = Some(tie.home_team_id);
        KnockoutOutcome::HomeAdvanced
    } else if away_aggregate > home_aggregate {
        tie.winner_id = Some(tie.away_team_id);
        KnockoutOutcome::AwayAdvanced
    } else {
        KnockoutOutcome::AggregateTied
    }
}
