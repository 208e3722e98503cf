// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The standings and competition resolution engine.
//!
//! Every calculator in this crate is a pure function over domain
//! values: the persistence layer loads fixture views, the calculators
//! recompute derived results from scratch, and the caller writes any
//! caches back. Recomputation is idempotent and safe to call
//! redundantly, so there is no cache-coherency protocol beyond
//! "recompute after every score mutation".
//!
//! Callers always supply the season, window, or competition being
//! operated on explicitly. Nothing in this crate consults ambient
//! "current season" state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod group_table;
mod knockout;
mod monthly;
mod round_robin;
mod standings;
mod transition;

#[cfg(test)]
mod tests;

pub use group_table::{
    DIRECT_QUALIFIER_COUNT, GroupQualifier, GroupTableRow, Qualification, group_table,
    qualification,
};
pub use knockout::{KnockoutOutcome, leg_score_for, sync_and_resolve};
pub use monthly::{
    MIN_SCORED_FIXTURES_PER_GAMEWEEK, MonthStanding, MonthWindow, month_standings, month_stats,
    window_gate,
};
pub use round_robin::round_robin_pairs;
pub use standings::{
    RankedTeamSeason, TeamRecord, TeamTotals, rank_division, recent_form, team_record, team_totals,
};
pub use transition::{
    Band, DivisionBands, GAMEWEEKS_PER_SEASON, TeamPlacement, TitleAward, TransitionPolicy,
    league_title_awards, season_placements,
};
