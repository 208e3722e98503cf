// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Generates the single round-robin pairings for a group roster.
///
/// Produces exactly `n * (n - 1) / 2` unique unordered pairs in a
/// deterministic order: each team is paired once with every team after
/// it in the roster, with the earlier team as the home side. No
/// self-pairing, and repeated invocation yields the same pairs.
#[must_use]
pub fn round_robin_pairs(team_ids: &[i64]) -> Vec<(i64, i64)> {
    let mut pairs = Vec::with_capacity(team_ids.len().saturating_mul(team_ids.len()) / 2);
    for (i, &home) in team_ids.iter().enumerate() {
        for &away in &team_ids[i + 1..] {
            pairs.push((home, away));
        }
    }
    pairs
}
