// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::round_robin_pairs;
use std::collections::HashSet;

#[test]
fn pair_count_is_n_choose_two() {
    for n in 0..8_i64 {
        let roster: Vec<i64> = (1..=n).collect();
        let pairs = round_robin_pairs(&roster);
        assert_eq!(pairs.len() as i64, n * (n - 1) / 2, "n = {n}");
    }
}

#[test]
fn pairs_are_unique_and_never_self() {
    let roster = vec![1, 2, 3, 4, 5];
    let pairs = round_robin_pairs(&roster);

    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    for &(home, away) in &pairs {
        assert_ne!(home, away);
        let key = if home < away { (home, away) } else { (away, home) };
        assert!(seen.insert(key), "duplicate pairing {home} vs {away}");
    }
}

#[test]
fn repeated_invocation_is_deterministic() {
    let roster = vec![7, 3, 9, 1];
    assert_eq!(round_robin_pairs(&roster), round_robin_pairs(&roster));
}

#[test]
fn three_team_group_produces_three_matches() {
    let pairs = round_robin_pairs(&[10, 20, 30]);
    assert_eq!(pairs, vec![(10, 20), (10, 30), (20, 30)]);
}

#[test]
fn empty_and_single_rosters_produce_no_pairs() {
    assert!(round_robin_pairs(&[]).is_empty());
    assert!(round_robin_pairs(&[1]).is_empty());
}
