// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{played, unplayed};
use crate::{MonthWindow, month_standings, month_stats, window_gate};
use gaffer_domain::{DomainError, FixtureRecord};

/// A full gameweek of `count` played fixtures between synthetic teams.
fn full_gameweek(week: i32, count: i64) -> Vec<FixtureRecord> {
    (0..count)
        .map(|i| {
            played(
                week,
                1000 + i * 2,
                1001 + i * 2,
                50.0 + i as f64,
                40.0,
            )
        })
        .collect()
}

#[test]
fn inverted_window_is_rejected() {
    assert!(matches!(
        MonthWindow::new(9, 5),
        Err(DomainError::InvalidMonthWindow { .. })
    ));
}

#[test]
fn gate_requires_twelve_scored_fixtures_per_gameweek() {
    let window = MonthWindow::new(1, 2).unwrap();
    let mut fixtures = full_gameweek(1, 12);
    fixtures.extend(full_gameweek(2, 12));

    assert!(window_gate(window, &fixtures, 12));
}

#[test]
fn gate_fails_when_any_gameweek_is_short() {
    let window = MonthWindow::new(1, 2).unwrap();
    let mut fixtures = full_gameweek(1, 12);
    fixtures.extend(full_gameweek(2, 11));

    assert!(!window_gate(window, &fixtures, 12));
}

#[test]
fn gate_counts_only_fully_scored_fixtures() {
    let window = MonthWindow::new(1, 1).unwrap();
    let mut fixtures = full_gameweek(1, 11);
    fixtures.push(unplayed(1, 5000, 5001));

    assert!(!window_gate(window, &fixtures, 12));
}

#[test]
fn gate_fails_for_gameweek_with_no_fixtures_at_all() {
    let window = MonthWindow::new(1, 3).unwrap();
    let mut fixtures = full_gameweek(1, 12);
    fixtures.extend(full_gameweek(3, 12));

    // Gameweek 2 has nothing.
    assert!(!window_gate(window, &fixtures, 12));
}

#[test]
fn stats_are_restricted_to_the_window() {
    let window = MonthWindow::new(2, 3).unwrap();
    let fixtures = vec![
        played(1, 1, 2, 99.0, 10.0), // outside
        played(2, 1, 3, 60.0, 50.0), // win inside
        played(3, 4, 1, 55.0, 55.0), // draw inside
        played(4, 1, 5, 80.0, 10.0), // outside
    ];

    let record = month_stats(1, window, &fixtures);
    assert_eq!(record.played, 2);
    assert_eq!(record.points, 4);
    assert_eq!(record.goals_for, 115.0);
}

#[test]
fn standings_exclude_teams_without_played_fixtures_in_window() {
    let window = MonthWindow::new(1, 2).unwrap();
    let fixtures = vec![
        played(1, 1, 2, 60.0, 50.0),
        unplayed(2, 3, 4),
        played(5, 5, 6, 70.0, 20.0), // outside the window
    ];

    let standings = month_standings(window, &fixtures);
    let ids: Vec<i64> = standings.iter().map(|s| s.team_id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&1) && ids.contains(&2));
}

#[test]
fn standings_rank_by_points_then_goals_for() {
    let window = MonthWindow::new(1, 2).unwrap();
    let fixtures = vec![
        played(1, 1, 2, 60.0, 50.0), // 1 wins with 60 for
        played(1, 3, 4, 90.0, 10.0), // 3 wins with 90 for
        played(2, 1, 4, 40.0, 45.0), // 4 wins
        played(2, 3, 2, 30.0, 35.0), // 2 wins
    ];

    let standings = month_standings(window, &fixtures);
    // Everyone on 3 points; goals-for decides.
    assert!(standings.iter().all(|s| s.record.points == 3));
    let goals: Vec<f64> = standings.iter().map(|s| s.record.goals_for).collect();
    let mut sorted = goals.clone();
    sorted.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(goals, sorted);
    assert_eq!(standings[0].team_id, 3);
}

#[test]
fn single_gameweek_window_contains_only_itself() {
    let window = MonthWindow::new(4, 4).unwrap();
    assert!(window.contains(4));
    assert!(!window.contains(3));
    assert!(!window.contains(5));
}
