// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CompetitionFormat, CupMatch, GroupConfig, group_name};

#[test]
fn group_names_are_lettered_then_numbered() {
    assert_eq!(group_name(0), "Group A");
    assert_eq!(group_name(11), "Group L");
    assert_eq!(group_name(25), "Group Z");
    assert_eq!(group_name(26), "Group 27");
}

#[test]
fn default_group_config_is_twelve_by_three() {
    let config = GroupConfig::default();
    assert_eq!(config.num_groups, 12);
    assert_eq!(config.teams_per_group, 3);
}

#[test]
fn knockout_format_has_no_group_config() {
    assert_eq!(CompetitionFormat::Knockout.group_config(), None);
    assert_eq!(
        CompetitionFormat::Groups(GroupConfig::default()).group_config(),
        Some(GroupConfig::default())
    );
}

#[test]
fn aggregate_is_undefined_until_first_leg_complete() {
    let mut tie = CupMatch::new(1, 10, 20);
    assert_eq!(tie.aggregate_home_score(), None);

    tie.first_leg_home_score = Some(50.0);
    assert_eq!(tie.aggregate_home_score(), None);

    tie.first_leg_away_score = Some(40.0);
    assert_eq!(tie.aggregate_home_score(), Some(50.0));
    assert_eq!(tie.aggregate_away_score(), Some(40.0));
}

#[test]
fn aggregate_adds_second_leg_only_when_complete() {
    let mut tie = CupMatch::new(1, 10, 20);
    tie.first_leg_home_score = Some(50.0);
    tie.first_leg_away_score = Some(40.0);
    tie.second_leg_home_score = Some(30.0);

    // Half-entered second leg does not count toward the aggregate.
    assert_eq!(tie.aggregate_home_score(), Some(50.0));

    tie.second_leg_away_score = Some(45.0);
    assert_eq!(tie.aggregate_home_score(), Some(80.0));
    assert_eq!(tie.aggregate_away_score(), Some(85.0));
}

#[test]
fn leg_completion_flags() {
    let mut tie = CupMatch::new(1, 10, 20);
    assert!(!tie.first_leg_complete());
    assert!(!tie.second_leg_complete());

    tie.first_leg_home_score = Some(10.0);
    tie.first_leg_away_score = Some(12.0);
    assert!(tie.first_leg_complete());
    assert!(!tie.second_leg_complete());
}
