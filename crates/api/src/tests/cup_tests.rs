// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{league, play_fixture, register_teams};
use crate::{ApiError, add_group_team, cup_overview, generate_group_matches};
use gaffer_domain::{CompetitionFormat, CupMatch, CupRound, GroupConfig, TitleKind};

#[test]
fn group_cup_gets_lettered_groups() {
    let (mut store, season, _) = league();
    let season_id = season.season_id.unwrap();

    let (_, groups) = store
        .create_cup(
            season_id,
            "League Cup",
            CompetitionFormat::Groups(GroupConfig::default()),
        )
        .unwrap();
    assert_eq!(groups.len(), 12);
    assert_eq!(groups[0].name, "Group A");
    assert_eq!(groups[11].name, "Group L");
}

#[test]
fn roster_rules_are_enforced_at_the_service_layer() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(
        &mut store,
        season_id,
        division_id,
        &["Alpha", "Beta", "Gamma", "Delta"],
    );

    let (cup, groups) = store
        .create_cup(
            season_id,
            "League Cup",
            CompetitionFormat::Groups(GroupConfig {
                num_groups: 2,
                teams_per_group: 3,
            }),
        )
        .unwrap();
    let cup_id = cup.cup_id.unwrap();
    let group_id = groups[0].group_id.unwrap();

    for &team_id in &ids[..3] {
        add_group_team(&mut store, cup_id, group_id, team_id).unwrap();
    }
    // Fourth team exceeds the configured capacity.
    assert!(matches!(
        add_group_team(&mut store, cup_id, group_id, ids[3]),
        Err(ApiError::DomainRuleViolation { .. })
    ));
    // Re-adding a rostered team is rejected.
    assert!(matches!(
        add_group_team(&mut store, cup_id, group_id, ids[0]),
        Err(ApiError::DomainRuleViolation { .. })
    ));
}

#[test]
fn group_match_generation_is_idempotent() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(
        &mut store,
        season_id,
        division_id,
        &["Alpha", "Beta", "Gamma"],
    );

    let (cup, groups) = store
        .create_cup(
            season_id,
            "League Cup",
            CompetitionFormat::Groups(GroupConfig {
                num_groups: 1,
                teams_per_group: 3,
            }),
        )
        .unwrap();
    let cup_id = cup.cup_id.unwrap();
    let group_id = groups[0].group_id.unwrap();
    for &team_id in &ids {
        add_group_team(&mut store, cup_id, group_id, team_id).unwrap();
    }

    // 3 teams -> 3 unordered pairs, created once.
    assert_eq!(generate_group_matches(&mut store, group_id).unwrap(), 3);
    assert_eq!(generate_group_matches(&mut store, group_id).unwrap(), 0);
    assert_eq!(store.group_matches(group_id).unwrap().len(), 3);
}

#[test]
fn knockout_overview_resolves_ties_from_fixtures() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(&mut store, season_id, division_id, &["Alpha", "Beta"]);

    let (cup, _) = store
        .create_cup(season_id, "Champions Cup", CompetitionFormat::Knockout)
        .unwrap();
    let cup_id = cup.cup_id.unwrap();

    let first_leg_week = store.gameweek_by_number(season_id, 5).unwrap();
    let second_leg_week = store.gameweek_by_number(season_id, 6).unwrap();
    let round = store
        .create_cup_round(&CupRound {
            round_id: None,
            cup_id,
            name: String::from("Final"),
            order: 1,
            first_leg_gameweek_id: first_leg_week.gameweek_id,
            second_leg_gameweek_id: second_leg_week.gameweek_id,
            num_matches: 1,
        })
        .unwrap();
    store
        .insert_cup_matches(&[CupMatch::new(round.round_id.unwrap(), ids[0], ids[1])])
        .unwrap();

    // First leg 50-40, second leg (home/away swapped) 45-30: aggregate
    // 80-85 in the away side's favor.
    play_fixture(&mut store, season_id, division_id, 5, ids[0], ids[1], 50.0, 40.0);
    play_fixture(&mut store, season_id, division_id, 6, ids[1], ids[0], 45.0, 30.0);

    let overview = cup_overview(&mut store, cup_id).unwrap();
    assert_eq!(overview.format, "knockout");
    let tie = &overview.rounds[0].ties[0];
    assert_eq!(tie.aggregate_home, Some(80.0));
    assert_eq!(tie.aggregate_away, Some(85.0));
    assert_eq!(tie.winner_id, Some(ids[1]));
    assert!(!tie.aggregate_tied);

    // Completing the final awards cup titles, idempotently.
    let beta_titles = store.titles(ids[1]).unwrap();
    assert_eq!(beta_titles.len(), 1);
    assert!(matches!(beta_titles[0].kind, TitleKind::Cup { .. }));
    assert!(!beta_titles[0].is_runner_up);

    cup_overview(&mut store, cup_id).unwrap();
    assert_eq!(store.titles(ids[1]).unwrap().len(), 1);
    let alpha_titles = store.titles(ids[0]).unwrap();
    assert_eq!(alpha_titles.len(), 1);
    assert!(alpha_titles[0].is_runner_up);
}

#[test]
fn tied_aggregate_stalls_the_tie_and_awards_nothing() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(&mut store, season_id, division_id, &["Alpha", "Beta"]);

    let (cup, _) = store
        .create_cup(season_id, "Champions Cup", CompetitionFormat::Knockout)
        .unwrap();
    let cup_id = cup.cup_id.unwrap();
    let first_leg_week = store.gameweek_by_number(season_id, 5).unwrap();
    let second_leg_week = store.gameweek_by_number(season_id, 6).unwrap();
    let round = store
        .create_cup_round(&CupRound {
            round_id: None,
            cup_id,
            name: String::from("Final"),
            order: 1,
            first_leg_gameweek_id: first_leg_week.gameweek_id,
            second_leg_gameweek_id: second_leg_week.gameweek_id,
            num_matches: 1,
        })
        .unwrap();
    store
        .insert_cup_matches(&[CupMatch::new(round.round_id.unwrap(), ids[0], ids[1])])
        .unwrap();

    play_fixture(&mut store, season_id, division_id, 5, ids[0], ids[1], 50.0, 40.0);
    play_fixture(&mut store, season_id, division_id, 6, ids[1], ids[0], 40.0, 30.0);

    let overview = cup_overview(&mut store, cup_id).unwrap();
    let tie = &overview.rounds[0].ties[0];
    assert_eq!(tie.aggregate_home, Some(80.0));
    assert_eq!(tie.aggregate_away, Some(80.0));
    assert_eq!(tie.winner_id, None);
    assert!(tie.aggregate_tied);

    assert!(store.titles(ids[0]).unwrap().is_empty());
    assert!(store.titles(ids[1]).unwrap().is_empty());
}

#[test]
fn group_overview_builds_tables_and_qualification() {
    let (mut store, season, division) = league();
    let season_id = season.season_id.unwrap();
    let division_id = division.division_id.unwrap();
    let ids = register_teams(
        &mut store,
        season_id,
        division_id,
        &["Alpha", "Beta", "Gamma"],
    );

    let (cup, groups) = store
        .create_cup(
            season_id,
            "League Cup",
            CompetitionFormat::Groups(GroupConfig {
                num_groups: 1,
                teams_per_group: 3,
            }),
        )
        .unwrap();
    let cup_id = cup.cup_id.unwrap();
    let group_id = groups[0].group_id.unwrap();
    for &team_id in &ids {
        add_group_team(&mut store, cup_id, group_id, team_id).unwrap();
    }
    generate_group_matches(&mut store, group_id).unwrap();

    // Schedule each group match into its own gameweek and play the
    // corresponding league fixtures. Alpha wins both of its matches.
    let matches = store.group_matches(group_id).unwrap();
    let weeks = [10, 11, 12];
    for (group_match, week) in matches.iter().zip(weeks) {
        let gameweek = store.gameweek_by_number(season_id, week).unwrap();
        store
            .schedule_group_match(group_match.id.unwrap(), gameweek.gameweek_id.unwrap())
            .unwrap();
        let home = group_match.home_team_id;
        let away = group_match.away_team_id;
        let (home_score, away_score) = if home == ids[0] {
            (70.0, 40.0)
        } else if away == ids[0] {
            (40.0, 70.0)
        } else {
            (50.0, 45.0)
        };
        play_fixture(
            &mut store, season_id, division_id, week, home, away, home_score, away_score,
        );
    }

    let overview = cup_overview(&mut store, cup_id).unwrap();
    assert_eq!(overview.format, "groups");
    assert_eq!(overview.groups.len(), 1);

    let table = &overview.groups[0].table;
    assert_eq!(table.len(), 3);
    assert_eq!(table[0].team_id, ids[0]);
    assert_eq!(table[0].played, 2);
    assert_eq!(table[0].points, 6);

    // One group: its winner qualifies directly, its runner-up joins
    // the playoff pool.
    assert_eq!(overview.direct_qualifiers.len(), 1);
    assert_eq!(overview.direct_qualifiers[0].team_id, ids[0]);
    assert_eq!(overview.playoff_pool.len(), 1);
    assert_eq!(overview.playoff_pool[0].group_position, 2);
}
