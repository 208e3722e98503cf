// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    FixtureLineError, ScoreLineError, SheetLineStatus, parse_fixture_sheet, parse_score_sheet,
};

#[test]
fn score_line_with_multiword_names_parses() {
    let preview = parse_score_sheet("Crazy Dave's XI 72.5 Plain United 68");
    assert_eq!(preview.valid_count, 1);

    let parsed = preview.lines[0].parsed.as_ref().unwrap();
    assert_eq!(parsed.home_team, "Crazy Dave's XI");
    assert_eq!(parsed.home_score, 72.5);
    assert_eq!(parsed.away_team, "Plain United");
    assert_eq!(parsed.away_score, 68.0);
}

#[test]
fn trophy_glyph_on_a_score_is_stripped() {
    let preview = parse_score_sheet("Alpha FC 80\u{1F3C6} Beta Town 70");
    assert_eq!(preview.valid_count, 1);
    let parsed = preview.lines[0].parsed.as_ref().unwrap();
    assert_eq!(parsed.home_score, 80.0);
    assert_eq!(parsed.away_score, 70.0);
}

#[test]
fn blank_lines_are_skipped_entirely() {
    let preview = parse_score_sheet("\nAlpha FC 80 Beta Town 70\n\n   \n");
    assert_eq!(preview.lines.len(), 1);
    assert_eq!(preview.lines[0].line_number, 2);
}

#[test]
fn short_line_is_invalid() {
    let preview = parse_score_sheet("Alpha 80 70");
    assert_eq!(preview.invalid_count, 1);
    assert_eq!(
        preview.lines[0].errors,
        vec![ScoreLineError::TooFewTokens]
    );
}

#[test]
fn line_with_three_numbers_is_invalid() {
    let preview = parse_score_sheet("Alpha 80 Beta 70 90");
    assert_eq!(preview.invalid_count, 1);
    assert_eq!(
        preview.lines[0].errors,
        vec![ScoreLineError::ScoreCountMismatch { found: 3 }]
    );
}

#[test]
fn line_starting_with_a_score_has_no_home_name() {
    let preview = parse_score_sheet("80 Alpha Beta 70");
    assert_eq!(preview.invalid_count, 1);
    assert!(preview.lines[0]
        .errors
        .contains(&ScoreLineError::EmptyTeamName { side: "home" }));
}

#[test]
fn mixed_sheet_counts_valid_and_invalid() {
    let sheet = "Alpha FC 80 Beta Town 70\nnonsense line\nGamma Rovers 55 Delta City 55";
    let preview = parse_score_sheet(sheet);
    assert_eq!(preview.valid_count, 2);
    assert_eq!(preview.invalid_count, 1);
    assert_eq!(preview.lines[1].status, SheetLineStatus::Invalid);
}

#[test]
fn fixture_line_parses_tab_separated_fields() {
    let preview = parse_fixture_sheet("3\tCrazy Dave's XI\tPlain United");
    assert_eq!(preview.valid_count, 1);
    let parsed = preview.lines[0].parsed.as_ref().unwrap();
    assert_eq!(parsed.gameweek_number, 3);
    assert_eq!(parsed.home_team, "Crazy Dave's XI");
    assert_eq!(parsed.away_team, "Plain United");
}

#[test]
fn fixture_line_tolerates_trailing_tabs() {
    let preview = parse_fixture_sheet("3\tAlpha\tBeta\t\t");
    assert_eq!(preview.valid_count, 1);
}

#[test]
fn fixture_gameweek_out_of_range_is_rejected() {
    let preview = parse_fixture_sheet("39\tAlpha\tBeta");
    assert_eq!(
        preview.lines[0].errors,
        vec![FixtureLineError::GameweekOutOfRange(39)]
    );

    let preview = parse_fixture_sheet("0\tAlpha\tBeta");
    assert_eq!(
        preview.lines[0].errors,
        vec![FixtureLineError::GameweekOutOfRange(0)]
    );
}

#[test]
fn fixture_line_with_missing_fields_is_rejected() {
    let preview = parse_fixture_sheet("3\tAlpha");
    assert_eq!(
        preview.lines[0].errors,
        vec![FixtureLineError::WrongFieldCount]
    );
}

#[test]
fn fixture_line_with_blank_team_is_rejected() {
    let preview = parse_fixture_sheet("3\t\tBeta");
    assert_eq!(
        preview.lines[0].errors,
        vec![FixtureLineError::EmptyTeamName { side: "home" }]
    );
}

#[test]
fn fixture_line_with_bad_gameweek_is_rejected() {
    let preview = parse_fixture_sheet("three\tAlpha\tBeta");
    assert_eq!(
        preview.lines[0].errors,
        vec![FixtureLineError::BadGameweek(String::from("three"))]
    );
}
