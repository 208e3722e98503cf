// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tab-separated fixture sheet parsing.
//!
//! Fixture sheets come from spreadsheets, one fixture per line:
//!
//! ```text
//! 3<TAB>Crazy Dave's XI<TAB>Plain United
//! ```
//!
//! The gameweek range check (1-38) lives at this upload surface; the
//! calculators themselves do not enforce a ceiling.

use crate::score_sheet::SheetLineStatus;
use thiserror::Error;

/// Gameweek numbers accepted by the upload surface.
const MAX_GAMEWEEK: i32 = 38;

/// Why a fixture line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureLineError {
    /// The line did not have exactly three tab-separated fields.
    #[error("expected gameweek, home team and away team separated by tabs")]
    WrongFieldCount,
    /// The gameweek field was not a number.
    #[error("gameweek '{0}' is not a number")]
    BadGameweek(String),
    /// The gameweek number is outside 1-38.
    #[error("invalid gameweek number {0}. Must be between 1 and 38")]
    GameweekOutOfRange(i32),
    /// A team field was empty.
    #[error("missing {side} team name")]
    EmptyTeamName {
        /// "home" or "away".
        side: &'static str,
    },
}

/// One successfully parsed fixture line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFixtureLine {
    /// Gameweek number (1-38).
    pub gameweek_number: i32,
    /// Home team name as entered.
    pub home_team: String,
    /// Away team name as entered.
    pub away_team: String,
}

/// Per-line parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLine {
    /// 1-based line number within the pasted sheet.
    pub line_number: usize,
    /// The raw line as pasted.
    pub raw: String,
    /// The parsed fields, when valid.
    pub parsed: Option<ParsedFixtureLine>,
    /// Parse status.
    pub status: SheetLineStatus,
    /// Zero or more parse errors.
    pub errors: Vec<FixtureLineError>,
}

/// Result of parsing a pasted fixture sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSheetPreview {
    /// Per-line results; blank lines are skipped entirely.
    pub lines: Vec<FixtureLine>,
    /// Number of valid lines.
    pub valid_count: usize,
    /// Number of invalid lines.
    pub invalid_count: usize,
}

fn parse_line(line_number: usize, raw: &str) -> FixtureLine {
    let invalid = |errors: Vec<FixtureLineError>| FixtureLine {
        line_number,
        raw: raw.to_string(),
        parsed: None,
        status: SheetLineStatus::Invalid,
        errors,
    };

    let mut fields: Vec<&str> = raw.split('\t').map(str::trim).collect();
    // Spreadsheet pastes often carry trailing tabs.
    while fields.last() == Some(&"") {
        fields.pop();
    }
    if fields.len() != 3 {
        return invalid(vec![FixtureLineError::WrongFieldCount]);
    }

    let Ok(gameweek_number) = fields[0].parse::<i32>() else {
        return invalid(vec![FixtureLineError::BadGameweek(fields[0].to_string())]);
    };
    if !(1..=MAX_GAMEWEEK).contains(&gameweek_number) {
        return invalid(vec![FixtureLineError::GameweekOutOfRange(gameweek_number)]);
    }

    let mut errors: Vec<FixtureLineError> = Vec::new();
    if fields[1].is_empty() {
        errors.push(FixtureLineError::EmptyTeamName { side: "home" });
    }
    if fields[2].is_empty() {
        errors.push(FixtureLineError::EmptyTeamName { side: "away" });
    }
    if !errors.is_empty() {
        return invalid(errors);
    }

    FixtureLine {
        line_number,
        raw: raw.to_string(),
        parsed: Some(ParsedFixtureLine {
            gameweek_number,
            home_team: fields[1].to_string(),
            away_team: fields[2].to_string(),
        }),
        status: SheetLineStatus::Valid,
        errors: Vec::new(),
    }
}

/// Parses a pasted fixture sheet into per-line results.
///
/// Blank lines are skipped; invalid lines are kept with their errors
/// and never abort the sheet.
#[must_use]
pub fn parse_fixture_sheet(text: &str) -> FixtureSheetPreview {
    let mut lines: Vec<FixtureLine> = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        lines.push(parse_line(index + 1, raw));
    }
    let valid_count = lines
        .iter()
        .filter(|line| line.status == SheetLineStatus::Valid)
        .count();
    let invalid_count = lines.len() - valid_count;
    FixtureSheetPreview {
        lines,
        valid_count,
        invalid_count,
    }
}
