// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Free-text score sheet parsing.
//!
//! Admins paste result lines of the form
//!
//! ```text
//! Crazy Dave's XI 72.5 Plain United 68
//! ```
//!
//! straight from chat. Team names contain spaces, so the parser scans
//! for the numeric tokens instead of splitting on a delimiter: the
//! home name is everything before the first score, the away name
//! everything between the two scores. A trophy glyph pasted onto a
//! score ("72.5🏆") is stripped. Parsing only validates line shape;
//! matching names against fixtures happens at upload time.

use thiserror::Error;

/// Why a score line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreLineError {
    /// Fewer than four whitespace tokens.
    #[error("not enough parts: a line needs two team names and two scores")]
    TooFewTokens,
    /// The line did not contain exactly two numeric tokens.
    #[error("could not identify exactly two scores (found {found})")]
    ScoreCountMismatch {
        /// How many numeric tokens were found.
        found: usize,
    },
    /// A team name between/before the scores came out empty.
    #[error("missing {side} team name")]
    EmptyTeamName {
        /// "home" or "away".
        side: &'static str,
    },
}

/// Status of a parsed sheet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLineStatus {
    /// Line parsed and can be matched against fixtures.
    Valid,
    /// Line has parse errors and will be skipped.
    Invalid,
}

/// One successfully parsed score line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedScoreLine {
    /// Home team name as entered (not yet normalized).
    pub home_team: String,
    /// Home side's score.
    pub home_score: f64,
    /// Away team name as entered.
    pub away_team: String,
    /// Away side's score.
    pub away_score: f64,
}

/// Per-line parse result.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLine {
    /// 1-based line number within the pasted sheet.
    pub line_number: usize,
    /// The raw line as pasted.
    pub raw: String,
    /// The parsed fields, when valid.
    pub parsed: Option<ParsedScoreLine>,
    /// Parse status.
    pub status: SheetLineStatus,
    /// Zero or more parse errors.
    pub errors: Vec<ScoreLineError>,
}

/// Result of parsing a pasted score sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheetPreview {
    /// Per-line results; blank lines are skipped entirely.
    pub lines: Vec<ScoreLine>,
    /// Number of valid lines.
    pub valid_count: usize,
    /// Number of invalid lines.
    pub invalid_count: usize,
}

/// The trophy glyph sometimes pasted onto a winning score.
const TROPHY: char = '\u{1F3C6}';

/// Strips a trailing trophy glyph (and anything after it) from a
/// token.
fn clean_token(token: &str) -> &str {
    token.split(TROPHY).next().unwrap_or(token)
}

/// Parses a token as a score, tolerating a pasted trophy glyph.
fn parse_score_token(token: &str) -> Option<f64> {
    clean_token(token).parse::<f64>().ok()
}

/// Parses one non-blank score line.
fn parse_line(line_number: usize, raw: &str) -> ScoreLine {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut errors: Vec<ScoreLineError> = Vec::new();

    if tokens.len() < 4 {
        errors.push(ScoreLineError::TooFewTokens);
        return ScoreLine {
            line_number,
            raw: raw.to_string(),
            parsed: None,
            status: SheetLineStatus::Invalid,
            errors,
        };
    }

    let score_positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| parse_score_token(token).map(|_| index))
        .collect();

    if score_positions.len() != 2 {
        errors.push(ScoreLineError::ScoreCountMismatch {
            found: score_positions.len(),
        });
        return ScoreLine {
            line_number,
            raw: raw.to_string(),
            parsed: None,
            status: SheetLineStatus::Invalid,
            errors,
        };
    }

    let first = score_positions[0];
    let second = score_positions[1];
    let home_team = tokens[..first].join(" ");
    let away_team = tokens[first + 1..second].join(" ");

    if home_team.is_empty() {
        errors.push(ScoreLineError::EmptyTeamName { side: "home" });
    }
    if away_team.is_empty() {
        errors.push(ScoreLineError::EmptyTeamName { side: "away" });
    }
    if !errors.is_empty() {
        return ScoreLine {
            line_number,
            raw: raw.to_string(),
            parsed: None,
            status: SheetLineStatus::Invalid,
            errors,
        };
    }

    let (Some(home_score), Some(away_score)) = (
        parse_score_token(tokens[first]),
        parse_score_token(tokens[second]),
    ) else {
        // Unreachable: both positions parsed during the scan.
        errors.push(ScoreLineError::ScoreCountMismatch { found: 0 });
        return ScoreLine {
            line_number,
            raw: raw.to_string(),
            parsed: None,
            status: SheetLineStatus::Invalid,
            errors,
        };
    };

    ScoreLine {
        line_number,
        raw: raw.to_string(),
        parsed: Some(ParsedScoreLine {
            home_team,
            home_score,
            away_team,
            away_score,
        }),
        status: SheetLineStatus::Valid,
        errors,
    }
}

/// Parses a pasted score sheet into per-line results.
///
/// Blank lines are skipped. Invalid lines are kept with their errors
/// so the caller can report them back; they never abort the sheet.
#[must_use]
pub fn parse_score_sheet(text: &str) -> ScoreSheetPreview {
    let mut lines: Vec<ScoreLine> = Vec::new();
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
    ScoreSheetPreview {
        lines,
        valid_count,
        invalid_count,
    }
}
