// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team-name normalization.
//!
//! Score sheets and fixture sheets are pasted from chat clients and
//! spreadsheets, which substitute a zoo of apostrophe-like code points
//! into team names. Every name is folded to the ASCII apostrophe before
//! storage or comparison so that "Crazy Dave's XI" matches regardless of
//! which editor produced it.

/// Apostrophe-like code points folded to the ASCII apostrophe (U+0027).
const APOSTROPHE_CHARS: [char; 10] = [
    '\u{2018}', // LEFT SINGLE QUOTATION MARK
    '\u{2019}', // RIGHT SINGLE QUOTATION MARK
    '\u{201B}', // SINGLE HIGH-REVERSED-9 QUOTATION MARK
    '\u{2032}', // PRIME
    '\u{0060}', // GRAVE ACCENT
    '\u{00B4}', // ACUTE ACCENT
    '\u{2035}', // REVERSED PRIME
    '\u{275B}', // HEAVY SINGLE TURNED COMMA QUOTATION MARK ORNAMENT
    '\u{275C}', // HEAVY SINGLE COMMA QUOTATION MARK ORNAMENT
    '\u{FF07}', // FULLWIDTH APOSTROPHE
];

/// Replaces every apostrophe-like character with the ASCII apostrophe.
#[must_use]
pub fn normalize_apostrophes(text: &str) -> String {
    text.chars()
        .map(|c| {
            if APOSTROPHE_CHARS.contains(&c) {
                '\''
            } else {
                c
            }
        })
        .collect()
}

/// Normalizes a team name for storage and comparison.
///
/// Trims surrounding whitespace and folds apostrophe variants. Used
/// whenever a team name is stored or matched against user input.
#[must_use]
pub fn normalize_team_name(name: &str) -> String {
    normalize_apostrophes(name.trim())
}
