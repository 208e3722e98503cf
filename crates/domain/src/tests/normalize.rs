// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{normalize_apostrophes, normalize_team_name};

#[test]
fn ascii_apostrophe_is_unchanged() {
    assert_eq!(normalize_apostrophes("Dave's XI"), "Dave's XI");
}

#[test]
fn curly_apostrophe_is_folded() {
    assert_eq!(normalize_apostrophes("Dave\u{2019}s XI"), "Dave's XI");
}

#[test]
fn grave_and_acute_accents_are_folded() {
    assert_eq!(normalize_apostrophes("Dave\u{0060}s XI"), "Dave's XI");
    assert_eq!(normalize_apostrophes("Dave\u{00B4}s XI"), "Dave's XI");
}

#[test]
fn fullwidth_apostrophe_is_folded() {
    assert_eq!(normalize_apostrophes("Dave\u{FF07}s XI"), "Dave's XI");
}

#[test]
fn text_without_apostrophes_passes_through() {
    assert_eq!(normalize_apostrophes("Plain United"), "Plain United");
}

#[test]
fn team_name_is_trimmed_and_folded() {
    assert_eq!(
        normalize_team_name("  Dave\u{2018}s XI  "),
        "Dave's XI"
    );
}

#[test]
fn empty_name_stays_empty() {
    assert_eq!(normalize_team_name("   "), "");
}
