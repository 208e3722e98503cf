// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gaffer_domain::{CupGroupMatch, FixtureRecord, TeamSeason};

/// A played fixture record in gameweek `week`.
pub fn played(week: i32, home: i64, away: i64, home_score: f64, away_score: f64) -> FixtureRecord {
    FixtureRecord {
        gameweek_number: week,
        division_id: 1,
        home_team_id: home,
        away_team_id: away,
        home_score: Some(home_score),
        away_score: Some(away_score),
    }
}

/// An unplayed fixture record in gameweek `week`.
pub fn unplayed(week: i32, home: i64, away: i64) -> FixtureRecord {
    FixtureRecord {
        gameweek_number: week,
        division_id: 1,
        home_team_id: home,
        away_team_id: away,
        home_score: None,
        away_score: None,
    }
}

/// A played cup group match.
pub fn group_match(home: i64, away: i64, home_score: f64, away_score: f64) -> CupGroupMatch {
    CupGroupMatch {
        id: None,
        group_id: 1,
        home_team_id: home,
        away_team_id: away,
        gameweek_id: Some(1),
        home_score: Some(home_score),
        away_score: Some(away_score),
    }
}

/// A `TeamSeason` row with the given cached totals.
pub fn season_row(team_id: i64, points: i32, total_score: f64) -> TeamSeason {
    TeamSeason {
        id: Some(team_id),
        team_id,
        season_id: 1,
        division_id: 1,
        points,
        total_score,
        position: None,
    }
}
