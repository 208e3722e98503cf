// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cup::{CupGroup, CupGroupTeam, GroupConfig};
use crate::error::DomainError;
use crate::types::Team;

/// Validates a team's field constraints.
///
/// # Errors
///
/// Returns an error if the team name or manager name is empty after
/// normalization.
pub fn validate_team_fields(team: &Team) -> Result<(), DomainError> {
    if team.name().is_empty() {
        return Err(DomainError::InvalidTeamName(String::from(
            "Team name cannot be empty",
        )));
    }
    if team.manager_name.trim().is_empty() {
        return Err(DomainError::InvalidManagerName(String::from(
            "Manager name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a team can be added to a group's roster.
///
/// # Errors
///
/// Returns an error if the roster is already at the configured
/// capacity, or if the team is already in the roster.
pub fn validate_group_roster(
    group: &CupGroup,
    config: GroupConfig,
    roster: &[CupGroupTeam],
    team_id: i64,
) -> Result<(), DomainError> {
    if u32::try_from(roster.len()).unwrap_or(u32::MAX) >= config.teams_per_group {
        return Err(DomainError::GroupRosterFull {
            group: group.name.clone(),
            capacity: config.teams_per_group,
        });
    }
    if roster.iter().any(|entry| entry.team_id == team_id) {
        return Err(DomainError::DuplicateGroupTeam {
            group: group.name.clone(),
            team_id,
        });
    }
    Ok(())
}

/// Validates that a manager month window is not inverted.
///
/// # Errors
///
/// Returns an error if the start gameweek number is after the end.
pub fn validate_month_window(start_number: i32, end_number: i32) -> Result<(), DomainError> {
    if start_number > end_number {
        return Err(DomainError::InvalidMonthWindow {
            start: start_number,
            end: end_number,
        });
    }
    Ok(())
}
