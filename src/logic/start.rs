//! Start the tournament: generate fixtures and close registrations.

use crate::logic::schedule::generate_fixtures;
use crate::models::{TeamId, Tournament, TournamentError, TournamentStatus};
use serde::{Deserialize, Serialize};

/// What a successful start produced, for the caller to report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub fixtures: usize,
    pub rounds: u32,
}

/// Generate fixtures for all approved teams and move the tournament to Scheduled.
///
/// One-time transition: fails with `AlreadyScheduled` if fixtures exist or the
/// tournament already left Enrolling. On any failure the tournament is left
/// untouched, still Enrolling.
pub fn start_tournament(tournament: &mut Tournament) -> Result<ScheduleSummary, TournamentError> {
    if tournament.status != TournamentStatus::Enrolling || !tournament.fixtures.is_empty() {
        return Err(TournamentError::AlreadyScheduled);
    }

    let team_ids: Vec<TeamId> = tournament.approved_teams().iter().map(|t| t.id).collect();
    let fixtures = generate_fixtures(tournament.id, &team_ids)?;

    let summary = ScheduleSummary {
        fixtures: fixtures.len(),
        rounds: fixtures.last().map(|f| f.match_day).unwrap_or(0),
    };
    tournament.fixtures = fixtures;
    tournament.status = TournamentStatus::Scheduled;
    Ok(summary)
}
