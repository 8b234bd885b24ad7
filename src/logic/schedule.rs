//! Round-robin fixture generation (circle method).

use crate::models::{Fixture, TeamId, TournamentError, TournamentId};
use std::collections::HashSet;

/// Generate a single round-robin schedule for the given teams.
///
/// Circle method: fix the first slot, rotate the rest one step per round.
/// With an odd team count a bye slot is appended; pairings against the bye
/// are dropped, so that round's partner simply rests.
///
/// Pairings in round `r` put the team at the lower working index at home;
/// home/away is purely positional, not venue-aware.
///
/// For `n` teams this yields `n*(n-1)/2` fixtures over `n-1` rounds
/// (even `n`) or `n` rounds (odd `n`, one bye per round). Match days are
/// numbered from 1 with no gaps, and no team plays twice on one match day.
pub fn generate_fixtures(
    tournament_id: TournamentId,
    teams: &[TeamId],
) -> Result<Vec<Fixture>, TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::InsufficientTeams);
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for &id in teams {
        if !seen.insert(id) {
            return Err(TournamentError::DuplicateTeam(id));
        }
    }

    // Working list of slots; None is the bye slot for odd team counts.
    let mut slots: Vec<Option<TeamId>> = teams.iter().copied().map(Some).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let rounds = slots.len() - 1;
    let pairs_per_round = slots.len() / 2;
    let mut fixtures = Vec::with_capacity(rounds * pairs_per_round);

    for round in 0..rounds {
        for m in 0..pairs_per_round {
            let (low, high) = (slots[m], slots[slots.len() - 1 - m]);
            if let (Some(home), Some(away)) = (low, high) {
                fixtures.push(Fixture::new(tournament_id, round as u32 + 1, home, away));
            }
        }
        // Rotate: slot 0 stays fixed, the last slot moves to position 1.
        let last = slots.pop().unwrap_or(None);
        slots.insert(1, last);
    }

    Ok(fixtures)
}
