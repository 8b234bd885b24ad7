//! Fixture: one scheduled match between two teams on a match day.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type FixtureId = Uuid;

/// Lifecycle of a fixture. Newly generated fixtures are always Scheduled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
}

/// A single scheduled match within a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub tournament_id: Uuid,
    /// Round number, 1-based and contiguous across the schedule.
    pub match_day: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub status: FixtureStatus,
}

impl Fixture {
    pub fn new(tournament_id: Uuid, match_day: u32, home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            match_day,
            home_team_id,
            away_team_id,
            status: FixtureStatus::Scheduled,
        }
    }
}
