//! Team and registration data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in fixtures and lookups).
pub type TeamId = Uuid;

/// Where a team's registration stands. Only approved teams are scheduled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A team registered (or trying to register) for a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    /// Create a new team with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A team's entry in a tournament, with its review status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub team: Team,
    pub status: RegistrationStatus,
}

impl Registration {
    /// New pending registration for the given team.
    pub fn new(team: Team) -> Self {
        Self {
            team,
            status: RegistrationStatus::Pending,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == RegistrationStatus::Approved
    }
}
