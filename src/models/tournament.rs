//! Tournament, TournamentStatus, and TournamentError.

use crate::models::fixture::Fixture;
use crate::models::team::{Registration, RegistrationStatus, Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 approved teams; nothing to schedule.
    InsufficientTeams,
    /// Fixtures already exist for this tournament; scheduling is one-time.
    AlreadyScheduled,
    /// The same team id appears more than once in the generator input.
    DuplicateTeam(TeamId),
    /// A team with this name is already registered (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Team not found among this tournament's registrations.
    TeamNotFound(TeamId),
    /// Tournament is not in a state that allows this action.
    InvalidState,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientTeams => {
                write!(f, "Need at least 2 approved teams to generate fixtures")
            }
            TournamentError::AlreadyScheduled => {
                write!(f, "Fixtures have already been generated for this tournament")
            }
            TournamentError::DuplicateTeam(_) => {
                write!(f, "The same team appears more than once")
            }
            TournamentError::DuplicateTeamName => {
                write!(f, "A team with this name is already registered")
            }
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Taking registrations; fixtures not yet generated.
    #[default]
    Enrolling,
    /// Fixtures generated; registrations closed.
    Scheduled,
}

/// Full tournament state: registrations, fixtures, and phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// All registrations, pending and reviewed.
    pub registrations: Vec<Registration>,
    /// Generated schedule; empty until the tournament is started.
    pub fixtures: Vec<Fixture>,
    pub status: TournamentStatus,
}

impl Tournament {
    /// Create a new tournament in Enrolling status with no registrations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            registrations: Vec::new(),
            fixtures: Vec::new(),
            status: TournamentStatus::Enrolling,
        }
    }

    /// Create a tournament with teams already registered (still Enrolling, all pending).
    pub fn with_teams<I>(name: impl Into<String>, teams: I) -> Self
    where
        I: IntoIterator<Item = Team>,
    {
        Self {
            registrations: teams.into_iter().map(Registration::new).collect(),
            ..Self::new(name)
        }
    }

    /// Mutable reference to a registration by team id.
    pub fn get_registration_mut(&mut self, team_id: TeamId) -> Option<&mut Registration> {
        self.registrations.iter_mut().find(|r| r.team.id == team_id)
    }

    /// Approved teams, in registration order. This is the generator's input.
    pub fn approved_teams(&self) -> Vec<&Team> {
        self.registrations
            .iter()
            .filter(|r| r.is_approved())
            .map(|r| &r.team)
            .collect()
    }

    /// Register a team by name (only while Enrolling). Names must be unique (case-insensitive).
    pub fn register_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        if self.status != TournamentStatus::Enrolling {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let is_duplicate = self
            .registrations
            .iter()
            .any(|r| r.team.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.registrations.push(Registration::new(team));
        Ok(id)
    }

    /// Withdraw a team by id (only while Enrolling).
    pub fn withdraw_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Enrolling {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .registrations
            .iter()
            .position(|r| r.team.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.registrations.remove(idx);
        Ok(())
    }

    /// Review a registration: approve, reject, or move back to pending (only while Enrolling).
    pub fn review_registration(
        &mut self,
        team_id: TeamId,
        status: RegistrationStatus,
    ) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Enrolling {
            return Err(TournamentError::InvalidState);
        }
        let r = self
            .get_registration_mut(team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        r.status = status;
        Ok(())
    }
}
