//! Tournament organizer web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{generate_fixtures, start_tournament, ScheduleSummary};
pub use models::{
    Fixture, FixtureId, FixtureStatus, Registration, RegistrationStatus, Team, TeamId, Tournament,
    TournamentError, TournamentId, TournamentStatus,
};
