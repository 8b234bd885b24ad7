//! Data structures for the tournament organizer: teams, fixtures, tournament state.

mod fixture;
mod team;
mod tournament;

pub use fixture::{Fixture, FixtureId, FixtureStatus};
pub use team::{Registration, RegistrationStatus, Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentStatus};
