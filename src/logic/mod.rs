//! Tournament business logic: fixture generation and the start transition.

mod schedule;
mod start;

pub use schedule::generate_fixtures;
pub use start::{start_tournament, ScheduleSummary};
