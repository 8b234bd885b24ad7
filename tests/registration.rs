//! Integration tests for the registration workflow.

use fixture_scheduler_web::{
    start_tournament, RegistrationStatus, Tournament, TournamentError,
};
use uuid::Uuid;

#[test]
fn register_team_starts_pending() {
    let mut t = Tournament::new("Spring League");
    let id = t.register_team("Arrows").unwrap();
    assert_eq!(t.registrations.len(), 1);
    assert_eq!(t.registrations[0].team.id, id);
    assert_eq!(t.registrations[0].status, RegistrationStatus::Pending);
    assert!(t.approved_teams().is_empty());
}

#[test]
fn register_trims_and_rejects_empty_names() {
    let mut t = Tournament::new("Spring League");
    let id = t.register_team("  Arrows  ").unwrap();
    assert_eq!(t.registrations[0].team.name, "Arrows");
    assert_eq!(t.registrations[0].team.id, id);

    assert_eq!(t.register_team("   "), Err(TournamentError::InvalidState));
    assert_eq!(t.registrations.len(), 1);
}

#[test]
fn duplicate_names_rejected_case_insensitive() {
    let mut t = Tournament::new("Spring League");
    t.register_team("Arrows").unwrap();
    assert_eq!(
        t.register_team("ARROWS"),
        Err(TournamentError::DuplicateTeamName)
    );
    assert_eq!(
        t.register_team(" arrows "),
        Err(TournamentError::DuplicateTeamName)
    );
    assert_eq!(t.registrations.len(), 1);
}

#[test]
fn review_filters_approved_teams() {
    let mut t = Tournament::new("Spring League");
    let a = t.register_team("Arrows").unwrap();
    let b = t.register_team("Bears").unwrap();
    let c = t.register_team("Comets").unwrap();

    t.review_registration(a, RegistrationStatus::Approved).unwrap();
    t.review_registration(b, RegistrationStatus::Rejected).unwrap();
    t.review_registration(c, RegistrationStatus::Approved).unwrap();

    let approved: Vec<_> = t.approved_teams().iter().map(|team| team.id).collect();
    assert_eq!(approved, vec![a, c]);

    // A rejected team can be re-reviewed while enrolling.
    t.review_registration(b, RegistrationStatus::Approved).unwrap();
    assert_eq!(t.approved_teams().len(), 3);
}

#[test]
fn review_unknown_team_fails() {
    let mut t = Tournament::new("Spring League");
    let ghost = Uuid::new_v4();
    assert_eq!(
        t.review_registration(ghost, RegistrationStatus::Approved),
        Err(TournamentError::TeamNotFound(ghost))
    );
}

#[test]
fn withdraw_removes_registration() {
    let mut t = Tournament::new("Spring League");
    let a = t.register_team("Arrows").unwrap();
    t.register_team("Bears").unwrap();

    t.withdraw_team(a).unwrap();
    assert_eq!(t.registrations.len(), 1);
    assert_eq!(
        t.withdraw_team(a),
        Err(TournamentError::TeamNotFound(a))
    );
}

#[test]
fn no_roster_changes_after_scheduling() {
    let mut t = Tournament::new("Spring League");
    let a = t.register_team("Arrows").unwrap();
    let b = t.register_team("Bears").unwrap();
    t.review_registration(a, RegistrationStatus::Approved).unwrap();
    t.review_registration(b, RegistrationStatus::Approved).unwrap();
    start_tournament(&mut t).unwrap();

    assert_eq!(t.register_team("Comets"), Err(TournamentError::InvalidState));
    assert_eq!(t.withdraw_team(a), Err(TournamentError::InvalidState));
    assert_eq!(
        t.review_registration(b, RegistrationStatus::Rejected),
        Err(TournamentError::InvalidState)
    );
    assert_eq!(t.registrations.len(), 2);
}
