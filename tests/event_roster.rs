mod common;

use std::collections::HashMap;

use checkin::database::{attendee_repo, user_repo};
use checkin::models::NewAttendee;
use checkin::services::registration_service::{self, RegistrationOutcome};
use checkin::services::roster_service;

#[tokio::test]
async fn join_attaches_the_right_attendee_id_to_each_user() {
    let (_dir, pool) = common::setup_pool().await;

    let staff = common::create_test_user(&pool, "Asha Rai", "staff")
        .await
        .expect("create staff");
    let participant = common::create_test_user(&pool, "Ben Okoye", "participant")
        .await
        .expect("create participant");

    let staff_attendee = attendee_repo::create_attendee(
        &pool,
        NewAttendee {
            user_id: &staff.id,
            event_id: "event-1",
        },
    )
    .await
    .expect("register staff");
    let participant_attendee = attendee_repo::create_attendee(
        &pool,
        NewAttendee {
            user_id: &participant.id,
            event_id: "event-1",
        },
    )
    .await
    .expect("register participant");

    // A registration for another event must not leak into the join.
    attendee_repo::create_attendee(
        &pool,
        NewAttendee {
            user_id: &staff.id,
            event_id: "event-2",
        },
    )
    .await
    .expect("register elsewhere");

    let listed = user_repo::list_users_by_event(&pool, "event-1")
        .await
        .expect("list users by event");
    assert_eq!(listed.len(), 2);

    let by_user: HashMap<_, _> = listed
        .into_iter()
        .map(|u| (u.id.clone(), u))
        .collect();
    assert_eq!(by_user[&staff.id].attendee_id, staff_attendee.id);
    assert_eq!(by_user[&staff.id].role, "staff");
    assert_eq!(by_user[&participant.id].attendee_id, participant_attendee.id);
    assert_eq!(by_user[&participant.id].role, "participant");
}

#[tokio::test]
async fn list_users_by_event_without_attendees_is_empty_not_an_error() {
    let (_dir, pool) = common::setup_pool().await;

    let listed = user_repo::list_users_by_event(&pool, "event-without-attendees")
        .await
        .expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn roster_view_carries_count_and_display_numbers() {
    let (_dir, pool) = common::setup_pool().await;

    let staff = common::create_test_user(&pool, "Asha Rai", "staff")
        .await
        .expect("create staff");
    attendee_repo::create_attendee(
        &pool,
        NewAttendee {
            user_id: &staff.id,
            event_id: "event-1",
        },
    )
    .await
    .expect("register staff");

    let roster = roster_service::load_event_roster(&pool, "event-1")
        .await
        .expect("load roster");
    assert_eq!(roster.event_id, "event-1");
    assert_eq!(roster.attendee_count, 1);
    assert_eq!(roster.entries.len(), 1);
    assert_eq!(roster.entries[0].display_number, "Staff #1");
    assert_eq!(roster.entries[0].full_name, "Asha Rai");
}

#[tokio::test]
async fn roster_for_event_without_attendees_is_empty() {
    let (_dir, pool) = common::setup_pool().await;

    let roster = roster_service::load_event_roster(&pool, "quiet-event")
        .await
        .expect("load roster");
    assert_eq!(roster.attendee_count, 0);
    assert!(roster.entries.is_empty());
}

#[tokio::test]
async fn repeat_registration_is_a_recoverable_outcome() {
    let (_dir, pool) = common::setup_pool().await;

    let user = common::create_test_user(&pool, "Asha Rai", "participant")
        .await
        .expect("create user");

    let first = registration_service::register_for_event(&pool, &user.id, "event-1")
        .await
        .expect("first registration");
    assert!(matches!(first, RegistrationOutcome::Registered(_)));

    let second = registration_service::register_for_event(&pool, &user.id, "event-1")
        .await
        .expect("second registration must not be an error");
    assert_eq!(second, RegistrationOutcome::AlreadyRegistered);
}

#[test]
fn display_number_capitalizes_the_role() {
    assert_eq!(roster_service::format_display_number("staff", 3), "Staff #3");
    assert_eq!(
        roster_service::format_display_number("participant", 12),
        "Participant #12"
    );
    assert_eq!(roster_service::format_display_number("", 1), "#1");
}
