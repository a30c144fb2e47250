use sqlx::SqlitePool;
use tracing::info;

use crate::database::attendee_repo;
use crate::error::{StoreError, StoreResult};
use crate::models::{Attendee, NewAttendee};

/// Outcome of a registration attempt. A repeat registration for the same
/// user/event pair is an expected result, not an internal failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Registered(Attendee),
    AlreadyRegistered,
}

pub async fn register_for_event(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> StoreResult<RegistrationOutcome> {
    match attendee_repo::create_attendee(pool, NewAttendee { user_id, event_id }).await {
        Ok(attendee) => Ok(RegistrationOutcome::Registered(attendee)),
        Err(StoreError::AlreadyExists) => {
            info!(user_id = %user_id, event_id = %event_id, "duplicate_registration_ignored");
            Ok(RegistrationOutcome::AlreadyRegistered)
        }
        Err(err) => Err(err),
    }
}
