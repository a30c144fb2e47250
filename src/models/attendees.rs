use serde::{Deserialize, Serialize};

/// Registration linking one user to one event. `(user_id, event_id)` is
/// unique at the storage level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendee {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
}

pub struct NewAttendee<'a> {
    pub user_id: &'a str,
    pub event_id: &'a str,
}
