use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled sub-item of an event. `id` is assigned once, at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Activity {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub activity_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Insert shape for `activity_repo::create_activity`; the store generates
/// the id.
pub struct NewActivity<'a> {
    pub event_id: &'a str,
    pub name: &'a str,
    pub activity_type: &'a str,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
