use serde::{Deserialize, Serialize};

/// Registered user. `auto_id` is the human-facing number, dense per role
/// starting at 1; the UUID `id` is the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub auto_id: i64,
    pub full_name: String,
    pub image_url: Option<String>,
    pub position: String,
    pub company: String,
    pub role: String,
}

/// Insert shape for `user_repo::create_user`; the store generates the id
/// and the per-role `auto_id`.
pub struct NewUser<'a> {
    pub full_name: &'a str,
    pub image_url: Option<&'a str>,
    pub position: &'a str,
    pub company: &'a str,
    pub role: &'a str,
}

/// Roster row: user fields plus the id of the registration for the queried
/// event. Produced only by the join in `user_repo::list_users_by_event`,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserWithRole {
    pub id: String,
    pub auto_id: i64,
    pub full_name: String,
    pub image_url: Option<String>,
    pub position: String,
    pub company: String,
    pub role: String,
    pub attendee_id: String,
}
