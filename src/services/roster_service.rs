use sqlx::SqlitePool;

use crate::database::{attendee_repo, user_repo};
use crate::error::StoreResult;
use crate::models::UserWithRole;

pub struct EventRosterView {
    pub event_id: String,
    pub attendee_count: i64,
    pub entries: Vec<RosterEntryView>,
}

pub struct RosterEntryView {
    pub user_id: String,
    pub attendee_id: String,
    pub full_name: String,
    pub display_number: String,
    pub position: String,
    pub company: String,
    pub role: String,
    pub image_url: Option<String>,
}

/// Roster for one event: the joined user list plus the server-side
/// attendee count. An event without registrations yields an empty roster.
pub async fn load_event_roster(pool: &SqlitePool, event_id: &str) -> StoreResult<EventRosterView> {
    let users = user_repo::list_users_by_event(pool, event_id).await?;
    let attendee_count = attendee_repo::count_attendees_by_event(pool, event_id).await?;

    let entries = users.into_iter().map(build_entry).collect();

    Ok(EventRosterView {
        event_id: event_id.to_string(),
        attendee_count,
        entries,
    })
}

fn build_entry(user: UserWithRole) -> RosterEntryView {
    let display_number = format_display_number(&user.role, user.auto_id);
    RosterEntryView {
        user_id: user.id,
        attendee_id: user.attendee_id,
        full_name: user.full_name,
        display_number,
        position: user.position,
        company: user.company,
        role: user.role,
        image_url: user.image_url,
    }
}

/// Human-facing badge label, e.g. "Staff #3".
pub fn format_display_number(role: &str, auto_id: i64) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{} #{}",
            first.to_uppercase(),
            chars.as_str(),
            auto_id
        ),
        None => format!("#{}", auto_id),
    }
}
