use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{classify_insert_error, StoreError, StoreResult};
use crate::models::{Attendee, NewAttendee};

const SQL_INSERT_ATTENDEE: &str = r#"
INSERT INTO attendees (id, user_id, event_id)
VALUES (?1, ?2, ?3)
"#;

/// Conflict-aware registration insert. A duplicate `(user_id, event_id)`
/// pair surfaces as `AlreadyExists`; the atomic check is the storage
/// engine's constraint, not a check-then-insert.
pub async fn create_attendee(pool: &SqlitePool, new: NewAttendee<'_>) -> StoreResult<Attendee> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(SQL_INSERT_ATTENDEE)
        .bind(&id)
        .bind(new.user_id)
        .bind(new.event_id)
        .execute(pool)
        .await
        .map_err(classify_insert_error)?;
    Ok(Attendee {
        id,
        user_id: new.user_id.to_string(),
        event_id: new.event_id.to_string(),
    })
}

const SQL_GET_ATTENDEE: &str = r#"
SELECT id, user_id, event_id
FROM attendees
WHERE id = ?1
LIMIT 1
"#;

pub async fn get_attendee(pool: &SqlitePool, id: &str) -> StoreResult<Attendee> {
    sqlx::query_as::<_, Attendee>(SQL_GET_ATTENDEE)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound)
}

const SQL_UPDATE_ATTENDEE: &str = r#"
UPDATE attendees
SET user_id = ?1, event_id = ?2
WHERE id = ?3
"#;

/// Reassigns the registration's user/event. Silent no-op when the id
/// matches nothing.
pub async fn update_attendee(pool: &SqlitePool, attendee: &Attendee) -> StoreResult<()> {
    sqlx::query(SQL_UPDATE_ATTENDEE)
        .bind(&attendee.user_id)
        .bind(&attendee.event_id)
        .bind(&attendee.id)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_DELETE_ATTENDEE: &str = r#"
DELETE FROM attendees WHERE id = ?1
"#;

pub async fn delete_attendee(pool: &SqlitePool, id: &str) -> StoreResult<()> {
    sqlx::query(SQL_DELETE_ATTENDEE).bind(id).execute(pool).await?;
    Ok(())
}

const SQL_LIST_ATTENDEES_BY_EVENT: &str = r#"
SELECT id, user_id, event_id
FROM attendees
WHERE event_id = ?1
"#;

pub async fn list_attendees_by_event(
    pool: &SqlitePool,
    event_id: &str,
) -> StoreResult<Vec<Attendee>> {
    let rows = sqlx::query_as::<_, Attendee>(SQL_LIST_ATTENDEES_BY_EVENT)
        .bind(event_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

const SQL_COUNT_ATTENDEES_BY_EVENT: &str = r#"
SELECT COUNT(*) FROM attendees WHERE event_id = ?1
"#;

/// Server-side aggregate; stays consistent under concurrent inserts.
pub async fn count_attendees_by_event(pool: &SqlitePool, event_id: &str) -> StoreResult<i64> {
    let count: i64 = sqlx::query_scalar(SQL_COUNT_ATTENDEES_BY_EVENT)
        .bind(event_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
