use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::attendee_repo;
use crate::error::{classify_insert_error, StoreError, StoreResult};
use crate::models::{NewUser, User, UserWithRole};

// The next per-role number is computed inside the INSERT itself, so the
// read-max and the write run as one statement under the engine's write
// lock. UNIQUE(role, auto_id) backs the same invariant in the schema.
const SQL_INSERT_USER: &str = r#"
INSERT INTO users (
  id,
  auto_id,
  full_name,
  image_url,
  position,
  company,
  role
) VALUES (
  ?1,
  (SELECT COALESCE(MAX(auto_id), 0) + 1 FROM users WHERE role = ?2),
  ?3, ?4, ?5, ?6, ?2
)
RETURNING auto_id
"#;

/// Creates a user and assigns the next display number for its role. On
/// success the returned user carries a unique `auto_id` within that role;
/// identity conflicts surface as `AlreadyExists`.
pub async fn create_user(pool: &SqlitePool, new: NewUser<'_>) -> StoreResult<User> {
    let id = Uuid::new_v4().to_string();
    let auto_id: i64 = sqlx::query_scalar(SQL_INSERT_USER)
        .bind(&id)
        .bind(new.role)
        .bind(new.full_name)
        .bind(new.image_url)
        .bind(new.position)
        .bind(new.company)
        .fetch_one(pool)
        .await
        .map_err(classify_insert_error)?;
    Ok(User {
        id,
        auto_id,
        full_name: new.full_name.to_string(),
        image_url: new.image_url.map(str::to_string),
        position: new.position.to_string(),
        company: new.company.to_string(),
        role: new.role.to_string(),
    })
}

const SQL_GET_USER: &str = r#"
SELECT
  id,
  auto_id,
  full_name,
  image_url,
  position,
  company,
  role
FROM users
WHERE id = ?1
LIMIT 1
"#;

pub async fn get_user(pool: &SqlitePool, id: &str) -> StoreResult<User> {
    sqlx::query_as::<_, User>(SQL_GET_USER)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound)
}

/// Two-hop lookup: resolve the attendee row, then fetch the referenced
/// user. `NotFound` if either hop misses.
pub async fn get_user_by_attendee_id(pool: &SqlitePool, attendee_id: &str) -> StoreResult<User> {
    let attendee = attendee_repo::get_attendee(pool, attendee_id).await?;
    get_user(pool, &attendee.user_id).await
}

const SQL_LIST_ALL_USERS: &str = r#"
SELECT
  id,
  auto_id,
  full_name,
  image_url,
  position,
  company,
  role
FROM users
ORDER BY role ASC, auto_id ASC
"#;

/// Full-table administrative listing.
pub async fn list_all_users(pool: &SqlitePool) -> StoreResult<Vec<User>> {
    let rows = sqlx::query_as::<_, User>(SQL_LIST_ALL_USERS)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

const SQL_LIST_USERS_BY_EVENT: &str = r#"
SELECT
  u.id,
  u.auto_id,
  u.full_name,
  u.image_url,
  u.position,
  u.company,
  u.role,
  a.id AS attendee_id
FROM attendees a
JOIN users u ON u.id = a.user_id
WHERE a.event_id = ?1
ORDER BY u.role ASC, u.auto_id ASC
"#;

/// Everyone registered for the event, each carrying the id of their
/// registration. Empty when the event has no attendees.
pub async fn list_users_by_event(
    pool: &SqlitePool,
    event_id: &str,
) -> StoreResult<Vec<UserWithRole>> {
    let rows = sqlx::query_as::<_, UserWithRole>(SQL_LIST_USERS_BY_EVENT)
        .bind(event_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
