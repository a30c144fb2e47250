pub mod activity_repo;
pub mod attendee_repo;
pub mod user_repo;

use sqlx::SqlitePool;

use crate::error::StoreResult;

// Storage-level constraints are part of this layer's contract:
// UNIQUE(user_id, event_id) rejects duplicate registrations and
// UNIQUE(role, auto_id) backs the per-role numbering.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id TEXT PRIMARY KEY,
  event_id TEXT NOT NULL,
  name TEXT NOT NULL,
  type TEXT NOT NULL,
  start_time TEXT NOT NULL,
  end_time TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_activities_event_id ON activities(event_id);

CREATE TABLE IF NOT EXISTS users (
  id TEXT PRIMARY KEY,
  auto_id INTEGER NOT NULL,
  full_name TEXT NOT NULL,
  image_url TEXT,
  position TEXT NOT NULL,
  company TEXT NOT NULL,
  role TEXT NOT NULL,
  UNIQUE(role, auto_id)
);

CREATE TABLE IF NOT EXISTS attendees (
  id TEXT PRIMARY KEY,
  user_id TEXT NOT NULL REFERENCES users(id),
  event_id TEXT NOT NULL,
  UNIQUE(user_id, event_id)
);

CREATE INDEX IF NOT EXISTS idx_attendees_event_id ON attendees(event_id);
"#;

/// Idempotent schema bootstrap. Deployments may manage the same DDL
/// externally; tests and the admin tooling call this directly.
pub async fn ensure_schema(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
