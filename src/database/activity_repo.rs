use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{Activity, NewActivity};

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  id,
  event_id,
  name,
  type,
  start_time,
  end_time
) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub async fn create_activity(pool: &SqlitePool, new: NewActivity<'_>) -> StoreResult<Activity> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(&id)
        .bind(new.event_id)
        .bind(new.name)
        .bind(new.activity_type)
        .bind(new.start_time)
        .bind(new.end_time)
        .execute(pool)
        .await?;
    Ok(Activity {
        id,
        event_id: new.event_id.to_string(),
        name: new.name.to_string(),
        activity_type: new.activity_type.to_string(),
        start_time: new.start_time,
        end_time: new.end_time,
    })
}

const SQL_GET_ACTIVITY: &str = r#"
SELECT
  id,
  event_id,
  name,
  type AS activity_type,
  start_time,
  end_time
FROM activities
WHERE id = ?1
LIMIT 1
"#;

pub async fn get_activity(pool: &SqlitePool, id: &str) -> StoreResult<Activity> {
    sqlx::query_as::<_, Activity>(SQL_GET_ACTIVITY)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound)
}

const SQL_UPDATE_ACTIVITY: &str = r#"
UPDATE activities
SET event_id = ?1, name = ?2, type = ?3, start_time = ?4, end_time = ?5
WHERE id = ?6
"#;

/// Replaces all mutable fields. A missing id is a silent no-op; existence
/// is not verified here.
pub async fn update_activity(pool: &SqlitePool, activity: &Activity) -> StoreResult<()> {
    sqlx::query(SQL_UPDATE_ACTIVITY)
        .bind(&activity.event_id)
        .bind(&activity.name)
        .bind(&activity.activity_type)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(&activity.id)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities WHERE id = ?1
"#;

/// Silent no-op when the id matches nothing.
pub async fn delete_activity(pool: &SqlitePool, id: &str) -> StoreResult<()> {
    sqlx::query(SQL_DELETE_ACTIVITY).bind(id).execute(pool).await?;
    Ok(())
}

const SQL_LIST_ACTIVITIES_BY_EVENT: &str = r#"
SELECT
  id,
  event_id,
  name,
  type AS activity_type,
  start_time,
  end_time
FROM activities
WHERE event_id = ?1
ORDER BY start_time ASC
"#;

pub async fn list_activities_by_event(
    pool: &SqlitePool,
    event_id: &str,
) -> StoreResult<Vec<Activity>> {
    let rows = sqlx::query_as::<_, Activity>(SQL_LIST_ACTIVITIES_BY_EVENT)
        .bind(event_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
