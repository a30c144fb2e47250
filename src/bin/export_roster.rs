use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

use checkin::database;
use checkin::services::roster_service;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let event_id = env::var("EVENT_ID").expect("EVENT_ID must be set");

    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("cannot connect to database");

    database::ensure_schema(&pool)
        .await
        .expect("schema bootstrap failed");

    match roster_service::load_event_roster(&pool, &event_id).await {
        Ok(roster) => {
            println!(
                "event {}: {} attendee(s)",
                roster.event_id, roster.attendee_count
            );
            for entry in &roster.entries {
                println!(
                    "  {} {} ({}, {}) attendee={}",
                    entry.display_number,
                    entry.full_name,
                    entry.position,
                    entry.company,
                    entry.attendee_id
                );
            }
        }
        Err(e) => {
            eprintln!("roster export failed: {}", e);
            std::process::exit(1);
        }
    }
}
