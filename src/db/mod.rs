//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and seed rows for initializing the database
//! - `sqlite.rs`: pool-backed storage handle

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Appointment, Subscriber, VaccineScheduleEntry};
pub use schema::SQLITE_INIT;
pub use sqlite::{CareStorage, SqlitePool};

use crate::error::CareError;

/// Open (creating if missing) the SQLite database at `database_url`, apply
/// the schema, and seed the vaccine reference rows.
pub async fn spawn(database_url: &str) -> Result<CareStorage, CareError> {
    let storage = CareStorage::connect(database_url).await?;
    storage.init_schema().await?;
    storage.seed_vaccine_schedule().await?;
    Ok(storage)
}
