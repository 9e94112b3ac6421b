use crate::db::models::{Appointment, Subscriber, VaccineScheduleEntry};
use crate::db::schema::{SQLITE_INIT, VACCINE_SEED};
use crate::error::CareError;
use crate::menu::Effect;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct CareStorage {
    pool: SqlitePool,
}

impl CareStorage {
    pub async fn connect(database_url: &str) -> Result<Self, CareError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(sqlx::Error::from)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CareError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the vaccine reference rows once; later startups are no-ops.
    pub async fn seed_vaccine_schedule(&self) -> Result<(), CareError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vaccine_schedule")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        for (recipient, age_label, vaccines) in VACCINE_SEED {
            sqlx::query(
                "INSERT INTO vaccine_schedule (recipient, age_label, vaccines) VALUES (?, ?, ?)",
            )
            .bind(recipient)
            .bind(age_label)
            .bind(vaccines)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn vaccine_schedule(&self) -> Result<Vec<VaccineScheduleEntry>, CareError> {
        let rows = sqlx::query_as(
            "SELECT id, recipient, age_label, vaccines FROM vaccine_schedule ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Apply one request's writes as a single transaction: subscriber
    /// lookup-or-create plus any booking/age effects, committed together or
    /// not at all. Notify effects carry no database write and are skipped.
    pub async fn apply_effects(
        &self,
        phone_number: &str,
        effects: &[Effect],
    ) -> Result<Subscriber, CareError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT OR IGNORE INTO subscribers (phone_number) VALUES (?)")
            .bind(phone_number)
            .execute(&mut *tx)
            .await?;
        let subscriber: Subscriber = sqlx::query_as(
            "SELECT id, phone_number, baby_age FROM subscribers WHERE phone_number = ?",
        )
        .bind(phone_number)
        .fetch_one(&mut *tx)
        .await?;

        for effect in effects {
            match effect {
                Effect::BookAppointment { kind, facility } => {
                    sqlx::query(
                        "INSERT INTO appointments (subscriber_id, appointment_type, facility, created_at) \
                         VALUES (?, ?, ?, ?)",
                    )
                    .bind(subscriber.id)
                    .bind(kind.as_str())
                    .bind(facility)
                    .bind(Utc::now().to_rfc3339())
                    .execute(&mut *tx)
                    .await?;
                }
                Effect::SetBabyAge { months } => {
                    sqlx::query("UPDATE subscribers SET baby_age = ? WHERE id = ?")
                        .bind(months.to_string())
                        .bind(subscriber.id)
                        .execute(&mut *tx)
                        .await?;
                }
                Effect::Notify { .. } => {}
            }
        }

        let subscriber: Subscriber = sqlx::query_as(
            "SELECT id, phone_number, baby_age FROM subscribers WHERE id = ?",
        )
        .bind(subscriber.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(subscriber)
    }

    pub async fn subscriber_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<Subscriber>, CareError> {
        let row = sqlx::query_as(
            "SELECT id, phone_number, baby_age FROM subscribers WHERE phone_number = ?",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn appointments_for(&self, phone_number: &str) -> Result<Vec<Appointment>, CareError> {
        let rows = sqlx::query_as(
            "SELECT a.id, a.subscriber_id, a.appointment_type, a.facility, a.created_at \
             FROM appointments a \
             JOIN subscribers s ON s.id = a.subscriber_id \
             WHERE s.phone_number = ? \
             ORDER BY a.id",
        )
        .bind(phone_number)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
