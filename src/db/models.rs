use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A mobile subscriber, keyed by phone number. Created on first contact and
/// never deleted; `baby_age` is filled in once the user sets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Subscriber {
    pub id: i64,
    pub phone_number: String,
    pub baby_age: Option<String>,
}

/// A booked appointment. Immutable once written; repeated bookings over the
/// same trail produce separate rows by design.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub subscriber_id: i64,
    pub appointment_type: String,
    pub facility: String,
    pub created_at: DateTime<Utc>,
}

/// Static vaccine reference data, seeded at startup and read-only after.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct VaccineScheduleEntry {
    pub id: i64,
    pub recipient: String,
    pub age_label: String,
    pub vaccines: String,
}
