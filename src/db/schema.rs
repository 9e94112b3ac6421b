//! SQL DDL for initializing the maternal-care storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `subscribers.phone_number` UNIQUE (creates an index implicitly)
/// - `appointments.subscriber_id` references `subscribers(id)`; foreign
///   keys are enabled on the connection
/// - timestamps stored as RFC3339 TEXT
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS subscribers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    phone_number TEXT NOT NULL UNIQUE,
    baby_age TEXT NULL
);

CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    subscriber_id INTEGER NOT NULL REFERENCES subscribers(id),
    appointment_type TEXT NOT NULL,
    facility TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_appointments_subscriber_id
    ON appointments(subscriber_id);

CREATE TABLE IF NOT EXISTS vaccine_schedule (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    recipient TEXT NOT NULL,
    age_label TEXT NOT NULL,
    vaccines TEXT NOT NULL
)
"#;

/// Seed rows for the baby vaccine schedule, inserted only when the table is
/// empty.
pub const VACCINE_SEED: &[(&str, &str, &str)] = &[
    ("baby", "At Birth", "BCG, Hepatitis B"),
    ("baby", "6 weeks", "Polio, DPT, Hib"),
    ("baby", "12 months", "MMR, Varicella"),
];
