/// Database primary keys are PostgreSQL BIGSERIAL values.
pub type DbId = i64;

/// Timestamps are stored and handled in UTC throughout.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
