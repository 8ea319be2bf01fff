/// Slide primary keys are UUIDs, generated server-side (v4).
pub type SlideId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
