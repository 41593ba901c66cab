/// All primary keys are UUIDs assigned by the store.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates without a time component (reservations, milestones).
pub type Date = chrono::NaiveDate;
