/// Lead primary keys are PostgreSQL UUIDs (`gen_random_uuid()`).
pub type LeadId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a lead id received from the outside world.
///
/// Ids are opaque to callers, so anything that is not a UUID simply cannot
/// match a stored lead and yields `None`.
pub fn parse_lead_id(raw: &str) -> Option<LeadId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
