// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};

/// Deterministic base timestamp for fixtures.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
}

pub fn seconds_after_base(seconds: i64) -> DateTime<Utc> {
    fixed_now() + Duration::seconds(seconds)
}
