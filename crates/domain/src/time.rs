//! Time and timestamp helpers.

use chrono::{Local, NaiveDateTime};

/// Local wall-clock timestamp attached to readings and history points.
///
/// Serializes as an ISO-8601 string without offset, e.g.
/// `2026-10-19T14:03:27.123456789`.
pub type Timestamp = NaiveDateTime;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_local_time() {
        let before = Local::now().naive_local();
        let ts = now();
        let after = Local::now().naive_local();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_serialize_as_iso_8601_without_offset() {
        let ts = chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 3, 27)
            .unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-10-19T14:03:27\"");
    }
}
