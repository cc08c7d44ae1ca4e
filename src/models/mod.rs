pub mod analytics;
pub mod assessment;
pub mod user;

use chrono::{SecondsFormat, Utc};

/// Current UTC time as a fixed-width RFC 3339 string.
///
/// Microsecond precision keeps lexicographic and chronological order equal.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_fixed_width() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2026-02-11T08:30:00.000000Z".len());
        assert!(ts.ends_with('Z'));
    }
}
