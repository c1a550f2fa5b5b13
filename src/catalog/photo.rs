//! Photo descriptor records produced by the catalog collaborator

use chrono::{DateTime, Utc};

/// Immutable descriptor for one catalog photo
///
/// Produced by the catalog collaborator and never mutated afterwards. The
/// selection engine clones records into its histories; the catalog slice
/// itself is only borrowed for the duration of a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    /// Opaque identifier, unique within a catalog snapshot
    pub url: String,
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
    /// Capture time, absent when the source ecosystem cannot determine it
    pub captured: Option<DateTime<Utc>>,
}

impl PhotoRecord {
    /// Create a record without a capture timestamp
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
            captured: None,
        }
    }

    /// Attach a capture timestamp
    #[must_use]
    pub const fn with_capture_time(mut self, captured: DateTime<Utc>) -> Self {
        self.captured = Some(captured);
        self
    }

    /// Age in whole days relative to `now`
    ///
    /// Returns `None` when the capture time is unknown; such photos always
    /// fall into the unbounded time bucket.
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.captured
            .map(|captured| now.signed_duration_since(captured).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_age_days_counts_whole_days() {
        let captured = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single();
        let now = Utc.with_ymd_and_hms(2025, 6, 11, 11, 0, 0).single();
        let (Some(captured), Some(now)) = (captured, now) else {
            unreachable!("fixed timestamps are valid");
        };

        let photo = PhotoRecord::new("a.jpg", 4000, 3000).with_capture_time(captured);
        assert_eq!(photo.age_days(now), Some(9));
    }

    #[test]
    fn test_age_unknown_without_timestamp() {
        let photo = PhotoRecord::new("b.jpg", 800, 480);
        assert_eq!(photo.age_days(Utc::now()), None);
    }
}
