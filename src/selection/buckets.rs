//! Age bucket partitioning and effective weight computation
//!
//! Photos are assigned to the first bucket whose age ceiling they satisfy;
//! the terminal unbounded bucket catches everything else, including photos
//! without a capture timestamp. Buckets whose candidate pool empties out
//! simply drop from the weighted draw: survivors keep their configured
//! weights and the removed mass shifts among them implicitly.

use bitvec::prelude::{BitVec, bitvec};
use chrono::{DateTime, Utc};

use crate::catalog::PhotoRecord;
use crate::selection::history::RecentHistory;

/// One age band of the rotation distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBucket {
    /// Inclusive age ceiling in days; `None` marks the unbounded final bucket
    pub max_age_days: Option<u32>,
    /// Percentage share of the weighted draw
    pub weight: u32,
}

impl TimeBucket {
    /// Create a bucket with an age ceiling
    pub const fn bounded(max_age_days: u32, weight: u32) -> Self {
        Self {
            max_age_days: Some(max_age_days),
            weight,
        }
    }

    /// Create the open-ended final bucket
    pub const fn unbounded(weight: u32) -> Self {
        Self {
            max_age_days: None,
            weight,
        }
    }

    /// Test whether a photo age falls under this bucket's ceiling
    ///
    /// Undated photos (`None` age) only satisfy the unbounded bucket.
    pub const fn accepts(&self, age_days: Option<i64>) -> bool {
        match (self.max_age_days, age_days) {
            (None, _) => true,
            (Some(ceiling), Some(age)) => age <= ceiling as i64,
            (Some(_), None) => false,
        }
    }
}

/// Mark catalog positions whose photo was recently shown
pub fn exclusion_mask(catalog: &[PhotoRecord], recent: &RecentHistory) -> BitVec {
    let mut mask = bitvec![0; catalog.len()];
    for (index, photo) in catalog.iter().enumerate() {
        if recent.contains(&photo.url) {
            mask.set(index, true);
        }
    }
    mask
}

/// Partition catalog indices into per-bucket candidate pools
///
/// Each photo lands in the first bucket (ascending ceiling order) that
/// accepts its age; excluded positions are skipped entirely.
pub fn partition_catalog(
    catalog: &[PhotoRecord],
    buckets: &[TimeBucket],
    excluded: &BitVec,
    now: DateTime<Utc>,
) -> Vec<Vec<usize>> {
    let mut pools: Vec<Vec<usize>> = vec![Vec::new(); buckets.len()];

    for (index, photo) in catalog.iter().enumerate() {
        if excluded.get(index).as_deref() == Some(&true) {
            continue;
        }
        let age = photo.age_days(now);
        if let Some(slot) = buckets.iter().position(|bucket| bucket.accepts(age)) {
            if let Some(pool) = pools.get_mut(slot) {
                pool.push(index);
            }
        }
    }

    pools
}

/// Per-bucket weights for the draw, zeroing buckets with no candidates
pub fn effective_weights(buckets: &[TimeBucket], pools: &[Vec<usize>]) -> Vec<u32> {
    buckets
        .iter()
        .zip(pools)
        .map(|(bucket, pool)| if pool.is_empty() { 0 } else { bucket.weight })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn dated(url: &str, age_days: i64, now: DateTime<Utc>) -> PhotoRecord {
        PhotoRecord::new(url, 800, 480).with_capture_time(now - Duration::days(age_days))
    }

    #[test]
    fn test_photo_lands_in_first_accepting_bucket() {
        let now = Utc::now();
        let buckets = [
            TimeBucket::bounded(30, 50),
            TimeBucket::bounded(365, 30),
            TimeBucket::unbounded(20),
        ];
        let catalog = [
            dated("young", 5, now),
            dated("middle", 90, now),
            dated("old", 900, now),
            PhotoRecord::new("undated", 800, 480),
        ];
        let excluded = bitvec![0; catalog.len()];

        let pools = partition_catalog(&catalog, &buckets, &excluded, now);
        assert_eq!(pools, vec![vec![0], vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_excluded_positions_never_pool() {
        let now = Utc::now();
        let buckets = [TimeBucket::unbounded(100)];
        let catalog = [dated("a", 1, now), dated("b", 2, now)];
        let mut excluded = bitvec![0; 2];
        excluded.set(0, true);

        let pools = partition_catalog(&catalog, &buckets, &excluded, now);
        assert_eq!(pools, vec![vec![1]]);
    }

    #[test]
    fn test_empty_pool_zeroes_weight() {
        let buckets = [TimeBucket::bounded(30, 50), TimeBucket::unbounded(50)];
        let pools = vec![Vec::new(), vec![3, 4]];
        assert_eq!(effective_weights(&buckets, &pools), vec![0, 50]);
    }
}
