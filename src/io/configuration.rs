//! Display constants and validated rotation configuration

use crate::io::error::{Result, invalid_configuration};
use crate::selection::buckets::TimeBucket;

/// Horizontal display resolution in pixels
pub const DISPLAY_WIDTH: usize = 800;
/// Vertical display resolution in pixels
pub const DISPLAY_HEIGHT: usize = 480;

/// Fixed seed for reproducible selection and rendering runs
pub const DEFAULT_SEED: u64 = 42;

/// Probability that an eligible anniversary pick preempts the weighted draw
pub const ANNIVERSARY_PROBABILITY: f64 = 0.5;

/// Default day window around today's month/day for anniversary matching
pub const DEFAULT_ANNIVERSARY_WINDOW_DAYS: u32 = 3;

/// Day count used for the year-wrap complement at the Dec/Jan boundary
pub const DAYS_IN_YEAR: u32 = 365;

/// Default anti-repetition memory size
pub const DEFAULT_HISTORY_SIZE: usize = 25;

/// Weights each bucket's configured share must total
pub const TOTAL_BUCKET_WEIGHT: u32 = 100;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to rendered output filenames
pub const OUTPUT_SUFFIX: &str = "_display";

/// Validated rotation parameters
///
/// Validation runs once at startup; the selection engine trusts the
/// configuration afterwards and never re-checks it at pick time.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Ordered age buckets, ascending ceilings, terminal unbounded bucket
    pub buckets: Vec<TimeBucket>,
    /// Anti-repetition memory capacity
    pub history_size: usize,
    /// Whether anniversary picks may preempt the weighted draw
    pub on_this_day: bool,
    /// Day window around today's month/day for anniversary matching
    pub on_this_day_window_days: u32,
    /// Whether rendering diffuses quantization error
    pub dithering: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            buckets: vec![
                TimeBucket::bounded(30, 35),
                TimeBucket::bounded(180, 30),
                TimeBucket::bounded(730, 20),
                TimeBucket::unbounded(15),
            ],
            history_size: DEFAULT_HISTORY_SIZE,
            on_this_day: true,
            on_this_day_window_days: DEFAULT_ANNIVERSARY_WINDOW_DAYS,
            dithering: true,
        }
    }
}

impl RotationConfig {
    /// Check every structural invariant the selection engine relies on
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket list is empty, weights do not sum to
    /// 100, the terminal bucket is bounded, any other bucket is unbounded,
    /// bounded ceilings are not strictly ascending, the history size is
    /// zero, or anniversaries are enabled with a zero-day window.
    pub fn validate(&self) -> Result<()> {
        if self.buckets.is_empty() {
            return Err(invalid_configuration("buckets", &"bucket list is empty"));
        }

        let weight_sum: u32 = self.buckets.iter().map(|bucket| bucket.weight).sum();
        if weight_sum != TOTAL_BUCKET_WEIGHT {
            return Err(invalid_configuration(
                "buckets",
                &format!("weights sum to {weight_sum}, expected {TOTAL_BUCKET_WEIGHT}"),
            ));
        }

        let bounded_count = self
            .buckets
            .iter()
            .filter(|bucket| bucket.max_age_days.is_some())
            .count();
        if bounded_count + 1 != self.buckets.len() {
            return Err(invalid_configuration(
                "buckets",
                &"exactly one unbounded bucket is required",
            ));
        }
        if self
            .buckets
            .last()
            .is_some_and(|bucket| bucket.max_age_days.is_some())
        {
            return Err(invalid_configuration(
                "buckets",
                &"the unbounded bucket must come last",
            ));
        }

        let ceilings: Vec<u32> = self
            .buckets
            .iter()
            .filter_map(|bucket| bucket.max_age_days)
            .collect();
        if ceilings.windows(2).any(|pair| {
            pair.first()
                .zip(pair.get(1))
                .is_some_and(|(lower, upper)| lower >= upper)
        }) {
            return Err(invalid_configuration(
                "buckets",
                &"age ceilings must be strictly ascending",
            ));
        }

        if self.history_size == 0 {
            return Err(invalid_configuration(
                "history_size",
                &"history size must be at least 1",
            ));
        }

        if self.on_this_day && self.on_this_day_window_days == 0 {
            return Err(invalid_configuration(
                "on_this_day_window_days",
                &"anniversary matching needs a window of at least 1 day",
            ));
        }

        Ok(())
    }

    /// Navigation stack capacity derived from the repetition memory size
    pub const fn navigation_capacity(&self) -> usize {
        2 * self.history_size
    }
}
