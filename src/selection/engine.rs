//! Selection engine combining anniversary and age-weighted picking
//!
//! Holds the process-wide mutable selection state (anti-repetition memory,
//! navigation history) as an explicitly owned object. Callers serialize
//! concurrent access behind a single lock or actor; the engine itself is
//! synchronous and never blocks on I/O.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::catalog::PhotoRecord;
use crate::io::configuration::{ANNIVERSARY_PROBABILITY, DAYS_IN_YEAR, RotationConfig};
use crate::io::error::Result;
use crate::selection::buckets::{effective_weights, exclusion_mask, partition_catalog};
use crate::selection::history::{
    HistoryStatus, NavigationHistory, NavigationStatus, RecentHistory,
};
use crate::selection::random::RandomSelector;

/// Distance in calendar days between two month/day positions
///
/// Works on day-of-year ordinals with the 365-day complement, so the
/// Dec/Jan boundary wraps: Dec 30 and Jan 2 are 2 days apart.
pub fn calendar_day_distance(a: NaiveDate, b: NaiveDate) -> u32 {
    let direct = reference_ordinal(a).abs_diff(reference_ordinal(b));
    direct.min(DAYS_IN_YEAR.saturating_sub(direct))
}

/// Day-of-year position in a fixed leap reference year
///
/// Source years have different leap shapes, so comparing raw ordinals would
/// drift month/day positions by one around March. Re-anchoring both dates in
/// the same leap year (which also keeps Feb 29 representable) makes the
/// comparison a pure month/day one.
fn reference_ordinal(date: NaiveDate) -> u32 {
    NaiveDate::from_ymd_opt(2000, date.month(), date.day())
        .map_or_else(|| date.ordinal(), |anchored| anchored.ordinal())
}

/// Catalog positions eligible for an anniversary pick
///
/// A photo qualifies when its capture month/day lies within the window of
/// today's month/day in a different calendar year and it was not recently
/// shown. Current-year photos never qualify.
pub fn anniversary_candidates(
    catalog: &[PhotoRecord],
    today: NaiveDate,
    window: u32,
    recent: &RecentHistory,
) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, photo)| !recent.contains(&photo.url))
        .filter(|(_, photo)| {
            photo.captured.is_some_and(|captured| {
                let date = captured.date_naive();
                date.year() != today.year() && calendar_day_distance(date, today) <= window
            })
        })
        .map(|(index, _)| index)
        .collect()
}

/// Stateful photo picker
///
/// Deterministic apart from two independent seeded draw streams: one gating
/// the anniversary rule, one driving bucket and candidate selection. The
/// split keeps the weighted-draw sequence stable for a given seed whether
/// or not anniversaries are enabled.
#[derive(Debug)]
pub struct SelectionEngine {
    config: RotationConfig,
    recent: RecentHistory,
    navigation: NavigationHistory,
    anniversary_gate: RandomSelector,
    draws: RandomSelector,
    last_pick_anniversary: bool,
}

impl SelectionEngine {
    /// Create an engine with freshly validated configuration and empty state
    ///
    /// # Errors
    ///
    /// Returns an error if the rotation configuration fails validation.
    pub fn new(config: RotationConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let recent = RecentHistory::new(config.history_size);
        let navigation = NavigationHistory::new(config.navigation_capacity());
        Ok(Self {
            config,
            recent,
            navigation,
            anniversary_gate: RandomSelector::new(seed ^ 1),
            draws: RandomSelector::new(seed),
            last_pick_anniversary: false,
        })
    }

    /// Discard all selection state, keeping configuration and seed streams
    pub fn reset(&mut self) {
        self.recent = RecentHistory::new(self.config.history_size);
        self.navigation = NavigationHistory::new(self.config.navigation_capacity());
        self.last_pick_anniversary = false;
    }

    /// Pick the next photo to display using the current wall clock
    ///
    /// Returns `None` only for an empty catalog; the caller renders its
    /// fallback in that case.
    pub fn pick(&mut self, catalog: &[PhotoRecord]) -> Option<PhotoRecord> {
        let now = Utc::now();
        self.pick_at(catalog, now)
    }

    /// Pick the next photo relative to an explicit instant
    ///
    /// Split out from [`Self::pick`] so tests control the clock that drives
    /// both photo ages and the anniversary calendar.
    pub fn pick_at(&mut self, catalog: &[PhotoRecord], now: DateTime<Utc>) -> Option<PhotoRecord> {
        if catalog.is_empty() {
            return None;
        }

        if self.config.on_this_day
            && self.anniversary_gate.probability_gate(ANNIVERSARY_PROBABILITY)
        {
            if let Some(photo) = self.anniversary_pick(catalog, now.date_naive()) {
                return Some(photo);
            }
        }

        self.weighted_pick(catalog, now)
    }

    /// Pick uniformly among photos captured on roughly this day in an
    /// earlier or later year
    fn anniversary_pick(&mut self, catalog: &[PhotoRecord], today: NaiveDate) -> Option<PhotoRecord> {
        let candidates = anniversary_candidates(
            catalog,
            today,
            self.config.on_this_day_window_days,
            &self.recent,
        );

        let slot = candidates.get(self.draws.uniform_index(candidates.len()))?;
        let photo = catalog.get(*slot)?.clone();
        self.record_shown(&photo);
        self.last_pick_anniversary = true;
        Some(photo)
    }

    /// Weighted bucket draw with one bounded clear-and-retry when the
    /// repetition memory has excluded every candidate
    fn weighted_pick(&mut self, catalog: &[PhotoRecord], now: DateTime<Utc>) -> Option<PhotoRecord> {
        let mut mask = exclusion_mask(catalog, &self.recent);
        let mut pools = partition_catalog(catalog, &self.config.buckets, &mask, now);

        if pools.iter().all(Vec::is_empty) {
            // Catalog is smaller than the memory or fully shown; repeats
            // are allowed from here on.
            self.recent.clear();
            mask = exclusion_mask(catalog, &self.recent);
            pools = partition_catalog(catalog, &self.config.buckets, &mask, now);
        }

        let weights = effective_weights(&self.config.buckets, &pools);
        let total: u32 = weights.iter().sum();

        let pool = if total == 0 {
            // Every surviving bucket carries zero configured weight; fall
            // back to a uniform draw over the union so a pick still lands.
            pools.into_iter().flatten().collect()
        } else {
            let bucket = self.draws.weighted_choice(&weights);
            pools.get(bucket).cloned().unwrap_or_default()
        };

        let slot = pool.get(self.draws.uniform_index(pool.len()))?;
        let photo = catalog.get(*slot)?.clone();
        self.record_shown(&photo);
        self.last_pick_anniversary = false;
        Some(photo)
    }

    fn record_shown(&mut self, photo: &PhotoRecord) {
        self.recent.record(photo.url.clone());
        self.navigation.record(photo.clone());
    }

    /// Step back through the navigation history
    pub fn previous(&mut self) -> Option<PhotoRecord> {
        self.navigation.previous()
    }

    /// Step forward through the navigation history
    ///
    /// `None` at the tail means the caller should request a fresh pick.
    pub fn next(&mut self) -> Option<PhotoRecord> {
        self.navigation.next()
    }

    /// Photo currently under the navigation cursor
    pub fn current(&self) -> Option<PhotoRecord> {
        self.navigation.current()
    }

    /// Navigation cursor position and traversal bounds
    pub fn navigation_status(&self) -> NavigationStatus {
        self.navigation.status()
    }

    /// Anti-repetition memory occupancy
    pub fn history_status(&self) -> HistoryStatus {
        self.recent.status()
    }

    /// Whether the most recent successful pick came from the anniversary rule
    pub const fn last_pick_was_anniversary(&self) -> bool {
        self.last_pick_anniversary
    }

    /// Rotation configuration the engine was constructed with
    pub const fn config(&self) -> &RotationConfig {
        &self.config
    }
}
