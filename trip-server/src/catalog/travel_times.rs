//! Travel times between cities.
//!
//! The matrix is keyed by ordered city pair. Travel time doubles as the
//! distance proxy for pricing ground transport. Pairs that are not listed
//! resolve to a conservative default rather than failing.

use std::collections::HashMap;

use chrono::Duration;

use crate::domain::{CityId, hours};

/// Travel time used for pairs missing from the matrix.
pub const DEFAULT_TRAVEL_TIME_MINS: i64 = 120;

/// Travel-time matrix keyed by ordered `(from, to)` pair.
#[derive(Debug, Clone)]
pub struct TravelTimes {
    times: HashMap<(CityId, CityId), Duration>,
    default: Duration,
}

impl Default for TravelTimes {
    fn default() -> Self {
        Self {
            times: HashMap::new(),
            default: Duration::minutes(DEFAULT_TRAVEL_TIME_MINS),
        }
    }
}

impl TravelTimes {
    /// Create an empty matrix with the standard 2h default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the travel time for one direction only.
    pub fn insert(&mut self, from: CityId, to: CityId, duration: Duration) {
        self.times.insert((from, to), duration);
    }

    /// Set the same travel time in both directions.
    pub fn insert_symmetric(&mut self, a: CityId, b: CityId, duration: Duration) {
        self.times.insert((a.clone(), b.clone()), duration);
        self.times.insert((b, a), duration);
    }

    /// Returns the listed travel time, if any.
    pub fn lookup(&self, from: &CityId, to: &CityId) -> Option<Duration> {
        self.times.get(&(from.clone(), to.clone())).copied()
    }

    /// Returns the travel time between two cities.
    ///
    /// The same city is zero; unlisted pairs use the default.
    pub fn get(&self, from: &CityId, to: &CityId) -> Duration {
        if from == to {
            return Duration::zero();
        }
        self.lookup(from, to).unwrap_or(self.default)
    }

    /// Returns the fallback used for unlisted pairs.
    pub fn default_time(&self) -> Duration {
        self.default
    }

    /// Iterate over all listed `(from, to, duration)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&CityId, &CityId, Duration)> {
        self.times.iter().map(|((f, t), d)| (f, t, *d))
    }

    /// Number of listed ordered pairs.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Builder for creating travel-time matrices.
///
/// Provides a fluent API taking city slugs and fractional hours. Entries
/// with invalid slugs are skipped.
#[derive(Debug, Default)]
pub struct TravelTimesBuilder {
    inner: TravelTimes,
}

impl TravelTimesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symmetric entry.
    pub fn add(mut self, a: &str, b: &str, travel_hours: f64) -> Self {
        if let (Ok(a), Ok(b)) = (CityId::parse(a), CityId::parse(b)) {
            self.inner.insert_symmetric(a, b, hours(travel_hours));
        }
        self
    }

    /// Add a one-way entry.
    pub fn add_one_way(mut self, from: &str, to: &str, travel_hours: f64) -> Self {
        if let (Ok(from), Ok(to)) = (CityId::parse(from), CityId::parse(to)) {
            self.inner.insert(from, to, hours(travel_hours));
        }
        self
    }

    pub fn build(self) -> TravelTimes {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    #[test]
    fn empty_matrix_uses_default() {
        let tt = TravelTimes::new();
        assert!(tt.is_empty());
        assert_eq!(tt.get(&city("abidjan"), &city("man")), Duration::hours(2));
        assert!(tt.lookup(&city("abidjan"), &city("man")).is_none());
    }

    #[test]
    fn same_city_is_zero() {
        let tt = TravelTimes::new();
        assert_eq!(tt.get(&city("man"), &city("man")), Duration::zero());
    }

    #[test]
    fn symmetric_insert() {
        let tt = TravelTimesBuilder::new().add("abidjan", "man", 7.0).build();
        assert_eq!(tt.len(), 2);
        assert_eq!(tt.get(&city("abidjan"), &city("man")), Duration::hours(7));
        assert_eq!(tt.get(&city("man"), &city("abidjan")), Duration::hours(7));
    }

    #[test]
    fn one_way_entries_are_ordered() {
        let tt = TravelTimesBuilder::new()
            .add_one_way("abidjan", "assinie", 1.5)
            .build();
        assert_eq!(tt.get(&city("abidjan"), &city("assinie")), Duration::minutes(90));
        // Reverse direction falls back to the default.
        assert_eq!(tt.get(&city("assinie"), &city("abidjan")), Duration::hours(2));
    }

    #[test]
    fn builder_skips_invalid_slugs() {
        let tt = TravelTimesBuilder::new()
            .add("Abidjan", "man", 7.0)
            .add("abidjan", "man", 7.0)
            .build();
        assert_eq!(tt.len(), 2);
    }
}
