//! Duration-banded destination templates for the city router.
//!
//! Each band covers a range of trip lengths and lists the destinations that
//! fill the middle days of the trip, in visiting order.

use crate::domain::CityId;

/// Destinations used for trips whose length falls in `min_days..=max_days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationBand {
    pub min_days: u32,
    /// `None` means no upper bound.
    pub max_days: Option<u32>,
    pub destinations: Vec<CityId>,
    /// Repeat the destinations when the trip has more middle days than the
    /// template. Otherwise spare days stay in the base city.
    pub cycle: bool,
}

impl DurationBand {
    pub fn covers(&self, days: u32) -> bool {
        days >= self.min_days && self.max_days.is_none_or(|max| days <= max)
    }

    /// Destination for the given middle slot (0-based), if any.
    pub fn destination(&self, slot: usize) -> Option<&CityId> {
        if self.destinations.is_empty() {
            return None;
        }
        if self.cycle {
            self.destinations.get(slot % self.destinations.len())
        } else {
            self.destinations.get(slot)
        }
    }
}

/// Ordered list of duration bands. The first band covering a duration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    bands: Vec<DurationBand>,
}

impl RouteTable {
    pub fn new(bands: Vec<DurationBand>) -> Self {
        Self { bands }
    }

    pub fn band_for(&self, days: u32) -> Option<&DurationBand> {
        self.bands.iter().find(|b| b.covers(days))
    }

    pub fn bands(&self) -> &[DurationBand] {
        &self.bands
    }

    /// All cities referenced by any band.
    pub fn cities(&self) -> impl Iterator<Item = &CityId> {
        self.bands.iter().flat_map(|b| b.destinations.iter())
    }
}

/// Builder taking city slugs. Invalid slugs are skipped.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    bands: Vec<DurationBand>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a band for `min_days..=max_days` (`None` = open-ended).
    pub fn band(mut self, min_days: u32, max_days: Option<u32>, destinations: &[&str], cycle: bool) -> Self {
        let destinations = destinations
            .iter()
            .filter_map(|s| CityId::parse(s).ok())
            .collect();
        self.bands.push(DurationBand {
            min_days,
            max_days,
            destinations,
            cycle,
        });
        self
    }

    pub fn build(self) -> RouteTable {
        RouteTable::new(self.bands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTableBuilder::new()
            .band(1, Some(3), &["grand-bassam"], false)
            .band(4, Some(7), &["grand-bassam", "assinie"], false)
            .band(8, None, &["man", "korhogo"], true)
            .build()
    }

    #[test]
    fn band_lookup() {
        let t = table();
        assert_eq!(t.band_for(1).unwrap().min_days, 1);
        assert_eq!(t.band_for(3).unwrap().min_days, 1);
        assert_eq!(t.band_for(4).unwrap().min_days, 4);
        assert_eq!(t.band_for(30).unwrap().min_days, 8);
        assert!(t.band_for(0).is_none());
    }

    #[test]
    fn non_cycling_band_runs_out() {
        let t = table();
        let band = t.band_for(5).unwrap();
        assert_eq!(band.destination(1).unwrap().as_str(), "assinie");
        assert!(band.destination(2).is_none());
    }

    #[test]
    fn cycling_band_wraps() {
        let t = table();
        let band = t.band_for(10).unwrap();
        assert_eq!(band.destination(0).unwrap().as_str(), "man");
        assert_eq!(band.destination(3).unwrap().as_str(), "korhogo");
        assert_eq!(band.destination(4).unwrap().as_str(), "man");
    }

    #[test]
    fn cities_lists_all_destinations() {
        assert_eq!(table().cities().count(), 5);
    }
}
