//! Hotel selection for every night of the trip.

use std::collections::BTreeMap;

use tracing::info;

use super::config::PlannerConfig;
use super::overnight::Night;
use crate::catalog::Catalog;
use crate::domain::{BudgetTier, CityId, Hotel};

/// The hotels chosen for a trip and the nights spent in them.
#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    base: CityId,
    hotels: BTreeMap<CityId, Hotel>,
    /// City slept in, per night.
    nights: Vec<CityId>,
    total: f64,
}

impl Accommodation {
    fn new(base: CityId, hotels: BTreeMap<CityId, Hotel>, nights: Vec<CityId>) -> Self {
        let total = nights
            .iter()
            .filter_map(|city| hotels.get(city))
            .map(|h| h.cost)
            .sum();
        Self {
            base,
            hotels,
            nights,
            total,
        }
    }

    /// The hotel used in `city`, if one was chosen.
    pub fn hotel_for(&self, city: &CityId) -> Option<&Hotel> {
        self.hotels.get(city)
    }

    pub fn base_hotel(&self) -> Option<&Hotel> {
        self.hotels.get(&self.base)
    }

    pub fn hotels(&self) -> &BTreeMap<CityId, Hotel> {
        &self.hotels
    }

    /// Cost of every night actually spent.
    pub fn total_cost(&self) -> f64 {
        self.total
    }
}

/// Chooses hotels and repairs lodging that eats too much of the budget.
pub struct AccommodationPlanner<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> AccommodationPlanner<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Pick a hotel for the base and for every city stayed in.
    ///
    /// Each city gets its cheapest hotel of the requested tier, else its
    /// cheapest hotel of any tier, else the base city's hotel.
    pub fn plan(&self, nights: &[Night], tier: BudgetTier) -> Accommodation {
        let base = self.catalog.base_city().clone();
        let mut hotels = BTreeMap::new();

        if let Some(hotel) = self.select(&base, tier) {
            hotels.insert(base.clone(), hotel.clone());
        }
        for night in nights {
            if hotels.contains_key(&night.sleeps_in) {
                continue;
            }
            if let Some(hotel) = self.select(&night.sleeps_in, tier) {
                hotels.insert(night.sleeps_in.clone(), hotel.clone());
            }
        }

        let slept = nights.iter().map(|n| n.sleeps_in.clone()).collect();
        Accommodation::new(base, hotels, slept)
    }

    fn select(&self, city: &CityId, tier: BudgetTier) -> Option<&'a Hotel> {
        let base = self.catalog.base_city();
        self.cheapest(city, Some(tier))
            .or_else(|| self.cheapest(city, None))
            .or_else(|| self.cheapest(base, Some(tier)))
            .or_else(|| self.cheapest(base, None))
    }

    fn cheapest(&self, city: &CityId, tier: Option<BudgetTier>) -> Option<&'a Hotel> {
        self.catalog
            .hotels()
            .iter()
            .filter(|h| &h.city == city && tier.is_none_or(|t| h.tier == t))
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
    }

    /// Downgrade every hotel to its city's cheapest Budget-tier hotel when
    /// lodging exceeds the configured share of `adjusted_budget`.
    ///
    /// Cities without a Budget-tier hotel keep their selection.
    pub fn repair(&self, accommodation: Accommodation, adjusted_budget: f64) -> Accommodation {
        let limit = self.config.lodging_ratio * adjusted_budget;
        if accommodation.total <= limit {
            return accommodation;
        }

        let Accommodation {
            base,
            hotels,
            nights,
            total,
        } = accommodation;

        let hotels: BTreeMap<_, _> = hotels
            .into_iter()
            .map(|(city, hotel)| {
                let hotel = self
                    .cheapest(&city, Some(BudgetTier::Budget))
                    .cloned()
                    .unwrap_or(hotel);
                (city, hotel)
            })
            .collect();

        let repaired = Accommodation::new(base, hotels, nights);
        info!(
            before = total,
            after = repaired.total,
            limit,
            "Lodging over budget share, downgraded hotels"
        );
        repaired
    }
}
