//! Tunables for trip planning.

use chrono::Duration;

use crate::domain::{BudgetTier, DayTime};

/// Configuration parameters for trip planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Longest trip accepted, in days.
    pub max_trip_days: u32,

    /// Hour the day's time cursor starts at.
    pub day_start_hour: u32,

    /// Maximum total duration of a day's items (minutes).
    pub max_daily_mins: i64,

    /// Maximum travel time from the second-to-last day's city to the base
    /// (minutes). Cities further out are replaced by the base.
    pub safety_threshold_mins: i64,

    /// Travel to the next city above this (minutes) means staying put.
    pub long_transfer_mins: i64,

    /// A detour through the base above this (minutes) means staying put.
    pub detour_limit_mins: i64,

    /// Preferred radius around the last stop for morning picks (km).
    pub morning_radius_km: f64,

    /// Preferred radius around the last stop for afternoon picks (km).
    pub afternoon_radius_km: f64,

    /// Length of lunch and dinner (minutes).
    pub meal_mins: i64,

    /// Longest activity allowed on the morning of the last day (minutes).
    pub last_morning_max_mins: i64,

    /// Fee for the transfer between airport and hotel.
    pub airport_transfer_fee: f64,

    /// Length of an intra-city hop between stops (minutes).
    pub hop_mins: i64,

    /// Fallback price of an intra-city hop when a city has no options.
    pub default_hop_cost: f64,

    /// Rental cars are only offered when the total budget exceeds this.
    pub rental_threshold: f64,

    /// Public transport rate per hour when the catalog has none.
    pub default_public_rate: f64,

    /// Lodging above this share of the adjusted budget triggers a downgrade.
    pub lodging_ratio: f64,

    /// Only activities costing more than this are trimmed when over budget.
    pub trim_floor: f64,

    /// Total budgets from here up default to the Mid-Range tier.
    pub mid_range_from: f64,

    /// Total budgets from here up default to the Luxury tier.
    pub luxury_from: f64,
}

impl PlannerConfig {
    /// Returns the start of each day.
    pub fn day_start(&self) -> DayTime {
        DayTime::at_hour(self.day_start_hour)
    }

    /// Returns the daily duration cap as a Duration.
    pub fn max_daily(&self) -> Duration {
        Duration::minutes(self.max_daily_mins)
    }

    /// Returns the safety threshold as a Duration.
    pub fn safety_threshold(&self) -> Duration {
        Duration::minutes(self.safety_threshold_mins)
    }

    /// Returns the long-transfer threshold as a Duration.
    pub fn long_transfer(&self) -> Duration {
        Duration::minutes(self.long_transfer_mins)
    }

    /// Returns the detour limit as a Duration.
    pub fn detour_limit(&self) -> Duration {
        Duration::minutes(self.detour_limit_mins)
    }

    /// Returns the meal length as a Duration.
    pub fn meal(&self) -> Duration {
        Duration::minutes(self.meal_mins)
    }

    /// Returns the last-morning activity limit as a Duration.
    pub fn last_morning_max(&self) -> Duration {
        Duration::minutes(self.last_morning_max_mins)
    }

    /// Returns the intra-city hop length as a Duration.
    pub fn hop(&self) -> Duration {
        Duration::minutes(self.hop_mins)
    }

    /// Pick the tier implied by a total budget.
    pub fn tier_for_budget(&self, total_budget: f64) -> BudgetTier {
        BudgetTier::from_total_budget(total_budget, self.mid_range_from, self.luxury_from)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_trip_days: 60,
            day_start_hour: 8,
            max_daily_mins: 600,       // 10 hours
            safety_threshold_mins: 120, // 2 hours
            long_transfer_mins: 180,
            detour_limit_mins: 240,
            morning_radius_km: 10.0,
            afternoon_radius_km: 5.0,
            meal_mins: 90,
            last_morning_max_mins: 180,
            airport_transfer_fee: 30.0,
            hop_mins: 30,
            default_hop_cost: 5.0,
            rental_threshold: 1000.0,
            default_public_rate: 5.0,
            lodging_ratio: 0.70,
            trim_floor: 50.0,
            mid_range_from: 800.0,
            luxury_from: 2000.0,
        }
    }
}
