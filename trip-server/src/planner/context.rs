//! Per-request planning state.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Mutable state shared by every day of one planning run.
///
/// A context is created for each request and passed by `&mut` into the day
/// scheduler, so separate requests never share it.
#[derive(Debug)]
pub struct TripContext {
    visited: HashSet<String>,
    budget: f64,
    spent: f64,
    rng: ChaCha8Rng,
}

impl TripContext {
    /// Create a context with `budget` to spend on everything but lodging.
    pub fn new(seed: u64, budget: f64) -> Self {
        Self {
            visited: HashSet::new(),
            budget,
            spent: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn is_visited(&self, activity: &str) -> bool {
        self.visited.contains(activity)
    }

    pub fn mark_visited(&mut self, activity: &str) {
        self.visited.insert(activity.to_string());
    }

    pub fn record_spend(&mut self, cost: f64) {
        self.spent += cost;
    }

    pub fn spent(&self) -> f64 {
        self.spent
    }

    /// Budget left for the rest of the trip, never negative.
    pub fn remaining(&self) -> f64 {
        (self.budget - self.spent).max(0.0)
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn tracks_visits_and_spend() {
        let mut ctx = TripContext::new(1, 100.0);
        assert!(!ctx.is_visited("Basilica"));
        ctx.mark_visited("Basilica");
        assert!(ctx.is_visited("Basilica"));

        ctx.record_spend(30.0);
        assert_eq!(ctx.spent(), 30.0);
        assert_eq!(ctx.remaining(), 70.0);

        ctx.record_spend(100.0);
        assert_eq!(ctx.remaining(), 0.0);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = TripContext::new(42, 0.0);
        let mut b = TripContext::new(42, 0.0);
        let xs: Vec<usize> = (0..8).map(|_| a.rng().gen_range(0..100)).collect();
        let ys: Vec<usize> = (0..8).map(|_| b.rng().gen_range(0..100)).collect();
        assert_eq!(xs, ys);
    }
}
