// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The ranking aggregator: evaluates every location and orders the
//! feasible ones by ascending total price.
//!
//! Locations are independent: each gets its own pool derived from the
//! immutable catalog, so evaluation parallelizes with no shared mutable
//! state. Result collection preserves the catalog's first-occurrence order
//! of locations, which is what makes the final price sort's tie-breaking
//! deterministic.

use crate::{
    config::SolverConfig,
    location::{LocationOutcome, LocationSolver},
    stats::SolverStats,
};
use park_alloc_model::{
    id::LocationId,
    listing::Listing,
    problem::Problem,
    sol::{LocationAssignment, RankedSolutions},
};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Result of one full solve: the ranked feasible locations plus run
/// statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    solutions: RankedSolutions,
    stats: SolverStats,
}

impl SolveOutcome {
    #[inline]
    fn new(solutions: RankedSolutions, stats: SolverStats) -> Self {
        Self { solutions, stats }
    }

    #[inline]
    pub fn solutions(&self) -> &RankedSolutions {
        &self.solutions
    }

    #[inline]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    #[inline]
    pub fn into_solutions(self) -> RankedSolutions {
        self.solutions
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolverEngine {
    config: SolverConfig,
}

impl SolverEngine {
    #[inline]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves the whole problem: one location solver run per location,
    /// feasible results ranked by ascending total price (stable on ties).
    ///
    /// An empty request or an empty catalog yields an empty ranking; that
    /// is a valid answer, not an error.
    #[instrument(skip_all, fields(
        listings = problem.listings().len(),
        groups = problem.vehicle_groups().len()
    ))]
    pub fn solve(&self, problem: &Problem) -> SolveOutcome {
        let started = Instant::now();

        if problem.is_empty() {
            debug!("empty request or catalog; nothing to rank");
            let stats = SolverStats {
                total_time: started.elapsed(),
                ..SolverStats::default()
            };
            return SolveOutcome::new(RankedSolutions::empty(), stats);
        }

        let buckets = group_by_location(problem.listings());
        let solver = LocationSolver::new(self.config.budget);
        let groups = problem.vehicle_groups();

        let outcomes: Vec<LocationOutcome> = if self.config.parallel {
            buckets
                .into_par_iter()
                .map(|(location, listings)| solver.solve(location, groups, listings))
                .collect()
        } else {
            buckets
                .into_iter()
                .map(|(location, listings)| solver.solve(location, groups, listings))
                .collect()
        };

        let mut stats = SolverStats::default();
        let mut feasible: Vec<LocationAssignment> = Vec::new();
        for outcome in outcomes {
            stats.locations_evaluated += 1;
            let (assignment, search_stats) = outcome.into_parts();
            stats.search.merge(&search_stats);
            if let Some(assignment) = assignment {
                stats.locations_feasible += 1;
                feasible.push(assignment);
            }
        }

        let solutions = RankedSolutions::from_unsorted(feasible);
        stats.total_time = started.elapsed();
        info!(
            locations = stats.locations_evaluated,
            feasible = stats.locations_feasible,
            elapsed = ?stats.total_time,
            "solve finished"
        );
        SolveOutcome::new(solutions, stats)
    }
}

/// Solves with the default configuration and returns just the ranking.
#[inline]
pub fn solve(problem: &Problem) -> RankedSolutions {
    SolverEngine::new(SolverConfig::default())
        .solve(problem)
        .into_solutions()
}

/// Groups the catalog by location, preserving the first-occurrence order
/// of locations and the catalog order of listings within each.
fn group_by_location(listings: &[Listing]) -> Vec<(LocationId, Vec<Listing>)> {
    let mut index: HashMap<LocationId, usize> = HashMap::new();
    let mut order: Vec<LocationId> = Vec::new();
    let mut buckets: Vec<Vec<Listing>> = Vec::new();

    for listing in listings {
        let slot = *index.entry(listing.location().clone()).or_insert_with(|| {
            order.push(listing.location().clone());
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(listing.clone());
    }

    order.into_iter().zip(buckets).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchBudget;
    use park_alloc_core::{cost::Cost, space::SpaceLength};
    use park_alloc_model::{
        id::ListingId,
        problem::ProblemBuilder,
        vehicle::VehicleGroup,
    };

    fn listing(id: u64, loc: &str, w: usize, l: usize, price: i64) -> Listing {
        Listing::new(
            ListingId::new(id),
            LocationId::new(loc),
            SpaceLength::new(w),
            SpaceLength::new(l),
            Cost::new(price),
        )
        .expect("valid listing")
    }

    fn group(length: usize, quantity: usize) -> VehicleGroup {
        VehicleGroup::new(SpaceLength::new(length), quantity).expect("valid group")
    }

    fn sequential() -> SolverEngine {
        SolverEngine::new(SolverConfig {
            budget: SearchBudget::UNLIMITED,
            parallel: false,
        })
    }

    #[test]
    fn single_listing_single_vehicle_scenario() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 1))
            .listing(listing(1, "L1", 30, 20, 500))
            .build()
            .expect("valid problem");

        let ranked = solve(&problem);
        assert_eq!(ranked.len(), 1);
        let best = ranked.best().expect("one feasible location");
        assert_eq!(best.location().as_str(), "L1");
        assert_eq!(best.total_price(), Cost::new(500));
        assert_eq!(best.listing_ids(), &[ListingId::new(1)]);
    }

    #[test]
    fn ranks_cheaper_location_first() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 1))
            .listing(listing(1, "pricey", 30, 20, 600))
            .listing(listing(2, "cheap", 30, 20, 550))
            .build()
            .expect("valid problem");

        let ranked = solve(&problem);
        let order: Vec<&str> = ranked.iter().map(|a| a.location().as_str()).collect();
        assert_eq!(order, vec!["cheap", "pricey"]);
    }

    #[test]
    fn price_ties_keep_catalog_encounter_order() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 1))
            .listing(listing(1, "first", 30, 20, 500))
            .listing(listing(2, "second", 30, 20, 500))
            .build()
            .expect("valid problem");

        let ranked = solve(&problem);
        let order: Vec<&str> = ranked.iter().map(|a| a.location().as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn infeasible_locations_are_absent() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(40, 1))
            .listing(listing(1, "small", 10, 10, 100))
            .listing(listing(2, "big", 80, 80, 900))
            .build()
            .expect("valid problem");

        let ranked = solve(&problem);
        assert_eq!(ranked.len(), 1);
        assert_eq!(
            ranked.best().map(|a| a.location().as_str()),
            Some("big")
        );
    }

    #[test]
    fn all_locations_infeasible_yields_empty_ranking() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(40, 1))
            .listing(listing(1, "a", 10, 10, 100))
            .listing(listing(2, "b", 10, 10, 100))
            .build()
            .expect("valid problem");
        assert!(solve(&problem).is_empty());
    }

    #[test]
    fn empty_inputs_yield_empty_ranking() {
        let no_listings = ProblemBuilder::new()
            .vehicle_group(group(10, 1))
            .build()
            .expect("valid problem");
        assert!(solve(&no_listings).is_empty());

        let no_groups = ProblemBuilder::new()
            .listing(listing(1, "a", 30, 20, 100))
            .build()
            .expect("valid problem");
        assert!(solve(&no_groups).is_empty());
    }

    #[test]
    fn listings_are_consumed_location_locally() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 2))
            .listing(listing(1, "a", 10, 10, 100))
            .listing(listing(2, "a", 10, 10, 100))
            .listing(listing(3, "b", 10, 10, 100))
            .listing(listing(4, "b", 10, 10, 100))
            .build()
            .expect("valid problem");

        let ranked = solve(&problem);
        assert_eq!(ranked.len(), 2);
        for assignment in &ranked {
            let expected: &[ListingId] = if assignment.location().as_str() == "a" {
                &[ListingId::new(1), ListingId::new(2)]
            } else {
                &[ListingId::new(3), ListingId::new(4)]
            };
            assert_eq!(assignment.listing_ids(), expected);
        }
    }

    #[test]
    fn repeated_solves_are_identical() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 2))
            .vehicle_group(group(15, 1))
            .listing(listing(1, "a", 30, 20, 500))
            .listing(listing(2, "a", 20, 20, 300))
            .listing(listing(3, "b", 40, 40, 600))
            .build()
            .expect("valid problem");

        let first = solve(&problem);
        let second = solve(&problem);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 2))
            .vehicle_group(group(12, 1))
            .listing(listing(1, "a", 30, 30, 500))
            .listing(listing(2, "a", 20, 20, 300))
            .listing(listing(3, "b", 40, 40, 600))
            .listing(listing(4, "c", 12, 12, 50))
            .build()
            .expect("valid problem");

        let parallel = SolverEngine::new(SolverConfig::default())
            .solve(&problem)
            .into_solutions();
        let seq = sequential().solve(&problem).into_solutions();
        assert_eq!(parallel, seq);
    }

    #[test]
    fn stats_count_locations() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 1))
            .listing(listing(1, "a", 30, 20, 100))
            .listing(listing(2, "b", 5, 5, 100))
            .build()
            .expect("valid problem");

        let outcome = sequential().solve(&problem);
        assert_eq!(outcome.stats().locations_evaluated, 2);
        assert_eq!(outcome.stats().locations_feasible, 1);
        assert_eq!(outcome.solutions().len(), 1);
    }

    #[test]
    fn grouping_preserves_first_occurrence_order() {
        let listings = vec![
            listing(1, "x", 10, 10, 100),
            listing(2, "y", 10, 10, 100),
            listing(3, "x", 10, 10, 100),
        ];
        let buckets = group_by_location(&listings);
        let order: Vec<&str> = buckets.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(order, vec!["x", "y"]);
        assert_eq!(buckets[0].1.len(), 2);
        assert_eq!(buckets[1].1.len(), 1);
    }
}
