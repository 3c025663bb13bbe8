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

//! Per-location evaluation of the full vehicle request.
//!
//! Vehicle groups are processed in descending (quantity × length) order:
//! the largest space demand is hardest to place, so trying it first fails
//! infeasible locations fast and leaves the easier groups for the shrunken
//! pool. Groups are solved sequentially against that shrinking pool with no
//! backtracking across groups; an earlier group keeps its listings even if
//! a later group could have used them, so a location can be reported
//! infeasible although a joint assignment exists.

use crate::{
    config::SearchBudget,
    pool::ListingPool,
    search::GroupSearch,
    stats::GroupSearchStats,
};
use park_alloc_core::cost::Cost;
use park_alloc_model::{
    id::{ListingId, LocationId},
    listing::Listing,
    sol::LocationAssignment,
    vehicle::VehicleGroup,
};
use tracing::debug;

/// Result of evaluating one location: the assignment if every vehicle
/// group could be placed, plus the merged search counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOutcome {
    assignment: Option<LocationAssignment>,
    stats: GroupSearchStats,
}

impl LocationOutcome {
    #[inline]
    fn new(assignment: Option<LocationAssignment>, stats: GroupSearchStats) -> Self {
        Self { assignment, stats }
    }

    #[inline]
    pub fn assignment(&self) -> Option<&LocationAssignment> {
        self.assignment.as_ref()
    }

    #[inline]
    pub fn stats(&self) -> &GroupSearchStats {
        &self.stats
    }

    #[inline]
    pub fn into_parts(self) -> (Option<LocationAssignment>, GroupSearchStats) {
        (self.assignment, self.stats)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationSolver {
    search: GroupSearch,
}

impl LocationSolver {
    #[inline]
    pub fn new(budget: SearchBudget) -> Self {
        Self {
            search: GroupSearch::new(budget),
        }
    }

    /// Evaluates one location against the full request.
    ///
    /// Listings consumed by one group's arrangement are committed before
    /// the next group is searched, so they are gone for good at this
    /// location. Any group without an arrangement makes the whole location
    /// infeasible.
    pub fn solve(
        &self,
        location: LocationId,
        vehicle_groups: &[VehicleGroup],
        listings: Vec<Listing>,
    ) -> LocationOutcome {
        let mut pool = ListingPool::new(listings);
        let mut stats = GroupSearchStats::default();

        let mut ordered: Vec<&VehicleGroup> = vehicle_groups.iter().collect();
        ordered.sort_by(|a, b| b.demand().cmp(&a.demand()));

        let mut total = Cost::zero();
        let mut consumed: Vec<ListingId> = Vec::new();

        for group in ordered {
            let outcome = self.search.run(
                group.vehicle_length(),
                group.quantity(),
                &mut pool,
                Cost::max_value(),
            );
            let (arrangement, search_stats) = outcome.into_parts();
            stats.merge(&search_stats);

            match arrangement {
                Some(arrangement) => {
                    total += arrangement.total_price();
                    for &id in arrangement.listing_ids() {
                        pool.commit(id);
                        consumed.push(id);
                    }
                }
                None => {
                    debug!(%location, group = %group, "location infeasible");
                    return LocationOutcome::new(None, stats);
                }
            }
        }

        debug!(%location, total = %total, listings = consumed.len(), "location feasible");
        LocationOutcome::new(
            Some(LocationAssignment::new(location, total, consumed)),
            stats,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::space::SpaceLength;

    fn listing(id: u64, w: usize, l: usize, price: i64) -> Listing {
        Listing::new(
            ListingId::new(id),
            LocationId::new("L1"),
            SpaceLength::new(w),
            SpaceLength::new(l),
            Cost::new(price),
        )
        .expect("valid listing")
    }

    fn group(length: usize, quantity: usize) -> VehicleGroup {
        VehicleGroup::new(SpaceLength::new(length), quantity).expect("valid group")
    }

    fn solver() -> LocationSolver {
        LocationSolver::new(SearchBudget::UNLIMITED)
    }

    #[test]
    fn sums_arrangements_across_vehicle_groups() {
        let outcome = solver().solve(
            LocationId::new("L1"),
            &[group(10, 1), group(10, 1)],
            vec![listing(1, 10, 10, 100), listing(2, 10, 10, 200)],
        );
        let assignment = outcome.assignment().expect("feasible");
        assert_eq!(assignment.total_price(), Cost::new(300));
        assert_eq!(assignment.listing_ids().len(), 2);
    }

    #[test]
    fn consumed_listings_are_gone_for_later_groups() {
        // A single listing can hold either group alone, but not both.
        let outcome = solver().solve(
            LocationId::new("L1"),
            &[group(10, 1), group(10, 1)],
            vec![listing(1, 10, 10, 100)],
        );
        assert!(outcome.assignment().is_none());
    }

    #[test]
    fn largest_demand_is_placed_first() {
        // The long vehicle fits only the big listing. Were the short
        // vehicle placed first it would grab the big listing (it is
        // cheapest) and doom the location; demand ordering prevents that.
        let outcome = solver().solve(
            LocationId::new("L1"),
            &[group(5, 1), group(20, 1)],
            vec![listing(1, 20, 20, 50), listing(2, 10, 10, 100)],
        );
        let assignment = outcome.assignment().expect("feasible");
        assert_eq!(assignment.total_price(), Cost::new(150));
        // The big listing went to the long vehicle, processed first.
        assert_eq!(
            assignment.listing_ids(),
            &[ListingId::new(1), ListingId::new(2)]
        );
    }

    #[test]
    fn equal_demands_keep_request_order() {
        let outcome = solver().solve(
            LocationId::new("L1"),
            &[group(10, 1), group(10, 1)],
            vec![listing(1, 10, 10, 100), listing(2, 10, 10, 200)],
        );
        let assignment = outcome.assignment().expect("feasible");
        // First group in request order gets the cheaper listing.
        assert_eq!(
            assignment.listing_ids(),
            &[ListingId::new(1), ListingId::new(2)]
        );
    }

    #[test]
    fn empty_request_is_trivially_feasible_at_zero_cost() {
        let outcome = solver().solve(
            LocationId::new("L1"),
            &[],
            vec![listing(1, 10, 10, 100)],
        );
        let assignment = outcome.assignment().expect("nothing to place");
        assert_eq!(assignment.total_price(), Cost::zero());
        assert!(assignment.listing_ids().is_empty());
    }
}
