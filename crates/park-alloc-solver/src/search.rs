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

//! Branch-and-bound search for one vehicle group at one location.
//!
//! The search explores every way to split the group's quantity into
//! sub-groups (partition count, partition, distinct ordering), assigns each
//! sub-group the cheapest compatible listing remaining in the pool, and
//! keeps the cheapest completed ordering as the incumbent. An ordering is
//! abandoned the moment its running price reaches the incumbent, so the
//! incumbent price is monotonically non-increasing over the run. Bounding
//! is price-only; every ordering not pruned by price is evaluated.

use crate::{
    config::SearchBudget,
    partition::{DistinctOrderings, Partitions},
    pool::ListingPool,
    stats::GroupSearchStats,
};
use park_alloc_core::{cost::Cost, space::SpaceLength};
use park_alloc_model::id::ListingId;
use std::fmt::Display;
use std::time::Instant;
use tracing::trace;

/// The cheapest found assignment of one vehicle group to listings: the
/// sub-group split (in assignment order), the listing chosen for each
/// sub-group, and the total price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    split: Vec<usize>,
    listings: Vec<ListingId>,
    total_price: Cost<i64>,
}

impl Arrangement {
    #[inline]
    fn new(split: Vec<usize>, listings: Vec<ListingId>, total_price: Cost<i64>) -> Self {
        Self {
            split,
            listings,
            total_price,
        }
    }

    #[inline]
    pub fn split(&self) -> &[usize] {
        &self.split
    }

    #[inline]
    pub fn listing_ids(&self) -> &[ListingId] {
        &self.listings
    }

    #[inline]
    pub fn total_price(&self) -> Cost<i64> {
        self.total_price
    }
}

impl Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arrangement(split: {:?}, total: {})",
            self.split, self.total_price
        )
    }
}

/// Result of one group search: the best arrangement (if any ordering was
/// feasible below the price to beat) plus the run's counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSearchOutcome {
    arrangement: Option<Arrangement>,
    stats: GroupSearchStats,
}

impl GroupSearchOutcome {
    #[inline]
    fn new(arrangement: Option<Arrangement>, stats: GroupSearchStats) -> Self {
        Self { arrangement, stats }
    }

    #[inline]
    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    #[inline]
    pub fn stats(&self) -> &GroupSearchStats {
        &self.stats
    }

    #[inline]
    pub fn into_parts(self) -> (Option<Arrangement>, GroupSearchStats) {
        (self.arrangement, self.stats)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GroupSearch {
    budget: SearchBudget,
}

impl GroupSearch {
    #[inline]
    pub fn new(budget: SearchBudget) -> Self {
        Self { budget }
    }

    /// Finds the cheapest arrangement for `quantity` vehicles of
    /// `vehicle_length` against the pool's currently available listings.
    ///
    /// Listings taken while probing an ordering are rolled back before the
    /// next ordering begins, and the pool is left exactly as it was found.
    /// Only arrangements strictly cheaper than `price_to_beat` are
    /// reported; pass `Cost::max_value()` to accept any feasible one. If
    /// the budget runs out mid-search, the best arrangement found so far is
    /// returned and the statistics are flagged.
    pub fn run(
        &self,
        vehicle_length: SpaceLength,
        quantity: usize,
        pool: &mut ListingPool,
        price_to_beat: Cost<i64>,
    ) -> GroupSearchOutcome {
        let started = Instant::now();
        let mut stats = GroupSearchStats::default();
        let mut best_price = price_to_beat;
        let mut best: Option<Arrangement> = None;

        'search: for num_parts in 1..=quantity {
            for partition in Partitions::new(quantity, num_parts) {
                for ordering in DistinctOrderings::new(partition) {
                    if self.budget.is_exhausted(stats.orderings_explored, started) {
                        stats.budget_exhausted = true;
                        break 'search;
                    }
                    stats.orderings_explored += 1;

                    let mark = pool.mark();
                    let mut running = Cost::zero();
                    let mut used: Vec<ListingId> = Vec::with_capacity(ordering.len());
                    let mut feasible = true;

                    for &group_size in &ordering {
                        if running >= best_price {
                            stats.prunings_bound += 1;
                            feasible = false;
                            break;
                        }
                        match pool.find_cheapest(vehicle_length, group_size) {
                            Some(slot) => {
                                let listing = pool.listing(slot);
                                running += listing.price();
                                used.push(listing.id());
                                pool.take(slot);
                            }
                            None => {
                                stats.infeasible_orderings += 1;
                                feasible = false;
                                break;
                            }
                        }
                    }

                    pool.rollback_to(mark);

                    if feasible && running < best_price {
                        best_price = running;
                        stats.improvements += 1;
                        trace!(price = %running, split = ?ordering, "new incumbent arrangement");
                        best = Some(Arrangement::new(ordering, used, running));
                    }
                }
            }
        }

        GroupSearchOutcome::new(best, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_model::{
        id::{ListingId, LocationId},
        listing::Listing,
    };
    use std::time::Duration;

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

    #[inline]
    fn len(v: usize) -> SpaceLength {
        SpaceLength::new(v)
    }

    fn unlimited() -> GroupSearch {
        GroupSearch::new(SearchBudget::UNLIMITED)
    }

    #[test]
    fn single_vehicle_takes_the_cheapest_compatible_listing() {
        let mut pool = ListingPool::new(vec![listing(1, 30, 20, 500)]);
        let outcome = unlimited().run(len(10), 1, &mut pool, Cost::max_value());

        let arrangement = outcome.arrangement().expect("feasible");
        assert_eq!(arrangement.total_price(), Cost::new(500));
        assert_eq!(arrangement.split(), &[1]);
        assert_eq!(arrangement.listing_ids(), &[ListingId::new(1)]);
    }

    #[test]
    fn splits_a_group_across_listings_when_no_single_listing_fits() {
        // Each 10x10 listing fits exactly one vehicle of length 10; the
        // only feasible arrangement is two sub-groups of one.
        let mut pool = ListingPool::new(vec![
            listing(1, 10, 10, 300),
            listing(2, 10, 10, 300),
        ]);
        let outcome = unlimited().run(len(10), 2, &mut pool, Cost::max_value());

        let arrangement = outcome.arrangement().expect("feasible via split");
        assert_eq!(arrangement.split(), &[1, 1]);
        assert_eq!(arrangement.total_price(), Cost::new(600));
        assert_eq!(
            arrangement.listing_ids(),
            &[ListingId::new(1), ListingId::new(2)]
        );
    }

    #[test]
    fn prefers_a_cheaper_joint_listing_over_a_split() {
        // Two vehicles of length 10 fit the 20x20 listing together
        // (end-to-end needs 20x20); that beats two singles at 300 each.
        let mut pool = ListingPool::new(vec![
            listing(1, 10, 10, 300),
            listing(2, 10, 10, 300),
            listing(3, 20, 20, 500),
        ]);
        let outcome = unlimited().run(len(10), 2, &mut pool, Cost::max_value());

        let arrangement = outcome.arrangement().expect("feasible");
        assert_eq!(arrangement.total_price(), Cost::new(500));
        assert_eq!(arrangement.split(), &[2]);
        assert_eq!(arrangement.listing_ids(), &[ListingId::new(3)]);
    }

    #[test]
    fn infeasible_when_nothing_fits() {
        let mut pool = ListingPool::new(vec![listing(1, 10, 10, 100)]);
        let outcome = unlimited().run(len(50), 1, &mut pool, Cost::max_value());
        assert!(outcome.arrangement().is_none());
        assert!(outcome.stats().infeasible_orderings > 0);
    }

    #[test]
    fn respects_the_price_to_beat() {
        // The only feasible arrangement costs 600; a 500 bound rejects it.
        let mut pool = ListingPool::new(vec![
            listing(1, 10, 10, 300),
            listing(2, 10, 10, 300),
        ]);
        let outcome = unlimited().run(len(10), 2, &mut pool, Cost::new(500));
        assert!(outcome.arrangement().is_none());
    }

    #[test]
    fn leaves_the_pool_as_it_found_it() {
        let mut pool = ListingPool::new(vec![
            listing(1, 10, 10, 300),
            listing(2, 10, 10, 300),
            listing(3, 20, 20, 500),
        ]);
        let before = pool.available_count();
        let _ = unlimited().run(len(10), 2, &mut pool, Cost::max_value());
        assert_eq!(pool.available_count(), before);
    }

    #[test]
    fn incumbent_price_never_increases() {
        // With several feasible arrangements, each improvement must lower
        // the total. The final arrangement is the overall minimum.
        let mut pool = ListingPool::new(vec![
            listing(1, 10, 10, 400),
            listing(2, 10, 10, 350),
            listing(3, 20, 20, 200),
        ]);
        let outcome = unlimited().run(len(10), 2, &mut pool, Cost::max_value());
        let arrangement = outcome.arrangement().expect("feasible");
        assert_eq!(arrangement.total_price(), Cost::new(200));
        assert_eq!(arrangement.split(), &[2]);
    }

    #[test]
    fn ordering_budget_stops_early_but_keeps_the_incumbent() {
        let mut pool = ListingPool::new(vec![
            listing(1, 10, 10, 300),
            listing(2, 10, 10, 300),
            listing(3, 20, 20, 500),
        ]);
        // One ordering is enough to find the single-listing arrangement.
        let search = GroupSearch::new(SearchBudget {
            max_orderings: Some(1),
            max_time: None,
        });
        let outcome = search.run(len(10), 2, &mut pool, Cost::max_value());
        assert!(outcome.stats().budget_exhausted);
        assert_eq!(outcome.stats().orderings_explored, 1);
        let arrangement = outcome.arrangement().expect("first ordering is feasible");
        assert_eq!(arrangement.total_price(), Cost::new(500));
    }

    #[test]
    fn expired_deadline_reports_exhaustion() {
        let mut pool = ListingPool::new(vec![listing(1, 30, 30, 100)]);
        let search = GroupSearch::new(SearchBudget {
            max_orderings: None,
            max_time: Some(Duration::ZERO),
        });
        let outcome = search.run(len(10), 1, &mut pool, Cost::max_value());
        assert!(outcome.stats().budget_exhausted);
        assert!(outcome.arrangement().is_none());
    }

    #[test]
    fn zero_quantity_finds_nothing() {
        let mut pool = ListingPool::new(vec![listing(1, 30, 30, 100)]);
        let outcome = unlimited().run(len(10), 0, &mut pool, Cost::max_value());
        assert!(outcome.arrangement().is_none());
        assert_eq!(outcome.stats().orderings_explored, 0);
    }
}
