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

use crate::{
    err::{DuplicateListingIdError, ProblemBuildError},
    listing::Listing,
    vehicle::VehicleGroup,
};
use std::{collections::HashSet, fmt::Display};

/// Summary figures of a problem instance, computed once at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemStats {
    listing_count: usize,
    location_count: usize,
    vehicle_count: usize,
    max_group_quantity: usize,
}

impl ProblemStats {
    #[inline]
    pub fn listing_count(&self) -> usize {
        self.listing_count
    }

    #[inline]
    pub fn location_count(&self) -> usize {
        self.location_count
    }

    /// Total number of vehicles across all groups.
    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Largest single group quantity; the search-space driver.
    #[inline]
    pub fn max_group_quantity(&self) -> usize {
        self.max_group_quantity
    }
}

impl Display for ProblemStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Problem statistics:")?;
        writeln!(f, "  Listings: {}", self.listing_count)?;
        writeln!(f, "  Locations: {}", self.location_count)?;
        writeln!(f, "  Vehicles: {}", self.vehicle_count)?;
        write!(f, "  Max group quantity: {}", self.max_group_quantity)
    }
}

/// A validated parking allocation instance: the vehicle request plus the
/// listing catalog snapshot. Immutable; the solver never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    vehicle_groups: Vec<VehicleGroup>,
    listings: Vec<Listing>,
    stats: ProblemStats,
}

impl Problem {
    #[inline]
    pub fn vehicle_groups(&self) -> &[VehicleGroup] {
        &self.vehicle_groups
    }

    #[inline]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    #[inline]
    pub fn stats(&self) -> &ProblemStats {
        &self.stats
    }

    /// True iff there is nothing to solve: no vehicles or no listings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicle_groups.is_empty() || self.listings.is_empty()
    }
}

/// Builder validating an instance before handing it to the solver.
///
/// Listings keep their catalog order; the request is an unordered
/// collection and the solver chooses its own processing order.
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    vehicle_groups: Vec<VehicleGroup>,
    listings: Vec<Listing>,
}

impl ProblemBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vehicle_group(mut self, group: VehicleGroup) -> Self {
        self.vehicle_groups.push(group);
        self
    }

    #[inline]
    pub fn vehicle_groups(mut self, groups: impl IntoIterator<Item = VehicleGroup>) -> Self {
        self.vehicle_groups.extend(groups);
        self
    }

    #[inline]
    pub fn listing(mut self, listing: Listing) -> Self {
        self.listings.push(listing);
        self
    }

    #[inline]
    pub fn listings(mut self, listings: impl IntoIterator<Item = Listing>) -> Self {
        self.listings.extend(listings);
        self
    }

    pub fn build(self) -> Result<Problem, ProblemBuildError> {
        let mut seen = HashSet::with_capacity(self.listings.len());
        for listing in &self.listings {
            if !seen.insert(listing.id()) {
                return Err(DuplicateListingIdError::new(listing.id()).into());
            }
        }

        let mut locations = HashSet::new();
        for listing in &self.listings {
            locations.insert(listing.location().clone());
        }

        let stats = ProblemStats {
            listing_count: self.listings.len(),
            location_count: locations.len(),
            vehicle_count: self.vehicle_groups.iter().map(VehicleGroup::quantity).sum(),
            max_group_quantity: self
                .vehicle_groups
                .iter()
                .map(VehicleGroup::quantity)
                .max()
                .unwrap_or(0),
        };

        Ok(Problem {
            vehicle_groups: self.vehicle_groups,
            listings: self.listings,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{ListingId, LocationId};
    use park_alloc_core::{cost::Cost, space::SpaceLength};

    fn listing(id: u64, loc: &str, price: i64) -> Listing {
        Listing::new(
            ListingId::new(id),
            LocationId::new(loc),
            SpaceLength::new(30),
            SpaceLength::new(20),
            Cost::new(price),
        )
        .expect("valid listing")
    }

    fn group(length: usize, quantity: usize) -> VehicleGroup {
        VehicleGroup::new(SpaceLength::new(length), quantity).expect("valid group")
    }

    #[test]
    fn build_collects_stats() {
        let problem = ProblemBuilder::new()
            .vehicle_group(group(10, 2))
            .vehicle_group(group(15, 3))
            .listing(listing(1, "a", 100))
            .listing(listing(2, "a", 200))
            .listing(listing(3, "b", 300))
            .build()
            .expect("valid problem");

        let stats = problem.stats();
        assert_eq!(stats.listing_count(), 3);
        assert_eq!(stats.location_count(), 2);
        assert_eq!(stats.vehicle_count(), 5);
        assert_eq!(stats.max_group_quantity(), 3);
        assert!(!problem.is_empty());
    }

    #[test]
    fn build_rejects_duplicate_listing_ids() {
        let err = ProblemBuilder::new()
            .listing(listing(1, "a", 100))
            .listing(listing(1, "b", 200))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ProblemBuildError::DuplicateListingId(DuplicateListingIdError::new(ListingId::new(1)))
        );
    }

    #[test]
    fn empty_inputs_build_but_are_flagged_empty() {
        let no_groups = ProblemBuilder::new()
            .listing(listing(1, "a", 100))
            .build()
            .expect("valid problem");
        assert!(no_groups.is_empty());

        let no_listings = ProblemBuilder::new()
            .vehicle_group(group(10, 1))
            .build()
            .expect("valid problem");
        assert!(no_listings.is_empty());
        assert_eq!(no_listings.stats().max_group_quantity(), 1);
    }

    #[test]
    fn listings_keep_catalog_order() {
        let problem = ProblemBuilder::new()
            .listing(listing(5, "a", 300))
            .listing(listing(2, "a", 100))
            .listing(listing(9, "b", 200))
            .build()
            .expect("valid problem");
        let ids: Vec<u64> = problem.listings().iter().map(|l| l.id().value()).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}
