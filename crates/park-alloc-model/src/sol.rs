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

use crate::id::{ListingId, LocationId};
use park_alloc_core::cost::Cost;
use std::fmt::Display;

/// The cheapest feasible way to satisfy the entire request at one location:
/// the total price and the listings consumed, in consumption order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationAssignment {
    location: LocationId,
    total_price: Cost<i64>,
    listings: Vec<ListingId>,
}

impl LocationAssignment {
    #[inline]
    pub fn new(location: LocationId, total_price: Cost<i64>, listings: Vec<ListingId>) -> Self {
        Self {
            location,
            total_price,
            listings,
        }
    }

    #[inline]
    pub fn location(&self) -> &LocationId {
        &self.location
    }

    #[inline]
    pub fn total_price(&self) -> Cost<i64> {
        self.total_price
    }

    #[inline]
    pub fn listing_ids(&self) -> &[ListingId] {
        &self.listings
    }
}

impl Display for LocationAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LocationAssignment({}, {}, {} listings)",
            self.location,
            self.total_price,
            self.listings.len()
        )
    }
}

/// Feasible locations ordered by ascending total price.
///
/// The sort is stable: locations with equal totals keep the order in which
/// they were encountered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedSolutions {
    entries: Vec<LocationAssignment>,
}

impl RankedSolutions {
    /// Ranks a batch of per-location results by ascending total price.
    pub fn from_unsorted(mut entries: Vec<LocationAssignment>) -> Self {
        entries.sort_by_key(LocationAssignment::total_price);
        Self { entries }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The globally cheapest feasible location, if any exists.
    #[inline]
    pub fn best(&self) -> Option<&LocationAssignment> {
        self.entries.first()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &LocationAssignment> {
        self.entries.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[LocationAssignment] {
        &self.entries
    }

    #[inline]
    pub fn into_vec(self) -> Vec<LocationAssignment> {
        self.entries
    }
}

impl IntoIterator for RankedSolutions {
    type Item = LocationAssignment;
    type IntoIter = std::vec::IntoIter<LocationAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedSolutions {
    type Item = &'a LocationAssignment;
    type IntoIter = std::slice::Iter<'a, LocationAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Display for RankedSolutions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RankedSolutions ({} feasible):", self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "  {}", entry)?;
        }
        Ok(())
    }
}
