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
    err::NegativePriceError,
    id::{ListingId, LocationId},
    vehicle::{required_footprint, Orientation},
};
use park_alloc_core::{
    cost::Cost,
    space::{Footprint, SpaceLength},
};
use std::fmt::Display;

/// A rentable parking space: fixed dimensions, price, and location.
///
/// Immutable once constructed. The price is in the smallest currency unit
/// and must be non-negative; dimensions are non-negative by type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Listing {
    id: ListingId,
    location: LocationId,
    width: SpaceLength,
    length: SpaceLength,
    price: Cost<i64>,
}

impl Listing {
    pub fn new(
        id: ListingId,
        location: LocationId,
        width: SpaceLength,
        length: SpaceLength,
        price: Cost<i64>,
    ) -> Result<Self, NegativePriceError> {
        if price.is_negative() {
            return Err(NegativePriceError::new(id, price));
        }
        Ok(Self {
            id,
            location,
            width,
            length,
            price,
        })
    }

    #[inline]
    pub fn id(&self) -> ListingId {
        self.id
    }

    #[inline]
    pub fn location(&self) -> &LocationId {
        &self.location
    }

    #[inline]
    pub fn width(&self) -> SpaceLength {
        self.width
    }

    #[inline]
    pub fn length(&self) -> SpaceLength {
        self.length
    }

    #[inline]
    pub fn price(&self) -> Cost<i64> {
        self.price
    }

    #[inline]
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.width, self.length)
    }

    /// True iff this listing accommodates `group_size` vehicles of
    /// `vehicle_length` in at least one of the two orientations.
    #[inline]
    pub fn fits_group(&self, vehicle_length: SpaceLength, group_size: usize) -> bool {
        let own = self.footprint();
        Orientation::ALL
            .iter()
            .any(|&o| own.contains(required_footprint(vehicle_length, group_size, o)))
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Listing({} @ {}, {} x {}, {})",
            self.id,
            self.location,
            self.width.value(),
            self.length.value(),
            self.price
        )
    }
}
