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

use crate::id::ListingId;
use park_alloc_core::{cost::Cost, space::SpaceLength};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativePriceError {
    id: ListingId,
    price: Cost<i64>,
}

impl NegativePriceError {
    #[inline]
    pub fn new(id: ListingId, price: Cost<i64>) -> Self {
        Self { id, price }
    }

    #[inline]
    pub fn id(&self) -> ListingId {
        self.id
    }

    #[inline]
    pub fn price(&self) -> Cost<i64> {
        self.price
    }
}

impl Display for NegativePriceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Listing {} has negative price {}",
            self.id, self.price
        )
    }
}

impl std::error::Error for NegativePriceError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroQuantityError {
    vehicle_length: SpaceLength,
}

impl ZeroQuantityError {
    #[inline]
    pub fn new(vehicle_length: SpaceLength) -> Self {
        Self { vehicle_length }
    }

    #[inline]
    pub fn vehicle_length(&self) -> SpaceLength {
        self.vehicle_length
    }
}

impl Display for ZeroQuantityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vehicle group with length {} has zero quantity",
            self.vehicle_length
        )
    }
}

impl std::error::Error for ZeroQuantityError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateListingIdError {
    id: ListingId,
}

impl DuplicateListingIdError {
    #[inline]
    pub fn new(id: ListingId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> ListingId {
        self.id
    }
}

impl Display for DuplicateListingIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duplicate listing ID: {}", self.id)
    }
}

impl std::error::Error for DuplicateListingIdError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemBuildError {
    DuplicateListingId(DuplicateListingIdError),
}

impl Display for ProblemBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemBuildError::DuplicateListingId(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ProblemBuildError {}

impl From<DuplicateListingIdError> for ProblemBuildError {
    fn from(value: DuplicateListingIdError) -> Self {
        ProblemBuildError::DuplicateListingId(value)
    }
}
