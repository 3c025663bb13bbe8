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

//! # Parking Allocation Model (`park-alloc-model`)
//!
//! Data model for the parking allocation problem: a request consisting of
//! vehicle groups (a vehicle length and a quantity each) is to be parked in
//! a catalog of rentable listings (fixed dimensions, price, location) at the
//! lowest possible total price per location.
//!
//! The crate builds on the typed primitives of `park-alloc-core` and offers:
//!
//! - **`Listing`** and **`VehicleGroup`**: the two validated input record
//!   types, together with the orientation geometry that decides whether a
//!   sub-group of vehicles fits a listing (`vehicle::required_footprint`,
//!   `Listing::fits_group`).
//! - **`Problem`** / **`ProblemBuilder`**: a validated instance (unique
//!   listing ids, positive group quantities) with summary statistics.
//! - **`LocationAssignment`** / **`RankedSolutions`**: the solver's output,
//!   per-location totals ranked by ascending price.
//! - **`InstanceGenerator`**: seeded synthetic instances for benchmarks and
//!   the demo binary.
//!
//! The model performs no I/O and carries no solver state; solving lives in
//! `park-alloc-solver`.

pub mod err;
pub mod generator;
pub mod id;
pub mod listing;
pub mod problem;
pub mod sol;
pub mod vehicle;

pub mod prelude {
    pub use crate::err::{
        DuplicateListingIdError, NegativePriceError, ProblemBuildError, ZeroQuantityError,
    };
    pub use crate::generator::{InstanceGenConfig, InstanceGenConfigBuilder, InstanceGenerator};
    pub use crate::id::{ListingId, LocationId};
    pub use crate::listing::Listing;
    pub use crate::problem::{Problem, ProblemBuilder, ProblemStats};
    pub use crate::sol::{LocationAssignment, RankedSolutions};
    pub use crate::vehicle::{
        required_footprint, Orientation, VehicleGroup, VEHICLE_LANE_WIDTH,
    };
}
