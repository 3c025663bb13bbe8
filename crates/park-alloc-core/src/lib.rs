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

//! # Parking Allocation Core (`park-alloc-core`)
//!
//! Foundational, type-safe primitives shared by the parking allocation
//! model and solver crates: monetary amounts (`Cost`), physical extents
//! (`SpaceLength`), and rectangular footprints (`Footprint`).
//!
//! Wrapping raw integers in dedicated newtypes keeps prices, widths, and
//! lengths from being mixed up at call sites and concentrates the overflow
//! discipline (checked versus saturating arithmetic) in one place.

use num_traits::{PrimInt, Signed, Zero};
use std::fmt::{Debug, Display};

pub mod cost;
pub mod space;

/// Numeric bound for the solver's cost primitive.
///
/// Any signed primitive integer qualifies; `i64` is the default choice
/// throughout the workspace.
pub trait SolverVariable: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
impl<T> SolverVariable for T where T: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
