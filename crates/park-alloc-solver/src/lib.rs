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

//! # Parking Allocation Solver (`park-alloc-solver`)
//!
//! The combinatorial search engine behind the parking allocation problem.
//! For each location, every vehicle group's quantity is split into
//! sub-groups (all partitions, all distinct orderings), each sub-group is
//! matched greedily to the cheapest geometrically compatible listing still
//! available, and a price-to-beat bound prunes orderings that can no longer
//! improve on the incumbent. Feasible per-location totals are ranked by
//! ascending price.
//!
//! Entry points:
//!
//! - [`solve`]: default-configured one-shot solve.
//! - [`SolverEngine`]: configured solves ([`SolverConfig`]: search budget,
//!   parallelism) with statistics ([`SolveOutcome`]).
//!
//! The engine is a pure function of its inputs: no I/O, no state between
//! invocations, and a per-location pool discipline that keeps search
//! branches from observing each other's mutations.

pub mod config;
pub mod engine;
pub mod location;
pub mod partition;
pub mod pool;
pub mod search;
pub mod stats;

pub use config::{SearchBudget, SolverConfig};
pub use engine::{solve, SolveOutcome, SolverEngine};
pub use stats::{GroupSearchStats, SolverStats};
