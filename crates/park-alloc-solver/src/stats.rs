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

use std::fmt::Display;
use std::time::Duration;

/// Counters for one or more group searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupSearchStats {
    /// Orderings whose evaluation began.
    pub orderings_explored: u64,
    /// Orderings abandoned because the running price reached the incumbent.
    pub prunings_bound: u64,
    /// Orderings abandoned because a sub-group found no compatible listing.
    pub infeasible_orderings: u64,
    /// Times a completed ordering improved on the incumbent.
    pub improvements: u64,
    /// Whether any contributing search stopped on its budget.
    pub budget_exhausted: bool,
}

impl GroupSearchStats {
    pub fn merge(&mut self, other: &GroupSearchStats) {
        self.orderings_explored += other.orderings_explored;
        self.prunings_bound += other.prunings_bound;
        self.infeasible_orderings += other.infeasible_orderings;
        self.improvements += other.improvements;
        self.budget_exhausted |= other.budget_exhausted;
    }
}

impl Display for GroupSearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GroupSearchStats(orderings: {}, pruned: {}, infeasible: {}, improvements: {}{})",
            self.orderings_explored,
            self.prunings_bound,
            self.infeasible_orderings,
            self.improvements,
            if self.budget_exhausted {
                ", budget exhausted"
            } else {
                ""
            }
        )
    }
}

/// Aggregated figures for one `SolverEngine::solve` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverStats {
    pub locations_evaluated: u64,
    pub locations_feasible: u64,
    pub search: GroupSearchStats,
    pub total_time: Duration,
}

impl Display for SolverStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver statistics:")?;
        writeln!(
            f,
            "  Locations: {} evaluated, {} feasible",
            self.locations_evaluated, self.locations_feasible
        )?;
        writeln!(f, "  Search: {}", self.search)?;
        write!(f, "  Total time: {:?}", self.total_time)
    }
}
