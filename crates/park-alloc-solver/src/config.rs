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

use std::time::{Duration, Instant};

/// Work bound for a single group search.
///
/// The ordering space grows factorially with the group quantity, so
/// production callers should cap it. An exhausted budget is not an error:
/// the search stops and reports the best arrangement found so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBudget {
    /// Maximum number of orderings to explore, if any.
    pub max_orderings: Option<u64>,
    /// Wall-clock limit counted from the start of the search, if any.
    pub max_time: Option<Duration>,
}

impl SearchBudget {
    pub const UNLIMITED: SearchBudget = SearchBudget {
        max_orderings: None,
        max_time: None,
    };

    #[inline]
    pub fn is_unlimited(&self) -> bool {
        self.max_orderings.is_none() && self.max_time.is_none()
    }

    #[inline]
    pub fn is_exhausted(&self, orderings_explored: u64, started: Instant) -> bool {
        if let Some(limit) = self.max_orderings {
            if orderings_explored >= limit {
                return true;
            }
        }
        if let Some(limit) = self.max_time {
            if started.elapsed() >= limit {
                return true;
            }
        }
        false
    }
}

/// Solver-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Per-group-search work bound.
    pub budget: SearchBudget,
    /// Evaluate locations on the rayon thread pool. Output is identical
    /// either way; locations share no mutable state.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            budget: SearchBudget::UNLIMITED,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_unlimited() {
        let budget = SearchBudget::default();
        assert!(budget.is_unlimited());
        assert!(!budget.is_exhausted(u64::MAX, Instant::now()));
    }

    #[test]
    fn ordering_limit_exhausts() {
        let budget = SearchBudget {
            max_orderings: Some(10),
            max_time: None,
        };
        let now = Instant::now();
        assert!(!budget.is_exhausted(9, now));
        assert!(budget.is_exhausted(10, now));
    }

    #[test]
    fn zero_time_limit_exhausts_immediately() {
        let budget = SearchBudget {
            max_orderings: None,
            max_time: Some(Duration::ZERO),
        };
        assert!(budget.is_exhausted(0, Instant::now()));
    }
}
