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

//! Monetary amounts in the smallest currency unit.
//!
//! `Cost` is the price primitive of the workspace. Addition is checked and
//! panics on overflow; the saturating variants exist for accumulation paths
//! where a capped value is preferable to a panic. `Cost::max_value` serves
//! as the "price to beat" sentinel before any arrangement has been found.

use crate::SolverVariable;
use num_traits::{CheckedAdd, Saturating};
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Cost<C>(C);

impl<C: Copy> Cost<C> {
    #[inline]
    pub const fn new(value: C) -> Self {
        Cost(value)
    }

    #[inline]
    pub const fn value(self) -> C {
        self.0
    }
}

impl<C: SolverVariable> Cost<C> {
    #[inline]
    pub fn zero() -> Self {
        Cost(C::zero())
    }

    /// The largest representable cost, used as the initial incumbent bound.
    #[inline]
    pub fn max_value() -> Self {
        Cost(C::max_value())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(&other.0).map(Cost)
    }

    #[inline]
    pub fn saturating_add(self, other: Self) -> Self {
        Cost(self.0.saturating_add(other.0))
    }
}

impl<C: Copy + Display> Display for Cost<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cost({})", self.0)
    }
}

impl<C: SolverVariable> Add for Cost<C> {
    type Output = Cost<C>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Cost(self.0.checked_add(&rhs.0).expect("overflow in Cost + Cost"))
    }
}

impl<C: SolverVariable> AddAssign for Cost<C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(&rhs.0)
            .expect("overflow in Cost += Cost");
    }
}

impl<C: SolverVariable> Sum for Cost<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cost::zero(), Add::add)
    }
}
