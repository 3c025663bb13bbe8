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

//! Physical extents and rectangular footprints.
//!
//! Parking geometry needs no coordinates: a listing is characterized by its
//! width × length extent alone, and placement feasibility is a pure
//! dominance test between two such rectangles. `SpaceLength` is the
//! one-dimensional extent, `Footprint` the two-dimensional one.

use std::{
    fmt::Display,
    ops::{Add, AddAssign},
};

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct SpaceLength(usize);

impl SpaceLength {
    #[inline]
    pub const fn new(v: usize) -> Self {
        SpaceLength(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        SpaceLength(0)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(SpaceLength)
    }

    #[inline]
    pub fn checked_mul(self, rhs: usize) -> Option<Self> {
        self.0.checked_mul(rhs).map(SpaceLength)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        SpaceLength(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_mul(self, rhs: usize) -> Self {
        SpaceLength(self.0.saturating_mul(rhs))
    }
}

impl Display for SpaceLength {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpaceLength({})", self.0)
    }
}

impl From<usize> for SpaceLength {
    #[inline]
    fn from(v: usize) -> Self {
        SpaceLength(v)
    }
}

impl Add for SpaceLength {
    type Output = SpaceLength;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        SpaceLength(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in SpaceLength + SpaceLength"),
        )
    }
}

impl AddAssign for SpaceLength {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in SpaceLength += SpaceLength");
    }
}

/// A rectangular width × length extent.
///
/// `contains` is the dominance test used for placement feasibility: a
/// footprint accommodates another iff it is at least as large in both
/// dimensions. No rotation is implied; callers model orientation by
/// constructing the footprints they want compared.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Footprint {
    width: SpaceLength,
    length: SpaceLength,
}

impl Footprint {
    #[inline]
    pub const fn new(width: SpaceLength, length: SpaceLength) -> Self {
        Footprint { width, length }
    }

    #[inline]
    pub const fn width(self) -> SpaceLength {
        self.width
    }

    #[inline]
    pub const fn length(self) -> SpaceLength {
        self.length
    }

    /// Returns true iff `other` fits inside `self` without rotation.
    #[inline]
    pub fn contains(self, other: Footprint) -> bool {
        self.width >= other.width && self.length >= other.length
    }
}

impl Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Footprint({} x {})",
            self.width.value(),
            self.length.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn fp(w: usize, l: usize) -> Footprint {
        Footprint::new(SpaceLength::new(w), SpaceLength::new(l))
    }

    #[test]
    fn length_arithmetic() {
        let a = SpaceLength::new(10);
        let b = SpaceLength::new(5);
        assert_eq!(a + b, SpaceLength::new(15));
        assert_eq!(a.saturating_mul(3), SpaceLength::new(30));
        assert_eq!(a.checked_mul(usize::MAX), None);
        assert_eq!(SpaceLength::new(usize::MAX).saturating_add(b), SpaceLength::new(usize::MAX));
    }

    #[test]
    fn footprint_contains_is_dominance_in_both_dimensions() {
        assert!(fp(30, 20).contains(fp(10, 10)));
        assert!(fp(30, 20).contains(fp(30, 20)));
        assert!(!fp(30, 20).contains(fp(31, 10)));
        assert!(!fp(30, 20).contains(fp(10, 21)));
    }

    #[test]
    fn footprint_contains_does_not_rotate() {
        // 20x5 would fit 30x10 if rotated, but dominance is axis-aligned.
        assert!(!fp(10, 30).contains(fp(30, 10)));
    }

    #[test]
    fn zero_footprint_fits_everywhere() {
        assert!(fp(0, 0).contains(fp(0, 0)));
        assert!(fp(1, 1).contains(fp(0, 0)));
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", SpaceLength::new(7)), "SpaceLength(7)");
        assert_eq!(format!("{}", fp(3, 4)), "Footprint(3 x 4)");
    }
}
