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

/// Unique identifier of a rentable parking listing.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(u64);

impl ListingId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ListingId(id)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListingId({})", self.0)
    }
}

impl From<u64> for ListingId {
    fn from(value: u64) -> Self {
        ListingId(value)
    }
}

/// Identifier of a physical location grouping one or more listings.
///
/// Locations are keyed by opaque external strings (the catalog owns the
/// naming scheme), so unlike `ListingId` this is not `Copy`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(String);

impl LocationId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        LocationId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        LocationId(value.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(value: String) -> Self {
        LocationId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_id_round_trip() {
        let id = ListingId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(ListingId::from(7), id);
        assert_eq!(format!("{}", id), "ListingId(7)");
    }

    #[test]
    fn location_id_equality_is_by_content() {
        let a = LocationId::new("abc123");
        let b = LocationId::from("abc123");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "abc123");
    }
}
