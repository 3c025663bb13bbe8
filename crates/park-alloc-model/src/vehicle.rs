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

//! Vehicle groups and parking orientation geometry.
//!
//! A sub-group of identical vehicles can be parked in one listing in two
//! ways: end-to-end (nose to tail in a single lane) or side-by-side (one
//! lane per vehicle). Each orientation induces a rectangular footprint; a
//! listing accommodates the sub-group iff its own footprint dominates at
//! least one of the two.

use crate::err::ZeroQuantityError;
use park_alloc_core::space::{Footprint, SpaceLength};
use std::fmt::Display;

/// Lateral space one vehicle occupies, in catalog units.
///
/// Both orientations scale by this constant: it is the lane depth of an
/// end-to-end row and the per-vehicle lane width of a side-by-side row.
pub const VEHICLE_LANE_WIDTH: SpaceLength = SpaceLength::new(10);

/// The two supported parking orientations. No other rotation is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Vehicles in a single file: width grows with the vehicle length,
    /// depth with the lane width.
    EndToEnd,
    /// Vehicles abreast: width grows with the lane width, depth is one
    /// vehicle length.
    SideBySide,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::EndToEnd, Orientation::SideBySide];
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::EndToEnd => write!(f, "EndToEnd"),
            Orientation::SideBySide => write!(f, "SideBySide"),
        }
    }
}

/// Footprint required to park `group_size` vehicles of `vehicle_length`
/// in the given orientation. Pure; saturates instead of overflowing, so
/// absurd group sizes degrade to "fits nowhere" rather than panicking.
#[inline]
pub fn required_footprint(
    vehicle_length: SpaceLength,
    group_size: usize,
    orientation: Orientation,
) -> Footprint {
    match orientation {
        Orientation::EndToEnd => Footprint::new(
            vehicle_length.saturating_mul(group_size),
            VEHICLE_LANE_WIDTH.saturating_mul(group_size),
        ),
        Orientation::SideBySide => Footprint::new(
            VEHICLE_LANE_WIDTH.saturating_mul(group_size),
            vehicle_length,
        ),
    }
}

/// A request to park `quantity` identical vehicles of `vehicle_length`
/// simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleGroup {
    vehicle_length: SpaceLength,
    quantity: usize,
}

impl VehicleGroup {
    pub fn new(vehicle_length: SpaceLength, quantity: usize) -> Result<Self, ZeroQuantityError> {
        if quantity == 0 {
            return Err(ZeroQuantityError::new(vehicle_length));
        }
        Ok(Self {
            vehicle_length,
            quantity,
        })
    }

    #[inline]
    pub fn vehicle_length(&self) -> SpaceLength {
        self.vehicle_length
    }

    #[inline]
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Aggregate length demand, the solver's processing priority key.
    #[inline]
    pub fn demand(&self) -> SpaceLength {
        self.vehicle_length.saturating_mul(self.quantity)
    }
}

impl Display for VehicleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VehicleGroup(length: {}, quantity: {})",
            self.vehicle_length, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn len(v: usize) -> SpaceLength {
        SpaceLength::new(v)
    }

    #[test]
    fn end_to_end_footprint() {
        // width = vehicle_length * n, length = n * lane width
        let fp = required_footprint(len(12), 3, Orientation::EndToEnd);
        assert_eq!(fp.width(), len(36));
        assert_eq!(fp.length(), len(30));
    }

    #[test]
    fn side_by_side_footprint() {
        // width = lane width * n, length = vehicle_length
        let fp = required_footprint(len(12), 3, Orientation::SideBySide);
        assert_eq!(fp.width(), len(30));
        assert_eq!(fp.length(), len(12));
    }

    #[test]
    fn single_vehicle_orientations_coincide_for_lane_width_length() {
        // A vehicle as long as the lane is wide yields the same square
        // footprint either way.
        let e2e = required_footprint(len(10), 1, Orientation::EndToEnd);
        let sbs = required_footprint(len(10), 1, Orientation::SideBySide);
        assert_eq!(e2e, Footprint::new(len(10), len(10)));
        assert_eq!(sbs, Footprint::new(len(10), len(10)));
    }

    #[test]
    fn group_rejects_zero_quantity() {
        let err = VehicleGroup::new(len(10), 0).unwrap_err();
        assert_eq!(err.vehicle_length(), len(10));
        assert!(VehicleGroup::new(len(10), 1).is_ok());
    }

    #[test]
    fn demand_is_quantity_times_length() {
        let g = VehicleGroup::new(len(12), 4).unwrap();
        assert_eq!(g.demand(), len(48));
    }
}
