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

//! Synthetic instance generation for benchmarks and the demo binary.
//!
//! Listing dimensions are sampled uniformly, prices from a normal
//! distribution clamped to a floor. Generation is fully determined by the
//! configured seed.

use crate::{
    id::{ListingId, LocationId},
    listing::Listing,
    problem::{Problem, ProblemBuilder},
    vehicle::VehicleGroup,
};
use park_alloc_core::{cost::Cost, space::SpaceLength};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidRangeError {
    field: &'static str,
    min: usize,
    max: usize,
}

impl InvalidRangeError {
    #[inline]
    pub fn new(field: &'static str, min: usize, max: usize) -> Self {
        Self { field, min, max }
    }

    #[inline]
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid range for {}: min {} > max {}",
            self.field, self.min, self.max
        )
    }
}

impl std::error::Error for InvalidRangeError {}

/// Configuration for synthetic instance generation (catalog-like units).
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceGenConfig {
    pub(crate) amount_locations: usize,
    pub(crate) listings_per_location_min: usize,
    pub(crate) listings_per_location_max: usize,
    pub(crate) listing_width_min: SpaceLength,
    pub(crate) listing_width_max: SpaceLength,
    pub(crate) listing_length_min: SpaceLength,
    pub(crate) listing_length_max: SpaceLength,
    pub(crate) price_mu: f64,
    pub(crate) price_sigma: f64,
    pub(crate) price_floor: Cost<i64>,
    pub(crate) amount_vehicle_groups: usize,
    pub(crate) vehicle_length_min: SpaceLength,
    pub(crate) vehicle_length_max: SpaceLength,
    pub(crate) quantity_min: usize,
    pub(crate) quantity_max: usize,
    pub(crate) seed: u64,
}

impl InstanceGenConfig {
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn amount_locations(&self) -> usize {
        self.amount_locations
    }

    #[inline]
    pub fn amount_vehicle_groups(&self) -> usize {
        self.amount_vehicle_groups
    }
}

impl Default for InstanceGenConfig {
    fn default() -> Self {
        Self {
            amount_locations: 8,
            listings_per_location_min: 4,
            listings_per_location_max: 12,
            listing_width_min: SpaceLength::new(10),
            listing_width_max: SpaceLength::new(60),
            listing_length_min: SpaceLength::new(10),
            listing_length_max: SpaceLength::new(60),
            price_mu: 4_000.0,
            price_sigma: 1_500.0,
            price_floor: Cost::new(100),
            amount_vehicle_groups: 3,
            vehicle_length_min: SpaceLength::new(8),
            vehicle_length_max: SpaceLength::new(25),
            quantity_min: 1,
            quantity_max: 4,
            seed: 42,
        }
    }
}

/// Chained builder for `InstanceGenConfig`, validating every range.
#[derive(Debug, Clone, Default)]
pub struct InstanceGenConfigBuilder {
    config: InstanceGenConfig,
}

impl InstanceGenConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn amount_locations(mut self, n: usize) -> Self {
        self.config.amount_locations = n;
        self
    }

    #[inline]
    pub fn listings_per_location(mut self, min: usize, max: usize) -> Self {
        self.config.listings_per_location_min = min;
        self.config.listings_per_location_max = max;
        self
    }

    #[inline]
    pub fn listing_width(mut self, min: SpaceLength, max: SpaceLength) -> Self {
        self.config.listing_width_min = min;
        self.config.listing_width_max = max;
        self
    }

    #[inline]
    pub fn listing_length(mut self, min: SpaceLength, max: SpaceLength) -> Self {
        self.config.listing_length_min = min;
        self.config.listing_length_max = max;
        self
    }

    #[inline]
    pub fn price(mut self, mu: f64, sigma: f64, floor: Cost<i64>) -> Self {
        self.config.price_mu = mu;
        self.config.price_sigma = sigma;
        self.config.price_floor = floor;
        self
    }

    #[inline]
    pub fn amount_vehicle_groups(mut self, n: usize) -> Self {
        self.config.amount_vehicle_groups = n;
        self
    }

    #[inline]
    pub fn vehicle_length(mut self, min: SpaceLength, max: SpaceLength) -> Self {
        self.config.vehicle_length_min = min;
        self.config.vehicle_length_max = max;
        self
    }

    #[inline]
    pub fn quantity(mut self, min: usize, max: usize) -> Self {
        self.config.quantity_min = min;
        self.config.quantity_max = max;
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Result<InstanceGenConfig, InvalidRangeError> {
        let c = &self.config;
        let ranges: [(&'static str, usize, usize); 5] = [
            (
                "listings_per_location",
                c.listings_per_location_min,
                c.listings_per_location_max,
            ),
            (
                "listing_width",
                c.listing_width_min.value(),
                c.listing_width_max.value(),
            ),
            (
                "listing_length",
                c.listing_length_min.value(),
                c.listing_length_max.value(),
            ),
            (
                "vehicle_length",
                c.vehicle_length_min.value(),
                c.vehicle_length_max.value(),
            ),
            ("quantity", c.quantity_min, c.quantity_max),
        ];
        for (field, min, max) in ranges {
            if min > max {
                return Err(InvalidRangeError::new(field, min, max));
            }
        }
        if c.quantity_min == 0 {
            return Err(InvalidRangeError::new("quantity", 0, c.quantity_max));
        }
        Ok(self.config)
    }
}

pub struct InstanceGenerator {
    config: InstanceGenConfig,
    rng: SmallRng,
    price_distribution: Normal<f64>,
    next_id: u64,
}

impl From<InstanceGenConfig> for InstanceGenerator {
    fn from(config: InstanceGenConfig) -> Self {
        Self::new(config)
    }
}

impl InstanceGenerator {
    pub fn new(config: InstanceGenConfig) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(config.seed),
            price_distribution: Normal::new(config.price_mu, config.price_sigma)
                .expect("valid price distribution"),
            config,
            next_id: 0,
        }
    }

    #[inline]
    fn fresh_id(&mut self) -> ListingId {
        let id = self.next_id;
        self.next_id += 1;
        ListingId::new(id)
    }

    #[inline]
    fn sample_length(&mut self, min: SpaceLength, max: SpaceLength) -> SpaceLength {
        SpaceLength::new(self.rng.random_range(min.value()..=max.value()))
    }

    fn sample_price(&mut self) -> Cost<i64> {
        let raw = self.price_distribution.sample(&mut self.rng);
        let floor = self.config.price_floor.value();
        Cost::new((raw as i64).max(floor))
    }

    fn generate_listing(&mut self, location: &LocationId) -> Listing {
        let id = self.fresh_id();
        let width = self.sample_length(self.config.listing_width_min, self.config.listing_width_max);
        let length =
            self.sample_length(self.config.listing_length_min, self.config.listing_length_max);
        let price = self.sample_price();
        Listing::new(id, location.clone(), width, length, price)
            .expect("generated price is floored at a non-negative value")
    }

    fn generate_vehicle_group(&mut self) -> VehicleGroup {
        let length =
            self.sample_length(self.config.vehicle_length_min, self.config.vehicle_length_max);
        let quantity = self
            .rng
            .random_range(self.config.quantity_min..=self.config.quantity_max);
        VehicleGroup::new(length, quantity).expect("generated quantity is at least one")
    }

    /// Generates one problem instance. Subsequent calls continue the same
    /// random stream and produce fresh listing ids.
    pub fn generate(&mut self) -> Problem {
        let mut builder = ProblemBuilder::new();

        for loc in 0..self.config.amount_locations {
            let location = LocationId::new(format!("L{loc}"));
            let amount = self.rng.random_range(
                self.config.listings_per_location_min..=self.config.listings_per_location_max,
            );
            for _ in 0..amount {
                builder = builder.listing(self.generate_listing(&location));
            }
        }

        for _ in 0..self.config.amount_vehicle_groups {
            builder = builder.vehicle_group(self.generate_vehicle_group());
        }

        builder
            .build()
            .expect("generated listing ids are sequential and unique")
    }
}
