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

use park_alloc_core::{cost::Cost, space::SpaceLength};
use park_alloc_model::prelude::*;
use park_alloc_solver::{SolverConfig, SolverEngine};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, time::Instant};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    locations: usize,
    listings: usize,
    vehicle_groups: usize,
    total_vehicles: usize,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    feasible_locations: usize,
    best_price_in_cents: Option<i64>,
    elapsed_ms: u128,
    orderings_explored: u64,
}

#[derive(Debug, Clone, Serialize)]
struct BenchmarkReport {
    description: String,
    instances: Vec<RunResult>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawVehicleGroup {
    length: usize,
    quantity: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct RawListing {
    id: u64,
    location_id: String,
    width: usize,
    length: usize,
    price_in_cents: i64,
}

#[derive(Debug, Clone, Serialize)]
struct RankedEntry {
    location_id: String,
    total_price_in_cents: i64,
    listing_ids: Vec<u64>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

/// Solves a catalog/request pair loaded from JSON files and prints the
/// ranked result to stdout.
fn solve_from_files(
    listings_path: &str,
    request_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let request_raw: Vec<RawVehicleGroup> =
        serde_json::from_str(&std::fs::read_to_string(request_path)?)?;
    let listings_raw: Vec<RawListing> =
        serde_json::from_str(&std::fs::read_to_string(listings_path)?)?;

    let mut builder = ProblemBuilder::new();
    for raw in request_raw {
        builder = builder.vehicle_group(VehicleGroup::new(
            SpaceLength::new(raw.length),
            raw.quantity,
        )?);
    }
    for raw in listings_raw {
        builder = builder.listing(Listing::new(
            ListingId::new(raw.id),
            LocationId::new(raw.location_id),
            SpaceLength::new(raw.width),
            SpaceLength::new(raw.length),
            Cost::new(raw.price_in_cents),
        )?);
    }
    let problem = builder.build()?;

    let ranked = park_alloc_solver::solve(&problem);
    let entries: Vec<RankedEntry> = ranked
        .iter()
        .map(|a| RankedEntry {
            location_id: a.location().as_str().to_owned(),
            total_price_in_cents: a.total_price().value(),
            listing_ids: a.listing_ids().iter().map(|id| id.value()).collect(),
        })
        .collect();

    serde_json::to_writer_pretty(std::io::stdout().lock(), &entries)?;
    println!();
    Ok(())
}

/// Generates a small-to-big ramp of synthetic instances, solves each, and
/// writes a JSON report.
fn run_benchmark_ramp() {
    let n_instances = 8usize;

    let min_locations = 4usize;
    let max_locations = 24usize;

    let min_groups = 2usize;
    let max_groups = 4usize;

    let engine = SolverEngine::new(SolverConfig::default());
    let mut results: Vec<RunResult> = Vec::with_capacity(n_instances);

    for i in 0..n_instances {
        let locations = interpolate_u(min_locations, max_locations, i, n_instances);
        let groups = interpolate_u(min_groups, max_groups, i, n_instances);

        // Deterministic seed per instance
        let seed: u64 = 42 + (i as u64);

        let config = InstanceGenConfigBuilder::new()
            .amount_locations(locations)
            .listings_per_location(6, 12)
            .amount_vehicle_groups(groups)
            .quantity(1, 4)
            .seed(seed)
            .build()
            .expect("valid instance config");
        let mut generator = InstanceGenerator::new(config);
        let problem = generator.generate();

        let t0 = Instant::now();
        let outcome = engine.solve(&problem);
        let elapsed = t0.elapsed();

        let pstats = problem.stats();
        results.push(RunResult {
            instance: InstanceInfo {
                idx: i,
                seed,
                locations: pstats.location_count(),
                listings: pstats.listing_count(),
                vehicle_groups: groups,
                total_vehicles: pstats.vehicle_count(),
            },
            feasible_locations: outcome.solutions().len(),
            best_price_in_cents: outcome.solutions().best().map(|a| a.total_price().value()),
            elapsed_ms: elapsed.as_millis(),
            orderings_explored: outcome.stats().search.orderings_explored,
        });
    }

    let report = BenchmarkReport {
        description:
            "Parking allocation benchmark: 8 instances from small to big; cheapest feasible location per instance."
                .into(),
        instances: results,
    };

    let file = File::create("park_alloc_results.json").expect("create park_alloc_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("=================================================================");
    println!("======================== Benchmark Done =========================");
    println!("=================================================================");
    println!();
    println!("Wrote: park_alloc_results.json");
}

fn main() {
    enable_tracing();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run_benchmark_ramp(),
        3 => {
            if let Err(e) = solve_from_files(&args[1], &args[2]) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("usage: park-alloc-main [<listings.json> <request.json>]");
            std::process::exit(2);
        }
    }
}
