//! compare — four-scenario SAN comparison run.
//!
//! Simulates 60 seconds of traffic for each (architecture × encryption)
//! combination: Traditional Ethernet (1 Gbps) and Fibre Channel (16 Gbps),
//! with and without AES-256.  Writes the raw and processed CSVs, prints
//! per-run summaries, forecasts congestion for a hypothetical backup load,
//! and — when an API key is passed as the first argument — asks the advisory
//! service for narrative insight.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use san_advisory::{AdvisoryClient, predict_congestion};
use san_core::{RunConfig, Scenario};
use san_model::{RunSummary, SimulationRecord, simulate};
use san_output::write_records_csv;
use san_process::{process, write_processed_csv};
use san_traffic::{LoadSchedule, SpikePolicy};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 42;
const DURATION_SECS:    f64 = 60.0;
const OUTPUT_DIR:       &str = "output/compare";
const FUTURE_LOAD_MB_S: f64 = 400.0; // hypothetical nightly backup load
const ADVISORY_TIMEOUT: Duration = Duration::from_secs(20);

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== compare — san_sim SAN performance pipeline ===");
    println!("Duration: {DURATION_SECS} s  |  Seed: {SEED}");
    println!();

    // 1. The four runs: each scenario with encryption off and on.
    let schedule = LoadSchedule::phase2_default();
    let policy = SpikePolicy::default();
    let scenarios = [Scenario::traditional_ethernet(), Scenario::fibre_channel()];

    let mut all_records: Vec<SimulationRecord> = Vec::new();
    let mut summaries: Vec<RunSummary> = Vec::new();

    for scenario in &scenarios {
        for encryption in [false, true] {
            let config = RunConfig::new(DURATION_SECS, SEED, encryption);
            let records = simulate(scenario, &config, &schedule, policy)?;
            if let Some(summary) = RunSummary::of(&records) {
                summaries.push(summary);
            }
            all_records.extend(records);
        }
    }
    println!("Simulated {} records across {} runs", all_records.len(), summaries.len());

    // 2. Persist raw and processed record sets.  A write failure is
    //    non-fatal: the in-memory records stay usable for the report below.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let out = Path::new(OUTPUT_DIR);
    if let Err(e) = write_records_csv(out, &all_records) {
        eprintln!("persistence error (continuing): {e}");
    }
    let processed = process(&all_records);
    if let Err(e) = write_processed_csv(out, &processed) {
        eprintln!("persistence error (continuing): {e}");
    }
    println!("Wrote sim_results.csv and processed_data.csv to {OUTPUT_DIR}");
    println!();

    // 3. Per-run summary table.
    println!(
        "{:<10} {:<6} {:>14} {:>16} {:>10}",
        "Scenario", "Enc", "Mean thr MB/s", "Max latency s", "Dropped"
    );
    println!("{}", "-".repeat(62));
    for s in &summaries {
        println!(
            "{:<10} {:<6} {:>14.1} {:>16} {:>9.0}%",
            s.scenario,
            if s.encryption { "AES" } else { "off" },
            s.mean_throughput_mb_s,
            s.max_stable_latency_s
                .map_or_else(|| "n/a".to_owned(), |l| format!("{l:.4}")),
            s.drop_ratio * 100.0,
        );
    }
    println!();

    // 4. Offline congestion forecast for the planned backup load.
    let risk = predict_congestion(&processed, FUTURE_LOAD_MB_S);
    println!("Forecast for a {FUTURE_LOAD_MB_S:.0} MB/s backup: {risk}");
    println!("  {}", risk.advice());
    println!();

    // 5. Optional advisory insight.  Any failure downgrades to "no insight".
    let api_key = std::env::args().nth(1);
    let client = AdvisoryClient::new(api_key, ADVISORY_TIMEOUT)?;
    let fc = Scenario::fibre_channel();
    let fc_encrypted: Vec<_> = processed
        .iter()
        .filter(|r| r.scenario == fc.label && r.encryption == "AES-256")
        .cloned()
        .collect();
    match client.insights(&fc_encrypted, &fc.label, "AES-256") {
        Ok(text) => println!("Advisory insight:\n{text}"),
        Err(e) => println!("No advisory insight ({e})"),
    }

    Ok(())
}
