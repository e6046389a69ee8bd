use serde::Serialize;
use sorttrace::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ValidationReport {
    name: String,
    notes: String,
    params: Params,
    results: Vec<AlgorithmResult>,
}

#[derive(Debug, Serialize)]
struct Params {
    runs: usize,
    min_len: usize,
    max_len: usize,
    min_value: i64,
    max_value: i64,
    seed: u64,
    merge_padding: bool,
}

#[derive(Debug, Serialize)]
struct AlgorithmResult {
    algorithm: Algorithm,
    passed: bool,
    report: DifferentialReport,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Set RUST_LOG=debug for per-sort logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let output_dir = Path::new("../output/sorttrace");
    fs::create_dir_all(output_dir)?;

    let mut all_passed = true;
    for merge_padding in [false, true] {
        let params = Params {
            runs: 100,
            min_len: 1,
            max_len: 1000,
            min_value: -1000,
            max_value: 1000,
            seed: 0,
            merge_padding,
        };
        let report = run_params(params)?;
        all_passed &= report.results.iter().all(|r| r.passed);

        let file_name = format!("{}.json", report.name);
        println!("Writing {:?}", file_name);
        fs::write(
            output_dir.join(file_name),
            serde_json::to_string_pretty(&report)?,
        )?;
    }

    if all_passed {
        println!("All algorithms passed.");
        Ok(())
    } else {
        Err("differential check found trace mismatches".into())
    }
}

fn run_params(params: Params) -> Result<ValidationReport, SortError> {
    let mut results = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        let report = DifferentialCheck::new()
            .runs(params.runs)
            .length_range(params.min_len, params.max_len)
            .value_range(params.min_value, params.max_value)
            .seed(params.seed)
            .algorithms(&[algorithm])
            .options(InstrumentOptions {
                merge_padding: params.merge_padding,
            })
            .run()?;

        println!(
            "{:<16} {:>4} checks  {}",
            algorithm.id(),
            report.checks,
            if report.passed() { "ok" } else { "FAILED" }
        );
        if !report.passed() {
            tracing::warn!(
                algorithm = algorithm.id(),
                failures = report.failures.len(),
                "self-check failed"
            );
        }

        results.push(AlgorithmResult {
            algorithm,
            passed: report.passed(),
            report,
        });
    }

    let name = if params.merge_padding {
        "differential_padded"
    } else {
        "differential"
    };

    Ok(ValidationReport {
        name: name.to_string(),
        notes: "Every algorithm replayed against sort_unstable on seeded random arrays".to_string(),
        params,
        results,
    })
}
