//! Golden file integration tests.
//!
//! Reads tests/testdata/multiples_golden.json and checks both calculators,
//! both worker strategies and the orchestration layer against known sums.

use std::sync::Arc;

use serde::Deserialize;

use multiples_core::calculator::Calculator;
use multiples_core::observers::NoOpObserver;
use multiples_core::options::Options;
use multiples_core::progress::CancellationToken;
use multiples_core::registry::{CalculatorFactory, DefaultFactory};
use multiples_core::request::MultiplesRequest;
use multiples_core::worker::SumStrategy;
use multiples_orchestration::calculator_selection::get_calculators_to_run;
use multiples_orchestration::orchestrator::execute_calculations;

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    total: u64,
    multiples: Vec<u32>,
    one_loop: u64,
    concurrent: u64,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/multiples_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn run(calc: &dyn Calculator, entry: &GoldenEntry, opts: &Options) -> u64 {
    let request = MultiplesRequest::new(entry.total, entry.multiples.clone());
    calc.calculate(&CancellationToken::new(), &NoOpObserver::new(), &request, opts)
        .unwrap_or_else(|e| {
            panic!(
                "{} failed for total={} multiples={:?}: {e}",
                calc.name(),
                entry.total,
                entry.multiples
            )
        })
}

#[test]
fn golden_one_loop() {
    let factory = DefaultFactory::new();
    let calc = factory.get("one-loop").unwrap();
    for entry in &load_golden_data().values {
        assert_eq!(
            run(calc.as_ref(), entry, &Options::default()),
            entry.one_loop,
            "one-loop total={} multiples={:?}",
            entry.total,
            entry.multiples
        );
    }
}

#[test]
fn golden_concurrent_iterative() {
    let factory = DefaultFactory::new();
    let calc = factory.get("concurrent").unwrap();
    for entry in &load_golden_data().values {
        assert_eq!(
            run(calc.as_ref(), entry, &Options::default()),
            entry.concurrent,
            "concurrent total={} multiples={:?}",
            entry.total,
            entry.multiples
        );
    }
}

#[test]
fn golden_concurrent_closed_form_single_worker() {
    let factory = DefaultFactory::new();
    let calc = factory.get("concurrent").unwrap();
    let opts = Options {
        strategy: SumStrategy::ClosedForm,
        max_workers: 1,
        deadline: None,
    };
    for entry in &load_golden_data().values {
        assert_eq!(
            run(calc.as_ref(), entry, &opts),
            entry.concurrent,
            "closed-form total={} multiples={:?}",
            entry.total,
            entry.multiples
        );
    }
}

#[test]
fn golden_through_orchestration() {
    let factory = DefaultFactory::new();
    let calculators: Vec<Arc<dyn Calculator>> = get_calculators_to_run("all", &factory).unwrap();
    assert_eq!(calculators.len(), 2);

    for entry in &load_golden_data().values {
        let request = MultiplesRequest::new(entry.total, entry.multiples.clone());
        let results = execute_calculations(
            &calculators,
            &request,
            &Options::default(),
            &CancellationToken::new(),
        );
        for result in results {
            let expected = match result.algorithm.as_str() {
                "OneLoop" => entry.one_loop,
                "Concurrent" => entry.concurrent,
                other => panic!("unexpected algorithm {other}"),
            };
            assert_eq!(result.outcome, Ok(expected), "{}", result.algorithm);
        }
    }
}
