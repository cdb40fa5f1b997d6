//! CLI result presenter.

use std::fmt::Write as _;
use std::time::Duration;

use multiples_core::calculator::MultiplesError;
use multiples_core::request::MultiplesRequest;
use multiples_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_multiples, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render a single result as it is printed.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        request: &MultiplesRequest,
        result: u64,
        duration: Duration,
    ) -> String {
        if self.quiet {
            return result.to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Algorithm: {algorithm}");
        let _ = writeln!(out, "Total: {}", format_number(request.total));
        let _ = writeln!(
            out,
            "Multiples: {}",
            format_multiples(&request.multiples, self.verbose)
        );
        let _ = writeln!(out, "Duration: {}", format_duration(duration));
        let _ = write!(out, "Sum = {}", format_number(result));
        out
    }

    /// Render the comparison table, or nothing in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult]) -> String {
        if self.quiet {
            return String::new();
        }

        let mut out = String::new();
        let _ = writeln!(out, "\nComparison Results:");
        let _ = writeln!(out, "{:-<60}", "");
        for result in results {
            let value = match &result.outcome {
                Ok(sum) => format_number(*sum),
                Err(_) => "ERROR".to_string(),
            };
            let _ = writeln!(
                out,
                "  {:<12} {:>12} {:>26}",
                result.algorithm,
                format_duration(result.duration),
                value,
            );
        }
        out
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        request: &MultiplesRequest,
        result: u64,
        duration: Duration,
    ) {
        println!("{}", self.render_result(algorithm, request, result, duration));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        let table = self.render_comparison(results);
        if !table.is_empty() {
            print!("{table}");
        }
    }

    fn present_error(&self, algorithm: &str, error: &MultiplesError) {
        eprintln!("Error ({algorithm}): {error}");
    }
}
