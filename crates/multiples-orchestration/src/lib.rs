//! # multiples-orchestration
//!
//! Calculator selection, parallel execution, and result analysis.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{execute_calculations, execute_calculations_with_observer, first_failure};
