//! Multiples library: application logic for the sum-of-multiples calculator.

pub mod app;
pub mod config;
pub mod errors;
