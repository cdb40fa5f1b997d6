//! Workspace-level integration tests for the multiples crates.
