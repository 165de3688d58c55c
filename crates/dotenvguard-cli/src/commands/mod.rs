//! Command implementations for dotenvguard-cli

pub mod check;

pub use check::{CheckArgs, run_check};
