//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use generate::{GenerateResult, generate_grid};
pub use simple::run_simple;
