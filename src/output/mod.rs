//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempts, print_benchmark_result, print_feedback, print_grid, print_header,
    print_outcome, print_puzzle,
};
