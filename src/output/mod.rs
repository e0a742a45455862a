//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_added_score, print_check_result, print_list_result, print_puzzle_number, print_score,
    print_statistics,
};
