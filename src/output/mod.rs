//! Terminal output formatting
//!
//! Display utilities for CLI results, rounds and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_dictionary_info, print_score_result, write_intro, write_round_summary,
};
