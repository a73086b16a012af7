#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core helpers shared by the unitd crates.
//!
//! Everything here is pure string manipulation used when turning systemd
//! directive names into generated identifiers and doc comments.

pub mod utils;


pub use utils::{escape_ident, split_words, to_pascal_case, to_snake_case, wrap_comment};
