//! Rule matching for the mapping table.
//!
//! This module handles:
//! - Compiling mapping sections into glob patterns
//! - First-match-wins lookup against the composed host key

pub mod matcher;

pub use matcher::{CompiledRule, compile_rules, find_matching_rule};
