//! Mapping file loading and parsing.
//!
//! This module handles:
//! - TOML mapping file parsing into an ordered rule table
//! - Per-user mapping file discovery

pub mod locate;
pub mod parser;
pub mod types;

pub use locate::{default_mapping_path, resolve_mapping_path};
pub use parser::{parse_mapping_file, parse_mapping_str};
pub use types::{MappingEntry, MappingTable, RuleSpec};
