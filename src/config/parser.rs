use crate::config::types::{MappingEntry, MappingTable, RuleSpec};
use crate::error::{HelperError, Result};
use std::path::Path;

/// Parse a mapping file from the given path.
pub fn parse_mapping_file(path: &Path) -> Result<MappingTable> {
	let content = std::fs::read_to_string(path).map_err(|source| HelperError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_mapping_str(&content, path)
}

/// Parse a mapping from a string (useful for testing).
///
/// Each top-level table is one mapping section: the (quoted) table name is
/// the glob pattern, the body is the rule spec. Declaration order is
/// preserved; it decides which rule wins when several patterns match.
/// Sections are validated eagerly, so a missing `target` or a bad skip
/// count fails the whole load rather than a later lookup.
pub fn parse_mapping_str(content: &str, path: &Path) -> Result<MappingTable> {
	let raw: toml::Table =
		toml::from_str(content).map_err(|source| HelperError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	let mut entries = Vec::with_capacity(raw.len());
	for (pattern, value) in raw {
		let rule: RuleSpec = value
			.try_into()
			.map_err(|source| HelperError::InvalidSection {
				section: pattern.clone(),
				source,
			})?;

		entries.push(MappingEntry { pattern, rule });
	}

	Ok(MappingTable { entries })
}
