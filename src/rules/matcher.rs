use crate::config::types::{MappingEntry, MappingTable, RuleSpec};
use crate::error::{HelperError, Result};
use glob::Pattern;

/// A mapping entry with its pattern compiled, ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	/// The original pattern text (for diagnostics).
	pub pattern_text: String,

	/// Compiled glob pattern.
	pattern: Pattern,

	/// The rule applied on match.
	pub rule: RuleSpec,
}

impl CompiledRule {
	/// Compile one mapping entry.
	pub fn from_entry(entry: &MappingEntry) -> Result<Self> {
		let pattern =
			Pattern::new(&entry.pattern).map_err(|source| HelperError::InvalidPattern {
				pattern: entry.pattern.clone(),
				source,
			})?;

		Ok(CompiledRule {
			pattern_text: entry.pattern.clone(),
			pattern,
			rule: entry.rule.clone(),
		})
	}

	/// Check if this rule matches the given lookup key.
	///
	/// Matching is case-sensitive, against the full key, with shell
	/// wildcard semantics. The default options let `*` cross `/`, so
	/// wildcards also span the path segment of a `host/path` key.
	pub fn matches(&self, key: &str) -> bool {
		self.pattern.matches(key)
	}
}

/// Compile all entries of a mapping table, preserving order.
pub fn compile_rules(table: &MappingTable) -> Result<Vec<CompiledRule>> {
	table.entries.iter().map(CompiledRule::from_entry).collect()
}

/// Find the first rule (in declaration order) matching the lookup key.
pub fn find_matching_rule<'a>(rules: &'a [CompiledRule], key: &str) -> Option<&'a CompiledRule> {
	rules.iter().find(|rule| rule.matches(key))
}
