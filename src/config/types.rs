use serde::Deserialize;

/// The target spec of one mapping section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleSpec {
	/// Identifier of the secret store entry to decrypt for this rule.
	pub target: String,

	/// Number of leading characters to drop from the password line.
	#[serde(default)]
	pub skip_password: u32,

	/// Number of leading characters to drop from the username line.
	#[serde(default)]
	pub skip_username: u32,
}

/// One mapping entry: a glob pattern and the rule it selects.
#[derive(Debug, Clone)]
pub struct MappingEntry {
	/// Glob pattern matched against the composed host (and path) key.
	pub pattern: String,

	/// The rule applied when this pattern matches.
	pub rule: RuleSpec,
}

/// An ordered mapping table. First matching pattern wins; patterns need
/// not be unique, later duplicates are simply unreachable.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
	pub entries: Vec<MappingEntry>,
}

impl MappingTable {
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
