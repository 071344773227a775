use std::path::PathBuf;

/// Library-level structured errors for the credential helper.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
	#[error("Malformed credential request line (no '='): {line:?}")]
	MalformedInputLine { line: String },

	#[error("Failed to read credential request from input")]
	InputReadError {
		#[source]
		source: std::io::Error,
	},

	#[error("Mapping file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read mapping file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse mapping file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid mapping section {section:?}")]
	InvalidSection {
		section: String,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid glob pattern in mapping: {pattern:?}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Credential request has no 'host' attribute")]
	MissingHost,

	#[error("No mapping entry matches {key:?}")]
	NoMatch { key: String },

	#[error("Failed to run secret store command: {command}")]
	StoreSpawnError {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Secret store command exited with status {status}: {command}")]
	StoreFailed { command: String, status: String },

	#[error("Secret store output for {identifier:?} is not valid UTF-8")]
	StoreOutputNotUtf8 {
		identifier: String,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Secret store returned no output for {identifier:?}")]
	StoreEmptyOutput { identifier: String },

	#[error("Failed to resolve user configuration directory")]
	ConfigDirNotFound,
}

impl HelperError {
	/// Whether this error is an expected terminal outcome of a lookup
	/// (no credentials available) rather than a hard failure.
	pub fn is_expected_miss(&self) -> bool {
		matches!(self, HelperError::MissingHost | HelperError::NoMatch { .. })
	}
}

/// Result type alias using HelperError.
pub type Result<T> = std::result::Result<T, HelperError>;
