//! Secret store invocation.
//!
//! This module handles:
//! - Running the external store binary (`pass show <identifier>`)
//! - Capturing and decoding its output

use crate::error::{HelperError, Result};
use std::process::{Command, Stdio};

/// A source of decrypted secret text, addressed by opaque identifiers.
///
/// The production implementation shells out to `pass`; tests substitute
/// an in-memory store.
pub trait SecretStore {
	/// Return the decrypted, line-oriented text for one identifier.
	fn show(&self, identifier: &str) -> Result<String>;
}

/// The `pass` password store, invoked as `<program> show <identifier>`.
#[derive(Debug, Clone)]
pub struct PassStore {
	program: String,
}

impl PassStore {
	pub fn new() -> Self {
		PassStore {
			program: "pass".to_string(),
		}
	}

	/// Use a different store binary (for wrappers like `gopass`).
	pub fn with_program(program: impl Into<String>) -> Self {
		PassStore {
			program: program.into(),
		}
	}
}

impl Default for PassStore {
	fn default() -> Self {
		PassStore::new()
	}
}

impl SecretStore for PassStore {
	fn show(&self, identifier: &str) -> Result<String> {
		let command_line = format!("{} show {}", self.program, identifier);
		tracing::debug!("Running secret store command: {}", command_line);

		// The store is synchronous and all-or-nothing: stdout is captured
		// in full before any credential line is emitted. Stderr stays
		// inherited so pinentry prompts and gpg diagnostics reach the user.
		let output = Command::new(&self.program)
			.arg("show")
			.arg(identifier)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::inherit())
			.output()
			.map_err(|source| HelperError::StoreSpawnError {
				command: command_line.clone(),
				source,
			})?;

		if !output.status.success() {
			return Err(HelperError::StoreFailed {
				command: command_line,
				status: output
					.status
					.code()
					.map_or_else(|| output.status.to_string(), |code| code.to_string()),
			});
		}

		String::from_utf8(output.stdout).map_err(|source| HelperError::StoreOutputNotUtf8 {
			identifier: identifier.to_string(),
			source,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_store_spawn_error_for_missing_binary() {
		let store = PassStore::with_program("/nonexistent/pass-binary");
		match store.show("work/example").unwrap_err() {
			HelperError::StoreSpawnError { command, .. } => {
				assert_eq!(command, "/nonexistent/pass-binary show work/example");
			}
			other => panic!("Expected StoreSpawnError, got {:?}", other),
		}
	}

	#[cfg(unix)]
	#[test]
	fn test_store_nonzero_exit() {
		let store = PassStore::with_program("false");
		assert!(matches!(
			store.show("work/example").unwrap_err(),
			HelperError::StoreFailed { .. }
		));
	}

	#[cfg(unix)]
	#[test]
	fn test_store_captures_stdout() {
		// `echo show <id>` is close enough to a store for capture checks.
		let store = PassStore::with_program("echo");
		let output = store.show("work/example").unwrap();
		assert_eq!(output, "show work/example\n");
	}
}
