//! The git credential protocol surface.
//!
//! This module handles:
//! - Parsing a credential request (key=value lines on stdin)
//! - Writing the credential response (password/username lines on stdout)

use crate::error::{HelperError, Result};
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// A parsed credential request.
///
/// Git describes the remote it wants credentials for as a set of
/// `key=value` attributes. The set is treated as opaque data; only
/// `host`, `path` and `username` carry meaning for resolution.
#[derive(Debug, Clone, Default)]
pub struct Request {
	attributes: HashMap<String, String>,
}

impl Request {
	/// Parse a credential request from a line-oriented reader.
	///
	/// Blank and whitespace-only lines are skipped. Every other line must
	/// contain at least one `=`; the first `=` splits key from value, and
	/// both sides are trimmed. Duplicate keys keep the last occurrence.
	pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
		let mut attributes = HashMap::new();

		for line in reader.lines() {
			let line = line.map_err(|source| HelperError::InputReadError { source })?;
			if line.trim().is_empty() {
				continue;
			}

			let (key, value) = line
				.split_once('=')
				.ok_or_else(|| HelperError::MalformedInputLine { line: line.clone() })?;

			attributes.insert(key.trim().to_string(), value.trim().to_string());
		}

		Ok(Request { attributes })
	}

	/// Look up an arbitrary request attribute.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.attributes.get(key).map(String::as_str)
	}

	/// The key the mapping table is matched against: `host`, or
	/// `host/path` when the request carries a path segment.
	pub fn lookup_key(&self) -> Result<String> {
		let host = self.get("host").ok_or(HelperError::MissingHost)?;

		Ok(match self.get("path") {
			Some(path) => format!("{}/{}", host, path),
			None => host.to_string(),
		})
	}

	/// Whether the request already names a username. If so, the helper
	/// must not emit one of its own.
	pub fn has_username(&self) -> bool {
		self.attributes.contains_key("username")
	}

	#[cfg(test)]
	fn from_pairs(pairs: &[(&str, &str)]) -> Self {
		Request {
			attributes: pairs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
		}
	}
}

/// Credentials resolved from the secret store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	pub password: String,
	pub username: Option<String>,
}

/// Write the credential response.
///
/// Emits `password=<value>` and, when present, `username=<value>`, in that
/// fixed order, each newline-terminated. Nothing else is ever written.
pub fn write_credentials<W: Write>(mut writer: W, credentials: &Credentials) -> std::io::Result<()> {
	writeln!(writer, "password={}", credentials.password)?;
	if let Some(ref username) = credentials.username {
		writeln!(writer, "username={}", username)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(input: &str) -> Result<Request> {
		Request::parse(input.as_bytes())
	}

	#[test]
	fn test_parse_basic_request() {
		let request = parse("protocol=https\nhost=git.example.com\n").unwrap();
		assert_eq!(request.get("protocol"), Some("https"));
		assert_eq!(request.get("host"), Some("git.example.com"));
		assert_eq!(request.get("path"), None);
	}

	#[test]
	fn test_parse_skips_blank_lines() {
		let request = parse("\nhost=example.com\n   \n\t\nusername=alice\n").unwrap();
		assert_eq!(request.get("host"), Some("example.com"));
		assert_eq!(request.get("username"), Some("alice"));
	}

	#[test]
	fn test_parse_trims_key_and_value() {
		let request = parse("  host  =  example.com  \n").unwrap();
		assert_eq!(request.get("host"), Some("example.com"));
	}

	#[test]
	fn test_parse_first_equals_is_delimiter() {
		let request = parse("url=https://example.com/repo?a=b\n").unwrap();
		assert_eq!(request.get("url"), Some("https://example.com/repo?a=b"));
	}

	#[test]
	fn test_parse_duplicate_keys_last_wins() {
		let request = parse("host=first.example.com\nhost=second.example.com\n").unwrap();
		assert_eq!(request.get("host"), Some("second.example.com"));
	}

	#[test]
	fn test_parse_line_without_equals_fails() {
		let result = parse("host=example.com\nnot a protocol line\n");
		match result.unwrap_err() {
			HelperError::MalformedInputLine { line } => {
				assert_eq!(line, "not a protocol line");
			}
			other => panic!("Expected MalformedInputLine, got {:?}", other),
		}
	}

	#[test]
	fn test_parse_empty_input() {
		let request = parse("").unwrap();
		assert_eq!(request.get("host"), None);
		assert!(!request.has_username());
	}

	#[test]
	fn test_lookup_key_host_only() {
		let request = Request::from_pairs(&[("host", "git.example.com")]);
		assert_eq!(request.lookup_key().unwrap(), "git.example.com");
	}

	#[test]
	fn test_lookup_key_host_and_path() {
		let request = Request::from_pairs(&[("host", "example.com"), ("path", "org/repo.git")]);
		assert_eq!(request.lookup_key().unwrap(), "example.com/org/repo.git");
	}

	#[test]
	fn test_lookup_key_missing_host() {
		let request = Request::from_pairs(&[("path", "org/repo.git")]);
		assert!(matches!(
			request.lookup_key().unwrap_err(),
			HelperError::MissingHost
		));
	}

	#[test]
	fn test_write_credentials_password_only() {
		let mut out = Vec::new();
		let credentials = Credentials {
			password: "s3cr3t".to_string(),
			username: None,
		};
		write_credentials(&mut out, &credentials).unwrap();
		assert_eq!(out, b"password=s3cr3t\n");
	}

	#[test]
	fn test_write_credentials_with_username() {
		let mut out = Vec::new();
		let credentials = Credentials {
			password: "s3cr3t".to_string(),
			username: Some("alice".to_string()),
		};
		write_credentials(&mut out, &credentials).unwrap();
		assert_eq!(out, b"password=s3cr3t\nusername=alice\n");
	}
}
