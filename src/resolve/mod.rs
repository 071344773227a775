//! Credential resolution.
//!
//! This module handles:
//! - Matching the composed host key against the compiled mapping table
//! - Invoking the secret store for the winning rule
//! - Extracting password and username lines with skip-count offsets

use crate::config::types::RuleSpec;
use crate::error::{HelperError, Result};
use crate::protocol::{Credentials, Request};
use crate::rules::matcher::{CompiledRule, find_matching_rule};
use crate::store::SecretStore;

/// Resolve a credential request against the mapping table.
///
/// The lookup key is `host` (plus `/path` when present). The first rule
/// whose pattern matches wins; its target is decrypted through the store
/// and sliced into credentials per the rule's skip counts.
pub fn resolve(
	request: &Request,
	rules: &[CompiledRule],
	store: &dyn SecretStore,
) -> Result<Credentials> {
	let key = request.lookup_key()?;
	tracing::debug!("Resolving credentials for {:?}", key);

	let rule = find_matching_rule(rules, &key).ok_or_else(|| HelperError::NoMatch {
		key: key.clone(),
	})?;
	tracing::debug!(
		"Pattern {:?} matched, store target {:?}",
		rule.pattern_text,
		rule.rule.target
	);

	let secret = store.show(&rule.rule.target)?;
	extract_credentials(&secret, &rule.rule, request.has_username())
}

/// Slice the decrypted store output into credentials.
///
/// Line 0 is the password, line 1 (if any) the username. A username is
/// only produced when the request did not already carry one.
fn extract_credentials(
	secret: &str,
	rule: &RuleSpec,
	request_has_username: bool,
) -> Result<Credentials> {
	let mut lines = secret.lines();

	let password_line = lines.next().ok_or_else(|| HelperError::StoreEmptyOutput {
		identifier: rule.target.clone(),
	})?;
	let password = skip_chars(password_line, rule.skip_password);

	let username = if request_has_username {
		None
	} else {
		lines
			.next()
			.map(|line| skip_chars(line, rule.skip_username))
	};

	Ok(Credentials { password, username })
}

/// Drop the first `count` characters of `line`.
///
/// Counts characters (Unicode code points), not bytes. Over-long counts
/// clamp to an empty string rather than failing; a store line shorter
/// than its configured skip yields an empty credential value.
fn skip_chars(line: &str, count: u32) -> String {
	line.chars().skip(count as usize).collect()
}
