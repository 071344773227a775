use crate::error::{HelperError, Result};
use std::path::{Path, PathBuf};

/// File name of the per-user mapping file.
const MAPPING_FILE_NAME: &str = "mapping.toml";

/// Directory name under the user's configuration directory.
const CONFIG_DIR_NAME: &str = "git-credential-pass";

/// Path of the per-user mapping file, e.g.
/// `~/.config/git-credential-pass/mapping.toml` on Linux.
pub fn default_mapping_path() -> Result<PathBuf> {
	let config_dir = dirs::config_dir().ok_or(HelperError::ConfigDirNotFound)?;
	Ok(config_dir.join(CONFIG_DIR_NAME).join(MAPPING_FILE_NAME))
}

/// Resolve the mapping file path: the override if given, the per-user
/// default otherwise. The file must exist either way.
pub fn resolve_mapping_path(override_path: Option<&Path>) -> Result<PathBuf> {
	let path = match override_path {
		Some(path) => path.to_path_buf(),
		None => default_mapping_path()?,
	};

	if !path.exists() {
		return Err(HelperError::ConfigNotFound { path });
	}

	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_mapping_path_shape() {
		let path = default_mapping_path().unwrap();
		assert!(path.ends_with("git-credential-pass/mapping.toml"));
	}

	#[test]
	fn test_resolve_mapping_path_override_must_exist() {
		let result = resolve_mapping_path(Some(Path::new("/nonexistent/mapping.toml")));
		match result.unwrap_err() {
			HelperError::ConfigNotFound { path } => {
				assert_eq!(path, PathBuf::from("/nonexistent/mapping.toml"));
			}
			other => panic!("Expected ConfigNotFound, got {:?}", other),
		}
	}

	#[test]
	fn test_resolve_mapping_path_existing_override() {
		let temp = tempfile::NamedTempFile::new().unwrap();
		let path = resolve_mapping_path(Some(temp.path())).unwrap();
		assert_eq!(path, temp.path());
	}
}
