//! git-credential-pass - git credential helper backed by the pass password store.
//!
//! This library provides the core functionality for the helper, including:
//! - Credential request parsing and response emission (git's key=value protocol)
//! - Mapping file parsing and per-user discovery
//! - Glob-based rule matching (first match wins)
//! - Secret store invocation and credential extraction
//!
//! # Example
//!
//! ```no_run
//! use git_credential_pass::config::{default_mapping_path, parse_mapping_file};
//! use git_credential_pass::protocol::Request;
//! use git_credential_pass::resolve::resolve;
//! use git_credential_pass::rules::compile_rules;
//! use git_credential_pass::store::PassStore;
//!
//! let path = default_mapping_path().unwrap();
//! let table = parse_mapping_file(&path).unwrap();
//! let rules = compile_rules(&table).unwrap();
//!
//! let request = Request::parse(std::io::stdin().lock()).unwrap();
//! let credentials = resolve(&request, &rules, &PassStore::new()).unwrap();
//! println!("password={}", credentials.password);
//! ```

pub mod config;
pub mod error;
pub mod protocol;
pub mod resolve;
pub mod rules;
pub mod store;

pub use error::{HelperError, Result};
