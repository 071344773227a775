use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use git_credential_pass::config::{parse_mapping_file, resolve_mapping_path};
use git_credential_pass::protocol::{Request, write_credentials};
use git_credential_pass::resolve::resolve;
use git_credential_pass::rules::compile_rules;
use git_credential_pass::store::PassStore;

/// Environment variable that makes the helper exit immediately with a
/// failure status, letting git fall through to the next configured helper.
const SKIP_ENV_VAR: &str = "GIT_CREDENTIAL_PASS_SKIP";

#[derive(Parser)]
#[command(name = "git-credential-pass")]
#[command(
	author,
	version,
	about = "Git credential helper backed by the pass password store"
)]
struct Cli {
	/// Credential action requested by git (only "get" is supported)
	action: String,

	/// Override path to the mapping file
	#[arg(long, value_name = "FILE")]
	mapping: Option<PathBuf>,

	/// Enable verbose diagnostics on stderr
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	init_logging(cli.verbose);

	// Escape hatch: exit before touching stdin or the mapping file.
	if std::env::var_os(SKIP_ENV_VAR).is_some() {
		tracing::debug!("{} is set, skipping credential lookup", SKIP_ENV_VAR);
		return Ok(ExitCode::FAILURE);
	}

	match cli.action.as_str() {
		"get" => handle_get(cli.mapping.as_deref()),
		"store" | "erase" => {
			tracing::debug!("Action '{}' is not supported, ignoring", cli.action);
			Ok(ExitCode::FAILURE)
		}
		other => {
			tracing::warn!("Unknown credential action '{}'", other);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn init_logging(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::new("warn")
	};

	// stdout carries only protocol output; diagnostics go to stderr.
	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(false)
				.with_writer(std::io::stderr),
		)
		.init();
}

fn handle_get(mapping_override: Option<&Path>) -> Result<ExitCode> {
	let path = resolve_mapping_path(mapping_override).context("Failed to locate mapping file")?;
	let table = parse_mapping_file(&path).context("Failed to load mapping file")?;
	let rules = compile_rules(&table).context("Failed to compile mapping patterns")?;
	tracing::debug!(
		"Loaded {} mapping entries from {}",
		rules.len(),
		path.display()
	);

	let request =
		Request::parse(std::io::stdin().lock()).context("Failed to parse credential request")?;

	match resolve(&request, &rules, &PassStore::new()) {
		Ok(credentials) => {
			write_credentials(std::io::stdout().lock(), &credentials)
				.context("Failed to write credential response")?;
			Ok(ExitCode::SUCCESS)
		}
		// Missing host and no-match are expected misses: git just moves on
		// to the next helper. Warn and fail without an error chain.
		Err(e) if e.is_expected_miss() => {
			tracing::warn!("{}", e);
			Ok(ExitCode::FAILURE)
		}
		Err(e) => Err(e).context("Credential resolution failed"),
	}
}
