// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Failure taxonomy for the wrapper binaries and the exit code assigned to each kind
// role: errors/exit-codes
// inputs: Failure context from every component (flag names, URLs, candidate lists, io::Error)
// outputs: Human-readable stderr messages; stable per-kind process exit codes
// side_effects: fail() terminates the process
// invariants:
// - Every error kind maps to exactly one exit code; codes are distinct and stable
// - Candidate lists (catalog, ambiguous matches) render inside Display so stderr shows them
// errors: This module is the sink; nothing here is recoverable
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit codes, one per failure kind. A started child's own non-zero
/// exit code is forwarded verbatim and never remapped onto these.
pub mod exit {
  pub const SUCCESS: i32 = 0;
  pub const USAGE: i32 = 2;
  pub const TOOL_UNAVAILABLE: i32 = 3;
  pub const CATALOG_UNAVAILABLE: i32 = 4;
  pub const MODEL_RESOLUTION: i32 = 5;
  pub const EXECUTION: i32 = 6;
  pub const PROMPT_ACQUISITION: i32 = 7;
  pub const PROMPT_FILE_MISSING: i32 = 8;
  pub const NETWORK: i32 = 9;
}

#[derive(Debug, Error)]
pub enum WrapperError {
  #[error("{0}")]
  Usage(String),

  #[error("`{}` is not available on PATH; install it or point {} at it", .bin, .hint)]
  ToolUnavailable { bin: String, hint: String },

  #[error("listing models via `{} models` failed: {}", .bin, .reason)]
  CatalogUnavailable { bin: String, reason: String },

  #[error("model '{}' does not match any available model; the catalog is:\n{}", .requested, bullet_list(.catalog))]
  ModelNotFound { requested: String, catalog: Vec<String> },

  #[error("model '{}' is ambiguous; it matches:\n{}", .requested, bullet_list(.matches))]
  ModelAmbiguous { requested: String, matches: Vec<String> },

  #[error("{0}")]
  PromptAcquisition(String),

  #[error("prompt template {} is missing or unreadable: {}", .path.display(), .source)]
  PromptFileMissing { path: PathBuf, source: io::Error },

  #[error("fetching {} failed after {} attempt(s): {}", .url, .attempts, .reason)]
  Network { url: String, attempts: u32, reason: String },

  #[error("{} returned an empty diff", .url)]
  EmptyDiff { url: String },

  #[error("failed to run `{}`: {}", .bin, .reason)]
  Execution { bin: String, reason: String },
}

impl WrapperError {
  pub fn exit_code(&self) -> i32 {
    match self {
      WrapperError::Usage(_) => exit::USAGE,
      WrapperError::ToolUnavailable { .. } => exit::TOOL_UNAVAILABLE,
      WrapperError::CatalogUnavailable { .. } => exit::CATALOG_UNAVAILABLE,
      WrapperError::ModelNotFound { .. } | WrapperError::ModelAmbiguous { .. } => exit::MODEL_RESOLUTION,
      WrapperError::PromptAcquisition(_) => exit::PROMPT_ACQUISITION,
      WrapperError::PromptFileMissing { .. } => exit::PROMPT_FILE_MISSING,
      WrapperError::Network { .. } | WrapperError::EmptyDiff { .. } => exit::NETWORK,
      WrapperError::Execution { .. } => exit::EXECUTION,
    }
  }
}

fn bullet_list(items: &[String]) -> String {
  items.iter().map(|item| format!("  {}", item)).collect::<Vec<_>>().join("\n")
}

/// Terminate the current binary: message on stderr, the kind's exit code.
pub fn fail(err: WrapperError) -> ! {
  eprintln!("error: {}", err);
  std::process::exit(err.exit_code());
}
