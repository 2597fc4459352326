// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fetch the live model catalog from the opencode CLI and resolve a requested name onto one entry
// role: models/resolution
// inputs: The opencode binary name; a requested model string
// outputs: The catalog as ordered strings; one resolved catalog member
// side_effects: Spawns `opencode models` and blocks on it
// invariants:
// - The catalog is fetched fresh per invocation; there is no cache to go stale
// - Exact match short-circuits before any substring scan
// - Case-insensitive exact matching takes the first hit; only the substring step flags ambiguity
// errors: ToolUnavailable, CatalogUnavailable, ModelNotFound, ModelAmbiguous
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io;
use std::process::Command;

use crate::config;
use crate::error::WrapperError;

/// Run `{bin} models` and collect its non-blank stdout lines.
pub fn fetch_catalog(bin: &str) -> Result<Vec<String>, WrapperError> {
  let out = match Command::new(bin).arg("models").output() {
    Ok(out) => out,
    Err(err) if err.kind() == io::ErrorKind::NotFound => {
      return Err(WrapperError::ToolUnavailable {
        bin: bin.to_string(),
        hint: config::OPENCODE_BIN_ENV.to_string(),
      });
    }
    Err(err) => {
      return Err(WrapperError::CatalogUnavailable {
        bin: bin.to_string(),
        reason: err.to_string(),
      });
    }
  };

  if !out.status.success() {
    let stderr = String::from_utf8_lossy(&out.stderr);
    return Err(WrapperError::CatalogUnavailable {
      bin: bin.to_string(),
      reason: format!("{}: {}", out.status, stderr.trim()),
    });
  }

  let catalog: Vec<String> = String::from_utf8_lossy(&out.stdout)
    .lines()
    .map(|line| line.trim())
    .filter(|line| !line.is_empty())
    .map(|line| line.to_string())
    .collect();

  if catalog.is_empty() {
    return Err(WrapperError::CatalogUnavailable {
      bin: bin.to_string(),
      reason: "no models reported".to_string(),
    });
  }

  Ok(catalog)
}

/// Map a requested name onto exactly one catalog entry.
///
/// Exact match wins outright; a case-insensitive exact match takes the
/// first hit (case-variant duplicates are not flagged); otherwise a
/// case-insensitive substring match must be unique.
pub fn resolve(requested: &str, catalog: &[String]) -> Result<String, WrapperError> {
  if let Some(hit) = catalog.iter().find(|m| m.as_str() == requested) {
    return Ok(hit.clone());
  }

  if let Some(hit) = catalog.iter().find(|m| m.eq_ignore_ascii_case(requested)) {
    return Ok(hit.clone());
  }

  let needle = requested.to_lowercase();
  let matches: Vec<&String> =
    catalog.iter().filter(|m| m.to_lowercase().contains(&needle)).collect();

  match matches.len() {
    0 => Err(WrapperError::ModelNotFound {
      requested: requested.to_string(),
      catalog: catalog.to_vec(),
    }),
    1 => Ok(matches[0].clone()),
    _ => Err(WrapperError::ModelAmbiguous {
      requested: requested.to_string(),
      matches: matches.into_iter().cloned().collect(),
    }),
  }
}
