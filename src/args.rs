// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Tokenize a flat argument list into recognized flags plus an ordered passthrough set
// role: cli/tokenizer
// inputs: Raw token vector captured by the binary; the binary's FlagSet
// outputs: ParsedArgs, immutable once built
// side_effects: None
// invariants:
// - Recognized flags accept `--name value` and `--name=value`; the last occurrence wins
// - Unrecognized tokens keep their original order and are never interpreted
// - A recognized flag as the final token with no value is a usage error
// errors: WrapperError::Usage only
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::error::WrapperError;

/// Which flags a binary recognizes; everything else rides passthrough.
#[derive(Debug, Clone, Copy)]
pub struct FlagSet {
  pub model: bool,
  pub prompt: bool,
  pub repo: bool,
  /// The change-number flag, `--pr` or `--mr`.
  pub change: Option<&'static str>,
}

impl FlagSet {
  pub fn chat() -> Self {
    FlagSet { model: true, prompt: true, repo: false, change: None }
  }

  pub fn github_summary() -> Self {
    FlagSet { model: false, prompt: false, repo: true, change: Some("--pr") }
  }

  pub fn gitlab_summary() -> Self {
    FlagSet { model: false, prompt: false, repo: true, change: Some("--mr") }
  }
}

/// One invocation's arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
  pub model: Option<String>,
  pub prompt: Option<String>,
  pub repo: Option<String>,
  pub number: Option<String>,
  pub help: bool,
  pub passthrough: Vec<String>,
}

pub fn parse(tokens: Vec<String>, flags: &FlagSet) -> Result<ParsedArgs, WrapperError> {
  let mut out = ParsedArgs::default();
  let mut it = tokens.into_iter();

  while let Some(tok) = it.next() {
    if tok == "--help" || tok == "-h" {
      out.help = true;
      continue;
    }
    if flags.model {
      if let Some(v) = take_value("--model", &tok, &mut it)? {
        out.model = Some(v);
        continue;
      }
    }
    if flags.prompt {
      if let Some(v) = take_value("--prompt", &tok, &mut it)? {
        out.prompt = Some(v);
        continue;
      }
      if let Some(v) = take_value("-p", &tok, &mut it)? {
        out.prompt = Some(v);
        continue;
      }
    }
    if flags.repo {
      if let Some(v) = take_value("--repo", &tok, &mut it)? {
        out.repo = Some(v);
        continue;
      }
    }
    if let Some(name) = flags.change {
      if let Some(v) = take_value(name, &tok, &mut it)? {
        out.number = Some(v);
        continue;
      }
    }
    out.passthrough.push(tok);
  }

  Ok(out)
}

/// The summarizers' change number: required, numeric, positive.
pub fn require_change_number(value: Option<&str>, flag: &str) -> Result<u64, WrapperError> {
  let raw = value.ok_or_else(|| WrapperError::Usage(format!("{} NUMBER is required", flag)))?;

  match raw.parse::<u64>() {
    Ok(n) if n > 0 => Ok(n),
    _ => Err(WrapperError::Usage(format!("{} must be a positive integer, got '{}'", flag, raw))),
  }
}

/// Match `--name value` / `--name=value`; Ok(None) when `tok` is some
/// other token entirely.
fn take_value(
  name: &str,
  tok: &str,
  rest: &mut impl Iterator<Item = String>,
) -> Result<Option<String>, WrapperError> {
  if tok == name {
    return match rest.next() {
      Some(v) => Ok(Some(v)),
      None => Err(WrapperError::Usage(format!("{} requires a value", name))),
    };
  }

  if let Some(v) = tok.strip_prefix(name).and_then(|rem| rem.strip_prefix('=')) {
    return Ok(Some(v.to_string()));
  }

  Ok(None)
}
