// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Load prompt templates, acquire the chat prompt, and fence diffs into an assembled prompt
// role: prompt/assembly
// inputs: Template name + OC_TEMPLATE_DIR or the executable's templates/ dir; --prompt value or piped stdin
// outputs: Assembled prompt text passed once, by value, to the invoker
// side_effects: Reads the template file; may read stdin to EOF
// invariants:
// - assemble is pure: trailing-trimmed template, blank line, <GIT_DIFF> fence, trailing-trimmed diff
// - An interactive stdin with no --prompt is a usage problem, not an empty prompt
// errors: PromptFileMissing, PromptAcquisition, Usage
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use crate::config;
use crate::error::WrapperError;

/// Template text, a blank line, then the diff fenced in GIT_DIFF
/// markers. Outer whitespace is trimmed; the diff interior is kept
/// byte for byte.
pub fn assemble(template: &str, diff: &str) -> String {
  format!("{}\n\n<GIT_DIFF>\n{}\n</GIT_DIFF>", template.trim_end(), diff.trim_end())
}

/// Where templates live: OC_TEMPLATE_DIR when set, else `templates/`
/// next to the current executable.
pub fn template_dir() -> Option<PathBuf> {
  if let Some(dir) = config::non_empty_env(config::TEMPLATE_DIR_ENV) {
    return Some(PathBuf::from(dir));
  }

  let exe = std::env::current_exe().ok()?;
  Some(exe.parent()?.join("templates"))
}

pub fn load_template(name: &str) -> Result<String, WrapperError> {
  let path = match template_dir() {
    Some(dir) => dir.join(name),
    None => PathBuf::from(name),
  };

  std::fs::read_to_string(&path)
    .map_err(|source| WrapperError::PromptFileMissing { path, source })
}

/// The chat prompt: the --prompt value when present, else piped stdin.
pub fn acquire_prompt(flag_value: Option<String>) -> Result<String, WrapperError> {
  let text = match flag_value {
    Some(text) => text,
    None => {
      if std::io::stdin().is_terminal() {
        return Err(WrapperError::Usage(
          "no prompt given; pass --prompt/-p TEXT or pipe the prompt on stdin".to_string(),
        ));
      }
      let mut buf = String::new();
      std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|err| WrapperError::PromptAcquisition(format!("reading stdin failed: {}", err)))?;
      buf
    }
  };

  if text.trim().is_empty() {
    return Err(WrapperError::PromptAcquisition("the prompt is empty".to_string()));
  }

  Ok(text)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  fn assemble_fences_the_diff() {
    let out = assemble("Summarize this.\n\n", "diff --git a/x b/x\n+line\n");
    assert_eq!(out, "Summarize this.\n\n<GIT_DIFF>\ndiff --git a/x b/x\n+line\n</GIT_DIFF>");
  }

  #[test]
  fn assemble_always_ends_with_the_closing_marker() {
    assert!(assemble("", "").ends_with("</GIT_DIFF>"));
    assert!(assemble("t", "d\n\n\n").ends_with("\nd\n</GIT_DIFF>"));
  }

  #[test]
  fn interior_diff_whitespace_survives() {
    let diff = "line one\n\n    indented\nline two";
    let out = assemble("tpl", diff);
    assert!(out.contains("line one\n\n    indented\nline two"));
  }

  #[test]
  #[serial]
  fn template_dir_env_override_wins() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("pr-summary.md"), "from override").unwrap();
    std::env::set_var(config::TEMPLATE_DIR_ENV, dir.path());

    assert_eq!(load_template("pr-summary.md").unwrap(), "from override");

    std::env::remove_var(config::TEMPLATE_DIR_ENV);
  }

  #[test]
  #[serial]
  fn missing_template_names_the_path() {
    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var(config::TEMPLATE_DIR_ENV, dir.path());

    let err = load_template("pr-summary.md").unwrap_err();
    assert_eq!(err.exit_code(), crate::error::exit::PROMPT_FILE_MISSING);
    assert!(err.to_string().contains("pr-summary.md"));

    std::env::remove_var(config::TEMPLATE_DIR_ENV);
  }

  #[test]
  fn flag_prompt_is_used_as_is() {
    assert_eq!(acquire_prompt(Some("hello".into())).unwrap(), "hello");
  }

  #[test]
  fn blank_flag_prompt_is_an_acquisition_error() {
    let err = acquire_prompt(Some("   \n".into())).unwrap_err();
    assert_eq!(err.exit_code(), crate::error::exit::PROMPT_ACQUISITION);
  }
}
