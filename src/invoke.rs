// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Spawn the wrapped CLI with the prompt on stdin and hand back its exit code
// role: process/invocation
// inputs: Binary name, argument vector, assembled prompt text
// outputs: The child's exit code, for verbatim forwarding by the caller
// side_effects: Spawns a child process; its stdout/stderr stream through inherited
// invariants:
// - The prompt travels over the child's stdin only; nothing is buffered or transformed
// - A child that started and exited owns the verdict; only failure to start/await maps to Execution
// errors: Execution (spawn failure, wait failure, signal death)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::WrapperError;

/// Spawn `bin` with `args`, write `prompt` to its stdin, stream its
/// output through, and return its exit code.
pub fn run_with_prompt(bin: &str, args: &[String], prompt: &str) -> Result<i32, WrapperError> {
  tracing::debug!("invoking {} {:?}", bin, args);

  let mut child = Command::new(bin)
    .args(args)
    .stdin(Stdio::piped())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .spawn()
    .map_err(|err| WrapperError::Execution { bin: bin.to_string(), reason: err.to_string() })?;

  if let Some(mut stdin) = child.stdin.take() {
    // the child may exit before reading; its wait status is authoritative
    if let Err(err) = stdin.write_all(prompt.as_bytes()) {
      tracing::debug!("writing prompt to {} stdin failed: {}", bin, err);
    }
  }

  let status = child
    .wait()
    .map_err(|err| WrapperError::Execution { bin: bin.to_string(), reason: err.to_string() })?;

  match status.code() {
    Some(code) => Ok(code),
    None => Err(WrapperError::Execution {
      bin: bin.to_string(),
      reason: "terminated by signal".to_string(),
    }),
  }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
  use super::*;
  use std::os::unix::fs::PermissionsExt;
  use std::path::{Path, PathBuf};

  fn stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("child-stub");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
  }

  #[test]
  fn child_exit_code_comes_back_verbatim() {
    let dir = tempfile::TempDir::new().unwrap();
    let bin = stub(dir.path(), "cat - > /dev/null; exit 42");
    let code = run_with_prompt(bin.to_str().unwrap(), &[], "ignored").unwrap();
    assert_eq!(code, 42);
  }

  #[test]
  fn prompt_reaches_the_child_stdin() {
    let dir = tempfile::TempDir::new().unwrap();
    let sink = dir.path().join("captured");
    let bin = stub(dir.path(), &format!("cat - > '{}'", sink.display()));

    let code = run_with_prompt(bin.to_str().unwrap(), &[], "prompt body\n").unwrap();

    assert_eq!(code, 0);
    assert_eq!(std::fs::read_to_string(&sink).unwrap(), "prompt body\n");
  }

  #[test]
  fn args_are_forwarded_in_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let sink = dir.path().join("argv");
    let bin = stub(dir.path(), &format!("echo \"$@\" > '{}'; cat - > /dev/null", sink.display()));

    let args = vec!["--model".to_string(), "m".to_string(), "--verbose".to_string()];
    run_with_prompt(bin.to_str().unwrap(), &args, "x").unwrap();

    assert_eq!(std::fs::read_to_string(&sink).unwrap().trim(), "--model m --verbose");
  }

  #[test]
  fn spawn_failure_is_an_execution_error() {
    let err = run_with_prompt("/nonexistent/oc-test-child", &[], "x").unwrap_err();
    assert_eq!(err.exit_code(), crate::error::exit::EXECUTION);
  }

  #[test]
  fn early_child_exit_does_not_mask_its_status() {
    let dir = tempfile::TempDir::new().unwrap();
    // exits without reading stdin; the wrapper must report 3, not a pipe error
    let bin = stub(dir.path(), "exit 3");
    let big_prompt = "x".repeat(1 << 20);
    let code = run_with_prompt(bin.to_str().unwrap(), &[], &big_prompt).unwrap();
    assert_eq!(code, 3);
  }
}
