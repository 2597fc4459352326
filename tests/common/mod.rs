use std::path::{Path, PathBuf};

/// Write an executable shell stub and return its path.
#[cfg(unix)]
#[allow(dead_code)]
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.join(name);
  std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();

  let mut perms = std::fs::metadata(&path).unwrap().permissions();
  perms.set_mode(0o755);
  std::fs::set_permissions(&path, perms).unwrap();

  path
}

/// A fake opencode: `models` prints the given catalog, `run` echoes its
/// remaining arguments and then its stdin so tests can assert both.
#[cfg(unix)]
#[allow(dead_code)]
pub fn stub_opencode(dir: &Path, models: &[&str]) -> PathBuf {
  let mut echoes = String::new();
  for model in models {
    echoes.push_str(&format!("    echo '{}'\n", model));
  }

  let body = format!(
    "case \"$1\" in\n  models)\n{}    ;;\n  run)\n    shift\n    echo \"args: $@\"\n    cat -\n    ;;\nesac",
    echoes
  );

  write_stub(dir, "opencode", &body)
}
