//! Fixed configuration handed explicitly into the components. Values are
//! read once per invocation; nothing here is mutable process state.

use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Chat CLI binary; the env var exists for stub environments and tests.
pub const OPENCODE_BIN_ENV: &str = "OPENCODE_BIN";
pub const DEFAULT_OPENCODE_BIN: &str = "opencode";

/// Model used when `--model` is absent.
pub const DEFAULT_MODEL_ENV: &str = "OPENCODE_MODEL";
pub const DEFAULT_MODEL: &str = "github-copilot/gpt-5";

/// The sibling chat wrapper the summarizers delegate to.
pub const CHAT_BIN_ENV: &str = "OC_CHAT_BIN";
pub const CHAT_BIN: &str = "oc-chat";

pub const TEMPLATE_DIR_ENV: &str = "OC_TEMPLATE_DIR";
pub const PR_TEMPLATE: &str = "pr-summary.md";
pub const MR_TEMPLATE: &str = "mr-summary.md";

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITLAB_TOKEN_ENV: &str = "GITLAB_TOKEN";

/// Diff fetch schedule: three attempts with 1s/2s pauses between them.
pub const FETCH_RETRY: RetryPolicy =
  RetryPolicy { max_attempts: 3, base_delay: Duration::from_secs(1) };

pub fn opencode_bin() -> String {
  non_empty_env(OPENCODE_BIN_ENV).unwrap_or_else(|| DEFAULT_OPENCODE_BIN.to_string())
}

/// Resolve the chat wrapper binary: env override, then the binary next
/// to the current executable, then a bare PATH lookup by name.
pub fn chat_bin() -> String {
  if let Some(bin) = non_empty_env(CHAT_BIN_ENV) {
    return bin;
  }

  if let Ok(exe) = std::env::current_exe() {
    if let Some(dir) = exe.parent() {
      let sibling: PathBuf = dir.join(format!("{}{}", CHAT_BIN, std::env::consts::EXE_SUFFIX));
      if sibling.is_file() {
        return sibling.to_string_lossy().to_string();
      }
    }
  }

  CHAT_BIN.to_string()
}

/// Env lookup where a blank value counts as unset.
pub fn non_empty_env(name: &str) -> Option<String> {
  std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
