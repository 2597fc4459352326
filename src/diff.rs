// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build provider diff URLs and fetch diff text over HTTP with retry
// role: network/diff-fetch
// inputs: Provider, repo identifier, change number; optional token from the provider env var
// outputs: Raw unified diff text
// side_effects: Blocking HTTP GETs to github.com / gitlab.com; backoff sleeps between attempts
// invariants:
// - Token absence is not an error; the request goes out unauthenticated
// - Transport and HTTP-status failures are retried; an empty body on success is final
// - No wrapper-imposed timeout; the request runs to completion
// errors: Usage (repo shape), Network (retries exhausted), EmptyDiff
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Read;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;
use crate::error::WrapperError;
use crate::retry::{with_retry, RetryPolicy};

const USER_AGENT: &str = "opencode-wrappers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
  GitHub,
  GitLab,
}

impl Provider {
  pub fn token_env(self) -> &'static str {
    match self {
      Provider::GitHub => config::GITHUB_TOKEN_ENV,
      Provider::GitLab => config::GITLAB_TOKEN_ENV,
    }
  }

  fn auth_header(self, token: &str) -> (&'static str, String) {
    match self {
      Provider::GitHub => ("Authorization", format!("token {}", token)),
      Provider::GitLab => ("PRIVATE-TOKEN", token.to_string()),
    }
  }
}

/// One pull/merge request's diff location; consumed once by fetch_diff.
#[derive(Debug)]
pub struct DiffRequest {
  pub provider: Provider,
  pub repo: String,
  pub number: u64,
  pub token: Option<String>,
}

impl DiffRequest {
  /// The token comes from the provider's environment variable, read
  /// once here; blank values count as absent.
  pub fn from_env(provider: Provider, repo: String, number: u64) -> Self {
    let token = config::non_empty_env(provider.token_env());
    DiffRequest { provider, repo, number, token }
  }

  pub fn url(&self) -> String {
    match self.provider {
      Provider::GitHub => format!("https://github.com/{}/pull/{}.diff", self.repo, self.number),
      Provider::GitLab => format!(
        "https://gitlab.com/api/v4/projects/{}/merge_requests/{}/raw_diffs",
        self.repo, self.number
      ),
    }
  }
}

static RE_GITHUB_REPO: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").unwrap());

/// GitHub repos must look like OWNER/NAME. GitLab identifiers are opaque
/// (numeric id or an already URL-encoded path) and only need substance.
pub fn validate_repo(provider: Provider, repo: &str) -> Result<(), WrapperError> {
  match provider {
    Provider::GitHub if !RE_GITHUB_REPO.is_match(repo) => Err(WrapperError::Usage(format!(
      "--repo must look like OWNER/NAME, got '{}'",
      repo
    ))),
    Provider::GitLab if repo.trim().is_empty() => {
      Err(WrapperError::Usage("--repo must be a GitLab project id".to_string()))
    }
    _ => Ok(()),
  }
}

/// GET the diff, retrying request failures on the given schedule. An
/// empty body from a successful response is rejected without retrying.
pub fn fetch_diff(req: &DiffRequest, policy: &RetryPolicy) -> Result<String, WrapperError> {
  let url = req.url();
  tracing::debug!("fetching {}", url);

  let body = with_retry(policy, || attempt_fetch(req, &url)).map_err(|reason| {
    WrapperError::Network { url: url.clone(), attempts: policy.max_attempts, reason }
  })?;

  if body.trim().is_empty() {
    return Err(WrapperError::EmptyDiff { url });
  }

  Ok(body)
}

fn attempt_fetch(req: &DiffRequest, url: &str) -> Result<String, String> {
  let mut call = ureq::get(url).set("User-Agent", USER_AGENT);

  if let Some(token) = &req.token {
    let (name, value) = req.provider.auth_header(token);
    call = call.set(name, &value);
  }

  let resp = match call.call() {
    Ok(resp) => resp,
    Err(ureq::Error::Status(code, _)) => return Err(format!("HTTP {}", code)),
    Err(err) => return Err(err.to_string()),
  };

  let mut body = String::new();
  resp
    .into_reader()
    .read_to_string(&mut body)
    .map_err(|err| format!("reading response body: {}", err))?;

  Ok(body)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  fn github_url_shape() {
    let req = DiffRequest {
      provider: Provider::GitHub,
      repo: "octocat/hello".into(),
      number: 42,
      token: None,
    };
    assert_eq!(req.url(), "https://github.com/octocat/hello/pull/42.diff");
  }

  #[test]
  fn gitlab_url_shape() {
    let req =
      DiffRequest { provider: Provider::GitLab, repo: "12345".into(), number: 7, token: None };
    assert_eq!(
      req.url(),
      "https://gitlab.com/api/v4/projects/12345/merge_requests/7/raw_diffs"
    );
  }

  #[test]
  fn encoded_gitlab_paths_pass_through_verbatim() {
    let req = DiffRequest {
      provider: Provider::GitLab,
      repo: "group%2Fproject".into(),
      number: 3,
      token: None,
    };
    assert!(req.url().contains("/projects/group%2Fproject/"));
  }

  #[test]
  fn auth_headers_differ_per_provider() {
    assert_eq!(
      Provider::GitHub.auth_header("tok"),
      ("Authorization", "token tok".to_string())
    );
    assert_eq!(Provider::GitLab.auth_header("tok"), ("PRIVATE-TOKEN", "tok".to_string()));
  }

  #[test]
  fn github_repo_shape_is_enforced() {
    assert!(validate_repo(Provider::GitHub, "octocat/hello").is_ok());
    assert!(validate_repo(Provider::GitHub, "octocat/hello.world-2").is_ok());
    assert!(validate_repo(Provider::GitHub, "just-a-name").is_err());
    assert!(validate_repo(Provider::GitHub, "a/b/c").is_err());
    assert!(validate_repo(Provider::GitHub, "").is_err());
  }

  #[test]
  fn gitlab_repo_only_needs_substance() {
    assert!(validate_repo(Provider::GitLab, "12345").is_ok());
    assert!(validate_repo(Provider::GitLab, "group%2Fproject").is_ok());
    assert!(validate_repo(Provider::GitLab, "  ").is_err());
  }

  #[test]
  #[serial]
  fn token_env_flows_into_the_request() {
    std::env::set_var(config::GITHUB_TOKEN_ENV, "ghp_test");
    let req = DiffRequest::from_env(Provider::GitHub, "octocat/hello".into(), 1);
    assert_eq!(req.token.as_deref(), Some("ghp_test"));
    std::env::remove_var(config::GITHUB_TOKEN_ENV);
  }

  #[test]
  #[serial]
  fn missing_token_leaves_the_request_unauthenticated() {
    std::env::remove_var(config::GITHUB_TOKEN_ENV);
    let req = DiffRequest::from_env(Provider::GitHub, "octocat/hello".into(), 42);
    assert_eq!(req.token, None);
  }
}
