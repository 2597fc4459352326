//! Wrapper tooling for the `opencode` chat CLI: a model-resolving chat
//! front end (`oc-chat`) plus GitHub/GitLab diff summarizers
//! (`oc-pr-summary`, `oc-mr-summary`).

pub mod args;
pub mod config;
pub mod diff;
pub mod error;
pub mod invoke;
pub mod models;
pub mod prompt;
pub mod retry;

/// Install the stderr diagnostics subscriber shared by the binaries.
/// `RUST_LOG` overrides the WARN default.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
    )
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}
