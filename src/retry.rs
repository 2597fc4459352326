// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Blocking retry with exponential backoff for fallible actions
// role: retry/backoff
// inputs: A RetryPolicy and a zero-argument action returning Result
// outputs: The action's success value, or its final error unchanged
// side_effects: Hard thread::sleep between attempts; a tracing warning per failed attempt
// invariants:
// - Pause after 1-indexed attempt n is base_delay * 2^(n-1)
// - The final error is propagated as-is, never wrapped
// - No jitter, no cancellation, no concurrent attempts
// errors: Whatever the action returns; this module adds none of its own
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::thread;
use std::time::Duration;

/// Backoff schedule for a retried action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
  /// Total attempts including the first; at least 1.
  pub max_attempts: u32,
  pub base_delay: Duration,
}

impl RetryPolicy {
  /// Pause after the given 1-indexed failed attempt.
  pub fn delay_for(&self, attempt: u32) -> Duration {
    self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
  }
}

/// Run `action` until it succeeds or the attempt budget is spent.
pub fn with_retry<T, E>(
  policy: &RetryPolicy,
  mut action: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
  let mut attempt: u32 = 1;

  loop {
    match action() {
      Ok(value) => return Ok(value),
      Err(err) => {
        if attempt >= policy.max_attempts {
          return Err(err);
        }
        let pause = policy.delay_for(attempt);
        tracing::warn!(
          "attempt {}/{} failed; retrying in {:?}",
          attempt,
          policy.max_attempts,
          pause
        );
        thread::sleep(pause);
        attempt += 1;
      }
    }
  }
}
