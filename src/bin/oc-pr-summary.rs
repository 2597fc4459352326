use clap::Parser;

use opencode_wrappers::args::{self, FlagSet};
use opencode_wrappers::diff::{self, DiffRequest, Provider};
use opencode_wrappers::error::{self, WrapperError};
use opencode_wrappers::{config, invoke, prompt};

const USAGE: &str = "\
oc-pr-summary — summarize a GitHub pull request with opencode

Usage: oc-pr-summary --repo OWNER/NAME --pr NUMBER [oc-chat flags...]

Fetches the pull request diff (authenticated when GITHUB_TOKEN is set),
wraps it in the pr-summary template, and pipes the result to oc-chat.
Flags this tool does not recognize (e.g. --model) are forwarded to
oc-chat unchanged.
";

#[derive(Parser)]
#[command(name = "oc-pr-summary", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
  /// Raw tokens; the tokenizer owns the grammar.
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  args: Vec<String>,
}

fn main() {
  opencode_wrappers::init_tracing();
  let cli = Cli::parse();

  match run(cli.args) {
    Ok(code) => std::process::exit(code),
    Err(err) => error::fail(err),
  }
}

fn run(tokens: Vec<String>) -> Result<i32, WrapperError> {
  let parsed = args::parse(tokens, &FlagSet::github_summary())?;

  if parsed.help {
    print!("{}", USAGE);
    return Ok(error::exit::SUCCESS);
  }

  let repo = parsed
    .repo
    .ok_or_else(|| WrapperError::Usage("--repo OWNER/NAME is required".to_string()))?;
  diff::validate_repo(Provider::GitHub, &repo)?;
  let number = args::require_change_number(parsed.number.as_deref(), "--pr")?;

  // local failures first; no network traffic for a missing template
  let template = prompt::load_template(config::PR_TEMPLATE)?;

  let request = DiffRequest::from_env(Provider::GitHub, repo, number);
  let diff_text = diff::fetch_diff(&request, &config::FETCH_RETRY)?;
  let prompt_text = prompt::assemble(&template, &diff_text);

  invoke::run_with_prompt(&config::chat_bin(), &parsed.passthrough, &prompt_text)
}
