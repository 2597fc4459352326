use clap::Parser;

use opencode_wrappers::args::{self, FlagSet};
use opencode_wrappers::diff::{self, DiffRequest, Provider};
use opencode_wrappers::error::{self, WrapperError};
use opencode_wrappers::{config, invoke, prompt};

const USAGE: &str = "\
oc-mr-summary — summarize a GitLab merge request with opencode

Usage: oc-mr-summary --repo PROJECT_ID --mr NUMBER [oc-chat flags...]

PROJECT_ID is the numeric project id or an already URL-encoded path
(group%2Fproject). The merge request diff is fetched (authenticated
when GITLAB_TOKEN is set), wrapped in the mr-summary template, and
piped to oc-chat. Flags this tool does not recognize (e.g. --model)
are forwarded to oc-chat unchanged.
";

#[derive(Parser)]
#[command(name = "oc-mr-summary", disable_help_flag = true, disable_version_flag = true)]
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
  let parsed = args::parse(tokens, &FlagSet::gitlab_summary())?;

  if parsed.help {
    print!("{}", USAGE);
    return Ok(error::exit::SUCCESS);
  }

  let repo = parsed
    .repo
    .ok_or_else(|| WrapperError::Usage("--repo PROJECT_ID is required".to_string()))?;
  diff::validate_repo(Provider::GitLab, &repo)?;
  let number = args::require_change_number(parsed.number.as_deref(), "--mr")?;

  // local failures first; no network traffic for a missing template
  let template = prompt::load_template(config::MR_TEMPLATE)?;

  let request = DiffRequest::from_env(Provider::GitLab, repo, number);
  let diff_text = diff::fetch_diff(&request, &config::FETCH_RETRY)?;
  let prompt_text = prompt::assemble(&template, &diff_text);

  invoke::run_with_prompt(&config::chat_bin(), &parsed.passthrough, &prompt_text)
}
