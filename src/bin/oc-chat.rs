use clap::Parser;

use opencode_wrappers::args::{self, FlagSet};
use opencode_wrappers::error::{self, WrapperError};
use opencode_wrappers::{config, invoke, models, prompt};

const USAGE: &str = "\
oc-chat — chat through opencode with forgiving model names

Usage: oc-chat [--model NAME] [--prompt TEXT | -p TEXT] [opencode flags...]

The prompt is read from stdin when --prompt is absent. --model accepts
an exact id, a case-insensitive id, or a unique substring of an id from
`opencode models`. Flags oc-chat does not recognize are forwarded to
`opencode run` unchanged.

Environment:
  OPENCODE_BIN    chat CLI to invoke (default: opencode)
  OPENCODE_MODEL  model used when --model is absent
";

#[derive(Parser)]
#[command(name = "oc-chat", disable_help_flag = true, disable_version_flag = true)]
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
  let parsed = args::parse(tokens, &FlagSet::chat())?;

  if parsed.help {
    print!("{}", USAGE);
    return Ok(error::exit::SUCCESS);
  }

  let bin = config::opencode_bin();
  let catalog = models::fetch_catalog(&bin)?;
  let requested = parsed
    .model
    .or_else(|| config::non_empty_env(config::DEFAULT_MODEL_ENV))
    .unwrap_or_else(|| config::DEFAULT_MODEL.to_string());
  let model = models::resolve(&requested, &catalog)?;

  let prompt_text = prompt::acquire_prompt(parsed.prompt)?;

  let mut child_args = vec!["run".to_string(), "--model".to_string(), model];
  child_args.extend(parsed.passthrough);

  invoke::run_with_prompt(&bin, &child_args, &prompt_text)
}
