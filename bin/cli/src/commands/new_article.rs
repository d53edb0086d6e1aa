use std::env;

use clap::Parser;
use zenn_cli::cmd::new_article;
use zenn_cli::CliResult;

/// 新しい記事を追加
///
/// Arguments are passed through untouched and parsed by the command itself so
/// it can print its own help and error messages.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub(crate) struct NewArticleCommand {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub(crate) fn execute(cmd: NewArticleCommand) -> CliResult<Option<String>> {
    let cwd = env::current_dir()?;
    new_article::exec(&cwd, cmd.args)
}
