use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use zenn_cli::messages::ERROR_PREFIX;

use crate::commands::{new_article, Command, Opt};

mod commands;

fn main() {
    let opt = Opt::parse();

    let tracing_level = if opt.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match opt.cmd {
        Command::NewArticle(cmd) => new_article::execute(cmd),
    };

    match result {
        Ok(output) => {
            if let Some(output) = output {
                println!("{output}");
            }
        }
        Err(e) => {
            if let Some(output) = e.output() {
                println!("{output}");
            }
            debug!("{e:?}");
            eprintln!("{}", format!("{ERROR_PREFIX}{e}").red());
            std::process::exit(1);
        }
    };
}
