use clap::{Parser, Subcommand};

use crate::commands::new_article::NewArticleCommand;

pub mod new_article;

#[derive(Debug, Parser)]
#[command(name = "zenn", version)]
pub struct Opt {
    #[arg(long, help = "Prints a verbose output during the program execution")]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "new:article")]
    NewArticle(NewArticleCommand),
}
