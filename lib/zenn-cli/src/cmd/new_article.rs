use std::ffi::{OsStr, OsString};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use rand::Rng;
use strum::Display;
use tracing::debug;
use zenn_std::command::{spawn_detached, split_command_line};
use zenn_std::error::ZennStdResult;

use crate::emoji::pick_random_emoji;
use crate::messages::{GENERIC_ERROR, INVALID_OPTION, NEW_ARTICLE_HELP_TEXT};
use crate::slug::{generate_slug, slug_error_message, validate_slug};
use crate::{CliResult, ZennCliError};

/// Directory, relative to the working directory, new articles are written to.
pub const ARTICLES_DIR: &str = "articles";

/// Editor used when `EDITOR` is not set.
pub const DEFAULT_EDITOR: &str = "vi";

/// Raw `new:article` arguments.
///
/// Help is handled here rather than by clap so the fixed help text is printed
/// and unknown options can be reported in our own words. A repeated option
/// does not fail, the last occurrence wins.
#[derive(Parser, Debug, Default)]
#[command(
    name = "new:article",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct NewArticleArgs {
    #[arg(long)]
    pub slug: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long = "type")]
    pub article_type: Option<String>,

    #[arg(long)]
    pub emoji: Option<String>,

    #[arg(long)]
    pub published: Option<String>,

    #[arg(long)]
    pub machine_readable: bool,

    #[arg(long)]
    pub edit: bool,

    #[arg(long, short)]
    pub help: bool,

    // tolerated but unused
    #[arg(hide = true)]
    pub positional: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum ArgsError {
    UnknownOption,
    Other,
}

impl ArgsError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownOption => INVALID_OPTION,
            Self::Other => GENERIC_ERROR,
        }
    }
}

pub fn parse_args<I, T>(argv: I) -> Result<NewArticleArgs, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    NewArticleArgs::try_parse_from(argv).map_err(|e| {
        debug!("failed to parse new:article arguments: {e}");
        match e.kind() {
            ErrorKind::UnknownArgument => ArgsError::UnknownOption,
            _ => ArgsError::Other,
        }
    })
}

#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum ArticleType {
    Tech,
    Idea,
}

impl ArticleType {
    /// Only the exact literal `idea` selects [`ArticleType::Idea`]. Anything else is tech.
    pub fn from_literal(value: Option<&str>) -> Self {
        match value {
            Some("idea") => Self::Idea,
            _ => Self::Tech,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArticleOptions {
    pub slug: String,
    pub title: String,
    pub emoji: String,
    pub article_type: ArticleType,
    pub published: bool,
    pub machine_readable: bool,
    pub edit: bool,
}

impl ArticleOptions {
    /// Fills in defaults for anything not supplied. Empty values count as missing.
    pub fn resolve<R: Rng + ?Sized>(args: NewArticleArgs, rng: &mut R) -> Self {
        let slug = args
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| generate_slug(rng));
        let emoji = args
            .emoji
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| pick_random_emoji(rng).to_string());

        Self {
            slug,
            title: args.title.unwrap_or_default(),
            emoji,
            article_type: ArticleType::from_literal(args.article_type.as_deref()),
            published: args.published.as_deref() == Some("true"),
            machine_readable: args.machine_readable,
            edit: args.edit,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }

    /// Path of the article relative to the working directory.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(ARTICLES_DIR).join(self.file_name())
    }

    pub fn front_matter(&self) -> String {
        front_matter(
            &self.title,
            &self.emoji,
            self.article_type,
            self.published,
        )
    }
}

/// Renders the article template. Values are inserted as is, quotes are not escaped.
pub fn front_matter(title: &str, emoji: &str, article_type: ArticleType, published: bool) -> String {
    [
        "---".to_string(),
        format!("title: \"{title}\""),
        format!("emoji: \"{emoji}\""),
        format!("type: \"{article_type}\" # tech: 技術記事 / idea: アイデア"),
        "topics: []".to_string(),
        format!("published: {published}"),
        "---".to_string(),
    ]
    .join("\n")
        + "\n"
}

/// Writes `content` to `path`, failing if the file already exists.
pub fn write_new_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())
}

/// Opens `relative_path` in the editor named by `EDITOR` without waiting for it.
pub fn open_in_editor(cwd: &Path, relative_path: &Path) -> ZennStdResult<()> {
    let editor = zenn_std::env::non_empty_or("EDITOR", DEFAULT_EDITOR);
    let words = split_command_line(&editor)?;
    if let Some((program, args)) = words.split_first() {
        debug!("opening {} with {}", relative_path.display(), editor);
        spawn_detached(
            program,
            args.iter()
                .map(OsStr::new)
                .chain([relative_path.as_os_str()]),
            Some(cwd),
        )?;
    }

    Ok(())
}

/// Runs `new:article` in `cwd` with the raw arguments that followed the subcommand.
///
/// Returns the text to print on stdout. Argument problems and write failures are
/// reported through that text rather than as errors. An invalid slug is an error.
pub fn exec<I, T>(cwd: &Path, argv: I) -> CliResult<Option<String>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    exec_with_rng(cwd, argv, &mut rand::thread_rng())
}

pub fn exec_with_rng<I, T, R>(cwd: &Path, argv: I, rng: &mut R) -> CliResult<Option<String>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: Rng + ?Sized,
{
    let args = match parse_args(argv) {
        Ok(args) => args,
        Err(e) => {
            return Ok(Some(format!(
                "{}\n{}",
                e.message().red(),
                NEW_ARTICLE_HELP_TEXT
            )))
        }
    };

    if args.help {
        return Ok(Some(NEW_ARTICLE_HELP_TEXT.to_string()));
    }

    let options = ArticleOptions::resolve(args, rng);
    debug!("resolved article options {:?}", options);

    if !validate_slug(&options.slug) {
        return Err(ZennCliError::InvalidSlug(slug_error_message(&options.slug)));
    }

    let file_name = options.file_name();
    let relative_path = options.relative_path();
    let path = cwd.join(&relative_path);
    debug!("writing article to {}", path.display());

    if let Err(e) = write_new_file(&path, &options.front_matter()) {
        debug!("failed to write {}: {}", path.display(), e);
        return Ok(Some(format!("{}{}", GENERIC_ERROR.red(), e)));
    }

    let output = if options.machine_readable {
        file_name
    } else {
        format!("📄 {} created.", file_name.green())
    };

    if options.edit {
        if let Err(source) = open_in_editor(cwd, &relative_path) {
            return Err(ZennCliError::EditorLaunch { output, source });
        }
    }

    Ok(Some(output))
}
