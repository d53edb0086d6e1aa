use thiserror::Error;
use zenn_std::error::ZennStdError;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum ZennCliError {
    /// The article was written but the editor could not be started. `output` is
    /// what the command would have printed had the launch succeeded.
    #[error("{source}")]
    EditorLaunch {
        output: String,
        #[source]
        source: ZennStdError,
    },

    /// Slug did not pass validation. Holds the user facing explanation.
    #[error("{0}")]
    InvalidSlug(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ZennCliError {
    /// Text that should still reach stdout even though the command failed.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::EditorLaunch { output, .. } => Some(output.as_str()),
            _ => None,
        }
    }
}

pub type CliResult<T> = Result<T, ZennCliError>;
