use thiserror::Error;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum ZennStdError {
    /// Command line could not be split into words, typically an unbalanced quote.
    #[error("invalid command line: `{0}`")]
    InvalidCommandLine(String),

    /// Error that may occur while I/O operations.
    #[error("IO error: `{0}`")]
    IoError(#[from] std::io::Error),
}

pub type ZennStdResult<T> = Result<T, ZennStdError>;
