pub mod cmd;
pub mod emoji;
pub mod errors;
pub mod messages;
pub mod slug;

pub use crate::errors::{CliResult, ZennCliError};
