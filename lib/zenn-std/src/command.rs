use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ZennStdError, ZennStdResult};

/// Splits a command line into words using POSIX shell quoting rules.
///
/// `code --wait` becomes `["code", "--wait"]` and `"my editor" -n` becomes
/// `["my editor", "-n"]`. Fails on unbalanced quotes or an empty line.
pub fn split_command_line(line: &str) -> ZennStdResult<Vec<String>> {
    match shlex::split(line) {
        Some(words) if !words.is_empty() => Ok(words),
        _ => Err(ZennStdError::InvalidCommandLine(line.to_string())),
    }
}

/// Starts `program` with `args` and returns without waiting for it.
///
/// Standard streams are connected to null and on Unix the child is placed in
/// its own process group so it outlives the current process. No handle to
/// the child is kept.
pub fn spawn_detached<I, S>(program: &str, args: I, root: Option<&Path>) -> ZennStdResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(cwd) = root {
        command.current_dir(cwd);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command.spawn()?;
    debug!("spawned {} with pid {}", program, child.id());

    Ok(())
}
