//! Synchronous execution of external tools.

use std::ffi::OsStr;
use std::process::Command;
use tracing::{debug, error};

use crate::config::ToolCommand;
use crate::error::{Dll2LibError, Result};

/// Run `tool` with its configured leading arguments followed by `args`,
/// blocking until it exits.
///
/// `label` names the tool in errors and logs. Standard streams are inherited.
pub fn run_tool<I, S>(label: &str, tool: &ToolCommand, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(&tool.program);
    command.args(&tool.args).args(args);
    debug!(tool = label, command = ?command, "spawning");

    let status = command.status().map_err(|source| Dll2LibError::ToolSpawn {
        tool: label.to_string(),
        source,
    })?;

    match status.code() {
        Some(0) => {
            debug!(tool = label, "exited successfully");
            Ok(())
        }
        Some(code) => {
            error!(tool = label, code, "tool failed");
            Err(Dll2LibError::ToolFailed {
                tool: label.to_string(),
                code,
            })
        }
        None => Err(Dll2LibError::ToolTerminated {
            tool: label.to_string(),
        }),
    }
}
