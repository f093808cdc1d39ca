//! Granting execute permission to a key server binary through the host's elevation prompt.

use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::KeyBridgeError;
use crate::KeyBridgeResult;

/// Makes a key server executable so that a failed launch can be retried.
#[async_trait]
pub trait PermissionGranter: Send + Sync {
    async fn grant_execute(&self, path: &Path, app_name: &str) -> KeyBridgeResult<()>;
}

/// Runs `chmod +x` through `pkexec` on Linux and an administrator `osascript` prompt on macOS.
///
/// When the process already runs as root the command is run directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SudoPrompt;

#[async_trait]
impl PermissionGranter for SudoPrompt {
    async fn grant_execute(&self, path: &Path, app_name: &str) -> KeyBridgeResult<()> {
        let mut command = chmod_command(path, app_name)?;
        debug!(?command, "requesting execute permission");

        check_output(command.output().await?)
    }
}

fn chmod_command(path: &Path, app_name: &str) -> KeyBridgeResult<Command> {
    if is_root() {
        let mut command = Command::new("chmod");
        command.arg("+x").arg(path);
        return Ok(command);
    }

    if cfg!(target_os = "macos") {
        let script = format!(
            "do shell script \"chmod +x \" & quoted form of \"{}\" with administrator privileges with prompt \"{} needs permission to run its key server.\"",
            applescript_escape(&path.to_string_lossy()),
            applescript_escape(app_name),
        );
        let mut command = Command::new("osascript");
        command.arg("-e").arg(script);
        Ok(command)
    } else if cfg!(unix) {
        let mut command = Command::new("pkexec");
        command.arg("chmod").arg("+x").arg(path);
        Ok(command)
    } else {
        Err(KeyBridgeError::PermissionGrant(
            "privilege elevation is not supported on this platform".into(),
        ))
    }
}

fn check_output(output: Output) -> KeyBridgeResult<()> {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    if !output.status.success() {
        return Err(KeyBridgeError::PermissionGrant(if stderr.is_empty() {
            format!("elevated command failed with {}", output.status)
        } else {
            stderr.to_owned()
        }));
    }

    // Some prompts report a refusal on stderr with a successful status.
    if !stderr.is_empty() {
        return Err(KeyBridgeError::PermissionGrant(stderr.to_owned()));
    }

    Ok(())
}

fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(unix)]
fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn is_root() -> bool {
    false
}
