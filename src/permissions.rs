//! Whether the key server is likely to be allowed to capture input, and how to fix it if not.
//!
//! The probe is informational: [`KeyBridge`](crate::KeyBridge) never calls it.

use tokio::process::Command;
use tracing::debug;

use crate::backend::Platform;

const MAC_PROBE: &str = r#"
tell application "System Events"
    try
        set frontApp to name of first application process whose frontmost is true
        return true
    on error
        return false
    end try
end tell
"#;

const MAC_INSTRUCTIONS: &str = "\
macOS Accessibility permission required:
1. Open System Settings > Privacy & Security > Accessibility
2. Unlock the pane if needed
3. Add the terminal or application running the key bridge
4. Make sure its checkbox is enabled
5. Restart that application and try again
";

const X11_INSTRUCTIONS: &str = "\
X11 display access required:
1. Make sure you are running an X11 session, not Wayland
2. Make sure your user can open the display named by $DISPLAY
3. Try running: xhost +local:
4. Over SSH, enable X11 forwarding with ssh -X
";

const WINDOWS_INSTRUCTIONS: &str = "\
Windows:
1. Try running the terminal as Administrator
2. Some antivirus software blocks low-level keyboard hooks; allow the key server if needed
";

/// Probe the current platform. Unsupported platforms report `false`.
pub async fn check_permissions() -> bool {
    match Platform::current() {
        Some(platform) => check(platform).await,
        None => false,
    }
}

/// Probe `platform`'s input capture permission by running its native check.
pub async fn check(platform: Platform) -> bool {
    let granted = match platform {
        Platform::Mac => probe("osascript", &["-e", MAC_PROBE], |out| out.trim() == "true").await,
        Platform::X11 => {
            let display = std::env::var("DISPLAY").unwrap_or_else(|_| ":0".to_owned());
            probe("xdpyinfo", &["-display", display.as_str()], |out| out.contains("screen #0")).await
        }
        // User-level hooks work without elevation.
        Platform::Windows => true,
    };

    debug!(?platform, granted, "permission probe");
    granted
}

async fn probe(program: &str, args: &[&str], granted: impl FnOnce(&str) -> bool) -> bool {
    match Command::new(program).args(args).output().await {
        Ok(output) if output.status.success() => granted(&String::from_utf8_lossy(&output.stdout)),
        Ok(output) => {
            debug!(program, status = %output.status, "permission probe failed");
            false
        }
        Err(err) => {
            debug!(program, error = %err, "permission probe could not run");
            false
        }
    }
}

/// Remediation steps for the current platform.
pub fn instructions() -> &'static str {
    Platform::current().map_or("Platform not supported", instructions_for)
}

pub fn instructions_for(platform: Platform) -> &'static str {
    match platform {
        Platform::Mac => MAC_INSTRUCTIONS,
        Platform::X11 => X11_INSTRUCTIONS,
        Platform::Windows => WINDOWS_INSTRUCTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn windows_needs_no_probe() {
        assert!(check(Platform::Windows).await);
    }

    #[tokio::test]
    async fn a_missing_probe_program_means_not_granted() {
        assert!(!probe("/nonexistent/probe", &[], |_| true).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn probe_output_is_inspected() {
        assert!(probe("sh", &["-c", "echo 'screen #0:'"], |out| out.contains("screen #0")).await);
        assert!(!probe("sh", &["-c", "echo false"], |out| out.trim() == "true").await);
        assert!(!probe("sh", &["-c", "exit 1"], |_| true).await);
    }

    #[test]
    fn every_platform_has_instructions() {
        for platform in [Platform::Windows, Platform::X11, Platform::Mac] {
            assert!(!instructions_for(platform).is_empty());
        }
        assert!(instructions_for(Platform::X11).contains("xhost"));
    }
}
