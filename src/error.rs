use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyBridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to launch key server {}: {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to grant execute permission: {0}")]
    PermissionGrant(String),
    #[error("no key server backend for this platform")]
    UnsupportedPlatform,
    #[error("malformed line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },
    #[error("line exceeds {0} bytes without a newline")]
    LineTooLong(usize),
}

impl KeyBridgeError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line: line.to_owned(),
            reason: reason.into(),
        }
    }
}
