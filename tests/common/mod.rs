#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use keybridge::{BackendConfig, BackendProfile, ExitReason};

/// Echoes every acknowledgement the bridge writes back to stderr as `ack:<line>`.
pub const ECHO_ACKS: &str = r#"while IFS= read -r ack; do echo "ack:$ack" >&2; done"#;

/// A backend running `script` under `sh -c`.
pub fn script_backend(profile: BackendProfile, script: &str) -> (BackendProfile, BackendConfig) {
    let config = BackendConfig::default()
        .with_server_path("sh")
        .with_server_args(["-c", script]);

    (profile, config)
}

/// Collects the key server's stderr lines and its unsolicited exits.
#[derive(Clone, Default)]
pub struct Recorder {
    pub info: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<ExitReason>>>,
}

impl Recorder {
    pub fn attach(&self, config: BackendConfig) -> BackendConfig {
        let info = Arc::clone(&self.info);
        let errors = Arc::clone(&self.errors);

        config
            .on_info(move |line| info.lock().unwrap().push(line.to_owned()))
            .on_error(move |reason| errors.lock().unwrap().push(reason))
    }

    pub fn acks(&self) -> Vec<String> {
        self.info
            .lock()
            .unwrap()
            .iter()
            .filter_map(|line| line.strip_prefix("ack:").map(str::to_owned))
            .collect()
    }

    pub fn errors(&self) -> Vec<ExitReason> {
        self.errors.lock().unwrap().clone()
    }
}

/// Poll `condition` until it holds, panicking after five seconds.
pub async fn eventually(what: &str, mut condition: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);

    while !condition() {
        if tokio::time::Instant::now() > deadline {
            panic!("timed out waiting for {what}");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
