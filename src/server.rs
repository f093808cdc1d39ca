//! Supervision of one native key server process.
//!
//! ```text
//! Idle -> Starting -> Running -> Stopped
//!            |                     ^
//!            +-> Restarting -------+ (execute permission granted, then relaunched)
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::{SinkExt, StreamExt};
use tokio::process::{Child, ChildStderr, ChildStdin, ChildStdout, Command};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, error, info, warn};

use crate::backend::BackendProfile;
use crate::config::{BackendConfig, ErrorCallback, InfoCallback};
use crate::dispatch::Dispatcher;
use crate::elevate::{PermissionGranter, SudoPrompt};
use crate::error::KeyBridgeError;
use crate::protocol::{Ack, KeyLineCodec};
use crate::KeyBridgeResult;

/// Where a key server is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Idle,
    Starting,
    Running,
    /// Waiting for execute permission before relaunching.
    Restarting,
    Stopped,
}

/// How a key server process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReason {
    pub code: Option<i32>,
    /// The terminating signal, on unix.
    pub signal: Option<i32>,
}

impl From<ExitStatus> for ExitReason {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {code}"),
            (None, Some(signal)) => write!(f, "signal {signal}"),
            (None, None) => f.write_str("unknown exit status"),
        }
    }
}

/// Supervises one key server: launches it, feeds its events to the dispatcher, writes the
/// acknowledgements back and stops it.
pub struct KeyServer {
    profile: BackendProfile,
    config: BackendConfig,
    dispatcher: Arc<Dispatcher>,
    shared: Arc<Shared>,
}

struct Shared {
    running: AtomicBool,
    restarting: AtomicBool,
    // Bumped on every launch so a late exit of an old process is not reported.
    generation: AtomicU64,
    state: Mutex<ServerState>,
    process: Mutex<Option<ServerProcess>>,
}

/// The tasks attached to one launched process.
struct ServerProcess {
    pid: Option<u32>,
    kill: Option<oneshot::Sender<()>>,
    reader: JoinHandle<()>,
    diagnostics: Option<JoinHandle<()>>,
}

impl ServerProcess {
    fn terminate(mut self) {
        self.reader.abort();
        if let Some(diagnostics) = self.diagnostics.take() {
            diagnostics.abort();
        }
        if let Some(kill) = self.kill.take() {
            // The watcher is gone if the process already exited.
            let _ = kill.send(());
        }
    }
}

impl Shared {
    fn set_state(&self, state: ServerState) {
        let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if *current != state {
            debug!(from = ?*current, to = ?state, "key server state");
            *current = state;
        }
    }

    fn lock_process(&self) -> MutexGuard<'_, Option<ServerProcess>> {
        self.process.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a freshly launched process and mark the server running.
    ///
    /// Returns `false` and terminates the process if the server was stopped, or the process
    /// exited, before it could be installed.
    fn commit(&self, process: ServerProcess) -> bool {
        let mut slot = self.lock_process();

        if !self.running.load(Ordering::SeqCst) {
            drop(slot);
            process.terminate();
            return false;
        }

        if let Some(previous) = slot.replace(process) {
            previous.terminate();
        }
        // Still under the slot lock, so a concurrent exit is recorded after this.
        self.set_state(ServerState::Running);

        true
    }

    /// Record the exit of the process launched as `generation`, stopping the server if nobody
    /// asked for the exit. Returns whether the exit was unsolicited.
    fn record_exit(&self, generation: u64) -> bool {
        let mut slot = self.lock_process();

        let unsolicited = self.generation.load(Ordering::SeqCst) == generation
            && self.running.load(Ordering::SeqCst)
            && !self.restarting.load(Ordering::SeqCst);

        if unsolicited {
            self.running.store(false, Ordering::SeqCst);
            slot.take();
            self.set_state(ServerState::Stopped);
        }

        unsolicited
    }

    fn terminate(&self) {
        if let Some(process) = self.lock_process().take() {
            debug!(pid = ?process.pid, "terminating key server");
            process.terminate();
        }
    }
}

impl KeyServer {
    pub(crate) fn new(
        profile: BackendProfile,
        config: BackendConfig,
        dispatcher: Arc<Dispatcher>,
    ) -> Self {
        Self {
            profile,
            config,
            dispatcher,
            shared: Arc::new(Shared {
                running: AtomicBool::new(false),
                restarting: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                state: Mutex::new(ServerState::Idle),
                process: Mutex::new(None),
            }),
        }
    }

    pub fn profile(&self) -> &BackendProfile {
        &self.profile
    }

    pub fn state(&self) -> ServerState {
        *self
            .shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_running(&self) -> bool {
        self.state() == ServerState::Running
    }

    /// The process id of the running key server.
    pub fn pid(&self) -> Option<u32> {
        self.shared.lock_process().as_ref().and_then(|p| p.pid)
    }

    /// Launch the key server.
    ///
    /// Resolves once the process has been spawned. If the launch is refused because the binary
    /// is not executable, and the backend supports it, execute permission is requested once and
    /// the launch retried. Does nothing if the server is already running.
    pub async fn start(&self) -> KeyBridgeResult<()> {
        if self.is_running() {
            return Ok(());
        }

        self.launch(self.profile.grants_permissions).await
    }

    async fn launch(&self, may_grant: bool) -> KeyBridgeResult<()> {
        let path = self.config.resolve_server_path(self.profile.platform);

        self.shared.running.store(true, Ordering::SeqCst);
        self.shared.set_state(ServerState::Starting);

        let launch_error = match self.spawn(&path) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };

        if may_grant && launch_error.kind() == io::ErrorKind::PermissionDenied {
            return self.restart_with_permission(path, launch_error).await;
        }

        self.shared.running.store(false, Ordering::SeqCst);
        self.shared.set_state(ServerState::Stopped);

        Err(KeyBridgeError::Launch {
            path,
            source: launch_error,
        })
    }

    async fn restart_with_permission(
        &self,
        path: PathBuf,
        launch_error: io::Error,
    ) -> KeyBridgeResult<()> {
        info!(path = %path.display(), error = %launch_error, "key server is not executable, requesting permission");

        self.shared.restarting.store(true, Ordering::SeqCst);
        self.shared.set_state(ServerState::Restarting);
        self.shared.terminate();

        let granted = self
            .granter()
            .grant_execute(&path, self.config.app_name())
            .await;

        let result = match granted {
            Err(err) => {
                warn!(error = %err, "granting execute permission failed");
                Err(KeyBridgeError::Launch {
                    path,
                    source: launch_error,
                })
            }
            Ok(()) if !self.shared.running.load(Ordering::SeqCst) => {
                info!("stopped while granting permission, not relaunching");
                Ok(())
            }
            // A second refusal is final: no further permission requests.
            Ok(()) => {
                // Exits of the relaunched server are reported like any other.
                self.shared.restarting.store(false, Ordering::SeqCst);
                self.spawn(&path)
                    .map_err(|source| KeyBridgeError::Launch { path, source })
            }
        };

        self.shared.restarting.store(false, Ordering::SeqCst);

        if result.is_err() {
            self.shared.running.store(false, Ordering::SeqCst);
        }
        if !self.shared.running.load(Ordering::SeqCst) {
            self.shared.set_state(ServerState::Stopped);
        }

        result
    }

    fn granter(&self) -> Arc<dyn PermissionGranter> {
        self.config
            .permission_granter
            .clone()
            .unwrap_or_else(|| Arc::new(SudoPrompt))
    }

    /// Spawn the process and its reader, diagnostics and exit watcher tasks.
    fn spawn(&self, path: &Path) -> io::Result<()> {
        let mut child = Command::new(path)
            .args(&self.config.server_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let pid = child.id();
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "key server stdout not captured"))?;
        let stdin = child.stdin.take();
        let stderr = child.stderr.take();

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (kill_tx, kill_rx) = oneshot::channel();

        let reader = tokio::spawn(pump_events(
            stdout,
            stdin,
            self.profile,
            Arc::clone(&self.dispatcher),
        ));
        let diagnostics = stderr.map(|stderr| {
            tokio::spawn(forward_diagnostics(stderr, self.config.on_info.clone()))
        });
        tokio::spawn(watch_exit(
            child,
            kill_rx,
            generation,
            Arc::clone(&self.shared),
            self.config.on_error.clone(),
        ));

        let process = ServerProcess {
            pid,
            kill: Some(kill_tx),
            reader,
            diagnostics,
        };

        if self.shared.commit(process) {
            debug!(?pid, path = %path.display(), "key server running");
        }

        Ok(())
    }

    /// Stop the key server. Any permission request in flight will not relaunch it.
    pub fn stop(&self) {
        self.shared.running.store(false, Ordering::SeqCst);
        self.shared.terminate();
        self.shared.set_state(ServerState::Stopped);
    }
}

impl Drop for KeyServer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for KeyServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyServer")
            .field("platform", &self.profile.platform)
            .field("state", &self.state())
            .field("pid", &self.pid())
            .finish()
    }
}

/// Read events from the key server, dispatch each one and acknowledge it before reading the next.
async fn pump_events(
    stdout: ChildStdout,
    stdin: Option<ChildStdin>,
    profile: BackendProfile,
    dispatcher: Arc<Dispatcher>,
) {
    let mut events = FramedRead::new(stdout, KeyLineCodec::new(profile.layout));
    let mut acks = stdin
        .filter(|_| profile.acknowledges)
        .map(|stdin| FramedWrite::new(stdin, KeyLineCodec::new(profile.layout)));

    while let Some(next) = events.next().await {
        let raw = match next {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "reading key server output failed");
                break;
            }
        };

        let correlation_id = raw.correlation_id.clone();
        let event = profile.key_event(raw);
        let propagation = dispatcher.dispatch(&event);

        if let Some(sink) = acks.as_mut() {
            if let Err(err) = sink.send(Ack::new(propagation, correlation_id)).await {
                warn!(error = %err, "key server stopped accepting acknowledgements");
                acks = None;
            }
        }
    }

    debug!("key server output closed");
}

async fn forward_diagnostics(stderr: ChildStderr, on_info: Option<InfoCallback>) {
    let mut lines = FramedRead::new(stderr, LinesCodec::new());

    while let Some(line) = lines.next().await {
        match line {
            Ok(line) => {
                debug!(%line, "key server diagnostics");
                if let Some(on_info) = &on_info {
                    on_info(&line);
                }
            }
            Err(err) => {
                debug!(error = %err, "reading key server diagnostics failed");
                break;
            }
        }
    }
}

/// Own the child until it exits, killing it when asked (or when the kill handle is dropped).
async fn watch_exit(
    mut child: Child,
    kill: oneshot::Receiver<()>,
    generation: u64,
    shared: Arc<Shared>,
    on_error: Option<ErrorCallback>,
) {
    let status = tokio::select! {
        status = child.wait() => status,
        _ = kill => {
            if let Err(err) = child.kill().await {
                debug!(error = %err, "killing key server failed");
            }
            return;
        }
    };

    let reason = match status {
        Ok(status) => ExitReason::from(status),
        Err(err) => {
            warn!(error = %err, "waiting for key server failed");
            return;
        }
    };

    if !shared.record_exit(generation) {
        debug!(%reason, "key server exited");
        return;
    }

    error!(%reason, "key server exited unexpectedly");

    if let Some(on_error) = on_error {
        on_error(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_reason_prefers_the_code() {
        let reason = ExitReason {
            code: Some(3),
            signal: None,
        };
        assert_eq!(reason.to_string(), "exit code 3");

        let reason = ExitReason {
            code: None,
            signal: Some(9),
        };
        assert_eq!(reason.to_string(), "signal 9");
    }

    #[cfg(unix)]
    #[test]
    fn exit_reason_from_status() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(
            ExitReason::from(ExitStatus::from_raw(2 << 8)),
            ExitReason {
                code: Some(2),
                signal: None
            }
        );
        assert_eq!(
            ExitReason::from(ExitStatus::from_raw(15)),
            ExitReason {
                code: None,
                signal: Some(15)
            }
        );
    }

    #[tokio::test]
    async fn a_missing_binary_fails_without_requesting_permission() {
        let dispatcher = Arc::new(Dispatcher::new());
        let config = BackendConfig::default().with_server_path("/nonexistent/X11KeyServer");
        let server = KeyServer::new(crate::Platform::X11.profile(), config, dispatcher);

        let err = server.start().await.unwrap_err();

        assert!(matches!(err, KeyBridgeError::Launch { .. }), "{err}");
        assert_eq!(server.state(), ServerState::Stopped);
    }

    fn installed_process() -> ServerProcess {
        ServerProcess {
            pid: Some(1),
            kill: None,
            reader: tokio::spawn(async {}),
            diagnostics: None,
        }
    }

    fn launching_server() -> (KeyServer, u64) {
        let server = KeyServer::new(
            crate::Platform::X11.profile(),
            BackendConfig::default(),
            Arc::new(Dispatcher::new()),
        );
        server.shared.running.store(true, Ordering::SeqCst);
        let generation = server.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        (server, generation)
    }

    #[tokio::test]
    async fn an_exit_before_installation_keeps_the_server_stopped() {
        let (server, generation) = launching_server();

        assert!(server.shared.record_exit(generation));
        assert!(!server.shared.commit(installed_process()));

        assert_eq!(server.state(), ServerState::Stopped);
        assert_eq!(server.pid(), None);
    }

    #[tokio::test]
    async fn an_exit_after_installation_stops_the_server() {
        let (server, generation) = launching_server();

        assert!(server.shared.commit(installed_process()));
        assert_eq!(server.state(), ServerState::Running);
        assert_eq!(server.pid(), Some(1));

        assert!(server.shared.record_exit(generation));
        assert_eq!(server.state(), ServerState::Stopped);
        assert_eq!(server.pid(), None);
    }

    #[tokio::test]
    async fn exits_of_earlier_launches_are_ignored() {
        let (server, generation) = launching_server();

        assert!(server.shared.commit(installed_process()));

        assert!(!server.shared.record_exit(generation - 1));
        assert_eq!(server.state(), ServerState::Running);
    }

    #[tokio::test]
    async fn exits_while_restarting_are_not_reported() {
        let (server, generation) = launching_server();
        server.shared.restarting.store(true, Ordering::SeqCst);

        assert!(!server.shared.record_exit(generation));
    }

    #[test]
    fn new_servers_are_idle() {
        let server = KeyServer::new(
            crate::Platform::Mac.profile(),
            BackendConfig::default(),
            Arc::new(Dispatcher::new()),
        );

        assert_eq!(server.state(), ServerState::Idle);
        assert_eq!(server.pid(), None);
    }
}
