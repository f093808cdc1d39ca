use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::backend::{BackendProfile, Platform};
use crate::config::{BackendConfig, BridgeConfig};
use crate::dispatch::{Dispatcher, KeyEventHandler, ListenerId};
use crate::error::KeyBridgeError;
use crate::event::DownState;
use crate::server::KeyServer;
use crate::KeyBridgeResult;

/// Fans the events of the platform's key servers out to the registered listeners.
///
/// The key servers are started lazily by the first [`add_listener`](KeyBridge::add_listener)
/// and run until [`stop`](KeyBridge::stop) or until the bridge is dropped.
#[derive(Debug)]
pub struct KeyBridge {
    dispatcher: Arc<Dispatcher>,
    servers: Vec<KeyServer>,
    startup: Mutex<()>,
}

impl KeyBridge {
    /// A bridge for the key server of the current platform.
    pub fn new(config: BridgeConfig) -> KeyBridgeResult<Self> {
        let platform = Platform::current().ok_or(KeyBridgeError::UnsupportedPlatform)?;

        Ok(Self::with_backends([(
            platform.profile(),
            config.for_platform(platform).clone(),
        )]))
    }

    /// A bridge over explicitly chosen backends.
    pub fn with_backends(backends: impl IntoIterator<Item = (BackendProfile, BackendConfig)>) -> Self {
        let dispatcher = Arc::new(Dispatcher::new());
        let servers = backends
            .into_iter()
            .map(|(profile, config)| KeyServer::new(profile, config, Arc::clone(&dispatcher)))
            .collect();

        Self {
            dispatcher,
            servers,
            startup: Mutex::new(()),
        }
    }

    /// Register `handler` and make sure the key servers are running.
    ///
    /// The listener stays registered if a key server fails to start; registering another
    /// listener retries the start.
    pub async fn add_listener(
        &self,
        handler: impl KeyEventHandler + 'static,
    ) -> KeyBridgeResult<ListenerId> {
        let id = self.dispatcher.add(Arc::new(handler));
        debug!(listener = ?id, "listener added");

        self.ensure_started().await?;

        Ok(id)
    }

    /// Unregister a listener. The key servers keep running.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.dispatcher.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.dispatcher.listener_count()
    }

    /// A snapshot of which keys are currently held.
    pub fn down_state(&self) -> DownState {
        self.dispatcher.down_state()
    }

    pub fn servers(&self) -> &[KeyServer] {
        &self.servers
    }

    /// Stop every key server. Listeners stay registered.
    pub fn stop(&self) {
        for server in &self.servers {
            server.stop();
        }
        info!("key bridge stopped");
    }

    async fn ensure_started(&self) -> KeyBridgeResult<()> {
        // Concurrent registrations share one startup.
        let _guard = self.startup.lock().await;

        let pending = self
            .servers
            .iter()
            .filter(|server| !server.is_running())
            .map(|server| server.start());

        if let Err(err) = try_join_all(pending).await {
            warn!(error = %err, "starting key servers failed");
            self.stop();
            return Err(err);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyEvent;
    use crate::server::ServerState;

    fn missing_server(platform: Platform) -> (BackendProfile, BackendConfig) {
        (
            platform.profile(),
            BackendConfig::default().with_server_path("/nonexistent/key-server"),
        )
    }

    #[tokio::test]
    async fn a_failed_start_keeps_the_listener() {
        let bridge = KeyBridge::with_backends([missing_server(Platform::Windows)]);

        let err = bridge
            .add_listener(|_: &KeyEvent, _: &DownState| false)
            .await
            .unwrap_err();

        assert!(matches!(err, KeyBridgeError::Launch { .. }), "{err}");
        assert_eq!(bridge.listener_count(), 1);
        assert_eq!(bridge.servers()[0].state(), ServerState::Stopped);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn one_failing_backend_stops_the_others() {
        let bridge = KeyBridge::with_backends([
            (
                Platform::Windows.profile(),
                BackendConfig::default()
                    .with_server_path("sh")
                    .with_server_args(["-c", "sleep 30"]),
            ),
            missing_server(Platform::Windows),
        ]);

        assert!(bridge
            .add_listener(|_: &KeyEvent, _: &DownState| false)
            .await
            .is_err());

        for server in bridge.servers() {
            assert_eq!(server.state(), ServerState::Stopped);
        }
    }

    #[test]
    fn listeners_can_be_removed_without_servers() {
        let bridge = KeyBridge::with_backends(std::iter::empty());
        let id = bridge.dispatcher.add(Arc::new(|_: &KeyEvent, _: &DownState| false));

        assert!(bridge.remove_listener(id));
        assert_eq!(bridge.listener_count(), 0);
        assert!(bridge.down_state().pressed().next().is_none());
    }
}
