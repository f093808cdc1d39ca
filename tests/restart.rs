#![cfg(unix)]

mod common;

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use common::{eventually, Recorder, ECHO_ACKS};
use keybridge::{
    BackendConfig, DownState, KeyBridge, KeyBridgeError, KeyBridgeResult, KeyEvent,
    PermissionGranter, Platform, ServerState,
};
use tempfile::TempDir;
use tokio::sync::Notify;

/// Writes a key server script without execute permission.
fn unexecutable_server(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("X11KeyServer");
    let script = format!("#!/bin/sh\nprintf 'KEYBOARD,DOWN,38,0,0,r1\\n'\n{ECHO_ACKS}\n");

    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    path
}

#[derive(Clone)]
enum Grant {
    Chmod,
    Pretend,
    Refuse,
}

#[derive(Clone)]
struct FakeGranter {
    grant: Grant,
    calls: Arc<AtomicUsize>,
}

impl FakeGranter {
    fn new(grant: Grant) -> Self {
        Self {
            grant,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionGranter for FakeGranter {
    async fn grant_execute(&self, path: &Path, _app_name: &str) -> KeyBridgeResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.grant {
            Grant::Chmod => {
                fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
                Ok(())
            }
            Grant::Pretend => Ok(()),
            Grant::Refuse => Err(KeyBridgeError::PermissionGrant("User canceled.".into())),
        }
    }
}

fn bridge(
    platform: Platform,
    path: &Path,
    granter: impl PermissionGranter + 'static,
    recorder: &Recorder,
) -> KeyBridge {
    let config = BackendConfig::default()
        .with_server_path(path)
        .with_permission_granter(granter);

    KeyBridge::with_backends([(platform.profile(), recorder.attach(config))])
}

fn ignore(_: &KeyEvent, _: &DownState) -> bool {
    false
}

#[tokio::test]
async fn relaunches_after_granting_execute_permission() {
    let dir = tempfile::tempdir().unwrap();
    let path = unexecutable_server(&dir);
    let granter = FakeGranter::new(Grant::Chmod);
    let recorder = Recorder::default();
    let bridge = bridge(Platform::X11, &path, granter.clone(), &recorder);

    bridge.add_listener(ignore).await.unwrap();

    assert_eq!(granter.calls(), 1);
    assert_eq!(bridge.servers()[0].state(), ServerState::Running);

    eventually("the ack", || recorder.acks() == vec!["0,r1"]).await;
    assert!(recorder.errors().is_empty());
}

#[tokio::test]
async fn a_second_refusal_is_final() {
    let dir = tempfile::tempdir().unwrap();
    let path = unexecutable_server(&dir);
    let granter = FakeGranter::new(Grant::Pretend);
    let bridge = bridge(Platform::X11, &path, granter.clone(), &Recorder::default());

    let err = bridge.add_listener(ignore).await.unwrap_err();

    assert_eq!(granter.calls(), 1);
    assert!(
        matches!(&err, KeyBridgeError::Launch { source, .. } if source.kind() == io::ErrorKind::PermissionDenied),
        "{err}"
    );
    assert_eq!(bridge.servers()[0].state(), ServerState::Stopped);
}

#[tokio::test]
async fn a_refused_grant_surfaces_the_launch_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = unexecutable_server(&dir);
    let granter = FakeGranter::new(Grant::Refuse);
    let bridge = bridge(Platform::X11, &path, granter.clone(), &Recorder::default());

    let err = bridge.add_listener(ignore).await.unwrap_err();

    assert_eq!(granter.calls(), 1);
    match err {
        KeyBridgeError::Launch { path: failed, source } => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error {other}"),
    }

    // The listener survives and the next registration retries.
    assert_eq!(bridge.listener_count(), 1);
    assert!(bridge.add_listener(ignore).await.is_err());
    assert_eq!(granter.calls(), 2);
}

#[tokio::test]
async fn backends_without_escalation_fail_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let path = unexecutable_server(&dir);
    let granter = FakeGranter::new(Grant::Chmod);
    let bridge = bridge(Platform::Windows, &path, granter.clone(), &Recorder::default());

    assert!(bridge.add_listener(ignore).await.is_err());
    assert_eq!(granter.calls(), 0);
}

struct BlockingGranter {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl PermissionGranter for BlockingGranter {
    async fn grant_execute(&self, path: &Path, _app_name: &str) -> KeyBridgeResult<()> {
        self.entered.notify_one();
        self.release.notified().await;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;

        Ok(())
    }
}

#[tokio::test]
async fn stopping_during_escalation_does_not_relaunch() {
    let dir = tempfile::tempdir().unwrap();
    let path = unexecutable_server(&dir);
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let granter = BlockingGranter {
        entered: Arc::clone(&entered),
        release: Arc::clone(&release),
    };
    let recorder = Recorder::default();
    let bridge = Arc::new(bridge(Platform::X11, &path, granter, &recorder));

    let starting = tokio::spawn({
        let bridge = Arc::clone(&bridge);
        async move { bridge.add_listener(ignore).await }
    });

    entered.notified().await;
    assert_eq!(bridge.servers()[0].state(), ServerState::Restarting);

    bridge.stop();
    release.notify_one();

    starting.await.unwrap().unwrap();

    assert_eq!(bridge.servers()[0].state(), ServerState::Stopped);
    assert_eq!(bridge.servers()[0].pid(), None);
    assert!(recorder.errors().is_empty());
}
