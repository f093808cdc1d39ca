//! This crate captures global keyboard and mouse input through a small native key server process
//! and fans the decoded events out to listeners.
//!
//! A [`KeyBridge`] starts the key server for the current platform when the first listener is
//! registered. Every event is canonicalized into a [`KeyEvent`], recorded in the [`DownState`]
//! map and handed to each listener in turn. If any listener returns [`Propagation::Stop`] (or
//! `true`), the key server is asked to swallow the event.
//!
//! # Example
//!
//! Print every key press, and swallow presses of F13.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use keybridge::{BridgeConfig, CanonicalKey, DownState, KeyBridge, KeyBridgeError, KeyEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), KeyBridgeError> {
//!     let bridge = KeyBridge::new(BridgeConfig::from_env())?;
//!
//!     bridge
//!         .add_listener(|event: &KeyEvent, down: &DownState| {
//!             let shift = down.any_down(&[CanonicalKey::LeftShift, CanonicalKey::RightShift]);
//!             println!("{} {:?} shift={shift}", event.name, event.state);
//!
//!             event.name == CanonicalKey::F13
//!         })
//!         .await?;
//!
//!     tokio::time::sleep(Duration::from_secs(60)).await;
//!     bridge.stop();
//!
//!     Ok(())
//! }
//! ```

mod backend;
mod bridge;
mod config;
mod dispatch;
pub mod elevate;
mod error;
mod event;
mod key;
pub mod keymap;
pub mod permissions;
pub mod protocol;
mod server;

pub use backend::{BackendProfile, Platform};
pub use bridge::KeyBridge;
pub use config::{
    BackendConfig, BridgeConfig, ErrorCallback, InfoCallback, APP_NAME_ENV, DEFAULT_APP_NAME,
    SERVER_PATH_ENV,
};
pub use dispatch::{aggregate, KeyEventHandler, ListenerId, ListenerOutcome, Propagation};
pub use elevate::{PermissionGranter, SudoPrompt};
pub use error::KeyBridgeError;
pub use event::{DownState, InputDevice, KeyEvent, KeyState};
pub use key::{CanonicalKey, RawKeyDescriptor, UnknownKeyName};
pub use keymap::{KeyEntry, KeyTable};
pub use server::{ExitReason, KeyServer, ServerState};

pub type KeyBridgeResult<T> = Result<T, KeyBridgeError>;
