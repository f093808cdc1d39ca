use std::sync::Arc;

use keybridge::{
    permissions, BridgeConfig, CanonicalKey, DownState, KeyBridge, KeyBridgeError, KeyEvent,
    KeyState,
};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), KeyBridgeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    if !permissions::check_permissions().await {
        eprintln!("{}", permissions::instructions());
    }

    let done = Arc::new(Notify::new());

    let mut config = BridgeConfig::from_env();
    for backend in [&mut config.windows, &mut config.x11, &mut config.mac] {
        let done = Arc::clone(&done);
        *backend = backend.clone().on_error(move |reason| {
            eprintln!("key server exited: {reason}");
            done.notify_one();
        });
    }

    let bridge = KeyBridge::new(config)?;

    let escape = Arc::clone(&done);
    bridge
        .add_listener(move |e: &KeyEvent, down: &DownState| {
            let held = down.pressed().map(|k| k.to_string()).collect::<Vec<_>>();
            println!(
                "[{}] {} {:?} ({}) held={held:?}",
                e.received_at.format("%H:%M:%S%.3f"),
                e.name,
                e.state,
                e.raw_key.raw_name,
            );

            if e.name == CanonicalKey::Escape && e.state == KeyState::Down {
                escape.notify_one();
            }
        })
        .await?;

    println!("listening, press ESC to exit");
    done.notified().await;
    bridge.stop();

    Ok(())
}
