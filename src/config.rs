//! Backend and bridge configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::backend::Platform;
use crate::elevate::PermissionGranter;
use crate::server::ExitReason;

/// Overrides the key server executable for every backend.
pub const SERVER_PATH_ENV: &str = "KEYBRIDGE_SERVER_PATH";
/// Overrides the name shown in the privilege-elevation prompt.
pub const APP_NAME_ENV: &str = "KEYBRIDGE_APP_NAME";

pub const DEFAULT_APP_NAME: &str = "KeyBridge";

pub type ErrorCallback = Arc<dyn Fn(ExitReason) + Send + Sync>;
pub type InfoCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Configuration for one key server.
#[derive(Clone, Default)]
pub struct BackendConfig {
    /// The key server executable. Located next to the current executable when unset.
    pub server_path: Option<PathBuf>,
    /// Extra arguments passed to the key server.
    pub server_args: Vec<String>,
    /// Shown in the privilege-elevation prompt.
    pub app_name: Option<String>,
    /// Called when the key server exits without being stopped.
    pub on_error: Option<ErrorCallback>,
    /// Called with every line the key server writes to stderr.
    pub on_info: Option<InfoCallback>,
    /// Makes the key server executable. Defaults to [`SudoPrompt`](crate::elevate::SudoPrompt).
    pub permission_granter: Option<Arc<dyn PermissionGranter>>,
}

impl BackendConfig {
    pub fn with_server_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.server_path = Some(path.into());
        self
    }

    pub fn with_server_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.server_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn on_error(mut self, callback: impl Fn(ExitReason) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    pub fn on_info(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_info = Some(Arc::new(callback));
        self
    }

    pub fn with_permission_granter(mut self, granter: impl PermissionGranter + 'static) -> Self {
        self.permission_granter = Some(Arc::new(granter));
        self
    }

    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// The executable to launch for `platform`.
    ///
    /// Without an explicit path, `build/<binary>` next to the current executable is preferred
    /// over `runtime/<binary>`.
    pub fn resolve_server_path(&self, platform: Platform) -> PathBuf {
        if let Some(path) = &self.server_path {
            return path.clone();
        }

        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();

        default_server_path(&base, platform)
    }

    fn overlay(mut self, var: &impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = var(SERVER_PATH_ENV) {
            self.server_path = Some(path.into());
        }
        if let Some(name) = var(APP_NAME_ENV) {
            self.app_name = Some(name);
        }
        self
    }
}

fn default_server_path(base: &Path, platform: Platform) -> PathBuf {
    let build = base.join("build").join(platform.binary_name());

    if build.exists() {
        build
    } else {
        base.join("runtime").join(platform.binary_name())
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("server_path", &self.server_path)
            .field("server_args", &self.server_args)
            .field("app_name", &self.app_name)
            .field("on_error", &self.on_error.is_some())
            .field("on_info", &self.on_info.is_some())
            .field("permission_granter", &self.permission_granter.is_some())
            .finish()
    }
}

/// Per-platform backend configuration; only the entry for the running platform is used.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    pub windows: BackendConfig,
    pub x11: BackendConfig,
    pub mac: BackendConfig,
}

impl BridgeConfig {
    /// The defaults, overridden by `KEYBRIDGE_SERVER_PATH` and `KEYBRIDGE_APP_NAME`.
    pub fn from_env() -> Self {
        Self::default().overlay(|name| std::env::var(name).ok())
    }

    /// Apply the environment overrides found through `var` to every backend.
    pub fn overlay(self, var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            windows: self.windows.overlay(&var),
            x11: self.x11.overlay(&var),
            mac: self.mac.overlay(&var),
        }
    }

    pub fn for_platform(&self, platform: Platform) -> &BackendConfig {
        match platform {
            Platform::Windows => &self.windows,
            Platform::X11 => &self.x11,
            Platform::Mac => &self.mac,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_server_path_wins() {
        let config = BackendConfig::default().with_server_path("/opt/keys/X11KeyServer");

        assert_eq!(
            config.resolve_server_path(Platform::X11),
            PathBuf::from("/opt/keys/X11KeyServer")
        );
    }

    #[test]
    fn prefers_build_over_runtime() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            default_server_path(dir.path(), Platform::Mac),
            dir.path().join("runtime").join("MacKeyServer")
        );

        std::fs::create_dir(dir.path().join("build")).unwrap();
        std::fs::write(dir.path().join("build").join("MacKeyServer"), b"").unwrap();

        assert_eq!(
            default_server_path(dir.path(), Platform::Mac),
            dir.path().join("build").join("MacKeyServer")
        );
    }

    #[test]
    fn environment_overrides_every_backend() {
        let config = BridgeConfig::default().overlay(|name| match name {
            SERVER_PATH_ENV => Some("/tmp/server".to_owned()),
            APP_NAME_ENV => Some("Recorder".to_owned()),
            _ => None,
        });

        for platform in [Platform::Windows, Platform::X11, Platform::Mac] {
            let backend = config.for_platform(platform);

            assert_eq!(backend.server_path, Some(PathBuf::from("/tmp/server")));
            assert_eq!(backend.app_name(), "Recorder");
        }
    }

    #[test]
    fn app_name_has_a_default() {
        assert_eq!(BackendConfig::default().app_name(), DEFAULT_APP_NAME);
    }
}
