//! Platform token store and client configuration.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop / Mobile** (native): `<data_dir>/diabetes-risk/token` via [`store::FileStore`]

use dioxus::prelude::*;
use store::AppConfig;

const APP_DIR: &str = "diabetes-risk";

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Create the token store for the current platform.
pub fn make_token_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        store::FileStore::new(base)
    }
}

/// The token store provided by `AuthProvider`, or a fresh platform store
/// outside of one. Must be called from inside a component or its tasks.
pub fn current_token_store() -> PlatformStore {
    try_consume_context::<PlatformStore>().unwrap_or_else(make_token_store)
}

/// Load the client configuration.
///
/// Native builds read `.env`, then `<config_dir>/diabetes-risk/diabetes-risk.toml`,
/// and finally let `DIABETES_API_URL` override the base URL. The web build
/// only honours a `DIABETES_API_URL` set at compile time.
pub fn load_app_config() -> AppConfig {
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::default().with_base_url_override(option_env!("DIABETES_API_URL"))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR)
            .join(AppConfig::filename());
        let config = match std::fs::read_to_string(&path) {
            Ok(text) => AppConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                AppConfig::default()
            }),
            Err(_) => AppConfig::default(),
        };
        let env_url = std::env::var(store::config::API_URL_ENV).ok();
        config.with_base_url_override(env_url.as_deref())
    }
}
