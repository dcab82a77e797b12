pub mod config;
pub mod token;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::AppConfig;
pub use token::TokenStore;
