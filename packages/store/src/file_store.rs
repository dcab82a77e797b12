//! # Filesystem-backed token store
//!
//! [`FileStore`] keeps the bearer token in a single file on desktop and
//! mobile so a signed-in user stays signed in across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token          # the raw token, no trailing newline
//! ```
//!
//! ## Platform data directories
//!
//! Shells use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/diabetes-risk/` |
//! | Linux | `~/.local/share/diabetes-risk/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\diabetes-risk\` |
//! | Android | App-internal storage (via `dirs`) |

use std::path::PathBuf;

use crate::token::{TokenStore, TOKEN_KEY};

/// Filesystem-backed TokenStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileStore {
    async fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    async fn save(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}
