mod links;
mod moodle;

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// RAII guard for the working directory - restores the previous one on drop
pub(crate) struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub(crate) fn enter(dir: &Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Create a temp config directory and set MB_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("MB_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set the two keys that have no usable default
pub(crate) fn required_env() -> (EnvGuard, EnvGuard) {
    (
        EnvGuard::set("MB_MOODLE_BASE_URL", "https://campus.example.edu"),
        EnvGuard::set("MB_GOOGLE_CLIENT_ID", "123.apps.googleusercontent.com"),
    )
}
