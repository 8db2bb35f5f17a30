//! Key/value storage for small JSON documents
//!
//! LocalStorage in the browser, one file per key natively. Failures are
//! logged and reported as "nothing stored"; callers fall back to defaults.

#[cfg(not(target_arch = "wasm32"))]
use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

#[cfg(not(target_arch = "wasm32"))]
use directories::ProjectDirs;

/// Read the value stored under `key`
#[cfg(target_arch = "wasm32")]
pub fn load(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Store `value` under `key`. Returns whether the write went through.
#[cfg(target_arch = "wasm32")]
pub fn save(key: &str, value: &str) -> bool {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    match storage {
        Some(storage) => match storage.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("LocalStorage write of {} failed: {:?}", key, e);
                false
            }
        },
        None => {
            log::warn!("LocalStorage unavailable, {} not saved", key);
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load(key: &str) -> Option<String> {
    FileStore::default_location().load(key)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(key: &str, value: &str) -> bool {
    FileStore::default_location().save(key, value)
}

#[cfg(not(target_arch = "wasm32"))]
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "grid-snake", "grid-snake")
}

/// Directory holding `<key>.json` files
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Overrides the data directory
    pub const DIR_ENV: &'static str = "GRID_SNAKE_DATA_DIR";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$GRID_SNAKE_DATA_DIR`, or the per-user data directory of the
    /// platform (e.g. `~/.local/share/grid-snake` on Linux)
    pub fn default_location() -> Self {
        Self::resolve(std::env::var_os(Self::DIR_ENV))
    }

    fn resolve(dir_override: Option<OsString>) -> Self {
        if let Some(dir) = dir_override.filter(|dir| !dir.is_empty()) {
            return Self::new(dir);
        }
        match project_dirs() {
            Some(dirs) => Self::new(dirs.data_dir()),
            None => {
                let fallback = std::env::temp_dir().join("grid-snake");
                log::warn!(
                    "No home directory found, storing data in {}",
                    fallback.display()
                );
                Self::new(fallback)
            }
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read {}: {}", key, e);
                None
            }
        }
    }

    pub fn save(&self, key: &str, value: &str) -> bool {
        match self.write(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not write {} to {}: {}", key, self.dir.display(), e);
                false
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("grid-snake-test-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_override_wins() {
        let store = FileStore::resolve(Some(OsString::from("/srv/snake")));
        assert_eq!(store.dir(), Path::new("/srv/snake"));
    }

    #[test]
    fn test_default_is_the_user_data_dir() {
        for dir_override in [None, Some(OsString::new())] {
            let store = FileStore::resolve(dir_override);
            match project_dirs() {
                Some(dirs) => assert_eq!(store.dir(), dirs.data_dir()),
                None => assert_eq!(store.dir(), std::env::temp_dir().join("grid-snake")),
            }
        }
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = FileStore::new(scratch_dir("missing"));
        assert_eq!(store.load("nothing_here"), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("roundtrip");
        let store = FileStore::new(&dir);
        assert!(store.save("best", "42"));
        assert_eq!(store.load("best").as_deref(), Some("42"));
        assert!(store.save("best", "43"));
        assert_eq!(store.load("best").as_deref(), Some("43"));
        let _ = fs::remove_dir_all(dir);
    }
}
