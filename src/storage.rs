// Lock-guarded atomic file IO for the settings file and the scheduled-set
// registry. Writes go to a sibling temp file and are renamed into place so a
// crash never leaves a half-written record; a `.lock` sidecar serializes
// concurrent access from multiple processes (e.g. app + background worker).
use anyhow::Result;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LocalStorage;

impl LocalStorage {
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut os_string = file_path.as_os_str().to_os_string();
        os_string.push(".lock");
        PathBuf::from(os_string)
    }

    /// Runs `f` while holding an exclusive advisory lock on `file_path`.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Writes `contents` via a temp file + rename so readers never observe a
    /// partial write.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}
