//! JSON file persistence for the bot's stores
//!
//! Each store is a single JSON document. Loading never fails: a missing or
//! unreadable file yields the store's default value. Saving replaces the
//! whole document through a temp file and rename.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: File I/O moved to the blocking pool; `lock` for multi-store steps
//! - 1.0.0: Initial JSON documents with atomic saves

use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

const TEMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Read a JSON document, falling back to `fallback()` when absent or corrupt.
pub fn load_or_else<T, F>(path: &Path, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No store at {}, starting empty", path.display());
            return fallback();
        }
        Err(e) => {
            warn!("Could not read {}: {e}. Starting empty", path.display());
            return fallback();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            warn!("Corrupt store at {}: {e}. Starting empty", path.display());
            fallback()
        }
    }
}

/// Write `value` to a sibling temp file, then rename it over `path`.
pub fn save_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&json).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    writer.get_ref().sync_all().map_err(io_err)?;

    fs::rename(&temp_path, path).map_err(io_err)?;

    debug!("Saved {} ({} bytes)", path.display(), json.len());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let extension = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{ext}.{TEMP_SUFFIX}"),
        None => TEMP_SUFFIX.to_string(),
    };
    path.with_extension(extension)
}

/// A store document bound to its file, with every access serialized.
///
/// `update` holds the lock across load, mutate and save, so two commands
/// touching the same file cannot lose each other's writes. File I/O runs on
/// tokio's blocking pool.
///
/// Steps spanning two stores take [`DataFile::lock`] on the first and then
/// use the second normally. Lock order: groups before projects.
pub struct DataFile<T> {
    path: PathBuf,
    seed: fn() -> T,
    lock: Mutex<()>,
}

/// Exclusive access to a [`DataFile`] until dropped
pub struct Locked<'a, T> {
    file: &'a DataFile<T>,
    _guard: MutexGuard<'a, ()>,
}

impl<T> DataFile<T>
where
    T: Serialize + DeserializeOwned + Default + Send + 'static,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, T::default)
    }
}

impl<T> DataFile<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    /// Bind to `path`, using `seed` whenever the file is missing or corrupt
    pub fn with_seed(path: impl Into<PathBuf>, seed: fn() -> T) -> Self {
        Self {
            path: path.into(),
            seed,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wait for exclusive access, held until the returned guard drops
    pub async fn lock(&self) -> Locked<'_, T> {
        Locked {
            file: self,
            _guard: self.lock.lock().await,
        }
    }

    /// Load the current document and inspect it
    pub async fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let locked = self.lock().await;
        let value = locked.load().await;
        f(&value)
    }

    /// Load, mutate and save the document as one transaction.
    ///
    /// The document is written back even when `f` leaves it unchanged.
    pub async fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, StorageError> {
        let locked = self.lock().await;
        let mut value = locked.load().await;
        let result = f(&mut value);
        locked.save(value).await?;
        Ok(result)
    }
}

impl<T> Locked<'_, T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    pub async fn load(&self) -> T {
        let path = self.file.path.clone();
        let seed = self.file.seed;
        match tokio::task::spawn_blocking(move || load_or_else(&path, seed)).await {
            Ok(value) => value,
            Err(e) => {
                error!("Loading {} did not complete: {e}. Starting empty", self.file.path.display());
                seed()
            }
        }
    }

    pub async fn save(&self, value: T) -> Result<(), StorageError> {
        let path = self.file.path.clone();
        tokio::task::spawn_blocking(move || save_atomic(&path, &value)).await?
    }
}
