//! Persistence seams: wall-clock and save-document storage.
//!
//! The session talks to traits so tests can run on a fake clock and an
//! in-memory store while a real frontend plugs in whatever storage the
//! platform offers.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub trait TimeSource {
    fn now_ms(&self) -> u64;
}

/// The real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A fixed, manually advanced clock for tests.
#[derive(Debug, Clone)]
pub struct FixedTimeSource(pub std::cell::Cell<u64>);

impl FixedTimeSource {
    pub fn new(now_ms: u64) -> Self {
        Self(std::cell::Cell::new(now_ms))
    }

    pub fn advance(&self, delta_ms: u64) {
        self.0.set(self.0.get() + delta_ms);
    }
}

impl TimeSource for FixedTimeSource {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage is out of space.
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where save documents live.
pub trait SaveStore {
    /// The last saved document, if any.
    fn load(&mut self) -> Result<Option<String>, StoreError>;
    fn save(&mut self, document: &str) -> Result<(), StoreError>;
    /// Free space by discarding anything non-essential (old backups).
    /// Called before a save is retried after a quota failure.
    fn cleanup(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Save, and on a quota failure clean up and try once more.
pub fn save_with_retry(store: &mut dyn SaveStore, document: &str) -> Result<(), StoreError> {
    match store.save(document) {
        Err(StoreError::QuotaExceeded) => {
            log::warn!("save hit storage quota; cleaning up and retrying");
            store.cleanup()?;
            store.save(document)
        }
        other => other,
    }
}

/// In-memory store, with an optional capacity to exercise the quota
/// path in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Option<String>,
    /// Maximum document size accepted, if any.
    pub capacity: Option<usize>,
    /// Set by `cleanup`; lets tests observe the retry path.
    pub cleaned_up: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl SaveStore for MemoryStore {
    fn load(&mut self) -> Result<Option<String>, StoreError> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &str) -> Result<(), StoreError> {
        if let Some(capacity) = self.capacity {
            if document.len() > capacity {
                return Err(StoreError::QuotaExceeded);
            }
        }
        self.document = Some(document.to_string());
        Ok(())
    }

    fn cleanup(&mut self) -> Result<(), StoreError> {
        self.cleaned_up = true;
        self.capacity = None;
        Ok(())
    }
}

/// Single-file store for native builds.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveStore for FileStore {
    fn load(&mut self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, document: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash mid-save never truncates the
        // only copy.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
