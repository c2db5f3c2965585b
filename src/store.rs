use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A single proverb record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Proverb {
    pub id: u64,
    pub text: String,
}

/// Shareable in-memory proverb store for use across async handlers
///
/// The store owns the canonical sequence of records behind a single mutex;
/// every operation holds the lock for its full duration, so concurrent
/// requests observe sequential semantics. No operation touches disk except
/// `load` and `save`, the snapshot boundary at process start and shutdown.
#[derive(Debug, Clone)]
pub struct ProverbStore {
    inner: Arc<Mutex<Vec<Proverb>>>,
}

impl ProverbStore {
    /// Create a store over an existing sequence of records
    pub fn new(proverbs: Vec<Proverb>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(proverbs)),
        }
    }

    /// Load a store from a JSON snapshot file
    ///
    /// The file must exist and contain a JSON array of records. Any open or
    /// decode failure is an error; callers treat it as fatal at startup.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open data file: {}", path.display()))?;

        let proverbs: Vec<Proverb> = serde_json::from_reader(file)
            .with_context(|| format!("Failed to decode data file: {}", path.display()))?;

        tracing::info!("Loaded {} proverbs from {}", proverbs.len(), path.display());
        Ok(Self::new(proverbs))
    }

    /// Write the current sequence to a JSON snapshot file
    ///
    /// Creates the file if needed, truncating any existing content.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written; the
    /// shutdown path logs this instead of blocking process exit.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let proverbs = self.inner.lock().await;

        let file = File::create(path)
            .with_context(|| format!("Failed to create data file: {}", path.display()))?;

        serde_json::to_writer_pretty(file, &*proverbs)
            .with_context(|| format!("Failed to encode data file: {}", path.display()))?;

        tracing::info!("Saved {} proverbs to {}", proverbs.len(), path.display());
        Ok(())
    }

    /// Return all records in insertion order
    pub async fn list(&self) -> Vec<Proverb> {
        self.inner.lock().await.clone()
    }

    /// Append a new record with a store-assigned id and return it
    ///
    /// Ids are one greater than the current maximum, or 1 for an empty
    /// store. Ids freed by deletion are not reused while larger ids exist.
    pub async fn create(&self, text: String) -> Proverb {
        let mut proverbs = self.inner.lock().await;
        let id = proverbs.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let proverb = Proverb { id, text };
        proverbs.push(proverb.clone());
        tracing::debug!("Created proverb with id: {}", id);
        proverb
    }

    /// Return the record with the given id, if any
    pub async fn get(&self, id: u64) -> Option<Proverb> {
        self.inner.lock().await.iter().find(|p| p.id == id).cloned()
    }

    /// Replace the text of the record with the given id, preserving its id
    /// and position; returns the updated record, or `None` when absent
    pub async fn update(&self, id: u64, text: String) -> Option<Proverb> {
        let mut proverbs = self.inner.lock().await;
        let proverb = proverbs.iter_mut().find(|p| p.id == id)?;
        proverb.text = text;
        tracing::debug!("Updated proverb with id: {}", id);
        Some(proverb.clone())
    }

    /// Remove the record with the given id; returns `false` when absent
    pub async fn delete(&self, id: u64) -> bool {
        let mut proverbs = self.inner.lock().await;
        let before = proverbs.len();
        proverbs.retain(|p| p.id != id);
        let removed = proverbs.len() < before;
        if removed {
            tracing::debug!("Deleted proverb with id: {}", id);
        }
        removed
    }
}
