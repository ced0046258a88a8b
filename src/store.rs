//! Persistence for decoded pool records.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::core::error::StoreError;
use crate::types::{PoolRecord, RecordId};

#[async_trait]
pub trait PoolStore: Send + Sync {
    /// Stores the record and returns the identity assigned to it.
    async fn persist(&self, record: &PoolRecord) -> Result<RecordId, StoreError>;

    async fn find(&self, id: RecordId) -> Result<Option<PoolRecord>, StoreError>;
}

/// Append-only JSON-lines file. A record's identity is its 1-based line
/// number among non-empty lines.
pub struct JsonlPoolStore {
    path: PathBuf,
    next_id: Mutex<u64>,
}

impl JsonlPoolStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let existing = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let complete = drop_partial_line(&path, &contents).await?;
                record_lines(complete).count() as u64
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => 0,
            Err(err) => return Err(err.into()),
        };
        tracing::debug!("📂 opened pool store {:?} with {} records", path, existing);

        Ok(Self {
            path,
            next_id: Mutex::new(existing + 1),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Cuts an unterminated trailing line left by an interrupted append, so ids
/// keep matching line numbers. Returns the retained contents.
async fn drop_partial_line<'a>(path: &Path, contents: &'a str) -> Result<&'a str, StoreError> {
    if contents.is_empty() || contents.ends_with('\n') {
        return Ok(contents);
    }
    let keep = contents.rfind('\n').map_or(0, |pos| pos + 1);
    tracing::warn!(
        "⚠️  dropping {} bytes of partial record at end of {:?}",
        contents.len() - keep,
        path
    );
    let file = OpenOptions::new().write(true).open(path).await?;
    file.set_len(keep as u64).await?;
    Ok(&contents[..keep])
}

fn record_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.lines().filter(|line| !line.trim().is_empty())
}

#[async_trait]
impl PoolStore for JsonlPoolStore {
    async fn persist(&self, record: &PoolRecord) -> Result<RecordId, StoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut next_id = self.next_id.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        let previous_len = file.metadata().await?.len();
        if let Err(err) = append_line(&mut file, line.as_bytes()).await {
            // Roll back so the next append starts on a fresh line.
            if let Err(truncate_err) = file.set_len(previous_len).await {
                tracing::error!(
                    "❌ failed to roll back partial record in {:?}: {}",
                    self.path,
                    truncate_err
                );
            }
            return Err(err.into());
        }

        let id = RecordId(*next_id);
        *next_id += 1;
        Ok(id)
    }

    async fn find(&self, id: RecordId) -> Result<Option<PoolRecord>, StoreError> {
        let Some(position) = id.0.checked_sub(1) else {
            return Ok(None);
        };
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let found = record_lines(&contents)
            .nth(position as usize)
            .map(serde_json::from_str::<PoolRecord>)
            .transpose()?;
        Ok(found)
    }
}

async fn append_line(file: &mut tokio::fs::File, line: &[u8]) -> std::io::Result<()> {
    file.write_all(line).await?;
    file.flush().await
}

/// In-process store, mostly for tests and embedding.
#[derive(Default)]
pub struct MemoryPoolStore {
    records: Mutex<Vec<PoolRecord>>,
}

impl MemoryPoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<PoolRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl PoolStore for MemoryPoolStore {
    async fn persist(&self, record: &PoolRecord) -> Result<RecordId, StoreError> {
        let mut records = self.records.lock().await;
        records.push(record.clone());
        Ok(RecordId(records.len() as u64))
    }

    async fn find(&self, id: RecordId) -> Result<Option<PoolRecord>, StoreError> {
        let records = self.records.lock().await;
        Ok(id
            .0
            .checked_sub(1)
            .and_then(|position| records.get(position as usize))
            .cloned())
    }
}
