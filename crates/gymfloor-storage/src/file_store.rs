//! One JSON file per layout in a directory.
//!
//! Files are named `<id>.json` and wrap the layout document with a format
//! version and timestamps. Writes go through a temporary file and a rename so
//! a crash mid-write never leaves a truncated layout behind.

use crate::error::{StorageError, StorageResult};
use crate::traits::LayoutStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gymfloor_core::Layout;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Layout file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// On-disk wrapper around a layout document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub layout: Layout,
}

impl LayoutFile {
    pub fn new(layout: Layout) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            created: now,
            modified: now,
            layout,
        }
    }
}

/// Layout store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct JsonDirectoryStore {
    dir: PathBuf,
}

impl JsonDirectoryStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> StorageResult<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    async fn parse_file(path: &Path) -> StorageResult<LayoutFile> {
        let content = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Parse a stored file and check the layout invariants.
    async fn read_file(path: &Path) -> StorageResult<LayoutFile> {
        let file = Self::parse_file(path).await?;
        file.layout.validate()?;
        Ok(file)
    }

    async fn write_file(&self, path: &Path, file: &LayoutFile) -> StorageResult<()> {
        fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(file)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }
}

fn not_found(err: io::Error, id: &str) -> StorageError {
    if err.kind() == io::ErrorKind::NotFound {
        StorageError::NotFound(id.to_string())
    } else {
        StorageError::Io(err)
    }
}

#[async_trait]
impl LayoutStore for JsonDirectoryStore {
    /// Files that fail to parse or validate are skipped with a warning.
    async fn list_layouts(&self) -> StorageResult<Vec<Layout>> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match Self::read_file(&path).await {
                Ok(file) => files.push(file),
                Err(e) => tracing::warn!("Skipping unreadable layout {}: {}", path.display(), e),
            }
        }
        files.sort_by(|a, b| {
            a.created
                .cmp(&b.created)
                .then_with(|| a.layout.id.cmp(&b.layout.id))
        });
        Ok(files.into_iter().map(|f| f.layout).collect())
    }

    async fn create_layout(&self, layout: &Layout) -> StorageResult<()> {
        let path = self.path_for(&layout.id)?;
        if fs::try_exists(&path).await? {
            return Err(StorageError::AlreadyExists(layout.id.clone()));
        }
        self.write_file(&path, &LayoutFile::new(layout.clone()))
            .await
    }

    async fn save_layout(&self, layout: &Layout) -> StorageResult<()> {
        let path = self.path_for(&layout.id)?;
        let existing = match Self::parse_file(&path).await {
            Ok(file) => file,
            Err(StorageError::Io(e)) => return Err(not_found(e, &layout.id)),
            Err(e) => return Err(e),
        };
        let file = LayoutFile {
            version: FILE_FORMAT_VERSION.to_string(),
            created: existing.created,
            modified: Utc::now(),
            layout: layout.clone(),
        };
        self.write_file(&path, &file).await
    }

    async fn delete_layout(&self, id: &str) -> StorageResult<()> {
        let path = self.path_for(id)?;
        fs::remove_file(&path).await.map_err(|e| not_found(e, id))
    }
}
