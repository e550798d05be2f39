// src/file_system/operations.rs
// Text file operations over a single storage directory

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Suffix every managed file carries.
pub const TEXT_FILE_EXTENSION: &str = ".txt";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to {operation} {path}: {source}", path = .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    fn io(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Append the text file extension unless the name already ends with it.
pub fn normalize_filename(filename: &str) -> String {
    if filename.ends_with(TEXT_FILE_EXTENSION) {
        filename.to_string()
    } else {
        format!("{filename}{TEXT_FILE_EXTENSION}")
    }
}

/// Whether a directory entry counts as a managed text file.
pub fn is_text_file(name: &str) -> bool {
    name.ends_with(TEXT_FILE_EXTENSION)
}

/// Handle to the storage directory. Holds no state besides the root path;
/// concurrent operations on the same file are not coordinated.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    root: PathBuf,
}

impl TextFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage directory (and parents) if it does not exist yet.
    pub async fn ensure_root(&self) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::io("create storage directory", &self.root, e))?;
        info!("Storage directory ready at {}", self.root.display());
        Ok(())
    }

    /// Resolve an already-normalized filename beneath the root.
    ///
    /// Names are not sanitized: `..` segments are left alone. A leading
    /// separator is dropped so the name joins beneath the root rather than
    /// replacing it.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename.trim_start_matches(['/', '\\']))
    }

    /// List text files in directory enumeration order.
    pub async fn list(&self) -> StoreResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| StoreError::io("read directory", &self.root, e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io("read directory", &self.root, e))?
        {
            // Names that are not valid UTF-8 cannot be addressed through the API
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if is_text_file(&name) {
                files.push(name);
            }
        }

        debug!("Listed {} text files", files.len());
        Ok(files)
    }

    /// Write `content` as the complete file content, replacing anything there.
    pub async fn create(&self, filename: &str, content: &str) -> StoreResult<()> {
        let path = self.path_for(filename);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| StoreError::io("write", &path, e))
    }

    /// Read the whole file as text. Invalid UTF-8 sequences become U+FFFD
    /// rather than failing the read.
    pub async fn read(&self, filename: &str) -> StoreResult<String> {
        let path = self.path_for(filename);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| StoreError::io("read", &path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Append `content` to the end of the file, creating it when absent.
    pub async fn append(&self, filename: &str, content: &str) -> StoreResult<()> {
        let path = self.path_for(filename);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| StoreError::io("open for append", &path, e))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| StoreError::io("append to", &path, e))?;
        file.flush()
            .await
            .map_err(|e| StoreError::io("append to", &path, e))
    }

    pub async fn remove(&self, filename: &str) -> StoreResult<()> {
        let path = self.path_for(filename);
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| StoreError::io("remove", &path, e))
    }
}
