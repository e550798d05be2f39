// src/api/types.rs
// Query parameters and response bodies for the text file API

use serde::{Deserialize, Serialize};

/// Query string accepted by every text file endpoint. Fields a route does not
/// use are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TextFileQuery {
    pub filename: Option<String>,
    pub data: Option<String>,
}

impl TextFileQuery {
    /// `filename` when present and non-empty.
    pub fn filename(&self) -> Option<&str> {
        non_empty(self.filename.as_deref())
    }

    /// `data` when present and non-empty.
    pub fn data(&self) -> Option<&str> {
        non_empty(self.data.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileContentResponse {
    pub filename: String,
    pub content: String,
}

/// Success body for create, append and remove.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileActionResponse {
    pub message: String,
    pub filename: String,
}

impl FileActionResponse {
    pub fn new(message: &str, filename: String) -> Self {
        Self {
            message: message.to_string(),
            filename,
        }
    }
}
