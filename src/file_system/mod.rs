// src/file_system/mod.rs
// Flat-directory text file store

pub mod operations;

pub use operations::{
    is_text_file,
    normalize_filename,
    StoreError,
    StoreResult,
    TextFileStore,
    TEXT_FILE_EXTENSION,
};
