use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid maximum width: {0}. Must be at least 1 pixel")]
    InvalidMaxWidth(u32),

    #[error("No input directory selected")]
    MissingInputDir,

    #[error("No output directory selected")]
    MissingOutputDir,

    #[error("Input directory not found: {0}")]
    InputDirNotFound(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("A batch run is already in progress")]
    BatchBusy,

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
