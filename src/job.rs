use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Target encoding for every file in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Webp,
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Webp => "WebP",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

/// Everything one batch run needs, validated up front and read-only after.
#[derive(Debug, Clone)]
pub struct CompressionJob {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub quality: u8,
    pub max_width: u32,
    pub format: OutputFormat,
}

impl CompressionJob {
    /// Builds a job, rejecting bad configuration before any file is touched.
    ///
    /// # Errors
    /// * `MissingInputDir` / `MissingOutputDir` if either path is empty
    /// * `InputDirNotFound` if the input path is not an existing directory
    /// * `InvalidQuality` outside 1..=100
    /// * `InvalidMaxWidth` for a zero width
    pub fn new(
        input_dir: PathBuf,
        output_dir: PathBuf,
        quality: u8,
        max_width: u32,
        format: OutputFormat,
    ) -> Result<Self> {
        if input_dir.as_os_str().is_empty() {
            return Err(CompressionError::MissingInputDir);
        }
        if output_dir.as_os_str().is_empty() {
            return Err(CompressionError::MissingOutputDir);
        }
        if !input_dir.is_dir() {
            return Err(CompressionError::InputDirNotFound(input_dir));
        }
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }
        if max_width == 0 {
            return Err(CompressionError::InvalidMaxWidth(max_width));
        }

        Ok(Self {
            input_dir,
            output_dir,
            quality,
            max_width,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn job_in(dir: &TempDir, quality: u8, max_width: u32) -> Result<CompressionJob> {
        CompressionJob::new(
            dir.path().to_path_buf(),
            dir.path().join("out"),
            quality,
            max_width,
            OutputFormat::Webp,
        )
    }

    #[test]
    fn test_job_creation() {
        let dir = TempDir::new().unwrap();
        let job = job_in(&dir, 85, 1920).unwrap();
        assert_eq!(job.quality, 85);
        assert_eq!(job.max_width, 1920);
        assert_eq!(job.format, OutputFormat::Webp);
    }

    #[test]
    fn test_job_invalid_quality() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            job_in(&dir, 0, 1920),
            Err(CompressionError::InvalidQuality(0))
        ));
        assert!(matches!(
            job_in(&dir, 101, 1920),
            Err(CompressionError::InvalidQuality(101))
        ));
    }

    #[test]
    fn test_job_invalid_max_width() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            job_in(&dir, 80, 0),
            Err(CompressionError::InvalidMaxWidth(0))
        ));
    }

    #[test]
    fn test_job_empty_paths() {
        let result = CompressionJob::new(
            PathBuf::new(),
            PathBuf::from("/tmp/out"),
            80,
            1920,
            OutputFormat::Png,
        );
        assert!(matches!(result, Err(CompressionError::MissingInputDir)));

        let result = CompressionJob::new(
            PathBuf::from("/tmp"),
            PathBuf::new(),
            80,
            1920,
            OutputFormat::Png,
        );
        assert!(matches!(result, Err(CompressionError::MissingOutputDir)));
    }

    #[test]
    fn test_job_missing_input_dir() {
        let result = CompressionJob::new(
            PathBuf::from("/nonexistent/input/dir"),
            PathBuf::from("/tmp/out"),
            80,
            1920,
            OutputFormat::Jpeg,
        );
        assert!(matches!(result, Err(CompressionError::InputDirNotFound(_))));
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Webp.extension(), "webp");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.extension(), "png");
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Webp.to_string(), "WebP");
        assert_eq!(OutputFormat::Jpeg.to_string(), "JPEG");
        assert_eq!(OutputFormat::Png.to_string(), "PNG");
    }
}
