use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::{CompressionError, Result};
use crate::job::CompressionJob;
use crate::transform::{transform, FileOutcome};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Final tally of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

/// Terminal state of a run. An empty input directory is reported distinctly
/// from a completed pass so callers can show the right message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    NoFilesFound,
    Completed(BatchSummary),
}

/// Lists candidate images directly inside `input_dir` (not recursive),
/// matching extensions case-insensitively and skipping hidden files. Sorted
/// by filename so runs are deterministic.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    let walker = WalkDir::new(input_dir).max_depth(1).into_iter();
    for entry in
        walker.filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            image_files.push(path.to_path_buf());
        }
    }

    image_files.sort();
    Ok(image_files)
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Destination path for one source file: same stem, extension swapped for the
/// job's output format.
pub fn output_path_for(input_path: &Path, job: &CompressionJob) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .ok_or_else(|| CompressionError::InvalidFileName(input_path.to_path_buf()))?;
    let filename = format!("{}.{}", stem.to_string_lossy(), job.format.extension());
    Ok(job.output_dir.join(filename))
}

/// Drives one full pass over the job's input directory, invoking
/// `on_progress(processed, total)` synchronously after each file.
///
/// Per-file failures are logged, counted, and never abort the batch; only
/// pre-run errors (unreadable input directory, output directory creation)
/// surface as `Err`.
pub fn run_batch(
    job: &CompressionJob,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<BatchOutcome> {
    let image_files = collect_image_files(&job.input_dir)?;
    let total = image_files.len();

    if total == 0 {
        return Ok(BatchOutcome::NoFilesFound);
    }

    fs::create_dir_all(&job.output_dir)
        .map_err(|_| CompressionError::DirectoryCreationFailed(job.output_dir.clone()))?;

    let mut processed = 0;
    let mut succeeded = 0;

    for input_path in &image_files {
        if process_one(input_path, job) {
            succeeded += 1;
        }
        processed += 1;
        on_progress(processed, total);
    }

    Ok(BatchOutcome::Completed(BatchSummary { total, succeeded }))
}

// The transform pipeline handles its own failures, but a panic out of a codec
// must not take the rest of the batch down with it.
fn process_one(input_path: &Path, job: &CompressionJob) -> bool {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let output_path = match output_path_for(input_path, job) {
            Ok(p) => p,
            Err(e) => {
                crate::error!("Failed to process {}: {}", input_path.display(), e);
                return FileOutcome::EncodeFailed(e);
            }
        };
        transform(input_path, &output_path, job)
    }));

    match outcome {
        Ok(result) => result.is_success(),
        Err(_) => {
            crate::error!("Failed to process {}: unexpected panic", input_path.display());
            false
        }
    }
}
