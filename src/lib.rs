pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod job;
pub mod logger;
pub mod transform;
pub mod worker;

pub use batch::{collect_image_files, is_image_file, output_path_for, run_batch, BatchOutcome, BatchSummary};
pub use error::{CompressionError, Result};
pub use job::{CompressionJob, OutputFormat};
pub use transform::{flatten_to_rgb, shrink_to_width, transform, FileOutcome};
pub use worker::{BatchEvent, Runner};
