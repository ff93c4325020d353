use crate::constants::{DEFAULT_MAX_WIDTH, DEFAULT_QUALITY};
use crate::job::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-press",
    about = "Batch-recompress a folder of images",
    long_about = "img-press walks the top level of an input folder, shrinks every image wider \
                  than the maximum width, flattens transparency onto white, and re-encodes each \
                  file as WebP, JPEG or PNG at the chosen quality. One output file per input, \
                  named <stem>.<format extension>.",
    version,
    after_help = "EXAMPLES:\n  \
    img-press ./photos ./compressed\n  \
    img-press ./photos ./compressed -q 85 -w 2560 -f jpeg\n  \
    img-press ./scans ./optimized -f png --quiet"
)]
pub struct Args {
    #[arg(help = "Input directory (top level only, not recursive)")]
    pub input_dir: PathBuf,

    #[arg(help = "Output directory (created if missing)")]
    pub output_dir: PathBuf,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        help = "Compression quality (1-100)",
        long_help = "Compression quality from 1 (smallest) to 100 (best). Lossy fidelity for \
                     JPEG and WebP; for PNG it selects optimization effort and never alters pixels."
    )]
    pub quality: u8,

    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_MAX_WIDTH,
        help = "Maximum output width in pixels",
        long_help = "Images wider than this are scaled down to exactly this width, preserving \
                     aspect ratio. Narrower images are never upscaled."
    )]
    pub max_width: u32,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "webp",
        help = "Output format for every file",
        long_help = "Every image is re-encoded in this format regardless of its input format. \
                     Supported: webp, jpeg, png."
    )]
    pub format: OutputFormat,

    #[arg(long, help = "Suppress status output (errors still print)")]
    pub quiet: bool,

    #[arg(long, help = "Print extra detail per processed file")]
    pub verbose: bool,
}
