use anyhow::Context;
use clap::Parser;
use img_press::batch::BatchOutcome;
use img_press::cli::Args;
use img_press::job::CompressionJob;
use img_press::worker::{BatchEvent, Runner};
use img_press::{info, logger, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    let job = CompressionJob::new(
        args.input_dir,
        args.output_dir,
        args.quality,
        args.max_width,
        args.format,
    )
    .context("invalid job configuration")?;

    info!(
        "🚀 Compressing {} -> {}",
        job.input_dir.display(),
        job.output_dir.display()
    );
    verbose!(
        "quality {}, max width {}px, format {}",
        job.quality,
        job.max_width,
        job.format
    );

    let runner = Runner::new();
    let events = runner.spawn(job).context("failed to start batch worker")?;

    let mut progress_bar: Option<ProgressBar> = None;
    let mut outcome = None;

    for event in events {
        match event {
            BatchEvent::Progress { processed, total } => {
                let pb = progress_bar.get_or_insert_with(|| {
                    let pb = ProgressBar::new(total as u64);
                    pb.set_style(ProgressStyle::default_bar());
                    pb
                });
                pb.set_position(processed as u64);
            }
            BatchEvent::Finished(result) => outcome = Some(result),
            BatchEvent::Failed(e) => {
                if let Some(pb) = progress_bar.take() {
                    pb.abandon();
                }
                return Err(e).context("batch run failed");
            }
        }
    }

    if let Some(pb) = progress_bar.take() {
        pb.finish_and_clear();
    }

    match outcome {
        Some(BatchOutcome::NoFilesFound) => {
            warn!("No image files found in the input directory");
        }
        Some(BatchOutcome::Completed(summary)) => {
            info!(
                "✅ Done: {}/{} files converted",
                summary.succeeded, summary.total
            );
            if summary.failed() > 0 {
                warn!("{} file(s) failed, see errors above", summary.failed());
            }
        }
        // worker always sends a terminal event before hanging up
        None => anyhow::bail!("worker exited without reporting a result"),
    }

    Ok(())
}
