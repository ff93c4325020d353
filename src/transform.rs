use crate::constants::{
    LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_HIGH_THRESHOLD, LIBDEFLATER_LOW_LEVEL, MATTE_WHITE,
    ZOPFLI_ITERATIONS, ZOPFLI_QUALITY_THRESHOLD,
};
use crate::error::{CompressionError, Result};
use crate::job::{CompressionJob, OutputFormat};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use oxipng::{Deflaters, Options};
use std::io::{Cursor, Write};
use std::num::NonZeroU8;
use std::path::Path;
use tempfile::NamedTempFile;

/// Per-file result of the transform pipeline. Failures are tagged with the
/// phase they occurred in so the batch tally can stay exhaustive.
#[derive(Debug)]
pub enum FileOutcome {
    Converted,
    DecodeFailed(CompressionError),
    EncodeFailed(CompressionError),
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Converted)
    }
}

/// Runs the full pipeline for one file: decode, flatten onto white, shrink to
/// the job's maximum width, encode at the job's quality.
///
/// Never returns an error: every failure is logged with the source path and
/// folded into the returned [`FileOutcome`].
pub fn transform(source: &Path, dest: &Path, job: &CompressionJob) -> FileOutcome {
    let img = match decode_image(source) {
        Ok(img) => img,
        Err(e) => {
            crate::error!("Failed to process {}: {}", source.display(), e);
            return FileOutcome::DecodeFailed(e);
        }
    };

    let rgb = flatten_to_rgb(&img);
    let rgb = shrink_to_width(rgb, job.max_width);

    match encode_image(&rgb, dest, job.format, job.quality) {
        Ok(()) => FileOutcome::Converted,
        Err(e) => {
            crate::error!("Failed to process {}: {}", source.display(), e);
            FileOutcome::EncodeFailed(e)
        }
    }
}

fn decode_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| CompressionError::Decode {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;
    reader.decode().map_err(|e| CompressionError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Normalizes any decoded image to 3-channel RGB. Images with an alpha
/// channel (RGBA or luminance+alpha) are composited onto an opaque white
/// matte, so fully transparent pixels come out pure white instead of black.
pub fn flatten_to_rgb(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let alpha = src[3] as u16;
        for c in 0..3 {
            let blended = src[c] as u16 * alpha + MATTE_WHITE[c] as u16 * (255 - alpha);
            dst[c] = (blended / 255) as u8;
        }
    }
    out
}

/// Downscales to exactly `max_width` wide when the image is wider, keeping
/// the aspect ratio (height truncates). Never upscales.
pub fn shrink_to_width(img: RgbImage, max_width: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    if width <= max_width {
        return img;
    }

    let new_height = ((height as u64 * max_width as u64) / width as u64).max(1) as u32;
    image::imageops::resize(
        &img,
        max_width,
        new_height,
        image::imageops::FilterType::Lanczos3,
    )
}

/// Encodes `img` in the requested format and commits it to `dest`.
///
/// Quality is codec-specific: lossy fidelity for JPEG and WebP; for PNG it
/// selects oxipng's deflate effort (>=90 Zopfli, >=70 libdeflater high, else
/// libdeflater low) and never changes pixels. The encoded bytes are fully
/// buffered, written to a temporary file next to `dest`, and renamed into
/// place, so no partial file ever lands on the final path.
pub fn encode_image(
    img: &RgbImage,
    dest: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<()> {
    let bytes = match format {
        OutputFormat::Jpeg => encode_jpeg(img, quality).map_err(|e| CompressionError::Encode {
            path: dest.to_path_buf(),
            message: e.to_string(),
        })?,
        OutputFormat::Webp => {
            let encoder = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height());
            encoder.encode(quality as f32).to_vec()
        }
        OutputFormat::Png => encode_png(img, quality)?,
    };

    write_atomic(dest, &bytes)
}

fn encode_jpeg(img: &RgbImage, quality: u8) -> image::ImageResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)?;
    Ok(buf)
}

fn encode_png(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut png_buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_buf), ImageFormat::Png)
        .map_err(|e| CompressionError::PngOptimization(e.to_string()))?;

    let mut options = Options::from_preset(4);
    options.force = true;
    options.deflate = if quality >= ZOPFLI_QUALITY_THRESHOLD {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).expect("nonzero iteration count"),
        }
    } else if quality >= LIBDEFLATER_HIGH_THRESHOLD {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    oxipng::optimize_from_memory(&png_buf, &options)
        .map_err(|e| CompressionError::PngOptimization(e.to_string()))
}

fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<()> {
    let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(bytes)?;
    tmp.persist(dest).map_err(|e| CompressionError::Io(e.error))?;
    Ok(())
}
