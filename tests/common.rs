use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a real RGB image with a simple gradient so lossy encoders have
/// something to chew on.
pub fn write_rgb_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Writes an RGBA PNG whose left half is fully transparent and right half is
/// opaque black.
pub fn write_half_transparent_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Writes garbage bytes under an image extension: decodes must fail, batches
/// must survive.
pub fn write_corrupt_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not an image").unwrap();
    path
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
