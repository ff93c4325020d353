pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_MAX_WIDTH: u32 = 1920;

/// Extensions picked up during directory enumeration, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

// Quality-to-effort tiers for PNG output. Quality never changes PNG pixels,
// it only selects how hard oxipng works on the deflate stream.
pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const ZOPFLI_QUALITY_THRESHOLD: u8 = 90;
pub const LIBDEFLATER_HIGH_THRESHOLD: u8 = 70;

/// Opaque white, the matte color alpha images are composited onto before
/// encoding to formats without an alpha channel.
pub const MATTE_WHITE: [u8; 3] = [255, 255, 255];
