use chrono::{DateTime, Local};
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage, ImageReader};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::IngestError;
use crate::state::{GalleryStore, StoredImage};

/// Images wider than this are scaled down
pub const DEFAULT_MAX_WIDTH: u32 = 1080;

/// JPEG quality for stored images
pub const DEFAULT_JPEG_QUALITY: u8 = 70;

/// Knobs for the resize/re-encode step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Maximum output width in pixels
    pub max_width: u32,
    /// JPEG quality (1-100)
    pub quality: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Ingest `source` into the store, naming the output after the current time.
///
/// Two calls within the same second produce the same filename and the
/// second one overwrites the first.
pub fn ingest_image(
    store: &GalleryStore,
    source: &Path,
    options: IngestOptions,
) -> Result<StoredImage, IngestError> {
    ingest_image_at(store, source, options, Local::now())
}

/// Ingest `source` into the store using `now` for the output filename.
///
/// Steps:
/// 1. Decode (format sniffed from content, not extension)
/// 2. Drop alpha / convert to 8-bit RGB when JPEG can't hold the pixels
/// 3. Downscale to `max_width` if wider, Lanczos3, height truncated
/// 4. Encode JPEG into `images/img_<YYYYMMDD_HHMMSS>.jpg`
pub fn ingest_image_at(
    store: &GalleryStore,
    source: &Path,
    options: IngestOptions,
    now: DateTime<Local>,
) -> Result<StoredImage, IngestError> {
    let img = decode(source)?;
    let (width, height) = (img.width(), img.height());
    debug!("Decoded {} ({}x{}, {:?})", source.display(), width, height, img.color());

    let img = normalize_color(img);

    let (new_width, new_height) = target_size(width, height, options.max_width);
    if new_height == 0 {
        return Err(IngestError::Resize {
            width,
            height,
            max_width: options.max_width,
        });
    }

    let img = if new_width != width {
        debug!("Resizing {}x{} -> {}x{}", width, height, new_width, new_height);
        img.resize_exact(new_width, new_height, FilterType::Lanczos3)
    } else {
        img
    };

    let filename = image_filename(now);
    let images_dir = store.images_dir();
    fs::create_dir_all(&images_dir).map_err(|source| IngestError::Io {
        path: images_dir.clone(),
        source,
    })?;

    let path = store.image_path(&filename);
    write_jpeg(&img, &path, options.quality)?;

    info!(
        "📸 Stored {} ({}x{}) from {}",
        filename,
        img.width(),
        img.height(),
        source.display()
    );

    Ok(StoredImage {
        filename,
        width: img.width(),
        height: img.height(),
        path,
    })
}

/// Output filename for an image processed at `now`
pub fn image_filename(now: DateTime<Local>) -> String {
    format!("img_{}.jpg", now.format("%Y%m%d_%H%M%S"))
}

/// Output dimensions for a `width`x`height` image.
/// Wider than `max_width` scales to `max_width` with the height truncated;
/// anything else is left as-is.
pub fn target_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }

    let ratio = f64::from(max_width) / f64::from(width);
    let new_height = (f64::from(height) * ratio) as u32;
    (max_width, new_height)
}

/// Bring the pixels into a layout the JPEG encoder writes: 8-bit gray
/// or 8-bit RGB. Alpha is dropped, not composited.
fn normalize_color(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

fn decode(source: &Path) -> Result<DynamicImage, IngestError> {
    let io_err = |source_err| IngestError::Io {
        path: source.to_path_buf(),
        source: source_err,
    };

    ImageReader::open(source)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|err| IngestError::Decode {
            path: source.to_path_buf(),
            source: err,
        })
}

fn write_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<(), IngestError> {
    let io_err = |source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    img.write_with_encoder(encoder)
        .map_err(|source| IngestError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(io_err)
}
