use crate::icon::DecodedImage;
use anyhow::{Context, Result};
use image::{io::Reader, DynamicImage};
use std::path::Path;

pub trait PixelDecoder {
    type Pixels: AsRef<[u8]>;

    fn decode(&self, path: &Path) -> Result<DecodedImage<Self::Pixels>>;

    fn decode_memory(&self, raw: &[u8]) -> Result<DecodedImage<Self::Pixels>>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ImageDecoder;

impl PixelDecoder for ImageDecoder {
    type Pixels = Vec<u8>;

    fn decode(&self, path: &Path) -> Result<DecodedImage<Vec<u8>>> {
        let image =
            read_image(path).with_context(|| format!("Failed to decode image {}", path.display()))?;

        Ok(into_rgba(image))
    }

    fn decode_memory(&self, raw: &[u8]) -> Result<DecodedImage<Vec<u8>>> {
        let image = image::load_from_memory(raw).context("Failed to decode image from memory")?;

        Ok(into_rgba(image))
    }
}

// The format comes from the file contents, the extension is only a fallback.
fn read_image(path: &Path) -> Result<DynamicImage> {
    let image = Reader::open(path)?.with_guessed_format()?.decode()?;

    Ok(image)
}

fn into_rgba(image: DynamicImage) -> DecodedImage<Vec<u8>> {
    let image = image.into_rgba8();

    let (width, height) = image.dimensions();

    DecodedImage::new(width, height, image.into_raw())
}
