//! Decoding, channel access and encoding of carrier images

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat, RgbaImage};
use log::{debug, error};

use super::codec_options::OutputFormat;
use crate::error::WatermarkError;
use crate::result::Result;
use crate::transform::Plane;

/// Decodes `bytes` as PNG, then as JPEG, then as whatever the image crate recognizes
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .or_else(|_| image::load_from_memory_with_format(bytes, ImageFormat::Jpeg))
        .or_else(|_| image::load_from_memory(bytes))
        .map(|img| img.to_rgba8())
        .map_err(|e| {
            error!("Error decoding image: {e}");
            WatermarkError::InvalidImageMedia
        })
}

/// Drops a trailing odd row and column, fails when nothing is left
pub fn crop_even(image: RgbaImage) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let (even_width, even_height) = (width & !1, height & !1);

    if even_width == 0 || even_height == 0 {
        return Err(WatermarkError::ImageTooSmall { width, height });
    }
    if (even_width, even_height) == (width, height) {
        return Ok(image);
    }

    debug!("cropping {width}x{height} to {even_width}x{even_height}");
    Ok(image::imageops::crop_imm(&image, 0, 0, even_width, even_height).to_image())
}

/// Samples of one color channel as floats
pub fn read_channel(image: &RgbaImage, channel: usize) -> Plane {
    let (width, height) = image.dimensions();

    Plane::from_fn(width as usize, height as usize, |row, col| {
        image.get_pixel(col as u32, row as u32)[channel] as f64
    })
}

/// Writes `plane` back into one color channel, rounded and clamped to 0-255.
///
/// The other channels stay untouched.
pub fn write_channel(image: &mut RgbaImage, channel: usize, plane: &Plane) {
    let width = image.width() as usize;
    let height = image.height() as usize;

    for row in 0..height.min(plane.height()) {
        for col in 0..width.min(plane.width()) {
            let sample = plane.get(row, col).round().clamp(0.0, 255.0) as u8;
            image.get_pixel_mut(col as u32, row as u32)[channel] = sample;
        }
    }
}

/// Encodes `image` as PNG or as an RGB JPEG of the given quality
pub fn encode(image: &RgbaImage, format: OutputFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        OutputFormat::Png => image
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                WatermarkError::ImageEncodingError
            })?,
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut buf, jpeg_quality)
                .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
                .map_err(|e| {
                    error!("Error saving image as jpeg: {e}");
                    WatermarkError::ImageEncodingError
                })?
        }
    }

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn gradient(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([(x * 7 % 256) as u8, (y * 5 % 256) as u8, 128, 255])
        })
    }

    #[test]
    fn should_decode_png_and_jpeg() {
        let image = gradient(16, 10);

        let png = encode(&image, OutputFormat::Png, 95).unwrap();
        assert_eq!(decode(&png).unwrap(), image);

        let jpeg = encode(&image, OutputFormat::Jpeg, 95).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        assert_eq!(decode(&jpeg).unwrap().dimensions(), (16, 10));
    }

    #[test]
    fn should_reject_garbage() {
        assert!(matches!(
            decode(b"definitely not an image"),
            Err(WatermarkError::InvalidImageMedia)
        ));
    }

    #[test]
    fn should_crop_odd_dimensions() {
        let cropped = crop_even(gradient(17, 11)).unwrap();
        assert_eq!(cropped.dimensions(), (16, 10));
        assert_eq!(cropped.get_pixel(15, 9), gradient(17, 11).get_pixel(15, 9));

        assert!(matches!(
            crop_even(gradient(1, 9)),
            Err(WatermarkError::ImageTooSmall { width: 1, height: 9 })
        ));
    }

    #[test]
    fn should_round_and_clamp_into_one_channel() {
        let mut image = gradient(4, 2);
        let plane = Plane::from_fn(4, 2, |row, col| match (row, col) {
            (0, 0) => -12.0,
            (0, 1) => 300.0,
            (0, 2) => 41.5,
            _ => 10.4,
        });

        write_channel(&mut image, 1, &plane);

        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 128, 255]);
        assert_eq!(image.get_pixel(1, 0)[1], 255);
        assert_eq!(image.get_pixel(2, 0)[1], 42);
        assert_eq!(image.get_pixel(3, 1)[1], 10);
        assert_eq!(read_channel(&image, 1).get(0, 2), 42.0);
        assert_eq!(read_channel(&image, 0), read_channel(&gradient(4, 2), 0));
    }
}
