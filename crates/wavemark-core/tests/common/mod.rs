#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

/// Smooth carrier with all channels in 80..=176, far from clipping
pub fn carrier(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let (x, y) = (x as f64, y as f64);
        let wave = (x / 23.0).sin() * (y / 17.0).cos();
        Rgba([
            (128.0 + 40.0 * wave) as u8,
            (128.0 + 30.0 * (x / 41.0).cos()) as u8,
            (128.0 - 40.0 * wave) as u8,
            255,
        ])
    })
}

pub fn png(image: &RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode carrier");
    buf.into_inner()
}

pub fn carrier_png(width: u32, height: u32) -> Vec<u8> {
    png(&carrier(width, height))
}
