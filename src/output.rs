//! Presentation side: turns a rendered buffer into an 8-bit image.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use image::{Rgb, RgbImage};
use log::info;

use crate::camera::Resolution;
use crate::surface::Color;

fn to_byte(c: f32) -> u8 {
    (c.min(1.).max(0.) * 255.) as u8
}

/// Buffer row 0 is the bottom of the view, so rows are flipped on the way
/// into the top-down image.
pub fn to_image(pixels: &[Color], resolution: &Resolution) -> Result<RgbImage> {
    ensure!(
        pixels.len() == resolution.pixel_count(),
        "buffer holds {} pixels, expected {}x{}",
        pixels.len(),
        resolution.width,
        resolution.height
    );

    let mut image = RgbImage::new(resolution.width, resolution.height);
    for (i, color) in pixels.iter().enumerate() {
        let x = i as u32 % resolution.width;
        let y = i as u32 / resolution.width;
        image.put_pixel(
            x,
            resolution.height - 1 - y,
            Rgb([to_byte(color.x), to_byte(color.y), to_byte(color.z)]),
        );
    }
    Ok(image)
}

pub fn save_png<P: AsRef<Path>>(pixels: &[Color], resolution: &Resolution, path: P) -> Result<()> {
    let path = path.as_ref();
    let image = to_image(pixels, resolution)?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("saved {}", path.display());
    Ok(())
}
