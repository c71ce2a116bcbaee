//! Single-threaded render loop: one primary ray per pixel, row-major,
//! bottom row first.

use std::time::Instant;

use log::info;

use crate::camera::Resolution;
use crate::scene::Scene;
use crate::surface::Color;

pub const DEFAULT_GAMMA: f32 = 2.2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub resolution: Resolution,
    pub gamma: f32,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            gamma: DEFAULT_GAMMA,
        }
    }
}

/// `c^(1/gamma)` per channel. Out of range values pass through unclamped.
pub fn gamma_correct(color: &Color, gamma: f32) -> Color {
    color.map(|c| c.powf(1. / gamma))
}

pub fn render(scene: &Scene, config: &RenderConfig) -> Vec<Color> {
    let mut pixels = Vec::new();
    render_into(scene, config, &mut pixels);
    pixels
}

/// Renders into `pixels`, replacing whatever it held. The buffer ends up with
/// exactly `width * height` entries.
pub fn render_into(scene: &Scene, config: &RenderConfig, pixels: &mut Vec<Color>) {
    let resolution = &config.resolution;
    info!(
        "rendering {}x{} ({} pixels, {} surfaces)",
        resolution.width,
        resolution.height,
        resolution.pixel_count(),
        scene.surfaces().len()
    );
    let start = Instant::now();

    pixels.clear();
    pixels.reserve(resolution.pixel_count());
    for y in 0..resolution.height {
        for x in 0..resolution.width {
            let ray = scene.camera.get_ray(x as f32, y as f32, resolution);
            let color = scene.trace(&ray);
            pixels.push(gamma_correct(&color, config.gamma));
        }
    }

    info!("rendered in {:.2?}", start.elapsed());
}
