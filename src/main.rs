use anyhow::Result;
use clap::Parser;
use log::info;

use phong_raytracer::cli::Args;
use phong_raytracer::config::Settings;
use phong_raytracer::logger::init_logger;
use phong_raytracer::output::save_png;
use phong_raytracer::render::render;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(width) = args.width {
        settings.render.width = width;
    }
    if let Some(height) = args.height {
        settings.render.height = height;
    }
    if let Some(gamma) = args.gamma {
        settings.render.gamma = gamma;
    }
    if let Some(output) = args.output {
        settings.render.output = output;
    }
    settings.validate()?;

    let scene = settings.scene();
    let config = settings.render_config();
    info!("scene has {} surfaces, light at {}", scene.surfaces().len(), scene.light.position);

    let pixels = render(&scene, &config);
    save_png(&pixels, &config.resolution, &settings.render.output)
}
