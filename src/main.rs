// filepath: src/main.rs

use std::env;
use std::path::PathBuf;

use element_render::config::Scene;
use element_render::scene::render_scene;
use element_render::{Canvas, FontdueBackend, ImageDecoder};
use image::RgbaImage;
use log::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting element-render");

    let mut args = env::args().skip(1);
    let scene = match args.next() {
        Some(path) => Scene::load_from(&path)?,
        None => Scene::load_from_file()?,
    };
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| scene.output.clone());
    info!("Scene loaded: {}x{}, {} elements", scene.width, scene.height, scene.elements.len());

    let mut pixels = vec![0u8; scene.width as usize * scene.height as usize * 4];
    let report = {
        let mut canvas = Canvas::new(&mut pixels, scene.width, scene.height);
        render_scene(&mut canvas, &FontdueBackend::new(), &ImageDecoder::new(), &scene)
    };
    if !report.is_complete() {
        warn!("{} element(s) were not drawn", report.failed.len());
    }

    let frame = RgbaImage::from_raw(scene.width, scene.height, pixels)
        .ok_or("frame buffer does not match the scene size")?;
    frame.save(&output)?;
    info!("Frame written to {:?}", output);

    Ok(())
}
