mod algebra;
mod color;
mod light;
mod ppm;
mod ray;
mod renderer;
mod scene;
mod sphere;

use std::io::{self, BufWriter};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::scene::Scene;

fn main() -> anyhow::Result<()> {
    // stdout carries the image, so logs and progress go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = Scene::default();
    let width  = scene.camera.width;
    let height = scene.camera.height;

    info!("sphere : center {:?}, radius {:.4}, color {:?}",
          scene.sphere.center, scene.sphere.radius, scene.color);
    info!("light  : {:?}", scene.light.pos);
    info!("camera : {:?}, {}x{}", scene.camera.origin, width, height);
    debug!("scene json: {}", serde_json::to_string(&scene)?);

    let bar = ProgressBar::new(height as u64);
    bar.set_style(ProgressStyle::default_bar()
        .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")?);

    let img = renderer::render(&scene, &bar);
    bar.finish_and_clear();
    info!("rendered {}x{} image", width, height);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    ppm::write_ppm(&mut out, &img).context("writing PPM stream to stdout")?;
    Ok(())
}
