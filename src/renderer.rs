use crate::{
    algebra::Vec3,
    color::Color,
    light::Light,
    ray::Ray,
    scene::Scene,
    sphere::Sphere,
};
use image::{Rgb, RgbImage};
use indicatif::ProgressBar;
use rayon::prelude::*;

const AMBIENT: f64 = 0.1;
const SHININESS: f64 = 200.0;

/// Ambient + diffuse + specular from a single point light, clamped to 1.
///
/// The diffuse term is added on top of the ambient one without rescaling,
/// so channels can pass 1 before the clamp. When the light is behind the
/// surface (`n·l <= 0`) only ambient remains.
pub fn illuminate(
    ray: &Ray,
    hit: Vec3,
    obj_color: Color,
    n: Vec3,
    light: &Light,
) -> Color {
    let mut color = obj_color.scale(AMBIENT);

    let l  = light.pos.sub(hit).normalize();
    let dp = l.dot(n);
    if dp > 0.0 {
        color = color.add(obj_color.scale(dp));

        let r   = l.sub(n.scale(2.0 * dp)).normalize();
        let dp2 = r.dot(ray.dir);
        if dp2 > 0.0 {
            color = color.add_scalar(dp2.powf(SHININESS));
        }
    }

    color.clamp_max(1.0)
}

/// Colour seen along `ray`; black when the sphere is missed.
pub fn trace(ray: &Ray, sphere: &Sphere, color: Color, light: &Light) -> Color {
    match sphere.intersect(ray) {
        Some(hit) => illuminate(ray, hit.point, color, hit.normal, light),
        None => Color::BLACK,
    }
}

pub fn pixel_color(x: u32, y: u32, scene: &Scene) -> Rgb<u8> {
    let ray = scene.camera.ray_for_pixel(x, y);
    trace(&ray, &scene.sphere, scene.color, &scene.light).to_rgb8()
}

/// Rows are shaded in parallel; each pixel is placed by coordinate so the
/// buffer stays row-major whatever order rayon finishes in.
pub fn render(scene: &Scene, bar: &ProgressBar) -> RgbImage {
    let width  = scene.camera.width;
    let height = scene.camera.height;

    let rows: Vec<_> = (0..height).into_par_iter().flat_map(|y| {
        let row: Vec<_> = (0..width)
            .map(|x| ((x, y), pixel_color(x, y, scene)))
            .collect();
        bar.inc(1);
        row
    }).collect();

    let mut img = RgbImage::new(width, height);
    for ((x, y), rgb) in rows { img.put_pixel(x, y, rgb); }
    img
}
