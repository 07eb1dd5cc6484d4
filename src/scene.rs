use serde::Serialize;

use crate::{
    algebra::Vec3,
    color::Color,
    light::Light,
    ray::Ray,
    sphere::Sphere,
};

/// Pinhole camera looking down +z. The image plane sits at z = 1 and
/// spans [-0.5, 0.5] on both axes.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Camera {
    pub origin: Vec3,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    /// Primary ray through pixel (x, y); y grows downward.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let dir = Vec3(
            -0.5 + x as f64 / self.width as f64,
            0.5 - y as f64 / self.height as f64,
            1.0,
        );
        Ray::new(self.origin, dir.normalize())
    }
}

/// One sphere, one light, one camera.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Scene {
    pub sphere: Sphere,
    pub color: Color,
    pub light: Light,
    pub camera: Camera,
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            sphere: Sphere::new(Vec3(0.0, 0.0, 10.0), 2.0),
            color: Color::new(1.0, 0.0, 0.0),
            light: Light { pos: Vec3(5.0, 10.0, 0.0) },
            camera: Camera {
                origin: Vec3(0.0, 0.0, 0.0),
                width: 1000,
                height: 1000,
            },
        }
    }
}
