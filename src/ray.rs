use serde::Serialize;

use crate::algebra::Vec3;

/// `dir` is expected to be unit length; nothing enforces it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self { Self { origin, dir } }

    pub fn at(&self, t: f64) -> Vec3 { self.origin.add(self.dir.scale(t)) }
}
