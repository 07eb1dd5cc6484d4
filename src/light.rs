use serde::Serialize;

use crate::algebra::Vec3;

/// Point light, white, no falloff.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Light {
    pub pos: Vec3,
}
