use serde::Serialize;

/// Point or direction in 3D. Serializes as `[x, y, z]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Vec3(pub f64, pub f64, pub f64);


impl Vec3 {
    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn scale(self, f: f64) -> Self { Self(self.0*f, self.1*f, self.2*f) }
    pub fn dot(self, v: Self) -> f64 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn norm(self) -> f64 { self.dot(self).sqrt() }
    /// Unguarded: a zero-length vector comes back as NaN components.
    pub fn normalize(self) -> Self { self.scale(1.0/self.norm()) }
}


#[cfg(test)]
pub(crate) fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }
