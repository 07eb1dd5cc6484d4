//! src/sphere.rs
//! -------------
//! Analytic ray/sphere intersection.

use serde::Serialize;

use crate::{algebra::Vec3, ray::Ray};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Sphere {
    pub center : Vec3,
    pub radius : f64,
}

/// Nearest intersection along a ray.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    #[allow(dead_code)] // shading only needs point and normal
    pub t      : f64,
    pub point  : Vec3,
    pub normal : Vec3,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self { Self { center, radius } }

    /// Intersect a ray (ro + t·rd), `rd` assumed unit length so A = 1.
    ///
    /// A zero discriminant (tangent ray) counts as a miss. The smaller root
    /// is returned even when negative, so a sphere behind the ray origin
    /// still reports a hit.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc   = ray.origin.sub(self.center);
        let a    = 1.0;
        let b    = 2.0 * ray.dir.dot(oc);
        let c    = oc.dot(oc) - self.radius * self.radius;
        let disc = b*b - 4.0*a*c;
        if disc <= 0.0 { return None; }

        let t1 = (-b + disc.sqrt()) / (2.0 * a);
        let t2 = (-b - disc.sqrt()) / (2.0 * a);
        let t  = if t1 <= t2 { t1 } else { t2 };

        let point  = ray.at(t);
        let normal = point.sub(self.center).normalize();
        Some(Hit { t, point, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::approx;

    fn unit_sphere_ahead() -> Sphere { Sphere::new(Vec3(0.0, 0.0, 10.0), 2.0) }

    #[test]
    fn center_ray_hits_front_surface() {
        let ray = Ray::new(Vec3(0.0, 0.0, 0.0), Vec3(0.0, 0.0, 1.0));
        let hit = unit_sphere_ahead().intersect(&ray).expect("should hit");
        assert!(approx(hit.t, 8.0));
        assert_eq!(hit.point, Vec3(0.0, 0.0, 8.0));
        assert_eq!(hit.normal, Vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let ray = Ray::new(Vec3(0.0, 0.0, 0.0), Vec3(1.0, 0.0, 0.0));
        assert!(unit_sphere_ahead().intersect(&ray).is_none());
    }

    #[test]
    fn tangent_ray_is_a_miss() {
        // distance from the line to the center equals the radius
        let ray = Ray::new(Vec3(2.0, 0.0, 0.0), Vec3(0.0, 0.0, 1.0));
        assert!(unit_sphere_ahead().intersect(&ray).is_none());
    }

    #[test]
    fn sphere_behind_origin_still_reports_negative_t() {
        // known quirk: no t > 0 filter
        let behind = Sphere::new(Vec3(0.0, 0.0, -10.0), 2.0);
        let ray = Ray::new(Vec3(0.0, 0.0, 0.0), Vec3(0.0, 0.0, 1.0));
        let hit = behind.intersect(&ray).expect("quirk: hit behind origin");
        assert!(approx(hit.t, -12.0));
        assert_eq!(hit.normal, Vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn origin_inside_sphere_picks_back_root() {
        let ray = Ray::new(Vec3(0.0, 0.0, 10.0), Vec3(0.0, 0.0, 1.0));
        let hit = unit_sphere_ahead().intersect(&ray).expect("should hit");
        assert!(approx(hit.t, -2.0));
        assert!(approx(hit.point.2, 8.0));
    }

    #[test]
    fn off_axis_normal_is_unit_and_outward() {
        let dir = Vec3(0.1, 0.05, 1.0).normalize();
        let hit = unit_sphere_ahead()
            .intersect(&Ray::new(Vec3(0.0, 0.0, 0.0), dir))
            .expect("should hit");
        assert!(approx(hit.normal.norm(), 1.0));
        assert!(hit.normal.dot(dir) < 0.0);
        assert!(approx(hit.point.sub(Vec3(0.0, 0.0, 10.0)).norm(), 2.0));
    }
}
