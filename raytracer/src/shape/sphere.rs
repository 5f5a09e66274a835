use crate::{
    error::Error,
    material::MaterialId,
    math::{point::Point, vec::Vec3},
    ray::Ray,
};

use super::{IntersectionResult, RayIntersection, Shape};

pub struct Sphere {
    center: Point,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    pub fn new(center: Point, radius: f32, material: MaterialId) -> Result<Self, Error> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidShape("sphere radius must be positive"));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersection_full(&self, ray: &Ray) -> IntersectionResult {
        let cp = self.center - ray.origin;
        let v = cp.dot(ray.direction);
        let discriminant = self.radius * self.radius - (cp.dot(cp) - v * v);
        if discriminant < 0.0 {
            return IntersectionResult::NoIntersection;
        }

        // Near root only. A ray starting inside the sphere gets a negative
        // time here and falls outside the valid range, so interior origins
        // report no intersection.
        let t = v - discriminant.sqrt();
        if !t.is_finite() || !ray.range().contains(&t) {
            return IntersectionResult::NoIntersection;
        }

        let pos = ray.at(t);
        IntersectionResult::Intersection(RayIntersection {
            t,
            pos,
            normal: self.normal_at(pos),
            material: self.material,
        })
    }

    fn normal_at(&self, p: Point) -> Vec3 {
        (p - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::{IntersectionResult, MaterialId, Point, Shape, Sphere, Vec3};
    use crate::ray::Ray;

    const EPS: f32 = 1e-4;

    fn sphere(center: Point, radius: f32) -> Sphere {
        Sphere::new(center, radius, MaterialId(0)).unwrap()
    }

    #[test]
    fn head_on_hit_time_is_distance_minus_radius() {
        let sphere = sphere(Point::new(0.0, 0.0, -10.0), 2.0);
        let ray = Ray::new(Point::ORIGIN, Vec3::new(0.0, 0.0, -1.0));

        let IntersectionResult::Intersection(hit) = sphere.intersection_full(&ray) else {
            panic!("expected a hit");
        };
        assert!((hit.t - 8.0).abs() < EPS);
        assert!((hit.pos - Point::new(0.0, 0.0, -8.0)).length_squared() < EPS);
        assert!(hit.normal.distance_squared(Vec3::Z) < EPS);
    }

    #[test]
    fn ray_outside_the_extent_misses() {
        let sphere = sphere(Point::new(0.0, 0.0, -10.0), 2.0);
        let ray = Ray::new(Point::ORIGIN, Vec3::new(0.0, 1.0, 0.0));
        assert!(matches!(
            sphere.intersection_full(&ray),
            IntersectionResult::NoIntersection
        ));
    }

    #[test]
    fn sphere_behind_the_origin_misses() {
        let sphere = sphere(Point::new(0.0, 0.0, 10.0), 2.0);
        let ray = Ray::new(Point::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        assert!(matches!(
            sphere.intersection_full(&ray),
            IntersectionResult::NoIntersection
        ));
    }

    #[test]
    fn interior_origin_reports_no_intersection() {
        let sphere = sphere(Point::new(0.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(Point::ORIGIN, Vec3::new(1.0, 0.0, 0.0));
        assert!(matches!(
            sphere.intersection_full(&ray),
            IntersectionResult::NoIntersection
        ));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert!(Sphere::new(Point::ORIGIN, 0.0, MaterialId(0)).is_err());
        assert!(Sphere::new(Point::ORIGIN, -1.0, MaterialId(0)).is_err());
    }
}
