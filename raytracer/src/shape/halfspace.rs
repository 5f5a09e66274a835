use crate::{
    error::Error,
    material::MaterialId,
    math::{point::Point, vec::Vec3},
    ray::Ray,
};

use super::{IntersectionResult, RayIntersection, Shape};

/// An infinite plane dividing space in two, anchored at `point` and facing
/// along its unit `normal`.
pub struct Halfspace {
    point: Point,
    normal: Vec3,
    material: MaterialId,
}

impl Halfspace {
    pub fn new(point: Point, normal: Vec3, material: MaterialId) -> Result<Self, Error> {
        let normal = normal.try_normalize().ok_or(Error::DegenerateVector)?;
        Ok(Self {
            point,
            normal,
            material,
        })
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

impl Shape for Halfspace {
    fn intersection_full(&self, ray: &Ray) -> IntersectionResult {
        let v = ray.direction.dot(self.normal);
        // A ray parallel to the plane never crosses it.
        if v == 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let t = -1.0 / v;
        if !t.is_finite() || !ray.range().contains(&t) {
            return IntersectionResult::NoIntersection;
        }

        IntersectionResult::Intersection(RayIntersection {
            t,
            pos: ray.at(t),
            normal: self.normal,
            material: self.material,
        })
    }

    fn normal_at(&self, _p: Point) -> Vec3 {
        self.normal
    }
}
