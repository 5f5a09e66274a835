use std::ops::{Range, RangeInclusive};

use crate::{
    math::{point::Point, vec::Vec3},
    EPSILON,
};

/// An origin and a unit direction, plus the interval of times at which an
/// intersection counts.
///
/// The direction is normalized at construction with `normalize_or_zero`: a
/// zero-length input is kept as the zero vector, and such a degenerate ray
/// reports no intersection with any shape.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    /// A color ray. The lower bound tolerates slightly negative times so
    /// that a hit exactly at the origin surface is kept, matching the
    /// nearest-intersection filter.
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            bounds: (-EPSILON, f32::INFINITY),
        }
    }

    /// A ray whose valid intersection times are restricted to `range`,
    /// e.g. a shadow ray bounded by the distance to its light.
    pub fn new_with_range(origin: Point, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            bounds: (range.start, range.end),
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.bounds.0..=self.bounds.1
    }

    pub fn at(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Ray, Vec3};

    const EPS: f32 = 1e-6;

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Point::ORIGIN, Vec3::new(0.0, -3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < EPS);
        assert!(ray.direction.distance_squared(Vec3::new(0.0, -0.6, 0.8)) < EPS);
    }

    #[test]
    fn at_walks_along_the_direction() {
        let ray = Ray::new(Point::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 0.0));
        assert!((ray.at(0.0) - ray.origin).length_squared() < EPS);
        assert!((ray.at(2.0) - (ray.origin + 2.0 * ray.direction)).length_squared() < EPS);
    }

    #[test]
    fn zero_direction_is_kept_as_zero() {
        let ray = Ray::new(Point::ORIGIN, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);
    }
}
