use crate::{
    ray::Ray,
    shape::{IntersectionResult, Shape},
};

use super::Aggregate;

/// A plain list of shapes, scanned exhaustively per ray. Sufficient for
/// the bounded scene sizes this renderer targets.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

impl ShapeList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Aggregate for ShapeList {
    fn first_intersection(&self, mut ray: Ray) -> IntersectionResult {
        let mut res = IntersectionResult::NoIntersection;

        for shape in self.0.iter() {
            if ray.range().is_empty() {
                break;
            }

            if let IntersectionResult::Intersection(record) = shape.intersection_full(&ray) {
                // Only a strictly nearer hit can replace this one.
                ray.bounds.1 = record.t;
                res = IntersectionResult::Intersection(record);
            }
        }
        res
    }
}
