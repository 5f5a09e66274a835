use crate::{
    material::MaterialId,
    math::{point::Point, vec::Vec3},
    ray::Ray,
};

/// What the renderer needs from a scene object: whether a ray meets it,
/// and the surface normal where it does.
pub trait Shape: Send + Sync {
    /// Nearest intersection of `ray` with the shape inside the ray's valid
    /// time range.
    fn intersection_full(&self, ray: &Ray) -> IntersectionResult;

    /// Surface normal at `p`. `p` must lie on the shape boundary.
    fn normal_at(&self, p: Point) -> Vec3;
}

/// Local information about a ray/shape collision.
#[derive(Debug, Clone, Copy)]
pub struct RayIntersection {
    pub t: f32,
    pub pos: Point,
    pub normal: Vec3,
    pub material: MaterialId,
}

/// A `Result`-like type for intersection queries. Presence is checked by
/// matching, never by comparing a time against a sentinel value.
#[derive(Debug, Clone, Copy)]
pub enum IntersectionResult {
    Intersection(RayIntersection),
    NoIntersection,
}
