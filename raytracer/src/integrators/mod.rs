use crate::{
    ray::Ray,
    renderer::{RayResult, Renderer},
};

mod whitted;

/// Turns a ray into a color against read-only renderer state. The
/// recursion depth is threaded explicitly through every call; integrators
/// hold no mutable state.
pub trait Integrator: Send + Sync {
    fn ray_cast(&self, renderer: &Renderer, ray: Ray, depth: u32) -> RayResult;
}

pub use whitted::WhittedIntegrator;
