use bytemuck::{Pod, Zeroable};

use crate::{
    aggregate::{shapelist::ShapeList, Aggregate},
    camera::Camera,
    color::{self, Color},
    error::Error,
    integrators::{Integrator, WhittedIntegrator},
    material::MaterialDescriptor,
    math::point::Point,
    ray::Ray,
    scene::Scene,
    shape::IntersectionResult,
    EPSILON,
};

pub struct RendererOptions {
    pub background: Color,
}

/// Read-only rendering state: camera, scene content and the integrator
/// evaluating colors. Safe to share across worker threads as-is.
pub struct Renderer {
    pub camera: Camera,
    pub objects: ShapeList,
    pub lights: Vec<Point>,
    pub materials: Vec<MaterialDescriptor>,
    pub options: RendererOptions,
    pub integrator: Box<dyn Integrator>,
}

/// Per-pixel result of a color ray evaluation.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RayResult {
    pub color: Color,
    pub z: f32,
}

impl Default for RayResult {
    fn default() -> Self {
        Self {
            color: color::BLACK,
            z: 0.0,
        }
    }
}

/// SAFETY: `Color` is a transparent wrapper over `[f32; 3]`, the struct is
/// `repr(C)` without padding, has no interior mutability, and every bit
/// pattern is a valid `f32`.
unsafe impl Pod for RayResult {}

/// SAFETY: the all-zero pattern is the black result at depth zero.
unsafe impl Zeroable for RayResult {}

pub struct RendererCreateInfo {
    pub width: u32,
    pub height: u32,
    pub max_depth: u32,
    pub scene: Scene,
}

impl Renderer {
    pub fn new(info: RendererCreateInfo) -> Result<Self, Error> {
        let RendererCreateInfo {
            width,
            height,
            max_depth,
            scene,
        } = info;

        let camera = Camera::new(
            width,
            height,
            scene.field_of_view,
            scene.position,
            scene.looking_at,
        )?;

        log::info!(
            "Rendering {} objects under {} lights at {}x{}",
            scene.objects.len(),
            scene.lights.len(),
            width,
            height
        );

        Ok(Self {
            camera,
            objects: scene.objects,
            lights: scene.lights,
            materials: scene.materials,
            options: RendererOptions {
                background: color::BLACK,
            },
            integrator: Box::new(WhittedIntegrator { max_depth }),
        })
    }

    /// Color of the pixel at viewport coordinates `vx`, `vy` in `[-1, 1]`.
    pub fn process_pixel(&self, vx: f32, vy: f32) -> RayResult {
        let ray = self.camera.ray(vx, vy);
        self.integrator.ray_cast(self, ray, 0)
    }

    /// True when nothing blocks the segment between `p` and `light`. The
    /// check is bounded by the light's distance, so an object beyond the
    /// light never occludes it.
    pub fn light_is_visible(&self, p: Point, light: Point) -> bool {
        crate::counter!("Shadow rays");

        let to_light = light - p;
        let ray = Ray::new_with_range(p, to_light, EPSILON..to_light.length());
        matches!(
            self.objects.first_intersection(ray),
            IntersectionResult::NoIntersection
        )
    }
}
