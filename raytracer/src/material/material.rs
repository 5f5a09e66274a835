use crate::{color::Color, math::point::Point};

/// Shading description of a surface: its base color at a point and how the
/// reflected, diffuse and ambient terms are weighted.
pub trait Material: Send + Sync {
    /// Base color of the surface at `p`.
    fn base_color(&self, p: Point) -> Color;

    /// Weight of the mirrored ray's color.
    fn specular(&self) -> f32;

    /// Weight of the diffuse contribution from visible lights.
    fn lambert(&self) -> f32;

    /// Weight of the constant term approximating indirect light.
    fn ambient(&self) -> f32;
}

pub struct MaterialDescriptor {
    pub label: Option<String>,
    pub material: Box<dyn Material>,
}

impl std::fmt::Debug for MaterialDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialDescriptor")
            .field("label", &self.label)
            .field("material", &"<material>")
            .finish()
    }
}

/// Handle into the scene's material registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub usize);
