/// Construction-time invariant violations.
///
/// Scenes are built once before rendering starts; rejecting an invalid
/// object here is what keeps the intersection and shading code total over
/// its inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("cannot derive a direction from a zero-length vector")]
    DegenerateVector,

    #[error("invalid shape: {0}")]
    InvalidShape(&'static str),

    #[error("invalid surface: specular {specular} and lambert {lambert} must be non-negative and sum to at most 1")]
    InvalidSurface { specular: f32, lambert: f32 },

    #[error("invalid texture: {0}")]
    InvalidTexture(&'static str),

    #[error("invalid camera: {0}")]
    InvalidCamera(&'static str),
}
