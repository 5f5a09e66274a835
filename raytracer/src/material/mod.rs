mod material;
mod shaded;
pub mod texture;

pub use material::{Material, MaterialDescriptor, MaterialId};
pub use shaded::ShadedSurface;
