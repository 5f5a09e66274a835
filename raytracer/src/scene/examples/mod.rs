mod facing_mirrors;
mod sphere_row;

pub use facing_mirrors::FacingMirrorsScene;
pub use sphere_row::SphereRowScene;
