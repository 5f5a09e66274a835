use crate::{
    error::Error,
    math::{point::Point, vec::Vec3},
    ray::Ray,
};

/// World-space up, used to derive the camera basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

pub struct Camera {
    pub width: u32,
    pub height: u32,
    origin: Point,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_width: f32,
    half_height: f32,
}

impl Camera {
    pub fn new(
        width: u32,
        height: u32,
        fov_degrees: f32,
        origin: Point,
        looking_at: Point,
    ) -> Result<Self, Error> {
        if width < 2 || height < 2 {
            return Err(Error::InvalidCamera("image must be at least 2x2 pixels"));
        }
        if !fov_degrees.is_finite() || fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(Error::InvalidCamera(
                "field of view must lie strictly between 0 and 180 degrees",
            ));
        }

        let forward = (looking_at - origin)
            .try_normalize()
            .ok_or(Error::InvalidCamera("position and look-at point coincide"))?;
        let right = forward.cross(WORLD_UP).try_normalize().ok_or(Error::InvalidCamera(
            "view direction is parallel to the world up axis",
        ))?;
        let up = right.cross(forward).normalize();

        // Half extents of the view plane at unit distance. The plane is 4:3
        // independently of the pixel dimensions.
        let half_width = f32::tan(fov_degrees.to_radians() / 2.0);
        let half_height = 0.75 * half_width;

        Ok(Self {
            width,
            height,
            origin,
            forward,
            right,
            up,
            half_width,
            half_height,
        })
    }

    /// Primary ray through viewport coordinates `vx`, `vy` in `[-1, 1]`,
    /// x growing to the right and y growing upwards.
    pub fn ray(&self, vx: f32, vy: f32) -> Ray {
        let direction =
            self.forward + vx * self.half_width * self.right + vy * self.half_height * self.up;
        Ray::new(self.origin, direction)
    }
}
