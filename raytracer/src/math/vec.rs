pub use glam::Vec3;
use image::Rgb;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.to_array())
    }
}

pub trait ReflectVecExt {
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl ReflectVecExt for Vec3 {
    /// Mirror `self` through the plane orthogonal to `normal`.
    /// `normal` must be a unit vector.
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - 2.0 * self.dot(normal) * normal
    }
}

#[cfg(test)]
mod tests {
    use super::{ReflectVecExt, Vec3};

    const EPS: f32 = 1e-6;

    #[test]
    fn reflect_bounces_off_plane() {
        let reflected = Vec3::new(1.0, -1.0, 0.0).reflect(Vec3::Y);
        assert!(reflected.distance_squared(Vec3::new(1.0, 1.0, 0.0)) < EPS);
    }

    #[test]
    fn reflect_is_an_involution() {
        let v = Vec3::new(0.3, -1.7, 2.2);
        let normal = Vec3::new(1.0, 2.0, -0.5).normalize();
        assert!(v.reflect(normal).reflect(normal).distance_squared(v) < EPS);
    }

    #[test]
    fn reflect_preserves_length() {
        let v = Vec3::new(0.3, -1.7, 2.2);
        let normal = Vec3::new(-2.0, 0.1, 0.4).normalize();
        assert!((v.reflect(normal).length() - v.length()).abs() < EPS);
    }
}
