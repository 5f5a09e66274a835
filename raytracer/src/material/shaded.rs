use crate::{color::Color, error::Error, math::point::Point};

use super::{texture::Texture, Material};

/// The renderer's single shading model: a specular mirror term, a diffuse
/// Lambertian term and a constant ambient term, with the base color
/// supplied by a [`Texture`].
pub struct ShadedSurface {
    texture: Box<dyn Texture>,
    specular: f32,
    lambert: f32,
    ambient: f32,
}

impl ShadedSurface {
    /// The ambient weight is derived as `1 - specular - lambert`, so the
    /// three weights always sum to one.
    pub fn new(texture: Box<dyn Texture>, specular: f32, lambert: f32) -> Result<Self, Error> {
        let valid = specular.is_finite()
            && lambert.is_finite()
            && specular >= 0.0
            && lambert >= 0.0
            && specular + lambert <= 1.0;
        if !valid {
            return Err(Error::InvalidSurface { specular, lambert });
        }
        Ok(Self {
            texture,
            specular,
            lambert,
            ambient: 1.0 - specular - lambert,
        })
    }
}

impl Material for ShadedSurface {
    fn base_color(&self, p: Point) -> Color {
        self.texture.color_at(p)
    }

    fn specular(&self) -> f32 {
        self.specular
    }

    fn lambert(&self) -> f32 {
        self.lambert
    }

    fn ambient(&self) -> f32 {
        self.ambient
    }
}

#[cfg(test)]
mod tests {
    use super::{Material, ShadedSurface};
    use crate::{
        color::WHITE,
        material::texture::Uniform,
        math::point::Point,
    };

    const EPS: f32 = 1e-6;

    #[test]
    fn ambient_weight_is_derived() {
        let surface = ShadedSurface::new(Box::new(Uniform(WHITE)), 0.2, 0.6).unwrap();
        assert!((surface.ambient() - 0.2).abs() < EPS);
        assert_eq!(surface.base_color(Point::ORIGIN), WHITE);
    }

    #[test]
    fn weights_summing_to_one_leave_no_ambient() {
        let surface = ShadedSurface::new(Box::new(Uniform(WHITE)), 1.0, 0.0).unwrap();
        assert!(surface.ambient().abs() < EPS);
    }

    #[test]
    fn overweighted_surfaces_are_rejected() {
        assert!(ShadedSurface::new(Box::new(Uniform(WHITE)), 0.7, 0.5).is_err());
    }

    #[test]
    fn negative_weights_are_rejected() {
        assert!(ShadedSurface::new(Box::new(Uniform(WHITE)), -0.1, 0.6).is_err());
        assert!(ShadedSurface::new(Box::new(Uniform(WHITE)), 0.2, -0.6).is_err());
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        assert!(ShadedSurface::new(Box::new(Uniform(WHITE)), f32::NAN, 0.0).is_err());
    }
}
