use crate::{color::Color, error::Error, math::point::Point};

/// Base-color strategy of a surface. Shading is shared by all surfaces;
/// only where the base color comes from differs.
pub trait Texture: Send + Sync {
    fn color_at(&self, p: Point) -> Color;
}

pub struct Uniform(pub Color);

impl Texture for Uniform {
    fn color_at(&self, _: Point) -> Color {
        self.0
    }
}

/// A 3D checkerboard: space is cut into cubic cells of edge `check_size`
/// centered on the integer lattice, and cell parity picks the color.
pub struct Checker {
    color: Color,
    other_color: Color,
    check_size: f32,
}

impl Checker {
    pub fn new(color: Color, other_color: Color, check_size: f32) -> Result<Self, Error> {
        if !check_size.is_finite() || check_size <= 0.0 {
            return Err(Error::InvalidTexture("check size must be positive"));
        }
        Ok(Self {
            color,
            other_color,
            check_size,
        })
    }
}

impl Texture for Checker {
    fn color_at(&self, p: Point) -> Color {
        let v = (p - Point::ORIGIN) / self.check_size;
        let cell = |component: f32| (component.abs() + 0.5).floor() as i64;
        if (cell(v.x) + cell(v.y) + cell(v.z)) % 2 == 1 {
            self.other_color
        } else {
            self.color
        }
    }
}
