use image::Rgb;

use crate::{
    color::{BLACK, WHITE},
    error::Error,
    material::{texture::Checker, texture::Uniform, MaterialDescriptor, ShadedSurface},
    math::{point::Point, vec::Vec3},
    scene::Scene,
    shape::{Halfspace, Sphere},
};

/// One large sphere over a row of six graded small ones, standing on a
/// checkerboard floor under two lights.
pub struct SphereRowScene;

impl TryFrom<SphereRowScene> for Scene {
    type Error = Error;

    fn try_from(_: SphereRowScene) -> Result<Self, Error> {
        let mut scene = Scene::default();
        scene.look_at(Point::new(0.0, 3.0, 0.0));
        scene.insert_light(Point::new(30.0, 30.0, 10.0));
        scene.insert_light(Point::new(-10.0, 100.0, 30.0));

        let yellow = scene.insert_material(MaterialDescriptor {
            label: Some("Yellow".to_string()),
            material: Box::new(ShadedSurface::new(
                Box::new(Uniform(Rgb([1.0, 1.0, 0.0]))),
                0.2,
                0.6,
            )?),
        });
        scene.insert_object(Sphere::new(Point::new(1.0, 3.0, -10.0), 2.0, yellow)?);

        for step in 0..6 {
            let fraction = step as f32 / 6.0;
            let graded = scene.insert_material(MaterialDescriptor {
                label: None,
                material: Box::new(ShadedSurface::new(
                    Box::new(Uniform(Rgb([fraction, 1.0 - fraction, 0.5]))),
                    0.2,
                    0.6,
                )?),
            });
            scene.insert_object(Sphere::new(
                Point::new(-3.0 - step as f32 * 0.4, 2.3, -5.0),
                0.4,
                graded,
            )?);
        }

        let floor = scene.insert_material(MaterialDescriptor {
            label: Some("Checkerboard floor".to_string()),
            material: Box::new(ShadedSurface::new(
                Box::new(Checker::new(WHITE, BLACK, 1.0)?),
                0.2,
                0.6,
            )?),
        });
        scene.insert_object(Halfspace::new(Point::ORIGIN, Vec3::Y, floor)?);

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::{Scene, SphereRowScene};

    #[test]
    fn scene_builds() {
        let scene: Scene = SphereRowScene.try_into().unwrap();
        assert_eq!(scene.objects.len(), 8);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.materials.len(), 8);
    }
}
