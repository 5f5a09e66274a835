use crate::{
    color::{BLACK, WHITE},
    error::Error,
    material::{texture::Checker, texture::Uniform, MaterialDescriptor, ShadedSurface},
    math::{point::Point, vec::Vec3},
    scene::Scene,
    shape::{Halfspace, Sphere},
};

/// Two fully mirrored spheres reflecting each other over a checkerboard
/// floor. Mostly useful to exercise the reflection bounce bound.
pub struct FacingMirrorsScene;

impl TryFrom<FacingMirrorsScene> for Scene {
    type Error = Error;

    fn try_from(_: FacingMirrorsScene) -> Result<Self, Error> {
        let mut scene = Scene::default();
        scene.move_to(Point::new(0.0, 1.0, 0.0));
        scene.look_at(Point::new(0.0, 1.0, -10.0));
        scene.insert_light(Point::new(0.0, 30.0, -10.0));

        let mirror = scene.insert_material(MaterialDescriptor {
            label: Some("Mirror".to_string()),
            material: Box::new(ShadedSurface::new(Box::new(Uniform(WHITE)), 1.0, 0.0)?),
        });
        scene.insert_object(Sphere::new(Point::new(-2.5, 1.0, -10.0), 2.0, mirror)?);
        scene.insert_object(Sphere::new(Point::new(2.5, 1.0, -10.0), 2.0, mirror)?);

        let floor = scene.insert_material(MaterialDescriptor {
            label: Some("Floor".to_string()),
            material: Box::new(ShadedSurface::new(
                Box::new(Checker::new(WHITE, BLACK, 1.0)?),
                0.0,
                0.6,
            )?),
        });
        scene.insert_object(Halfspace::new(Point::new(0.0, -1.0, 0.0), Vec3::Y, floor)?);

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::{FacingMirrorsScene, Scene};

    #[test]
    fn scene_builds() {
        let scene: Scene = FacingMirrorsScene.try_into().unwrap();
        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.lights.len(), 1);
    }
}
