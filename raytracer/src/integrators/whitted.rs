use crate::{
    aggregate::Aggregate,
    math::vec::{ReflectVecExt, RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
    ray::Ray,
    renderer::{RayResult, Renderer},
    shape::IntersectionResult,
};

use super::Integrator;

/// Whitted-style recursive shading: specular reflection, a Lambertian term
/// over the visible lights, and a constant ambient term.
pub struct WhittedIntegrator {
    pub max_depth: u32,
}

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, renderer: &Renderer, ray: Ray, depth: u32) -> RayResult {
        if depth > self.max_depth {
            return RayResult::default();
        }
        crate::counter!("Color rays");

        let IntersectionResult::Intersection(hit) = renderer.objects.first_intersection(ray)
        else {
            return RayResult {
                color: renderer.options.background,
                z: 0.0,
            };
        };

        let material = &renderer.materials[hit.material.0].material;
        let base = material.base_color(hit.pos).vec();

        let specular = 'specular: {
            let coefficient = material.specular();
            if coefficient <= 0.0 {
                break 'specular Vec3::ZERO;
            }

            let reflected = Ray::new(hit.pos, ray.direction.reflect(hit.normal));
            coefficient * self.ray_cast(renderer, reflected, depth + 1).color.vec()
        };

        let lambert = 'lambert: {
            let coefficient = material.lambert();
            if coefficient <= 0.0 {
                break 'lambert Vec3::ZERO;
            }

            let mut amount = 0.0;
            for &light in renderer.lights.iter() {
                if !renderer.light_is_visible(hit.pos, light) {
                    continue;
                }
                let contribution = (light - hit.pos).normalize_or_zero().dot(hit.normal);
                if contribution > 0.0 {
                    amount += contribution;
                }
            }

            // However many lights shine on the point, the diffuse term
            // never exceeds the base color.
            coefficient * f32::min(amount, 1.0) * base
        };

        let ambient = 'ambient: {
            let coefficient = material.ambient();
            if coefficient <= 0.0 {
                break 'ambient Vec3::ZERO;
            }
            coefficient * base
        };

        RayResult {
            color: (specular + lambert + ambient).rgb(),
            z: hit.t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Integrator, WhittedIntegrator};
    use crate::{
        color::WHITE,
        material::{texture::Uniform, MaterialDescriptor, ShadedSurface},
        math::point::Point,
        ray::Ray,
        renderer::{Renderer, RendererCreateInfo},
        scene::Scene,
        shape::Sphere,
    };

    fn mirror_corridor() -> Renderer {
        let mut scene = Scene::default();
        scene.move_to(Point::ORIGIN);
        scene.look_at(Point::new(0.0, 0.0, -10.0));
        scene.insert_light(Point::new(0.0, 50.0, 0.0));

        let mirror = scene.insert_material(MaterialDescriptor {
            label: Some("Mirror".to_string()),
            material: Box::new(ShadedSurface::new(Box::new(Uniform(WHITE)), 1.0, 0.0).unwrap()),
        });
        scene.insert_object(Sphere::new(Point::new(0.0, 0.0, -15.0), 2.0, mirror).unwrap());
        scene.insert_object(Sphere::new(Point::new(0.0, 0.0, 5.0), 2.0, mirror).unwrap());

        Renderer::new(RendererCreateInfo {
            width: 4,
            height: 4,
            max_depth: 3,
            scene,
        })
        .unwrap()
    }

    #[test]
    fn facing_mirrors_terminate_at_the_depth_bound() {
        let renderer = mirror_corridor();
        // Straight down the corridor, so the reflection ping-pongs between
        // the two spheres until the bound cuts it off.
        let result = renderer.process_pixel(0.0, 0.0);
        assert!(result.color.0.iter().all(|channel| channel.is_finite()));
    }

    #[test]
    fn depth_beyond_the_bound_is_black() {
        let renderer = mirror_corridor();
        let integrator = WhittedIntegrator { max_depth: 3 };
        let ray = Ray::new(Point::ORIGIN, (Point::new(0.0, 0.0, -15.0) - Point::ORIGIN).normalize());
        let result = integrator.ray_cast(&renderer, ray, 4);
        assert_eq!(result.color.0, [0.0, 0.0, 0.0]);
    }
}
