pub mod examples;

use crate::{
    aggregate::shapelist::ShapeList,
    material::{MaterialDescriptor, MaterialId},
    math::point::Point,
    shape::Shape,
};

/// A renderable world: (object, surface) associations, point lights, and
/// the camera state used to view them.
///
/// Scenes are assembled once and are read-only while rendering runs.
pub struct Scene {
    pub objects: ShapeList,
    pub materials: Vec<MaterialDescriptor>,
    pub lights: Vec<Point>,
    pub position: Point,
    pub looking_at: Point,
    pub field_of_view: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: ShapeList::default(),
            materials: Vec::new(),
            lights: Vec::new(),
            position: Point::new(0.0, 1.8, 10.0),
            looking_at: Point::ORIGIN,
            field_of_view: 45.0,
        }
    }
}

impl Scene {
    /// Insert an object in the scene
    pub fn insert_object<T: Shape + 'static>(&mut self, object: T) {
        self.objects.0.push(Box::new(object))
    }

    /// Insert a material and return the id associated with it
    pub fn insert_material(&mut self, material: MaterialDescriptor) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn insert_light(&mut self, light: Point) {
        self.lights.push(light)
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    pub fn look_at(&mut self, target: Point) {
        self.looking_at = target;
    }
}
