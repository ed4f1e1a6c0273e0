/// Scene graph: an ordered list of positioned entities
use std::convert::Infallible;
use std::sync::Arc;

use crate::color::Color;
use crate::geometry::Geometry;
use crate::material::Material;
use crate::projection::Camera;
use crate::transform::Vec3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("not a scene entity: {0}")]
    NotAnEntity(&'static str),
}

impl From<Infallible> for SceneError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

/// Geometry drawn with a material at a position and rotation
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Arc<dyn Material>,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Mesh {
    pub fn new<M: Material + 'static>(geometry: Geometry, material: M) -> Self {
        Self::with_shared_material(geometry, Arc::new(material))
    }

    /// Build a mesh around a material that other meshes may also use
    pub fn with_shared_material(geometry: Geometry, material: Arc<dyn Material>) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A point light. Invisible on its own, read by lit materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub factor: f32,
}

impl Light {
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec3::zeros(),
            factor,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// A colored segment between two absolute world positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

impl Line {
    pub fn new(start: Vec3, end: Vec3, color: Color) -> Self {
        Self { start, end, color }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(Vec3::zeros(), Vec3::new(0.0, -100.0, 0.0), Color::WHITE)
    }
}

/// Anything a scene can hold. Meshes go through the face pipeline and lines
/// through the segment pipeline; lights and cameras are never drawn, though
/// lights are still read by materials while shading.
#[derive(Debug, Clone)]
pub enum Entity {
    Mesh(Mesh),
    Light(Light),
    Line(Line),
    Camera(Camera),
}

impl Entity {
    /// World position; a line is positioned at its start point
    pub fn position(&self) -> Vec3 {
        match self {
            Entity::Mesh(mesh) => mesh.position,
            Entity::Light(light) => light.position,
            Entity::Line(line) => line.start,
            Entity::Camera(camera) => camera.position,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Mesh(_) => "mesh",
            Entity::Light(_) => "light",
            Entity::Line(_) => "line",
            Entity::Camera(_) => "camera",
        }
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Entity::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Entity::Light(light) => Some(light),
            _ => None,
        }
    }
}

impl From<Mesh> for Entity {
    fn from(mesh: Mesh) -> Self {
        Entity::Mesh(mesh)
    }
}

impl From<Light> for Entity {
    fn from(light: Light) -> Self {
        Entity::Light(light)
    }
}

impl From<Line> for Entity {
    fn from(line: Line) -> Self {
        Entity::Line(line)
    }
}

impl From<Camera> for Entity {
    fn from(camera: Camera) -> Self {
        Entity::Camera(camera)
    }
}

// Scene data that is easy to hand to `Scene::add` by mistake.

impl TryFrom<Geometry> for Entity {
    type Error = SceneError;

    fn try_from(_: Geometry) -> Result<Self, Self::Error> {
        Err(SceneError::NotAnEntity("geometry"))
    }
}

impl TryFrom<Arc<dyn Material>> for Entity {
    type Error = SceneError;

    fn try_from(_: Arc<dyn Material>) -> Result<Self, Self::Error> {
        Err(SceneError::NotAnEntity("material"))
    }
}

/// Ordered container of entities
#[derive(Debug, Clone, Default)]
pub struct Scene {
    children: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity and return its index.
    ///
    /// Values that do not convert into an [`Entity`] are rejected and the
    /// scene is left unchanged.
    pub fn add<T>(&mut self, child: T) -> Result<usize, SceneError>
    where
        T: TryInto<Entity>,
        SceneError: From<T::Error>,
    {
        let entity = child.try_into()?;
        self.children.push(entity);
        Ok(self.children.len() - 1)
    }

    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.children.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.children.iter_mut()
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.children.iter().filter_map(Entity::as_light)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::FlatMaterial;

    fn cube_mesh() -> Mesh {
        Mesh::new(Geometry::cube(100.0, 100.0, 100.0), FlatMaterial::default())
    }

    #[test]
    fn test_add_rejects_non_entities() {
        let mut scene = Scene::new();
        assert_eq!(
            scene.add(Geometry::plane(10.0, 10.0)),
            Err(SceneError::NotAnEntity("geometry"))
        );
        let material: Arc<dyn Material> = Arc::new(FlatMaterial::default());
        assert_eq!(scene.add(material), Err(SceneError::NotAnEntity("material")));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut scene = Scene::new();
        assert_eq!(scene.add(cube_mesh()), Ok(0));
        assert_eq!(scene.add(Light::default()), Ok(1));
        assert_eq!(scene.add(Line::default()), Ok(2));
        assert_eq!(scene.add(Camera::default()), Ok(3));

        let kinds: Vec<_> = scene.iter().map(Entity::kind).collect();
        assert_eq!(kinds, vec!["mesh", "light", "line", "camera"]);
    }

    #[test]
    fn test_line_position_is_start() {
        let line = Line::new(Vec3::new(1.0, 2.0, 3.0), Vec3::zeros(), Color::RED);
        assert_eq!(Entity::from(line).position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_lights_filter() {
        let mut scene = Scene::new();
        scene.add(cube_mesh()).unwrap();
        scene.add(Light::new(0.5)).unwrap();
        scene.add(Light::new(2.0)).unwrap();
        let factors: Vec<f32> = scene.lights().map(|l| l.factor).collect();
        assert_eq!(factors, vec![0.5, 2.0]);
    }

    #[test]
    fn test_entity_defaults() {
        assert_eq!(Light::default().factor, 1.0);
        let line = Line::default();
        assert_eq!(line.end, Vec3::new(0.0, -100.0, 0.0));
        assert_eq!(line.color, Color::WHITE);
    }
}
