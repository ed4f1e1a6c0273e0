/// Drag-to-orbit camera input
use crate::projection::Camera;
use crate::transform::{Vec2, RAD};

/// Turns pointer drags into camera rotation.
///
/// Input is only recorded when events arrive; the camera changes when
/// [`OrbitControls::update`] is called, typically once per frame. Each
/// pixel of drag turns the camera by one degree: horizontal movement feeds
/// the X rotation and vertical movement the Y rotation.
#[derive(Debug, Clone, Default)]
pub struct OrbitControls {
    dragging: bool,
    pointer: Vec2,
    previous: Vec2,
    rotation: Vec2,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the camera's current rotation instead of zero
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            rotation: Vec2::new(camera.rotation.x, camera.rotation.y),
            ..Self::default()
        }
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.pointer = Vec2::new(x, y);
        self.previous = self.pointer;
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Accumulated (x, y) rotation in radians
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Apply the drag since the last update to `camera`
    pub fn update(&mut self, camera: &mut Camera) {
        if !self.dragging {
            return;
        }
        let delta = self.pointer - self.previous;
        self.previous = self.pointer;
        self.rotation += delta * RAD;

        camera.rotation.x = self.rotation.x;
        camera.rotation.y = self.rotation.y;
        camera.rotation.z = 0.0;
    }
}
