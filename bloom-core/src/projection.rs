/// Camera and perspective projection
use crate::transform::{rotate, Vec2, Vec3};

/// Screen offset returned for points behind the near limit
pub const OFF_SCREEN: f32 = 10000.0;

/// Default focal length, in world units
pub const DEFAULT_FOV: f32 = 150.0;

/// A positioned, rotated pinhole camera.
///
/// `fov` is a focal distance rather than an angle: a point `fov` units in
/// front of the camera projects at its own scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Vec3,
    pub fov: f32,
}

impl Camera {
    pub fn new(fov: f32) -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            fov,
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

    /// Project a world-space point to screen space around `center`.
    ///
    /// The camera-relative point is rotated forward by `self.rotation`
    /// (the same routine objects use), not by the inverse. Points further
    /// than `fov` behind the camera are not clipped but pushed to
    /// `(OFF_SCREEN, OFF_SCREEN) + center`.
    pub fn project(&self, point: &Vec3, center: &Vec2) -> Vec2 {
        let relative = rotate(&(point - self.position), &self.rotation);

        let screen = if relative.z < -self.fov {
            Vec2::new(OFF_SCREEN, OFF_SCREEN)
        } else {
            self.perspective(relative.x, relative.y, relative.z)
        };

        screen + center
    }

    /// Perspective divide for a camera-relative point
    pub fn perspective(&self, x: f32, y: f32, z: f32) -> Vec2 {
        let scale = self.fov / (self.fov + z);
        Vec2::new(x * scale, y * scale)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_FOV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::RAD;

    fn center() -> Vec2 {
        Vec2::new(480.0, 360.0)
    }

    #[test]
    fn test_camera_creation() {
        let camera = Camera::default();
        assert_eq!(camera.fov, 150.0);
        assert_eq!(camera.position, Vec3::zeros());
        assert_eq!(camera.rotation, Vec3::zeros());
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = Camera::default()
            .with_position(Vec3::new(10.0, -20.0, 30.0))
            .with_rotation(Vec3::new(0.4, 1.1, -0.3));
        assert_eq!(camera.project(&camera.position, &center()), center());
    }

    #[test]
    fn test_behind_near_limit_is_pushed_off_screen() {
        let camera = Camera::default();
        let p = camera.project(&Vec3::new(5.0, 5.0, -151.0), &center());
        assert_eq!(p, Vec2::new(10480.0, 10360.0));
    }

    #[test]
    fn test_at_near_limit_is_not_pushed() {
        let camera = Camera::default();
        let p = camera.project(&Vec3::new(0.0, 0.0, -100.0), &center());
        assert_eq!(p, center());
    }

    #[test]
    fn test_perspective_scaling() {
        let camera = Camera::default();
        // z == fov halves the offset
        let p = camera.project(&Vec3::new(100.0, -50.0, 150.0), &Vec2::zeros());
        assert_eq!(p, Vec2::new(50.0, -25.0));
        // z == 0 keeps it
        let p = camera.project(&Vec3::new(100.0, -50.0, 0.0), &Vec2::zeros());
        assert_eq!(p, Vec2::new(100.0, -50.0));
    }

    #[test]
    fn test_rotation_is_applied_after_translation() {
        let camera = Camera::default()
            .with_position(Vec3::new(0.0, 0.0, -100.0))
            .with_rotation(Vec3::new(0.0, 180.0 * RAD, 0.0));
        // Relative (0,0,100) rotated half a turn about Y lands at z = -100.
        let p = camera.project(&Vec3::zeros(), &Vec2::zeros());
        assert!(p.x.abs() < 1e-3 && p.y.abs() < 1e-3);
        let behind = camera.project(&Vec3::new(0.0, 0.0, 100.0), &Vec2::zeros());
        assert_eq!(behind, Vec2::new(OFF_SCREEN, OFF_SCREEN));
    }
}
