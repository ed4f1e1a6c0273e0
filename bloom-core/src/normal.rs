/// Angle-to-camera shading input
use crate::transform::{Vec2, Vec3};

fn angle(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).atan2(y2 - y1)
}

/// Orientation angles from `point` towards `target`.
///
/// Returns `[rx, ry, rx]`: `rx` is measured in the XZ plane and `ry` in the
/// YZ plane. The third slot repeats `rx`.
pub fn look_at(point: &Vec3, target: &Vec3) -> [f32; 3] {
    let rx = angle(point.x, point.z, target.x, target.z);
    let ry = angle(point.y, point.z, target.y, target.z);
    [rx, ry, rx]
}

/// Normal proxy for a face given its world-space vertices.
///
/// Not a surface normal: two `atan2` orientations per vertex towards the
/// camera, averaged over the face and squashed into roughly `[0, 1]`. Edge
/// cross-products and winding play no part, so two faces at the same place
/// relative to the camera shade identically whichever way they face.
pub fn generate_normal(vertices: &[Vec3], camera_position: &Vec3) -> Vec2 {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for v in vertices {
        let [rx, ry, _] = look_at(v, camera_position);
        sum_x += rx;
        sum_y += ry;
    }

    let n = vertices.len().max(1) as f32;
    Vec2::new((sum_x / n + 1.0) / 3.0, (sum_y / n + 1.0) / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_straight_ahead() {
        let [rx, ry, rz] = look_at(&Vec3::zeros(), &Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
        assert_eq!(rz, rx);
    }

    #[test]
    fn test_look_at_sideways() {
        let [rx, ry, _] = look_at(&Vec3::zeros(), &Vec3::new(10.0, 0.0, 0.0));
        assert!((rx - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn test_generate_normal_facing_camera() {
        let face = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let n = generate_normal(&face, &Vec3::new(0.0, 0.0, 100.0));
        assert!((n.x - 1.0 / 3.0).abs() < 1e-6);
        assert!((n.y - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_generate_normal_ignores_winding() {
        let a = Vec3::new(-10.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 10.0, 0.0);
        let cam = Vec3::new(5.0, -20.0, 300.0);
        let forward = generate_normal(&[a, b, c], &cam);
        let reversed = generate_normal(&[c, b, a], &cam);
        assert!((forward - reversed).norm() < 1e-6);
    }

    #[test]
    fn test_generate_normal_empty_face() {
        let n = generate_normal(&[], &Vec3::zeros());
        assert_eq!(n, Vec2::new(1.0 / 3.0, 1.0 / 3.0));
    }
}
