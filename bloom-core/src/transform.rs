/// Vector types, Euler rotation and distance helpers
use nalgebra::{Vector2, Vector3};

/// Degrees to radians
pub const RAD: f32 = std::f32::consts::PI / 180.0;
/// Radians to degrees
pub const DEG: f32 = 180.0 / std::f32::consts::PI;

pub type Vec3 = Vector3<f32>;
pub type Vec2 = Vector2<f32>;

/// Rotate `point` by the Euler angles in `rotation` (radians).
///
/// The rotation is applied as three sequential 2D rotations: first around
/// the X axis, then around Y using the updated z, then around Z using the
/// updated x and y. This is not equivalent to a combined rotation matrix in
/// any other order, and object transforms as well as camera projection
/// depend on exactly this composition.
pub fn rotate(point: &Vec3, rotation: &Vec3) -> Vec3 {
    let (sx, cx) = rotation.x.sin_cos();
    let (sy, cy) = rotation.y.sin_cos();
    let (sz, cz) = rotation.z.sin_cos();

    let mut p = *point;

    // X axis
    let y = cx * p.y + sx * p.z;
    let z = -sx * p.y + cx * p.z;
    p.y = y;
    p.z = z;

    // Y axis
    let x = cy * p.x + sy * p.z;
    let z = -sy * p.x + cy * p.z;
    p.x = x;
    p.z = z;

    // Z axis
    let x = cz * p.x + sz * p.y;
    let y = -sz * p.x + cz * p.y;
    p.x = x;
    p.y = y;

    p
}

/// Euclidean distance between two points
pub fn distance_measure(p1: &Vec3, p2: &Vec3) -> f32 {
    (p2 - p1).norm()
}

/// Arithmetic mean of a set of points, `None` when empty
pub fn centroid<'a, I>(points: I) -> Option<Vec3>
where
    I: IntoIterator<Item = &'a Vec3>,
{
    let mut sum = Vec3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p;
        count += 1;
    }
    (count > 0).then(|| sum / count as f32)
}
