/// Vertex/face geometry and primitive shape generators
use std::collections::HashMap;

use crate::transform::{rotate, Vec3, RAD};

/// A face: indices into `Geometry::vertex`, at least three for a drawable polygon
pub type Face = Vec<usize>;

/// Vertex positions plus polygon faces referencing them by index.
///
/// Faces may have any arity. Index validity is not checked here; the
/// renderer skips faces that reference missing vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub vertex: Vec<Vec3>,
    pub tris: Vec<Face>,
}

impl Geometry {
    pub fn new(vertex: Vec<Vec3>, tris: Vec<Face>) -> Self {
        Self { vertex, tris }
    }

    /// A single quad in the z=0 plane spanning `[-x, x] × [-y, y]`
    pub fn plane(x: f32, y: f32) -> Self {
        Self {
            vertex: vec![
                Vec3::new(x, y, 0.0),
                Vec3::new(-x, y, 0.0),
                Vec3::new(-x, -y, 0.0),
                Vec3::new(x, -y, 0.0),
            ],
            tris: vec![vec![0, 1, 2, 3]],
        }
    }

    /// An axis-aligned box centred on the origin with the given edge lengths
    pub fn cube(x: f32, y: f32, z: f32) -> Self {
        let (x, y, z) = (x / 2.0, y / 2.0, z / 2.0);
        Self {
            vertex: vec![
                Vec3::new(x, y, z),
                Vec3::new(-x, y, z),
                Vec3::new(-x, -y, z),
                Vec3::new(-x, -y, -z),
                Vec3::new(x, -y, -z),
                Vec3::new(x, y, -z),
                Vec3::new(-x, y, -z),
                Vec3::new(x, -y, z),
            ],
            tris: vec![
                vec![0, 1, 2, 7],
                vec![0, 5, 6, 1],
                vec![2, 3, 4, 7],
                vec![2, 3, 6, 1],
                vec![7, 4, 5, 0],
                vec![3, 4, 5, 6],
            ],
        }
    }

    /// A UV sphere of diameter `radius`.
    ///
    /// Rings are not closed: the last column and row of cells have no
    /// neighbour to stitch to and are left open.
    pub fn sphere(radius: f32, horiz: u32, vert: u32) -> Self {
        let radius = radius / 2.0;
        let horiz = horiz as i32;
        let vert = vert as i32;
        let mut grid = GridBuilder::default();

        for x in 0..horiz {
            let xd = x as f32 * (360.0 / horiz as f32);
            for y in -vert..vert {
                let yd = y as f32 * (180.0 / vert as f32);
                let v = rotate(
                    &Vec3::new(0.0, radius, 0.0),
                    &Vec3::new(xd * RAD, yd * RAD, 0.0),
                );
                grid.insert(x, y, v);
            }
        }

        grid.stitch(0..horiz, -vert..vert)
    }

    /// A flat ring of `segments` vertices closed by a single N-gon
    pub fn circle(radius: f32, segments: u32) -> Self {
        let radius = radius / 2.0;
        let vertex: Vec<Vec3> = (0..segments)
            .map(|i| {
                let d = i as f32 * (360.0 / segments as f32);
                rotate(&Vec3::new(radius, 0.0, 0.0), &Vec3::new(0.0, d * RAD, 0.0))
            })
            .collect();
        let face = (0..vertex.len()).collect();

        Self {
            vertex,
            tris: vec![face],
        }
    }

    /// A `seg_x × seg_y` grid of vertices in the z=0 plane spanning
    /// `[-x/2, x/2] × [-y/2, y/2]`, stitched into quads.
    pub fn surface(x: f32, y: f32, seg_x: u32, seg_y: u32) -> Self {
        let mut grid = GridBuilder::default();

        for dx in 0..seg_x {
            for dy in 0..seg_y {
                let v = Vec3::new(
                    grid_coordinate(x, dx, seg_x),
                    grid_coordinate(y, dy, seg_y),
                    0.0,
                );
                grid.insert(dx as i32, dy as i32, v);
            }
        }

        grid.stitch(0..seg_x as i32, 0..seg_y as i32)
    }
}

/// Position of grid line `i` of `segments` across `[-extent/2, extent/2]`.
/// The end lines land exactly on the bounds; a single line sits at 0.
fn grid_coordinate(extent: f32, i: u32, segments: u32) -> f32 {
    if segments < 2 {
        return 0.0;
    }
    let t = i as f32 / (segments - 1) as f32;
    extent * t - extent / 2.0
}

/// Vertices keyed by grid coordinate, stitched into quads once complete
#[derive(Default)]
struct GridBuilder {
    vertex: Vec<Vec3>,
    index: HashMap<(i32, i32), usize>,
}

impl GridBuilder {
    fn insert(&mut self, x: i32, y: i32, v: Vec3) {
        self.vertex.push(v);
        self.index.insert((x, y), self.vertex.len() - 1);
    }

    /// One quad per cell whose four corners were all inserted
    fn stitch(self, xs: std::ops::Range<i32>, ys: std::ops::Range<i32>) -> Geometry {
        let mut tris = Vec::new();
        for x in xs {
            for y in ys.clone() {
                let corners = [(x, y), (x + 1, y), (x + 1, y + 1), (x, y + 1)];
                let quad: Option<Face> = corners
                    .iter()
                    .map(|key| self.index.get(key).copied())
                    .collect();
                if let Some(quad) = quad {
                    tris.push(quad);
                }
            }
        }

        Geometry {
            vertex: self.vertex,
            tris,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_indices_valid(g: &Geometry) -> bool {
        g.tris
            .iter()
            .all(|face| face.iter().all(|&i| i < g.vertex.len()))
    }

    #[test]
    fn test_plane() {
        let g = Geometry::plane(50.0, 20.0);
        assert_eq!(g.vertex.len(), 4);
        assert_eq!(g.tris, vec![vec![0, 1, 2, 3]]);
        assert_eq!(g.vertex[2], Vec3::new(-50.0, -20.0, 0.0));
    }

    #[test]
    fn test_cube() {
        let g = Geometry::cube(100.0, 100.0, 100.0);
        assert_eq!(g.vertex.len(), 8);
        assert_eq!(g.tris.len(), 6);
        assert!(g.tris.iter().all(|f| f.len() == 4));
        assert!(all_indices_valid(&g));
        for v in &g.vertex {
            assert_eq!(v.abs(), Vec3::new(50.0, 50.0, 50.0));
        }
    }

    #[test]
    fn test_cube_faces_are_planar() {
        let g = Geometry::cube(100.0, 60.0, 20.0);
        for face in &g.tris {
            let pts: Vec<Vec3> = face.iter().map(|&i| g.vertex[i]).collect();
            let shared_axis = (0..3).any(|axis| pts.iter().all(|p| p[axis] == pts[0][axis]));
            assert!(shared_axis, "face {face:?} is not axis aligned");
        }
    }

    #[test]
    fn test_sphere_open_seams() {
        let g = Geometry::sphere(100.0, 8, 4);
        assert_eq!(g.vertex.len(), 8 * 8);
        // The last column and last row have no neighbour.
        assert_eq!(g.tris.len(), 7 * 7);
        assert!(all_indices_valid(&g));
        for v in &g.vertex {
            assert!((v.norm() - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_circle() {
        let g = Geometry::circle(100.0, 16);
        assert_eq!(g.vertex.len(), 16);
        assert_eq!(g.tris.len(), 1);
        assert_eq!(g.tris[0], (0..16).collect::<Vec<_>>());
        for v in &g.vertex {
            assert!((v.norm() - 50.0).abs() < 1e-3);
            assert!(v.y.abs() < 1e-6);
        }
    }

    #[test]
    fn test_surface_is_symmetric() {
        let g = Geometry::surface(100.0, 40.0, 10, 5);
        assert_eq!(g.vertex.len(), 10 * 5);
        assert_eq!(g.tris.len(), 9 * 4);
        assert!(all_indices_valid(&g));

        for axis in 0..2 {
            let min = g.vertex.iter().map(|v| v[axis]).fold(f32::INFINITY, f32::min);
            let max = g.vertex.iter().map(|v| v[axis]).fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(min, -max);
        }
        assert!(g.vertex.iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn test_surface_single_segment() {
        let g = Geometry::surface(100.0, 100.0, 1, 3);
        assert_eq!(g.vertex.len(), 3);
        assert!(g.tris.is_empty());
        assert!(g.vertex.iter().all(|v| v.x == 0.0));
    }

    #[test]
    fn test_default_is_empty() {
        let g = Geometry::default();
        assert!(g.vertex.is_empty());
        assert!(g.tris.is_empty());
    }
}
