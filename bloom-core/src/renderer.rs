/// Painter's-algorithm renderer
use crate::geometry::Face;
use crate::normal::generate_normal;
use crate::projection::Camera;
use crate::scene::{Entity, Line, Mesh, Scene};
use crate::surface::DrawSurface;
use crate::transform::{centroid, distance_measure, rotate, Vec2, Vec3};

/// Faces with fewer indices than this are never drawn
pub const MIN_FACE_VERTICES: usize = 3;

/// Number of leading vertices averaged into a face's depth
pub const DEPTH_SAMPLE_VERTICES: usize = 4;

/// What a single `render` call drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub entities_drawn: usize,
    pub faces_filled: usize,
    pub faces_skipped: usize,
    pub lines_stroked: usize,
}

/// Draws scenes into an owned [`DrawSurface`].
///
/// Frames are drawn back to front with no depth buffer, so geometry that
/// intersects or overlaps within one sort key can misdraw.
pub struct Renderer<S: DrawSurface> {
    surface: S,
}

impl<S: DrawSurface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Screen point that camera-space origin projects to
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.surface.width() as f32 / 2.0,
            self.surface.height() as f32 / 2.0,
        )
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Clear the surface and draw one frame of `scene` as seen by `camera`.
    ///
    /// Malformed geometry never aborts the frame: faces with too few or
    /// out-of-range indices are skipped and counted in the returned stats.
    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> FrameStats {
        self.surface.clear();

        let center = self.center();
        let mut stats = FrameStats::default();

        for entity in depth_order(scene, camera) {
            match entity {
                Entity::Mesh(mesh) => {
                    self.draw_mesh(mesh, scene, camera, &center, &mut stats);
                    stats.entities_drawn += 1;
                }
                Entity::Line(line) => {
                    self.draw_line(line, camera, &center);
                    stats.lines_stroked += 1;
                    stats.entities_drawn += 1;
                }
                Entity::Light(_) | Entity::Camera(_) => {}
            }
        }

        log::debug!("frame: {stats:?}");
        stats
    }

    fn draw_mesh(
        &mut self,
        mesh: &Mesh,
        scene: &Scene,
        camera: &Camera,
        center: &Vec2,
        stats: &mut FrameStats,
    ) {
        let world: Vec<Vec3> = mesh
            .geometry
            .vertex
            .iter()
            .map(|v| rotate(v, &mesh.rotation) + mesh.position)
            .collect();
        let screen: Vec<Vec2> = world.iter().map(|v| camera.project(v, center)).collect();

        let tris = &mesh.geometry.tris;
        let order = face_order(tris, &world, &camera.position);
        stats.faces_skipped += tris.len() - order.len();

        let mut face_world = Vec::new();
        let mut points = Vec::new();
        for index in order {
            let face = &tris[index];

            face_world.clear();
            face_world.extend(face.iter().map(|&i| world[i]));
            points.clear();
            points.extend(face.iter().map(|&i| screen[i]));

            let normal = generate_normal(&face_world, &camera.position);
            let color = mesh.material.get_color(&normal, &face_world[0], scene);
            self.surface.fill_polygon(&points, &color);
            stats.faces_filled += 1;
        }
    }

    fn draw_line(&mut self, line: &Line, camera: &Camera, center: &Vec2) {
        let from = camera.project(&line.start, center);
        let to = camera.project(&line.end, center);
        self.surface.stroke_line(&from, &to, &line.color);
    }
}

/// Scene entities ordered farthest from the camera first.
///
/// Every entity is keyed by the distance of its position (a line's start
/// point) to the camera. The sort is stable, so equal keys keep insertion
/// order.
pub fn depth_order<'a>(scene: &'a Scene, camera: &Camera) -> Vec<&'a Entity> {
    let mut keyed: Vec<(f32, &Entity)> = scene
        .iter()
        .map(|e| (distance_measure(&e.position(), &camera.position), e))
        .collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Indices of the drawable faces in `tris`, farthest from `eye` first.
///
/// `world` holds the transformed vertices the faces index into. Faces that
/// are too small or reference a missing vertex are left out.
pub fn face_order(tris: &[Face], world: &[Vec3], eye: &Vec3) -> Vec<usize> {
    let mut keyed: Vec<(f32, usize)> = tris
        .iter()
        .enumerate()
        .filter_map(|(i, face)| match face_depth(face, world, eye) {
            Some(depth) => Some((depth, i)),
            None => {
                log::debug!("skipping face {i} {face:?}: {} vertices available", world.len());
                None
            }
        })
        .collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}

fn face_depth(face: &Face, world: &[Vec3], eye: &Vec3) -> Option<f32> {
    if face.len() < MIN_FACE_VERTICES || face.iter().any(|&i| i >= world.len()) {
        return None;
    }
    let c = centroid(face.iter().take(DEPTH_SAMPLE_VERTICES).map(|&i| &world[i]))?;
    Some(distance_measure(&c, eye))
}
