/// Bloom Core Library - Painter's-algorithm software renderer
///
/// This library provides the scene graph, geometry generators, camera
/// projection, materials and the renderer that draws a scene back to front
/// into any `DrawSurface`.

pub mod color;
pub mod geometry;
pub mod material;
pub mod normal;
pub mod obj;
pub mod orbit;
pub mod projection;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod transform;

#[cfg(feature = "fetch")]
pub mod loader;

// Re-export commonly used types
pub use color::Color;
pub use geometry::{Face, Geometry};
pub use material::{DebugMaterial, FlatMaterial, LitMaterial, Material, NormalMaterial};
pub use orbit::OrbitControls;
pub use projection::Camera;
pub use renderer::{FrameStats, Renderer};
pub use scene::{Entity, Light, Line, Mesh, Scene, SceneError};
pub use surface::{DrawCall, DrawSurface, RecordingSurface, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use transform::{distance_measure, rotate, Vec2, Vec3, DEG, RAD};
