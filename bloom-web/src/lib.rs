/// Bloom Web - canvas 2D front end for the painter's-algorithm renderer
///
/// `CanvasSurface` draws into a `CanvasRenderingContext2d`; `WebRenderer`
/// wraps a scene, camera and orbit controls behind a wasm-bindgen API that a
/// page drives from its own animation loop and pointer events.

use bloom_core::{
    Camera, Color, DrawSurface, Entity, Geometry, Light, LitMaterial, Mesh, OrbitControls,
    Renderer, Scene, Vec2, Vec3,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A canvas element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, context })
    }

    /// Look up a canvas by element id
    pub fn from_id(canvas_id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id}")))?
            .dyn_into::<HtmlCanvasElement>()?;
        Self::new(canvas)
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.context.set_fill_style_str(&color.to_css());
        self.context.begin_path();
        self.context.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.context.line_to(p.x as f64, p.y as f64);
        }
        self.context.close_path();
        self.context.fill();
    }

    fn stroke_line(&mut self, from: &Vec2, to: &Vec2, color: &Color) {
        self.context.set_stroke_style_str(&color.to_css());
        self.context.begin_path();
        self.context.move_to(from.x as f64, from.y as f64);
        self.context.line_to(to.x as f64, to.y as f64);
        self.context.stroke();
    }
}

#[wasm_bindgen]
pub struct WebRenderer {
    scene: Scene,
    camera: Camera,
    orbit: OrbitControls,
    renderer: Renderer<CanvasSurface>,
}

#[wasm_bindgen]
impl WebRenderer {
    /// Attach to the canvas with the given id and set up a lit cube
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let surface = CanvasSurface::from_id(canvas_id)?;
        let camera = Camera::default().with_position(Vec3::new(0.0, 0.0, -400.0));

        let mut scene = Scene::new();
        let cube = Mesh::new(
            Geometry::cube(150.0, 150.0, 150.0),
            LitMaterial::new(Color::new(80.0, 200.0, 255.0)),
        );
        add(&mut scene, cube)?;
        add(
            &mut scene,
            Light::default().with_position(Vec3::new(-200.0, -300.0, -300.0)),
        )?;

        Ok(WebRenderer {
            scene,
            orbit: OrbitControls::from_camera(&camera),
            camera,
            renderer: Renderer::new(surface),
        })
    }

    /// Replace the model with geometry decoded from OBJ text
    pub fn load_obj(&mut self, text: &str) -> Result<(), JsValue> {
        let geometry =
            bloom_core::obj::decode(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mesh = self
            .scene
            .iter_mut()
            .find_map(|entity| match entity {
                Entity::Mesh(mesh) => Some(mesh),
                _ => None,
            })
            .ok_or_else(|| JsValue::from_str("scene has no mesh"))?;
        log::debug!(
            "replacing model: {} vertices, {} faces",
            geometry.vertex.len(),
            geometry.tris.len()
        );
        mesh.geometry = geometry;
        Ok(())
    }

    /// Apply pending orbit input and render a frame
    pub fn render(&mut self) -> usize {
        self.orbit.update(&mut self.camera);
        self.renderer.render(&self.scene, &self.camera).faces_filled
    }

    /// Update model rotation state
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        for entity in self.scene.iter_mut() {
            if let Entity::Mesh(mesh) = entity {
                mesh.rotation += Vec3::new(dx, dy, dz);
            }
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.orbit.press(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.orbit.pointer_moved(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.orbit.release();
    }
}

fn add<T: Into<Entity>>(scene: &mut Scene, entity: T) -> Result<usize, JsValue> {
    scene
        .add(entity.into())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
