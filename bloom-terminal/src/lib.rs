/// Terminal front end for the Bloom painter's-algorithm renderer
use bloom_core::{Camera, Entity, OrbitControls, Renderer, Scene, Vec3};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod demo;
pub mod renderer;

pub use config::ViewerConfig;
pub use renderer::TerminalSurface;

/// Radians added per key press
const KEY_STEP: f32 = 0.1;
/// World units the camera moves per zoom step
const ZOOM_STEP: f32 = 25.0;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    camera: Camera,
    orbit: OrbitControls,
    renderer: Renderer<TerminalSurface>,
    spin: f32,
    configured_spin: f32,
    frame_time: Duration,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, config: &ViewerConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let surface = TerminalSurface::new(
            config.surface.width,
            config.surface.height,
            columns as usize,
            rows as usize,
        );
        let camera = Camera::new(config.camera.fov)
            .with_position(Vec3::new(0.0, 0.0, -config.camera.distance));

        Ok(Self {
            scene,
            orbit: OrbitControls::from_camera(&camera),
            camera,
            renderer: Renderer::new(surface),
            spin: config.viewer.spin,
            configured_spin: config.viewer.spin,
            frame_time: Duration::from_millis(1000 / config.viewer.frame_rate.max(1) as u64),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Drain pending input
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.update();
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_key(code),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(columns, rows) => {
                self.renderer
                    .surface_mut()
                    .resize(columns as usize, rows as usize);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('w') | KeyCode::Up => self.rotate_meshes(KEY_STEP, 0.0, 0.0),
            KeyCode::Char('s') | KeyCode::Down => self.rotate_meshes(-KEY_STEP, 0.0, 0.0),
            KeyCode::Char('a') | KeyCode::Left => self.rotate_meshes(0.0, -KEY_STEP, 0.0),
            KeyCode::Char('d') | KeyCode::Right => self.rotate_meshes(0.0, KEY_STEP, 0.0),
            KeyCode::Char('e') => self.rotate_meshes(0.0, 0.0, KEY_STEP),
            KeyCode::Char('r') => self.rotate_meshes(0.0, 0.0, -KEY_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => self.camera.position.z += ZOOM_STEP,
            KeyCode::Char('-') => self.camera.position.z -= ZOOM_STEP,
            KeyCode::Char(' ') => {
                self.spin = toggle_spin(self.spin, self.configured_spin);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let p = self.renderer.surface().cell_to_pixel(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.orbit.press(p.x, p.y),
            MouseEventKind::Drag(MouseButton::Left) => self.orbit.pointer_moved(p.x, p.y),
            MouseEventKind::Up(MouseButton::Left) => self.orbit.release(),
            _ => {}
        }
    }

    fn rotate_meshes(&mut self, dx: f32, dy: f32, dz: f32) {
        for entity in self.scene.iter_mut() {
            if let Entity::Mesh(mesh) = entity {
                mesh.rotation += Vec3::new(dx, dy, dz);
            }
        }
    }

    fn update(&mut self) {
        self.orbit.update(&mut self.camera);
        // Continuous slow rotation for demo effect
        self.rotate_meshes(self.spin, self.spin * 1.5, 0.0);
    }

    fn render(&mut self) -> io::Result<()> {
        let stats = self.renderer.render(&self.scene, &self.camera);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.surface().draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Bloom | FPS: {:.1} | faces: {} | Drag=Orbit WASD/Arrows=Rotate E/R=Roll +/-=Zoom Space=Spin Q=Quit",
                self.fps, stats.faces_filled
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Pause a spinning model, or resume it at the configured rate
fn toggle_spin(current: f32, configured: f32) -> f32 {
    if current == 0.0 {
        configured
    } else {
        0.0
    }
}
