/// Example: Load an OBJ file and render one frame headless
///
/// Usage: cargo run --example load_obj -- path/to/model.obj

use std::env;
use std::io;

use bloom_core::{loader, Camera, FlatMaterial, Mesh, RecordingSurface, Renderer, Scene, Vec3};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file-or-url>", args[0]);
        return Ok(());
    }

    let source = &args[1];
    println!("Loading OBJ: {}", source);

    let runtime = tokio::runtime::Runtime::new()?;
    let geometry = runtime
        .block_on(loader::load_obj(source))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to load OBJ: {}", e)))?;

    println!(
        "Loaded {} vertices, {} faces",
        geometry.vertex.len(),
        geometry.tris.len()
    );

    let mut scene = Scene::new();
    scene
        .add(Mesh::new(geometry, FlatMaterial::default()))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let camera = Camera::default().with_position(Vec3::new(0.0, 0.0, -600.0));
    let mut renderer = Renderer::new(RecordingSurface::default());
    let stats = renderer.render(&scene, &camera);

    println!(
        "Frame: {} faces filled, {} faces skipped",
        stats.faces_filled, stats.faces_skipped
    );
    Ok(())
}
