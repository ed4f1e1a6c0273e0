/// Bloom Terminal Viewer
///
/// Renders a demo shape or an OBJ model with the painter's-algorithm
/// renderer into the terminal.
/// Controls:
///   - Mouse drag: Orbit the camera
///   - WASD / Arrow Keys: Rotate the model
///   - E/R: Roll rotation
///   - +/-: Zoom
///   - Space: Toggle spin
///   - Q/ESC: Quit
use std::path::PathBuf;

use anyhow::Context;
use bloom_core::loader;
use bloom_terminal::config::{self, DemoKind, MaterialKind, ViewerConfig};
use bloom_terminal::{demo, TerminalApp};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "bloom-terminal", version, about = "Painter's-algorithm 3D viewer for the terminal")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// OBJ model to show instead of the demo shape (path or http(s) URL)
    #[arg(long)]
    obj: Option<String>,

    /// Demo shape
    #[arg(long, value_enum)]
    demo: Option<DemoKind>,

    /// Material used for the model
    #[arg(long, value_enum)]
    material: Option<MaterialKind>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(demo) = cli.demo {
        config.viewer.demo = demo;
    }
    if let Some(material) = cli.material {
        config.viewer.material = material;
    }

    println!("Bloom Terminal Renderer - Loading...");

    let model = match &cli.obj {
        Some(source) => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
            let geometry = runtime
                .block_on(loader::load_obj(source))
                .with_context(|| format!("failed to load model {source}"))?;
            println!(
                "Loaded {} vertices, {} faces",
                geometry.vertex.len(),
                geometry.tris.len()
            );
            Some(geometry)
        }
        None => None,
    };

    let scene = demo::build_scene(&config.viewer, model).context("failed to build scene")?;

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene, &config)?;
    app.run()?;

    println!("Thank you for using Bloom Terminal Renderer!");
    Ok(())
}
