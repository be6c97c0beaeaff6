//! flexline CLI
//!
//! Usage:
//!   flexline [OPTIONS] [FILE]
//!
//! Options:
//!   --width <PX>     Viewport width (overrides the scene's viewport)
//!   --height <PX>    Viewport height (overrides the scene's viewport)
//!   --exact          Force the root to exactly the viewport size
//!   --scale <F>      Content scale of the output surface
//!   --dump-ops       Print the recorded draw ops instead of SVG
//!   -d, --debug      Outline every node and log layout decisions
//!   -h, --help       Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flexline::{layout_scene, LayoutConfig, RenderConfig, RenderError, SvgConfig, SvgSurface, Surface};

#[derive(Parser)]
#[command(name = "flexline")]
#[command(about = "Lay out flex scenes and render them to SVG")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Viewport width
    #[arg(long)]
    width: Option<i32>,

    /// Viewport height
    #[arg(long)]
    height: Option<i32>,

    /// Give the root exactly the viewport size
    #[arg(long)]
    exact: bool,

    /// Physical pixels per logical unit
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Print the draw ops instead of SVG
    #[arg(long)]
    dump_ops: bool,

    /// Debug mode: outline every node and log layout decisions
    #[arg(short, long)]
    debug: bool,
}

/// Reject flag values that cannot describe a viewport or a surface
fn check_args(cli: &Cli) -> Result<(), String> {
    if !(cli.scale.is_finite() && cli.scale > 0.0) {
        return Err(format!("--scale must be a positive number, got {}", cli.scale));
    }
    for (flag, value) in [("--width", cli.width), ("--height", cli.height)] {
        if let Some(v) = value {
            if v < 0 {
                return Err(format!("{} must not be negative, got {}", flag, v));
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "flexline=trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(message) = check_args(&cli) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut layout = LayoutConfig::new().with_exact_viewport(cli.exact);
    if cli.width.is_some() || cli.height.is_some() {
        let default = layout.viewport;
        layout = layout
            .with_viewport(cli.width.unwrap_or(default.x), cli.height.unwrap_or(default.y))
            .with_override_scene_viewport(true);
    }
    let config = RenderConfig::new()
        .with_layout(layout)
        .with_svg(SvgConfig::new().with_content_scale(cli.scale))
        .with_debug(cli.debug);

    let frame = match layout_scene(&source, &config) {
        Ok(frame) => frame,
        Err(RenderError::Scene(e)) if e.span().is_some() => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.dump_ops {
        print!("{}", frame.ops);
        return;
    }

    let mut surface = SvgSurface::new(config.svg);
    surface.resize(frame.dimensions.size);
    println!("{}", surface.present(&frame.ops));
}
