/// Command-line configuration for the terminal frontend
use clap::Parser;
use pointcube_core::{CubeGeometry, RendererConfig, Rgb};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "pointcube",
    version,
    about = "Rotating point-cloud cube in the terminal. Drag with the left button to rotate, q to quit."
)]
pub struct Cli {
    /// Half the edge length of the cube
    #[arg(long, default_value_t = CubeGeometry::DEFAULT_CUBE_WIDTH)]
    pub cube_width: f32,

    /// Depth offset between the camera and the cube centre
    #[arg(long, default_value_t = CubeGeometry::DEFAULT_DISTANCE)]
    pub distance: f32,

    /// Projection scale
    #[arg(long, default_value_t = CubeGeometry::DEFAULT_K1)]
    pub k1: f32,

    /// Spacing between grid points on a face
    #[arg(long, default_value_t = CubeGeometry::DEFAULT_GRID_STEP)]
    pub step: f32,

    /// Timer period in milliseconds
    #[arg(long, default_value_t = RendererConfig::DEFAULT_TICK_INTERVAL.as_millis() as u64)]
    pub tick_ms: u64,

    /// Radians added to the spin angle per tick
    #[arg(long, default_value_t = RendererConfig::DEFAULT_SPIN_PER_TICK, allow_negative_numbers = true)]
    pub spin: f32,

    /// Radians of rotation per pixel dragged
    #[arg(long, default_value_t = RendererConfig::DEFAULT_DRAG_SENSITIVITY, allow_negative_numbers = true)]
    pub sensitivity: f32,

    /// Edge length in pixels of each plotted point
    #[arg(long, default_value_t = RendererConfig::DEFAULT_POINT_SIZE)]
    pub point_size: u32,

    /// Hide the status line
    #[arg(long)]
    pub no_hud: bool,

    /// Write logs to this file (the terminal itself is taken by the cube)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn renderer_config(&self) -> pointcube_core::Result<RendererConfig> {
        let geometry = CubeGeometry::new(self.cube_width, self.distance, self.k1, self.step)?;
        RendererConfig {
            geometry,
            spin_per_tick: self.spin,
            drag_sensitivity: self.sensitivity,
            tick_interval: Duration::from_millis(self.tick_ms),
            point_size: self.point_size,
            background: Rgb::BLACK,
        }
        .validate()
    }
}
