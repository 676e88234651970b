/// Example: print a single frame of the cube without entering raw mode
///
/// Usage: cargo run --example snapshot -- [ticks]

use crossterm::{cursor, execute};
use pointcube_core::{CubeRenderer, RendererConfig};
use pointcube_terminal::HalfBlockRenderer;
use std::env;
use std::io::{self, stdout, Write};

fn main() -> io::Result<()> {
    let ticks: u32 = match env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bad tick count: {}", e)))?,
        None => 60,
    };

    let mut renderer = CubeRenderer::new(RendererConfig::default());
    for _ in 0..ticks {
        renderer.tick();
    }

    let mut screen = HalfBlockRenderer::new(80, 24);
    let stats = renderer.render(screen.canvas_mut());

    let mut stdout = stdout();
    screen.draw(&mut stdout)?;
    execute!(stdout, cursor::MoveToNextLine(1))?;
    writeln!(
        stdout,
        "C = {:.2} rad, {} points plotted, {} skipped",
        renderer.rotation().c,
        stats.plotted,
        stats.skipped
    )?;
    Ok(())
}
