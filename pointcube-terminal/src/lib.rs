/// Terminal host for the point-cloud cube
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self},
};
use pointcube_core::{CubeRenderer, FrameStats, PointerButton, RendererConfig};
use std::io::{self, stdout, Write};
use std::time::Instant;

pub mod config;
pub mod renderer;

pub use config::Cli;
pub use renderer::HalfBlockRenderer;

/// Main application struct for the terminal cube
pub struct TerminalApp {
    renderer: CubeRenderer,
    screen: HalfBlockRenderer,
    show_hud: bool,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
    last_stats: FrameStats,
}

impl TerminalApp {
    pub fn new(config: RendererConfig, show_hud: bool) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self::with_size(config, show_hud, columns, rows))
    }

    pub fn with_size(config: RendererConfig, show_hud: bool, columns: u16, rows: u16) -> Self {
        Self {
            renderer: CubeRenderer::new(config),
            screen: HalfBlockRenderer::new(columns, rows),
            show_hud,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            last_stats: FrameStats::default(),
        }
    }

    pub fn renderer(&self) -> &CubeRenderer {
        &self.renderer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        tracing::info!(size = ?self.screen.size(), "entered alternate screen");

        let result = self.main_loop();

        // Cleanup
        let restore = execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        terminal::disable_raw_mode()?;
        if let Err(err) = &result {
            tracing::error!(%err, "terminal loop failed");
        }

        result.and(restore)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let period = self.renderer.config().tick_interval;
        let mut next_tick = Instant::now() + period;

        while self.running {
            // Wait for input until the next tick is due
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            let now = Instant::now();
            if now >= next_tick {
                self.renderer.tick();
                next_tick += period;
                if next_tick < now {
                    // Fell behind (e.g. a slow terminal); drop the backlog
                    next_tick = now + period;
                }
            }

            if self.renderer.take_dirty() {
                self.render()?;
            }
        }

        tracing::info!(c = self.renderer.rotation().c, "leaving");
        Ok(())
    }

    /// Apply one terminal event to the renderer
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(columns, rows) => {
                tracing::debug!(columns, rows, "resized");
                self.screen.resize(columns, rows);
                self.renderer.invalidate();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = HalfBlockRenderer::cell_to_pixel(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => self.renderer.pointer_down(pointer_button(button), pos),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => self.renderer.pointer_move(pos),
            MouseEventKind::Up(button) => self.renderer.pointer_up(pointer_button(button)),
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.last_stats = self.renderer.render(self.screen.canvas_mut());

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, terminal::BeginSynchronizedUpdate)?;
        self.screen.draw(&mut stdout)?;

        if self.show_hud {
            self.draw_hud(&mut stdout)?;
        }

        queue!(stdout, terminal::EndSynchronizedUpdate)?;
        stdout.flush()?;

        // Update FPS counter
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_frame).as_secs() >= 1 {
            self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
            self.frame_count = 0;
            self.last_frame = now;
        }

        Ok(())
    }

    fn draw_hud<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        queue!(
            writer,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            SetBackgroundColor(Color::Black),
            Print(self.status_line()),
            ResetColor
        )
    }

    fn status_line(&self) -> String {
        let rotation = self.renderer.rotation();
        let mut line = format!(
            "pointcube | FPS: {:.1} | A: {:.2} B: {:.2} C: {:.2} | Drag=Rotate Q=Quit",
            self.fps, rotation.a, rotation.b, rotation.c
        );
        if self.last_stats.skipped > 0 {
            line.push_str(&format!(" | skipped: {}", self.last_stats.skipped));
        }
        line
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}
