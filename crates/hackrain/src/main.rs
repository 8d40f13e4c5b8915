mod logging;
mod resize;

use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hackrain_config::Config;
use hackrain_core::{RandomStream, Viewport};
use hackrain_scene::Scene;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::resize::ResizeDebouncer;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    if logging::init(&config) {
        let path = hackrain_config::config_path().filter(|path| path.exists());
        info!(
            path = ?path,
            banner = %config.banner_text,
            frame_interval_ms = config.frame_interval_ms,
            resize_debounce_ms = config.resize_debounce_ms,
            seed = ?config.seed,
            "configuration loaded"
        );
    }

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the rain frozen?
    paused: bool,
    /// Falling-code scene.
    scene: Scene,
    /// Pending terminal resizes.
    resize: ResizeDebouncer,
    /// Time budget for one frame.
    frame_interval: Duration,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => RandomStream::seeded(seed),
            None => RandomStream::from_entropy(),
        };
        Self {
            running: false,
            paused: false,
            scene: Scene::new(config.banner_text.clone(), rng),
            resize: ResizeDebouncer::new(config.resize_debounce()),
            frame_interval: config.frame_interval(),
        }
    }

    /// Run the application's main loop.
    ///
    /// Each iteration steps and draws one frame, then waits for input until
    /// the frame interval is used up.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size().wrap_err("failed to query terminal size")?;
        self.apply_resize(Viewport::from_cells(size.width, size.height));
        info!(
            width = size.width,
            height = size.height,
            lines = self.scene.lines().len(),
            "starting"
        );

        self.running = true;
        while self.running {
            let frame_start = Instant::now();
            if let Some(viewport) = self.resize.poll(frame_start) {
                self.apply_resize(viewport);
            }

            if self.paused {
                terminal.draw(|frame| frame.render_widget(&self.scene, frame.area()))?;
            } else {
                let viewport = self.scene.viewport();
                terminal.draw(|frame| self.scene.step(viewport, frame))?;
            }

            self.handle_crossterm_events(frame_start + self.frame_interval)?;
        }

        info!("exiting");
        Ok(())
    }

    /// Lay the scene out for a new terminal size.
    ///
    /// Every debounced resize rebuilds the line set, even when the size is
    /// unchanged.
    fn apply_resize(&mut self, viewport: Viewport) {
        debug!(
            width = viewport.width,
            height = viewport.height,
            "applying resize"
        );
        self.scene.resize(viewport);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Keeps polling until `deadline` so frames stay evenly spaced.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => {
                    self.resize
                        .push(Viewport::from_cells(cols, rows), Instant::now());
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            _ => {}
        }
    }

    /// Freeze or resume the rain.
    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "toggled pause");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
