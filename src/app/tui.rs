//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and input event polling for the TUI application.

use crate::app::widgets::InputEvent;
use crate::{Error, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    initialized: bool,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            initialized: false,
            last_tick: Instant::now(),
            tick_rate,
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> Result<()> {
        enable_raw_mode().map_err(setup_failed("enable raw mode"))?;
        self.initialized = true;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .map_err(setup_failed("enter alternate screen"))?;
        self.terminal
            .hide_cursor()
            .map_err(setup_failed("hide cursor"))?;
        self.terminal.clear().map_err(setup_failed("clear screen"))?;
        tracing::info!("terminal initialized");
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        tracing::info!("terminal restored");
        Ok(())
    }

    /// Get terminal size for layout handling
    pub fn size(&self) -> io::Result<Rect> {
        self.terminal.size()
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for input and return the translated event
    pub fn next_event(&mut self) -> io::Result<Option<InputEvent>> {
        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Some(input) = InputEvent::from_crossterm(event::read()?) {
                return Ok(Some(input));
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        Ok(None)
    }
}

fn setup_failed(step: &'static str) -> impl FnOnce(io::Error) -> Error {
    move |err| Error::Tui(format!("Failed to {}: {}", step, err))
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
