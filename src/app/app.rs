//! Main application controller
//!
//! Owns the terminal and the desktop, runs the draw/input loop, and loads
//! or saves the window layout around it.

use crate::{
    app::{desktop::Desktop, tui::Tui},
    config::{persistence::LayoutStorage, AppConfig},
    Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Windows, dialog and status line
    desktop: Desktop,
    /// Application config
    config: AppConfig,
    /// Layout storage, present when saving or restoring is enabled
    storage: Option<LayoutStorage>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Result<Self> {
        let tui = Tui::new(config.tick_rate())?;
        let desktop = Desktop::new(&config, tui.size()?);
        let storage = if config.restore_layout || config.save_layout {
            Some(LayoutStorage::new()?)
        } else {
            None
        };

        Ok(Self {
            tui,
            desktop,
            config,
            storage,
        })
    }

    /// Initialize the terminal and reopen saved windows
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        if self.config.restore_layout {
            if let Some(storage) = &self.storage {
                match storage.load() {
                    Ok(layout) => {
                        self.desktop.restore_layout(layout);
                    }
                    Err(e) => tracing::warn!(error = %e, "could not load saved layout"),
                }
            }
        }
        Ok(())
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        while !self.desktop.should_quit() {
            if self.desktop.take_redraw() {
                self.draw()?;
            }
            if let Some(event) = self.tui.next_event()? {
                self.desktop.handle_event(event);
            }
        }
        Ok(())
    }

    /// Save the layout if configured and give the terminal back
    pub fn shutdown(&mut self) -> Result<()> {
        if self.config.save_layout {
            if let Some(storage) = &self.storage {
                storage.save(&self.desktop.to_layout())?;
                tracing::info!(windows = self.desktop.windows().len(), "layout saved");
            }
        }
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let size = self.tui.size()?;
        if size != self.desktop.screen() {
            self.desktop.resize(size);
        }
        let desktop = &self.desktop;
        self.tui.draw(|f| desktop.render(f.buffer_mut()))?;
        Ok(())
    }
}
