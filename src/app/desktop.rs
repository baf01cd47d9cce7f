//! Desktop
//!
//! The screen between the menu bar and the status line. Owns the stack of
//! list windows (back to front, the last one is active), the optional
//! greeting dialog, and the status line every column writes its hint to.

use crate::app::{
    state::{AppState, Command, StateManager},
    status::StatusLine,
    theme::Palette,
    widgets::{Component, GreetingDialog, InputEvent, ItemWindow},
};
use crate::config::{persistence::DesktopLayout, AppConfig};
use ratatui::{buffer::Buffer, layout::Rect};

const BACKGROUND: &str = "░";

/// Menu bar entries: label, index of the highlighted shortcut letter, command
const MENU: [(&str, usize, Command); 3] = [
    ("Greeting", 0, Command::Greeting),
    ("List", 0, Command::OpenList),
    ("Exit", 1, Command::Quit),
];

#[derive(Debug)]
pub struct Desktop {
    screen: Rect,
    palette: Palette,
    status: StatusLine,
    state_manager: StateManager,
    windows: Vec<ItemWindow>,
    greeting: Option<GreetingDialog>,
    greeting_text: String,
    next_number: u16,
    dirty: bool,
}

impl Desktop {
    pub const WINDOW_TITLE: &'static str = "List";

    pub fn new(config: &AppConfig, screen: Rect) -> Self {
        Self {
            screen,
            palette: Palette::default(),
            status: StatusLine::new(config.initial_hint.clone()),
            state_manager: StateManager::new(),
            windows: Vec::new(),
            greeting: None,
            greeting_text: config.greeting.clone(),
            next_number: 1,
            dirty: true,
        }
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Area available to windows: the screen minus menu bar and status line
    pub fn workspace(&self) -> Rect {
        Rect::new(
            self.screen.x,
            self.screen.y + self.screen.height.min(1),
            self.screen.width,
            self.screen.height.saturating_sub(2),
        )
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn state(&self) -> &AppState {
        self.state_manager.current_state()
    }

    pub fn windows(&self) -> &[ItemWindow] {
        &self.windows
    }

    pub fn active_window(&self) -> Option<&ItemWindow> {
        self.windows.last()
    }

    pub fn greeting(&self) -> Option<&GreetingDialog> {
        self.greeting.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    /// Open a list window covering the workspace and make it active
    pub fn open_list_window(&mut self) {
        let workspace = self.workspace();
        let number = self.next_number;
        self.next_number = self.next_number.wrapping_add(1);
        tracing::info!(number, "opening list window");
        self.windows.push(ItemWindow::with_placeholders(
            Self::WINDOW_TITLE,
            number,
            workspace,
            workspace,
        ));
        self.activate(self.windows.len() - 1);
    }

    /// Close the active window; its columns go with it
    pub fn close_active_window(&mut self) -> Option<ItemWindow> {
        let closed = self.windows.pop()?;
        tracing::info!(number = closed.number(), "closing list window");
        if let Some(last) = self.windows.len().checked_sub(1) {
            self.activate(last);
        }
        Some(closed)
    }

    /// Send the active window to the back
    pub fn next_window(&mut self) {
        if self.windows.len() > 1 {
            let front = self.windows.remove(self.windows.len() - 1);
            self.windows.insert(0, front);
            self.activate(self.windows.len() - 1);
        }
    }

    pub fn open_greeting(&mut self) {
        self.greeting = Some(GreetingDialog::new(
            self.greeting_text.clone(),
            self.workspace(),
        ));
        self.state_manager.transition_to(AppState::Greeting);
    }

    /// The terminal changed size
    pub fn resize(&mut self, screen: Rect) {
        tracing::debug!(?screen, "screen resized");
        self.screen = screen;
        let workspace = self.workspace();
        for window in &mut self.windows {
            window.set_desktop(workspace);
        }
        if let Some(greeting) = &mut self.greeting {
            greeting.on_resize(workspace);
        }
        self.dirty = true;
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        self.dirty = true;

        if let InputEvent::Resize { width, height } = event {
            self.resize(Rect::new(0, 0, width, height));
            return;
        }

        if *self.state_manager.current_state() == AppState::Greeting {
            self.handle_greeting_event(&event);
            return;
        }

        match event {
            InputEvent::Key(key) => match StateManager::key_to_command(key) {
                Command::None => {
                    if let Some(window) = self.windows.last_mut() {
                        window.handle_input(&event, Some(&mut self.status));
                    }
                }
                command => self.execute(command),
            },
            InputEvent::MouseDown { column, row } => {
                if row == self.screen.y {
                    if let Some(command) = self.menu_command_at(column) {
                        self.execute(command);
                    }
                    return;
                }
                if let Some(index) = self.windows.iter().rposition(|w| w.contains(column, row)) {
                    self.activate(index);
                    if let Some(window) = self.windows.last_mut() {
                        window.handle_input(&event, Some(&mut self.status));
                    }
                }
            }
            InputEvent::MouseDrag { .. } | InputEvent::MouseUp { .. } => {
                if let Some(window) = self.windows.last_mut() {
                    window.handle_input(&event, Some(&mut self.status));
                }
            }
            InputEvent::Resize { .. } => {}
        }
    }

    /// Consume every outstanding redraw request
    pub fn take_redraw(&mut self) -> bool {
        let windows = self
            .windows
            .iter_mut()
            .fold(false, |pending, window| window.take_redraw() || pending);
        let status = self.status.take_pending();
        std::mem::take(&mut self.dirty) | windows | status
    }

    pub fn render(&self, buf: &mut Buffer) {
        let screen = self.screen;
        if screen.width == 0 || screen.height == 0 {
            return;
        }
        let palette = &self.palette;

        self.render_menu_bar(buf);

        let workspace = self.workspace();
        let fill = BACKGROUND.repeat(usize::from(workspace.width));
        for y in workspace.y..workspace.y + workspace.height {
            buf.set_string(workspace.x, y, &fill, palette.desktop);
        }

        for window in &self.windows {
            window.render(buf, palette);
        }
        if let Some(greeting) = &self.greeting {
            greeting.render(buf, palette);
        }

        if screen.height > 1 {
            let status_area = Rect::new(screen.x, screen.y + screen.height - 1, screen.width, 1);
            self.status.render(status_area, buf, palette);
        }
    }

    /// Snapshot of the open windows for persistence
    pub fn to_layout(&self) -> DesktopLayout {
        DesktopLayout::new(self.windows.iter().map(ItemWindow::to_record).collect())
    }

    /// Reopen saved windows; records that fail to restore are skipped.
    /// Returns the number of windows restored.
    pub fn restore_layout(&mut self, layout: DesktopLayout) -> usize {
        let workspace = self.workspace();
        let mut restored = 0;
        for record in layout.windows {
            match ItemWindow::from_record(record, workspace) {
                Ok(window) => {
                    self.next_number = self.next_number.max(window.number().wrapping_add(1));
                    self.windows.push(window);
                    restored += 1;
                }
                Err(e) => tracing::warn!(error = %e, "skipping saved window"),
            }
        }
        if let Some(last) = self.windows.len().checked_sub(1) {
            self.activate(last);
        }
        tracing::info!(restored, "layout restored");
        self.dirty = true;
        restored
    }

    fn execute(&mut self, command: Command) {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Greeting => self.open_greeting(),
            Command::OpenList => self.open_list_window(),
            Command::CloseWindow => {
                self.close_active_window();
            }
            Command::NextWindow => self.next_window(),
            Command::Quit => self.state_manager.quit(),
            Command::None => {}
        }
    }

    fn handle_greeting_event(&mut self, event: &InputEvent) {
        let closed = match &mut self.greeting {
            Some(greeting) => {
                greeting.handle_input(event, Some(&mut self.status));
                greeting.is_closed()
            }
            None => true,
        };
        if closed {
            self.greeting = None;
            self.state_manager.go_back();
        }
    }

    /// Move window `index` to the front and make it the only active one
    fn activate(&mut self, index: usize) {
        let window = self.windows.remove(index);
        self.windows.push(window);
        let last = self.windows.len() - 1;
        for (i, window) in self.windows.iter_mut().enumerate() {
            window.set_active(i == last);
        }
    }

    fn menu_entries(&self) -> impl Iterator<Item = (u16, &'static str, usize, Command)> + '_ {
        let mut x = self.screen.x;
        MENU.iter().map(move |&(label, hotkey, command)| {
            let start = x;
            x += label.len() as u16 + 2;
            (start, label, hotkey, command)
        })
    }

    fn menu_command_at(&self, column: u16) -> Option<Command> {
        self.menu_entries()
            .find(|(start, label, _, _)| column >= *start && column < start + label.len() as u16 + 2)
            .map(|(_, _, _, command)| command)
    }

    fn render_menu_bar(&self, buf: &mut Buffer) {
        let screen = self.screen;
        let right = screen.x + screen.width;
        buf.set_string(screen.x, screen.y, " ".repeat(usize::from(screen.width)), self.palette.menu);
        for (start, label, hotkey, _) in self.menu_entries() {
            if start + 1 >= right {
                break;
            }
            let width = usize::from(right - start - 1);
            buf.set_stringn(start + 1, screen.y, label, width, self.palette.menu);
            if hotkey < width {
                if let Some(letter) = label.get(hotkey..hotkey + 1) {
                    buf.set_string(start + 1 + hotkey as u16, screen.y, letter, self.palette.menu_shortcut);
                }
            }
        }
    }
}
