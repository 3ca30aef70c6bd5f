//! TUI application model (Elm architecture).

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Terminal;
use tracing::{debug, info};

use skiphire_catalog::CatalogSource;
use skiphire_core::{
    PercentageBand, SelectionAction, SelectionController, SkipOption, WasteType,
};

use crate::bridge::spawn_catalog_fetch;
use crate::footer::{render_footer, render_reopen_prompt};
use crate::header::{render_banner, render_header};
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::pickers::{render_band_picker, render_waste_picker};
use crate::skip_grid::{render_skip_grid, SkipGridProps, GRID_COLUMNS};
use crate::styles::ColorTheme;
use crate::visual::render_visual;

/// Terminals at least this wide get the two-column layout.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

/// Widest the popup grows.
const POPUP_MAX_WIDTH: u16 = 100;

/// Focusable sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    WasteTypes,
    Percentage,
    Skips,
    Continue,
}

/// Screen regions of the open popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayout {
    pub popup: Rect,
    pub header: Rect,
    pub banner: Rect,
    pub waste: Rect,
    pub bands: Rect,
    pub visual: Rect,
    pub skips: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Set when the user interrupted with Ctrl+C.
    pub cancelled: bool,
    /// User choices and catalog.
    pub controller: SelectionController,
    /// Section receiving movement and activation keys.
    pub focus: Section,
    /// Cursor within the waste type tags.
    pub waste_cursor: usize,
    /// Cursor within the band buttons.
    pub band_cursor: usize,
    /// Cursor within the available skips.
    pub skip_cursor: usize,
    /// Skip confirmed with Continue.
    pub checkout: Option<SkipOption>,
    theme: ColorTheme,
    source: Arc<dyn CatalogSource>,
    tx: Sender<TuiMessage>,
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app. No fetch is started until [`TuiApp::start_fetch`].
    #[must_use]
    pub fn new(
        source: Arc<dyn CatalogSource>,
        tx: Sender<TuiMessage>,
        rx: Receiver<TuiMessage>,
    ) -> Self {
        Self {
            should_quit: false,
            cancelled: false,
            controller: SelectionController::new(),
            focus: Section::WasteTypes,
            waste_cursor: 0,
            band_cursor: 0,
            skip_cursor: 0,
            checkout: None,
            theme: ColorTheme::default(),
            source,
            tx,
            rx,
        }
    }

    /// Start a catalog fetch on a background thread.
    pub fn start_fetch(&mut self) {
        let generation = self.controller.begin_fetch();
        spawn_catalog_fetch(Arc::clone(&self.source), generation, self.tx.clone());
    }

    /// Toggle each of `types` on, as if picked by the user.
    pub fn preselect(&mut self, types: &[WasteType]) {
        for waste in types {
            if !self.controller.waste_types().contains(waste) {
                self.controller.toggle_waste_type(*waste);
            }
        }
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::CatalogLoaded { generation, result } => {
                self.controller.apply_fetch(generation, result);
                self.clamp_cursors();
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                return;
            }
            KeyAction::Cancel => {
                self.cancelled = true;
                self.should_quit = true;
                return;
            }
            KeyAction::None => return,
            _ => {}
        }

        if !self.controller.is_open() {
            if matches!(action, KeyAction::ReopenPopup | KeyAction::Activate) {
                self.reopen();
            }
            return;
        }

        match action {
            KeyAction::ClosePopup => self.close(),
            KeyAction::NextSection => self.focus = self.next_section(1),
            KeyAction::PrevSection => self.focus = self.next_section(-1),
            KeyAction::MoveLeft => self.move_cursor(-1),
            KeyAction::MoveRight => self.move_cursor(1),
            KeyAction::MoveUp => self.move_cursor(-self.row_step()),
            KeyAction::MoveDown => self.move_cursor(self.row_step()),
            KeyAction::Activate => self.activate(),
            KeyAction::Continue => self.confirm(),
            KeyAction::ReopenPopup | KeyAction::Quit | KeyAction::Cancel | KeyAction::None => {}
        }
        self.clamp_cursors();
    }

    fn close(&mut self) {
        info!("popup closed");
        self.controller.apply(SelectionAction::ClosePopup);
        self.focus = Section::WasteTypes;
        self.waste_cursor = 0;
        self.band_cursor = 0;
        self.skip_cursor = 0;
    }

    fn reopen(&mut self) {
        info!("popup reopened");
        self.controller.apply(SelectionAction::ReopenPopup);
        if self.controller.needs_fetch() {
            self.start_fetch();
        }
    }

    fn activate(&mut self) {
        let action = match self.focus {
            Section::WasteTypes => {
                SelectionAction::ToggleWasteType(WasteType::ALL[self.waste_cursor])
            }
            Section::Percentage => {
                SelectionAction::SelectPercentage(PercentageBand::ALL[self.band_cursor])
            }
            Section::Skips => match self.controller.available_skips().get(self.skip_cursor) {
                Some(skip) => SelectionAction::SelectSkip(skip.clone()),
                None => return,
            },
            Section::Continue => {
                self.confirm();
                return;
            }
        };
        self.controller.apply(action);
    }

    fn confirm(&mut self) {
        if !self.controller.continue_enabled() {
            debug!("continue ignored, no skip ready");
            return;
        }
        self.checkout = self.controller.selected_skip().cloned();
        self.should_quit = true;
    }

    /// Whether the skip grid currently has entries that can take focus.
    #[must_use]
    pub fn skips_focusable(&self) -> bool {
        self.controller.show_skip_sizes()
            && !self.controller.is_loading()
            && self.controller.error().is_none()
            && !self.controller.available_skips().is_empty()
    }

    fn next_section(&self, step: i32) -> Section {
        let order: Vec<Section> = [
            Section::WasteTypes,
            Section::Percentage,
            Section::Skips,
            Section::Continue,
        ]
        .into_iter()
        .filter(|s| *s != Section::Skips || self.skips_focusable())
        .collect();
        let len = i32::try_from(order.len()).unwrap_or(1);
        let current = order.iter().position(|s| *s == self.focus).unwrap_or(0);
        let current = i32::try_from(current).unwrap_or(0);
        let next = (current + step).rem_euclid(len);
        order[usize::try_from(next).unwrap_or(0)]
    }

    fn row_step(&self) -> i32 {
        if self.focus == Section::Skips {
            i32::try_from(GRID_COLUMNS).unwrap_or(1)
        } else {
            1
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let (cursor, len) = match self.focus {
            Section::WasteTypes => (&mut self.waste_cursor, WasteType::ALL.len()),
            Section::Percentage => (&mut self.band_cursor, PercentageBand::ALL.len()),
            Section::Skips => (
                &mut self.skip_cursor,
                self.controller.available_skips().len(),
            ),
            Section::Continue => return,
        };
        if len == 0 {
            return;
        }
        let step = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        let target = if delta.is_negative() {
            cursor.saturating_sub(step)
        } else {
            cursor.saturating_add(step)
        };
        *cursor = target.min(len - 1);
    }

    fn clamp_cursors(&mut self) {
        let skips = self.controller.available_skips().len();
        self.skip_cursor = self.skip_cursor.min(skips.saturating_sub(1));
        if self.focus == Section::Skips && !self.skips_focusable() {
            self.focus = Section::Percentage;
        }
    }

    fn cursor_for(&self, section: Section, value: usize) -> Option<usize> {
        (self.focus == section).then_some(value)
    }

    /// Compute the popup layout for a terminal area.
    ///
    /// Wide terminals put the visual panel in a right-hand column; narrow
    /// ones stack it between the band picker and the skip grid.
    #[must_use]
    pub fn compute_layout(area: Rect) -> PopupLayout {
        let width = area.width.min(POPUP_MAX_WIDTH);
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: area.height,
        };
        let inner = Block::default().borders(Borders::ALL).inner(popup);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(3), // banner
                Constraint::Min(8),    // body
                Constraint::Length(3), // footer
            ])
            .split(inner);

        let (waste, bands, visual, skips) = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(outer[2]);
            let left = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(4),
                    Constraint::Min(3),
                ])
                .split(cols[0]);
            (left[0], left[1], cols[1], left[2])
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Length(5),
                    Constraint::Length(6),
                    Constraint::Min(3),
                ])
                .split(outer[2]);
            (rows[0], rows[1], rows[2], rows[3])
        };

        PopupLayout {
            popup,
            header: outer[0],
            banner: outer[1],
            waste,
            bands,
            visual,
            skips,
            footer: outer[3],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        if !self.controller.is_open() {
            render_reopen_prompt(frame, area, &self.theme);
            return;
        }

        let layout = Self::compute_layout(area);
        let c = &self.controller;
        let has_waste = !c.waste_types().is_empty();

        frame.render_widget(Clear, layout.popup);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.muted_style()),
            layout.popup,
        );

        render_header(frame, layout.header, &self.theme);
        render_banner(frame, layout.banner, &self.theme);
        render_waste_picker(
            frame,
            layout.waste,
            c.waste_types(),
            self.cursor_for(Section::WasteTypes, self.waste_cursor),
            &self.theme,
        );
        render_band_picker(
            frame,
            layout.bands,
            c.percentage(),
            has_waste,
            self.cursor_for(Section::Percentage, self.band_cursor),
            &self.theme,
        );
        render_visual(frame, layout.visual, c.percentage(), has_waste, &self.theme);
        if c.show_skip_sizes() {
            let props = SkipGridProps {
                loading: c.is_loading(),
                error: c.error(),
                skips: c.available_skips(),
                selected: c.selected_skip(),
                cursor: self.cursor_for(Section::Skips, self.skip_cursor),
            };
            render_skip_grid(frame, layout.skips, &props, &self.theme);
        }
        render_footer(
            frame,
            layout.footer,
            c.selected_skip(),
            c.is_loading(),
            c.error().is_some(),
            self.focus == Section::Continue,
            &self.theme,
        );
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(100);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            // Resize events need no handling, draw() picks up the new size
            if event::poll(tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press {
                        self.handle_key_action(map_key(key_event));
                    }
                }
            }

            // Pick up the catalog once the fetch thread reports
            self.update();
        }
    }
}
