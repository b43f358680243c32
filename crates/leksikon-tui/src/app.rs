//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! Searching is debounced. Query edits only schedule a search; the loop calls
//! [`App::tick`] on every iteration, which applies a local search once the
//! debounce deadline passes, or picks up the newest remote result.

use crate::{
    commands::{execute_command, Command, CommandError},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        entry_detail::{EntryDetail, EntryDetailState},
        entry_list::{EntryList, EntryListState},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        region_list::{RegionList, RegionListState},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use leksikon_core::{
    config::Config, debounce::Debouncer, slug::slugify, view::LexiconView, LexiconSource,
    LexiconStore, RegionalEntry,
};
use leksikon_feeds::{SearchSession, SearchUpdate, Ticket};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};

// ---------------------------------------------------------------------------
// Focus + tab types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Regions,
    Entries,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

pub enum TabKind {
    Browse,
    Entry(EntryDetailState),
}

pub struct TabState {
    pub kind: TabKind,
    /// A search is scheduled or in flight for this tab.
    pub pending: bool,
}

impl TabState {
    pub fn label(&self) -> &str {
        match &self.kind {
            TabKind::Browse => "browse",
            TabKind::Entry(detail) => detail.label(),
        }
    }
}

/// Everything on the browse tab.
pub struct BrowseState {
    pub view: LexiconView,
    pub entries: EntryListState,
    pub regions: RegionListState,
    pub query: QueryBarState,
    /// The query the visible rows were produced for; emphasized in rows.
    pub applied_query: String,
}

/// Where query edits go.
pub enum SearchMode {
    /// Debounced search over the local store.
    Local(Debouncer),
    /// Debounced search against the corpus API.
    Remote {
        session: SearchSession,
        issued: Option<Ticket>,
        seen: Option<Ticket>,
    },
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub tabs: Vec<TabState>,
    pub active_tab: usize,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
    pub browse: BrowseState,
    pub store: LexiconStore,
    pub search: SearchMode,
    /// Last remote failure, shown in the search bar until the next result.
    pub status: Option<String>,
}

impl AppState {
    /// Close the active entry tab, or quit from the browse tab.
    pub fn close_tab(&mut self) {
        if self.active_tab == 0 {
            tracing::debug!("quit");
            self.quit = true;
        } else {
            tracing::debug!(tab = self.active_tab, "closing tab");
            self.tabs.remove(self.active_tab);
            self.active_tab = self.active_tab.saturating_sub(1);
        }
    }

    pub fn set_region(&mut self, region: Option<String>) {
        self.browse.regions.mark_applied(region.as_deref());
        if self.browse.view.set_region(region) {
            self.browse.entries.reset_cursor();
        }
    }

    /// Open the entry whose term slugifies to `slug`, looking in the current
    /// results first and then in the whole store.
    pub fn open_slug(&mut self, slug: &str) -> bool {
        let found = self
            .browse
            .view
            .pool()
            .iter()
            .find(|item| slugify(&item.entry.term) == slug)
            .or_else(|| self.store.find_by_slug(None, slug))
            .cloned();
        match found {
            Some(item) => {
                self.open_entry(item);
                true
            }
            None => false,
        }
    }

    pub fn open_entry(&mut self, item: RegionalEntry) {
        tracing::debug!(term = %item.entry.term, region = %item.region, "opening entry tab");
        let detail = EntryDetailState::new(item, self.browse.applied_query.clone());
        self.tabs.push(TabState {
            kind: TabKind::Entry(detail),
            pending: false,
        });
        self.active_tab = self.tabs.len() - 1;
    }

    /// The query text changed; schedule a search.
    fn query_edited(&mut self, now: Instant) {
        let query = self.browse.query.text().to_string();
        match &mut self.search {
            SearchMode::Local(debouncer) => debouncer.schedule(now),
            SearchMode::Remote {
                session, issued, ..
            } => *issued = Some(session.submit(query)),
        }
    }

    /// Run a scheduled local search right away (Enter in the search bar).
    fn flush_local_search(&mut self) {
        if let SearchMode::Local(debouncer) = &mut self.search {
            if debouncer.is_pending() {
                debouncer.cancel();
                self.apply_local_query();
            }
        }
    }

    fn apply_local_query(&mut self) {
        let query = self.browse.query.text().to_string();
        if self.browse.view.set_query(query.as_str()) {
            self.browse.entries.reset_cursor();
        }
        self.browse.applied_query = query;
    }

    /// Show a remote search outcome. A blank query restores the local store;
    /// a failure keeps the current rows and reports the error.
    pub fn apply_search_update(&mut self, update: &SearchUpdate) {
        match &update.outcome {
            Ok(entries) => {
                let pool = if update.query.trim().is_empty() {
                    self.store.entries().to_vec()
                } else {
                    entries.clone()
                };
                tracing::debug!(query = %update.query, rows = pool.len(), "remote results applied");
                // Rows arrive ranked by the corpus API; keep their order.
                self.browse.view.set_query("");
                self.browse.view.replace_pool(pool);
                self.browse.entries.reset_cursor();
                self.browse.applied_query = update.query.clone();
                self.status = None;
            }
            Err(err) => {
                self.status = Some(format!("search failed: {err}"));
            }
        }
    }

    /// Advance debounce timers and pick up remote results.
    pub fn tick(&mut self, now: Instant) {
        let update = match &mut self.search {
            SearchMode::Local(debouncer) => {
                if debouncer.fire(now) {
                    self.apply_local_query();
                }
                None
            }
            SearchMode::Remote { session, seen, .. } => {
                let applied = session.applied_ticket();
                if applied.is_some() && applied != *seen {
                    *seen = applied;
                    session.latest().map(|a| a.value)
                } else {
                    None
                }
            }
        };
        if let Some(update) = update {
            self.apply_search_update(&update);
        }
        self.tabs[0].pending = self.search_pending();
    }

    pub fn search_pending(&self) -> bool {
        match &self.search {
            SearchMode::Local(debouncer) => debouncer.is_pending(),
            SearchMode::Remote { issued, seen, .. } => issued.is_some() && issued != seen,
        }
    }

    /// Right-hand text of the search bar.
    fn status_line(&self) -> String {
        if let Some(status) = &self.status {
            return status.clone();
        }
        let mode = match self.search {
            SearchMode::Local(_) => "local",
            SearchMode::Remote { .. } => "remote",
        };
        if self.search_pending() {
            return format!("searching… · {mode}");
        }
        let hits = self.browse.view.hit_count();
        let noun = if hits == 1 { "hit" } else { "hits" };
        format!("{hits} {noun} · {mode}")
    }

    fn page_rows(&self) -> usize {
        self.browse.view.page().rows.len()
    }

    fn selected_entry(&self) -> Option<RegionalEntry> {
        let page = self.browse.view.page();
        page.rows
            .get(self.browse.entries.cursor)
            .map(|row| row.item.clone())
    }

    fn turn_page(&mut self, event: &AppEvent) {
        let view = &mut self.browse.view;
        let moved = match event {
            AppEvent::PrevPage => view.prev_page(),
            AppEvent::NextPage => view.next_page(),
            AppEvent::FirstPage => view.first_page(),
            AppEvent::LastPage => view.last_page(),
            _ => false,
        };
        if moved {
            tracing::debug!(page = view.current_page(), "page turned");
            self.browse.entries.reset_cursor();
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    /// `remote` switches searching to the corpus API; the session must have
    /// been created inside the Tokio runtime that outlives the app.
    pub fn new(
        store: LexiconStore,
        config: Config,
        theme: Theme,
        remote: Option<SearchSession>,
    ) -> Self {
        let view = LexiconView::new(store.entries().to_vec(), config.lexicon.page_size);
        let browse = BrowseState {
            view,
            entries: EntryListState::default(),
            regions: RegionListState::new(&store),
            query: QueryBarState::default(),
            applied_query: String::new(),
        };
        let search = match remote {
            Some(session) => SearchMode::Remote {
                session,
                issued: None,
                seen: None,
            },
            None => SearchMode::Local(Debouncer::new(config.search.debounce())),
        };

        let state = AppState {
            tabs: vec![TabState {
                kind: TabKind::Browse,
                pending: false,
            }],
            active_tab: 0,
            focus: Focus::Entries,
            prev_focus: Focus::Entries,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
            browse,
            store,
            search,
            status: None,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.tick(Instant::now());
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(&self.state) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn tick(&mut self, now: Instant) {
        self.state.tick(now);
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => run_command_bar(s),
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            return;
        }

        let on_browse = s.active_tab == 0;

        match event {
            // Toggle help (only when not typing in the query bar)
            AppEvent::Char('?') if s.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the query bar)
            AppEvent::Char(':') if s.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            // Tab switching with digit keys
            AppEvent::Char(c @ '1'..='9') if s.focus != Focus::QueryBar => {
                let idx = c as usize - '1' as usize;
                if idx < s.tabs.len() {
                    tracing::debug!(tab = idx, "switching tab");
                    s.active_tab = idx;
                }
            }

            AppEvent::Quit => s.close_tab(),

            // Return focus from query bar
            AppEvent::Escape => {
                if s.focus == Focus::QueryBar {
                    tracing::debug!("focus: QueryBar -> Entries");
                    s.focus = Focus::Entries;
                }
            }

            // Tab-cycle focus: Regions → Entries → QueryBar → Regions
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Regions => Focus::Entries,
                    Focus::Entries => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::Regions,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to query bar, always on the browse tab
            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                s.active_tab = 0;
                s.focus = Focus::QueryBar;
            }

            // Paging works from any pane, including while typing
            AppEvent::PrevPage | AppEvent::NextPage | AppEvent::FirstPage | AppEvent::LastPage
                if on_browse =>
            {
                s.turn_page(&event)
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(s: &AppState) -> bool {
    s.focus == Focus::Command || (s.focus == Focus::QueryBar && s.active_tab == 0)
}

fn run_command_bar(s: &mut AppState) {
    let input = s.command_bar.text().to_string();
    match Command::parse(&input) {
        Ok(cmd) => {
            tracing::debug!(command = ?cmd, "executing command");
            s.command_bar.clear();
            s.focus = s.prev_focus;
            if let Err(msg) = execute_command(s, cmd) {
                // Reopen the bar to show why the command was not applied
                s.prev_focus = s.focus;
                s.focus = Focus::Command;
                s.command_bar.error = Some(msg);
            }
        }
        Err(CommandError::Empty) => {
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        Err(err) => s.command_bar.error = Some(err.to_string()),
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    if let Some(TabState {
        kind: TabKind::Entry(detail),
        ..
    }) = s.tabs.get_mut(s.active_tab)
    {
        detail.handle(&event);
        return;
    }

    match s.focus {
        Focus::Regions => {
            if let Some(region) = s.browse.regions.handle(&event) {
                s.set_region(region);
            }
        }
        Focus::Entries => match event {
            AppEvent::Enter | AppEvent::Char(' ') | AppEvent::Nav(event::Direction::Right) => {
                if let Some(item) = s.selected_entry() {
                    s.open_entry(item);
                }
            }
            other => {
                let rows = s.page_rows();
                s.browse.entries.handle(&other, rows);
            }
        },
        Focus::QueryBar => match event {
            AppEvent::Enter => {
                s.flush_local_search();
                s.focus = Focus::Entries;
            }
            other => {
                if s.browse.query.handle(&other) {
                    s.query_edited(Instant::now());
                }
            }
        },
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(TabBar::new(&state.tabs, state.active_tab, &state.theme), vert[0]);

    match &state.tabs[state.active_tab].kind {
        TabKind::Browse => {
            let pct = state.config.ui.region_pane_width_pct;
            let horiz = Layout::default()
                .direction(LayoutDir::Horizontal)
                .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
                .split(vert[1]);

            let browse = &state.browse;
            let page = browse.view.page();
            frame.render_widget(
                RegionList::new(&browse.regions, state.focus == Focus::Regions, &state.theme),
                horiz[0],
            );
            frame.render_widget(
                EntryList::new(
                    &browse.entries,
                    &page,
                    &browse.applied_query,
                    state.focus == Focus::Entries,
                    &state.theme,
                ),
                horiz[1],
            );
        }
        TabKind::Entry(detail) => {
            frame.render_widget(EntryDetail::new(detail, &state.theme), vert[1]);
        }
    }

    let status = state.status_line();
    let query_focused = state.focus == Focus::QueryBar && state.active_tab == 0;
    let query_bar = QueryBar::new(&state.browse.query, query_focused, &status, &state.theme);
    let cursor = query_bar.cursor_position(vert[2]);
    frame.render_widget(query_bar, vert[2]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if query_focused {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
