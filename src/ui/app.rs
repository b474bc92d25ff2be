use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::config::UiConfig;
use crate::inventory::{InventoryMachine, InventoryState, LoadTicket, Notice};
use crate::model::{Category, Item};
use crate::source::{RemoteSource, SourceError};
use crate::store::PersistenceStore;
use crate::ui::detail::{DetailDialogState, DetailIntent, DetailReducer};
use crate::ui::mvi::Reducer;
use crate::ui::search::SearchBox;
use crate::ui::view::{categories, ViewQuery};

pub type SharedStore = Arc<dyn PersistenceStore>;
pub type SharedSource = Arc<dyn RemoteSource>;
pub type Inventory = InventoryMachine<SharedStore, SharedSource>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Table,
    Search,
    Detail,
}

#[derive(Debug)]
pub enum UiCommand {
    /// Fetch for a started load and report back with `AppEvent::LoadFinished`.
    Load(LoadTicket),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// What the body region should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Loading,
    Error(String),
    Empty,
    NoMatches,
    Table,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    inventory: Inventory,
    config: UiConfig,
    query: ViewQuery,
    search: SearchBox,
    /// Row index into the filtered, sorted view.
    cursor: usize,
    /// State of the detail dialog (MVI pattern).
    detail: DetailDialogState,
    command_sender: Option<UiCommandSender>,
    /// Notice currently on screen and when it appeared.
    toast: Option<(Notice, Instant)>,
}

impl App {
    pub fn new(inventory: Inventory, config: UiConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Table,
            query: ViewQuery::with_threshold(config.low_stock_threshold),
            search: SearchBox::new(config.search_debounce()),
            inventory,
            config,
            cursor: 0,
            detail: DetailDialogState::default(),
            command_sender: None,
            toast: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn state(&self) -> &InventoryState {
        self.inventory.state()
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn search_input(&self) -> &str {
        self.search.input()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn detail(&self) -> &DetailDialogState {
        &self.detail
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Items in display order.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.query.apply(self.inventory.items())
    }

    pub fn categories(&self) -> Vec<Category> {
        categories(self.inventory.items())
    }

    pub fn body_view(&self) -> BodyView {
        let state = self.inventory.state();
        if state.is_loading() {
            return BodyView::Loading;
        }
        if let Some(message) = &state.error_message {
            return BodyView::Error(message.clone());
        }
        if state.items.is_empty() {
            return BodyView::Empty;
        }
        if self.visible_items().is_empty() {
            return BodyView::NoMatches;
        }
        BodyView::Table
    }

    // ========================================================================
    // Inventory operations
    // ========================================================================

    /// Start a load unless one is already running.
    pub fn request_load(&mut self) {
        if self.inventory.is_loading() {
            return;
        }
        let ticket = self.inventory.begin_load();
        if let Err(message) = self.send_command(UiCommand::Load(ticket)) {
            self.inventory
                .finish_load(ticket, Err(SourceError::Other(message)));
        }
    }

    pub fn on_load_finished(&mut self, ticket: LoadTicket, result: Result<Vec<Item>, SourceError>) {
        if self.inventory.finish_load(ticket, result) {
            self.clamp_cursor();
        }
    }

    pub fn undo(&mut self) {
        self.inventory.undo();
        self.close_detail();
    }

    /// Reset inventory and every view filter.
    pub fn reset(&mut self) {
        self.inventory.reset();
        self.detail = DetailDialogState::Hidden;
        self.focus = Focus::Table;
        self.search.clear();
        self.query = ViewQuery {
            sort_key: self.query.sort_key,
            sort_dir: self.query.sort_dir,
            ..ViewQuery::with_threshold(self.config.low_stock_threshold)
        };
        self.cursor = 0;
    }

    pub fn toggle_force_error(&mut self) {
        let next = !self.inventory.state().pending_force_error;
        self.inventory.set_force_error_next_load(next);
    }

    pub fn dismiss_message(&mut self) {
        self.inventory.clear_save_message();
        self.toast = None;
    }

    // ========================================================================
    // Table navigation and filters
    // ========================================================================

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_items().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let max = len - 1;
        self.cursor = if delta.is_negative() {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta as usize).min(max)
        };
    }

    pub fn cycle_category(&mut self) {
        let available = self.categories();
        self.query.cycle_category(&available);
        self.clamp_cursor();
    }

    pub fn toggle_low_stock(&mut self) {
        self.query.low_stock_only = !self.query.low_stock_only;
        self.clamp_cursor();
    }

    pub fn cycle_sort_key(&mut self) {
        self.query.sort_by(self.query.sort_key.next());
    }

    pub fn toggle_sort_dir(&mut self) {
        self.query.sort_dir = self.query.sort_dir.toggled();
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn blur_search(&mut self) {
        self.focus = Focus::Table;
    }

    pub fn search_push(&mut self, ch: char) {
        self.search.push(ch, Instant::now());
    }

    pub fn search_backspace(&mut self) {
        self.search.backspace(Instant::now());
    }

    // ========================================================================
    // Detail dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    /// Select the row under the cursor and open its detail dialog.
    pub fn open_selected(&mut self) {
        let Some(item) = self.visible_items().get(self.cursor).map(|it| (*it).clone()) else {
            return;
        };
        self.inventory.set_selected_id(Some(item.id.clone()));
        self.dispatch_detail(DetailIntent::Open { item });
        self.focus = Focus::Detail;
    }

    pub fn close_detail(&mut self) {
        if !self.detail.is_visible() {
            return;
        }
        self.dispatch_detail(DetailIntent::Close);
        self.inventory.set_selected_id(None);
        self.focus = Focus::Table;
    }

    /// Try to save the dialog's values. Invalid input keeps the dialog open
    /// with errors shown.
    pub fn submit_detail(&mut self) {
        self.dispatch_detail(DetailIntent::Submit);
        let Some(Ok(patch)) = self.detail.patch() else {
            return;
        };
        let Some(id) = self.detail.item_id().map(str::to_string) else {
            return;
        };
        self.inventory.save_item(&id, patch);
        self.close_detail();
    }

    /// The item the dialog is editing, if it still exists.
    pub fn detail_item(&self) -> Option<&Item> {
        if !self.detail.is_visible() {
            return None;
        }
        self.inventory.selected_item()
    }

    // ========================================================================
    // Ticks
    // ========================================================================

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Apply settled search text and expire the current notice.
    pub fn on_tick_at(&mut self, now: Instant) {
        if self.search.tick(now) {
            self.query.set_search(self.search.applied());
            self.clamp_cursor();
        }

        // A dialog whose item vanished (reset, reload) closes itself.
        if self.detail.is_visible() && self.inventory.selected_item().is_none() {
            self.dispatch_detail(DetailIntent::Close);
            self.focus = Focus::Table;
        }

        match (self.inventory.state().last_message, self.toast) {
            (None, _) => self.toast = None,
            (Some(notice), Some((shown, since))) if notice == shown => {
                if now.duration_since(since) >= self.config.toast_duration() {
                    self.dismiss_message();
                }
            }
            (Some(notice), _) => self.toast = Some((notice, now)),
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("Load worker is not running".to_string());
        };
        sender
            .try_send(command)
            .map_err(|err| format!("Failed to start load: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::inventory::LoadPhase;
    use crate::source::MockSource;
    use crate::store::MemoryStore;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
        let catalog = Catalog::new(12, 42, Utc.with_ymd_and_hms(2026, 3, 3, 3, 3, 0).unwrap());
        let store: SharedStore = Arc::new(MemoryStore::new());
        let source: SharedSource = Arc::new(MockSource::new(catalog.clone()));
        let inventory = InventoryMachine::new(store, source, catalog);
        let mut app = App::new(inventory, UiConfig::default());
        let (tx, rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        (app, rx)
    }

    fn loaded_app() -> App {
        let (mut app, mut rx) = make_app();
        app.request_load();
        let Ok(UiCommand::Load(ticket)) = rx.try_recv() else {
            panic!("Expected load command");
        };
        let items = Catalog::new(12, 42, Utc.with_ymd_and_hms(2026, 3, 3, 3, 3, 0).unwrap()).items();
        app.on_load_finished(ticket, Ok(items));
        app
    }

    #[test]
    fn request_load_sends_ticket_and_enters_loading() {
        let (mut app, mut rx) = make_app();
        app.request_load();
        assert_eq!(app.body_view(), BodyView::Loading);
        assert!(matches!(rx.try_recv(), Ok(UiCommand::Load(_))));

        // Reload while loading is ignored.
        app.request_load();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn load_without_worker_surfaces_error() {
        let catalog = Catalog::new(3, 42, Utc::now());
        let store: SharedStore = Arc::new(MemoryStore::new());
        let source: SharedSource = Arc::new(MockSource::new(catalog.clone()));
        let mut app = App::new(InventoryMachine::new(store, source, catalog), UiConfig::default());
        app.request_load();
        assert_eq!(app.state().load_phase, LoadPhase::Error);
        assert!(matches!(app.body_view(), BodyView::Error(_)));
    }

    #[test]
    fn edit_through_dialog_saves_and_closes() {
        let mut app = loaded_app();
        assert_eq!(app.body_view(), BodyView::Table);
        app.open_selected();
        assert_eq!(app.focus(), Focus::Detail);
        let id = app.detail().item_id().unwrap().to_string();
        assert_eq!(app.detail_item().map(|it| it.id.clone()), Some(id.clone()));

        for _ in 0..10 {
            app.dispatch_detail(DetailIntent::Backspace);
        }
        app.dispatch_detail(DetailIntent::Input('7'));
        app.dispatch_detail(DetailIntent::NextField);
        for _ in 0..10 {
            app.dispatch_detail(DetailIntent::Backspace);
        }
        app.dispatch_detail(DetailIntent::Input('2'));
        app.submit_detail();

        let item = app.state().item(&id).unwrap();
        assert_eq!(item.price, 7.0);
        assert_eq!(item.stock, 2);
        assert_eq!(app.focus(), Focus::Table);
        assert!(!app.detail().is_visible());
        assert_eq!(app.state().selected_id, None);
        assert_eq!(app.state().last_message, Some(Notice::Saved));
    }

    #[test]
    fn invalid_dialog_input_keeps_dialog_open() {
        let mut app = loaded_app();
        app.open_selected();
        for _ in 0..10 {
            app.dispatch_detail(DetailIntent::Backspace);
        }
        app.submit_detail();
        assert!(app.detail().is_visible());
        assert!(app.detail().visible_errors().price.is_some());
        assert!(!app.state().can_undo());
    }

    #[test]
    fn toast_expires_after_configured_time() {
        let mut app = loaded_app();
        app.open_selected();
        app.submit_detail();
        let start = Instant::now();
        app.on_tick_at(start);
        assert_eq!(app.state().last_message, Some(Notice::Saved));
        app.on_tick_at(start + Duration::from_millis(2100));
        assert_eq!(app.state().last_message, Some(Notice::Saved));
        app.on_tick_at(start + Duration::from_millis(2200));
        assert_eq!(app.state().last_message, None);
    }

    #[test]
    fn reset_clears_filters_and_dialog() {
        let mut app = loaded_app();
        app.toggle_low_stock();
        app.search_push('z');
        app.open_selected();
        app.reset();
        assert!(!app.query().low_stock_only);
        assert_eq!(app.search_input(), "");
        assert!(!app.detail().is_visible());
        assert_eq!(app.state().last_message, Some(Notice::Reset));
        assert_eq!(app.state().items.len(), 12);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = loaded_app();
        app.move_cursor(-5);
        assert_eq!(app.cursor(), 0);
        app.move_cursor(100);
        assert_eq!(app.cursor(), 11);
    }

    #[test]
    fn unmatched_search_shows_no_matches() {
        let mut app = loaded_app();
        app.search_push('#');
        app.on_tick_at(Instant::now() + Duration::from_secs(1));
        assert_eq!(app.body_view(), BodyView::NoMatches);
    }
}
