//! Application state and event loop.
//!
//! The app owns one [`NewsListController`] plus the detail-view state, and
//! runs a `tokio::select!` loop over terminal events and an internal message
//! channel. Fetches run on spawned tasks and report back as [`AppMessage`]s,
//! so the draw loop never blocks on the network.

use std::io::Stdout;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::NewsApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::locale::{is_displayable, Locale};
use crate::models::{ListQuery, NewsRecord};
use crate::news_list::{CompletedLoad, ListSource, NewsListController};
use crate::ui;

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// Messages from spawned fetch tasks back into the event loop.
#[derive(Debug)]
pub enum AppMessage {
    ListLoaded(CompletedLoad),
    DetailLoaded {
        id: i64,
        result: Result<NewsRecord, ApiError>,
    },
}

/// State of the article detail view.
#[derive(Debug)]
pub struct DetailState {
    pub id: i64,
    pub loading: bool,
    pub record: Option<NewsRecord>,
    /// The backend reported the article missing or withdrawn.
    pub not_found: bool,
    pub error: Option<String>,
}

/// Top-level application state.
pub struct App {
    client: NewsApiClient,
    pub locale: Locale,
    pub list: NewsListController,
    pub screen: Screen,
    /// Index into [`App::visible_items`], not into the raw item list.
    pub selected: usize,
    pub detail: Option<DetailState>,
    pub scroll: u16,
    pub should_quit: bool,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(config: &ApiConfig) -> Self {
        let client = NewsApiClient::new(config);
        let list = NewsListController::new(
            client.clone(),
            ListSource::Public,
            ListQuery::new().with_limit(config.page_size),
        );
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            locale: config.locale,
            list,
            screen: Screen::List,
            selected: 0,
            detail: None,
            scroll: 0,
            should_quit: false,
            tx,
            rx: Some(rx),
        }
    }

    /// Records that pass the display gate, in list order. Selection and the
    /// list widget both operate on this view of the items.
    pub fn visible_items(&self) -> Vec<&NewsRecord> {
        self.list.items().iter().filter(|r| is_displayable(r)).collect()
    }

    pub fn selected_record(&self) -> Option<&NewsRecord> {
        self.visible_items().get(self.selected).copied()
    }

    /// Issue a list load and run it on a spawned task.
    pub fn spawn_list_load(&mut self, query: Option<ListQuery>) {
        let request = self.list.begin_load(query);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let completed = request.run().await;
            let _ = tx.send(AppMessage::ListLoaded(completed));
        });
    }

    /// Fetch the next page, appending to the current items.
    fn load_more(&mut self) {
        if self.list.is_loading() {
            return;
        }
        let Some(pagination) = self.list.pagination() else {
            return;
        };
        if !pagination.has_next {
            return;
        }
        let next = self
            .list
            .query()
            .merge(&ListQuery::new().with_page(pagination.current + 1));
        self.spawn_list_load(Some(next));
    }

    fn refresh_list(&mut self) {
        self.list.clear_error();
        self.spawn_list_load(None);
    }

    /// Open the detail view for an article and start its fetch. Also the
    /// deep-link entry point used by the binary.
    pub fn open_article(&mut self, id: i64) {
        self.screen = Screen::Detail;
        self.scroll = 0;
        self.detail = Some(DetailState {
            id,
            loading: true,
            record: None,
            not_found: false,
            error: None,
        });
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.get_news_detail(id).await;
            let _ = tx.send(AppMessage::DetailLoaded { id, result });
        });
    }

    fn back_to_list(&mut self) {
        self.screen = Screen::List;
        self.detail = None;
        self.scroll = 0;
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ListLoaded(completed) => {
                // Failures land in the controller's error field; the list
                // view renders them, so the Err here carries nothing new.
                let _ = self.list.apply(completed);
                self.clamp_selection();
            }
            AppMessage::DetailLoaded { id, result } => {
                let Some(detail) = self.detail.as_mut() else {
                    return;
                };
                if detail.id != id {
                    debug!(id, current = detail.id, "discarding stale detail load");
                    return;
                }
                detail.loading = false;
                match result {
                    Ok(record) => detail.record = Some(record),
                    Err(ApiError::HttpStatus { status: 404, .. })
                    | Err(ApiError::Application { .. }) => detail.not_found = true,
                    Err(err) => detail.error = Some(err.user_message()),
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.screen {
            Screen::List => self.handle_list_key(key.code),
            Screen::Detail => self.handle_detail_key(key.code),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.visible_items().len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(record) = self.selected_record() {
                    let id = record.id;
                    self.open_article(id);
                }
            }
            KeyCode::Char('m') => self.load_more(),
            KeyCode::Char('r') => self.refresh_list(),
            KeyCode::Char('l') => self.locale = self.locale.next(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.back_to_list(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Char('r') => {
                if let Some(detail) = &self.detail {
                    let id = detail.id;
                    self.open_article(id);
                }
            }
            KeyCode::Char('l') => self.locale = self.locale.next(),
            _ => {}
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_items().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    /// Drive the UI until quit: draw, then wait on either a terminal event
    /// or a fetch completion.
    pub async fn run(
        mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut rx = self.rx.take().expect("run called twice");
        let mut events = EventStream::new();

        self.spawn_list_load(None);

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, &self))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => self.handle_key(key),
                        Some(Ok(_)) => {}
                        Some(Err(err)) => return Err(err.into()),
                        None => break,
                    }
                }
                Some(message) = rx.recv() => {
                    self.handle_message(message);
                    // Drain whatever else already arrived before redrawing.
                    while let Ok(message) = rx.try_recv() {
                        self.handle_message(message);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewsStatus, PaginationMeta};
    use crate::api::NewsListData;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn record(id: i64, displayable: bool) -> NewsRecord {
        NewsRecord {
            id,
            title: format!("标题 {}", id),
            title_en: displayable.then(|| format!("Title {}", id)),
            title_ko: displayable.then(|| format!("제목 {}", id)),
            content: None,
            translation_en: None,
            translation_ko: None,
            category: None,
            iso_date: "2026-08-20T09:00:00Z".to_string(),
            status: NewsStatus::Publish,
        }
    }

    fn app_with_items(records: Vec<NewsRecord>) -> App {
        let mut app = App::new(&ApiConfig::new());
        let request = app.list.begin_load(None);
        let completed = request.complete_with(Ok(NewsListData {
            news: records,
            pagination: PaginationMeta {
                current: 1,
                total_count: 3,
                has_next: false,
                limit: Some(20),
            },
        }));
        app.handle_message(AppMessage::ListLoaded(completed));
        app
    }

    #[tokio::test]
    async fn selection_moves_within_visible_items_only() {
        let mut app = app_with_items(vec![
            record(1, true),
            record(2, false),
            record(3, true),
        ]);
        assert_eq!(app.visible_items().len(), 2);

        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.selected, 1);
        // Already at the last visible item.
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.selected, 1);
        assert_eq!(app.selected_record().unwrap().id, 3);

        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn enter_opens_the_selected_article() {
        let mut app = app_with_items(vec![record(7, true)]);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(app.detail.as_ref().unwrap().id, 7);
        assert!(app.detail.as_ref().unwrap().loading);
    }

    #[tokio::test]
    async fn esc_returns_to_the_list() {
        let mut app = app_with_items(vec![record(7, true)]);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::List);
        assert!(app.detail.is_none());
    }

    #[tokio::test]
    async fn locale_key_cycles_languages() {
        let mut app = app_with_items(vec![]);
        assert_eq!(app.locale, Locale::En);
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.locale, Locale::ZhCn);
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.locale, Locale::Ko);
    }

    #[tokio::test]
    async fn quit_key_sets_the_flag() {
        let mut app = app_with_items(vec![]);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn stale_detail_result_is_ignored() {
        let mut app = app_with_items(vec![record(1, true), record(2, true)]);
        app.handle_key(key(KeyCode::Enter));
        let first_id = app.detail.as_ref().unwrap().id;
        // User backs out and opens a different article before the first
        // fetch lands.
        app.handle_key(key(KeyCode::Esc));
        app.selected = 1;
        app.handle_key(key(KeyCode::Enter));

        app.handle_message(AppMessage::DetailLoaded {
            id: first_id,
            result: Ok(record(first_id, true)),
        });
        let detail = app.detail.as_ref().unwrap();
        assert!(detail.loading);
        assert!(detail.record.is_none());
    }

    #[tokio::test]
    async fn missing_article_sets_not_found() {
        let mut app = app_with_items(vec![record(1, true)]);
        app.handle_key(key(KeyCode::Enter));
        app.handle_message(AppMessage::DetailLoaded {
            id: 1,
            result: Err(ApiError::HttpStatus {
                status: 404,
                message: "News not found".to_string(),
            }),
        });
        let detail = app.detail.as_ref().unwrap();
        assert!(detail.not_found);
        assert!(!detail.loading);
    }

    #[tokio::test]
    async fn selection_is_clamped_when_the_list_shrinks() {
        let mut app = app_with_items(vec![
            record(1, true),
            record(2, true),
            record(3, true),
        ]);
        app.selected = 2;

        let request = app.list.begin_load(None);
        let completed = request.complete_with(Ok(NewsListData {
            news: vec![record(9, true)],
            pagination: PaginationMeta {
                current: 1,
                total_count: 1,
                has_next: false,
                limit: Some(20),
            },
        }));
        app.handle_message(AppMessage::ListLoaded(completed));
        assert_eq!(app.selected, 0);
    }
}
