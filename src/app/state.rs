use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use log::{debug, error, info, warn};
use strum::IntoEnumIterator;

use crate::{
    app::chart::{self, ChartGeometry},
    error::FetchError,
    models::{MoverKind, Movers, PricePoint, SearchResult, price_point::closes},
};

/// Generation number handed to each fetch. An outcome is applied only while the
/// state still expects its ticket.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchKind {
    Movers,
    Search(String),
    Prices(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub kind: FetchKind,
}

#[derive(Debug)]
pub enum FetchPayload {
    Movers(Result<Movers, FetchError>),
    Search(Result<Vec<SearchResult>, FetchError>),
    Prices(Result<Vec<PricePoint>, FetchError>),
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: Ticket,
    pub payload: FetchPayload,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    Fetch(FetchRequest),
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntrySource {
    SearchResult,
    Mover(MoverKind),
}

/// One row of the search screen that can be selected and opened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectableEntry {
    pub symbol: String,
    pub source: EntrySource,
    /// Position within its own list.
    pub position: usize,
}

#[derive(Debug, Default, Getters)]
pub struct SearchView {
    keyword: String,
    results: Vec<SearchResult>,
    #[getter(skip)]
    pending: Option<Ticket>,
}

impl SearchView {
    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug)]
pub enum DetailStatus {
    Loading,
    NotFound,
    Loaded {
        points: Vec<PricePoint>,
        chart: Option<ChartGeometry>,
    },
}

#[derive(Debug, Getters)]
pub struct DetailView {
    symbol: String,
    status: DetailStatus,
    #[getter(skip)]
    ticket: Ticket,
}

impl DetailView {
    /// Newest price point, shown as the latest price information.
    pub fn latest(&self) -> Option<&PricePoint> {
        match &self.status {
            DetailStatus::Loaded { points, .. } => points.first(),
            _ => None,
        }
    }
}

#[derive(Debug, Getters)]
pub struct AppState {
    search: SearchView,
    movers: Option<Movers>,
    detail: Option<DetailView>,
    selected: Option<usize>,
    movers_shown: usize,
    #[getter(skip)]
    movers_ticket: Option<Ticket>,
    #[getter(skip)]
    next_ticket: u64,
}

impl AppState {
    pub fn new(movers_shown: usize) -> Self {
        Self {
            search: SearchView::default(),
            movers: None,
            detail: None,
            selected: None,
            movers_shown,
            movers_ticket: None,
            next_ticket: 0,
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Requests issued when the application starts. Starting on a detail
    /// screen defers the movers until the search screen is entered.
    pub fn start(&mut self, initial_symbol: Option<&str>) -> Vec<FetchRequest> {
        match initial_symbol {
            Some(symbol) => vec![self.open_detail(symbol)],
            None => vec![self.load_movers()],
        }
    }

    pub fn load_movers(&mut self) -> FetchRequest {
        let ticket = self.issue_ticket();
        self.movers_ticket = Some(ticket);
        FetchRequest {
            ticket,
            kind: FetchKind::Movers,
        }
    }

    /// Starts a search for the current keyword. An empty keyword does nothing.
    /// A newer search supersedes any search still in flight.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        if self.search.keyword.is_empty() {
            return None;
        }

        let ticket = self.issue_ticket();
        self.search.pending = Some(ticket);
        Some(FetchRequest {
            ticket,
            kind: FetchKind::Search(self.search.keyword.clone()),
        })
    }

    /// Replaces the search screen with the detail screen for `symbol`. The
    /// search screen's data is dropped and its pending fetches become stale.
    pub fn open_detail(&mut self, symbol: &str) -> FetchRequest {
        info!("Opening detail screen for {}", symbol);
        self.search = SearchView::default();
        self.movers = None;
        self.movers_ticket = None;
        self.selected = None;

        let ticket = self.issue_ticket();
        self.detail = Some(DetailView {
            symbol: symbol.to_string(),
            status: DetailStatus::Loading,
            ticket,
        });
        FetchRequest {
            ticket,
            kind: FetchKind::Prices(symbol.to_string()),
        }
    }

    /// Leaves the detail screen for a fresh search screen. Its pending fetch,
    /// if any, becomes stale. Returns the movers request of the new screen.
    pub fn back(&mut self) -> Option<FetchRequest> {
        let detail = self.detail.take()?;
        info!("Leaving detail screen for {}", detail.symbol);
        self.search = SearchView::default();
        self.selected = None;
        Some(self.load_movers())
    }

    #[cfg(test)]
    pub fn set_keyword(&mut self, keyword: &str) {
        self.search.keyword = keyword.to_string();
        self.selected = None;
    }

    /// Applies a fetch outcome. Returns `false` when the outcome was stale and
    /// got discarded.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome { ticket, payload } = outcome;

        match payload {
            FetchPayload::Movers(result) => {
                if self.movers_ticket != Some(ticket) {
                    debug!("Discarding stale movers response {:?}", ticket);
                    return false;
                }
                self.movers_ticket = None;
                self.movers = match result {
                    Ok(movers) => Some(movers),
                    Err(err) => {
                        error!("Failed to fetch movers: {}", err);
                        None
                    }
                };
            }
            FetchPayload::Search(result) => {
                if self.search.pending != Some(ticket) {
                    debug!("Discarding stale search response {:?}", ticket);
                    return false;
                }
                self.search.pending = None;
                self.search.results = match result {
                    Ok(results) => results,
                    Err(err) => {
                        error!("Search failed: {}", err);
                        Vec::new()
                    }
                };
                self.selected = None;
            }
            FetchPayload::Prices(result) => {
                let Some(detail) = self.detail.as_mut().filter(|d| d.ticket == ticket) else {
                    debug!("Discarding stale price history response {:?}", ticket);
                    return false;
                };
                detail.status = match result {
                    Ok(points) if points.is_empty() => DetailStatus::NotFound,
                    Ok(points) => {
                        let chart = chart::map_series(&closes(&points))
                            .inspect_err(|err| {
                                warn!("Cannot chart {}: {}", detail.symbol, err)
                            })
                            .ok();
                        DetailStatus::Loaded { points, chart }
                    }
                    Err(err) => {
                        error!("Failed to fetch stock data for {}: {}", detail.symbol, err);
                        DetailStatus::NotFound
                    }
                };
            }
        }

        true
    }

    /// Rows of the search screen in display order: search results, then the
    /// shown gainers, then the shown losers.
    pub fn selectable_entries(&self) -> Vec<SelectableEntry> {
        let results = self
            .search
            .results
            .iter()
            .enumerate()
            .map(|(position, r)| SelectableEntry {
                symbol: r.symbol().clone(),
                source: EntrySource::SearchResult,
                position,
            });

        let shown = self.movers_shown;
        let movers = self.movers.iter().flat_map(move |movers| {
            MoverKind::iter().flat_map(move |kind| {
                movers
                    .top(kind, shown)
                    .iter()
                    .enumerate()
                    .map(move |(position, m)| SelectableEntry {
                        symbol: m.symbol().clone(),
                        source: EntrySource::Mover(kind),
                        position,
                    })
            })
        });

        results.chain(movers).collect()
    }

    pub fn selected_entry(&self) -> Option<SelectableEntry> {
        self.selected
            .and_then(|i| self.selectable_entries().into_iter().nth(i))
    }

    fn select_next(&mut self) {
        let len = self.selectable_entries().len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn select_previous(&mut self) {
        let len = self.selectable_entries().len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 || i >= len {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Effect::Quit];
        }

        if self.detail.is_some() {
            return self.handle_detail_key(key);
        }

        match key.code {
            KeyCode::Enter => match self.selected_entry() {
                Some(entry) => vec![Effect::Fetch(self.open_detail(&entry.symbol))],
                None => self.submit_search().map(Effect::Fetch).into_iter().collect(),
            },
            KeyCode::Esc => {
                if self.selected.is_some() {
                    self.selected = None;
                    Vec::new()
                } else {
                    vec![Effect::Quit]
                }
            }
            KeyCode::Down => {
                self.select_next();
                Vec::new()
            }
            KeyCode::Up => {
                self.select_previous();
                Vec::new()
            }
            KeyCode::Backspace => {
                self.search.keyword.pop();
                self.selected = None;
                Vec::new()
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.keyword.push(c);
                self.selected = None;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
                self.back().map(Effect::Fetch).into_iter().collect()
            }
            KeyCode::Char('q') => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }
}
