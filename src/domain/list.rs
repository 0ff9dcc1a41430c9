//! Pagination and search state of the clients list.
//!
//! The list is driven by [`ListEvent`]s through [`reduce`]. The reducer never
//! performs I/O; fetching is done by the caller between a
//! [`ListEvent::LoadStarted`] and the matching [`ListEvent::PageLoaded`] or
//! [`ListEvent::LoadFailed`].
//!
//! Every request carries the generation it was issued under. A query reset
//! bumps the generation and abandons the outstanding request, so a response
//! that arrives after the reset is dropped instead of being appended to the
//! new query's list.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::types::PageNumber;

/// One page of clients as reported by the data source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientPage {
    pub clients: Vec<Client>,
    pub total_count: usize,
    /// Whether the data source reported a further page.
    pub has_next: bool,
}

/// A page request issued by the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: PageNumber,
    pub query: String,
    pub generation: u64,
}

/// Initialization phase of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created but not mounted yet; query changes do not reset.
    #[default]
    Uninitialized,
    Ready,
}

/// Coarse status derived from the list state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    Idle,
    Loading,
    /// No more pages to request.
    Exhausted,
    /// The data source reported zero matching clients.
    Empty,
}

#[derive(Clone, Debug)]
pub enum ListEvent {
    Mounted,
    QueryChanged(String),
    LoadStarted(PageRequest),
    PageLoaded {
        request: PageRequest,
        page: ClientPage,
    },
    LoadFailed {
        request: PageRequest,
        reason: String,
    },
    PanelOpened,
    PanelClosed,
}

#[derive(Clone, Debug)]
pub struct ListState {
    phase: Phase,
    items: Vec<Client>,
    page: PageNumber,
    has_more: bool,
    total_count: Option<usize>,
    query: String,
    in_flight: Option<PageRequest>,
    generation: u64,
    panel_open: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            phase: Phase::Uninitialized,
            items: Vec::new(),
            page: PageNumber::FIRST,
            has_more: true,
            total_count: None,
            query: String::new(),
            in_flight: None,
            generation: 0,
            panel_open: false,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn items(&self) -> &[Client] {
        &self.items
    }

    /// Next page to request.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> ListStatus {
        if self.total_count == Some(0) {
            ListStatus::Empty
        } else if self.is_loading() {
            ListStatus::Loading
        } else if !self.has_more {
            ListStatus::Exhausted
        } else {
            ListStatus::Idle
        }
    }

    /// The request a `loadNextPage` call would issue now, if any.
    ///
    /// Returns `None` before mount, while a request is in flight, and once the
    /// data source reported no further page.
    pub fn next_request(&self) -> Option<PageRequest> {
        if self.phase != Phase::Ready || !self.has_more || self.is_loading() {
            return None;
        }
        Some(PageRequest {
            page: self.page,
            query: self.query.clone(),
            generation: self.generation,
        })
    }

    fn is_outstanding(&self, request: &PageRequest) -> bool {
        self.in_flight.as_ref() == Some(request)
    }

    fn reset(&mut self) {
        self.items.clear();
        self.page = PageNumber::FIRST;
        self.has_more = true;
        self.total_count = None;
        self.in_flight = None;
        self.generation += 1;
    }
}

/// Applies a single event to the list state.
pub fn reduce(mut state: ListState, event: ListEvent) -> ListState {
    match event {
        ListEvent::Mounted => {
            state.phase = Phase::Ready;
        }
        ListEvent::QueryChanged(query) => {
            if query == state.query {
                return state;
            }
            state.query = query;
            if state.phase == Phase::Ready {
                state.reset();
            }
        }
        ListEvent::LoadStarted(request) => {
            if state.next_request().as_ref() == Some(&request) {
                state.in_flight = Some(request);
            }
        }
        ListEvent::PageLoaded { request, page } => {
            if !state.is_outstanding(&request) {
                log::debug!(
                    "Dropping stale page {} for query {:?} (generation {})",
                    request.page,
                    request.query,
                    request.generation
                );
                return state;
            }
            state.in_flight = None;
            state.items.extend(page.clients);
            state.total_count = Some(page.total_count);
            if !page.has_next {
                state.has_more = false;
            }
            state.page = state.page.next();
        }
        ListEvent::LoadFailed { request, reason } => {
            if !state.is_outstanding(&request) {
                log::debug!("Dropping stale failure for page {}: {reason}", request.page);
                return state;
            }
            // The failed page is skipped, not retried.
            state.in_flight = None;
            state.page = state.page.next();
        }
        ListEvent::PanelOpened => {
            state.panel_open = true;
        }
        ListEvent::PanelClosed => {
            state.panel_open = false;
        }
    }
    state
}
