//! In-memory registry of mounted list views.
//!
//! Every visit of the clients page mounts a fresh [`ListState`] under a random
//! [`ViewId`]. Follow-up requests from that page (scroll, search, panel) address
//! the same state. The registry keeps at most `capacity` views and evicts the
//! oldest mount first.

use std::collections::{HashMap, VecDeque};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::list::{ListEvent, ListState, PageRequest, reduce};
use crate::domain::types::TypeConstraintError;

/// Identifier of one mounted list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(Uuid);

impl ViewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ViewId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ViewId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

#[derive(Default)]
struct Views {
    states: HashMap<ViewId, ListState>,
    order: VecDeque<ViewId>,
}

pub struct ViewRegistry {
    views: Mutex<Views>,
    capacity: usize,
}

impl ViewRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            views: Mutex::new(Views::default()),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Views> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a new view with the given initial query and marks it mounted.
    ///
    /// The query is applied before the mount so it never triggers a reset.
    pub fn mount(&self, query: impl Into<String>) -> (ViewId, ListState) {
        let id = ViewId::new();
        let state = reduce(ListState::new(), ListEvent::QueryChanged(query.into()));
        let state = reduce(state, ListEvent::Mounted);

        let mut views = self.lock();
        while views.order.len() >= self.capacity {
            match views.order.pop_front() {
                Some(evicted) => {
                    views.states.remove(&evicted);
                    log::debug!("Evicted list view {evicted}");
                }
                None => break,
            }
        }
        views.order.push_back(id);
        views.states.insert(id, state.clone());
        (id, state)
    }

    /// Snapshot of the view state.
    pub fn get(&self, id: ViewId) -> Option<ListState> {
        self.lock().states.get(&id).cloned()
    }

    /// Applies an event to the view and returns the new state.
    pub fn apply(&self, id: ViewId, event: ListEvent) -> Option<ListState> {
        let mut views = self.lock();
        let slot = views.states.get_mut(&id)?;
        let state = std::mem::take(slot);
        *slot = reduce(state, event);
        Some(slot.clone())
    }

    /// Marks the next page as loading and returns its request.
    ///
    /// The outer `None` means the view is unknown; the inner `None` means the
    /// list does not want a page right now (loading, exhausted).
    pub fn begin_load(&self, id: ViewId) -> Option<Option<PageRequest>> {
        let mut views = self.lock();
        let slot = views.states.get_mut(&id)?;
        let request = slot.next_request();
        if let Some(request) = &request {
            let state = std::mem::take(slot);
            *slot = reduce(state, ListEvent::LoadStarted(request.clone()));
        }
        Some(request)
    }

    pub fn len(&self) -> usize {
        self.lock().states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
