//! Per-pipeline cache holders.
//!
//! Each holder owns the last successfully fetched collection plus a loading
//! flag. Fetches are ticketed: only the most recently issued ticket may write
//! data or clear the loading flag, so a slow superseded request can never
//! overwrite a newer result.

use std::{sync::Arc, time::SystemTime};

use super::entities::{GameMap, Item, Trader};

pub type ItemStore = Collection<Item>;
pub type TraderStore = Collection<Trader>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionState {
    Loading,
    Ready,
    /// Loading finished and there is nothing to show: no fetch ever
    /// succeeded, or the one that did returned an empty collection.
    Failed,
}

#[derive(Clone, Debug)]
pub struct Collection<T> {
    data: Option<Arc<[T]>>,
    loading: bool,
    issued: u64,
    last_error: Option<String>,
    fetched_at: Option<SystemTime>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// Holders start in the loading state because the application triggers
    /// every pipeline at startup.
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            issued: 0,
            last_error: None,
            fetched_at: None,
        }
    }

    pub fn collection(&self) -> Option<Arc<[T]>> {
        self.data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<SystemTime> {
        self.fetched_at
    }

    /// True while there is no data, or the cached collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().map_or(true, |data| data.is_empty())
    }

    pub fn state(&self) -> CollectionState {
        match (self.loading, self.is_empty()) {
            (true, _) => CollectionState::Loading,
            (false, false) => CollectionState::Ready,
            (false, true) => CollectionState::Failed,
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        FetchTicket(self.issued)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Stores `data` if `ticket` is still the latest. Returns whether it was applied.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, data: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.data = Some(data.into());
        self.fetched_at = Some(SystemTime::now());
        self.last_error = None;
        self.loading = false;
        true
    }

    /// Records a failure without touching previously cached data.
    pub fn fail_fetch(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.last_error = Some(message.into());
        self.loading = false;
        true
    }
}

/// Static map catalog holder. Never empty and never loading.
#[derive(Clone, Copy, Debug)]
pub struct MapStore {
    maps: &'static [GameMap],
}

impl MapStore {
    pub fn new(maps: &'static [GameMap]) -> Self {
        Self { maps }
    }

    pub fn maps(&self) -> &'static [GameMap] {
        self.maps
    }

    pub fn replace(&mut self, maps: &'static [GameMap]) {
        self.maps = maps;
    }
}

/// Something that can lend out mutable access to a holder for a moment.
///
/// Implemented for plain `&mut` references and, in the app layer, for the
/// reactive signals the UI observes.
pub trait StateHolder<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateHolder<T> for &mut T {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(self)
    }
}
