use thiserror::Error;

use crate::{
    consts::consts::RecordId,
    model::{
        event::{CloseReason, DirectoryEvent, Direction},
        person::Person,
    },
    source::{FetchError, PeopleSource},
};

use super::{
    cursor::{self, NavigationError, Neighbors},
    events::EventBus,
    filter::apply_filter,
    normalize::{normalize, NormalizeError},
    overlay::{DetailOverlay, InputBindings, OverlayInput},
    store::DirectoryStore,
};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Owns the directory state for one session: the store, the current query,
/// the detail overlay and the event subscribers. A presentation layer holds
/// one of these and only reads from it outside the methods below.
#[derive(Debug, Default)]
pub struct Directory {
    store: DirectoryStore,
    overlay: DetailOverlay,
    events: EventBus,
    query: String,
    empty_state: bool,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> flume::Receiver<DirectoryEvent> {
        self.events.subscribe()
    }

    /// Fetches, normalizes and loads the people list. On failure nothing is
    /// loaded and the previous state (normally empty) is kept.
    pub fn load_from(&mut self, source: &dyn PeopleSource) -> DirectoryResult<usize> {
        log::info!("Fetching people from {}", source.describe());

        let response = source.fetch().map_err(|err| {
            log::error!("Request failed: {}", err);
            err
        })?;

        let people = normalize(&response.results)?;

        Ok(self.load(people))
    }

    pub fn load(&mut self, people: Vec<Person>) -> usize {
        let count = people.len();

        self.close(CloseReason::Reloaded);
        self.store.load(people);
        self.query.clear();

        log::info!("Loaded {} people", count);
        self.events.publish(DirectoryEvent::FullListReady { count });
        self.update_empty_state(count == 0);

        count
    }

    /// Re-derives the active set from `query`. Closes the overlay when its
    /// record no longer matches.
    pub fn search(&mut self, query: &str) {
        let outcome = apply_filter(self.store.all_records(), query);

        log::debug!(
            "Filter {:?} matched {} of {}",
            query,
            outcome.matches.len(),
            self.store.all_records().len()
        );

        let is_empty = outcome.is_empty();
        let visible = outcome.visible();
        let hidden = outcome.hidden();

        self.query = query.to_string();
        self.store.set_active(outcome.matches);

        self.events.publish(DirectoryEvent::ActiveSubsetChanged {
            query: self.query.clone(),
            visible,
            hidden,
        });

        self.update_empty_state(is_empty);

        if let Some(current) = self.overlay.current() {
            if !self.store.is_active(current) {
                self.close(CloseReason::Filtered);
            }
        }
    }

    /// Leaves the overlay untouched when `id` cannot be shown.
    pub fn open(&mut self, id: RecordId) -> DirectoryResult<&Person> {
        if self.store.get(id).is_none() {
            return Err(NavigationError::NotInActiveSet(id).into());
        }

        let change = self.overlay.open(self.store.active_records(), id)?;
        self.events.publish(DirectoryEvent::DetailChanged(change));

        self.store
            .get(id)
            .ok_or(DirectoryError::Navigation(NavigationError::NotInActiveSet(id)))
    }

    /// `Ok(None)` when the overlay is closed.
    pub fn advance(&mut self, direction: Direction) -> DirectoryResult<Option<&Person>> {
        let Some(change) = self
            .overlay
            .advance(self.store.active_records(), direction)?
        else {
            return Ok(None);
        };

        self.events.publish(DirectoryEvent::DetailChanged(change));

        Ok(self.current())
    }

    pub fn close(&mut self, reason: CloseReason) -> bool {
        match self.overlay.close(reason) {
            Some(change) => {
                self.events.publish(DirectoryEvent::DetailChanged(change));
                true
            }
            None => false,
        }
    }

    /// Publishes only when the state flips.
    fn update_empty_state(&mut self, is_empty: bool) {
        if is_empty == self.empty_state {
            return;
        }

        self.empty_state = is_empty;
        self.events.publish(match is_empty {
            true => DirectoryEvent::EmptyStateShown,
            false => DirectoryEvent::EmptyStateCleared,
        });
    }

    /// Routes a key press to the open overlay. Returns whether it was handled.
    pub fn handle_key(&mut self, key: &str) -> DirectoryResult<bool> {
        match self.overlay.bindings().dispatch(key) {
            Some(OverlayInput::Navigate(direction)) => {
                self.advance(direction)?;
                Ok(true)
            }
            Some(OverlayInput::Close(reason)) => Ok(self.close(reason)),
            None => Ok(false),
        }
    }

    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        self.overlay.bindings_mut()
    }

    pub fn current(&self) -> Option<&Person> {
        self.overlay.current().and_then(|id| self.store.get(id))
    }

    /// Neighbors of the record shown in the overlay, if it is open.
    pub fn current_neighbors(&self) -> DirectoryResult<Option<Neighbors<'_>>> {
        let Some(id) = self.overlay.current() else {
            return Ok(None);
        };

        let active = self.store.active_records();
        let index = cursor::locate(active, id)?;

        Ok(Some(cursor::neighbors(active, index)?))
    }

    pub fn navigation_enabled(&self) -> bool {
        cursor::navigation_enabled(self.store.active_records())
    }

    pub fn all_records(&self) -> &[Person] {
        self.store.all_records()
    }

    pub fn active_records(&self) -> &[Person] {
        self.store.active_records()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty_state(&self) -> bool {
        self.empty_state
    }

    pub fn is_detail_open(&self) -> bool {
        self.overlay.is_open()
    }
}
