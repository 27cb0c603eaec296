use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::RecordId,
    model::{
        event::{CloseReason, DetailChange, Direction},
        person::Person,
    },
};

use super::cursor::{locate, neighbors, NavigationError};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open { current: RecordId },
}

/// What an input means to an open overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayInput {
    Navigate(Direction),
    Close(CloseReason),
}

/// Key bindings that are live only while the overlay is open.
///
/// Subscribing and unsubscribing are idempotent, so re-rendering an open
/// overlay never stacks a second set of handlers.
#[derive(Debug)]
pub struct InputBindings {
    keymap: HashMap<String, OverlayInput>,
    subscribed: bool,
}

impl Default for InputBindings {
    fn default() -> Self {
        let keymap = [
            ("ArrowRight", OverlayInput::Navigate(Direction::Next)),
            ("ArrowLeft", OverlayInput::Navigate(Direction::Previous)),
            ("Escape", OverlayInput::Close(CloseReason::CancelKey)),
        ]
        .into_iter()
        .map(|(key, input)| (key.to_string(), input))
        .collect();

        Self {
            keymap,
            subscribed: false,
        }
    }
}

impl InputBindings {
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Extra keys on top of the defaults, e.g. letter shortcuts in a terminal.
    pub fn alias(&mut self, key: &str, input: OverlayInput) {
        self.keymap.insert(key.to_string(), input);
    }

    pub fn dispatch(&self, key: &str) -> Option<OverlayInput> {
        if !self.subscribed {
            return None;
        }

        self.keymap.get(key).copied()
    }
}

/// `Closed -> Open(record) -> Open(neighbor)* -> Closed`
#[derive(Debug, Default)]
pub struct DetailOverlay {
    state: OverlayState,
    bindings: InputBindings,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn current(&self) -> Option<RecordId> {
        match self.state {
            OverlayState::Open { current } => Some(current),
            OverlayState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }

    /// Opening an already open overlay just swaps the record.
    pub fn open(&mut self, active: &[Person], id: RecordId) -> Result<DetailChange, NavigationError> {
        if active.is_empty() {
            return Err(NavigationError::EmptyActiveSet);
        }

        locate(active, id)?;

        self.state = OverlayState::Open { current: id };
        self.bindings.subscribe();

        Ok(DetailChange::Opened(id))
    }

    /// Moves to a neighbor of the current record, recomputed against `active`.
    /// Returns `Ok(None)` when the overlay is closed.
    pub fn advance(
        &mut self,
        active: &[Person],
        direction: Direction,
    ) -> Result<Option<DetailChange>, NavigationError> {
        let Some(from) = self.current() else {
            return Ok(None);
        };

        let index = locate(active, from)?;
        let around = neighbors(active, index)?;

        let to = match direction {
            Direction::Previous => around.previous.id,
            Direction::Next => around.next.id,
        };

        self.state = OverlayState::Open { current: to };

        Ok(Some(DetailChange::Advanced {
            from,
            to,
            direction,
        }))
    }

    /// Returns `None` when there was nothing to close.
    pub fn close(&mut self, reason: CloseReason) -> Option<DetailChange> {
        if !self.is_open() {
            return None;
        }

        self.state = OverlayState::Closed;
        self.bindings.unsubscribe();

        Some(DetailChange::Closed(reason))
    }
}
