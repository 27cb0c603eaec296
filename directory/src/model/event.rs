use serde::{Deserialize, Serialize};
use strum::Display;

use crate::consts::consts::RecordId;

/// Notifications sent to every subscriber of a `Directory`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DirectoryEvent {
    /// The full list has been loaded and the active set reset to it
    FullListReady { count: usize },
    /// Carries the visibility of every record, in fetch order
    ActiveSubsetChanged {
        query: String,
        visible: Vec<RecordId>,
        hidden: Vec<RecordId>,
    },
    /// The active set became empty, show a no-results indicator
    EmptyStateShown,
    /// The active set is non-empty again, remove the indicator
    EmptyStateCleared,
    DetailChanged(DetailChange),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DetailChange {
    Opened(RecordId),
    Advanced {
        from: RecordId,
        to: RecordId,
        direction: Direction,
    },
    Closed(CloseReason),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum CloseReason {
    /// The explicit close control of the overlay
    CloseControl,
    /// A click landing outside the overlay content
    OutsideClick,
    CancelKey,
    /// The open record dropped out of the active set
    Filtered,
    /// A new list replaced the one the record came from
    Reloaded,
}
