use std::fmt;

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// Position of a record in fetch order. Stable for the lifetime of a load, so it
/// survives filtering and disambiguates people who share a name.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub usize);

impl RecordId {
    pub fn to_number(self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Values
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_RESULTS: usize = 12;
pub const DEFAULT_NATIONALITY: &str = "us";
pub const DEFAULT_FIELDS: [&str; 7] = [
    "name", "email", "location", "cell", "address", "dob", "picture",
];

/// Shown by a presentation layer when the initial load fails. There is no retry.
pub const FETCH_FAILURE_MESSAGE: &str =
    "Something went wrong loading the directory. Please reload to try again.";

pub const EMPTY_STATE_MESSAGE: &str = "No results found";
