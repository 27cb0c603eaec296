use serde::{Deserialize, Serialize};

use crate::{consts::consts::RecordId, model::person::Person};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Everything a view needs after a query change: the new active set, whether
/// each record's card is shown, and whether to show the no-results indicator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterOutcome {
    pub matches: Vec<Person>,
    pub visibility: Vec<(RecordId, Visibility)>,
}

impl FilterOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn visible(&self) -> Vec<RecordId> {
        self.with_visibility(Visibility::Shown)
    }

    pub fn hidden(&self) -> Vec<RecordId> {
        self.with_visibility(Visibility::Hidden)
    }

    fn with_visibility(&self, wanted: Visibility) -> Vec<RecordId> {
        self.visibility
            .iter()
            .filter(|(_, visibility)| *visibility == wanted)
            .map(|(id, _)| *id)
            .collect()
    }
}

pub fn matches_query(person: &Person, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    person.name.to_lowercase().contains(&query.to_lowercase())
}

/// Case-insensitive substring match on `name`. An empty query keeps everyone.
#[tracing::instrument(skip(people))]
pub fn filter(people: &[Person], query: &str) -> Vec<Person> {
    people
        .iter()
        .filter(|person| matches_query(person, query))
        .cloned()
        .collect()
}

#[tracing::instrument(skip(people))]
pub fn apply_filter(people: &[Person], query: &str) -> FilterOutcome {
    let mut matches = Vec::new();
    let mut visibility = Vec::with_capacity(people.len());

    for person in people {
        if matches_query(person, query) {
            matches.push(person.clone());
            visibility.push((person.id, Visibility::Shown));
        } else {
            visibility.push((person.id, Visibility::Hidden));
        }
    }

    FilterOutcome {
        matches,
        visibility,
    }
}
