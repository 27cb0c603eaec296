use crate::{consts::consts::RecordId, model::person::Person};

/// Owns the full list and the active (filtered) subset.
///
/// `all_records` only changes on `load`. `active_records` is always an
/// order-preserving subsequence of it, which the filter engine guarantees.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    all_records: Vec<Person>,
    active_records: Vec<Person>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces both sequences wholesale.
    pub fn load(&mut self, records: Vec<Person>) {
        self.active_records = records.clone();
        self.all_records = records;
    }

    pub fn set_active(&mut self, subset: Vec<Person>) {
        debug_assert!(
            is_subsequence(&subset, &self.all_records),
            "active records must be an order-preserving subsequence of all records"
        );

        self.active_records = subset;
    }

    pub fn all_records(&self) -> &[Person] {
        &self.all_records
    }

    pub fn active_records(&self) -> &[Person] {
        &self.active_records
    }

    pub fn get(&self, id: RecordId) -> Option<&Person> {
        self.all_records.iter().find(|p| p.id == id)
    }

    pub fn is_active(&self, id: RecordId) -> bool {
        self.active_records.iter().any(|p| p.id == id)
    }

    pub fn is_loaded(&self) -> bool {
        !self.all_records.is_empty()
    }
}

fn is_subsequence(subset: &[Person], all: &[Person]) -> bool {
    let mut all = all.iter();

    subset
        .iter()
        .all(|wanted| all.any(|candidate| candidate.id == wanted.id))
}
