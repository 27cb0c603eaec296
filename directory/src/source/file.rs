use std::{fs, path::PathBuf};

use crate::model::raw::ApiResponse;

use super::{FetchResult, PeopleSource};

/// Reads a saved API body from disk. Useful for working without network access.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PeopleSource for FileSource {
    fn fetch(&self) -> FetchResult<ApiResponse> {
        let body = fs::read_to_string(&self.path)?;

        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
