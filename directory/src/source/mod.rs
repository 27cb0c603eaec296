use thiserror::Error;

use crate::model::raw::ApiResponse;

pub mod file;
pub mod network;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Unable to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Unable to read people file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to start fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Where the people list comes from. Called once per session, never retried.
pub trait PeopleSource {
    fn fetch(&self) -> FetchResult<ApiResponse>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}
