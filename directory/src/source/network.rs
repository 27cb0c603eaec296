use tokio::runtime::Builder;

use crate::{directory::options::DirectoryOptions, model::raw::ApiResponse};

use super::{FetchError, FetchResult, PeopleSource};

/// Fetches the people list over HTTP. The request runs to completion on a
/// dedicated current-thread runtime, so callers stay synchronous.
pub struct NetworkSource {
    url: String,
}

impl NetworkSource {
    pub fn new(options: &DirectoryOptions) -> Self {
        Self { url: options.url() }
    }

    async fn request(&self) -> FetchResult<ApiResponse> {
        let client = reqwest::Client::builder().build()?;

        let response = client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl PeopleSource for NetworkSource {
    fn fetch(&self) -> FetchResult<ApiResponse> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        runtime.block_on(self.request())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
