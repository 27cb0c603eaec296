use crate::consts::consts::{
    DEFAULT_ENDPOINT, DEFAULT_FIELDS, DEFAULT_NATIONALITY, DEFAULT_RESULTS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryOptions {
    pub endpoint: String,
    pub results: usize,
    pub nationality: String,
    pub fields: Vec<String>,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DirectoryOptions {
    /// Base URL of the people API, without a query string
    pub fn set_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Size of the fixed result set. There is no pagination beyond it.
    pub fn set_results(mut self, results: usize) -> Self {
        self.results = results;
        self
    }

    pub fn set_nationality(mut self, nationality: String) -> Self {
        self.nationality = nationality;
        self
    }

    pub fn set_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Full request URL. `noinfo` drops the API's `info` block from the body.
    pub fn url(&self) -> String {
        format!(
            "{}?results={}&nat={}&inc={}&noinfo",
            self.endpoint,
            self.results,
            self.nationality,
            self.fields.join(",")
        )
    }
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
            nationality: DEFAULT_NATIONALITY.to_string(),
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}
