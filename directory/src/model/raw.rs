use std::fmt;

use serde::{Deserialize, Serialize};

/// Body returned by the people API. Records are kept as raw JSON so that one
/// malformed record can be reported with its position.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse {
    pub results: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawApiRecord {
    pub name: RawName,
    pub email: String,
    pub location: RawLocation,
    pub cell: String,
    pub dob: RawDob,
    pub picture: RawPicture,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawName {
    pub first: String,
    pub last: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawLocation {
    pub street: RawStreet,
    pub city: String,
    pub state: String,
    pub postcode: TextOrNumber,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawStreet {
    pub number: TextOrNumber,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawDob {
    /// ISO-like timestamp, only the `YYYY-MM-DD` prefix is used
    pub date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawPicture {
    pub large: String,
}

/// The API sends postcodes (and occasionally street numbers) as either JSON
/// numbers or strings depending on the nationality.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum TextOrNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Number(number) => write!(f, "{}", number),
            TextOrNumber::Text(text) => write!(f, "{}", text),
        }
    }
}
