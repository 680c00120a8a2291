use std::path::PathBuf;

use serde::Deserialize;

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct ListingDetail {
    pub title: String,
    pub url: String,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Listing {
    pub data: ListingDetail,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct ListingData {
    pub children: Vec<Listing>,
    /// Pagination cursor; accepted but only one page is ever fetched.
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct ListingResponse {
    /// Accepted when present, never checked.
    #[serde(default)]
    pub kind: Option<String>,
    pub data: ListingData,
}

/// An image to fetch and the file it lands in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTarget {
    pub source: String,
    pub destination: PathBuf,
}
