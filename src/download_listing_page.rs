use serde_json::Value;
use tracing::debug;

use crate::config::CrawlConfig;
use crate::error::{CrawlError, Result};
use crate::models::{DownloadTarget, ListingResponse};
use crate::naming::sanitize_title;
use crate::transport::Transport;

/// Keeps the posts whose url ends in the configured extension, in listing order.
pub fn select_targets(listing_response: ListingResponse, config: &CrawlConfig) -> Vec<DownloadTarget> {
    listing_response
        .data
        .children
        .into_iter()
        .filter_map(|child| {
            let post = child.data;
            if !post.url.ends_with(&config.extension) {
                debug!(url = %post.url, "skipping post");
                return None;
            }
            let file_name = format!("{}{}", sanitize_title(&post.title), config.extension);
            Some(DownloadTarget {
                source: post.url,
                destination: config.folder.join(file_name),
            })
        })
        .collect()
}

/// Two passes so a body that is not JSON and a body with the wrong layout
/// are told apart.
pub fn parse_listing(url: &str, body: &str) -> Result<ListingResponse> {
    let value: Value = serde_json::from_str(body).map_err(|source| CrawlError::Parse {
        url: url.to_owned(),
        source,
    })?;
    serde_json::from_value(value).map_err(|source| CrawlError::Shape {
        url: url.to_owned(),
        source,
    })
}

pub async fn get_listing<T>(transport: &T, url: &str) -> Result<ListingResponse>
where
    T: Transport + ?Sized,
{
    let body = transport.get_text(url).await?;
    parse_listing(url, &body)
}
