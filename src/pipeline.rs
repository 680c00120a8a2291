use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::CrawlConfig;
use crate::download_file::download_a_file;
use crate::download_listing_page::{get_listing, select_targets};
use crate::error::{CrawlError, Result};
use crate::pacing::{FixedDelay, Pacer};
use crate::transport::{HttpTransport, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    pub listing_url: String,
    pub posts: usize,
    /// Files written, in listing order. A path shows up twice when two posts
    /// share a sanitized title.
    pub downloaded: Vec<PathBuf>,
}

/// Fetch the listing, then download every qualifying post one at a time,
/// pausing after each. The first failure ends the run.
pub async fn run<T, P>(config: &CrawlConfig, transport: &T, pacer: &P) -> Result<CrawlReport>
where
    T: Transport + ?Sized,
    P: Pacer + ?Sized,
{
    fs::create_dir_all(&config.folder).map_err(|source| CrawlError::Io {
        path: config.folder.clone(),
        source,
    })?;

    let listing_url = config.listing_url();
    let listing_response = get_listing(transport, &listing_url).await?;
    let posts = listing_response.data.children.len();
    let targets = select_targets(listing_response, config);
    info!(
        url = %listing_url,
        posts,
        images = targets.len(),
        "fetched listing"
    );

    let mut downloaded = Vec::with_capacity(targets.len());
    for target in targets {
        download_a_file(transport, &target).await?;
        downloaded.push(target.destination);
        pacer.pause().await;
    }

    Ok(CrawlReport {
        listing_url,
        posts,
        downloaded,
    })
}

/// `run` over real HTTP with a flat sleep of `config.delay` between images.
pub async fn crawl(config: &CrawlConfig) -> Result<CrawlReport> {
    let transport = HttpTransport::new(&config.user_agent)?;
    run(config, &transport, &FixedDelay(config.delay)).await
}
