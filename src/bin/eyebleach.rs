//! Fixed crawl: newest r/Eyebleach posts into `downloaded_reddit_images/`.

use std::process::ExitCode;

use tracing::info;

use web_crawler::config::CrawlConfig;
use web_crawler::logging::init_logging;
use web_crawler::pipeline::crawl;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let config = CrawlConfig::default();

    match crawl(&config).await {
        Ok(report) => {
            info!("Saved {} images from {}", report.downloaded.len(), report.listing_url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", anyhow::Error::new(e));
            ExitCode::FAILURE
        }
    }
}
