use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use web_crawler::cli::{wrong_count_message, Args, Invocation, USAGE};
use web_crawler::logging::init_logging;
use web_crawler::pipeline::crawl;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args: Args = Args::parse();

    let config = match args.invocation() {
        Invocation::Help => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Invocation::WrongCount(count) => {
            println!("{}", wrong_count_message(count));
            return ExitCode::from(2);
        }
        Invocation::Crawl(config) => config,
    };

    println!("getting images from {}", config.listing_url());
    let result = crawl(&config)
        .await
        .with_context(|| format!("crawling r/{} failed", config.subreddit));

    match result {
        Ok(report) => {
            info!(
                "Saved {} of {} posts from r/{} to {}",
                report.downloaded.len(),
                report.posts,
                config.subreddit,
                config.folder.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
