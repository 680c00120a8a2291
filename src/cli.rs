use clap::Parser;

use crate::config::CrawlConfig;

pub const USAGE: &str = "\
takes 3 arguments; the subreddit, how to sort, and the folder to download to
example: web_crawler Eyebleach new download_reddit_images
Eyebleach: the subreddit
new: posts sorted by newest
download_reddit_images: images are downloaded to this folder";

const HELP_WORDS: [&str; 3] = ["-help", "--help", "-h"];

/// Downloads .jpg posts from a subreddit listing.
///
/// Clap's own help flag is off so that `-help` arrives as a plain argument.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// <subreddit> <sort> <folder>, or -help
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    WrongCount(usize),
    Crawl(CrawlConfig),
}

impl Args {
    pub fn invocation(self) -> Invocation {
        if let Some(first) = self.args.first() {
            if HELP_WORDS.contains(&first.as_str()) {
                return Invocation::Help;
            }
        }
        match self.args.as_slice() {
            [subreddit, sort, folder] => Invocation::Crawl(CrawlConfig::new(subreddit, sort, folder)),
            other => Invocation::WrongCount(other.len()),
        }
    }
}

pub fn wrong_count_message(count: usize) -> String {
    format!("argument count {} should be 3, exiting...", count)
}
