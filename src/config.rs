use std::path::PathBuf;
use std::time::Duration;

pub const REDDIT_BASE: &str = "https://www.reddit.com";
pub const USER_AGENT: &str = "phils bot heh";
pub const IMAGE_EXTENSION: &str = ".jpg";

/// Everything one crawl needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlConfig {
    pub subreddit: String,
    pub sort: String,
    pub folder: PathBuf,
    /// Exact, case-sensitive suffix a post url must carry to be downloaded.
    /// Also used as the suffix of the written file.
    pub extension: String,
    pub user_agent: String,
    pub delay: Duration,
}

impl CrawlConfig {
    pub fn new(subreddit: &str, sort: &str, folder: impl Into<PathBuf>) -> Self {
        CrawlConfig {
            subreddit: subreddit.to_owned(),
            sort: sort.to_owned(),
            folder: folder.into(),
            ..Default::default()
        }
    }

    pub fn listing_url(&self) -> String {
        format!(
            "{}/r/{}/{}.json?sort={}",
            REDDIT_BASE, self.subreddit, self.sort, self.sort
        )
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            subreddit: "Eyebleach".to_string(),
            sort: "new".to_string(),
            folder: PathBuf::from("downloaded_reddit_images"),
            extension: IMAGE_EXTENSION.to_string(),
            user_agent: USER_AGENT.to_string(),
            delay: Duration::from_secs(1),
        }
    }
}
