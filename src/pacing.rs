use std::time::Duration;

use async_trait::async_trait;

/// Waits between two downloads.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Flat sleep, whatever the previous download took.
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}
