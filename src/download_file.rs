use std::fs;

use tracing::info;

use crate::error::{CrawlError, Result};
use crate::models::DownloadTarget;
use crate::transport::Transport;

/// Fetches `target.source` and writes it over whatever sits at `target.destination`.
pub async fn download_a_file<T>(transport: &T, target: &DownloadTarget) -> Result<()>
where
    T: Transport + ?Sized,
{
    let content = transport
        .get_bytes(&target.source)
        .await
        .map_err(|source| CrawlError::Download {
            url: target.source.clone(),
            source: Box::new(source),
        })?;

    fs::write(&target.destination, &content).map_err(|source| CrawlError::Io {
        path: target.destination.clone(),
        source,
    })?;

    info!(
        url = %target.source,
        file = %target.destination.display(),
        bytes = content.len(),
        "downloaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::download_file::download_a_file;
    use crate::error::CrawlError;
    use crate::models::DownloadTarget;
    use crate::transport::fake::FakeTransport;

    #[tokio::test]
    async fn writes_bytes_and_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("cat.jpg");
        fs::write(&destination, b"an older and longer picture").unwrap();
        let transport = FakeTransport::default().with("https://i.redd.it/cat.jpg", b"new".to_vec());
        let target = DownloadTarget {
            source: "https://i.redd.it/cat.jpg".to_string(),
            destination: destination.clone(),
        };

        download_a_file(&transport, &target).await.unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"new");
    }

    #[tokio::test]
    async fn failed_fetch_names_the_image_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = DownloadTarget {
            source: "https://i.redd.it/gone.jpg".to_string(),
            destination: dir.path().join("gone.jpg"),
        };

        let err = download_a_file(&FakeTransport::default(), &target).await.unwrap_err();

        match err {
            CrawlError::Download { url, source } => {
                assert_eq!(url, "https://i.redd.it/gone.jpg");
                assert!(matches!(*source, CrawlError::Status { status: 404, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!target.destination.exists());
    }

    #[tokio::test]
    async fn unwritable_destination_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let transport = FakeTransport::default().with("https://x/a.jpg", b"jpg".to_vec());
        let target = DownloadTarget {
            source: "https://x/a.jpg".to_string(),
            destination: dir.path().join("missing").join("a.jpg"),
        };

        let err = download_a_file(&transport, &target).await.unwrap_err();

        assert!(matches!(err, CrawlError::Io { .. }));
    }
}
