// SPDX-License-Identifier: MIT
//! Virtual document content provider.
//!
//! Resolves a preview URI to document text by fetching the rendered page
//! from the locally running Jekyll server. One GET per request, whole body
//! buffered before returning. The response status is not inspected — a
//! completed response is content, even when the server answers with its own
//! error page. There are no retries and no crate-imposed timeout; an
//! abandoned request runs to completion and its result is discarded.

pub mod href;

use crate::error::PreviewError;
use crate::events::ChangeBroadcaster;
use crate::uri::PreviewUri;
use std::path::{Path, PathBuf};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Address of the local Jekyll server (`jekyll serve` default).
const PREVIEW_SERVER_URL: &str = "http://127.0.0.1:4000/";

/// Content provider for the `jekyll` scheme.
///
/// Constructed once at activation and kept alive until deactivation; the
/// change stream it owns lives exactly as long as the provider does.
pub struct ContentProvider {
    client: reqwest::Client,
    server_url: String,
    extension_dir: PathBuf,
    changes: ChangeBroadcaster,
}

impl ContentProvider {
    /// Provider against the fixed local server address.
    pub fn new(extension_dir: impl Into<PathBuf>) -> Self {
        Self::with_server_url(extension_dir, PREVIEW_SERVER_URL)
    }

    /// Provider against an explicit server URL.
    ///
    /// Injection seam so tests can point the provider at a loopback mock.
    /// The extension itself always constructs the provider with the fixed
    /// address — custom hosts and ports are not a supported feature.
    pub fn with_server_url(
        extension_dir: impl Into<PathBuf>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            server_url: server_url.into(),
            extension_dir: extension_dir.into(),
            changes: ChangeBroadcaster::new(),
        }
    }

    /// Fetch the rendered page for `uri` and return the full body.
    ///
    /// Every request targets the server root regardless of the URI's path:
    /// the server renders whatever the site currently is, and the user
    /// navigates within the rendered preview.
    pub async fn provide_content(&self, uri: &PreviewUri) -> Result<String, PreviewError> {
        debug!(uri = %uri, server = %self.server_url, "fetching preview content");

        let response = self
            .client
            .get(&self.server_url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.fetch_error(e))?;

        debug!(uri = %uri, status = %status, bytes = body.len(), "preview content fetched");
        Ok(body)
    }

    /// Force a re-fetch of `uri` on every subscribed listener.
    pub fn update(&self, uri: PreviewUri) {
        debug!(uri = %uri, "preview refresh requested");
        self.changes.fire(uri);
    }

    /// Stream of URIs whose content should be re-fetched.
    pub fn subscribe(&self) -> broadcast::Receiver<PreviewUri> {
        self.changes.subscribe()
    }

    /// Absolute path of a bundled media file under the extension install
    /// directory.
    pub fn media_path(&self, media_file: &str) -> PathBuf {
        self.extension_dir.join("media").join(media_file)
    }

    /// Rewrite a possibly-relative `href` found near `resource` into an
    /// absolute reference. See [`href::fix_href`].
    pub fn fix_href(&self, resource: &Path, href: &str) -> String {
        href::fix_href(resource, href)
    }

    fn fetch_error(&self, e: reqwest::Error) -> PreviewError {
        warn!(server = %self.server_url, err = %e, "preview fetch failed — is `jekyll serve` running?");
        PreviewError::Fetch(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a canned HTTP response on a random loopback port and return the
    /// base URL. Accepts connections until the test ends.
    async fn spawn_mock_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    // Drain the request head; a GET with no body fits one read.
                    let mut buf = [0u8; 1024];
                    let _ = stream.read(&mut buf).await;
                    let response = format!(
                        "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                });
            }
        });
        format!("http://{addr}/")
    }

    /// A loopback port with nothing listening on it.
    fn refused_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/")
    }

    fn any_uri() -> PreviewUri {
        PreviewUri::from_source_path(Path::new("/site/index.md"))
    }

    #[tokio::test]
    async fn resolves_with_the_full_response_body() {
        let url = spawn_mock_server("HTTP/1.1 200 OK", "<html>OK</html>").await;
        let provider = ContentProvider::with_server_url("/ext", url);

        let body = provider.provide_content(&any_uri()).await.unwrap();
        assert_eq!(body, "<html>OK</html>");
    }

    #[tokio::test]
    async fn completed_responses_are_content_regardless_of_status() {
        let url = spawn_mock_server("HTTP/1.1 500 Internal Server Error", "boom").await;
        let provider = ContentProvider::with_server_url("/ext", url);

        let body = provider.provide_content(&any_uri()).await.unwrap();
        assert_eq!(body, "boom");
    }

    #[tokio::test]
    async fn every_request_targets_the_same_endpoint() {
        let url = spawn_mock_server("HTTP/1.1 200 OK", "site root").await;
        let provider = ContentProvider::with_server_url("/ext", url);

        let a = PreviewUri::from_source_path(Path::new("/site/a.md"));
        let b = PreviewUri::from_source_path(Path::new("/site/deep/nested/b.md"));
        assert_eq!(provider.provide_content(&a).await.unwrap(), "site root");
        assert_eq!(provider.provide_content(&b).await.unwrap(), "site root");
    }

    #[tokio::test]
    async fn connection_refused_surfaces_the_transport_message() {
        let provider = ContentProvider::with_server_url("/ext", refused_url());

        let err = provider.provide_content(&any_uri()).await.unwrap_err();
        match err {
            PreviewError::Fetch(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Fetch error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_reaches_subscribers() {
        let provider = ContentProvider::new("/ext");
        let mut rx = provider.subscribe();

        let uri = any_uri();
        provider.update(uri.clone());
        assert_eq!(rx.recv().await.unwrap(), uri);
    }

    #[test]
    fn media_files_resolve_under_the_extension_dir() {
        let provider = ContentProvider::new("/opt/jekyll-preview");
        assert_eq!(
            provider.media_path("preview.css"),
            PathBuf::from("/opt/jekyll-preview/media/preview.css")
        );
    }
}
