// SPDX-License-Identifier: MIT
//! Extension lifecycle.
//!
//! [`PreviewExtension`] is the long-lived object the host constructs at
//! activation and drops at deactivation. It owns the content provider; the
//! host registers [`PreviewExtension::provide`] as the content callback for
//! the `jekyll` scheme and wires [`crate::commands`] into its palette.

use crate::error::PreviewError;
use crate::provider::ContentProvider;
use crate::uri::{PreviewUri, PREVIEW_SCHEME};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct PreviewExtension {
    provider: Arc<ContentProvider>,
}

impl PreviewExtension {
    /// Activate the extension. `extension_dir` is the install directory the
    /// host hands over; bundled media resolves against it.
    pub fn new(extension_dir: impl Into<PathBuf>) -> Self {
        info!(scheme = PREVIEW_SCHEME, "jekyll preview extension activated");
        Self {
            provider: Arc::new(ContentProvider::new(extension_dir)),
        }
    }

    /// Activate against an explicit server URL (test seam; see
    /// [`ContentProvider::with_server_url`]).
    pub fn with_server_url(
        extension_dir: impl Into<PathBuf>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            provider: Arc::new(ContentProvider::with_server_url(extension_dir, server_url)),
        }
    }

    /// The content provider registered for the `jekyll` scheme. Lives as
    /// long as the extension does.
    pub fn provider(&self) -> Arc<ContentProvider> {
        Arc::clone(&self.provider)
    }

    /// Resolve content for a preview URI, enforcing the registered scheme.
    pub async fn provide(&self, uri: &PreviewUri) -> Result<String, PreviewError> {
        if uri.scheme() != PREVIEW_SCHEME {
            return Err(PreviewError::UnknownScheme(uri.scheme().to_string()));
        }
        self.provider.provide_content(uri).await
    }
}
