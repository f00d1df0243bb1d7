// SPDX-License-Identifier: MIT
//! Host integration surface.
//!
//! The embedding editor implements [`Host`]; the crate never talks to an
//! editor API directly. The trait covers exactly the actions the extension
//! needs from its host: report the active editor, show a rendered virtual
//! document in a pane, and the "navigate back" fallback used when there is
//! nothing to preview.

use crate::error::PreviewError;
use crate::uri::PreviewUri;
use crate::view_column::ViewColumn;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// State of the host's active text editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorInfo {
    /// Absolute path of the document open in the active editor.
    pub path: String,
    /// Pane the active editor occupies. Hosts may not always know this,
    /// even when an editor is active.
    pub view_column: Option<ViewColumn>,
}

/// The editor environment embedding this extension.
#[async_trait]
pub trait Host: Send + Sync {
    /// The currently active text editor, if any.
    fn active_editor(&self) -> Option<EditorInfo>;

    /// Display the rendered content of `uri` in `column`. The host resolves
    /// the content by calling back into the registered provider.
    async fn show_preview(&self, uri: PreviewUri, column: ViewColumn) -> Result<(), PreviewError>;

    /// Fallback navigation action when there is nothing to preview.
    async fn navigate_back(&self);
}
