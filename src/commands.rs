// SPDX-License-Identifier: MIT
//! Preview launcher and command surface.
//!
//! Two logical commands: open the preview in the current pane, or open it
//! beside the current pane. The launcher performs no I/O of its own — it
//! computes the target pane and asks the host to display the virtual
//! document.

use crate::error::PreviewError;
use crate::host::Host;
use crate::uri::PreviewUri;
use crate::view_column::select_view_column;
use std::path::Path;
use tracing::{debug, info};

/// Open the preview in the current pane.
pub const CMD_SHOW_PREVIEW: &str = "jekyll.showPreview";
/// Open the preview beside the current pane.
pub const CMD_SHOW_PREVIEW_TO_SIDE: &str = "jekyll.showPreviewToSide";

/// Route a command id from the host's palette to its handler.
pub async fn dispatch(host: &dyn Host, command: &str) -> Result<(), PreviewError> {
    match command {
        CMD_SHOW_PREVIEW => open_preview(host, false).await,
        CMD_SHOW_PREVIEW_TO_SIDE => open_preview(host, true).await,
        other => Err(PreviewError::UnknownCommand(other.to_string())),
    }
}

/// Ask the host to display the preview of the active document.
///
/// With no active editor there is nothing to preview; the host navigates
/// back instead and the call returns without further side effects.
pub async fn open_preview(host: &dyn Host, side_by_side: bool) -> Result<(), PreviewError> {
    let Some(editor) = host.active_editor() else {
        debug!("no active editor — navigating back");
        host.navigate_back().await;
        return Ok(());
    };

    let uri = PreviewUri::from_source_path(Path::new(&editor.path));
    let column = select_view_column(editor.view_column, side_by_side);

    info!(uri = %uri, column = ?column, side_by_side, "opening preview");
    host.show_preview(uri, column).await
}
