// SPDX-License-Identifier: MIT
//! Jekyll live-preview extension core.
//!
//! Implements the editor-agnostic half of a live Jekyll preview: a command
//! layer that decides which pane the preview opens in, and a virtual
//! document provider that resolves `jekyll://` URIs by fetching the rendered
//! page from a locally running `jekyll serve`. The embedding editor supplies
//! a [`host::Host`] implementation, wires the two command ids in
//! [`commands`] into its palette, and registers [`PreviewExtension::provide`]
//! as the content callback for the `jekyll` scheme.

pub mod commands;
pub mod error;
pub mod events;
pub mod extension;
pub mod host;
pub mod provider;
pub mod uri;
pub mod view_column;

pub use error::PreviewError;
pub use extension::PreviewExtension;
pub use uri::{PreviewUri, PREVIEW_SCHEME};
pub use view_column::{select_view_column, ViewColumn};
