// SPDX-License-Identifier: MIT
//! Preview URIs — `jekyll://<source-path>`.
//!
//! A preview URI identifies which source file's preview was requested. It is
//! built by re-tagging the active document's file path under the `jekyll`
//! scheme, preserving the path verbatim so a request can be correlated back
//! to its source file. The provider does not currently route the path into
//! the server request — every fetch targets the server root and the user
//! navigates within the rendered site.

use crate::error::PreviewError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// URI scheme the content provider is registered under.
pub const PREVIEW_SCHEME: &str = "jekyll";

/// A virtual document URI under a preview scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUri {
    scheme: String,
    path: String,
}

impl PreviewUri {
    /// Re-tag a source file path under the `jekyll` scheme.
    pub fn from_source_path(path: &Path) -> Self {
        Self {
            scheme: PREVIEW_SCHEME.to_string(),
            path: path.to_string_lossy().into_owned(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The source file path this preview was requested for, verbatim.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for PreviewUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.path)
    }
}

impl FromStr for PreviewUri {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, path) = s
            .split_once("://")
            .ok_or_else(|| PreviewError::MalformedUri(s.to_string()))?;
        if scheme.is_empty() {
            return Err(PreviewError::MalformedUri(s.to_string()));
        }
        Ok(Self {
            scheme: scheme.to_string(),
            path: path.to_string(),
        })
    }
}
