//! Data records served by the gallery backend.
//! The viewer reads these; it never mutates them in place — all writes go
//! through the service layer and come back as fresh fetches.

use serde::{Deserialize, Serialize};

/// A named collection of image assets (folder analogue).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name for the sidebar entry, e.g. "fa-folder".
    #[serde(default)]
    pub icon: Option<String>,
}

/// One image's metadata and source locator. Decoded natural dimensions are
/// not part of the record: they are only known once the browser has loaded
/// `src`, and they reach the lightbox through its decode callback instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub id: String,
    pub title: String,
    /// Resolvable URI of the image bytes; the viewer does not interpret the
    /// transport.
    pub src: String,
    pub file_name: String,
    /// Stored size in bytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Upload timestamp, milliseconds since the epoch.
    #[serde(default)]
    pub uploaded_at: u64,
}
