//! Wire types for the CKAN package_search API
//!
//! Records are decoded once at the fetch boundary. The portal's metadata
//! quality is uneven, so every field we care about is optional; unknown CKAN
//! fields are ignored.

use serde::{Deserialize, Serialize};

/// One dataset entry from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Human-readable name; also feeds the portal search URL.
    #[serde(default)]
    pub title: Option<String>,

    /// Publishing authority, display text only.
    #[serde(default)]
    pub author: Option<String>,

    /// Date of first publication, kept verbatim as supplied.
    #[serde(default)]
    pub date_released: Option<String>,

    /// Date of the last update, kept verbatim as supplied.
    #[serde(default)]
    pub date_updated: Option<String>,
}

impl DatasetRecord {
    /// Display title, substituting a fixed placeholder when absent.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(ohne Titel)")
    }

    /// Display author, substituting a fixed placeholder when absent.
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("(unbekannt)")
    }
}

/// Envelope returned by `package_search`: `{ result: { results: [...] } }`.
#[derive(Debug, Deserialize)]
pub struct PackageSearchResponse {
    pub result: PackageSearchResult,
}

#[derive(Debug, Deserialize)]
pub struct PackageSearchResult {
    #[serde(default)]
    pub results: Vec<DatasetRecord>,
}
