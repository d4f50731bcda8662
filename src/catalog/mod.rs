//! Berlin open data catalog integration
//!
//! The portal exposes a CKAN-compatible search API. This module owns the
//! fetch boundary (`client`), the decoded record shape (`types`) and the
//! recency filter (`filter`) that partitions records into newly released and
//! recently updated sets.

pub mod client;
pub mod filter;
pub mod types;

pub use client::CatalogClient;
pub use filter::{select_recent, select_recent_as_of, RecentDatasets};
pub use types::DatasetRecord;
