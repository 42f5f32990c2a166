//! Extraction of structured vehicle data from a listing URL
//!
//! The [`Extractor`] trait is the seam between the request session and the
//! hosted model. [`GeminiExtractor`] is the production implementation; tests
//! and embedders can supply their own.

pub mod client;
pub mod config;
pub mod listing_url;
pub mod prompt;
pub mod types;

pub use client::{GeminiExtractor, parse_record};
pub use config::ExtractorConfig;
pub use listing_url::normalize_listing_url;

use crate::error::Result;
use crate::vehicle::VehicleRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Turns a listing URL into a raw (not yet normalized) vehicle record
///
/// One call issues at most one request. Implementations must not retry.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<VehicleRecord>;
}

#[async_trait]
impl<E: Extractor + ?Sized> Extractor for Arc<E> {
    async fn extract(&self, url: &str) -> Result<VehicleRecord> {
        (**self).extract(url).await
    }
}

#[async_trait]
impl<E: Extractor + ?Sized> Extractor for Box<E> {
    async fn extract(&self, url: &str) -> Result<VehicleRecord> {
        (**self).extract(url).await
    }
}
