//! Request lifecycle around one extraction
//!
//! [`ListingSession`] owns the extractor and the single [`RequestStatus`].
//! Every request gets a [`RequestTicket`]; a result whose ticket has been
//! superseded by a newer request is dropped instead of overwriting fresher
//! state.

pub mod status;

pub use status::{EXTRACTION_FAILED_MESSAGE, Phase, RequestStatus};

use crate::error::Result;
use crate::extract::{Extractor, normalize_listing_url};
use crate::script::ScriptGenerator;
use crate::vehicle::{VehicleRecord, normalize};

/// Handle for an in-flight request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    url: String,
}

impl RequestTicket {
    /// Normalized URL the request was issued for
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sequence number of the request within its session
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Single-owner session: one status value, updated synchronously
pub struct ListingSession<E: Extractor> {
    extractor: E,
    generator: ScriptGenerator,
    status: RequestStatus,
    generation: u64,
}

impl<E: Extractor> ListingSession<E> {
    /// Create an idle session
    pub fn new(extractor: E) -> Self {
        Self::with_generator(extractor, ScriptGenerator::default())
    }

    /// Create an idle session with a custom script generator
    pub fn with_generator(extractor: E, generator: ScriptGenerator) -> Self {
        Self {
            extractor,
            generator,
            status: RequestStatus::new(),
            generation: 0,
        }
    }

    /// Current status
    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Get the extractor
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Start a request for `url`
    ///
    /// An unusable URL is rejected before any state changes.
    pub fn begin(&mut self, url: &str) -> Result<RequestTicket> {
        let url = normalize_listing_url(url)?;
        self.generation += 1;
        self.status.start();
        log::info!("Analyzing listing {} (request #{})", url, self.generation);

        Ok(RequestTicket {
            generation: self.generation,
            url,
        })
    }

    /// Apply the outcome of a request
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn complete(&mut self, ticket: &RequestTicket, outcome: Result<VehicleRecord>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping result of request #{} (latest is #{})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(record) => {
                log::info!("Extracted {} from {}", record.title, ticket.url);
                self.status.succeed(normalize(record));
            }
            Err(e) if e.is_extraction_failure() => {
                log::warn!("Extraction failed for {}: {}", ticket.url, e);
                self.status.fail();
            }
            Err(e) => {
                log::error!("Request for {} failed outside extraction: {}", ticket.url, e);
                self.status.fail();
            }
        }
        true
    }

    /// Run one full request: begin, extract once, complete
    pub async fn analyze(&mut self, url: &str) -> Result<&RequestStatus> {
        let ticket = self.begin(url)?;
        let outcome = self.extractor.extract(ticket.url()).await;
        self.complete(&ticket, outcome);
        Ok(&self.status)
    }

    /// Auto-fill script for the current data, if any
    pub fn script(&self) -> Option<String> {
        self.status.data.as_ref().map(|record| self.generator.generate(record))
    }
}
