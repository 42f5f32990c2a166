//! # autolisting
//!
//! Turn a vehicle listing URL into structured data and a console script that
//! fills a marketplace listing form.
//!
//! ## Features
//!
//! - **Extraction**: asks Gemini for the listing's vehicle attributes with a fixed response schema
//! - **Normalization**: digits-only price and mileage, fixed dealer description
//! - **Script generation**: a paste-into-console auto-fill script with a fixed fill order
//! - **MCP Server**: the same pipeline exposed as Model Context Protocol tools
//!
//! ## Command line
//!
//! ```bash
//! # Extract a listing and copy the auto-fill script to the clipboard
//! API_KEY=... cargo run --bin autolisting -- fetch https://example.com/listing/1 --copy
//!
//! # Render a script from a saved record without calling the API
//! cargo run --bin autolisting -- script record.json --out autofill.js
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use autolisting::{ExtractorConfig, GeminiExtractor, ListingSession};
//!
//! # async fn run() -> autolisting::Result<()> {
//! let extractor = GeminiExtractor::new(ExtractorConfig::from_env())?;
//! let mut session = ListingSession::new(extractor);
//!
//! let status = session.analyze("https://example.com/listing/1").await?;
//! if let Some(error) = &status.error {
//!     eprintln!("{}", error);
//! }
//!
//! if let Some(script) = session.script() {
//!     println!("{}", script);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a script directly
//!
//! ```rust
//! use autolisting::{VehicleRecord, generate_script, normalize};
//!
//! let record = normalize(
//!     VehicleRecord::new("2020 Honda Civic", 2020, "Honda", "Civic", "$15,000", "Sedan")
//!         .with_mileage("32,000 mi"),
//! );
//! let script = generate_script(&record);
//! assert!(script.contains(r#""price":"15000""#));
//! ```
//!
//! ## Module Overview
//!
//! - [`vehicle`]: the vehicle record and its normalization
//! - [`extract`]: the extraction seam and the Gemini client
//! - [`script`]: fill plan and console script rendering
//! - [`session`]: request status and lifecycle
//! - [`error`]: Error types and result aliases
//! - [`mcp`]: **Model Context Protocol server** (requires `mcp-handler` feature)

pub mod error;
pub mod extract;
pub mod script;
pub mod session;
pub mod vehicle;

#[cfg(feature = "mcp-handler")]
pub mod mcp;

pub use error::{ListingError, Result};
pub use extract::{Extractor, ExtractorConfig, GeminiExtractor};
pub use script::{FillStep, ScriptGenerator, ScriptOptions, generate_script};
pub use session::{ListingSession, RequestStatus, RequestTicket};
pub use vehicle::{FIXED_DESCRIPTION, ModelYear, VehicleRecord, digits_only, normalize};

#[cfg(feature = "mcp-handler")]
pub use mcp::ListingServer;
#[cfg(feature = "mcp-handler")]
pub use rmcp::ServiceExt;
