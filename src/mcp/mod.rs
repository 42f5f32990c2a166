//! MCP (Model Context Protocol) server implementation for listing extraction
//!
//! This module exposes the extraction, normalization and script generation
//! pipeline as rmcp tools.

pub mod handler;
pub use handler::ListingServer;

use crate::error::ListingError;
use crate::session::{ListingSession, Phase};
use crate::vehicle::{VehicleRecord, normalize};
use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    tool, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Extract tool parameters
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractVehicleParams {
    /// Listing URL to analyze
    pub url: String,
}

/// Parameters for tools that take an already extracted record
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecordParams {
    /// Vehicle record (camelCase keys, as returned by extract_vehicle)
    pub record: VehicleRecord,
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn map_error(error: ListingError) -> McpError {
    match error {
        ListingError::InvalidUrl(reason) => McpError::invalid_params(reason, None),
        other => McpError::internal_error(other.to_string(), None),
    }
}

#[tool_router]
impl ListingServer {
    /// Extract and normalize a listing, returning the record and its script
    #[tool(
        description = "Extract vehicle details from a listing URL and generate the auto-fill console script"
    )]
    async fn extract_vehicle(
        &self,
        params: Parameters<ExtractVehicleParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut session =
            ListingSession::with_generator(self.extractor.clone(), self.generator.clone());
        let status = session.analyze(&params.0.url).await.map_err(map_error)?;

        if status.phase() == Phase::Failed {
            let message = status.error.clone().unwrap_or_default();
            return Ok(CallToolResult::error(vec![Content::text(message)]));
        }
        let vehicle = status.data.clone();

        json_result(&serde_json::json!({
            "vehicle": vehicle,
            "script": session.script(),
        }))
    }

    /// Normalize a record
    #[tool(
        description = "Normalize a vehicle record: digits-only price and mileage, fixed dealer description"
    )]
    async fn normalize_vehicle(
        &self,
        params: Parameters<RecordParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&normalize(params.0.record))
    }

    /// Render the auto-fill script for a record
    #[tool(
        description = "Generate the auto-fill console script for a vehicle record (normalized first)"
    )]
    async fn generate_autofill_script(
        &self,
        params: Parameters<RecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let record = normalize(params.0.record);
        Ok(CallToolResult::success(vec![Content::text(self.generator.generate(&record))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::extract::Extractor;
    use crate::session::EXTRACTION_FAILED_MESSAGE;
    use crate::vehicle::FIXED_DESCRIPTION;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedExtractor(Option<VehicleRecord>);

    #[async_trait]
    impl Extractor for FixedExtractor {
        async fn extract(&self, _url: &str) -> Result<VehicleRecord> {
            self.0.clone().ok_or(ListingError::EmptyResponse)
        }
    }

    fn civic() -> VehicleRecord {
        VehicleRecord::new("2020 Honda Civic", 2020, "Honda", "Civic", "$15,000", "Sedan")
            .with_mileage("32,000 mi")
    }

    fn server(record: Option<VehicleRecord>) -> ListingServer {
        ListingServer::new(Arc::new(FixedExtractor(record)))
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    #[test]
    fn test_params_deserialization() {
        let params: RecordParams = serde_json::from_value(serde_json::json!({
            "record": {
                "title": "t", "year": "2020", "make": "Honda", "model": "Civic",
                "price": "$1", "bodyStyle": "Sedan"
            }
        }))
        .unwrap();
        assert_eq!(params.record.make, "Honda");
    }

    #[tokio::test]
    async fn test_extract_vehicle_success() {
        let result = server(Some(civic()))
            .extract_vehicle(Parameters(ExtractVehicleParams {
                url: "https://example.com/listing/1".to_string(),
            }))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        let body: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(body["vehicle"]["price"], "15000");
        assert_eq!(body["vehicle"]["description"], FIXED_DESCRIPTION);
        assert!(body["script"].as_str().unwrap().contains(r#""make":"Honda""#));
    }

    #[tokio::test]
    async fn test_extract_vehicle_failure() {
        let result = server(None)
            .extract_vehicle(Parameters(ExtractVehicleParams {
                url: "https://example.com/listing/1".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), EXTRACTION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_extract_vehicle_invalid_url() {
        let result = server(None)
            .extract_vehicle(Parameters(ExtractVehicleParams { url: String::new() }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_generate_autofill_script() {
        let result = server(None)
            .generate_autofill_script(Parameters(RecordParams { record: civic() }))
            .await
            .unwrap();

        let script = text_of(&result);
        assert!(script.contains(r#""price":"15000""#));
        assert!(script.contains("await checkCleanTitle();"));
    }

    #[tokio::test]
    async fn test_normalize_vehicle() {
        let result = server(None)
            .normalize_vehicle(Parameters(RecordParams { record: civic() }))
            .await
            .unwrap();

        let record: VehicleRecord = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(record.mileage, "32000");
        assert_eq!(record.description, FIXED_DESCRIPTION);
    }
}
