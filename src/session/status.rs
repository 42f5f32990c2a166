use crate::vehicle::VehicleRecord;
use serde::{Deserialize, Serialize};

/// User-facing message for every extraction failure
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Failed to extract data. Please check the URL and try again.";

/// Coarse phase of a [`RequestStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Analyzing,
    Failed,
    Ready,
}

/// State of the current extraction request
///
/// A failure does not clear `data`, so an error may sit next to the result
/// of an earlier successful request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatus {
    pub is_analyzing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<VehicleRecord>,
}

impl RequestStatus {
    /// Create an idle status
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase a front end should render
    pub fn phase(&self) -> Phase {
        if self.is_analyzing {
            Phase::Analyzing
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.data.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub(crate) fn start(&mut self) {
        self.is_analyzing = true;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, record: VehicleRecord) {
        self.is_analyzing = false;
        self.error = None;
        self.data = Some(record);
    }

    pub(crate) fn fail(&mut self) {
        self.is_analyzing = false;
        self.error = Some(EXTRACTION_FAILED_MESSAGE.to_string());
    }
}
