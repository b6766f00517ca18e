//! DVSA vehicle record types.
//!
//! Models the JSON returned by the MoT history trade API. Parsing is
//! tolerant: every field is optional and unknown fields are ignored. Missing
//! values surface as placeholders at render time, never as parse failures.

use serde::{Deserialize, Serialize};

/// MoT history for one vehicle, fetched fresh per lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub first_used_date: Option<String>,
    /// Past inspections, in the order the API returned them.
    #[serde(default)]
    pub mot_tests: Vec<MotTest>,
}

impl VehicleRecord {
    /// Whether the record carries any test history at all.
    pub fn has_tests(&self) -> bool {
        !self.mot_tests.is_empty()
    }
}

/// One completed inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotTest {
    #[serde(default)]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub test_result: Option<String>,
    #[serde(default)]
    pub odometer_value: Option<String>,
    #[serde(default)]
    pub odometer_unit: Option<String>,
    #[serde(default)]
    pub defects: Vec<Defect>,
}

impl MotTest {
    /// The API reports a passed test as the literal result string "PASSED".
    pub fn passed(&self) -> bool {
        self.test_result.as_deref() == Some("PASSED")
    }
}

/// A flagged issue from an inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defect {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "type", default)]
    pub defect_type: Option<String>,
    #[serde(default)]
    pub dangerous: Option<bool>,
}
