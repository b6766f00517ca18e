//! Deterministic rendering of a fetched record into a textual brief.
//!
//! The brief is what gets embedded into the summary prompt. Missing identity
//! fields fall back to "Unknown" and missing test fields to "N/A" rather
//! than dropping lines; test blocks keep the order the API returned.

use motbot_types::vehicle::{Defect, MotTest, VehicleRecord};

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

/// Render the identity header followed by one block per test.
pub fn render_brief(record: &VehicleRecord) -> String {
    let identity = |value: &Option<String>| -> String {
        value.clone().unwrap_or_else(|| UNKNOWN.to_string())
    };

    let mut brief = String::new();
    brief.push_str(&format!(
        "Vehicle Registration: {}\n",
        identity(&record.registration)
    ));
    brief.push_str(&format!("Make: {}\n", identity(&record.make)));
    brief.push_str(&format!("Model: {}\n", identity(&record.model)));
    brief.push_str(&format!(
        "First Registered: {}\n\n",
        identity(&record.first_used_date)
    ));
    brief.push_str("MoT Test History:\n");

    for test in &record.mot_tests {
        render_test(&mut brief, test);
    }

    brief
}

fn render_test(brief: &mut String, test: &MotTest) {
    let date = test.completed_date.as_deref().unwrap_or(NOT_AVAILABLE);
    let result = if test.passed() { "Pass ✅" } else { "Fail ❌" };
    let mileage = test.odometer_value.as_deref().unwrap_or(NOT_AVAILABLE);
    let unit = test.odometer_unit.as_deref().unwrap_or("");

    brief.push_str(&format!("- Test Date: {date}, Result: {result}\n"));
    brief.push_str(&format!("  Mileage: {mileage} {unit}\n"));

    for defect in &test.defects {
        brief.push_str(&render_defect(defect));
    }
}

fn render_defect(defect: &Defect) -> String {
    let text = defect.text.as_deref().unwrap_or(NOT_AVAILABLE);
    let kind = defect.defect_type.as_deref().unwrap_or(NOT_AVAILABLE);
    let dangerous = match defect.dangerous {
        Some(flag) => flag.to_string(),
        None => NOT_AVAILABLE.to_string(),
    };
    format!("  Defect: {text} (Type: {kind}, Dangerous: {dangerous})\n")
}
