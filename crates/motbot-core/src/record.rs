//! Vehicle record source abstraction.
//!
//! The "port" the MoT history client implements. Defining the trait here
//! lets the conversation engine be exercised against in-memory fakes.

use motbot_types::error::RecordError;
use motbot_types::vehicle::VehicleRecord;

/// Trait for vehicle inspection-history lookups.
///
/// The registration is inserted into the lookup verbatim; callers are
/// expected to have normalized it (trimmed, uppercased) already.
pub trait VehicleRecordSource: Send + Sync {
    /// Fetch the MoT history for one registration.
    fn fetch(
        &self,
        registration: &str,
    ) -> impl std::future::Future<Output = Result<VehicleRecord, RecordError>> + Send;
}
