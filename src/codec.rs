//! YAML wire format for records and match lists.
//!
//! YAML is a superset of JSON, so JSON payloads decode too.

use crate::error::CodecError;
use crate::schema::ApplicationRecord;

/// Decode one record (or query) from a YAML document.
///
/// A blank or `null` document yields the all-empty record, which as a query
/// matches everything. Unknown keys are ignored.
pub fn decode_record(payload: &str) -> Result<ApplicationRecord, CodecError> {
    if payload.trim().is_empty() {
        return Ok(ApplicationRecord::default());
    }
    let record: Option<ApplicationRecord> =
        serde_yaml::from_str(payload).map_err(CodecError::Parse)?;
    Ok(record.unwrap_or_default())
}

/// Encode matches as a YAML sequence, keeping field and maintainer order.
pub fn encode_records(records: &[&ApplicationRecord]) -> Result<String, CodecError> {
    serde_yaml::to_string(records).map_err(CodecError::Encode)
}
