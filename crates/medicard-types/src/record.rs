//! Medical history entries.

use serde::{Deserialize, Serialize};

/// One entry in a patient's medical history.
///
/// Belongs to exactly one patient and is append-only; the store keeps a
/// patient's records in insertion order with strictly increasing ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    /// Unique per patient, monotonically increasing
    pub id: i64,
    /// YYYY-MM-DD
    pub date: String,
    pub condition: String,
    pub doctor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
