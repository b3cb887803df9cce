//! Prescriptions.

use serde::{Deserialize, Serialize};

/// A medication prescribed to one patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Unique per patient, monotonically increasing
    pub id: i64,
    pub medication: String,
    /// Free-text dose and frequency, e.g. "1000 IU daily"
    pub dosage: String,
    pub prescribed_by: String,
    /// YYYY-MM-DD
    pub prescribed_date: String,
    /// Free-text course length, e.g. "3 months"
    pub duration: String,
    pub status: PrescriptionStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrescriptionStatus {
    Active,
    Completed,
    Discontinued,
    Expired,
}
