//! Appointments.

use serde::{Deserialize, Serialize};

/// A scheduled visit for one patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique per patient, monotonically increasing
    pub id: i64,
    /// YYYY-MM-DD
    pub date: String,
    /// Free-text clock time, e.g. "10:00 AM"
    pub time: String,
    pub doctor: String,
    pub department: String,
    pub status: AppointmentStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}
