//! Medicard domain types
//!
//! Entities persisted by the patient record store, plus the pure
//! validation helpers the store applies at registration. Everything here
//! is I/O-free; reading and writing the collections is the store's job.
//!
//! Persisted JSON uses camelCase field names so the stored blobs stay
//! byte-compatible with the original smart-card application's
//! localStorage format.

pub mod appointment;
pub mod patient;
pub mod prescription;
pub mod record;
pub mod validation;

pub use appointment::{Appointment, AppointmentStatus};
pub use patient::{BloodGroup, BloodGroupParseError, EmergencyInfo, Patient};
pub use prescription::{Prescription, PrescriptionStatus};
pub use record::MedicalRecord;
