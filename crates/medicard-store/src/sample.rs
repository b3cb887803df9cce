//! Demo-data seeding.
//!
//! The original application shipped a sample patient so the demo had
//! something to show on first launch; this reproduces it verbatim:
//! card MC001 / PIN 1234, two medical records, one prescription, one
//! appointment.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::info;

use medicard_storage::CardStorage;
use medicard_types::{
    Appointment, AppointmentStatus, BloodGroup, MedicalRecord, Patient, Prescription,
    PrescriptionStatus,
};

use crate::error::StoreError;
use crate::store::{
    PatientRecordStore, APPOINTMENTS_KEY, MEDICAL_RECORDS_KEY, PATIENTS_KEY, PRESCRIPTIONS_KEY,
};

/// The card ID of the seeded demo patient.
pub const SAMPLE_CARD_ID: &str = "MC001";
/// The PIN of the seeded demo patient.
pub const SAMPLE_PIN: &str = "1234";

impl<S: CardStorage> PatientRecordStore<S> {
    /// Seeds the demo patient, but only when the patients collection is
    /// empty. Returns whether anything was written.
    pub fn load_sample_data(&mut self) -> Result<bool, StoreError> {
        let mut patients: BTreeMap<String, Patient> = self.read_collection(PATIENTS_KEY)?;
        if !patients.is_empty() {
            return Ok(false);
        }

        patients.insert(
            SAMPLE_CARD_ID.to_string(),
            Patient {
                card_id: SAMPLE_CARD_ID.to_string(),
                pin: SAMPLE_PIN.to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                date_of_birth: "1990-01-15".to_string(),
                blood_group: BloodGroup::OPositive,
                emergency_contact: "+1-555-0123".to_string(),
                registered_date: Utc::now(),
            },
        );
        self.write_collection(PATIENTS_KEY, &patients)?;

        let records = BTreeMap::from([(
            SAMPLE_CARD_ID.to_string(),
            vec![
                MedicalRecord {
                    id: 1,
                    date: "2024-01-15".to_string(),
                    condition: "Annual Checkup".to_string(),
                    doctor: "Dr. Smith".to_string(),
                    notes: Some("All vital signs normal. Patient in good health.".to_string()),
                },
                MedicalRecord {
                    id: 2,
                    date: "2024-03-22".to_string(),
                    condition: "Common Cold".to_string(),
                    doctor: "Dr. Johnson".to_string(),
                    notes: Some(
                        "Prescribed rest and fluids. Follow up if symptoms persist.".to_string(),
                    ),
                },
            ],
        )]);
        self.write_collection(MEDICAL_RECORDS_KEY, &records)?;

        let prescriptions = BTreeMap::from([(
            SAMPLE_CARD_ID.to_string(),
            vec![Prescription {
                id: 1,
                medication: "Vitamin D3".to_string(),
                dosage: "1000 IU daily".to_string(),
                prescribed_by: "Dr. Smith".to_string(),
                prescribed_date: "2024-01-15".to_string(),
                duration: "3 months".to_string(),
                status: PrescriptionStatus::Active,
            }],
        )]);
        self.write_collection(PRESCRIPTIONS_KEY, &prescriptions)?;

        let appointments = BTreeMap::from([(
            SAMPLE_CARD_ID.to_string(),
            vec![Appointment {
                id: 1,
                date: "2024-10-15".to_string(),
                time: "10:00 AM".to_string(),
                doctor: "Dr. Smith".to_string(),
                department: "General Medicine".to_string(),
                status: AppointmentStatus::Scheduled,
            }],
        )]);
        self.write_collection(APPOINTMENTS_KEY, &appointments)?;

        info!(card_id = SAMPLE_CARD_ID, "seeded sample data");
        Ok(true)
    }
}
