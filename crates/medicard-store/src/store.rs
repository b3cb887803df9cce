//! The patient record store.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use medicard_storage::CardStorage;
use medicard_types::validation::is_valid_pin;
use medicard_types::{
    Appointment, AppointmentStatus, BloodGroup, MedicalRecord, Patient, Prescription,
    PrescriptionStatus,
};

use crate::error::StoreError;

/// Storage key for the card-ID → [`Patient`] mapping.
pub const PATIENTS_KEY: &str = "patients";
/// Storage key for the card-ID → `Vec<MedicalRecord>` mapping.
pub const MEDICAL_RECORDS_KEY: &str = "medicalRecords";
/// Storage key for the card-ID → `Vec<Prescription>` mapping.
pub const PRESCRIPTIONS_KEY: &str = "prescriptions";
/// Storage key for the card-ID → `Vec<Appointment>` mapping.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Registration input.
#[derive(Clone, Debug)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    /// YYYY-MM-DD
    pub date_of_birth: String,
    pub blood_group: BloodGroup,
    /// Emergency contact phone number
    pub emergency_contact: String,
    /// Exactly 4 decimal digits
    pub pin: String,
}

/// Input for appending a prescription.
#[derive(Clone, Debug)]
pub struct NewPrescription {
    pub medication: String,
    pub dosage: String,
    pub prescribed_by: String,
    /// YYYY-MM-DD
    pub prescribed_date: String,
    pub duration: String,
    pub status: PrescriptionStatus,
}

/// Input for appending an appointment.
#[derive(Clone, Debug)]
pub struct NewAppointment {
    /// YYYY-MM-DD
    pub date: String,
    /// e.g. "10:00 AM"
    pub time: String,
    pub doctor: String,
    pub department: String,
    pub status: AppointmentStatus,
}

/// Sole authority over the four persisted collections.
///
/// Stateless between calls apart from the collections themselves: every
/// operation reads the whole affected collection from storage, mutates
/// it in memory, and writes it back. Writes that span collections (such
/// as [`register`]) are not atomic — a storage failure between blobs can
/// leave them inconsistent, which is an accepted limitation of the
/// system being reproduced.
///
/// [`register`]: PatientRecordStore::register
#[derive(Clone, Debug)]
pub struct PatientRecordStore<S: CardStorage> {
    storage: S,
}

impl<S: CardStorage> PatientRecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Gives the backend back, consuming the store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Ensures all four collections exist, defaulting each absent one to
    /// an empty mapping. Idempotent; existing collections are untouched.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        for key in [
            PATIENTS_KEY,
            MEDICAL_RECORDS_KEY,
            PRESCRIPTIONS_KEY,
            APPOINTMENTS_KEY,
        ] {
            if self.storage.read(key)?.is_none() {
                self.storage.write(key, "{}")?;
                debug!(key, "initialized empty collection");
            }
        }
        Ok(())
    }

    /// Registers a new patient and returns the issued card ID.
    ///
    /// Fails with [`StoreError::InvalidPin`] unless the PIN is exactly 4
    /// decimal digits. The card ID is derived from the current
    /// millisecond timestamp (`MC` + its last six digits) and is *not*
    /// checked for collisions — a collision silently overwrites the
    /// previous holder. Known gap, preserved from the source system.
    pub fn register(&mut self, input: RegisterInput) -> Result<String, StoreError> {
        if !is_valid_pin(&input.pin) {
            warn!("registration rejected: malformed PIN");
            return Err(StoreError::InvalidPin);
        }

        let now = Utc::now();
        let card_id = format!("MC{:06}", now.timestamp_millis() % 1_000_000);

        let patient = Patient {
            card_id: card_id.clone(),
            pin: input.pin,
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            blood_group: input.blood_group,
            emergency_contact: input.emergency_contact,
            registered_date: now,
        };

        let mut patients: BTreeMap<String, Patient> = self.read_collection(PATIENTS_KEY)?;
        patients.insert(card_id.clone(), patient);
        self.write_collection(PATIENTS_KEY, &patients)?;

        // One empty list per collection so later reads need no special
        // casing for freshly registered patients.
        self.insert_empty_list::<MedicalRecord>(MEDICAL_RECORDS_KEY, &card_id)?;
        self.insert_empty_list::<Prescription>(PRESCRIPTIONS_KEY, &card_id)?;
        self.insert_empty_list::<Appointment>(APPOINTMENTS_KEY, &card_id)?;

        info!(%card_id, "registered patient");
        Ok(card_id)
    }

    /// Looks up the card and compares the PIN with case-sensitive string
    /// equality. No lockout, no rate limiting, no hashing — the
    /// plain-text comparison is the contract being reproduced.
    pub fn authenticate(&self, card_id: &str, pin: &str) -> Result<Patient, StoreError> {
        let patients: BTreeMap<String, Patient> = self.read_collection(PATIENTS_KEY)?;
        match patients.get(card_id) {
            Some(patient) if patient.pin == pin => {
                debug!(%card_id, "authenticated");
                Ok(patient.clone())
            }
            _ => {
                warn!(%card_id, "authentication failed");
                Err(StoreError::AuthFailed)
            }
        }
    }

    /// The patient's medical history in insertion order; empty if none.
    pub fn list_medical_history(&self, card_id: &str) -> Result<Vec<MedicalRecord>, StoreError> {
        self.read_patient_list(MEDICAL_RECORDS_KEY, card_id)
    }

    /// The patient's prescriptions in insertion order; empty if none.
    pub fn list_prescriptions(&self, card_id: &str) -> Result<Vec<Prescription>, StoreError> {
        self.read_patient_list(PRESCRIPTIONS_KEY, card_id)
    }

    /// The patient's appointments in insertion order; empty if none.
    pub fn list_appointments(&self, card_id: &str) -> Result<Vec<Appointment>, StoreError> {
        self.read_patient_list(APPOINTMENTS_KEY, card_id)
    }

    /// Appends a medical record and returns it.
    ///
    /// The id is derived from the current microsecond timestamp, bumped
    /// past the patient's last id, so ids stay unique and strictly
    /// increasing within a process even for back-to-back calls.
    pub fn add_medical_record(
        &mut self,
        card_id: &str,
        date: &str,
        condition: &str,
        doctor: &str,
        notes: Option<&str>,
    ) -> Result<MedicalRecord, StoreError> {
        let mut records: BTreeMap<String, Vec<MedicalRecord>> =
            self.read_collection(MEDICAL_RECORDS_KEY)?;
        let list = records.entry(card_id.to_string()).or_default();

        let record = MedicalRecord {
            id: next_entry_id(list.last().map(|r| r.id)),
            date: date.to_string(),
            condition: condition.to_string(),
            doctor: doctor.to_string(),
            notes: notes.map(str::to_string),
        };
        list.push(record.clone());
        self.write_collection(MEDICAL_RECORDS_KEY, &records)?;

        info!(%card_id, record_id = record.id, "added medical record");
        Ok(record)
    }

    /// Appends a prescription and returns it. Same id contract as
    /// [`add_medical_record`](PatientRecordStore::add_medical_record).
    pub fn add_prescription(
        &mut self,
        card_id: &str,
        input: NewPrescription,
    ) -> Result<Prescription, StoreError> {
        let mut prescriptions: BTreeMap<String, Vec<Prescription>> =
            self.read_collection(PRESCRIPTIONS_KEY)?;
        let list = prescriptions.entry(card_id.to_string()).or_default();

        let prescription = Prescription {
            id: next_entry_id(list.last().map(|p| p.id)),
            medication: input.medication,
            dosage: input.dosage,
            prescribed_by: input.prescribed_by,
            prescribed_date: input.prescribed_date,
            duration: input.duration,
            status: input.status,
        };
        list.push(prescription.clone());
        self.write_collection(PRESCRIPTIONS_KEY, &prescriptions)?;

        info!(%card_id, prescription_id = prescription.id, "added prescription");
        Ok(prescription)
    }

    /// Appends an appointment and returns it. Same id contract as
    /// [`add_medical_record`](PatientRecordStore::add_medical_record).
    pub fn add_appointment(
        &mut self,
        card_id: &str,
        input: NewAppointment,
    ) -> Result<Appointment, StoreError> {
        let mut appointments: BTreeMap<String, Vec<Appointment>> =
            self.read_collection(APPOINTMENTS_KEY)?;
        let list = appointments.entry(card_id.to_string()).or_default();

        let appointment = Appointment {
            id: next_entry_id(list.last().map(|a| a.id)),
            date: input.date,
            time: input.time,
            doctor: input.doctor,
            department: input.department,
            status: input.status,
        };
        list.push(appointment.clone());
        self.write_collection(APPOINTMENTS_KEY, &appointments)?;

        info!(%card_id, appointment_id = appointment.id, "added appointment");
        Ok(appointment)
    }

    fn read_patient_list<T: DeserializeOwned + Clone>(
        &self,
        key: &str,
        card_id: &str,
    ) -> Result<Vec<T>, StoreError> {
        let collection: BTreeMap<String, Vec<T>> = self.read_collection(key)?;
        Ok(collection.get(card_id).cloned().unwrap_or_default())
    }

    fn insert_empty_list<T: Serialize + DeserializeOwned>(
        &mut self,
        key: &str,
        card_id: &str,
    ) -> Result<(), StoreError> {
        let mut collection: BTreeMap<String, Vec<T>> = self.read_collection(key)?;
        collection.insert(card_id.to_string(), Vec::new());
        self.write_collection(key, &collection)
    }

    pub(crate) fn read_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<BTreeMap<String, T>, StoreError> {
        match self.storage.read(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BTreeMap::new()),
        }
    }

    pub(crate) fn write_collection<T: Serialize>(
        &mut self,
        key: &str,
        collection: &BTreeMap<String, T>,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(collection)?;
        self.storage.write(key, &raw)?;
        Ok(())
    }
}

/// Time-derived entry id: the current microsecond timestamp, or one past
/// the previous id when the clock has not advanced beyond it.
fn next_entry_id(last: Option<i64>) -> i64 {
    let now = Utc::now().timestamp_micros();
    match last {
        Some(last) if now <= last => last + 1,
        _ => now,
    }
}
