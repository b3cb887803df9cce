//! Medicard patient record store
//!
//! Sole authority over the four persisted collections (`patients`,
//! `medicalRecords`, `prescriptions`, `appointments`) of the smart-card
//! demo: register with a 4-digit PIN, authenticate, and read or append
//! per-patient medical history, prescriptions, and appointments.
//!
//! Storage is any [`CardStorage`] backend; each collection is one JSON
//! blob that every write reads, mutates in memory, and writes back.
//! There is no transaction across collections, no concurrency, and no
//! real security — PINs are stored and compared in plain text. All three
//! are deliberate: this library reproduces the source system's contract,
//! and its known gaps are documented rather than silently fixed.
//!
//! # Example
//!
//! ```rust
//! use medicard_storage::MemoryStorage;
//! use medicard_store::{PatientRecordStore, RegisterInput, Session};
//! use medicard_types::BloodGroup;
//!
//! let mut store = PatientRecordStore::new(MemoryStorage::new());
//! store.initialize().unwrap();
//!
//! let card_id = store
//!     .register(RegisterInput {
//!         first_name: "Jane".into(),
//!         last_name: "Doe".into(),
//!         date_of_birth: "1985-06-02".into(),
//!         blood_group: BloodGroup::ANegative,
//!         emergency_contact: "+1-555-0199".into(),
//!         pin: "4321".into(),
//!     })
//!     .unwrap();
//!
//! let session = Session::login(&store, &card_id, "4321").unwrap();
//! assert_eq!(session.patient().first_name, "Jane");
//! assert!(store.list_medical_history(&card_id).unwrap().is_empty());
//! ```

pub mod error;
pub mod sample;
pub mod session;
pub mod store;

pub use error::StoreError;
pub use sample::{SAMPLE_CARD_ID, SAMPLE_PIN};
pub use session::Session;
pub use store::{
    NewAppointment, NewPrescription, PatientRecordStore, RegisterInput, APPOINTMENTS_KEY,
    MEDICAL_RECORDS_KEY, PATIENTS_KEY, PRESCRIPTIONS_KEY,
};

// Re-exported so callers only need this crate plus a backend.
pub use medicard_storage::CardStorage;
