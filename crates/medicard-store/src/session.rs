//! The authenticated-patient session.
//!
//! The original application kept the logged-in patient in process-wide
//! mutable state; here the session is an explicit value owned by the
//! presentation layer. Dropping it is logging out. The store itself
//! stays stateless between calls.

use medicard_storage::CardStorage;
use medicard_types::{EmergencyInfo, Patient};

use crate::error::StoreError;
use crate::store::PatientRecordStore;

/// One authenticated patient.
#[derive(Clone, Debug)]
pub struct Session {
    patient: Patient,
}

impl Session {
    /// Authenticates against the store and returns the session on
    /// success. Fails with [`StoreError::AuthFailed`] exactly as
    /// [`PatientRecordStore::authenticate`] does.
    pub fn login<S: CardStorage>(
        store: &PatientRecordStore<S>,
        card_id: &str,
        pin: &str,
    ) -> Result<Self, StoreError> {
        let patient = store.authenticate(card_id, pin)?;
        Ok(Self { patient })
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn card_id(&self) -> &str {
        &self.patient.card_id
    }

    /// The emergency screen's view of this patient.
    pub fn emergency_info(&self) -> EmergencyInfo {
        EmergencyInfo::from(&self.patient)
    }
}
