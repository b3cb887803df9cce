//! Persistence Tests
//!
//! The file-backed storage contract: data survives reopening, the four
//! fixed keys hold camelCase JSON blobs, and damaged blobs surface as
//! errors without touching the process.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::test_registration;
    use medicard_storage::{CardStorage, JsonFileStorage, MemoryStorage};
    use medicard_store::{
        PatientRecordStore, StoreError, APPOINTMENTS_KEY, MEDICAL_RECORDS_KEY, PATIENTS_KEY,
        PRESCRIPTIONS_KEY,
    };

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("medicard-tests-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let path = temp_file("reopen");
        let _ = fs::remove_file(&path);

        let mut store = PatientRecordStore::new(JsonFileStorage::new(&path));
        store.initialize().unwrap();
        let card_id = store.register(test_registration()).unwrap();
        store
            .add_medical_record(&card_id, "2024-01-01", "Flu", "Dr. A", Some("rest"))
            .unwrap();
        drop(store);

        let mut reopened = PatientRecordStore::new(JsonFileStorage::new(&path));
        reopened.initialize().unwrap();
        let patient = reopened.authenticate(&card_id, "1234").unwrap();
        assert_eq!(patient.first_name, "Alice");
        let history = reopened.list_medical_history(&card_id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].condition, "Flu");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_initialize_creates_all_four_keys() {
        let mut store = PatientRecordStore::new(MemoryStorage::new());
        store.initialize().unwrap();
        let storage = store.into_storage();
        for key in [
            PATIENTS_KEY,
            MEDICAL_RECORDS_KEY,
            PRESCRIPTIONS_KEY,
            APPOINTMENTS_KEY,
        ] {
            assert_eq!(storage.read(key).unwrap().as_deref(), Some("{}"));
        }
    }

    #[test]
    fn test_persisted_blob_uses_original_camel_case_format() {
        let mut store = PatientRecordStore::new(MemoryStorage::new());
        store.initialize().unwrap();
        let card_id = store.register(test_registration()).unwrap();

        let storage = store.into_storage();
        let raw = storage.read(PATIENTS_KEY).unwrap().unwrap();
        let blob: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let patient = &blob[&card_id];
        assert_eq!(patient["cardId"], card_id);
        assert_eq!(patient["firstName"], "Alice");
        assert_eq!(patient["dateOfBirth"], "1990-01-01");
        assert_eq!(patient["bloodGroup"], "A+");
        assert_eq!(patient["pin"], "1234"); // plain text, by contract
        assert!(patient["registeredDate"].is_string());
    }

    #[test]
    fn test_damaged_blob_surfaces_as_serialization_error() {
        let mut storage = MemoryStorage::new();
        storage.write(PATIENTS_KEY, "[]").unwrap();

        let store = PatientRecordStore::new(storage);
        assert!(matches!(
            store.authenticate("MC001", "1234"),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_collections_persist_independently() {
        // Writing records must not rewrite the patients blob; the four
        // collections are separate values with no shared transaction.
        let mut store = PatientRecordStore::new(MemoryStorage::new());
        store.initialize().unwrap();
        let card_id = store.register(test_registration()).unwrap();

        let before = store.into_storage();
        let patients_before = before.read(PATIENTS_KEY).unwrap();

        let mut store = PatientRecordStore::new(before);
        store
            .add_medical_record(&card_id, "2024-01-01", "Flu", "Dr. A", None)
            .unwrap();

        let after = store.into_storage();
        assert_eq!(after.read(PATIENTS_KEY).unwrap(), patients_before);
        assert_ne!(after.read(MEDICAL_RECORDS_KEY).unwrap().as_deref(), Some("{}"));
    }
}
