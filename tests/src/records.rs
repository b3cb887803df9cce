//! Medical History Tests
//!
//! Append/list contract: insertion order, generated ids, optional
//! notes, and initialize() idempotence over existing data.

#[cfg(test)]
mod tests {
    use crate::{fresh_store, test_registration};

    #[test]
    fn test_single_record_round_trip() {
        let mut store = fresh_store();
        let card_id = store.register(test_registration()).unwrap();

        let created = store
            .add_medical_record(&card_id, "2024-01-01", "Flu", "Dr. A", Some("rest"))
            .unwrap();

        let history = store.list_medical_history(&card_id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], created);
        assert_eq!(history[0].date, "2024-01-01");
        assert_eq!(history[0].condition, "Flu");
        assert_eq!(history[0].doctor, "Dr. A");
        assert_eq!(history[0].notes.as_deref(), Some("rest"));
        assert!(history[0].id > 0);
    }

    #[test]
    fn test_sequential_adds_preserve_insertion_order() {
        let mut store = fresh_store();
        let card_id = store.register(test_registration()).unwrap();

        let first = store
            .add_medical_record(&card_id, "2024-01-01", "Flu", "Dr. A", None)
            .unwrap();
        let second = store
            .add_medical_record(&card_id, "2024-02-10", "Sprained ankle", "Dr. B", None)
            .unwrap();

        let history = store.list_medical_history(&card_id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, first.id);
        assert_eq!(history[1].id, second.id);
    }

    #[test]
    fn test_record_ids_strictly_increase() {
        let mut store = fresh_store();
        let card_id = store.register(test_registration()).unwrap();

        let mut last_id = 0;
        for i in 0..5 {
            let record = store
                .add_medical_record(&card_id, "2024-01-01", &format!("Visit {i}"), "Dr. A", None)
                .unwrap();
            assert!(record.id > last_id);
            last_id = record.id;
        }
    }

    #[test]
    fn test_notes_are_optional() {
        let mut store = fresh_store();
        let card_id = store.register(test_registration()).unwrap();
        let record = store
            .add_medical_record(&card_id, "2024-01-01", "Checkup", "Dr. A", None)
            .unwrap();
        assert!(record.notes.is_none());
        assert!(store.list_medical_history(&card_id).unwrap()[0].notes.is_none());
    }

    #[test]
    fn test_records_are_per_patient() {
        let mut store = fresh_store();
        store.load_sample_data().unwrap();
        let card_id = store.register(test_registration()).unwrap();

        store
            .add_medical_record(&card_id, "2024-05-05", "Allergy test", "Dr. C", None)
            .unwrap();

        // The seeded patient's history is untouched.
        let seeded = store.list_medical_history("MC001").unwrap();
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].condition, "Annual Checkup");
        assert_eq!(store.list_medical_history(&card_id).unwrap().len(), 1);
    }

    #[test]
    fn test_initialize_preserves_existing_records() {
        let mut store = fresh_store();
        let card_id = store.register(test_registration()).unwrap();
        store
            .add_medical_record(&card_id, "2024-01-01", "Flu", "Dr. A", None)
            .unwrap();

        store.initialize().unwrap();
        store.initialize().unwrap();

        assert_eq!(store.list_medical_history(&card_id).unwrap().len(), 1);
        assert!(store.authenticate(&card_id, "1234").is_ok());
    }
}
