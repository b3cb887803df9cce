//! Appointment Tests

#[cfg(test)]
mod tests {
    use crate::{fresh_store, test_registration};
    use medicard_store::NewAppointment;
    use medicard_types::AppointmentStatus;

    fn checkup() -> NewAppointment {
        NewAppointment {
            date: "2024-10-15".to_string(),
            time: "10:00 AM".to_string(),
            doctor: "Dr. Smith".to_string(),
            department: "General Medicine".to_string(),
            status: AppointmentStatus::Scheduled,
        }
    }

    #[test]
    fn test_add_and_list_appointment() {
        let mut store = fresh_store();
        let card_id = store.register(test_registration()).unwrap();

        let created = store.add_appointment(&card_id, checkup()).unwrap();
        assert_eq!(created.department, "General Medicine");
        assert_eq!(created.status, AppointmentStatus::Scheduled);

        let listed = store.list_appointments(&card_id).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn test_appointments_keep_insertion_order() {
        let mut store = fresh_store();
        let card_id = store.register(test_registration()).unwrap();

        let first = store.add_appointment(&card_id, checkup()).unwrap();
        let mut follow_up = checkup();
        follow_up.date = "2024-11-20".to_string();
        follow_up.department = "Cardiology".to_string();
        let second = store.add_appointment(&card_id, follow_up).unwrap();

        let listed = store.list_appointments(&card_id).unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn test_seeded_appointment_matches_original_demo() {
        let mut store = fresh_store();
        store.load_sample_data().unwrap();

        let listed = store.list_appointments("MC001").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].time, "10:00 AM");
        assert_eq!(listed[0].doctor, "Dr. Smith");
        assert_eq!(listed[0].status, AppointmentStatus::Scheduled);
    }
}
