//! Input format checks applied at registration.
//!
//! Deliberately trivial: the system being reproduced does no validation
//! beyond these shape checks.

/// A PIN is exactly 4 ASCII decimal digits.
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit())
}

/// Basic YYYY-MM-DD shape check. Does not validate the calendar
/// (2024-99-99 passes); that matches the source system.
pub fn is_valid_date_format(date: &str) -> bool {
    if date.len() != 10 {
        return false;
    }
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    parts[0].len() == 4
        && parts[1].len() == 2
        && parts[2].len() == 2
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}
