//! Patient identity and demographics.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered smart-card holder.
///
/// Created once at registration and never edited or deleted. The PIN is
/// stored and compared in plain text; that is the contract of the system
/// being reproduced, not an oversight worth fixing silently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique card identifier, issued at registration (e.g. "MC001")
    pub card_id: String,
    /// Exactly 4 decimal digits, plain text
    pub pin: String,
    pub first_name: String,
    pub last_name: String,
    /// YYYY-MM-DD
    pub date_of_birth: String,
    pub blood_group: BloodGroup,
    /// Emergency contact phone number
    pub emergency_contact: String,
    pub registered_date: DateTime<Utc>,
}

impl Patient {
    /// Full display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// ABO/Rh blood group.
///
/// Serialized as the clinical shorthand ("A+", "O-", ...) so stored
/// patients carry the same strings the original application did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// Clinical shorthand for this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized blood group: '{0}'")]
pub struct BloodGroupParseError(pub String);

impl FromStr for BloodGroup {
    type Err = BloodGroupParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(BloodGroup::APositive),
            "A-" => Ok(BloodGroup::ANegative),
            "B+" => Ok(BloodGroup::BPositive),
            "B-" => Ok(BloodGroup::BNegative),
            "AB+" => Ok(BloodGroup::AbPositive),
            "AB-" => Ok(BloodGroup::AbNegative),
            "O+" => Ok(BloodGroup::OPositive),
            "O-" => Ok(BloodGroup::ONegative),
            other => Err(BloodGroupParseError(other.to_string())),
        }
    }
}

/// The subset of patient data shown on the emergency screen.
///
/// A derived view over [`Patient`]; it never touches storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyInfo {
    pub name: String,
    pub card_id: String,
    pub date_of_birth: String,
    pub blood_group: BloodGroup,
    pub emergency_contact: String,
}

impl From<&Patient> for EmergencyInfo {
    fn from(patient: &Patient) -> Self {
        EmergencyInfo {
            name: patient.full_name(),
            card_id: patient.card_id.clone(),
            date_of_birth: patient.date_of_birth.clone(),
            blood_group: patient.blood_group,
            emergency_contact: patient.emergency_contact.clone(),
        }
    }
}
