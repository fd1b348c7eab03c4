use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a stored record. `Work` is a punch; everything else is an
/// absence or adjustment that contributes a duration instead of an interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum RecordType {
    Work,
    DayOff,
    MedicalLeave,
    BalanceAdjustment,
    Other(String),
}

impl RecordType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        match self {
            RecordType::Work => "work",
            RecordType::DayOff => "dayOff",
            RecordType::MedicalLeave => "medicalLeave",
            RecordType::BalanceAdjustment => "balanceAdjustment",
            RecordType::Other(s) => s.as_str(),
        }
    }

    /// Convert DB string → enum. Unknown tags are kept as `Other`.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "work" => RecordType::Work,
            "dayOff" => RecordType::DayOff,
            "medicalLeave" => RecordType::MedicalLeave,
            "balanceAdjustment" => RecordType::BalanceAdjustment,
            other => RecordType::Other(other.to_string()),
        }
    }

    /// Helper: convert the kebab-case names accepted by the CLI.
    pub fn from_cli(s: &str) -> Option<Self> {
        let kind = match s.to_lowercase().as_str() {
            "work" => RecordType::Work,
            "day-off" | "dayoff" => RecordType::DayOff,
            "medical-leave" | "medicalleave" => RecordType::MedicalLeave,
            "adjustment" | "balance-adjustment" | "balanceadjustment" => {
                RecordType::BalanceAdjustment
            }
            "" => return None,
            _ => RecordType::Other(s.to_string()),
        };
        Some(kind)
    }

    pub fn is_work(&self) -> bool {
        matches!(self, RecordType::Work)
    }

    pub fn label(&self) -> &str {
        match self {
            RecordType::Work => "work",
            RecordType::DayOff => "day off",
            RecordType::MedicalLeave => "medical leave",
            RecordType::BalanceAdjustment => "adjustment",
            RecordType::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        RecordType::from_db_str(&s)
    }
}

impl From<RecordType> for String {
    fn from(kind: RecordType) -> Self {
        kind.to_db_str().to_string()
    }
}
