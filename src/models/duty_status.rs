use serde::{Deserialize, Serialize};

/// Duty status of a log entry.
///
/// `Total` is the synthetic per-day aggregate row. Any status text outside
/// the known vocabulary is kept as `Unknown` so newer producers do not break
/// the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
    Total,
    Unknown(String),
}

impl DutyStatus {
    /// The four statuses that own a lane, in lane order.
    pub const LANES: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn ds_from_str(s: &str) -> Self {
        match s.trim() {
            "Off-Duty" => Self::OffDuty,
            "Sleeper Berth" => Self::SleeperBerth,
            "Driving" => Self::Driving,
            "On-Duty" | "On-Duty (Not Driving)" => Self::OnDuty,
            "Total" => Self::Total,
            _ => Self::Unknown(s.to_string()),
        }
    }

    pub fn ds_as_str(&self) -> &str {
        match self {
            DutyStatus::OffDuty => "Off-Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On-Duty",
            DutyStatus::Total => "Total",
            DutyStatus::Unknown(s) => s,
        }
    }

    /// Grid row for this status. `None` means the entry is not drawn.
    pub fn lane(&self) -> Option<usize> {
        match self {
            DutyStatus::OffDuty => Some(0),
            DutyStatus::SleeperBerth => Some(1),
            DutyStatus::Driving => Some(2),
            DutyStatus::OnDuty => Some(3),
            DutyStatus::Total | DutyStatus::Unknown(_) => None,
        }
    }

    pub fn is_total(&self) -> bool {
        matches!(self, DutyStatus::Total)
    }

    /// Fill colour used on the log sheet.
    pub fn color_hex(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "#e74c3c",
            DutyStatus::SleeperBerth => "#f39c12",
            DutyStatus::Driving => "#27ae60",
            DutyStatus::OnDuty => "#3498db",
            DutyStatus::Total | DutyStatus::Unknown(_) => "#000000",
        }
    }
}

impl From<String> for DutyStatus {
    fn from(s: String) -> Self {
        DutyStatus::ds_from_str(&s)
    }
}

impl From<DutyStatus> for String {
    fn from(s: DutyStatus) -> Self {
        s.ds_as_str().to_string()
    }
}
