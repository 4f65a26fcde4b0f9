use crate::domain::a002_disease::Severity;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertStatus {
    Active,
    #[serde(rename = "Under Investigation")]
    UnderInvestigation,
    Resolved,
}

impl AlertStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AlertStatus::Active => "Active",
            AlertStatus::UnderInvestigation => "Under Investigation",
            AlertStatus::Resolved => "Resolved",
        }
    }
}

/// Health alert raised for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: u32,
    pub kind: &'static str,
    pub location: &'static str,
    pub severity: Severity,
    pub status: AlertStatus,
    pub relative_time_label: &'static str,
}

impl Alert {
    /// Multi-line summary shown in the details popup.
    pub fn details_text(&self) -> String {
        format!(
            "Alert Details:\nType: {}\nLocation: {}\nSeverity: {}\nStatus: {}\nTime: {}",
            self.kind,
            self.location,
            self.severity.display_name(),
            self.status.display_name(),
            self.relative_time_label
        )
    }
}
