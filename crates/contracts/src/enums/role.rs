use serde::Serialize;
use std::fmt;

/// Dashboard user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    AshaWorker,
    CommunityVolunteer,
    HealthOfficial,
}

impl Role {
    /// Role code, the `data-role` value of the selection button.
    pub fn code(&self) -> &'static str {
        match self {
            Role::AshaWorker => "asha-worker",
            Role::CommunityVolunteer => "community-volunteer",
            Role::HealthOfficial => "health-official",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::AshaWorker => "ASHA Worker",
            Role::CommunityVolunteer => "Community Volunteer",
            Role::HealthOfficial => "Health Official",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::AshaWorker => "Report symptoms, test water and follow up with patients",
            Role::CommunityVolunteer => "Share community health reports and organise meetings",
            Role::HealthOfficial => "Monitor the region, manage alerts and review predictions",
        }
    }

    pub fn all() -> [Role; 3] {
        [
            Role::AshaWorker,
            Role::CommunityVolunteer,
            Role::HealthOfficial,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_serialized_name() {
        for role in Role::all() {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, serde_json::Value::String(role.code().to_string()));
            assert_eq!(role.to_string(), role.code());
        }
    }
}
