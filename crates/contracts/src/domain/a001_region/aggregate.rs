use serde::Serialize;

/// Administrative region with aggregated health statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub population: u64,
    pub village_count: u32,
    pub active_cases: u32,
    pub water_quality_issues: u32,
}

impl Region {
    /// Matches a short state code such as `"assam"` or `"arunachal"`
    /// against the region name, ignoring case.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        !needle.is_empty() && self.name.to_lowercase().contains(&needle)
    }
}
