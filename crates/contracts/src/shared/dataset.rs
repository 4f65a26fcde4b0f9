//! Static reference data shown across the dashboards.
//!
//! Nothing here is mutated at runtime; the live counters on the dashboards
//! start from the totals computed below and drift from there.

use crate::domain::a001_region::Region;
use crate::domain::a002_disease::{DiseaseRecord, Severity, Trend};
use crate::domain::a003_water_quality::WaterQualityParameter;
use crate::domain::a004_alert::{Alert, AlertStatus};

pub const NORTHEAST_STATES: &[Region] = &[
    Region {
        name: "Assam",
        population: 31_200_000,
        village_count: 26_247,
        active_cases: 1_250,
        water_quality_issues: 450,
    },
    Region {
        name: "Meghalaya",
        population: 3_000_000,
        village_count: 6_026,
        active_cases: 340,
        water_quality_issues: 180,
    },
    Region {
        name: "Manipur",
        population: 2_900_000,
        village_count: 2_391,
        active_cases: 180,
        water_quality_issues: 95,
    },
    Region {
        name: "Mizoram",
        population: 1_100_000,
        village_count: 830,
        active_cases: 75,
        water_quality_issues: 40,
    },
    Region {
        name: "Nagaland",
        population: 2_000_000,
        village_count: 1_428,
        active_cases: 120,
        water_quality_issues: 60,
    },
    Region {
        name: "Tripura",
        population: 3_700_000,
        village_count: 875,
        active_cases: 290,
        water_quality_issues: 110,
    },
    Region {
        name: "Arunachal Pradesh",
        population: 1_400_000,
        village_count: 5_093,
        active_cases: 85,
        water_quality_issues: 55,
    },
    Region {
        name: "Sikkim",
        population: 610_000,
        village_count: 451,
        active_cases: 25,
        water_quality_issues: 15,
    },
];

pub const DISEASES: &[DiseaseRecord] = &[
    DiseaseRecord {
        name: "Diarrhea",
        case_count: 1_580,
        trend: Trend::Increasing,
        severity: Severity::High,
    },
    DiseaseRecord {
        name: "Cholera",
        case_count: 245,
        trend: Trend::Stable,
        severity: Severity::Critical,
    },
    DiseaseRecord {
        name: "Typhoid",
        case_count: 420,
        trend: Trend::Decreasing,
        severity: Severity::Medium,
    },
    DiseaseRecord {
        name: "Hepatitis A",
        case_count: 120,
        trend: Trend::Stable,
        severity: Severity::Medium,
    },
];

pub const WATER_QUALITY_PARAMETERS: &[WaterQualityParameter] = &[
    WaterQualityParameter {
        parameter_name: "pH",
        safe_range_description: "6.5-8.5",
        current_average: 7.2,
        safe_limit: 7.5,
    },
    WaterQualityParameter {
        parameter_name: "Turbidity",
        safe_range_description: "<1 NTU",
        current_average: 1.8,
        safe_limit: 1.0,
    },
    WaterQualityParameter {
        parameter_name: "Chlorine",
        safe_range_description: "0.2-1.0 mg/L",
        current_average: 0.4,
        safe_limit: 0.6,
    },
    WaterQualityParameter {
        parameter_name: "E.coli",
        safe_range_description: "0 CFU/100ml",
        current_average: 12.0,
        safe_limit: 0.0,
    },
];

pub const ALERTS: &[Alert] = &[
    Alert {
        id: 1,
        kind: "Disease Outbreak",
        location: "Dibrugarh, Assam",
        severity: Severity::Critical,
        status: AlertStatus::Active,
        relative_time_label: "2 hours ago",
    },
    Alert {
        id: 2,
        kind: "Water Contamination",
        location: "Shillong, Meghalaya",
        severity: Severity::High,
        status: AlertStatus::UnderInvestigation,
        relative_time_label: "5 hours ago",
    },
    Alert {
        id: 3,
        kind: "Resource Shortage",
        location: "Imphal, Manipur",
        severity: Severity::Medium,
        status: AlertStatus::Resolved,
        relative_time_label: "1 day ago",
    },
];

/// Learning module card in the education view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationModule {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const EDUCATION_MODULES: &[EducationModule] = &[
    EducationModule {
        title: "Safe Drinking Water",
        summary: "Boiling, filtering and storing water at home.",
    },
    EducationModule {
        title: "Hand Hygiene",
        summary: "When and how to wash hands to stop diarrheal disease.",
    },
    EducationModule {
        title: "Recognising Cholera",
        summary: "Early symptoms, oral rehydration and referral.",
    },
    EducationModule {
        title: "Sanitation Practices",
        summary: "Latrine use and keeping water sources clean.",
    },
];

/// Initial value of the active health workers counter.
pub const ACTIVE_WORKERS_BASELINE: i64 = 37_500;

/// Finds a state by a case-insensitive fragment of its name.
pub fn find_state(needle: &str) -> Option<&'static Region> {
    NORTHEAST_STATES.iter().find(|s| s.matches(needle))
}

pub fn find_alert(id: u32) -> Option<&'static Alert> {
    ALERTS.iter().find(|a| a.id == id)
}

pub fn total_active_cases() -> i64 {
    NORTHEAST_STATES.iter().map(|s| s.active_cases as i64).sum()
}

pub fn total_water_issues() -> i64 {
    NORTHEAST_STATES.iter().map(|s| s.water_quality_issues as i64).sum()
}

pub fn active_alert_count() -> usize {
    ALERTS
        .iter()
        .filter(|a| a.status != AlertStatus::Resolved)
        .count()
}

/// Text of the state details popup.
pub fn state_details_text(region: &Region) -> String {
    format!(
        "{} Details:\nPopulation: {}\nVillages: {}\nActive Cases: {}\nWater Quality Issues: {}",
        region.name,
        format_thousands(region.population as i64),
        region.village_count,
        region.active_cases,
        region.water_quality_issues
    )
}

/// Formats an integer with comma thousands separators (`37,000`).
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alert_ids_are_unique() {
        let ids: HashSet<u32> = ALERTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ALERTS.len());
    }

    #[test]
    fn find_state_by_fragment() {
        assert_eq!(find_state("assam").map(|s| s.name), Some("Assam"));
        assert_eq!(find_state("Arunachal").map(|s| s.name), Some("Arunachal Pradesh"));
        assert!(find_state("goa").is_none());
        assert!(find_state("").is_none());
    }

    #[test]
    fn find_alert_missing_id_is_none() {
        assert_eq!(find_alert(2).map(|a| a.kind), Some("Water Contamination"));
        assert!(find_alert(42).is_none());
    }

    #[test]
    fn totals_match_regions() {
        assert_eq!(total_active_cases(), 2_365);
        assert_eq!(total_water_issues(), 1_005);
        assert_eq!(active_alert_count(), 2);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(37_000), "37,000");
        assert_eq!(format_thousands(31_200_000), "31,200,000");
        assert_eq!(format_thousands(-1_234), "-1,234");
    }

    #[test]
    fn state_details_lists_all_fields() {
        let text = state_details_text(&NORTHEAST_STATES[1]);
        assert_eq!(
            text,
            "Meghalaya Details:\nPopulation: 3,000,000\nVillages: 6026\nActive Cases: 340\nWater Quality Issues: 180"
        );
    }
}
