use serde::Serialize;
use std::fmt;

/// Navigation entry of the main nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Alerts,
    WaterQuality,
    Education,
    Predictions,
}

impl View {
    /// Value of the `data-view` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Alerts => "alerts",
            View::WaterQuality => "water-quality",
            View::Education => "education",
            View::Predictions => "predictions",
        }
    }

    /// Translation key of the nav label.
    pub fn translation_key(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Alerts => "alerts",
            View::WaterQuality => "water_quality",
            View::Education => "education",
            View::Predictions => "predictions",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Alerts => "bell",
            View::WaterQuality => "droplet",
            View::Education => "book",
            View::Predictions => "trend",
        }
    }

    /// Nav bar order; also the order of the Ctrl+1..5 shortcuts.
    pub fn all() -> [View; 5] {
        [
            View::Dashboard,
            View::Alerts,
            View::WaterQuality,
            View::Education,
            View::Predictions,
        ]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_serialized_name() {
        for view in View::all() {
            let json = serde_json::to_value(view).unwrap();
            assert_eq!(json, serde_json::Value::String(view.code().to_string()));
        }
    }

    #[test]
    fn translation_keys_exist_in_english_table() {
        for view in View::all() {
            assert!(crate::shared::i18n::lookup("en", view.translation_key()).is_some());
        }
    }
}
