//! Static translation tables for the dashboard chrome.
//!
//! Lookup never falls back to another language: a missing language or key
//! yields `None` and the caller keeps whatever text it already shows.

/// (key, text) pairs for one language.
pub type Dictionary = &'static [(&'static str, &'static str)];

const EN: Dictionary = &[
    ("dashboard", "Dashboard"),
    ("alerts", "Alerts"),
    ("water_quality", "Water Quality"),
    ("education", "Education"),
    ("predictions", "Predictions"),
    ("symptom_reporting", "Symptom Reporting"),
    ("patient_name", "Patient Name"),
    ("age", "Age"),
    ("symptoms", "Symptoms"),
    ("submit_report", "Submit Report"),
    ("cancel", "Cancel"),
];

const HI: Dictionary = &[
    ("dashboard", "डैशबोर्ड"),
    ("alerts", "अलर्ट"),
    ("water_quality", "पानी की गुणवत्ता"),
    ("education", "शिक्षा"),
    ("predictions", "भविष्यवाणी"),
    ("symptom_reporting", "लक्षण रिपोर्टिंग"),
    ("patient_name", "मरीज़ का नाम"),
    ("age", "उम्र"),
    ("symptoms", "लक्षण"),
    ("submit_report", "रिपोर्ट जमा करें"),
    ("cancel", "रद्द करें"),
];

const AS: Dictionary = &[
    ("dashboard", "ডেশ্চবৰ্ড"),
    ("alerts", "সতৰ্কবাণী"),
    ("water_quality", "পানীৰ গুণগত মান"),
    ("education", "শিক্ষা"),
    ("predictions", "পূৰ্বাভাস"),
    ("symptom_reporting", "লক্ষণ প্ৰতিবেদন"),
    ("patient_name", "ৰোগীৰ নাম"),
    ("age", "বয়স"),
    ("symptoms", "লক্ষণ"),
    ("submit_report", "প্ৰতিবেদন দাখিল কৰক"),
    ("cancel", "বাতিল"),
];

const BN: Dictionary = &[
    ("dashboard", "ড্যাশবোর্ড"),
    ("alerts", "সতর্কতা"),
    ("water_quality", "পানির গুণমান"),
    ("education", "শিক্ষা"),
    ("predictions", "পূর্বাভাস"),
    ("symptom_reporting", "উপসর্গ রিপোর্টিং"),
    ("patient_name", "রোগীর নাম"),
    ("age", "বয়স"),
    ("symptoms", "উপসর্গ"),
    ("submit_report", "রিপোর্ট জমা দিন"),
    ("cancel", "বাতিল"),
];

const TABLE: &[(&str, Dictionary)] = &[("en", EN), ("hi", HI), ("as", AS), ("bn", BN)];

/// Languages offered by the selector: (code, native name).
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "हिन्दी"),
    ("as", "অসমীয়া"),
    ("bn", "বাংলা"),
];

fn dictionary(lang: &str) -> Option<Dictionary> {
    TABLE.iter().find(|(code, _)| *code == lang).map(|(_, d)| *d)
}

pub fn lookup(lang: &str, key: &str) -> Option<&'static str> {
    dictionary(lang)?
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// A piece of text bound to a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedText {
    pub key: &'static str,
    pub text: String,
}

impl TaggedText {
    /// Starts with the English text for `key`, or the key itself if absent.
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            text: lookup("en", key).unwrap_or(key).to_string(),
        }
    }

    /// Replaces the text if `lang` has a translation for this key.
    pub fn localize(&mut self, lang: &str) -> bool {
        match lookup(lang, self.key) {
            Some(text) => {
                self.text = text.to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(d: Dictionary) -> Vec<&'static str> {
        let mut k: Vec<_> = d.iter().map(|(k, _)| *k).collect();
        k.sort_unstable();
        k
    }

    #[test]
    fn all_languages_share_key_set() {
        let en = keys(EN);
        for (code, dict) in TABLE {
            assert_eq!(keys(*dict), en, "key set differs for {}", code);
        }
    }

    #[test]
    fn lookup_missing_language_or_key() {
        assert_eq!(lookup("hi", "alerts"), Some("अलर्ट"));
        assert_eq!(lookup("fr", "alerts"), None);
        assert_eq!(lookup("en", "no_such_key"), None);
    }

    /// Runs `lang` over every node the way each `Translated` effect does.
    fn switch_language(nodes: &mut [TaggedText], lang: &str) -> usize {
        nodes.iter_mut().map(|n| n.localize(lang)).filter(|changed| *changed).count()
    }

    #[test]
    fn hindi_then_english_restores_text() {
        let mut nodes: Vec<TaggedText> = EN.iter().map(|(k, _)| TaggedText::new(k)).collect();
        let original = nodes.clone();

        assert_eq!(switch_language(&mut nodes, "hi"), EN.len());
        assert_ne!(nodes, original);
        assert_eq!(nodes[0].text, "डैशबोर्ड");

        switch_language(&mut nodes, "en");
        assert_eq!(nodes, original);
    }

    #[test]
    fn every_language_round_trips_through_english() {
        for (code, _) in LANGUAGES {
            let mut node = TaggedText::new("submit_report");
            assert!(node.localize(code));
            assert!(node.localize("en"));
            assert_eq!(node.text, "Submit Report");
        }
    }

    #[test]
    fn unknown_language_leaves_text_unchanged() {
        let mut nodes = vec![TaggedText::new("dashboard"), TaggedText::new("cancel")];
        switch_language(&mut nodes, "bn");
        let before = nodes.clone();

        assert_eq!(switch_language(&mut nodes, "xx"), 0);
        assert_eq!(nodes, before);
    }

    #[test]
    fn untranslated_key_keeps_current_text() {
        let mut node = TaggedText {
            key: "brand_title",
            text: "Health Monitor".to_string(),
        };
        assert!(!node.localize("hi"));
        assert_eq!(node.text, "Health Monitor");
    }
}
