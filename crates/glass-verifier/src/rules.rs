//! Fixed myth patterns and the text tests used by lookup-backed checks

use crate::config::VerifierConfig;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SUN_ORBITS_EARTH: Regex =
        Regex::new(r"(?i)\bthe\s+sun\s+(?:orbits|revolves)\s+(?:around\s+)?the\s+earth\b").unwrap();
    static ref FLAT_EARTH: Regex = Regex::new(r"(?i)\bearth\b.*\bis\s+flat\b").unwrap();
    static ref EVEREST: Regex = Regex::new(r"(?i)\bmount\s+everest\b").unwrap();
    static ref METRES: Regex =
        Regex::new(r"(?i)(\d{1,3}(?:,\d{3})+|\d{4,})\s*(?:m|meters|metres)\b").unwrap();
    static ref NIGERIA_OIL: Regex = Regex::new(
        r"(?i)\bnigeria\b.*\b15\s*(?:%|percent\b).*\b(?:world|global)\b.*\boil\b.*\bexports?\b"
    )
    .unwrap();

    static ref DEATH_CLAIM: Regex =
        Regex::new(r"(?i)^\s*([A-Z][A-Za-z\s.'-]{1,80}?)\s+(?:is|was)\s+(?:dead|died)\b").unwrap();
    // "born 1971", "born June 28, 1971", "born 28 June 1971"
    static ref BIRTH_MARKER: Regex = Regex::new(r"(?i)\bborn\b[\w\s,]{0,20}?\b\d{4}\b").unwrap();
    static ref DEATH_MARKER: Regex = Regex::new(r"(?i)\b(?:died|death)\b").unwrap();

    static ref ABSOLUTIST: Regex = Regex::new(
        r"(?i)\b(?:only|always|never|largest|biggest|top|all\s+time|ever|dead|died|killed|flat|orbits|revolves)\b|\b100\s*%"
    )
    .unwrap();
    static ref CONTENT_TOKEN: Regex = Regex::new(r"[a-z0-9%]+").unwrap();
}

/// A curated textbook myth recognised without any lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MythRule {
    /// The sun orbits (or revolves around) the earth
    SunOrbitsEarth,
    /// The earth is flat
    FlatEarth,
    /// Mount Everest height outside the plausible range
    EverestHeight,
    /// Nigeria supplies 15% of world oil exports
    NigeriaOilExports,
}

impl MythRule {
    /// Short reason shown next to a highlight
    pub fn note(&self) -> &'static str {
        match self {
            MythRule::SunOrbitsEarth => "rule: geocentric myth",
            MythRule::FlatEarth => "rule: flat-earth pattern",
            MythRule::EverestHeight => "rule: Everest height out of range",
            MythRule::NigeriaOilExports => "rule: Nigeria oil-export figure",
        }
    }

    /// First rule matching `text`, in fixed priority order
    pub fn find(text: &str, config: &VerifierConfig) -> Option<MythRule> {
        if SUN_ORBITS_EARTH.is_match(text) {
            return Some(MythRule::SunOrbitsEarth);
        }
        if FLAT_EARTH.is_match(text) {
            return Some(MythRule::FlatEarth);
        }
        if EVEREST.is_match(text) && everest_out_of_range(text, config) {
            return Some(MythRule::EverestHeight);
        }
        if NIGERIA_OIL.is_match(text) {
            return Some(MythRule::NigeriaOilExports);
        }
        None
    }
}

/// Whether the first metre figure in `text` lies outside the plausible range
fn everest_out_of_range(text: &str, config: &VerifierConfig) -> bool {
    let Some(caps) = METRES.captures(text) else {
        return false;
    };
    let digits: String = caps[1].chars().filter(|c| *c != ',').collect();
    match digits.parse::<f64>() {
        Ok(metres) => metres < config.everest_min_m || metres > config.everest_max_m,
        Err(_) => false,
    }
}

/// Subject of a "<Subject> is/was dead/died" claim
pub fn death_subject(text: &str) -> Option<&str> {
    DEATH_CLAIM
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|subject| !subject.is_empty())
}

/// A summary with a birth year and no mention of death describes a living person
pub fn is_presumed_alive(summary: &str) -> bool {
    BIRTH_MARKER.is_match(summary) && !DEATH_MARKER.is_match(summary)
}

/// Whether the text makes an absolute or high-signal claim
pub fn is_absolutist(text: &str) -> bool {
    ABSOLUTIST.is_match(text)
}

/// Lowercased `[a-z0-9%]` tokens longer than three characters, in order
pub fn content_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    CONTENT_TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

/// Fraction of `words` that occur anywhere in `summary` (case-folded)
///
/// Returns 0.0 for an empty word list.
pub fn coverage(words: &[String], summary: &str) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let summary = summary.to_lowercase();
    let found = words.iter().filter(|w| summary.contains(w.as_str())).count();
    found as f64 / words.len() as f64
}

/// First `max_chars` characters of `text`
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((at, _)) => &text[..at],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str) -> Option<MythRule> {
        MythRule::find(text, &VerifierConfig::default())
    }

    #[test]
    fn test_geocentric_variants() {
        assert_eq!(find("The sun orbits the earth."), Some(MythRule::SunOrbitsEarth));
        assert_eq!(
            find("Clearly the Sun revolves around the Earth every day."),
            Some(MythRule::SunOrbitsEarth)
        );
        assert_eq!(find("The earth orbits the sun."), None);
    }

    #[test]
    fn test_flat_earth() {
        assert_eq!(find("The earth is flat and everyone knows it."), Some(MythRule::FlatEarth));
        assert_eq!(find("This road is flat."), None);
    }

    #[test]
    fn test_everest_height_bounds() {
        assert_eq!(find("Mount Everest is 12,000 m tall."), Some(MythRule::EverestHeight));
        assert_eq!(find("Mount Everest is 3000 metres high."), Some(MythRule::EverestHeight));
        assert_eq!(find("Mount Everest is 8,849 m tall."), None);
        assert_eq!(find("Mount Everest is very tall."), None);
        // Boundaries are plausible
        assert_eq!(find("Mount Everest is 10,000 m tall."), None);
        assert_eq!(find("Mount Everest is 5000 m tall."), None);
    }

    #[test]
    fn test_nigeria_pattern() {
        assert_eq!(
            find("Nigeria provides 15% of the world's oil exports."),
            Some(MythRule::NigeriaOilExports)
        );
        assert_eq!(
            find("Nigeria has 15 percent of global oil export volume."),
            Some(MythRule::NigeriaOilExports)
        );
        assert_eq!(find("Nigeria has 150% of world oil exports."), None);
    }

    #[test]
    fn test_rule_priority() {
        // Both the geocentric and the flat-earth patterns match
        let text = "The sun orbits the earth because the earth is flat.";
        assert_eq!(find(text), Some(MythRule::SunOrbitsEarth));
    }

    #[test]
    fn test_notes_fit_label_width() {
        for rule in [
            MythRule::SunOrbitsEarth,
            MythRule::FlatEarth,
            MythRule::EverestHeight,
            MythRule::NigeriaOilExports,
        ] {
            assert!(rule.note().chars().count() <= 36);
        }
    }

    #[test]
    fn test_death_subject() {
        assert_eq!(death_subject("Elon Musk is dead."), Some("Elon Musk"));
        assert_eq!(death_subject("  Queen Victoria was dead by 1901."), Some("Queen Victoria"));
        assert_eq!(death_subject("Reports say Elon Musk is dead."), Some("Reports say Elon Musk"));
        assert_eq!(death_subject("He is deadly serious."), None);
        assert_eq!(death_subject("The plan is alive."), None);
    }

    #[test]
    fn test_presumed_alive() {
        assert!(is_presumed_alive("Elon Musk (born 1971) is a businessman."));
        assert!(is_presumed_alive("Elon Reeve Musk (born June 28, 1971) is a businessman."));
        assert!(!is_presumed_alive("Queen Victoria (born 1819) died in 1901."));
        assert!(!is_presumed_alive("A town in England."));
    }

    #[test]
    fn test_absolutist_terms() {
        assert!(is_absolutist("This is the largest lake."));
        assert!(is_absolutist("The best album of all time."));
        assert!(is_absolutist("It is 100% safe."));
        assert!(!is_absolutist("Every town has a square."));
        assert!(!is_absolutist("The shop will stop trading."));
    }

    #[test]
    fn test_content_words() {
        let words = content_words("The Amazon is the ONLY river with 100% fresh water.");
        assert_eq!(words, vec!["amazon", "only", "river", "with", "100%", "fresh", "water"]);
    }

    #[test]
    fn test_coverage() {
        let words: Vec<String> = ["amazon", "river", "pink", "dolphins"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!((coverage(&words, "The Amazon River is in South America.") - 0.5).abs() < 1e-9);
        assert_eq!(coverage(&[], "anything"), 0.0);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 10), "hi");
    }
}
