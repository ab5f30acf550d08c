//! Additive claim scoring

use crate::config::ScoreWeights;
use crate::lexicon::{ABSOLUTIST, ATTRIBUTION, CLAIM_VERB, DEATH, HEDGE, MYTH, NUMERIC};

/// Heuristic claim score of a sentence
///
/// Each signal contributes its weight at most once, however often it occurs.
///
/// # Examples
///
/// ```
/// use glass_detector::{compute_claim_score, ScoreWeights};
///
/// let w = ScoreWeights::default();
/// // length + absolutist + copula + myth
/// let score = compute_claim_score("The earth is flat and everyone knows it.", &w);
/// assert!((score - 2.9).abs() < 1e-9);
/// ```
pub fn compute_claim_score(sentence: &str, weights: &ScoreWeights) -> f64 {
    let s = sentence.trim();
    let len = s.chars().count();
    let mut score = 0.0;

    if len >= weights.reasonable_min_len && len <= weights.reasonable_max_len {
        score += weights.length;
    }
    if ABSOLUTIST.is_match(s) {
        score += weights.absolutist;
    }
    if NUMERIC.is_match(s) {
        score += weights.numeric;
    }
    if CLAIM_VERB.is_match(s) {
        score += weights.verb;
    }
    if MYTH.is_match(s) {
        score += weights.myth;
    }
    if ATTRIBUTION.is_match(s) {
        score += weights.attribution;
    }
    if HEDGE.is_match(s) {
        score += weights.hedge;
    }
    if len < weights.short_len && DEATH.is_match(s) {
        score += weights.short_death;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(s: &str) -> f64 {
        compute_claim_score(s, &ScoreWeights::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_short_death_rumor() {
        // verb 0.6 + myth 0.8 + short death 1.2, under the length window
        assert!(approx(score("Elon Musk is dead."), 2.6));
    }

    #[test]
    fn test_numeric_claim() {
        // length 0.5 + numeric 0.8 + verb 0.6
        assert!(approx(score("Mount Everest is 12000 m tall today."), 1.9));
    }

    #[test]
    fn test_attribution_softens() {
        let plain = score("The river is the largest in the region.");
        let attributed = score("According to locals, the river is the largest in the region.");
        assert!(approx(plain - attributed, 0.3));
    }

    #[test]
    fn test_hedge_penalty() {
        // length 0.5 + hedge -0.8
        assert!(approx(score("The boiling point of water can vary depending on altitude."), -0.3));
    }

    #[test]
    fn test_signal_counted_once() {
        assert!(approx(
            score("It is always, always, always the only way."),
            score("It is always the only way here, truly.")
        ));
    }

    #[test]
    fn test_absolutist_needs_whole_word() {
        // length 0.5 + numeric 0.8 + verb 0.6, no absolutist delta
        assert!(approx(score("The topic has 300 pages in the new edition."), 1.9));
        assert!(approx(score("The Allen Institute has 300 staff members in Seattle."), 1.9));
        assert!(approx(score("The allowance was 300 dollars in that year."), 1.9));
        assert!(approx(score("Everybody has 300 pages in the new edition."), 2.9));
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoreWeights {
            myth: 5.0,
            ..ScoreWeights::default()
        };
        assert!(compute_claim_score("The earth is flat.", &weights) > 5.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NEUTRAL_WORDS: &[&str] = &[
        "the", "river", "is", "green", "city", "water", "has", "many", "bridges", "42", "people",
        "according", "to", "report", "may", "change", "flat", "orbits", "north", "west",
    ];

    proptest! {
        /// Property: inserting an absolutist term never lowers the score
        #[test]
        fn test_absolutist_monotonic(
            words in proptest::collection::vec(proptest::sample::select(NEUTRAL_WORDS), 4..30),
            at in 0usize..30,
        ) {
            let base = words.join(" ");
            let mut with: Vec<&str> = words.clone();
            with.insert(at.min(words.len()), "always");
            let with = with.join(" ");

            let w = ScoreWeights::default();
            prop_assert!(compute_claim_score(&with, &w) >= compute_claim_score(&base, &w));
        }
    }
}
