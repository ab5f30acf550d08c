//! End-to-end tests for the Detector

#[cfg(test)]
mod tests {
    use crate::{Detector, DetectorConfig};
    use glass_collector::{collect, TranscriptSource};
    use glass_domain::InputMode;

    #[test]
    fn test_death_rumor_is_accepted() {
        let detector = Detector::new(DetectorConfig::default());
        let candidates = detector.segment("Elon Musk is dead. More text follows to pad length.");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "Elon Musk is dead.");
        assert_eq!(candidates[0].mode, InputMode::FullCorpus);
        assert!(detector.is_accepted(candidates[0].score, candidates[0].mode));
    }

    #[test]
    fn test_flat_earth_is_accepted() {
        let detector = Detector::default();
        let accepted = detector.accept(detector.segment("The earth is flat and everyone knows it."));
        assert_eq!(accepted.len(), 1);
    }

    #[test]
    fn test_words_starting_with_absolutist_terms_are_rejected() {
        let detector = Detector::default();
        let text = "The Allen Institute has 300 staff members in Seattle. \
                    The topic has 300 pages in the new edition.";
        let candidates = detector.segment(text);

        assert_eq!(candidates.len(), 2);
        assert!(detector.accept(candidates).is_empty());
    }

    #[test]
    fn test_hedged_claim_is_rejected() {
        let detector = Detector::default();
        let text = "The boiling point of water can vary depending on altitude.";
        assert!(detector.accept(detector.segment(text)).is_empty());

        // Even when scored directly, the hedge keeps it under the bar
        let score = crate::compute_claim_score(text, &detector.config().weights);
        assert!(!detector.is_accepted(score, InputMode::FullCorpus));
    }

    #[test]
    fn test_short_search_box_claim() {
        let detector = Detector::default();
        let candidates = detector.segment("The moon is made of cheese");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].mode, InputMode::ShortField);
        assert_eq!(candidates[0].text, "The moon is made of cheese");
    }

    #[test]
    fn test_short_field_uses_lower_threshold() {
        let detector = Detector::default();
        // length 0.5 + numeric 0.8 + verb 0.6 = 1.9: enough for a short field only
        let candidates = detector.segment("Tokyo has 37 million people");
        assert_eq!(candidates[0].mode, InputMode::ShortField);
        assert!(detector.is_accepted(candidates[0].score, InputMode::ShortField));
        assert!(!detector.is_accepted(candidates[0].score, InputMode::FullCorpus));
    }

    #[test]
    fn test_transcript_corpus_in_document_order() {
        let mut transcript = TranscriptSource::new();
        transcript.append("Welcome back to the show, everyone, it is great to see you.");
        transcript.append("The sun orbits the earth and that has always been the case.");
        transcript.append("Nigeria has 15 percent of world oil exports, which is the largest share.");

        let corpus = collect(&transcript, 16_000);
        let detector = Detector::default();
        let candidates = detector.segment_corpus(&corpus);

        let indices: Vec<usize> = candidates.iter().map(|c| c.source.unwrap().index).collect();
        let mut sorted = indices.clone();
        sorted.sort();
        assert_eq!(indices, sorted);

        let accepted = detector.accept(candidates);
        assert!(accepted.iter().any(|c| c.text.starts_with("The sun orbits")));
        assert!(accepted.iter().any(|c| c.text.starts_with("Nigeria")));
    }
}

#[cfg(test)]
mod proptests {
    use crate::Detector;
    use proptest::prelude::*;

    proptest! {
        /// Property: segmenting the same text twice gives the same candidates
        #[test]
        fn test_segment_idempotent(text in "[A-Za-z0-9 .!?%'\"\n]{0,400}") {
            let detector = Detector::default();
            prop_assert_eq!(detector.segment(&text), detector.segment(&text));
        }
    }
}
