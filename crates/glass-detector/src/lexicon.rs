//! Lexical signals used by the pre-filter and the scorer

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Copula / possession verbs
    pub(crate) static ref COPULA: Regex = Regex::new(r"(?i)\b(is|are|was|were|has|have)\b").unwrap();

    /// Absolutist terms, whole words only. The "every" compounds are listed
    /// so that "everyone" counts while "topic" and "Allen" do not.
    pub(crate) static ref ABSOLUTIST: Regex = Regex::new(
        r"(?i)\b(only|always|never|largest|biggest|top|all|every(?:one|thing|body)?|none)\b"
    )
    .unwrap();

    /// Numbers and percentages
    pub(crate) static ref NUMERIC: Regex = Regex::new(r"(?i)\d|%|\bpercent\b").unwrap();

    /// High-signal terms that admit a sentence on their own
    pub(crate) static ref HIGH_SIGNAL: Regex =
        Regex::new(r"(?i)\b(died|dead|killed|accounts?|constitutes?|represents?)\b").unwrap();

    /// Copulas plus claim verbs
    pub(crate) static ref CLAIM_VERB: Regex =
        Regex::new(r"(?i)\b(is|are|was|were|has|have|accounts?|constitutes?|represents?)\b").unwrap();

    /// Common myth cues
    pub(crate) static ref MYTH: Regex =
        Regex::new(r"(?i)\b(dead|died|killed|orbits|revolves|flat)\b").unwrap();

    /// Death terms
    pub(crate) static ref DEATH: Regex = Regex::new(r"(?i)\b(dead|died|killed)\b").unwrap();

    /// Attribution phrases
    pub(crate) static ref ATTRIBUTION: Regex =
        Regex::new(r"(?i)\b(according\s+to|sources?|report|study|studies)\b").unwrap();

    /// Hedging and disclaimer language
    pub(crate) static ref HEDGE: Regex = Regex::new(
        r"(?i)\b(may|might|can|could|often|sometimes|generally|typically|varies|depends|not\s+necessarily|approximately|about|around|roughly)\b"
    )
    .unwrap();

    /// Tokens that make a short input worth a look
    pub(crate) static ref SHORT_SUGGESTIVE: Regex = Regex::new(
        r"(?i)\b(is|are|was|were|has|have|died|dead|killed|only|always|never|largest|biggest|top)\b|%|\bpercent\b|\d"
    )
    .unwrap();

    pub(crate) static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Cheap reject: does the sentence carry any claim-like token at all?
pub(crate) fn passes_prefilter(sentence: &str) -> bool {
    COPULA.is_match(sentence)
        || ABSOLUTIST.is_match(sentence)
        || NUMERIC.is_match(sentence)
        || HIGH_SIGNAL.is_match(sentence)
}
