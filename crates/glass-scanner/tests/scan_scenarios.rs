//! End-to-end scan pass scenarios with a mocked reference lookup

use glass_collector::{Collector, CollectorConfig, DomNode, DomSource, TranscriptSource};
use glass_detector::Detector;
use glass_domain::{ElementRef, PositionHint, VerdictKind};
use glass_reference::MockLookup;
use glass_scanner::{ScanOutcome, Scanner, ScannerConfig};
use glass_verifier::{QuickVerifier, VerifierConfig, DEATH_RUMOR_NOTE};
use std::time::{Duration, Instant};

fn scanner_with(lookup: MockLookup, config: ScannerConfig) -> Scanner<MockLookup> {
    let mut scanner = Scanner::new(
        config,
        Collector::new(CollectorConfig::default()),
        Detector::default(),
        QuickVerifier::new(lookup, VerifierConfig::default()),
    );
    scanner.enable();
    scanner
}

fn scanner(lookup: MockLookup) -> Scanner<MockLookup> {
    scanner_with(lookup, ScannerConfig::default())
}

fn transcript(text: &str) -> TranscriptSource {
    let mut source = TranscriptSource::new();
    source.append(text);
    source
}

fn living_musk() -> MockLookup {
    MockLookup::new()
        .with_title("Elon Musk", "Elon Musk")
        .with_summary("Elon Musk", "Elon Reeve Musk (born 1971) is a businessman and investor.")
}

#[tokio::test]
async fn test_death_rumor_is_highlighted() {
    let mut scanner = scanner(living_musk());
    let source = transcript("Elon Musk is dead. More text follows to pad length.");

    let report = scanner.scan(&source).await.into_report().unwrap();

    assert_eq!(report.accepted, 1);
    assert_eq!(report.highlights.len(), 1);
    assert_eq!(report.highlights[0].text, "Elon Musk is dead.");
    assert_eq!(report.highlights[0].label, DEATH_RUMOR_NOTE);
    assert!(report.escalations.is_empty());
}

#[tokio::test]
async fn test_flat_earth_needs_no_lookup() {
    let mut scanner = scanner(MockLookup::new().failing());
    let source = transcript("The earth is flat and everyone knows it.");

    let report = scanner.scan(&source).await.into_report().unwrap();

    assert_eq!(report.highlights.len(), 1);
    assert_eq!(report.highlights[0].label, "rule: flat-earth pattern");
    assert_eq!(scanner.verifier().lookup().call_count(), 0);
}

#[tokio::test]
async fn test_hedged_claim_is_never_verified() {
    let mut scanner = scanner(MockLookup::new());
    let source = transcript("The boiling point of water can vary depending on altitude.");

    let report = scanner.scan(&source).await.into_report().unwrap();

    assert_eq!(report.accepted, 0);
    assert!(report.verdicts.is_empty());
    assert_eq!(scanner.verifier().lookup().call_count(), 0);
}

#[tokio::test]
async fn test_search_box_claim_marks_whole_field() {
    let rect = |top: f64| PositionHint::new(top, 0.0, 400.0, 24.0);
    let source = DomSource::new(
        vec![
            DomNode::new("h1", "Welcome to the community search page", rect(0.0)),
            DomNode::new("input", "Elon Musk is dead", rect(40.0)),
            DomNode::new("p", "Type a question above and press enter to search.", rect(80.0)),
        ],
        800.0,
    );
    let mut scanner = scanner(living_musk());

    let report = scanner.scan(&source).await.into_report().unwrap();

    assert_eq!(report.highlights.len(), 1);
    let highlight = &report.highlights[0];
    assert_eq!(highlight.text, "Elon Musk is dead");
    assert!(highlight.whole_element);
    assert_eq!(highlight.element, Some(1));

    let element = scanner.resolve(highlight.source.unwrap()).unwrap();
    assert!(element.field);
}

#[tokio::test]
async fn test_unreachable_reference_yields_silence() {
    let mut scanner = scanner(MockLookup::new().failing());
    let source = transcript(
        "Elon Musk is dead. Chocolate milk is always the healthiest drink for 9 of 10 athletes.",
    );

    let report = scanner.scan(&source).await.into_report().unwrap();

    assert_eq!(report.accepted, 2);
    assert!(report.highlights.is_empty());
    assert!(report.verdicts.iter().all(|v| v.kind == VerdictKind::Unknown));
    // Unknown candidates go to the escalation batch instead
    let ids: Vec<&str> = report.escalations.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2"]);
    assert_eq!(report.escalations[0].text, "Elon Musk is dead.");
}

#[tokio::test]
async fn test_unchanged_content_is_cooled_down() {
    let mut scanner = scanner(MockLookup::new());
    let source = transcript("The sun orbits the earth, as everyone was taught long ago.");
    let t0 = Instant::now();

    assert!(scanner.scan_at(&source, t0).await.report().is_some());

    let soon = scanner.scan_at(&source, t0 + Duration::from_secs(10)).await;
    assert!(matches!(soon, ScanOutcome::Cooldown));

    let later = scanner.scan_at(&source, t0 + Duration::from_secs(46)).await;
    assert!(later.report().is_some());
    assert_eq!(scanner.metrics().cooldown, 1);
    assert_eq!(scanner.metrics().completed, 2);
}

#[tokio::test]
async fn test_changed_content_skips_cooldown() {
    let mut scanner = scanner(MockLookup::new());
    let mut source = transcript("The sun orbits the earth, as everyone was taught long ago.");
    let t0 = Instant::now();

    scanner.scan_at(&source, t0).await;
    source.append("Nigeria supplies 15% of all world oil exports, which is huge.");

    let report = scanner
        .scan_at(&source, t0 + Duration::from_secs(1))
        .await
        .into_report()
        .unwrap();
    assert_eq!(report.highlights.len(), 2);
}

#[tokio::test]
async fn test_cached_verdicts_are_reused_across_passes() {
    let mut scanner = scanner(living_musk());
    let t0 = Instant::now();

    let first = transcript("Elon Musk is dead. More text follows to pad length.");
    scanner.scan_at(&first, t0).await;
    assert_eq!(scanner.verifier().lookup().call_count(), 2);

    let second = transcript("Elon Musk is dead. Different padding text arrives now.");
    let report = scanner
        .scan_at(&second, t0 + Duration::from_secs(5))
        .await
        .into_report()
        .unwrap();

    assert_eq!(report.cache_hits, 1);
    assert_eq!(report.highlights.len(), 1);
    assert_eq!(scanner.verifier().lookup().call_count(), 2);
}

#[tokio::test]
async fn test_stale_references_do_not_resolve() {
    let mut scanner = scanner(MockLookup::new());
    let t0 = Instant::now();

    let first = transcript("The earth is flat and everyone knows it.");
    let old = scanner.scan_at(&first, t0).await.into_report().unwrap();
    let old_ref = old.highlights[0].source.unwrap();
    assert!(scanner.resolve(old_ref).is_some());

    let second = transcript("The sun orbits the earth, as everyone was taught long ago.");
    let new = scanner
        .scan_at(&second, t0 + Duration::from_secs(1))
        .await
        .into_report()
        .unwrap();

    assert!(!scanner.is_current(&old));
    assert!(scanner.is_current(&new));
    assert!(scanner.resolve(old_ref).is_none());
    assert!(scanner.resolve(ElementRef::new(new.generation, 0)).is_some());
}

#[tokio::test]
async fn test_highlights_are_capped() {
    let config = ScannerConfig {
        max_highlights: 2,
        ..ScannerConfig::default()
    };
    let mut scanner = scanner_with(MockLookup::new(), config);
    let mut source = TranscriptSource::new();
    for i in 0..5 {
        source.append(format!("In year {} the earth is flat and everyone knows it.", 2000 + i));
    }

    let report = scanner.scan(&source).await.into_report().unwrap();
    assert_eq!(report.flagged(), 5);
    assert_eq!(report.highlights.len(), 2);
}

#[tokio::test]
async fn test_skip_mode_leaves_saturated_candidates_unverified() {
    let lookup = living_musk().with_delay(Duration::from_millis(30));
    let config = ScannerConfig {
        wait_for_lookups: false,
        ..ScannerConfig::default()
    };
    let mut scanner = Scanner::new(
        config,
        Collector::default(),
        Detector::default(),
        QuickVerifier::new(
            lookup,
            VerifierConfig {
                max_concurrent_lookups: 1,
                ..VerifierConfig::default()
            },
        ),
    );
    scanner.enable();

    let mut source = TranscriptSource::new();
    source.append("Elon Musk is dead. Everyone has been saying it.");
    source.append("Ada Lovelace was dead in 1852.");
    let report = scanner.scan(&source).await.into_report().unwrap();

    assert!(report.skipped >= 1);
    assert_eq!(report.verdicts.len() + report.skipped, report.accepted);
    assert_eq!(scanner.cache().len(), report.verdicts.len());
}

#[test]
fn test_report_serializes_for_the_ui() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let mut scanner = scanner(MockLookup::new());
    let report = rt
        .block_on(scanner.scan(&transcript("The earth is flat and everyone knows it.")))
        .into_report()
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["highlights"][0]["label"], "rule: flat-earth pattern");
    assert_eq!(json["highlights"][0]["element"], 0);
    assert!(json.get("verdicts").is_none());
}
