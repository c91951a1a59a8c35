//! Property-style checks over deterministic pseudo-random payloads

use calldata_message_scanner::config::DetectionConfig;
use calldata_message_scanner::detection::message_classifier::letter_ratio;
use calldata_message_scanner::detection::{
    ByteDecoder, CandidateExtractor, MessageClassifier, MessageDetector,
};
use calldata_message_scanner::types::DecodeStrategy;

use crate::common::{pseudo_random_bytes, transfer_with_text};

const STRATEGIES: [DecodeStrategy; 2] = [DecodeStrategy::Codepoint, DecodeStrategy::ByteRange];

/// Random bytes biased towards printable ASCII so candidates actually appear
fn mixed_payload(seed: u64, len: usize) -> Vec<u8> {
    pseudo_random_bytes(seed, len)
        .into_iter()
        .map(|b| if b % 3 == 0 { b } else { b'a' + (b % 26) })
        .map(|b| if b % 7 == 0 { b' ' } else { b })
        .collect()
}

#[test]
fn test_decoded_text_is_whitespace_normalised() {
    for seed in 0..200 {
        let data = pseudo_random_bytes(seed, 64);
        for strategy in STRATEGIES {
            let decoded = ByteDecoder::new(strategy).decode(&data);
            assert_eq!(decoded.trim(), decoded);
            assert!(!decoded.contains("  "));
            assert!(!decoded.chars().any(|c| c.is_control()));
            assert!(decoded.chars().count() <= data.len());
        }
    }
}

#[test]
fn test_decoding_is_idempotent() {
    for seed in 0..200 {
        let data = mixed_payload(seed, 80);
        for strategy in STRATEGIES {
            let decoder = ByteDecoder::new(strategy);
            let once = decoder.decode(&data);
            assert_eq!(decoder.decode(once.as_bytes()), once);
        }
    }
}

#[test]
fn test_known_selector_always_yields_nothing() {
    let detector = MessageDetector::new(&DetectionConfig::default()).unwrap();
    for seed in 0..100 {
        let tail = String::from_utf8_lossy(&mixed_payload(seed, 60)).into_owned();
        let data = transfer_with_text(&format!("{} hello world again", tail));
        assert!(detector.analyse_bytes(&data).is_empty());
    }
}

#[test]
fn test_candidates_never_overlap() {
    let extractor = CandidateExtractor::new(4).unwrap();
    for seed in 0..200 {
        let decoded = ByteDecoder::new(DecodeStrategy::Codepoint).decode(&mixed_payload(seed, 120));
        let spans = extractor.spans(&decoded);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for span in &spans {
            assert!(decoded[span.clone()].chars().count() >= 4);
        }
    }
}

#[test]
fn test_accepted_messages_are_candidates() {
    let config = DetectionConfig::lenient();
    let detector = MessageDetector::new(&config).unwrap();
    let extractor = CandidateExtractor::new(config.min_msg_length).unwrap();
    for seed in 0..200 {
        let data = mixed_payload(seed, 120);
        let decoded = detector.decoder().decode(&data);
        let candidates = extractor.extract(&decoded);
        for message in detector.analyse_bytes(&data) {
            assert!(candidates.contains(&message.as_str()));
        }
    }
}

#[test]
fn test_appending_valid_word_preserves_acceptance() {
    let classifier = MessageClassifier::new(&DetectionConfig::default());
    let accepted = [
        "hello world",
        "gm frens hello",
        "this is fine",
        "Vitalik was here",
    ];
    for base in accepted {
        assert!(classifier.is_message(base), "{}", base);
        for word in ["ape", "moon", "Ethereum", "ledger"] {
            let extended = format!("{} {}", base, word);
            assert!(classifier.is_message(&extended), "{}", extended);
        }
    }
}

#[test]
fn test_min_words_boundary() {
    let classifier = MessageClassifier::new(&DetectionConfig::default());
    assert!(classifier.is_message("alpha omega"));
    assert!(!classifier.is_message("alpha"));
    assert!(!classifier.is_message("alpha zz"));
}

#[test]
fn test_letter_ratio_is_zero_for_whitespace_only() {
    assert_eq!(letter_ratio(" \t\n "), 0.0);
    let classifier = MessageClassifier::new(&DetectionConfig::default());
    assert!(!classifier.is_message(" \t\n "));
}
