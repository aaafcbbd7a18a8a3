//! End-to-end validator tests.

use std::sync::Arc;
use std::thread;

use tagsentinel_core::features::saturated_numeric_value;
use tagsentinel_core::prelude::*;

const TRAINING: [&str; 3] = ["AB12CD34", "ab12cd34", "EF56GH78"];

#[test]
fn duplicate_after_normalization_is_collapsed() {
    let v = TagValidator::new(TRAINING).unwrap();
    assert_eq!(v.training_size(), 2, "ab12cd34 should collapse into AB12CD34");
}

#[test]
fn known_tag_is_valid() {
    let v = TagValidator::new(TRAINING).unwrap();
    let r = v.validate("AB12CD34");
    assert!(r.is_valid);
    assert!(r.reason.contains("log-likelihood="));
    assert!(r.reason.contains(">= threshold="));
    assert!(r.confidence > 0.5 && r.confidence < 1.0);
}

#[test]
fn empty_tag_is_rejected_without_scoring() {
    let v = TagValidator::new(TRAINING).unwrap();
    assert_eq!(
        v.validate(""),
        ValidationResult {
            is_valid: false,
            confidence: 0.0,
            reason: "Empty or null value".to_string(),
        }
    );
}

#[test]
fn repeated_symbol_tag_is_anomalous() {
    let v = TagValidator::new(TRAINING).unwrap();
    let r = v.validate("!!!!!!!!");
    assert!(!r.is_valid, "expected anomaly, got {:?}", r);
    assert!(r.reason.contains("< threshold="));
    assert!(r.confidence < 0.5);
}

#[test]
fn other_anomalies_are_caught() {
    let v = TagValidator::new(TRAINING).unwrap();
    for tag in ["A", "AAAAAAAA", "AB12CD34AB12CD34AB12", "12345678"] {
        assert!(!v.validate(tag).is_valid, "{} should be anomalous", tag);
    }
}

#[test]
fn every_training_example_validates() {
    let training = [
        "E2000017221101441890ABCD",
        "E2000017221101441890ABCE",
        "3000A1B2C3D4",
        "3000A1B2C3D5",
        "3000F0E1D2C3",
        "AB12CD34",
        "ef56gh78",
        "  1a2b3c4d  ",
    ];
    let v = TagValidator::new(training).unwrap();
    for tag in training {
        let r = v.validate(tag);
        assert!(r.is_valid, "training tag {} rejected: {}", tag, r.reason);
    }
}

#[test]
fn validate_is_idempotent() {
    let v = TagValidator::new(TRAINING).unwrap();
    for tag in ["AB12CD34", "!!!!!!!!", "zz99", "", "1A2B-X"] {
        let first = v.validate(tag);
        let second = v.validate(tag);
        assert_eq!(first, second);
        assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
    }
}

#[test]
fn duplicate_ordering_does_not_change_fit() {
    let a = TagValidator::new(["AB12CD34", "ab12cd34", "EF56GH78", "ef56gh78 "]).unwrap();
    let b = TagValidator::new([" ef56gh78", "AB12CD34", "EF56GH78", "ab12cd34"]).unwrap();

    assert_eq!(a.training_size(), b.training_size());
    for (pa, pb) in a.params().iter().zip(b.params()) {
        assert!((pa.mean - pb.mean).abs() < 1e-9);
        assert!((pa.std_dev - pb.std_dev).abs() < 1e-9);
    }
    assert!((a.threshold() - b.threshold()).abs() < 1e-9);
}

#[test]
fn single_repeated_string_floors_every_std_dev() {
    let v = TagValidator::new(["TAG0001"; 5]).unwrap();
    assert_eq!(v.training_size(), 1);
    for p in v.params() {
        assert!(p.std_dev >= MIN_STD_DEV);
    }
    assert!(v.validate("TAG0001").is_valid);
}

#[test]
fn blank_corpus_fails_construction() {
    let err = TagValidator::new(["", " ", "\n"]).unwrap_err();
    assert!(matches!(err, ModelError::EmptyTrainingSet { supplied: 3 }));
}

#[test]
fn overlong_input_is_scored_not_rejected_outright() {
    let v = TagValidator::new(["E2000017221101441890ABCD", "E2000017221101441890ABCE"]).unwrap();
    let f = v.features("e2000017221101441890abcf");
    assert_eq!(f.numeric_value(), saturated_numeric_value());
    assert!(v.validate("E2000017221101441890ABCF").is_valid);
}

#[test]
fn adversarial_input_never_panics() {
    let v = TagValidator::new(TRAINING).unwrap();
    let long = "X".repeat(10_000);
    for tag in ["\u{0}", "ÿÿÿÿ", "\u{1F600}", "-", "+", "0x1A", long.as_str()] {
        let r = v.validate(tag);
        assert!(r.confidence.is_finite());
        assert!(!r.reason.is_empty());
    }
}

#[test]
fn validator_is_shareable_across_threads() {
    let v = Arc::new(TagValidator::new(TRAINING).unwrap());
    let expected = v.validate("EF56GH78");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let v = Arc::clone(&v);
            thread::spawn(move || v.validate("EF56GH78"))
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
