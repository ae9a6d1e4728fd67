//! Building a classifier from settings, lexicon and trigger files

use sam_core::pipeline::{compare, evaluate_parallel, evaluate_sequential};
use sam_core::{
    ConfusionMatrix, Evaluator, Label, LabeledSample, Lexicon, RuleBasedClassifier, SamError,
    Settings, TriggerLexicon,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    classifier: RuleBasedClassifier,
}

fn fixture(settings_toml: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("settings.toml");
    let lexicon_path = dir.path().join("lexicon.csv");
    let triggers_path = dir.path().join("triggers.csv");

    fs::write(&settings_path, settings_toml).unwrap();
    fs::write(&lexicon_path, "godt,1\nnedern,-1\nflot,2\nhader,-2\n").unwrap();
    fs::write(
        &triggers_path,
        "word,kind,lookahead,modvalue,extra\n\
         ikke,neg,2,0,\n\
         meget,mult,1,2,\n\
         hovedet,v,2,-3,under|armen\n\
         !,special,0,0,\n",
    )
    .unwrap();

    let classifier = RuleBasedClassifier::new(
        Arc::new(Settings::from_file(&settings_path).unwrap()),
        Arc::new(Lexicon::from_file(&lexicon_path).unwrap()),
        Arc::new(TriggerLexicon::from_file(&triggers_path).unwrap()),
    );

    Fixture {
        _dir: dir,
        classifier,
    }
}

#[test]
fn test_negation_from_file() {
    let fx = fixture("");
    let evaluation = fx.classifier.evaluate_sentence("det er ikke godt");
    assert_eq!(evaluation.score, -1.0);
    assert_eq!(evaluation.label, Label::Negative);
}

#[test]
fn test_intensifier_from_file() {
    let fx = fixture("");
    assert_eq!(fx.classifier.evaluate_sentence("meget flot").score, 4.0);
}

#[test]
fn test_negation_stops_at_period() {
    let fx = fixture("");
    assert_eq!(fx.classifier.evaluate_sentence("ikke. godt").score, 1.0);
}

#[test]
fn test_vending_idiom_from_file() {
    let fx = fixture("");
    let evaluation = fx.classifier.evaluate_sentence("hun har hovedet under armen");
    assert_eq!(evaluation.score, -3.0);
}

#[test]
fn test_custom_abbreviation_from_settings() {
    let fx = fixture("[abbreviations]\nosv = \"godt\"\n");
    let evaluation = fx.classifier.evaluate_sentence("det var osv. ");
    assert_eq!(evaluation.score, 1.0);
}

#[test]
fn test_invalid_settings_pattern_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "sentence_end_finder = \"[\"\n").unwrap();

    let err = Settings::from_file(&path).unwrap_err();
    assert!(matches!(err, SamError::InvalidPattern { name: "sentence_end_finder", .. }));
}

#[test]
fn test_batch_and_report() {
    let fx = fixture("");
    let texts = vec![
        " det er godt".to_string(),
        " det er ikke godt".to_string(),
        " et hus".to_string(),
    ];

    let sequential = evaluate_sequential(&fx.classifier, &texts);
    let parallel = evaluate_parallel(&fx.classifier, &texts, 2).unwrap();
    assert_eq!(sequential, parallel);
    let labels: Vec<_> = sequential.iter().map(|r| r.evaluation.label).collect();
    assert_eq!(labels, vec![Label::Positive, Label::Negative, Label::Neutral]);

    let samples = vec![
        LabeledSample {
            rating: 1.0,
            text: "det er godt".to_string(),
        },
        LabeledSample {
            rating: -1.0,
            text: "det er godt".to_string(),
        },
    ];
    let matrix = ConfusionMatrix::from_comparisons(&compare(&fx.classifier, &samples));
    assert_eq!(matrix.count(Label::Positive, Label::Positive), 1);
    assert_eq!(matrix.count(Label::Negative, Label::Positive), 1);
    assert_eq!(matrix.accuracy(), 50.0);
}
