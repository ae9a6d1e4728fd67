//! Tokenizer traces for punctuation runs, abbreviations and marks

use sam_core::{Settings, SettingsConfig, Tokenizer};
use std::sync::Arc;

fn tokenizer() -> Tokenizer {
    Tokenizer::new(Arc::new(Settings::default()))
}

fn tokenizer_without_expansion() -> Tokenizer {
    let config = SettingsConfig {
        abbreviation_expansion: false,
        ..SettingsConfig::default()
    };
    Tokenizer::new(Arc::new(Settings::from_config(config).unwrap()))
}

fn trace(text: &str) -> String {
    tokenizer().tokenize_comment(text).trace()
}

#[test]
fn test_question_mark_runs() {
    assert_eq!(
        trace("??one? two???? three ?? four??"),
        "|?|?|[END]|one|?|[END]|two|?|?|?|?|[END]|three|?|?|[END]|four|?|?|[END]"
    );
}

#[test]
fn test_exclamation_runs() {
    assert_eq!(
        trace("!!one! two!!!! three !! four!!"),
        "|!|!|[END]|one|!|[END]|two|!|!|!|!|[END]|three|!|!|[END]|four|!|!|[END]"
    );
}

#[test]
fn test_period_runs() {
    assert_eq!(
        trace("..one. two.... three .. four.."),
        "|.|.|[END]|one|.|[END]|two|.|.|.|.|[END]|three|.|.|[END]|four|.|.|[END]"
    );
}

#[test]
fn test_mixed_punctuation_and_brackets() {
    assert_eq!(
        trace("?!{one...?{ two!?% &three ? four?!"),
        "|?|!|[END]|{|one|.|.|.|?|[END]|{|two|!|?|[END]|%|&|three|?|[END]|four|?|!|[END]"
    );
}

#[test]
fn test_plain_sentence() {
    assert_eq!(trace("hej med dig"), "|hej|med|dig|[END]");
}

#[test]
fn test_abbreviation_at_end() {
    assert_eq!(trace("Jeg hader dig osv."), "|jeg|hader|dig|og|så|videre|[END]");
}

#[test]
fn test_abbreviation_glued_to_next_sentence() {
    assert_eq!(
        trace("Jeg hader dig osv.men"),
        "|jeg|hader|dig|og|så|videre|[END]|men|[END]"
    );
}

#[test]
fn test_dotted_abbreviation_mid_sentence() {
    assert_eq!(
        trace(" jeg er smuk, men du er f.eks. meget grim"),
        "|jeg|er|smuk|,|men|du|er|for|eksempel|meget|grim|[END]"
    );
}

#[test]
fn test_trailing_hyphen() {
    assert_eq!(trace(" syd- og sønderjylland"), "|syd|-|og|sønderjylland|[END]");
}

#[test]
fn test_compound_hyphen() {
    assert_eq!(trace(" jeg er mellem-stor"), "|jeg|er|mellem-stor|[END]");
}

#[test]
fn test_digit_after_word() {
    assert_eq!(trace(" sætning1 og 2"), "|sætning|1|og|2|[END]");
}

#[test]
fn test_newline_is_a_sentence_break_and_token() {
    assert_eq!(trace("sætning\n sætning "), "|sætning|[END]|\n|sætning|[END]");
    assert_eq!(trace("sætning \n sætning "), "|sætning|[END]|\n|sætning|[END]");
}

#[test]
fn test_expansion_disabled_keeps_abbreviation() {
    let comment = tokenizer_without_expansion().tokenize_comment("Jeg hader osv. dig ");
    assert_eq!(comment.trace(), "|jeg|hader|osv|.|[END]|dig|[END]");
}

#[test]
fn test_expansion_enabled_joins_sentence() {
    assert_eq!(trace("Jeg hader osv. dig "), "|jeg|hader|og|så|videre|dig|[END]");
}

#[test]
fn test_link_replaced_by_marker() {
    let comment = tokenizer().tokenize_comment("se https://www.example.com");
    assert_eq!(comment.sentences.len(), 1);
    let words: Vec<_> = comment.sentences[0].words().collect();
    assert_eq!(words, vec!["se", "LINK"]);
}

#[test]
fn test_comment_keeps_original_text() {
    let comment = tokenizer().tokenize_comment("Hej Med Dig");
    assert_eq!(comment.id.original, "Hej Med Dig");
}

#[test]
fn test_emoji_survives_as_token() {
    let grin = "\u{1F601}";
    let comment = tokenizer().tokenize_comment(&format!("super{grin}!"));
    assert_eq!(comment.trace(), format!("|super|{grin}|!|[END]"));
}

#[test]
fn test_empty_comment() {
    let comment = tokenizer().tokenize_comment("");
    assert!(comment.sentences.is_empty());
    assert_eq!(comment.trace(), "");
}

#[test]
fn test_private_use_character_keeps_emoji_in_place() {
    assert_eq!(
        trace("a\u{E000}b \u{1F601} c"),
        "|a|\u{E000}|b|\u{1F601}|c|[END]"
    );
}

#[test]
fn test_link_stops_at_host() {
    assert_eq!(
        trace("www.dr.dk er godt. ja"),
        "|LINK|er|godt|.|[END]|ja|[END]"
    );
}
