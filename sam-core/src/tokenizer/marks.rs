//! Whitespace insertion around marks and emoji

use crate::settings::Settings;

/// Space out marks so that splitting on spaces yields word and mark tokens
///
/// Emoji matched by the settings' emoji pattern are copied through intact,
/// surrounded by spaces, and become tokens of their own.
pub fn add_whitespaces(settings: &Settings, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for found in settings.emoji_pattern().find_iter(text) {
        let found = match found {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Emoji search aborted: {e}");
                break;
            }
        };
        if found.start() == found.end() {
            continue;
        }

        space_marks(settings, &text[last..found.start()], &mut out);
        out.push(' ');
        out.push_str(found.as_str());
        out.push(' ');
        last = found.end();
    }

    space_marks(settings, &text[last..], &mut out);
    out
}

/// Output-buffer pass over one emoji-free gap
///
/// "previous" is the last character already in `out`, so an emoji written
/// just before the gap counts as the space that follows it.
fn space_marks(settings: &Settings, text: &str, out: &mut String) {
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() || ch.is_alphabetic() {
            out.push(ch);
            continue;
        }

        let prev = out.chars().next_back();

        if !settings.is_mark_not_to_separate(ch) {
            if prev.is_some_and(char::is_alphanumeric) {
                out.push(' ');
            }
            out.push(ch);
            out.push(' ');
            continue;
        }

        let next = chars.peek().copied();
        if prev.is_some_and(char::is_alphabetic) && next.is_some_and(char::is_alphabetic) {
            out.push(ch);
            continue;
        }

        if prev.is_some_and(|p| !p.is_whitespace()) {
            out.push(' ');
        }
        out.push(ch);
        if next.is_some_and(|n| !n.is_whitespace()) {
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        add_whitespaces(&Settings::default(), text)
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_marks_after_letters_are_separated() {
        assert_eq!(words("smuk, men"), vec!["smuk", ",", "men"]);
        assert_eq!(words("hul."), vec!["hul", "."]);
    }

    #[test]
    fn test_leading_mark_gets_no_space_before() {
        let spaced = add_whitespaces(&Settings::default(), "{one");
        assert_eq!(spaced, "{ one");
    }

    #[test]
    fn test_digits_split_from_letters() {
        assert_eq!(words("sætning1 og 2"), vec!["sætning", "1", "og", "2"]);
    }

    #[test]
    fn test_hyphen_between_letters_kept() {
        assert_eq!(words("mellem-stor"), vec!["mellem-stor"]);
    }

    #[test]
    fn test_trailing_hyphen_separated() {
        assert_eq!(words("syd- og"), vec!["syd", "-", "og"]);
        assert_eq!(words("-stor"), vec!["-", "stor"]);
    }

    #[test]
    fn test_hyphen_between_marks_spaced_on_both_sides() {
        assert_eq!(add_whitespaces(&Settings::default(), "a.-b"), "a . - b");
    }

    #[test]
    fn test_emoji_kept_whole() {
        let thumbs = "\u{1F44E}";
        let palm = "\u{1F926}\u{200D}";
        let text = format!("nej{thumbs}{palm}!");
        assert_eq!(words(&text), vec!["nej", thumbs, palm, "!"]);
    }

    #[test]
    fn test_skin_tone_emoji_not_split() {
        let finger = "\u{1F595}\u{1F3FC}";
        assert_eq!(words(&format!("dig{finger}")), vec!["dig", finger]);
    }

    #[test]
    fn test_private_use_text_is_not_taken_for_an_emoji() {
        let grin = "\u{1F601}";
        let text = format!("a\u{E000}b {grin} c");
        assert_eq!(words(&text), vec!["a", "\u{E000}", "b", grin, "c"]);
    }

    #[test]
    fn test_mark_after_emoji_gets_no_leading_space() {
        let grin = "\u{1F601}";
        let spaced = add_whitespaces(&Settings::default(), &format!("{grin}-nej"));
        assert_eq!(spaced, format!(" {grin} - nej"));
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(add_whitespaces(&Settings::default(), " \n "), " \n ");
    }
}
