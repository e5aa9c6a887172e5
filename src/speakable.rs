//! Pronounceable names for single characters
//!
//! Speech engines tend to skip or mangle punctuation, so every character the
//! editor announces goes through [`speakable_form`] first.

use std::borrow::Cow;

/// Spoken in place of any character that has no name and is not a letter
pub const FILLER_WORD: &str = "splork";

/// Look up the spoken name of a (lowercased) character
fn named(ch: char) -> Option<&'static str> {
    let name = match ch {
        'y' => "why",
        '.' => "dot",
        ' ' => "space",
        ',' => "comma",
        ';' => "semicolon",
        '-' => "dash",
        ':' => "colon",
        '/' => "slash",
        '\\' => "backslash",
        '?' => "question mark",
        '!' => "bang",
        '@' => "at",
        '#' => "pound",
        '$' => "dollar",
        '%' => "percent",
        '*' => "star",
        '^' => "caret",
        '~' => "squiggle",
        _ => return None,
    };
    Some(name)
}

/// Map a character to the phrase the narrator should say for it
///
/// Named characters are matched case-insensitively. Other letters pass through
/// untouched; everything else becomes [`FILLER_WORD`].
pub fn speakable_form(ch: char) -> Cow<'static, str> {
    let lower = ch.to_lowercase().next().unwrap_or(ch);

    if let Some(name) = named(lower) {
        Cow::Borrowed(name)
    } else if ch.is_alphabetic() {
        Cow::Owned(ch.to_string())
    } else {
        Cow::Borrowed(FILLER_WORD)
    }
}
