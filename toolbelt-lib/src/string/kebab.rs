use unicode_general_category::{get_general_category, GeneralCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Upper,
    /// Lowercase letters and letters without case
    Lower,
    Digit,
    /// Combining marks, kept with the character they follow
    Mark,
    Apostrophe,
    Separator,
}

impl CharKind {
    fn of(c: char) -> Self {
        if c == '\'' || c == '\u{2019}' {
            CharKind::Apostrophe
        } else if is_mark(c) {
            CharKind::Mark
        } else if c.is_uppercase() {
            CharKind::Upper
        } else if c.is_numeric() {
            CharKind::Digit
        } else if c.is_alphabetic() {
            CharKind::Lower
        } else {
            CharKind::Separator
        }
    }
}

fn is_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

/// Whether `current` opens a new word given its neighbours within the same run
fn starts_word(prev: CharKind, current: CharKind, next: Option<CharKind>) -> bool {
    match (prev, current) {
        (CharKind::Lower, CharKind::Upper)
        | (CharKind::Digit, CharKind::Upper | CharKind::Lower)
        | (CharKind::Upper | CharKind::Lower, CharKind::Digit) => true,
        // "XMLHttp": the H belongs to the word that follows
        (CharKind::Upper, CharKind::Upper) => next == Some(CharKind::Lower),
        _ => false,
    }
}

/// Split text into lowercased words
fn words(text: &str) -> Vec<String> {
    let chars: Vec<(char, CharKind)> = text
        .chars()
        .map(|c| (c, CharKind::of(c)))
        .filter(|(_, kind)| *kind != CharKind::Apostrophe)
        .collect();

    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<CharKind> = None;

    for (i, &(c, kind)) in chars.iter().enumerate() {
        if kind == CharKind::Separator {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        // A mark never opens a word and leaves `prev` as the base character's kind
        if kind == CharKind::Mark {
            current.push(c);
            continue;
        }

        let next = chars[i + 1..]
            .iter()
            .map(|(_, k)| *k)
            .find(|k| *k != CharKind::Mark);
        if prev.is_some_and(|p| starts_word(p, kind, next)) && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
        prev = Some(kind);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert text to kebab case: lowercased words joined by `-`
///
/// Words break on any non-alphanumeric character, on lower-to-upper
/// transitions (`fooBar`), before the last capital of an acronym followed by
/// lowercase (`XMLHttp`), and between letters and digits. Apostrophes are
/// dropped without splitting.
#[must_use]
pub fn kebab_case(text: &str) -> String {
    words(text).join("-")
}
