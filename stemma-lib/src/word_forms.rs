// Basic word-form generation: candidate inflected variants of a word built
// from the language's function-word prefixes, used by keyword matching to
// recognize a keyword despite attached prefixes.

use crate::types::WordFormAffixes;

/// Generate the ordered, finite list of basic word forms.
///
/// Prefixed variants of the surface word come first (the most likely
/// matches), then, when the word itself starts with a recognized prefix,
/// the de-prefixed base followed by its prefixed variants. Empty only when
/// the language declares no prefixes.
pub fn basic_word_forms(word: &str, affixes: &WordFormAffixes) -> Vec<String> {
    let word = word.trim();
    if word.is_empty() {
        return vec![];
    }

    let mut forms: Vec<String> = affixes
        .prefixes
        .iter()
        .map(|p| format!("{p}{word}"))
        .collect();

    if let Some(base) = strip_prefix(word, affixes) {
        forms.push(base.to_string());
        forms.extend(affixes.prefixes.iter().map(|p| format!("{p}{base}")));
    }

    forms
}

/// The word with one recognized leading prefix removed, if that leaves a
/// plausible base (at least two characters).
fn strip_prefix<'a>(word: &'a str, affixes: &WordFormAffixes) -> Option<&'a str> {
    for prefix in &affixes.prefixes {
        if let Some(base) = word.strip_prefix(prefix.as_str()) {
            if base.chars().count() >= 2 {
                return Some(base);
            }
        }
    }
    None
}
