// Morphological passive-voice detection: a sentence is passive when one of
// its tokens carries the language's passive verb morphology. Pure lookup
// over prefix markers and exact forms; no syntactic analysis.

use crate::text;
use crate::types::PassiveMarkers;

/// True if the sentence contains a token matching the language's passive
/// construction markers. Sentences with no matching token (including empty
/// sentences) return false rather than failing.
pub fn is_passive_sentence(sentence: &str, markers: &PassiveMarkers) -> bool {
    text::words(sentence)
        .iter()
        .any(|word| is_passive_form(word, markers))
}

/// Token-level check: exact passive forms first, then prefix markers on
/// tokens long enough to carry one.
pub fn is_passive_form(word: &str, markers: &PassiveMarkers) -> bool {
    if markers.exact_forms.iter().any(|f| f == word) {
        return true;
    }
    if word.chars().count() < markers.min_word_length {
        return false;
    }
    markers
        .prefixes
        .iter()
        .any(|p| word.starts_with(p.as_str()) && word.len() > p.len())
}
