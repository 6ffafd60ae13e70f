// Lightweight text segmentation used by research functions and passive
// detection. Full tokenization happens upstream of this crate; these
// helpers only split already-plain text.

/// Split text into words, stripping surrounding punctuation from each
/// token. Apostrophes and hyphens are word-internal and preserved.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| {
                matches!(c, '.' | '!' | '?' | ',' | ';' | ':' | '(' | ')' | '"' | '«' | '»')
            })
            .to_string()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Split text into sentences on terminal punctuation. Empty fragments
/// (e.g. from "..") are dropped.
pub fn sentences(text: &str) -> Vec<String> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs on blank lines.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_strip_punctuation() {
        assert_eq!(words("Bonjour, le monde!"), vec!["Bonjour", "le", "monde"]);
    }

    #[test]
    fn test_words_preserve_internal_marks() {
        assert_eq!(words("l'été taille-crayons"), vec!["l'été", "taille-crayons"]);
    }

    #[test]
    fn test_sentences_split_on_terminals() {
        assert_eq!(
            sentences("One. Two! Three?"),
            vec!["One", "Two", "Three"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(words("").is_empty());
        assert!(sentences("  ").is_empty());
        assert!(paragraphs("\n\n").is_empty());
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(paragraphs("a b\n\nc d"), vec!["a b", "c d"]);
    }
}
