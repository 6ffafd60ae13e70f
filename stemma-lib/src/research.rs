// Default research (analysis) functions composed into every language's
// registry. Each is a total, deterministic function of the registry and a
// text; missing configs degrade to empty/zero results, never errors.

use serde::Serialize;

use crate::registry::{ConfigKey, Registry};
use crate::text;

/// The typed outcome of a research function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResearchResult {
    Score(f64),
    Count(usize),
    Counts(Vec<usize>),
    Beginnings(Vec<SentenceBeginning>),
    Transitions(TransitionStats),
    Bool(bool),
}

/// A run of consecutive sentences opening with the same word.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceBeginning {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionStats {
    pub total_sentences: usize,
    pub with_transition: usize,
}

/// Word count of each paragraph.
pub fn paragraph_length(_registry: &Registry, paper: &str) -> ResearchResult {
    ResearchResult::Counts(
        text::paragraphs(paper)
            .iter()
            .map(|p| text::words(p).len())
            .collect(),
    )
}

/// Runs of consecutive sentences that open with the same word, ignoring
/// the language's first-word exceptions (articles and the like).
pub fn sentence_beginnings(registry: &Registry, paper: &str) -> ResearchResult {
    let exceptions = registry
        .get_config(ConfigKey::FirstWordExceptions)
        .and_then(|v| v.as_words())
        .unwrap_or(&[]);

    let mut runs: Vec<SentenceBeginning> = Vec::new();
    for sentence in text::sentences(paper) {
        let Some(first) = text::words(&sentence).first().map(|w| w.to_lowercase()) else {
            continue;
        };
        if exceptions.iter().any(|e| *e == first) {
            continue;
        }
        let continues_run = runs.last().map_or(false, |run| run.word == first);
        if continues_run {
            if let Some(run) = runs.last_mut() {
                run.count += 1;
            }
        } else {
            runs.push(SentenceBeginning {
                word: first,
                count: 1,
            });
        }
    }
    ResearchResult::Beginnings(runs)
}

/// How many sentences contain a transition word, or both parts of a
/// two-part transition pair.
pub fn transition_words(registry: &Registry, paper: &str) -> ResearchResult {
    let singles = registry
        .get_config(ConfigKey::TransitionWords)
        .and_then(|v| v.as_words())
        .unwrap_or(&[]);
    let pairs = registry
        .get_config(ConfigKey::TwoPartTransitionWords)
        .and_then(|v| v.as_word_pairs())
        .unwrap_or(&[]);

    let sentences = text::sentences(paper);
    let with_transition = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            let words = text::words(&lower);
            singles.iter().any(|t| contains_term(&lower, &words, t))
                || pairs.iter().any(|(a, b)| {
                    contains_term(&lower, &words, a) && contains_term(&lower, &words, b)
                })
        })
        .count();

    ResearchResult::Transitions(TransitionStats {
        total_sentences: sentences.len(),
        with_transition,
    })
}

/// Multi-word transition phrases match as substrings; single words match
/// whole tokens only.
fn contains_term(sentence: &str, words: &[String], term: &str) -> bool {
    if term.contains(' ') {
        sentence.contains(term)
    } else {
        words.iter().any(|w| w == term)
    }
}

/// Flesch reading-ease score from average sentence length and an estimated
/// syllable count. Zero for empty text.
pub fn flesch_reading_score(_registry: &Registry, paper: &str) -> ResearchResult {
    let sentences = text::sentences(paper);
    let words: Vec<String> = text::words(paper);
    if sentences.is_empty() || words.is_empty() {
        return ResearchResult::Score(0.0);
    }

    let syllables: usize = words.iter().map(|w| estimate_syllables(w)).sum();
    let asl = words.len() as f64 / sentences.len() as f64;
    let asw = syllables as f64 / words.len() as f64;
    let score = 206.835 - 1.015 * asl - 84.6 * asw;
    ResearchResult::Score(score.clamp(0.0, 100.0))
}

/// Syllables approximated as runs of consecutive vowels; every word counts
/// at least one.
fn estimate_syllables(word: &str) -> usize {
    const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'é', 'è', 'ê', 'à', 'ô', 'î', 'û'];
    let lower = word.to_lowercase();
    let mut count = 0;
    let mut in_group = false;
    for c in lower.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !in_group {
            count += 1;
        }
        in_group = is_vowel;
    }
    count.max(1)
}

/// How many sentences are passive constructions, according to the
/// language's passive helper. Zero when the language registers none.
pub fn passive_voice(registry: &Registry, paper: &str) -> ResearchResult {
    let Some(is_passive) = registry.passive_test() else {
        return ResearchResult::Count(0);
    };
    ResearchResult::Count(
        text::sentences(paper)
            .iter()
            .filter(|s| is_passive(s))
            .count(),
    )
}

/// True when the keyphrase consists entirely of function words, in which
/// case keyword analyses have nothing of substance to match.
pub fn function_words_in_keyphrase(registry: &Registry, keyphrase: &str) -> ResearchResult {
    let function_words = registry
        .get_config(ConfigKey::FunctionWords)
        .and_then(|v| v.as_words())
        .unwrap_or(&[]);

    let words = text::words(&keyphrase.to_lowercase());
    if words.is_empty() {
        return ResearchResult::Bool(false);
    }
    ResearchResult::Bool(words.iter().all(|w| function_words.iter().any(|f| f == w)))
}
