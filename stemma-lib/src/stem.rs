// Rule-based stemmer.
//
// For each word we run a fixed pipeline:
//   1. Exception lookup (exact match, bypasses everything else)
//   2. Region computation
//   3. Suffix-rule groups in declared order, first match fires;
//      a fired rule may chain into one follow-up group
//   4. Residual plural stripping (only if no group rule fired)
//   5. Identity fallback
//
// Every step is total: malformed, empty, or vowel-less input falls through
// and comes back unchanged.

use crate::regions::{self, Regions};
use crate::types::{MorphologyData, RuleGroup, SuffixRule};

// Upper bound on rule chaining. Rule data never declares cycles, but the
// engine refuses to follow one regardless.
const MAX_CHAIN_DEPTH: usize = 4;

/// Stem a single word. Deterministic and pure; never fails. Input is
/// lowercased before lookup, matching the exception table's normalization.
pub fn stem(word: &str, data: &MorphologyData) -> String {
    let word = word.to_lowercase();
    if word.is_empty() {
        return word;
    }

    if let Some(stem) = data.exceptions.stems.get(&word) {
        return stem.clone();
    }

    let chars: Vec<char> = word.chars().collect();
    let regions = regions::compute(&chars, data);

    if let Some(stemmed) = apply_groups(&word, data, &regions) {
        return finalize(stemmed, data);
    }

    if let Some(stripped) = apply_residual(&word, data) {
        return finalize(stripped, data);
    }

    word
}

// ---------------------------------------------------------------------------
// Rule-group application
// ---------------------------------------------------------------------------

/// Try every top-level group in declared order; the first rule that fires
/// decides the outcome (possibly after chaining). None if nothing fired.
fn apply_groups(word: &str, data: &MorphologyData, regions: &Regions) -> Option<String> {
    for group in data.rule_groups.iter().filter(|g| !g.chained) {
        if let Some(result) = apply_group(word, group, data, regions, 0) {
            return Some(result);
        }
    }
    None
}

/// Apply the first matching rule of one group, following its chain target
/// up to MAX_CHAIN_DEPTH.
fn apply_group(
    word: &str,
    group: &RuleGroup,
    data: &MorphologyData,
    regions: &Regions,
    depth: usize,
) -> Option<String> {
    if depth >= MAX_CHAIN_DEPTH {
        return None;
    }

    for rule in &group.rules {
        if let Some(intermediate) = apply_rule(word, rule, data, regions) {
            if let Some(target) = rule.then_group.as_deref() {
                if let Some(next) = data.rule_groups.iter().find(|g| g.name == target) {
                    if let Some(chained) =
                        apply_group(&intermediate, next, data, regions, depth + 1)
                    {
                        return Some(chained);
                    }
                }
                // No chained rule matched: the intermediate is the stem.
            }
            return Some(intermediate);
        }
    }
    None
}

/// Check one rule against the word; Some(rewritten) if it fires.
fn apply_rule(
    word: &str,
    rule: &SuffixRule,
    data: &MorphologyData,
    regions: &Regions,
) -> Option<String> {
    if rule.except_words.iter().any(|w| w == word) {
        return None;
    }

    let word_chars = word.chars().count();

    for suffix in &rule.suffixes {
        if !word.ends_with(suffix.as_str()) {
            continue;
        }
        let suffix_chars = suffix.chars().count();
        if suffix_chars >= word_chars {
            // Stripping the whole word never produces a stem.
            continue;
        }
        let stem_chars = word_chars - suffix_chars;

        if let Some(region) = rule.region.as_deref() {
            if !regions.contains_suffix(region, stem_chars) {
                continue;
            }
        }
        if let Some(min) = rule.min_stem_length {
            if stem_chars < min {
                continue;
            }
        }

        let before = word.chars().nth(stem_chars - 1);
        if let Some(c) = before {
            let s = c.to_string();
            if rule.not_preceded_by.iter().any(|p| *p == s) {
                continue;
            }
            if !rule.preceded_by_any.is_empty() && !rule.preceded_by_any.contains(&s) {
                continue;
            }
            if rule.requires_non_vowel_before && data.is_vowel(c) {
                continue;
            }
        }

        let boundary = word.len() - suffix.len();
        let mut rewritten = String::with_capacity(boundary + rule.replacement.len());
        rewritten.push_str(&word[..boundary]);
        rewritten.push_str(&rule.replacement);
        return Some(rewritten);
    }
    None
}

// ---------------------------------------------------------------------------
// Residual stripping and stem finalization
// ---------------------------------------------------------------------------

/// Strip the first matching residual suffix, unless the word is in that
/// suffix's do-not-strip set.
fn apply_residual(word: &str, data: &MorphologyData) -> Option<String> {
    for residual in &data.residual_suffixes {
        if residual.except_words.iter().any(|w| w == word) {
            continue;
        }
        if word.ends_with(residual.suffix.as_str()) && word.len() > residual.suffix.len() {
            let boundary = word.len() - residual.suffix.len();
            let mut rewritten = String::with_capacity(boundary + residual.replacement.len());
            rewritten.push_str(&word[..boundary]);
            rewritten.push_str(&residual.replacement);
            return Some(rewritten);
        }
    }
    None
}

/// Apply stem-final rewrites to a stem a rule produced. Words returned
/// unchanged by the pipeline are never rewritten here.
fn finalize(mut stem: String, data: &MorphologyData) -> String {
    for replacement in &data.final_replacements {
        if stem.ends_with(replacement.from.as_str()) {
            let boundary = stem.len() - replacement.from.len();
            stem.truncate(boundary);
            stem.push_str(&replacement.to);
        }
    }
    stem
}
