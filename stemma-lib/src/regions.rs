// Region computation: named half-open character spans within a word that
// suffix rules may be constrained to. Heuristics are evaluated in declared
// order per region; the first one that yields a position wins, and a
// trailing word-end fallback keeps computation total.

use std::collections::HashMap;

use crate::types::{MorphologyData, RegionHeuristic};

/// The computed region starts for one word, keyed by region name. A start
/// equal to the word's character length is a zero-length region.
#[derive(Debug, Clone)]
pub struct Regions {
    starts: HashMap<String, usize>,
    word_len: usize,
}

impl Regions {
    /// The character position where the named region starts. Unknown names
    /// resolve to the end of the word, i.e. an empty region that no suffix
    /// can lie within.
    pub fn start(&self, name: &str) -> usize {
        self.starts.get(name).copied().unwrap_or(self.word_len)
    }

    /// True if a suffix beginning at character `suffix_start` lies entirely
    /// within the named region.
    pub fn contains_suffix(&self, name: &str, suffix_start: usize) -> bool {
        suffix_start >= self.start(name)
    }
}

/// Compute every declared region for `chars` in declaration order.
pub fn compute(chars: &[char], data: &MorphologyData) -> Regions {
    let mut regions = Regions {
        starts: HashMap::new(),
        word_len: chars.len(),
    };

    for decl in &data.regions {
        let mut start = chars.len();
        for heuristic in &decl.heuristics {
            if let Some(pos) = eval(heuristic, chars, data, &regions) {
                start = pos.min(chars.len());
                break;
            }
        }
        regions.starts.insert(decl.name.clone(), start);
    }

    regions
}

fn eval(
    heuristic: &RegionHeuristic,
    chars: &[char],
    data: &MorphologyData,
    computed: &Regions,
) -> Option<usize> {
    match heuristic {
        RegionHeuristic::TwoLeadingVowels { position } => {
            if chars.len() >= *position
                && chars.len() >= 2
                && data.is_vowel(chars[0])
                && data.is_vowel(chars[1])
            {
                Some(*position)
            } else {
                None
            }
        }
        RegionHeuristic::LeadingPrefixes { prefixes } => prefixes.iter().find_map(|p| {
            let prefix: Vec<char> = p.chars().collect();
            if chars.len() > prefix.len() && chars[..prefix.len()] == prefix[..] {
                Some(prefix.len())
            } else {
                None
            }
        }),
        RegionHeuristic::FirstNonInitialVowel => (1..chars.len())
            .find(|&i| data.is_vowel(chars[i]))
            .map(|i| i + 1),
        RegionHeuristic::AfterFirstNonVowelFollowingVowel { from_region } => {
            let from = from_region.as_deref().map_or(0, |r| computed.start(r));
            (from + 1..chars.len())
                .find(|&i| !data.is_vowel(chars[i]) && data.is_vowel(chars[i - 1]))
                .map(|i| i + 1)
        }
        RegionHeuristic::FixedPosition { position } => Some(*position),
        RegionHeuristic::WordEnd => Some(chars.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionDecl;

    fn french_like() -> MorphologyData {
        MorphologyData::from_json(
            r#"{
                "language": "xx",
                "vowels": "aeiouyâàëéêèïîôûù",
                "regions": [
                    { "name": "rv", "heuristics": [
                        { "kind": "twoLeadingVowels", "position": 3 },
                        { "kind": "leadingPrefixes", "prefixes": ["par", "col", "tap"] },
                        { "kind": "firstNonInitialVowel" },
                        { "kind": "wordEnd" }
                    ] },
                    { "name": "r1", "heuristics": [
                        { "kind": "afterFirstNonVowelFollowingVowel" },
                        { "kind": "wordEnd" }
                    ] },
                    { "name": "r2", "heuristics": [
                        { "kind": "afterFirstNonVowelFollowingVowel", "fromRegion": "r1" },
                        { "kind": "wordEnd" }
                    ] }
                ]
            }"#,
        )
        .expect("test data should parse")
    }

    fn starts(word: &str) -> Regions {
        let chars: Vec<char> = word.chars().collect();
        compute(&chars, &french_like())
    }

    #[test]
    fn test_rv_two_leading_vowels() {
        // "aimer" begins with two vowels, so rv starts after the third letter.
        assert_eq!(starts("aimer").start("rv"), 3);
    }

    #[test]
    fn test_rv_first_non_initial_vowel() {
        assert_eq!(starts("voler").start("rv"), 2);
        assert_eq!(starts("adorer").start("rv"), 3);
    }

    #[test]
    fn test_rv_leading_prefix() {
        assert_eq!(starts("tapis").start("rv"), 3);
        assert_eq!(starts("partir").start("rv"), 3);
    }

    #[test]
    fn test_rv_fallback_is_word_end() {
        // Single letter: no heuristic matches, region is empty at the end.
        assert_eq!(starts("a").start("rv"), 1);
    }

    #[test]
    fn test_r1_no_consonant_falls_to_word_end() {
        assert_eq!(starts("ai").start("r1"), 2);
    }

    #[test]
    fn test_r1_and_r2_nested() {
        // paresseuse: r1 after "par", r2 after "pares".
        let r = starts("paresseuse");
        assert_eq!(r.start("r1"), 3);
        assert_eq!(r.start("r2"), 5);
        assert!(r.contains_suffix("r2", 6));
        assert!(!r.contains_suffix("r2", 4));
    }

    #[test]
    fn test_unknown_region_is_empty() {
        let r = starts("voler");
        assert!(!r.contains_suffix("r9", 4));
    }

    #[test]
    fn test_fixed_position_clamps_to_word_end() {
        let data = MorphologyData {
            language: "xx".into(),
            vowels: String::new(),
            exceptions: Default::default(),
            regions: vec![RegionDecl {
                name: "r1".into(),
                heuristics: vec![RegionHeuristic::FixedPosition { position: 2 }],
            }],
            rule_groups: vec![],
            residual_suffixes: vec![],
            final_replacements: vec![],
            word_forms: Default::default(),
            passive: Default::default(),
        };
        let chars: Vec<char> = "x".chars().collect();
        assert_eq!(compute(&chars, &data).start("r1"), 1);
    }
}
