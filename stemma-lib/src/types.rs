use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-language morphology rule asset, loaded once and shared read-only by
/// every engine component for that language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphologyData {
    /// Language code ("fr", "he").
    pub language: String,
    /// The characters treated as vowels by region heuristics and rule
    /// conditions. Empty for scripts without a vowel concept.
    #[serde(default)]
    pub vowels: String,
    #[serde(default)]
    pub exceptions: ExceptionTable,
    /// Named regions in computation order; later declarations may anchor to
    /// earlier ones (e.g. r2 is computed within r1).
    #[serde(default)]
    pub regions: Vec<RegionDecl>,
    /// Suffix-rule groups in application priority order.
    #[serde(default)]
    pub rule_groups: Vec<RuleGroup>,
    /// Plural/residual endings stripped only when no group rule fired.
    #[serde(default)]
    pub residual_suffixes: Vec<ResidualSuffix>,
    /// End-of-stem rewrites applied to any stem a rule produced.
    #[serde(default)]
    pub final_replacements: Vec<FinalReplacement>,
    #[serde(default)]
    pub word_forms: WordFormAffixes,
    #[serde(default)]
    pub passive: PassiveMarkers,
}

impl MorphologyData {
    /// Parse a morphology asset from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(c)
    }
}

/// Exact-match overrides that bypass rule-based stemming entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionTable {
    /// Surface word (lowercased) to its stem or canonical full form.
    #[serde(default)]
    pub stems: HashMap<String, String>,
}

/// A named region with its ordered detection heuristics. The first
/// heuristic that yields a position wins; a trailing `wordEnd` entry makes
/// computation total (worst case a zero-length region at the word's end).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDecl {
    pub name: String,
    pub heuristics: Vec<RegionHeuristic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RegionHeuristic {
    /// If the word starts with two vowels, the region starts at `position`.
    TwoLeadingVowels { position: usize },
    /// If the word starts with one of these prefixes, the region starts
    /// right after it (par/col/tap-style rule).
    LeadingPrefixes { prefixes: Vec<String> },
    /// Region starts after the first vowel that is not the first letter.
    FirstNonInitialVowel,
    /// Region starts after the first non-vowel that follows a vowel,
    /// scanning from the start of `fromRegion` when given (R1/R2-style).
    AfterFirstNonVowelFollowingVowel {
        #[serde(default, rename = "fromRegion")]
        from_region: Option<String>,
    },
    /// Region starts at a fixed character position (clamped to word end).
    FixedPosition { position: usize },
    /// Fallback: the empty region at the end of the word.
    WordEnd,
}

/// An ordered group of suffix rules. Top-level groups are tried in
/// declaration order; a group marked `chained` is reachable only as the
/// follow-up target of a fired rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleGroup {
    pub name: String,
    #[serde(default)]
    pub chained: bool,
    pub rules: Vec<SuffixRule>,
}

/// One suffix-rewrite rule. The first rule in a group whose suffix matches
/// the word ending and whose conditions all hold fires; no later rule in
/// any group is consulted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuffixRule {
    /// Candidate endings, tried in the order given (declare longest first).
    pub suffixes: Vec<String>,
    /// The matched suffix must lie entirely within this named region.
    #[serde(default)]
    pub region: Option<String>,
    /// Text substituted for the matched suffix (empty string deletes it).
    #[serde(default)]
    pub replacement: String,
    /// Minimum character length of the remaining stem.
    #[serde(default)]
    pub min_stem_length: Option<usize>,
    /// The character immediately before the suffix must not be one of these.
    #[serde(default)]
    pub not_preceded_by: Vec<String>,
    /// The character immediately before the suffix must be one of these.
    #[serde(default)]
    pub preceded_by_any: Vec<String>,
    /// The character immediately before the suffix must be a non-vowel.
    #[serde(default)]
    pub requires_non_vowel_before: bool,
    /// Whole words this rule never applies to.
    #[serde(default)]
    pub except_words: Vec<String>,
    /// Group to continue with on the intermediate result after firing.
    #[serde(default)]
    pub then_group: Option<String>,
}

/// A designated plural/residual ending, stripped as a last resort unless
/// the word is in its do-not-strip set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidualSuffix {
    pub suffix: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(default)]
    pub except_words: Vec<String>,
}

/// Stem-final rewrite, e.g. a trailing "ç" normalized to "c" after French
/// suffix removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReplacement {
    pub from: String,
    pub to: String,
}

/// Affix lists for basic word-form generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFormAffixes {
    /// Function-word prefixes attachable to (and strippable from) a word.
    #[serde(default)]
    pub prefixes: Vec<String>,
}

/// Morphological markers of passive constructions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassiveMarkers {
    /// A token starting with one of these prefixes is a passive candidate.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Exact surface forms that are always passive verbs.
    #[serde(default)]
    pub exact_forms: Vec<String>,
    /// Tokens shorter than this never count as passive candidates.
    #[serde(default)]
    pub min_word_length: usize,
}
