// Per-language capability registry: named config values, helper functions
// and research functions, composed once from language-independent defaults
// plus a language patch (add / override / delete), then frozen. All query
// paths are total; absence is an observable outcome, never an error.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::languages::Language;
use crate::research::ResearchResult;
use crate::types::MorphologyData;

// ---------------------------------------------------------------------------
// Capability keys
// ---------------------------------------------------------------------------

/// Common surface of the statically enumerated key sets. The string names
/// are the stable wire contract with downstream consumers and must not
/// change.
pub trait CapabilityKey: Copy + Eq + Hash {
    const KIND: &'static str;
    fn as_str(&self) -> &'static str;
}

macro_rules! capability_keys {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl CapabilityKey for $name {
            const KIND: &'static str = $kind;

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(UnknownName { kind: $kind, name: s.to_string() }),
                }
            }
        }
    };
}

capability_keys!(
    /// Names of configuration values.
    ConfigKey, "config", {
        FunctionWords => "functionWords",
        TransitionWords => "transitionWords",
        TwoPartTransitionWords => "twoPartTransitionWords",
        FirstWordExceptions => "firstWordExceptions",
        SentenceLength => "sentenceLength",
        StopWords => "stopWords",
        Language => "language",
        PassiveConstructionType => "passiveConstructionType",
    }
);

capability_keys!(
    /// Names of helper functions.
    HelperKey, "helper", {
        GetStemmer => "getStemmer",
        CreateBasicWordForms => "createBasicWordForms",
        IsPassiveSentence => "isPassiveSentence",
    }
);

capability_keys!(
    /// Names of research functions.
    ResearchKey, "research", {
        ParagraphLength => "getParagraphLength",
        SentenceBeginnings => "getSentenceBeginnings",
        TransitionWords => "findTransitionWords",
        FleschReadingScore => "getFleschReadingScore",
        PassiveVoice => "getPassiveVoice",
        FunctionWordsInKeyphrase => "functionWordsInKeyphrase",
    }
);

capability_keys!(
    /// Names of late-attached research data slots.
    ResearchDataKey, "research data", {
        Morphology => "morphology",
    }
);

/// A name that does not belong to the statically enumerated key set.
#[derive(Debug, Clone, Error)]
#[error("unknown {kind} name: {name}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Capability values
// ---------------------------------------------------------------------------

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigValue {
    Words(Vec<String>),
    WordPairs(Vec<(String, String)>),
    SentenceLength(SentenceLengthConfig),
    Language(Language),
    PassiveConstructionType(PassiveConstructionType),
}

impl ConfigValue {
    pub fn as_words(&self) -> Option<&[String]> {
        match self {
            ConfigValue::Words(words) => Some(words),
            _ => None,
        }
    }

    pub fn as_word_pairs(&self) -> Option<&[(String, String)]> {
        match self {
            ConfigValue::WordPairs(pairs) => Some(pairs),
            _ => None,
        }
    }

    pub fn as_language(&self) -> Option<Language> {
        match self {
            ConfigValue::Language(language) => Some(*language),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceLengthConfig {
    pub recommended_maximum: usize,
}

/// How a language detects passive voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassiveConstructionType {
    Morphological,
    Periphrastic,
}

pub type StemmerFn = fn(&Registry, &str) -> String;
pub type WordFormsFn = fn(&Registry, &str) -> Vec<String>;
pub type SentenceTestFn = fn(&Registry, &str) -> bool;

/// A helper function slot. Helpers receive the registry so they can read
/// late-attached research data at call time rather than at registration.
#[derive(Clone, Copy, PartialEq)]
pub enum Helper {
    Stemmer(StemmerFn),
    WordForms(WordFormsFn),
    SentenceTest(SentenceTestFn),
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Helper::Stemmer(_) => f.write_str("Helper::Stemmer"),
            Helper::WordForms(_) => f.write_str("Helper::WordForms"),
            Helper::SentenceTest(_) => f.write_str("Helper::SentenceTest"),
        }
    }
}

pub type ResearchFn = fn(&Registry, &str) -> ResearchResult;

// ---------------------------------------------------------------------------
// Defaults and patches
// ---------------------------------------------------------------------------

/// The language-independent base capability set.
#[derive(Default)]
pub struct Defaults {
    pub configs: Vec<(ConfigKey, ConfigValue)>,
    pub helpers: Vec<(HelperKey, Helper)>,
    pub researches: Vec<(ResearchKey, ResearchFn)>,
}

/// One kind's patch section. Overrides replace entries; additions must not
/// collide with an un-deleted existing name; deletions are applied last and
/// remove the name regardless of origin.
pub struct Patch<K, V> {
    pub additions: Vec<(K, V)>,
    pub overrides: Vec<(K, V)>,
    pub deletions: Vec<K>,
}

impl<K, V> Default for Patch<K, V> {
    fn default() -> Self {
        Self {
            additions: vec![],
            overrides: vec![],
            deletions: vec![],
        }
    }
}

/// A language's complete customization of the defaults.
#[derive(Default)]
pub struct LanguagePatch {
    pub configs: Patch<ConfigKey, ConfigValue>,
    pub helpers: Patch<HelperKey, Helper>,
    pub researches: Patch<ResearchKey, ResearchFn>,
}

/// The only failures the registry can produce, and only at construction
/// or attach time. Queries never fail.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    #[error("{kind} addition collides with existing entry: {name}")]
    AdditionCollision {
        kind: &'static str,
        name: &'static str,
    },
    #[error("research data already attached for key: {0}")]
    DuplicateAttach(ResearchDataKey),
}

fn apply_patch<K: CapabilityKey, V>(
    defaults: Vec<(K, V)>,
    patch: Patch<K, V>,
) -> Result<HashMap<K, V>, BuildError> {
    let mut table: HashMap<K, V> = defaults.into_iter().collect();

    for (key, value) in patch.overrides {
        table.insert(key, value);
    }
    for (key, value) in patch.additions {
        if table.contains_key(&key) && !patch.deletions.contains(&key) {
            return Err(BuildError::AdditionCollision {
                kind: K::KIND,
                name: key.as_str(),
            });
        }
        table.insert(key, value);
    }
    for key in &patch.deletions {
        table.remove(key);
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A frozen per-language capability table. Safe to share across threads
/// once built; the only post-build write is the one-shot research-data
/// attach, which must complete before dependent helpers rely on it.
#[derive(Debug)]
pub struct Registry {
    configs: HashMap<ConfigKey, ConfigValue>,
    helpers: HashMap<HelperKey, Helper>,
    researches: HashMap<ResearchKey, ResearchFn>,
    morphology: OnceLock<MorphologyData>,
}

impl Registry {
    /// Compose defaults and a language patch into a frozen registry.
    /// Single-shot initialization: construct fully before sharing.
    pub fn build(defaults: Defaults, patch: LanguagePatch) -> Result<Self, BuildError> {
        Ok(Self {
            configs: apply_patch(defaults.configs, patch.configs)?,
            helpers: apply_patch(defaults.helpers, patch.helpers)?,
            researches: apply_patch(defaults.researches, patch.researches)?,
            morphology: OnceLock::new(),
        })
    }

    /// True iff the research exists and was not deleted by the language.
    pub fn has_research(&self, key: ResearchKey) -> bool {
        self.researches.contains_key(&key)
    }

    /// The research function, or None for a deleted or never-defined name —
    /// distinguishable from a research that evaluates to a false result.
    pub fn get_research(&self, key: ResearchKey) -> Option<ResearchFn> {
        self.researches.get(&key).copied()
    }

    pub fn get_config(&self, key: ConfigKey) -> Option<&ConfigValue> {
        self.configs.get(&key)
    }

    pub fn get_helper(&self, key: HelperKey) -> Option<Helper> {
        self.helpers.get(&key).copied()
    }

    /// The registry's language, when configured.
    pub fn language(&self) -> Option<Language> {
        self.get_config(ConfigKey::Language)?.as_language()
    }

    /// Attach late-loaded research data. Write-once per key: a second
    /// attach for the same key is rejected. Must complete before helpers
    /// depending on the data are expected to use it.
    pub fn attach_research_data(
        &self,
        key: ResearchDataKey,
        data: MorphologyData,
    ) -> Result<(), BuildError> {
        match key {
            ResearchDataKey::Morphology => self
                .morphology
                .set(data)
                .map_err(|_| BuildError::DuplicateAttach(key)),
        }
    }

    /// The attached morphology data, if any.
    pub fn morphology(&self) -> Option<&MorphologyData> {
        self.morphology.get()
    }

    /// The stemmer helper as a closure bound to this registry.
    pub fn stemmer(&self) -> Option<impl Fn(&str) -> String + '_> {
        match self.get_helper(HelperKey::GetStemmer)? {
            Helper::Stemmer(f) => Some(move |word: &str| f(self, word)),
            _ => None,
        }
    }

    /// The word-form helper as a closure bound to this registry.
    pub fn word_forms(&self) -> Option<impl Fn(&str) -> Vec<String> + '_> {
        match self.get_helper(HelperKey::CreateBasicWordForms)? {
            Helper::WordForms(f) => Some(move |word: &str| f(self, word)),
            _ => None,
        }
    }

    /// The passive-sentence helper as a closure bound to this registry.
    pub fn passive_test(&self) -> Option<impl Fn(&str) -> bool + '_> {
        match self.get_helper(HelperKey::IsPassiveSentence)? {
            Helper::SentenceTest(f) => Some(move |sentence: &str| f(self, sentence)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research;

    fn toy_defaults() -> Defaults {
        Defaults {
            configs: vec![(
                ConfigKey::Language,
                ConfigValue::Language(Language::En),
            )],
            helpers: vec![(HelperKey::GetStemmer, Helper::Stemmer(identity_stemmer))],
            researches: vec![(ResearchKey::ParagraphLength, research::paragraph_length as ResearchFn)],
        }
    }

    fn identity_stemmer(_: &Registry, word: &str) -> String {
        word.to_string()
    }

    #[test]
    fn test_defaults_pass_through() {
        let registry = Registry::build(toy_defaults(), LanguagePatch::default())
            .expect("build should succeed");
        assert!(registry.has_research(ResearchKey::ParagraphLength));
        assert!(registry.get_helper(HelperKey::GetStemmer).is_some());
        assert_eq!(registry.language(), Some(Language::En));
    }

    #[test]
    fn test_deletion_removes_default() {
        let mut patch = LanguagePatch::default();
        patch.researches.deletions.push(ResearchKey::ParagraphLength);
        let registry = Registry::build(toy_defaults(), patch).expect("build should succeed");
        assert!(!registry.has_research(ResearchKey::ParagraphLength));
        assert!(registry.get_research(ResearchKey::ParagraphLength).is_none());
    }

    #[test]
    fn test_addition_collision_is_a_build_error() {
        let mut patch = LanguagePatch::default();
        patch
            .helpers
            .additions
            .push((HelperKey::GetStemmer, Helper::Stemmer(identity_stemmer)));
        let err = Registry::build(toy_defaults(), patch).unwrap_err();
        assert!(matches!(err, BuildError::AdditionCollision { name: "getStemmer", .. }));
    }

    #[test]
    fn test_addition_after_deletion_is_allowed() {
        let mut patch = LanguagePatch::default();
        patch.helpers.deletions.push(HelperKey::GetStemmer);
        patch
            .helpers
            .additions
            .push((HelperKey::GetStemmer, Helper::Stemmer(identity_stemmer)));
        let registry = Registry::build(toy_defaults(), patch).expect("build should succeed");
        assert!(registry.get_helper(HelperKey::GetStemmer).is_some());
    }

    #[test]
    fn test_attach_is_write_once() {
        let registry = Registry::build(toy_defaults(), LanguagePatch::default())
            .expect("build should succeed");
        let data = crate::types::MorphologyData::from_json(r#"{ "language": "xx" }"#)
            .expect("data should parse");
        registry
            .attach_research_data(ResearchDataKey::Morphology, data.clone())
            .expect("first attach should succeed");
        let err = registry
            .attach_research_data(ResearchDataKey::Morphology, data)
            .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateAttach(ResearchDataKey::Morphology)));
    }

    #[test]
    fn test_key_names_round_trip() {
        assert_eq!(ConfigKey::FunctionWords.as_str(), "functionWords");
        assert_eq!(
            "getStemmer".parse::<HelperKey>().expect("known name"),
            HelperKey::GetStemmer
        );
        assert_eq!(
            "getFleschReadingScore".parse::<ResearchKey>().expect("known name"),
            ResearchKey::FleschReadingScore
        );
        assert!("noSuchResearch".parse::<ResearchKey>().is_err());
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }

    #[test]
    fn test_absent_config_is_none() {
        let registry = Registry::build(toy_defaults(), LanguagePatch::default())
            .expect("build should succeed");
        assert!(registry.get_config(ConfigKey::StopWords).is_none());
    }
}
