// Language-independent base capability set. Config lists default to
// English; languages override them wholesale in their patches.

use crate::registry::{
    ConfigKey, ConfigValue, Defaults, Helper, PassiveConstructionType, Registry, ResearchFn,
    ResearchKey, SentenceLengthConfig,
};
use crate::research;

const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "of", "in", "on", "at", "to", "for", "with", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "being", "it", "its", "this", "that",
    "these", "those", "there", "here", "he", "she", "they", "we", "you", "i", "his", "her",
    "their", "our", "your", "my", "me", "him", "them", "us", "not", "no", "so", "if", "then",
    "than", "too", "very", "can", "will", "would", "should", "could", "just", "about", "into",
    "over", "after", "before", "between", "out", "up", "down", "off", "again", "further", "once",
];

const TRANSITION_WORDS: &[&str] = &[
    "accordingly", "additionally", "afterward", "also", "although", "besides", "consequently",
    "conversely", "finally", "first", "furthermore", "hence", "however", "indeed", "instead",
    "likewise", "meanwhile", "moreover", "nevertheless", "next", "nonetheless", "otherwise",
    "similarly", "still", "then", "therefore", "thus", "while", "yet", "in addition",
    "for example", "for instance", "as a result", "in contrast", "on the other hand",
    "in conclusion", "in other words", "above all",
];

const TWO_PART_TRANSITION_WORDS: &[(&str, &str)] = &[
    ("both", "and"),
    ("either", "or"),
    ("neither", "nor"),
    ("not only", "but also"),
    ("whether", "or"),
];

const FIRST_WORD_EXCEPTIONS: &[&str] = &["the", "a", "an", "this", "that", "these", "those", "it"];

pub(crate) fn words(list: &[&str]) -> ConfigValue {
    ConfigValue::Words(list.iter().map(|w| w.to_string()).collect())
}

pub(crate) fn word_pairs(list: &[(&str, &str)]) -> ConfigValue {
    ConfigValue::WordPairs(
        list.iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    )
}

/// The base stemmer: identity. Languages with a morphology asset override
/// this with the rule-based stemmer.
fn base_stemmer(_registry: &Registry, word: &str) -> String {
    word.to_string()
}

/// The shared default capability set every language patch starts from.
pub fn defaults() -> Defaults {
    use crate::languages::Language;
    use crate::registry::HelperKey;

    Defaults {
        configs: vec![
            (ConfigKey::FunctionWords, words(FUNCTION_WORDS)),
            (ConfigKey::TransitionWords, words(TRANSITION_WORDS)),
            (
                ConfigKey::TwoPartTransitionWords,
                word_pairs(TWO_PART_TRANSITION_WORDS),
            ),
            (ConfigKey::FirstWordExceptions, words(FIRST_WORD_EXCEPTIONS)),
            (
                ConfigKey::SentenceLength,
                ConfigValue::SentenceLength(SentenceLengthConfig {
                    recommended_maximum: 20,
                }),
            ),
            (ConfigKey::Language, ConfigValue::Language(Language::En)),
            (
                ConfigKey::PassiveConstructionType,
                ConfigValue::PassiveConstructionType(PassiveConstructionType::Periphrastic),
            ),
        ],
        helpers: vec![(HelperKey::GetStemmer, Helper::Stemmer(base_stemmer))],
        researches: vec![
            (
                ResearchKey::ParagraphLength,
                research::paragraph_length as ResearchFn,
            ),
            (
                ResearchKey::SentenceBeginnings,
                research::sentence_beginnings as ResearchFn,
            ),
            (
                ResearchKey::TransitionWords,
                research::transition_words as ResearchFn,
            ),
            (
                ResearchKey::FleschReadingScore,
                research::flesch_reading_score as ResearchFn,
            ),
            (
                ResearchKey::PassiveVoice,
                research::passive_voice as ResearchFn,
            ),
        ],
    }
}
