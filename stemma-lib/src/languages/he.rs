// Hebrew: morphological passive detection, function-word-prefix word
// forms, rule-based stemmer, and no Flesch reading score (the formula's
// constants are calibrated for Latin-script languages).

use once_cell::sync::Lazy;

use crate::languages::{defaults, morphology_stemmer, Language};
use crate::passive;
use crate::registry::{
    ConfigKey, ConfigValue, Helper, HelperKey, LanguagePatch, PassiveConstructionType, Registry,
    ResearchFn, ResearchKey, SentenceLengthConfig,
};
use crate::research;
use crate::types::MorphologyData;
use crate::word_forms;

static MORPHOLOGY: Lazy<MorphologyData> = Lazy::new(|| {
    MorphologyData::from_json(include_str!("../../data/he.json"))
        .expect("embedded Hebrew morphology data is invalid")
});

/// The embedded Hebrew morphology asset.
pub fn morphology_data() -> MorphologyData {
    MORPHOLOGY.clone()
}

const FUNCTION_WORDS: &[&str] = &[
    "של", "את", "על", "עם", "זה", "זאת", "הוא", "היא", "הם", "הן", "אני", "אתה", "אתם",
    "אנחנו", "לא", "כן", "גם", "רק", "כל", "יש", "אין", "אל", "או", "אם", "כי", "מה", "מי",
    "אבל", "עוד", "כבר", "מאוד", "היה", "הייתה", "יותר", "פחות",
];

const TRANSITION_WORDS: &[&str] = &[
    "אבל", "אולם", "לכן", "בנוסף", "כמו כן", "למשל", "לבסוף", "עם זאת", "לעומת זאת",
    "מצד שני", "בסופו של דבר", "כתוצאה מכך", "יתרה מזאת", "לסיכום", "ראשית", "שנית",
];

const TWO_PART_TRANSITION_WORDS: &[(&str, &str)] = &[
    ("לא רק", "אלא גם"),
    ("או", "או"),
    ("גם", "וגם"),
];

const FIRST_WORD_EXCEPTIONS: &[&str] = &["זה", "זאת", "אלה", "אלו"];

/// Word-form generation binds to the embedded affix tables: it needs no
/// late-attached data and works on a freshly built registry.
fn basic_word_forms_helper(_registry: &Registry, word: &str) -> Vec<String> {
    word_forms::basic_word_forms(word, &MORPHOLOGY.word_forms)
}

/// Morphological passive detection over the embedded construction markers.
fn passive_sentence_helper(_registry: &Registry, sentence: &str) -> bool {
    passive::is_passive_sentence(sentence, &MORPHOLOGY.passive)
}

/// The Hebrew patch over the shared defaults.
pub fn patch() -> LanguagePatch {
    let mut patch = LanguagePatch::default();
    patch.configs.overrides = vec![
        (ConfigKey::FunctionWords, defaults::words(FUNCTION_WORDS)),
        (ConfigKey::TransitionWords, defaults::words(TRANSITION_WORDS)),
        (
            ConfigKey::TwoPartTransitionWords,
            defaults::word_pairs(TWO_PART_TRANSITION_WORDS),
        ),
        (
            ConfigKey::FirstWordExceptions,
            defaults::words(FIRST_WORD_EXCEPTIONS),
        ),
        (
            ConfigKey::SentenceLength,
            ConfigValue::SentenceLength(SentenceLengthConfig {
                recommended_maximum: 15,
            }),
        ),
        (ConfigKey::Language, ConfigValue::Language(Language::He)),
        (
            ConfigKey::PassiveConstructionType,
            ConfigValue::PassiveConstructionType(PassiveConstructionType::Morphological),
        ),
    ];
    patch.helpers.overrides = vec![(HelperKey::GetStemmer, Helper::Stemmer(morphology_stemmer))];
    patch.helpers.additions = vec![
        (
            HelperKey::CreateBasicWordForms,
            Helper::WordForms(basic_word_forms_helper),
        ),
        (
            HelperKey::IsPassiveSentence,
            Helper::SentenceTest(passive_sentence_helper),
        ),
    ];
    patch.researches.additions = vec![(
        ResearchKey::FunctionWordsInKeyphrase,
        research::function_words_in_keyphrase as ResearchFn,
    )];
    patch.researches.deletions = vec![ResearchKey::FleschReadingScore];
    patch
}
