// French: rule-based stemmer over the embedded morphology asset, French
// config lists, periphrastic passive (no morphological passive helper).

use once_cell::sync::Lazy;

use crate::languages::{defaults, morphology_stemmer, Language};
use crate::registry::{
    ConfigKey, ConfigValue, Helper, HelperKey, LanguagePatch, ResearchFn, ResearchKey,
};
use crate::research;
use crate::types::MorphologyData;

static MORPHOLOGY: Lazy<MorphologyData> = Lazy::new(|| {
    MorphologyData::from_json(include_str!("../../data/fr.json"))
        .expect("embedded French morphology data is invalid")
});

/// The embedded French morphology asset.
pub fn morphology_data() -> MorphologyData {
    MORPHOLOGY.clone()
}

const FUNCTION_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "d'", "et", "ou", "mais", "donc", "or",
    "ni", "car", "que", "qui", "quoi", "dont", "où", "je", "tu", "il", "elle", "on", "nous",
    "vous", "ils", "elles", "ce", "cet", "cette", "ces", "mon", "ma", "mes", "ton", "ta", "tes",
    "son", "sa", "ses", "notre", "votre", "leur", "leurs", "ne", "pas", "plus", "moins", "très",
    "bien", "aussi", "comme", "pour", "par", "sur", "sous", "dans", "avec", "sans", "est", "sont",
    "être", "avoir", "a", "ont", "y", "en", "se", "si", "au", "aux",
];

const TRANSITION_WORDS: &[&str] = &[
    "ainsi", "alors", "cependant", "certes", "d'abord", "d'ailleurs", "de plus", "donc",
    "effectivement", "également", "enfin", "ensuite", "finalement", "néanmoins", "notamment",
    "par ailleurs", "par conséquent", "par exemple", "pourtant", "puis", "toutefois",
    "en conclusion", "en effet", "en outre", "en revanche", "en résumé", "c'est-à-dire",
];

const TWO_PART_TRANSITION_WORDS: &[(&str, &str)] = &[
    ("non seulement", "mais aussi"),
    ("soit", "soit"),
    ("d'une part", "d'autre part"),
    ("ni", "ni"),
];

const FIRST_WORD_EXCEPTIONS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "ce", "cet", "cette", "ces",
];

/// The French patch over the shared defaults.
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
        (ConfigKey::Language, ConfigValue::Language(Language::Fr)),
    ];
    patch.helpers.overrides = vec![(HelperKey::GetStemmer, Helper::Stemmer(morphology_stemmer))];
    patch.researches.additions = vec![(
        ResearchKey::FunctionWordsInKeyphrase,
        research::function_words_in_keyphrase as ResearchFn,
    )];
    patch
}
