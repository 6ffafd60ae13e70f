// Per-language capability composition. Each language module contributes a
// patch over the shared defaults plus an embedded morphology asset; the
// engine itself stays language-independent.

pub mod defaults;
pub mod fr;
pub mod he;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::registry::{BuildError, LanguagePatch, Registry, UnknownName};
use crate::stem;
use crate::types::MorphologyData;

/// The supported languages. `En` is the language-independent base with no
/// morphology asset of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    He,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::He => "he",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "he" => Ok(Language::He),
            _ => Err(UnknownName {
                kind: "language",
                name: s.to_string(),
            }),
        }
    }
}

/// Build the frozen capability registry for one language. Morphology data
/// is not attached here; callers attach it separately when available.
pub fn registry(language: Language) -> Result<Registry, BuildError> {
    let patch = match language {
        Language::En => LanguagePatch::default(),
        Language::Fr => fr::patch(),
        Language::He => he::patch(),
    };
    Registry::build(defaults::defaults(), patch)
}

/// The embedded morphology asset for a language, if it ships one.
pub fn morphology_data(language: Language) -> Option<MorphologyData> {
    match language {
        Language::En => None,
        Language::Fr => Some(fr::morphology_data()),
        Language::He => Some(he::morphology_data()),
    }
}

/// The stemmer helper shared by all languages with a morphology asset:
/// stems with the registry's attached data, or returns the word unchanged
/// while no data is attached.
pub(crate) fn morphology_stemmer(registry: &Registry, word: &str) -> String {
    match registry.morphology() {
        Some(data) => stem::stem(word, data),
        None => word.to_string(),
    }
}
