pub mod languages;
pub mod passive;
pub mod regions;
pub mod registry;
pub mod research;
pub mod stem;
pub mod text;
pub mod types;
pub mod word_forms;

pub use languages::Language;
pub use passive::is_passive_sentence;
pub use registry::{
    BuildError, ConfigKey, ConfigValue, Helper, HelperKey, LanguagePatch, PassiveConstructionType,
    Registry, ResearchDataKey, ResearchKey,
};
pub use research::ResearchResult;
pub use stem::stem;
pub use types::MorphologyData;
pub use word_forms::basic_word_forms;
