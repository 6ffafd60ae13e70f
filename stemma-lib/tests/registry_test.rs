// Registry composition tests: default inheritance, per-language override
// and deletion, absent capabilities, and late data attachment.

use stemma_lib::languages::{self, Language};
use stemma_lib::registry::{
    ConfigKey, ConfigValue, HelperKey, PassiveConstructionType, ResearchDataKey, ResearchKey,
};
use stemma_lib::ResearchResult;

#[test]
fn inherited_default_research_is_present() {
    let registry = languages::registry(Language::He).expect("he registry should build");
    assert!(registry.has_research(ResearchKey::ParagraphLength));
}

#[test]
fn language_specific_research_is_present() {
    let registry = languages::registry(Language::He).expect("he registry should build");
    assert!(registry.has_research(ResearchKey::FunctionWordsInKeyphrase));
}

#[test]
fn deleted_default_research_is_absent() {
    let registry = languages::registry(Language::He).expect("he registry should build");
    // The base set defines the Flesch research; Hebrew deletes it.
    let base = languages::registry(Language::En).expect("en registry should build");
    assert!(base.has_research(ResearchKey::FleschReadingScore));
    assert!(!registry.has_research(ResearchKey::FleschReadingScore));
    assert!(registry
        .get_research(ResearchKey::FleschReadingScore)
        .is_none());
}

#[test]
fn absent_research_differs_from_false_result() {
    let registry = languages::registry(Language::He).expect("he registry should build");
    // A research that evaluates to a false outcome still exists.
    let research = registry
        .get_research(ResearchKey::FunctionWordsInKeyphrase)
        .expect("keyphrase research should exist");
    assert_eq!(research(&registry, "ספר חדש"), ResearchResult::Bool(false));
    // An absent research is None, not a false result.
    assert!(registry
        .get_research(ResearchKey::FleschReadingScore)
        .is_none());
}

#[test]
fn unsupported_config_is_absent_not_false() {
    let registry = languages::registry(Language::He).expect("he registry should build");
    assert!(registry.get_config(ConfigKey::StopWords).is_none());
}

#[test]
fn language_configs_are_overridden() {
    let registry = languages::registry(Language::He).expect("he registry should build");
    assert_eq!(registry.language(), Some(Language::He));
    assert_eq!(
        registry.get_config(ConfigKey::PassiveConstructionType),
        Some(&ConfigValue::PassiveConstructionType(
            PassiveConstructionType::Morphological
        ))
    );

    let function_words = registry
        .get_config(ConfigKey::FunctionWords)
        .and_then(|v| v.as_words())
        .expect("function words should be configured");
    assert!(function_words.iter().any(|w| w == "של"));
}

#[test]
fn helper_absent_for_language_without_it() {
    let registry = languages::registry(Language::Fr).expect("fr registry should build");
    assert!(registry.get_helper(HelperKey::CreateBasicWordForms).is_none());
    assert!(registry.get_helper(HelperKey::IsPassiveSentence).is_none());
    // The stemmer helper, by contrast, is always present.
    assert!(registry.get_helper(HelperKey::GetStemmer).is_some());
}

#[test]
fn stemmer_helper_degrades_before_attach_and_stems_after() {
    let registry = languages::registry(Language::Fr).expect("fr registry should build");
    let stemmer = registry.stemmer().expect("stemmer helper should exist");
    // No morphology attached yet: identity fallback.
    assert_eq!(stemmer("dormaient"), "dormaient");

    registry
        .attach_research_data(
            ResearchDataKey::Morphology,
            languages::morphology_data(Language::Fr).expect("fr asset"),
        )
        .expect("attach should succeed");
    let stemmer = registry.stemmer().expect("stemmer helper should exist");
    assert_eq!(stemmer("dormaient"), "dorm");
}

#[test]
fn attaching_the_same_key_twice_is_rejected() {
    let registry = languages::registry(Language::Fr).expect("fr registry should build");
    let data = languages::morphology_data(Language::Fr).expect("fr asset");
    registry
        .attach_research_data(ResearchDataKey::Morphology, data.clone())
        .expect("first attach should succeed");
    assert!(registry
        .attach_research_data(ResearchDataKey::Morphology, data)
        .is_err());
}

#[test]
fn research_functions_run_through_the_registry() {
    let registry = languages::registry(Language::En).expect("en registry should build");
    let research = registry
        .get_research(ResearchKey::ParagraphLength)
        .expect("paragraph research should exist");
    assert_eq!(
        research(&registry, "one two\n\nthree four five"),
        ResearchResult::Counts(vec![2, 3])
    );

    let flesch = registry
        .get_research(ResearchKey::FleschReadingScore)
        .expect("flesch research should exist");
    let ResearchResult::Score(score) = flesch(&registry, "The cat sat on the mat.") else {
        panic!("flesch research should produce a score");
    };
    assert!(score > 80.0);
}

#[test]
fn capability_names_are_the_wire_contract() {
    assert_eq!(HelperKey::GetStemmer.to_string(), "getStemmer");
    assert_eq!(HelperKey::CreateBasicWordForms.to_string(), "createBasicWordForms");
    assert_eq!(HelperKey::IsPassiveSentence.to_string(), "isPassiveSentence");
    assert_eq!(ConfigKey::FunctionWords.to_string(), "functionWords");
    assert_eq!(ConfigKey::TwoPartTransitionWords.to_string(), "twoPartTransitionWords");
    assert_eq!(ConfigKey::PassiveConstructionType.to_string(), "passiveConstructionType");
    assert_eq!(ResearchKey::FleschReadingScore.to_string(), "getFleschReadingScore");
    assert_eq!(
        "functionWordsInKeyphrase".parse::<ResearchKey>().expect("known name"),
        ResearchKey::FunctionWordsInKeyphrase
    );
}
