use std::sync::Arc;

use sarissa_analysis::analysis::analyzer::{Analyzer, AnalyzerChain, PolyAnalyzer};
use sarissa_analysis::analysis::language::Language;
use sarissa_analysis::analysis::registry;
use sarissa_analysis::analysis::serialized::SerializedForm;
use sarissa_analysis::analysis::token_filter::{
    LowercaseFilter, NormalizationForm, Normalizer, SnowballStemmer, StopFilter,
};
use sarissa_analysis::analysis::tokenizer::{RegexTokenizer, UnicodeWordTokenizer};
use sarissa_analysis::error::SarissaError;

fn assert_round_trip(analyzer: &dyn Analyzer) {
    let dump = analyzer.dump();
    let loaded = registry::load(&dump).unwrap();

    assert!(analyzer.equals(loaded.as_ref()), "Dump => Load round trip");
    assert!(loaded.equals(analyzer));
    assert_eq!(loaded.dump(), dump);
}

#[test]
fn test_language_discrimination_scenario() {
    let analyzer = PolyAnalyzer::new("en", None).unwrap();
    let other = PolyAnalyzer::new("es", None).unwrap();
    let dump = analyzer.dump();
    let other_dump = other.dump();
    let clone = PolyAnalyzer::load(&dump).unwrap();
    let other_clone = PolyAnalyzer::load(&other_dump).unwrap();

    assert!(!analyzer.equals(&other), "Equals() false with different language");
    assert!(analyzer.equals(&clone), "Dump => Load round trip");
    assert!(other.equals(&other_clone), "Dump => Load round trip");
    assert!(!clone.equals(&other_clone));
}

#[test]
fn test_round_trip_every_language() {
    for language in Language::ALL {
        let analyzer = PolyAnalyzer::new(language.code(), None).unwrap();
        assert_round_trip(&analyzer);
    }
}

#[test]
fn test_round_trip_leaves() {
    let leaves: AnalyzerChain = vec![
        Arc::new(RegexTokenizer::new().unwrap()),
        Arc::new(RegexTokenizer::with_pattern(r"[^,]+").unwrap()),
        Arc::new(UnicodeWordTokenizer::new()),
        Arc::new(LowercaseFilter::new()),
        Arc::new(Normalizer::default()),
        Arc::new(Normalizer::new(NormalizationForm::NFC, false, true)),
        Arc::new(SnowballStemmer::new("ru").unwrap()),
        Arc::new(StopFilter::new("de").unwrap()),
        Arc::new(StopFilter::from_words(vec!["x", "y"]).remove_stopped(false)),
    ];

    for leaf in &leaves {
        assert_round_trip(leaf.as_ref());
    }
}

#[test]
fn test_round_trip_empty_and_nested() {
    let empty = PolyAnalyzer::new("fr", Some(Vec::new())).unwrap();
    assert_round_trip(&empty);

    let nested = PolyAnalyzer::new(
        "en",
        Some(vec![
            Arc::new(PolyAnalyzer::from_analyzers(vec![
                Arc::new(Normalizer::default()),
                Arc::new(UnicodeWordTokenizer::new()),
            ])),
            Arc::new(StopFilter::new("en").unwrap()),
            Arc::new(PolyAnalyzer::new("en", Some(vec![Arc::new(SnowballStemmer::new("en").unwrap())])).unwrap()),
        ]),
    )
    .unwrap();
    assert_round_trip(&nested);

    let loaded = registry::load(&nested.dump()).unwrap();
    assert_eq!(
        loaded.split("The Running Dogs").unwrap(),
        nested.split("The Running Dogs").unwrap()
    );
}

#[test]
fn test_round_trip_through_json_text() {
    let analyzer = PolyAnalyzer::new("it", None).unwrap();
    let json = analyzer.dump().to_json_pretty().unwrap();

    let form = SerializedForm::from_json(&json).unwrap();
    let loaded = PolyAnalyzer::load(&form).unwrap();
    assert!(analyzer.equals(&loaded));
    assert_eq!(loaded.dump().to_json_pretty().unwrap(), json);
}

#[test]
fn test_dump_is_deterministic() {
    let a = PolyAnalyzer::new("en", None).unwrap();
    let b = PolyAnalyzer::new("en", None).unwrap();

    assert_eq!(a.dump().to_json().unwrap(), b.dump().to_json().unwrap());
    assert!(a.equals(&b), "identity does not matter");
}

#[test]
fn test_order_sensitivity() {
    let forward = PolyAnalyzer::new(
        "en",
        Some(vec![
            Arc::new(LowercaseFilter::new()),
            Arc::new(RegexTokenizer::new().unwrap()),
        ]),
    )
    .unwrap();
    let backward = PolyAnalyzer::new(
        "en",
        Some(vec![
            Arc::new(RegexTokenizer::new().unwrap()),
            Arc::new(LowercaseFilter::new()),
        ]),
    )
    .unwrap();

    assert!(!forward.equals(&backward));
    assert_ne!(forward.dump(), backward.dump());
}

#[test]
fn test_equals_agrees_with_dump() {
    let analyzers: AnalyzerChain = vec![
        Arc::new(PolyAnalyzer::new("en", None).unwrap()),
        Arc::new(PolyAnalyzer::new("es", None).unwrap()),
        Arc::new(PolyAnalyzer::new("en", Some(Vec::new())).unwrap()),
        Arc::new(PolyAnalyzer::from_analyzers(Vec::new())),
        Arc::new(LowercaseFilter::new()),
        Arc::new(Normalizer::default()),
        Arc::new(StopFilter::new("en").unwrap()),
        Arc::new(StopFilter::new("en").unwrap().remove_stopped(false)),
        Arc::new(SnowballStemmer::new("en").unwrap()),
        Arc::new(SnowballStemmer::new("es").unwrap()),
    ];

    for a in &analyzers {
        for b in &analyzers {
            assert_eq!(
                a.equals(b.as_ref()),
                a.dump() == b.dump(),
                "{a:?} vs {b:?}"
            );
        }
    }
}

#[test]
fn test_load_errors() {
    let unknown = SerializedForm::new("PolyAnalyzer")
        .with_field("language", "en")
        .with_forms("analyzers", vec![SerializedForm::new("SoundexFilter")]);
    assert!(matches!(
        registry::load(&unknown),
        Err(SarissaError::UnknownAnalyzerKind(_))
    ));

    let missing = SerializedForm::new("PolyAnalyzer").with_field("language", "en");
    assert!(matches!(
        registry::load(&missing),
        Err(SarissaError::MalformedSerializedForm(_))
    ));

    let not_array = SerializedForm::new("PolyAnalyzer").with_field("analyzers", 3);
    assert!(matches!(
        registry::load(&not_array),
        Err(SarissaError::MalformedSerializedForm(_))
    ));

    let bad_child: SerializedForm =
        serde_json::from_str(r#"{"_class": "PolyAnalyzer", "analyzers": ["LowercaseFilter"]}"#)
            .unwrap();
    assert!(matches!(
        registry::load(&bad_child),
        Err(SarissaError::MalformedSerializedForm(_))
    ));

    assert!(matches!(
        SerializedForm::from_json("not json"),
        Err(SarissaError::Json(_))
    ));
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        PolyAnalyzer::new("xx", None),
        Err(SarissaError::UnsupportedLanguage(_))
    ));
    assert!(matches!(
        PolyAnalyzer::new("e", None),
        Err(SarissaError::UnsupportedLanguage(_))
    ));
    assert!(matches!(
        PolyAnalyzer::new("EN", None),
        Err(SarissaError::UnsupportedLanguage(_))
    ));
}

#[test]
fn test_concurrent_analysis() {
    let analyzer = Arc::new(PolyAnalyzer::new("en", None).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let analyzer = Arc::clone(&analyzer);
            std::thread::spawn(move || analyzer.split(&format!("Thread {i} running")).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            vec!["thread".to_string(), i.to_string(), "run".to_string()]
        );
    }
}
