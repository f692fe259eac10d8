use linguist_config::service::ServiceConfig;
use linguist_core::Error;
use linguist_types::{Flag, Format, Language, LanguagePair, SpellingMistake, TextOption};

use super::{MockTransport, ok};
use crate::{Dictionary, Predictor, Speller, Translator};

fn query(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .map(|(name, value)| (*name, value.to_string()))
        .collect()
}

#[test]
fn test_translator_directions() {
    let transport = MockTransport::new([ok(
        r#"{"dirs":["ru-en","en-ru"],"langs":{"ru":"Russian","en":"English","uk":"Ukrainian"}}"#,
    )]);
    let translator =
        Translator::new(ServiceConfig::translator().with_key("trnsl-key"), transport.clone()).unwrap();

    let languages = translator.directions().send().unwrap();
    assert_eq!(languages, [Language::Russian, Language::English, Language::Ukrainian]);

    let request = transport.last_request();
    assert_eq!(request.path(), "/api/v1.5/tr.json/getLangs");
    assert_eq!(request.query, query(&[("key", "trnsl-key"), ("ui", "en")]));
}

#[test]
fn test_detect_hints() {
    let transport = MockTransport::new([ok(r#"{"code":200,"lang":"de"}"#), ok(r#"{"lang":"en"}"#)]);
    let translator = Translator::new(ServiceConfig::translator(), transport.clone()).unwrap();

    let detected = translator
        .detect("Guten Tag", [Some(Language::English), None, Some(Language::German)])
        .send()
        .unwrap();
    assert_eq!(detected, Language::German);
    assert_eq!(transport.last_request().query_value("hint"), Some("en,de"));
    assert_eq!(transport.last_request().path(), "/api/v1.5/tr.json/detect");

    translator.detect("hello", Vec::<Language>::new()).send().unwrap();
    assert_eq!(transport.last_request().query_value("hint"), None);
}

#[test]
fn test_translate_request_and_result() {
    let transport = MockTransport::new([ok(r#"{"code":200,"lang":"ru-en","text":["Hello"]}"#)]);
    let translator = Translator::new(ServiceConfig::translator().with_key("k"), transport.clone()).unwrap();

    let result = translator
        .translate(
            "Привет",
            Some(Language::Russian),
            Language::English,
            Format::Plain,
            [TextOption::IgnoreDigits, TextOption::IgnoreDigits],
        )
        .send()
        .unwrap();

    assert_eq!(result.text, "Привет");
    assert_eq!(result.translated, "Hello");
    assert_eq!(result.source, Language::Russian);
    assert_eq!(result.target, Language::English);

    assert_eq!(
        transport.last_request().query,
        query(&[
            ("key", "k"),
            ("text", "Привет"),
            ("lang", "ru-en"),
            ("format", "plain"),
            ("options", "4"),
        ])
    );
}

#[test]
fn test_translate_with_detected_source() {
    let transport = MockTransport::new([ok(r#"{"lang":"fr","text":["Salut"]}"#)]);
    let translator = Translator::new(ServiceConfig::translator(), transport.clone()).unwrap();

    let result = translator
        .translate("Hi", None, Language::French, Format::Html, [None::<TextOption>])
        .send()
        .unwrap();

    assert_eq!(result.source, Language::Autodetect);
    assert_eq!(result.target, Language::French);
    assert_eq!(result.translated, "Salut");

    let request = transport.last_request();
    assert_eq!(request.query_value("lang"), Some("fr"));
    assert_eq!(request.query_value("format"), Some("html"));
    assert_eq!(request.query_value("options"), Some("0"));
}

#[test]
fn test_dictionary_lookup_request() {
    let transport = MockTransport::new([ok(r#"{"head":{},"def":[]}"#), ok(r#"{"def":[]}"#)]);
    let dictionary = Dictionary::new(ServiceConfig::dictionary().with_key("dict-key"), transport.clone()).unwrap();

    let result = dictionary
        .lookup("time", LanguagePair::EnglishRussian, None, [Flag::Family, Flag::Morpho])
        .send()
        .unwrap();
    assert!(result.is_empty());

    let request = transport.last_request();
    assert_eq!(request.path(), "/api/v1/dicservice.json/lookup");
    assert_eq!(
        request.query,
        query(&[
            ("key", "dict-key"),
            ("lang", "en-ru"),
            ("text", "time"),
            ("ui", "en"),
            ("flags", "5"),
        ])
    );

    dictionary
        .lookup("время", LanguagePair::RussianEnglish, Some(Language::Russian), [None::<Flag>])
        .send()
        .unwrap();
    assert_eq!(transport.last_request().query_value("ui"), Some("ru"));
    assert_eq!(transport.last_request().query_value("flags"), Some("0"));
}

#[test]
fn test_dictionary_directions() {
    let transport = MockTransport::new([ok(r#"["ru-ru","ru-en","en-ru"]"#)]);
    let dictionary = Dictionary::new(ServiceConfig::dictionary(), transport.clone()).unwrap();

    let pairs = dictionary.directions().send().unwrap();
    assert_eq!(pairs[1], LanguagePair::RussianEnglish);
    assert_eq!(pairs[1].from(), Language::Russian);
    assert_eq!(pairs[1].to(), Language::English);
    assert_eq!(transport.last_request().path(), "/api/v1/dicservice.json/getLangs");
}

#[test]
fn test_predictor_complete_defaults_limit() {
    let transport = MockTransport::new([
        ok(r#"{"endOfWord":false,"pos":-1,"text":["hello"]}"#),
        ok(r#"{"endOfWord":true,"pos":0,"text":["hello","help","helm"]}"#),
    ]);
    let predictor = Predictor::new(ServiceConfig::predictor().with_key("pdct-key"), transport.clone()).unwrap();

    let completion = predictor.complete("hel", Language::English, None).send().unwrap();
    assert_eq!(completion.text, "hel");
    assert_eq!(completion.suggestions, ["hello"]);

    let request = transport.last_request();
    assert_eq!(request.path(), "/api/v1/predict.json/complete");
    assert_eq!(
        request.query,
        query(&[("key", "pdct-key"), ("lang", "en"), ("q", "hel"), ("limit", "1")])
    );

    let completion = predictor.complete("hel", Language::English, Some(3)).send().unwrap();
    assert_eq!(completion.suggestions.len(), 3);
    assert!(completion.word_ended);
    assert_eq!(transport.last_request().query_value("limit"), Some("3"));
}

#[test]
fn test_predictor_directions() {
    let transport = MockTransport::new([ok(r#"["en","ru","xx"]"#)]);
    let predictor = Predictor::new(ServiceConfig::predictor(), transport).unwrap();

    let err = predictor.directions().send().unwrap_err();
    assert!(matches!(err, Error::UnknownCode(code) if code.code == "xx"));
}

#[test]
fn test_speller_sends_no_key_or_version() {
    let transport = MockTransport::new([ok(
        r#"[{"code":1,"pos":0,"row":0,"col":0,"len":3,"word":"teh","s":["the","tea"]}]"#,
    )]);
    let speller = Speller::new(ServiceConfig::speller().with_key("ignored"), transport.clone()).unwrap();

    let result = speller
        .check("teh cat", Language::English, Format::Plain, [TextOption::IgnoreUrls])
        .send()
        .unwrap();

    assert_eq!(result.text, "teh cat");
    assert_eq!(result.misspellings[0].kind, SpellingMistake::UnknownWord);
    assert_eq!(result.misspellings[0].suggestions, ["the", "tea"]);

    let request = transport.last_request();
    assert_eq!(request.path(), "/services/spellservice.json/checkText");
    assert_eq!(
        request.query,
        query(&[("text", "teh cat"), ("lang", "en"), ("options", "4"), ("format", "plain")])
    );
}

#[test]
fn test_speller_batch_repeats_text() {
    let transport = MockTransport::new([ok(
        r#"[[],[{"code":3,"pos":0,"row":0,"col":0,"len":6,"word":"moscow","s":["Moscow"]}]]"#,
    )]);
    let speller = Speller::new(ServiceConfig::speller(), transport.clone()).unwrap();

    let results = speller
        .check_batch(
            &["fine", "moscow"],
            Language::English,
            Format::Plain,
            Vec::<TextOption>::new(),
        )
        .send()
        .unwrap();

    assert!(results[0].is_clean());
    assert_eq!(results[1].text, "moscow");
    assert_eq!(results[1].misspellings[0].kind, SpellingMistake::Capitalization);

    let request = transport.last_request();
    assert_eq!(request.path(), "/services/spellservice.json/checkTexts");
    assert_eq!(request.query_values("text").collect::<Vec<_>>(), ["fine", "moscow"]);
}

#[test]
fn test_speller_batch_length_mismatch() {
    let transport = MockTransport::new([ok("[[]]")]);
    let speller = Speller::new(ServiceConfig::speller(), transport).unwrap();

    let result = speller
        .check_batch(&["one", "two"], Language::English, Format::Plain, Vec::<TextOption>::new())
        .send();
    assert!(matches!(result, Err(Error::Decode(_))));
}
