use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use linguist_config::service::ServiceConfig;
use linguist_core::Error;
use linguist_core::model::LookupResult;
use linguist_types::{Flag, LanguagePair, ResponseFormat, ResponseStatus};

use super::{MockTransport, ok, refused, status};
use crate::Dictionary;

const TIME: &str = r#"{"head":{},"def":[{"text":"time","pos":"noun","tr":[{"text":"время"}]}]}"#;

fn dictionary(transport: &Arc<MockTransport>) -> Dictionary {
    Dictionary::new(ServiceConfig::dictionary().with_key("dict-key"), transport.clone()).unwrap()
}

fn lookup_time(dictionary: &Dictionary) -> crate::Call<LookupResult> {
    dictionary.lookup("time", LanguagePair::EnglishRussian, None, Vec::<Flag>::new())
}

#[test]
fn test_send_decodes_success() {
    let transport = MockTransport::new([ok(TIME)]);
    let result = lookup_time(&dictionary(&transport)).send().unwrap();

    assert_eq!(result.definitions[0].text, "time");
    assert_eq!(result.definitions[0].translations[0].text, "время");
}

#[test]
fn test_send_maps_known_status() {
    let transport = MockTransport::new([status(401, "Unauthorized")]);
    let err = lookup_time(&dictionary(&transport)).send().unwrap_err();

    assert!(matches!(err, Error::Status(ResponseStatus::KeyInvalid)));
    assert_eq!(err.to_string(), "401 - Invalid key for API");
}

#[test]
fn test_send_keeps_unknown_status_raw() {
    let transport = MockTransport::new([status(502, "Bad Gateway")]);
    let err = lookup_time(&dictionary(&transport)).send().unwrap_err();

    assert_eq!(err.to_string(), "502 - Bad Gateway");
    assert!(matches!(err, Error::Protocol { code: 502, .. }));
}

#[test]
fn test_send_reports_empty_body() {
    let transport = MockTransport::new([ok("")]);
    let err = lookup_time(&dictionary(&transport)).send().unwrap_err();
    assert!(matches!(err, Error::EmptyBody));
}

#[test]
fn test_send_passes_transport_error_through() {
    let transport = MockTransport::new([refused()]);
    let err = lookup_time(&dictionary(&transport)).send().unwrap_err();

    match err {
        Error::Transport(inner) => assert_eq!(inner.message(), "connection refused"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_submit_matches_send() {
    let transport = MockTransport::new([
        ok(TIME),
        status(403, "Forbidden"),
        ok(""),
        ok("not json"),
        refused(),
    ]);
    let dictionary = dictionary(&transport);
    let (tx, rx) = kanal::unbounded();

    for _ in 0..5 {
        let tx = tx.clone();
        lookup_time(&dictionary).submit(move |result| tx.send(result).unwrap());
        transport.join();
    }

    let first = rx.recv().unwrap().unwrap();
    assert_eq!(first.definitions.len(), 1);
    assert!(matches!(
        rx.recv().unwrap(),
        Err(Error::Status(ResponseStatus::DailyRequestLimitExceeded))
    ));
    assert!(matches!(rx.recv().unwrap(), Err(Error::EmptyBody)));
    assert!(matches!(rx.recv().unwrap(), Err(Error::Decode(_))));
    match rx.recv().unwrap() {
        Err(Error::Transport(inner)) => assert_eq!(inner.message(), "connection refused"),
        other => panic!("unexpected outcome: {:?}", other.map(|result| result.definitions.len())),
    }
    assert!(rx.try_recv().unwrap().is_none());
}

#[test]
fn test_submit_returns_before_handler_runs() {
    let (release, gate) = kanal::bounded(1);
    let transport = MockTransport::gated(gate, [ok(TIME)]);
    let calls = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = kanal::bounded(1);

    let caller = thread::current().id();
    let counter = Arc::clone(&calls);
    lookup_time(&dictionary(&transport)).submit(move |result| {
        counter.fetch_add(1, Ordering::SeqCst);
        tx.send((result.is_ok(), thread::current().id())).unwrap();
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);

    release.send(()).unwrap();
    let (succeeded, handler_thread) = rx.recv().unwrap();
    transport.join();

    assert!(succeeded);
    assert_ne!(handler_thread, caller);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_xml_format_is_rejected() {
    let transport = MockTransport::new([]);
    let mut config = ServiceConfig::dictionary();
    config.format = ResponseFormat::DictionaryXml;

    let err = Dictionary::new(config, transport.clone()).err().unwrap();
    assert!(matches!(err, Error::Config(message) if message.contains("dicservice")));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_key_is_sent_but_never_in_path() {
    let transport = MockTransport::new([ok(TIME)]);
    let call = lookup_time(&dictionary(&transport));

    assert_eq!(call.request().query_value("key"), Some("dict-key"));
    assert!(!call.request().path().contains("dict-key"));
}
