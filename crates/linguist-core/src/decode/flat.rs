//! Decoders for the non-recursive responses. Every field read here is
//! required, so any malformed entry fails the whole decode.

use linguist_types::{Language, LanguagePair, SpellingMistake};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{CompletionResult, Misspelling, SpellCheckResult, TranslationResult};

#[derive(Deserialize)]
struct CompletionDocument {
    #[serde(rename = "endOfWord")]
    end_of_word: bool,
    pos: i32,
    /// Completion variants, not the queried text
    text: Vec<String>,
}

#[derive(Deserialize)]
struct MistakeDocument {
    code: i64,
    pos: u32,
    row: u32,
    col: u32,
    len: u32,
    word: String,
    s: Vec<String>,
}

#[derive(Deserialize)]
struct DetectDocument {
    lang: String,
}

#[derive(Deserialize)]
struct TranslationDocument {
    lang: String,
    text: Vec<String>,
}

#[derive(Deserialize)]
struct LanguageNamesDocument {
    langs: Map<String, Value>,
}

pub fn decode_completion(text: &str, body: &[u8]) -> Result<CompletionResult> {
    let document: CompletionDocument = serde_json::from_slice(body)?;

    Ok(CompletionResult {
        text: text.to_string(),
        suggestions: document.text,
        position: document.pos,
        word_ended: document.end_of_word,
    })
}

pub fn decode_spelling(text: &str, body: &[u8]) -> Result<SpellCheckResult> {
    let mistakes: Vec<MistakeDocument> = serde_json::from_slice(body)?;
    spell_check_result(text, mistakes)
}

/// Batch responses carry one mistake array per phrase, in request order.
pub fn decode_spelling_batch<S: AsRef<str>>(
    phrases: &[S],
    body: &[u8],
) -> Result<Vec<SpellCheckResult>> {
    let batches: Vec<Vec<MistakeDocument>> = serde_json::from_slice(body)?;

    if batches.len() != phrases.len() {
        return Err(Error::Decode(format!(
            "expected {} spelling results, got {}",
            phrases.len(),
            batches.len()
        )));
    }

    phrases
        .iter()
        .zip(batches)
        .map(|(phrase, mistakes)| spell_check_result(phrase.as_ref(), mistakes))
        .collect()
}

fn spell_check_result(text: &str, mistakes: Vec<MistakeDocument>) -> Result<SpellCheckResult> {
    let misspellings = mistakes
        .into_iter()
        .map(|mistake| -> Result<Misspelling> {
            Ok(Misspelling {
                kind: SpellingMistake::by_code(mistake.code)?,
                position: mistake.pos,
                row: mistake.row,
                column: mistake.col,
                length: mistake.len,
                word: mistake.word,
                suggestions: mistake.s,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SpellCheckResult {
        text: text.to_string(),
        misspellings,
    })
}

pub fn decode_detected_language(body: &[u8]) -> Result<Language> {
    let document: DetectDocument = serde_json::from_slice(body)?;
    Ok(Language::by_code(&document.lang)?)
}

pub fn decode_translation(text: &str, body: &[u8]) -> Result<TranslationResult> {
    let document: TranslationDocument = serde_json::from_slice(body)?;

    let (source, target) = parse_direction(&document.lang)?;

    let translated = document
        .text
        .into_iter()
        .next()
        .ok_or_else(|| Error::Decode("translation response has no text".to_string()))?;

    Ok(TranslationResult {
        text: text.to_string(),
        source,
        target,
        translated,
    })
}

/// Split a reported direction: `"en-ru"` is a source and a target, a
/// bare `"ru"` means the source was detected.
pub fn parse_direction(lang: &str) -> Result<(Language, Language)> {
    match lang.split_once('-') {
        Some((from, to)) => Ok((Language::by_code(from)?, Language::by_code(to)?)),
        None => Ok((Language::Autodetect, Language::by_code(lang)?)),
    }
}

/// `["ru", "en", ...]`
pub fn decode_languages(body: &[u8]) -> Result<Vec<Language>> {
    let codes: Vec<String> = serde_json::from_slice(body)?;

    codes
        .iter()
        .map(|code| Language::by_code(code).map_err(Error::from))
        .collect()
}

/// `["ru-ru", "ru-en", ...]`
pub fn decode_language_pairs(body: &[u8]) -> Result<Vec<LanguagePair>> {
    let codes: Vec<String> = serde_json::from_slice(body)?;

    codes
        .iter()
        .map(|code| LanguagePair::by_code(code).map_err(Error::from))
        .collect()
}

/// `{ "langs": { "ru": "Russian", ... } }`, keys in document order
pub fn decode_language_names(body: &[u8]) -> Result<Vec<Language>> {
    let document: LanguageNamesDocument = serde_json::from_slice(body)?;

    document
        .langs
        .keys()
        .map(|code| Language::by_code(code).map_err(Error::from))
        .collect()
}
