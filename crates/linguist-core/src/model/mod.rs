pub mod lookup;

pub use lookup::{
    Attributes, Definition, Example, LookupResult, Meaning, Snippet, Synonym, Translation,
};

use linguist_types::{Language, SpellingMistake};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    /// Text the completion was requested for
    pub text: String,
    pub suggestions: Vec<String>,
    /// Cursor position within the last word, `-1` when not applicable
    pub position: i32,
    pub word_ended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellCheckResult {
    pub text: String,
    pub misspellings: Vec<Misspelling>,
}

impl SpellCheckResult {
    pub fn is_clean(&self) -> bool {
        self.misspellings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    pub kind: SpellingMistake,
    /// Offset of the word within the text
    pub position: u32,
    pub row: u32,
    pub column: u32,
    pub length: u32,
    pub word: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub text: String,
    /// `Language::Autodetect` when the service chose the source itself
    pub source: Language,
    pub target: Language,
    pub translated: String,
}
