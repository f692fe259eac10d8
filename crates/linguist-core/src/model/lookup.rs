use serde::Serialize;

/// Grammatical attributes any dictionary node may carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    /// Grammatical number, e.g. `"pl"`
    pub number: Option<String>,
    pub gender: Option<String>,
    pub part_of_speech: Option<String>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.gender.is_none() && self.part_of_speech.is_none()
    }
}

/// Decoded dictionary article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub definitions: Vec<Definition>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Headword with its translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub text: String,
    pub transcription: Option<String>,
    pub attributes: Attributes,
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub text: String,
    pub attributes: Attributes,
    pub synonyms: Vec<Synonym>,
    pub meanings: Vec<Meaning>,
    pub examples: Vec<Example>,
}

/// Usage example, translated by its snippets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub text: String,
    pub attributes: Attributes,
    pub snippets: Vec<Snippet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Synonym {
    pub text: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meaning {
    pub text: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub text: String,
    pub attributes: Attributes,
}
