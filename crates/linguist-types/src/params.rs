use crate::table::code_table;

code_table! {
    /// API version path segment of each service.
    ///
    /// Several entries share a code, so `by_code` resolves to the first
    /// entry carrying it.
    pub enum Version: str as "version" {
        DictionaryV1 = ("v1", "Dictionary API v1"),
        PredictorV1 = ("v1", "Predictor API v1"),
        TranslateV15 = ("v1.5", "Translate API v1.5"),
        DictionaryLatest = ("v1", "Latest dictionary API"),
        PredictorLatest = ("v1", "Latest predictor API"),
        // The speller path carries no version segment.
        SpellerLatest = ("?", "Latest speller API"),
        TranslateLatest = ("v1.5", "Latest translate API"),
    }
}

code_table! {
    /// Response interface segment of the request path.
    pub enum ResponseFormat: str as "response format" {
        DictionaryJson = ("dicservice.json", "Dictionary, JSON"),
        PredictorJson = ("predict.json", "Predictor, JSON"),
        SpellerJson = ("spellservice.json", "Speller, JSON"),
        TranslateJson = ("tr.json", "Translate, JSON"),
        DictionaryXml = ("dicservice", "Dictionary, XML"),
        PredictorXml = ("predict", "Predictor, XML"),
        SpellerXml = ("spellservice", "Speller, XML"),
        TranslateXml = ("tr", "Translate, XML"),
    }
}

impl ResponseFormat {
    pub fn is_json(&self) -> bool {
        self.code().ends_with(".json")
    }
}

code_table! {
    /// Markup of the text handed to the translator or the speller.
    pub enum Format: str as "format" {
        Plain = ("plain", "Plain text"),
        Html = ("html", "HTML markup"),
    }
}

code_table! {
    /// Dictionary search flags, each a single bit.
    pub enum Flag: u32 as "flag" {
        Family = (0x0001, "Apply the family search filter"),
        ShortPos = (0x0002, "Abbreviate parts of speech"),
        Morpho = (0x0004, "Search by word form"),
        PosFilter = (0x0008, "Match the part of speech of the query"),
    }
}

impl Flag {
    pub fn bitmask(&self) -> u32 {
        self.code()
    }
}

code_table! {
    /// Speller and translator options.
    ///
    /// `IncludeAutodetect` is understood by the translator only.
    pub enum TextOption: u32 as "option" {
        None = (0, "No options"),
        IncludeAutodetect = (1, "Report the detected source language"),
        IgnoreDigits = (2, "Skip words containing digits"),
        IgnoreUrls = (4, "Skip URLs, e-mail addresses and file names"),
        FindRepeatWords = (8, "Highlight repeated words"),
        IgnoreCapitalization = (512, "Ignore incorrect capitalization"),
    }
}

impl TextOption {
    pub fn value(&self) -> u32 {
        self.code()
    }
}
