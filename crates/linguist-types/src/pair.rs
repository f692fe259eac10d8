use crate::language::Language;
use crate::table::code_table;

code_table! {
    /// Translation directions served by the dictionary.
    pub enum LanguagePair: str as "language pair" {
        RussianRussian = ("ru-ru", "Russian-Russian"),
        RussianEnglish = ("ru-en", "Russian-English"),
        RussianPolish = ("ru-pl", "Russian-Polish"),
        RussianUkrainian = ("ru-uk", "Russian-Ukrainian"),
        RussianGerman = ("ru-de", "Russian-German"),
        RussianFrench = ("ru-fr", "Russian-French"),
        RussianSpanish = ("ru-es", "Russian-Spanish"),
        RussianItalian = ("ru-it", "Russian-Italian"),
        RussianTurkish = ("ru-tr", "Russian-Turkish"),
        EnglishRussian = ("en-ru", "English-Russian"),
        EnglishEnglish = ("en-en", "English-English"),
        EnglishGerman = ("en-de", "English-German"),
        EnglishFrench = ("en-fr", "English-French"),
        EnglishSpanish = ("en-es", "English-Spanish"),
        EnglishItalian = ("en-it", "English-Italian"),
        EnglishTurkish = ("en-tr", "English-Turkish"),
        PolishRussian = ("pl-ru", "Polish-Russian"),
        UkrainianRussian = ("uk-ru", "Ukrainian-Russian"),
        GermanRussian = ("de-ru", "German-Russian"),
        GermanEnglish = ("de-en", "German-English"),
        FrenchRussian = ("fr-ru", "French-Russian"),
        FrenchEnglish = ("fr-en", "French-English"),
        SpanishRussian = ("es-ru", "Spanish-Russian"),
        SpanishEnglish = ("es-en", "Spanish-English"),
        ItalianRussian = ("it-ru", "Italian-Russian"),
        ItalianEnglish = ("it-en", "Italian-English"),
        TurkishRussian = ("tr-ru", "Turkish-Russian"),
        TurkishEnglish = ("tr-en", "Turkish-English"),
    }
}

impl LanguagePair {
    /// Source and target languages of this direction.
    pub fn languages(&self) -> (Language, Language) {
        use Language::*;

        match self {
            LanguagePair::RussianRussian => (Russian, Russian),
            LanguagePair::RussianEnglish => (Russian, English),
            LanguagePair::RussianPolish => (Russian, Polish),
            LanguagePair::RussianUkrainian => (Russian, Ukrainian),
            LanguagePair::RussianGerman => (Russian, German),
            LanguagePair::RussianFrench => (Russian, French),
            LanguagePair::RussianSpanish => (Russian, Spanish),
            LanguagePair::RussianItalian => (Russian, Italian),
            LanguagePair::RussianTurkish => (Russian, Turkish),
            LanguagePair::EnglishRussian => (English, Russian),
            LanguagePair::EnglishEnglish => (English, English),
            LanguagePair::EnglishGerman => (English, German),
            LanguagePair::EnglishFrench => (English, French),
            LanguagePair::EnglishSpanish => (English, Spanish),
            LanguagePair::EnglishItalian => (English, Italian),
            LanguagePair::EnglishTurkish => (English, Turkish),
            LanguagePair::PolishRussian => (Polish, Russian),
            LanguagePair::UkrainianRussian => (Ukrainian, Russian),
            LanguagePair::GermanRussian => (German, Russian),
            LanguagePair::GermanEnglish => (German, English),
            LanguagePair::FrenchRussian => (French, Russian),
            LanguagePair::FrenchEnglish => (French, English),
            LanguagePair::SpanishRussian => (Spanish, Russian),
            LanguagePair::SpanishEnglish => (Spanish, English),
            LanguagePair::ItalianRussian => (Italian, Russian),
            LanguagePair::ItalianEnglish => (Italian, English),
            LanguagePair::TurkishRussian => (Turkish, Russian),
            LanguagePair::TurkishEnglish => (Turkish, English),
        }
    }

    pub fn from(&self) -> Language {
        self.languages().0
    }

    pub fn to(&self) -> Language {
        self.languages().1
    }

    pub fn by_languages(from: Language, to: Language) -> Result<Self, crate::UnknownCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|pair| pair.languages() == (from, to))
            .ok_or_else(|| crate::UnknownCode::new("language pair", format!("{from}-{to}")))
    }
}
