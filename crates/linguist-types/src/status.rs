use crate::table::code_table;

code_table! {
    /// Status codes every service documents. Anything else is a protocol
    /// failure.
    pub enum ResponseStatus: u16 as "response status" {
        Ok = (200, "The operation was completed successfully"),
        KeyInvalid = (401, "Invalid key for API"),
        KeyBlocked = (402, "Blocked key for API"),
        DailyRequestLimitExceeded = (403, "Exceeded the daily limit on the amount of requests"),
        DailyTextLimitExceeded = (404, "Exceeded the daily limit on the amount of text"),
        CharacterLimitExceeded = (413, "Exceeded the maximum allowed text size"),
        FailedToTranslate = (422, "The text cannot be translated"),
        LanguageNotSupported = (501, "The specified language direction is not supported"),
    }
}

impl ResponseStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ResponseStatus::Ok)
    }
}

code_table! {
    /// Kinds of mistakes reported by the speller.
    pub enum SpellingMistake: i64 as "spelling mistake" {
        None = (0, "There is no spelling mistake in this word"),
        UnknownWord = (1, "The word is not in the dictionary"),
        RepeatWord = (2, "The repetition of the word"),
        Capitalization = (3, "Incorrect use of uppercase and lowercase letters"),
        TooManyErrors = (4, "The text contains too many errors"),
    }
}
