mod table;

pub mod language;
pub mod pair;
pub mod params;
pub mod status;

pub use language::Language;
pub use pair::LanguagePair;
pub use params::{Flag, Format, ResponseFormat, TextOption, Version};
pub use status::{ResponseStatus, SpellingMistake};
pub use table::UnknownCode;
