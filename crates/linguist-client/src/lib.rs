pub mod dictionary;
pub mod gateway;
pub mod http;
pub mod predictor;
pub mod speller;
pub mod translator;

#[cfg(test)]
mod tests;

pub use dictionary::Dictionary;
pub use gateway::{Call, Gateway};
pub use http::HttpTransport;
pub use predictor::Predictor;
pub use speller::Speller;
pub use translator::Translator;
