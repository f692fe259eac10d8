//! Request descriptors and the parameter encodings the services expect.

use linguist_types::{Flag, Language, TextOption};

/// Path templates of every endpoint
pub mod endpoints {
    pub const GET_LANGS: &str = "/api/{version}/{interface}/getLangs";
    pub const LOOKUP: &str = "/api/{version}/{interface}/lookup";
    pub const COMPLETE: &str = "/api/{version}/{interface}/complete";
    pub const DETECT: &str = "/api/{version}/{interface}/detect";
    pub const TRANSLATE: &str = "/api/{version}/{interface}/translate";
    pub const CHECK_TEXT: &str = "/services/{interface}/checkText";
    pub const CHECK_TEXTS: &str = "/services/{interface}/checkTexts";
}

/// A fully assembled request, ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub path_template: &'static str,
    pub path_params: Vec<(&'static str, String)>,
    /// Query pairs in the order they are sent. Names may repeat.
    pub query: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    pub fn new(path_template: &'static str) -> Self {
        Self {
            path_template,
            path_params: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn with_path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    pub fn with_query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Appends the pair only when a value is given
    pub fn with_optional_query(self, name: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with_query(name, value),
            None => self,
        }
    }

    /// Template with every `{name}` replaced by its path parameter
    pub fn path(&self) -> String {
        self.path_params
            .iter()
            .fold(self.path_template.to_string(), |path, (name, value)| {
                path.replace(&format!("{{{name}}}"), value)
            })
    }

    /// First query value sent under `name`
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every query value sent under `name`, in order
    pub fn query_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.query
            .iter()
            .filter(move |(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Bitwise OR of every present flag.
pub fn combine_flags<I>(flags: I) -> u32
where
    I: IntoIterator,
    I::Item: Into<Option<Flag>>,
{
    flags
        .into_iter()
        .filter_map(Into::<Option<Flag>>::into)
        .fold(0, |mask, flag| mask | flag.bitmask())
}

/// Arithmetic sum of every present option.
///
/// Unlike [`combine_flags`] repeating an option counts it twice, which is
/// what the services have always been sent.
pub fn combine_options<I>(options: I) -> u32
where
    I: IntoIterator,
    I::Item: Into<Option<TextOption>>,
{
    options
        .into_iter()
        .filter_map(Into::<Option<TextOption>>::into)
        .map(|option| option.value())
        .sum()
}

/// `"<from>-<to>"`, or just `"<to>"` to let the service detect the source.
pub fn language_direction(from: Option<Language>, to: Language) -> String {
    match from {
        Some(from) => format!("{from}-{to}"),
        None => to.to_string(),
    }
}

/// Comma-separated codes of every present hint.
pub fn encode_hints<I>(hints: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Option<Language>>,
{
    hints
        .into_iter()
        .filter_map(Into::<Option<Language>>::into)
        .map(|language| language.code())
        .collect::<Vec<_>>()
        .join(",")
}
