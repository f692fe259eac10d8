use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use linguist_types::{Flag, Format, Language, LanguagePair, TextOption};

/// Query the translator, dictionary, predictor and speller services
#[derive(Parser, Debug)]
#[command(
    name = "linguist",
    version,
    about,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// JSON config file; sections it leaves out are read from the environment
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dispatch in the background and wait for the completion callback
    #[arg(long = "async", global = true)]
    pub background: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text
    Translate {
        text: String,

        /// Target language code
        #[arg(short, long, value_parser = Language::by_code)]
        to: Language,

        /// Source language code, detected when omitted
        #[arg(short, long, value_parser = Language::by_code)]
        from: Option<Language>,

        /// Treat the text as HTML
        #[arg(long)]
        html: bool,

        #[arg(short, long = "option", value_enum)]
        options: Vec<OptionArg>,
    },

    /// Detect the language of text
    Detect {
        text: String,

        /// Likely languages, may be repeated
        #[arg(long = "hint", value_parser = Language::by_code)]
        hints: Vec<Language>,
    },

    /// Look a word up in a bilingual dictionary
    Lookup {
        text: String,

        /// Dictionary direction, e.g. `en-ru`
        #[arg(short, long, value_parser = LanguagePair::by_code)]
        lang: LanguagePair,

        /// Language of the attribute labels
        #[arg(long, value_parser = Language::by_code)]
        ui: Option<Language>,

        #[arg(long = "flag", value_enum)]
        flags: Vec<FlagArg>,
    },

    /// Suggest completions for the text typed so far
    Complete {
        text: String,

        #[arg(short, long, value_parser = Language::by_code)]
        lang: Language,

        /// Maximum number of suggestions
        #[arg(short = 'n', long)]
        limit: Option<u32>,
    },

    /// Spell check one or more phrases
    Spell {
        #[arg(required = true)]
        texts: Vec<String>,

        #[arg(short, long, value_parser = Language::by_code, default_value = "ru")]
        lang: Language,

        #[arg(long)]
        html: bool,

        #[arg(short, long = "option", value_enum)]
        options: Vec<OptionArg>,
    },

    /// List the languages or directions a service supports
    Langs {
        #[arg(value_enum)]
        service: Service,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    Translator,
    Dictionary,
    Predictor,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagArg {
    Family,
    ShortPos,
    Morpho,
    PosFilter,
}

impl From<FlagArg> for Flag {
    fn from(flag: FlagArg) -> Self {
        match flag {
            FlagArg::Family => Flag::Family,
            FlagArg::ShortPos => Flag::ShortPos,
            FlagArg::Morpho => Flag::Morpho,
            FlagArg::PosFilter => Flag::PosFilter,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionArg {
    IncludeAutodetect,
    IgnoreDigits,
    IgnoreUrls,
    FindRepeatWords,
    IgnoreCapitalization,
}

impl From<OptionArg> for TextOption {
    fn from(option: OptionArg) -> Self {
        match option {
            OptionArg::IncludeAutodetect => TextOption::IncludeAutodetect,
            OptionArg::IgnoreDigits => TextOption::IgnoreDigits,
            OptionArg::IgnoreUrls => TextOption::IgnoreUrls,
            OptionArg::FindRepeatWords => TextOption::FindRepeatWords,
            OptionArg::IgnoreCapitalization => TextOption::IgnoreCapitalization,
        }
    }
}

pub fn format(html: bool) -> Format {
    if html { Format::Html } else { Format::Plain }
}
