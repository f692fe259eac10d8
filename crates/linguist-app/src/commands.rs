use anyhow::Context;
use linguist_client::{Call, Dictionary, Predictor, Speller, Translator};
use linguist_config::Config;
use linguist_types::{Flag, TextOption};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{self, Command, Service};

/// Run one command and return its result as JSON.
pub fn run(command: Command, config: &Config, background: bool) -> anyhow::Result<Value> {
    match command {
        Command::Translate {
            text,
            to,
            from,
            html,
            options,
        } => {
            let translator = Translator::connect(config.translator.clone(), &config.transport)?;
            let options = options.into_iter().map(TextOption::from);
            dispatch(
                translator.translate(&text, from, to, cli::format(html), options),
                background,
            )
        }
        Command::Detect { text, hints } => {
            let translator = Translator::connect(config.translator.clone(), &config.transport)?;
            dispatch(translator.detect(&text, hints), background)
        }
        Command::Lookup {
            text,
            lang,
            ui,
            flags,
        } => {
            let dictionary = Dictionary::connect(config.dictionary.clone(), &config.transport)?;
            let flags = flags.into_iter().map(Flag::from);
            dispatch(dictionary.lookup(&text, lang, ui, flags), background)
        }
        Command::Complete { text, lang, limit } => {
            let predictor = Predictor::connect(config.predictor.clone(), &config.transport)?;
            dispatch(predictor.complete(&text, lang, limit), background)
        }
        Command::Spell {
            texts,
            lang,
            html,
            options,
        } => {
            let speller = Speller::connect(config.speller.clone(), &config.transport)?;
            let options: Vec<TextOption> = options.into_iter().map(TextOption::from).collect();

            if let [text] = texts.as_slice() {
                dispatch(speller.check(text, lang, cli::format(html), options), background)
            } else {
                dispatch(speller.check_batch(texts.as_slice(), lang, cli::format(html), options), background)
            }
        }
        Command::Langs { service } => match service {
            Service::Translator => {
                let translator = Translator::connect(config.translator.clone(), &config.transport)?;
                dispatch(translator.directions(), background)
            }
            Service::Dictionary => {
                let dictionary = Dictionary::connect(config.dictionary.clone(), &config.transport)?;
                dispatch(dictionary.directions(), background)
            }
            Service::Predictor => {
                let predictor = Predictor::connect(config.predictor.clone(), &config.transport)?;
                dispatch(predictor.directions(), background)
            }
        },
    }
}

fn dispatch<R>(call: Call<R>, background: bool) -> anyhow::Result<Value>
where
    R: Serialize + Send + 'static,
{
    let result = if background {
        let (tx, rx) = kanal::bounded(1);

        call.submit(move |result| {
            if tx.send(result).is_err() {
                tracing::warn!("result receiver dropped before completion");
            }
        });

        rx.recv()
            .context("request was dropped without a completion")?
    } else {
        call.send()
    };

    Ok(serde_json::to_value(result?)?)
}
