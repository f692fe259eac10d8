//! Recursive decoder for dictionary articles.
//!
//! Every node kind shares one algorithm: a node exists only when its
//! document carries a usable `text`, optional attributes are copied when
//! present, and each child array is decoded with the same rule. Nodes
//! without `text` are dropped together with their subtree.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{
    Attributes, Definition, Example, LookupResult, Meaning, Snippet, Synonym, Translation,
};

const TEXT: &str = "text";

/// Assembly rule of one node kind.
pub trait NodeSchema: Sized {
    /// Kind name, used in diagnostics only
    const KIND: &'static str;

    fn assemble(node: NodeDocument<'_>) -> Self;
}

/// A node document that passed the `text` check.
pub struct NodeDocument<'a> {
    doc: &'a Map<String, Value>,
    text: String,
}

impl NodeDocument<'_> {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Optional scalar attribute, `None` when missing or null
    pub fn attr(&self, key: &str) -> Option<String> {
        self.doc.get(key).and_then(scalar_text)
    }

    /// The shared `num`/`gen`/`pos` attribute set
    pub fn attributes(&self) -> Attributes {
        Attributes {
            number: self.attr("num"),
            gender: self.attr("gen"),
            part_of_speech: self.attr("pos"),
        }
    }

    /// Child nodes under `key`; empty when the key is missing or not an array
    pub fn children<C: NodeSchema>(&self, key: &str) -> Vec<C> {
        match self.doc.get(key) {
            Some(Value::Array(items)) => decode_node_list(items),
            _ => Vec::new(),
        }
    }
}

/// Decode one node, `None` when it has to be dropped.
pub fn decode_node<K: NodeSchema>(doc: &Value) -> Option<K> {
    let Some(doc) = doc.as_object() else {
        tracing::trace!(kind = K::KIND, "skipping non-object node");
        return None;
    };

    let Some(text) = doc.get(TEXT).and_then(scalar_text) else {
        tracing::trace!(kind = K::KIND, "skipping node without text");
        return None;
    };

    Some(K::assemble(NodeDocument { doc, text }))
}

/// Decode every node of an array, preserving order and dropping the
/// ones [`decode_node`] rejects.
pub fn decode_node_list<K: NodeSchema>(docs: &[Value]) -> Vec<K> {
    docs.iter().filter_map(decode_node::<K>).collect()
}

/// Decode a whole lookup response. A missing `def` array is an empty
/// result.
pub fn decode_lookup(body: &[u8]) -> Result<LookupResult> {
    let document: Value = serde_json::from_slice(body)?;

    let root = document
        .as_object()
        .ok_or_else(|| Error::Decode("lookup response is not an object".to_string()))?;

    let definitions = match root.get("def") {
        Some(Value::Array(items)) => decode_node_list(items),
        _ => Vec::new(),
    };

    Ok(LookupResult { definitions })
}

/// Strings verbatim, numbers and booleans as their JSON text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl NodeSchema for Definition {
    const KIND: &'static str = "definition";

    fn assemble(node: NodeDocument<'_>) -> Self {
        Definition {
            transcription: node.attr("ts"),
            attributes: node.attributes(),
            translations: node.children("tr"),
            text: node.into_text(),
        }
    }
}

impl NodeSchema for Translation {
    const KIND: &'static str = "translation";

    fn assemble(node: NodeDocument<'_>) -> Self {
        Translation {
            attributes: node.attributes(),
            synonyms: node.children("syn"),
            meanings: node.children("mean"),
            examples: node.children("ex"),
            text: node.into_text(),
        }
    }
}

impl NodeSchema for Example {
    const KIND: &'static str = "example";

    fn assemble(node: NodeDocument<'_>) -> Self {
        Example {
            attributes: node.attributes(),
            snippets: node.children("tr"),
            text: node.into_text(),
        }
    }
}

impl NodeSchema for Synonym {
    const KIND: &'static str = "synonym";

    fn assemble(node: NodeDocument<'_>) -> Self {
        Synonym {
            attributes: node.attributes(),
            text: node.into_text(),
        }
    }
}

impl NodeSchema for Meaning {
    const KIND: &'static str = "meaning";

    fn assemble(node: NodeDocument<'_>) -> Self {
        Meaning {
            attributes: node.attributes(),
            text: node.into_text(),
        }
    }
}

impl NodeSchema for Snippet {
    const KIND: &'static str = "snippet";

    fn assemble(node: NodeDocument<'_>) -> Self {
        Snippet {
            attributes: node.attributes(),
            text: node.into_text(),
        }
    }
}
