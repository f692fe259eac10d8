pub mod flat;
pub mod tree;

pub use flat::{
    decode_completion, decode_detected_language, decode_language_names, decode_language_pairs,
    decode_languages, decode_spelling, decode_spelling_batch, decode_translation, parse_direction,
};
pub use tree::{NodeDocument, NodeSchema, decode_lookup, decode_node, decode_node_list};
