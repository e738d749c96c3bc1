//! flowline
//!
//! This crate is the user-facing surface for decoding flat, prefix-tagged
//! delimited lines into hierarchical record trees.
//!
//! - Schema model (re-exported from `flowline-schema`)
//! - Decoder entry points (re-exported from `flowline-decoder`)
//! - Helpers for loading schemas from their JSON mapping form and for
//!   printing decoded trees as JSON.
//!
//! ```
//! use flowline::*;
//!
//! let schema = vec![
//!     SchemaNode::new("A01", Model::new(), vec![SchemaNode::leaf("A02")]),
//!     SchemaNode::leaf("B01"),
//! ];
//! let root = parse(&schema, ["A01|foo|bar|", "A02|wiz|bang|", "B01|waz|baz|"]).unwrap();
//!
//! assert_eq!(root.prefix, ROOT_PREFIX);
//! assert_eq!(root.children.len(), 2);
//! assert_eq!(root.children[0].child("A02").unwrap().contents[0].as_str(), "wiz");
//! ```

pub use flowline_decoder::error::FlowError;
pub use flowline_decoder::{parse, parse_with, verify_forest, DecodeOptions};
pub use flowline_schema::{
    DecodedFlow, FieldType, Model, SchemaNode, Value, DEFAULT_DELIMITER, ROOT_PREFIX,
};

/// Load a schema forest from its plain JSON mapping form: either a single
/// object or an array of objects with keys `prefix`, `model`, `children`.
/// The loaded forest is verified before being returned.
pub fn schema_from_json(text: &str) -> Result<Vec<SchemaNode>, FlowError> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SchemaNode),
        Many(Vec<SchemaNode>),
    }

    let forest = match serde_json::from_str(text)? {
        OneOrMany::One(node) => vec![node],
        OneOrMany::Many(nodes) => nodes,
    };
    verify_forest(&forest)?;
    Ok(forest)
}

/// Decode a line stream into a pretty-printed JSON rendering of the tree.
pub fn decode_to_json<'a, I>(schema: &[SchemaNode], lines: I) -> Result<String, FlowError>
where
    I: IntoIterator<Item = &'a str>,
{
    let root = parse(schema, lines)?;
    Ok(serde_json::to_string_pretty(&root)?)
}

pub mod error {
    pub use flowline_decoder::error::FlowError;
}

pub mod schema {
    pub use flowline_schema::{DecodedFlow, FieldType, Model, SchemaNode, Value};
}
