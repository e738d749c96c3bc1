//! Data model for the Flowline format: a declarative schema forest describing
//! which line prefixes may nest under which, and the record tree the decoder
//! produces from a line stream.
//!
//! ```
//! use flowline_schema::*;
//!
//! let schema = vec![
//!     SchemaNode::new("A01", Model::new(), vec![
//!         SchemaNode::leaf("B01"),
//!     ]),
//! ];
//!
//! assert_eq!(schema[0].children[0].prefix, "B01");
//! assert!(schema[0].model.is_empty());
//! ```

pub mod flow;
pub mod node;
pub mod value;

pub use flow::*;
pub use node::*;
pub use value::*;

/// Reserved prefix of the synthetic root node wrapping all decoded
/// top-level records. Never matches an input line and is rejected as a
/// schema prefix.
pub const ROOT_PREFIX: &str = "ROOT";

/// Field delimiter assumed when none is configured explicitly.
pub const DEFAULT_DELIMITER: char = '|';
