//! flowline-decoder
//!
//! This crate implements:
//!  1) A tokenizer for flat, prefix-tagged delimited lines,
//!  2) A field codec (`string` / `int` / `float` / `bool`),
//!  3) A schema-forest verifier (duplicate sibling prefixes, reserved
//!     names, duplicate model fields),
//!  4) The recursive-descent decoder (`parse` / `parse_with`) that walks a
//!     schema forest against an ordered line stream and assembles a
//!     [`DecodedFlow`](flowline_schema::DecodedFlow) tree,
//!  5) Error types (`FlowError`).

pub mod codec;
pub mod decoder;
pub mod error;
pub mod tokenizer;
pub mod verifier;

pub use decoder::parse;
pub use decoder::parse_with;
pub use decoder::DecodeOptions;
pub use error::FlowError;
pub use verifier::verify_forest;
