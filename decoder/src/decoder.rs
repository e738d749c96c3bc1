//! The recursive-descent engine that walks a schema forest against an
//! ordered line stream and assembles the decoded record tree.

use crate::codec::decode_field;
use crate::error::FlowError;
use crate::tokenizer::{tokenize_line, RawLine};
use crate::verifier::verify_forest;
use flowline_schema::{DecodedFlow, SchemaNode, Value, DEFAULT_DELIMITER, ROOT_PREFIX};

/// Per-call decoding configuration.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Field delimiter character. Defaults to `|`.
    pub delimiter: char,
    /// Drop lines whose prefix matches no open scope instead of failing.
    /// Off by default: unmatched input is an error. Malformed lines (no
    /// delimiter) stay fatal either way.
    pub skip_unmatched: bool,
}

impl Default for DecodeOptions {
    fn default() -> DecodeOptions {
        DecodeOptions {
            delimiter: DEFAULT_DELIMITER,
            skip_unmatched: false,
        }
    }
}

/// Forward-only position in the line stream, shared by every level of the
/// recursive walk. Advances one line at a time and never rewinds.
struct Cursor<'a> {
    lines: Vec<&'a str>,
    index: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.index).copied()
    }

    fn bump(&mut self) {
        self.index += 1;
    }
}

/// Decode `lines` against the schema forest with default options and return
/// the synthetic root node whose children are the matched top-level records.
///
/// The forest is verified first (sibling prefix uniqueness is what makes
/// matching unambiguous) and is never mutated; the same forest may drive
/// concurrent calls on different line streams.
///
/// Decoding is all-or-nothing: on any error no partial tree is returned.
pub fn parse<'a, I>(schema: &[SchemaNode], lines: I) -> Result<DecodedFlow, FlowError>
where
    I: IntoIterator<Item = &'a str>,
{
    parse_with(schema, lines, &DecodeOptions::default())
}

/// Like [`parse`], with an explicit delimiter and unmatched-line policy.
pub fn parse_with<'a, I>(
    schema: &[SchemaNode],
    lines: I,
    options: &DecodeOptions,
) -> Result<DecodedFlow, FlowError>
where
    I: IntoIterator<Item = &'a str>,
{
    verify_forest(schema)?;

    let mut cursor = Cursor {
        lines: lines.into_iter().collect(),
        index: 0,
    };
    let mut children = Vec::new();

    loop {
        children.extend(decode_children(schema, &mut cursor, options)?);

        // The top-level scope stalled: either the stream is done, or the
        // next line matched nothing anywhere up the scope chain.
        let Some(line) = cursor.peek() else { break };
        let raw = tokenize(line, cursor.index, options.delimiter)?;
        if options.skip_unmatched {
            cursor.bump();
        } else {
            return Err(FlowError::UnmatchedLine {
                line: cursor.index,
                prefix: raw.prefix.to_owned(),
            });
        }
    }

    Ok(DecodedFlow {
        prefix: ROOT_PREFIX.to_owned(),
        contents: Vec::new(),
        children,
    })
}

/// Greedily consume lines whose prefix matches one of the sibling schemas
/// in scope, recursing into the matched node's children after each line.
/// Returns as soon as the next line matches none of the siblings, leaving
/// it for an ancestor scope to claim.
fn decode_children(
    scope: &[SchemaNode],
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> Result<Vec<DecodedFlow>, FlowError> {
    let mut decoded = Vec::new();

    while let Some(line) = cursor.peek() {
        let raw = tokenize(line, cursor.index, options.delimiter)?;
        let Some(node) = scope.iter().find(|s| s.prefix == raw.prefix) else {
            break;
        };

        let line_no = cursor.index;
        cursor.bump();

        let contents = decode_contents(&raw, node, line_no)?;
        let children = decode_children(&node.children, cursor, options)?;
        decoded.push(DecodedFlow {
            prefix: node.prefix.clone(),
            contents,
            children,
        });
    }

    Ok(decoded)
}

fn tokenize<'a>(line: &'a str, index: usize, delimiter: char) -> Result<RawLine<'a>, FlowError> {
    tokenize_line(line, delimiter).ok_or_else(|| FlowError::MalformedLine {
        line: index,
        text: line.to_owned(),
    })
}

/// Decode a tokenized line's fields against the matched node's model. An
/// empty model keeps every field as a raw string with no arity constraint;
/// a non-empty model types fields positionally and pins the field count.
fn decode_contents(
    raw: &RawLine<'_>,
    node: &SchemaNode,
    line: usize,
) -> Result<Vec<Value>, FlowError> {
    if node.model.is_empty() {
        return Ok(raw.fields.iter().map(|f| Value::Str((*f).to_owned())).collect());
    }

    if raw.fields.len() != node.model.len() {
        return Err(FlowError::FieldCountMismatch {
            line,
            prefix: node.prefix.clone(),
            expected: node.model.len(),
            found: raw.fields.len(),
        });
    }

    let mut contents = Vec::with_capacity(raw.fields.len());
    for (field, ((_, ty), raw_text)) in node.model.fields().iter().zip(&raw.fields).enumerate() {
        let value = decode_field(raw_text, *ty).map_err(|_| FlowError::FieldDecode {
            line,
            field,
            ty: *ty,
            raw: (*raw_text).to_owned(),
        })?;
        contents.push(value);
    }
    Ok(contents)
}
