//! Splits one raw line into its prefix and raw field segments.
//!
//! Lines follow the convention `PREFIX<DELIM>field1<DELIM>field2<DELIM>`
//! where the trailing delimiter is optional. Field semantics are not
//! interpreted here; the codec handles typing.

/// One tokenized input line: the prefix before the first delimiter, and the
/// remaining delimiter-separated segments borrowed from the line.
#[derive(Debug, PartialEq)]
pub struct RawLine<'a> {
    pub prefix: &'a str,
    pub fields: Vec<&'a str>,
}

/// Tokenize a single line. Returns `None` when the line contains no
/// delimiter at all, so no prefix can be extracted; the decoder reports
/// that as a malformed line with its position.
///
/// A trailing delimiter produces one empty trailing segment, which is
/// discarded rather than decoded. Only one is discarded: `"A||"` has one
/// genuine empty field.
pub fn tokenize_line<'a>(line: &'a str, delimiter: char) -> Option<RawLine<'a>> {
    let (prefix, rest) = line.split_once(delimiter)?;
    let mut fields: Vec<&str> = rest.split(delimiter).collect();
    if fields.last() == Some(&"") {
        fields.pop();
    }
    Some(RawLine { prefix, fields })
}
