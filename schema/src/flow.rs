use crate::value::Value;
use serde::Serialize;

/// One decoded record: the prefix of the schema node that matched, the
/// decoded field values in line order, and the records that nested under it
/// in the order their lines appeared.
///
/// Trees of these are built exclusively by the decoder, bottom-up, and
/// returned under a synthetic root whose prefix is
/// [`ROOT_PREFIX`](crate::ROOT_PREFIX) and whose contents are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedFlow {
    pub prefix: String,
    pub contents: Vec<Value>,
    pub children: Vec<DecodedFlow>,
}

impl DecodedFlow {
    pub fn new(prefix: &str, contents: Vec<Value>, children: Vec<DecodedFlow>) -> DecodedFlow {
        DecodedFlow {
            prefix: prefix.to_owned(),
            contents,
            children,
        }
    }

    /// First direct child with the given prefix, if any.
    pub fn child(&self, prefix: &str) -> Option<&DecodedFlow> {
        self.children.iter().find(|c| c.prefix == prefix)
    }

    /// Pre-order traversal of this node and all of its descendants.
    ///
    /// For a tree returned by the decoder, walking `root.children` with this
    /// reproduces the matched input lines in their original order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Pre-order iterator over a [`DecodedFlow`] tree.
pub struct Iter<'a> {
    stack: Vec<&'a DecodedFlow>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a DecodedFlow;

    fn next(&mut self) -> Option<&'a DecodedFlow> {
        let node = self.stack.pop()?;
        // Children are pushed in reverse so the leftmost pops first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(prefix: &str) -> DecodedFlow {
        DecodedFlow::new(prefix, Vec::new(), Vec::new())
    }

    #[test]
    fn test_iter_is_pre_order() {
        let tree = DecodedFlow::new(
            "A",
            Vec::new(),
            vec![
                DecodedFlow::new("B", Vec::new(), vec![leaf("C"), leaf("D")]),
                leaf("E"),
            ],
        );
        let order: Vec<&str> = tree.iter().map(|n| n.prefix.as_str()).collect();
        assert_eq!(order, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_child_finds_first_match() {
        let tree = DecodedFlow::new(
            "A",
            Vec::new(),
            vec![
                DecodedFlow::new("B", vec![Value::Int(1)], Vec::new()),
                DecodedFlow::new("B", vec![Value::Int(2)], Vec::new()),
            ],
        );
        assert_eq!(tree.child("B").unwrap().contents, [Value::Int(1)]);
        assert!(tree.child("Z").is_none());
    }
}
