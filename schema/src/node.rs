use crate::value::FieldType;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered mapping from field name to [`FieldType`].
///
/// Declaration order is significant: the n-th model entry types the n-th
/// delimited field of a matching line. An empty model means "keep every
/// field as a raw string, with no arity constraint".
///
/// In the plain-mapping schema representation this is a JSON object; entry
/// order in the document is preserved on load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    fields: Vec<(String, FieldType)>,
}

impl Model {
    pub fn new() -> Model {
        Model { fields: Vec::new() }
    }

    /// Append a field declaration, builder style.
    pub fn with_field(mut self, name: &str, ty: FieldType) -> Model {
        self.fields.push((name.to_owned(), ty));
        self
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[(String, FieldType)] {
        &self.fields
    }
}

impl From<Vec<(String, FieldType)>> for Model {
    fn from(fields: Vec<(String, FieldType)>) -> Model {
        Model { fields }
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, ty) in &self.fields {
            map.serialize_entry(name, ty)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Model, D::Error> {
        struct ModelVisitor;

        impl<'de> Visitor<'de> for ModelVisitor {
            type Value = Model;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field name to field type")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Model, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                // MapAccess yields entries in document order, which is what
                // makes positional field decoding work.
                while let Some((name, ty)) = access.next_entry::<String, FieldType>()? {
                    fields.push((name, ty));
                }
                Ok(Model { fields })
            }
        }

        deserializer.deserialize_map(ModelVisitor)
    }
}

/// One expected record shape: the line prefix it matches, the typed model
/// for its fields, and the only prefixes allowed to nest directly under it.
///
/// A schema forest is a `Vec<SchemaNode>` of root shapes. The forest is
/// read-only input to the decoder and may be shared across concurrent
/// decode calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Tag identifying which lines this node matches. Unique among siblings.
    pub prefix: String,
    /// Ordered field typing; empty means raw-string passthrough.
    #[serde(default)]
    pub model: Model,
    /// Permitted direct child shapes, in order.
    #[serde(default)]
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    pub fn new(prefix: &str, model: Model, children: Vec<SchemaNode>) -> SchemaNode {
        SchemaNode {
            prefix: prefix.to_owned(),
            model,
            children,
        }
    }

    /// A node with no typed model and no children: matches exactly one line
    /// and keeps its fields as raw strings.
    pub fn leaf(prefix: &str) -> SchemaNode {
        SchemaNode::new(prefix, Model::new(), Vec::new())
    }
}
