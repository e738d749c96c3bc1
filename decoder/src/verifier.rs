//! Construction-time validation of a schema forest.

use crate::error::FlowError;
use flowline_schema::{SchemaNode, ROOT_PREFIX};
use std::collections::HashSet;

fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| text.to_owned())
}

/// Returns `Ok(())` if the forest is well formed, or
/// `Err(FlowError::Schema(_))` otherwise.
///
/// Checks, at every scope (the root forest and each `children` list):
/// prefixes are non-empty, the reserved root prefix is not used, sibling
/// prefixes are distinct, and model field names are distinct. Nodes own
/// their children, so the forest is acyclic by construction and needs no
/// recursion check.
pub fn verify_forest(forest: &[SchemaNode]) -> Result<(), FlowError> {
    verify_scope(forest)
}

fn verify_scope(siblings: &[SchemaNode]) -> Result<(), FlowError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for node in siblings {
        if node.prefix.is_empty() {
            return Err(FlowError::Schema(
                "A schema prefix may not be empty".to_owned(),
            ));
        }
        if node.prefix == ROOT_PREFIX {
            return Err(FlowError::Schema(format!(
                "The prefix {} is reserved",
                quote(ROOT_PREFIX)
            )));
        }
        if !seen.insert(&node.prefix) {
            return Err(FlowError::Schema(format!(
                "The prefix {} is used twice among siblings",
                quote(&node.prefix)
            )));
        }

        let mut field_names: HashSet<&str> = HashSet::new();
        for (name, _) in node.model.fields() {
            if !field_names.insert(name) {
                return Err(FlowError::Schema(format!(
                    "The field {} is declared twice in the model for prefix {}",
                    quote(name),
                    quote(&node.prefix)
                )));
            }
        }

        verify_scope(&node.children)?;
    }

    Ok(())
}
