//! List command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Entities of a manifest and what each one generates.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub entities: Vec<ListedEntity>,
}

#[derive(Debug, Serialize)]
pub struct ListedEntity {
    /// Canonical name of the entity.
    pub entity: String,
    /// Canonical name of the generated type.
    pub generated: String,
    /// Path of the generated source.
    pub path: String,
    /// Conformance targets with their type arguments.
    pub conforms: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entities.is_empty() {
            out.preformatted("No entities defined");
            return;
        }

        out.section(&format!("Entities ({})", self.entities.len()));
        for entity in &self.entities {
            out.list_item(&format!("{} -> {}", entity.entity, entity.generated));
            out.nested_item(&entity.path);
            if !entity.conforms.is_empty() {
                out.nested_item(&format!("implements {}", entity.conforms.join(", ")));
            }
        }
    }
}
