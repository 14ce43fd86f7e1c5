//! List operation - entities and their generated types.

use classgen_core::{ConformanceSpec, TypeName, artifact_path};
use classgen_manifest::Manifest;

use crate::reports::{ListReport, ListedEntity};

pub fn list(manifest: &Manifest) -> ListReport {
    let suffix = &manifest.output.suffix;
    let entities = manifest
        .entity_descriptors()
        .iter()
        .map(|entity| {
            let generated = entity.generated_name(suffix);
            ListedEntity {
                entity: entity.ty.canonical(),
                path: manifest
                    .output_dir()
                    .join(artifact_path(&generated))
                    .display()
                    .to_string(),
                generated: generated.canonical(),
                conforms: entity.conforms.iter().map(describe_conformance).collect(),
            }
        })
        .collect();

    ListReport { entities }
}

/// `Comparator<dev.example.Order>`; unbound parameters show as the root type.
fn describe_conformance(spec: &ConformanceSpec) -> String {
    let target = spec.target.name.canonical();
    if spec.bindings.is_empty() {
        return target;
    }
    let args: Vec<String> = spec
        .target
        .type_params
        .iter()
        .map(|param| {
            spec.bindings
                .get(param)
                .cloned()
                .unwrap_or_else(TypeName::object)
                .canonical()
        })
        .collect();
    format!("{}<{}>", target, args.join(", "))
}
