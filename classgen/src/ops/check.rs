//! Check operation - build every stub without writing.

use std::path::Path;

use classgen_codegen::Generator;
use classgen_manifest::Manifest;

use super::describe_failure;
use crate::reports::CheckReport;

pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let generator = Generator::new(
        manifest.entity_descriptors().to_vec(),
        manifest.generator_options(),
    );
    let errors = generator.check().iter().map(describe_failure).collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        type_count: manifest.types.len(),
        entity_count: manifest.entities.len(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_check_reports_illegal_conformance() {
        let report = check(&fixtures::manifest(), Path::new("classgen.toml"));
        assert_eq!(report.type_count, 3);
        assert_eq!(report.entity_count, 3);
        assert_eq!(
            report.errors,
            ["dev.example.Broken: [dev.example.Base] is a class, not an interface"]
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn test_check_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(check(&manifest, Path::new("classgen.toml")).is_valid());
    }
}
