//! A manifest resolved and fed straight into the generator.

use std::path::Path;

use classgen_codegen::Generator;
use classgen_manifest::Manifest;

const MANIFEST: &str = r#"
[output]
suffix = "Stub"

[types."dev.example.Mapper"]
type_params = ["T"]
[[types."dev.example.Mapper".methods]]
name = "map"
returns = "T"
params = [{ name = "row", type = "java.sql.ResultSet" }]

[types."dev.example.Model"]
kind = "abstract-class"

[[entities]]
type = "dev.example.User"
conforms = [{ type = "dev.example.Mapper", bind = { T = "dev.example.User" } }]

[[entities]]
type = "dev.example.Broken"
conforms = [{ type = "dev.example.Model" }]
"#;

#[test]
fn test_manifest_drives_generator() {
    let manifest = Manifest::from_str_with_filename(MANIFEST, "demo.toml").unwrap();
    let generator = Generator::new(
        manifest.entity_descriptors().to_vec(),
        manifest.generator_options(),
    );

    let preview = generator.preview();
    assert!(preview.is_success());
    let previews = preview.files;
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].path, Path::new("dev").join("example").join("UserStub.java"));

    let content = &previews[0].content;
    assert!(content.starts_with("package dev.example;\n\nimport java.sql.ResultSet;\n\n"));
    assert!(content.contains("public class UserStub implements Mapper<User> {"));
    assert!(content.contains("  public User map(ResultSet row) {\n    throw new UnsupportedOperationException();\n  }"));
}

#[test]
fn test_abstract_class_target_fails_at_check() {
    let manifest = Manifest::from_str_with_filename(MANIFEST, "demo.toml").unwrap();
    let generator = Generator::new(
        manifest.into_entity_descriptors(),
        Default::default(),
    );

    let failures = generator.check();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].entity.canonical(), "dev.example.Broken");
    assert!(matches!(
        failures[0].error,
        classgen_codegen::Error::IllegalConformance { .. }
    ));
}
