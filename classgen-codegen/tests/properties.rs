//! Property-based tests for the rendering pipeline.
//!
//! Properties checked:
//! 1. Member insertion order never changes the output.
//! 2. A type referenced many times is imported once and written by its short name.
//! 3. The first type to claim a short name keeps it; later namesakes are qualified.
//! 4. Formatting only changes whitespace.

use classgen_codegen::{
    ConstructorDefinition, FormatConfig, MethodDefinition, Parameter, SourceFile, TypeDefinition,
    TypeRef,
};
use classgen_core::TypeName;
use proptest::prelude::*;

const TYPES: &[(&str, &str)] = &[
    ("", "int"),
    ("", "long"),
    ("java.lang", "String"),
    ("java.util", "List"),
    ("java.util", "Map"),
    ("java.time", "Instant"),
];

fn type_strategy() -> impl Strategy<Value = TypeName> {
    prop::sample::select(TYPES).prop_map(|(namespace, name)| TypeName::new(namespace, name))
}

fn params_strategy() -> impl Strategy<Value = Vec<TypeName>> {
    prop::collection::vec(type_strategy(), 0..4)
}

/// Methods sharing a name share a return type, so equal signatures are
/// identical members.
fn method_strategy() -> impl Strategy<Value = MethodDefinition> {
    (
        prop::sample::select(&["accept", "apply", "get", "map", "run"][..]),
        params_strategy(),
    )
        .prop_map(|(name, params)| {
            let (namespace, returns) = TYPES[name.len() % TYPES.len()];
            params.into_iter().enumerate().fold(
                MethodDefinition::new(name).returns(TypeName::new(namespace, returns)),
                |method, (i, ty)| method.param(Parameter::new(i as u32 + 1, format!("a{i}"), ty)),
            )
        })
}

fn constructor_strategy() -> impl Strategy<Value = ConstructorDefinition> {
    params_strategy().prop_map(|params| {
        params.into_iter().enumerate().fold(
            ConstructorDefinition::new(TypeRef::named("Subject")),
            |ctor, (i, ty)| ctor.param(Parameter::new(i as u32 + 1, format!("a{i}"), ty)),
        )
    })
}

type Members = (Vec<ConstructorDefinition>, Vec<MethodDefinition>);

/// A member list together with a shuffled copy of it.
fn members_and_shuffle() -> impl Strategy<Value = (Members, Members)> {
    (
        prop::collection::vec(constructor_strategy(), 0..4),
        prop::collection::vec(method_strategy(), 0..8),
    )
        .prop_flat_map(|(ctors, methods)| {
            let shuffled = (Just(ctors.clone()).prop_shuffle(), Just(methods.clone()).prop_shuffle());
            (Just((ctors, methods)), shuffled)
        })
}

fn build(ctors: Vec<ConstructorDefinition>, methods: Vec<MethodDefinition>) -> SourceFile {
    let definition = ctors
        .into_iter()
        .fold(TypeDefinition::new("Subject"), TypeDefinition::constructor);
    let definition = methods.into_iter().fold(definition, TypeDefinition::method);
    SourceFile::new("dev.example", definition)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn prop_insertion_order_does_not_matter(
        ((ctors, methods), (shuffled_ctors, shuffled_methods)) in members_and_shuffle()
    ) {
        let config = FormatConfig::standard();
        let original = build(ctors, methods).format(&config).unwrap();
        let shuffled = build(shuffled_ctors, shuffled_methods).format(&config).unwrap();
        prop_assert_eq!(original, shuffled);
    }

    #[test]
    fn prop_repeated_type_imported_once(count in 1usize..6) {
        let list = TypeName::new("java.util", "List");
        let method = (0..count).fold(MethodDefinition::new("take"), |method, i| {
            method.param(Parameter::new(i as u32 + 1, format!("a{i}"), list.clone()))
        });
        let source = SourceFile::new("dev.example", TypeDefinition::new("Subject").method(method))
            .format(&FormatConfig::standard())
            .unwrap();

        prop_assert_eq!(source.matches("import java.util.List;").count(), 1);
        prop_assert_eq!(source.matches("java.util.List").count(), 1);
        prop_assert_eq!(source.matches("List a").count(), count);
    }

    #[test]
    fn prop_first_claim_keeps_short_name(
        namespaces in prop::collection::vec(
            prop::sample::select(&["java.util", "java.awt", "dev.other", "org.example"][..]),
            2..6,
        )
    ) {
        let method = namespaces.iter().enumerate().fold(MethodDefinition::new("take"), |method, (i, ns)| {
            method.param(Parameter::new(i as u32 + 1, format!("a{i}"), TypeName::new(*ns, "List")))
        });
        let source = SourceFile::new("dev.example", TypeDefinition::new("Subject").method(method))
            .format(&FormatConfig::standard())
            .unwrap();

        let first = namespaces[0];
        let imports: Vec<&str> = source.lines().filter(|l| l.starts_with("import ")).collect();
        let expected_import = format!("import {first}.List;");
        prop_assert_eq!(imports, vec![expected_import.as_str()]);

        for (i, ns) in namespaces.iter().enumerate() {
            let expected = if *ns == first {
                format!("List a{i}")
            } else {
                format!("{ns}.List a{i}")
            };
            prop_assert!(
                source.contains(&format!("({expected}")) || source.contains(&format!(" {expected}")),
                "missing `{}` in {}", expected, source
            );
        }
    }

    #[test]
    fn prop_formatting_only_changes_whitespace(
        ctors in prop::collection::vec(constructor_strategy(), 0..3),
        methods in prop::collection::vec(method_strategy(), 0..5),
    ) {
        let source = build(ctors, methods);
        let formatted = source.format(&FormatConfig::standard()).unwrap();
        let unformatted = source.unformatted().unwrap();
        prop_assert_eq!(strip_whitespace(&formatted), strip_whitespace(&unformatted));
    }
}
