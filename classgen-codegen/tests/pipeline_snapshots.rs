//! Snapshot tests for complete generated sources.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use classgen_codegen::{
    Body, ConstructorDefinition, Expression, Generator, GeneratorOptions, MethodDefinition,
    NewInstance, Parameter, SourceFile, Statement, TypeDefinition, TypeRef, Value,
    VariableDefinition,
};
use classgen_core::{
    ConformanceSpec, EntityDescriptor, MethodDescriptor, ParamDescriptor, TypeDescriptor, TypeName,
    TypeSig,
};

fn interface(namespace: &str, name: &str) -> TypeDescriptor {
    TypeDescriptor::interface(TypeName::new(namespace, name))
}

fn variable(name: &str) -> ParamDescriptor {
    ParamDescriptor::new(TypeSig::variable(name))
}

fn primitive(name: &str) -> TypeSig {
    TypeSig::concrete(TypeName::primitive(name))
}

#[test]
fn test_entity_stub_with_several_conformances() {
    let comparator = interface("java.util", "Comparator")
        .type_param("T")
        .method(
            MethodDescriptor::new("compare")
                .param(variable("T"))
                .param(variable("T"))
                .returns(primitive("int")),
        )
        .method(
            MethodDescriptor::new("equals")
                .param(ParamDescriptor::new(TypeSig::concrete(TypeName::object())))
                .returns(primitive("boolean")),
        );
    let consumer = interface("java.util.function", "BiConsumer")
        .type_param("T")
        .type_param("U")
        .method(MethodDescriptor::new("accept").param(variable("T")).param(variable("U")));
    let iterator = interface("java.util", "Iterator")
        .type_param("E")
        .method(MethodDescriptor::new("hasNext").returns(primitive("boolean")))
        .method(MethodDescriptor::new("next").returns(TypeSig::variable("E")))
        .method(MethodDescriptor::new("remove").concrete());

    let order = TypeName::new("dev.example", "Order");
    let entity = EntityDescriptor::new(order.clone())
        .conforms_to(ConformanceSpec::new(interface("java.io", "Serializable")))
        .conforms_to(ConformanceSpec::new(comparator).bind("T", order))
        .conforms_to(ConformanceSpec::new(consumer))
        .conforms_to(ConformanceSpec::new(iterator).bind("E", TypeName::core("String")));

    let files = Generator::new(vec![entity], GeneratorOptions::default()).preview().files;
    assert_eq!(files.len(), 1);
    insta::assert_snapshot!("entity_stub", &files[0].content);
}

#[test]
fn test_class_with_constructor_and_statements() {
    let list = TypeName::new("java.util", "List");
    let add = MethodDefinition::new("add").param(Parameter::new(1, "e", TypeName::object()));
    let items = VariableDefinition::new(list, "items").init(NewInstance::new(
        TypeName::new("java.util", "ArrayList"),
        vec![Expression::variable("size")],
    ));
    let add_first = items
        .invoke(&add, vec![Value::text("first").into()])
        .unwrap();

    let label = VariableDefinition::new(TypeName::core("String"), "label").init(Value::text("widget"));
    let describe = MethodDefinition::new("describe")
        .returns(TypeName::core("String"))
        .param(Parameter::new(1, "verbose", TypeRef::primitive("boolean")))
        .body(Body::statements([
            Statement::from(label.clone()),
            Statement::Throw(
                NewInstance::new(TypeName::core("IllegalStateException"), vec![label.reference()])
                    .into(),
            ),
        ]));

    let runnable = ConformanceSpec::new(
        TypeDescriptor::interface(TypeName::core("Runnable")).method(MethodDescriptor::new("run")),
    );
    let widget = TypeDefinition::new("Widget")
        .implements(&runnable)
        .unwrap()
        .method(describe)
        .constructor(
            ConstructorDefinition::new(TypeRef::named("Widget"))
                .param(Parameter::new(1, "size", TypeRef::primitive("int")))
                .body(Body::statements([Statement::from(items), Statement::from(add_first)])),
        );

    let source = SourceFile::new("dev.example.widgets", widget).to_source().unwrap();
    insta::assert_snapshot!("widget_with_constructor", source);
}
