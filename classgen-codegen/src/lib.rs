//! Syntax tree and rendering pipeline for generated class sources.
//!
//! # Module Organization
//!
//! - [`token`] - Token kinds shared by the syntax tree and render stages
//! - [`render`] - The [`Render`] sink and its stages (text, buffering, formatting)
//! - [`syntax`] - Syntax elements: package, imports, classes, members, statements
//! - [`ordering`] - Total orders over members and parameter lists
//! - [`source`] - A complete source file and its rendering pipeline
//! - [`generator`] - Batch generation of entity stubs

mod error;
pub mod generator;
pub mod ordering;
pub mod render;
pub mod source;
pub mod syntax;
pub mod token;
mod types;
mod value;

pub use error::{Error, Result};
pub use generator::{
    DEFAULT_SUFFIX, EntityFailure, GenerateResult, Generator, GeneratorOptions, Preview,
    PreviewFile,
};
pub use render::{
    BufferRender, Element, FormatRender, Fragment, Render, TextRender,
    format::{
        Condition, ConditionGroup, FormatConfig, FormatOptions, Indent, IndentBlock, Rule, Spacing,
        Trigger,
    },
};
pub use source::SourceFile;
pub use syntax::{
    Body, Conformance, ConstructorDefinition, Expression, Import, Invocation, MethodDefinition,
    NewInstance, PackageDeclaration, Parameter, Statement, TypeDefinition, VariableAssignment,
    VariableDefinition, Visibility,
};
pub use token::TokenKind;
pub use types::TypeRef;
pub use value::{Value, ValueFormats, ValueFormatter, ValueKind};
