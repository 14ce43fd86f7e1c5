//! The syntax tree of generated sources.
//!
//! Every node implements [`Element`](crate::Element) and owns its
//! children. Nodes are built with consuming builders and validated when
//! they render: a blank required name fails with
//! [`Error::Rendering`](crate::Error::Rendering).

mod class;
mod conformance;
mod constructor;
mod expr;
mod method;
mod modifier;
mod package;
mod parameter;

pub use class::TypeDefinition;
pub use conformance::{Conformance, stub_methods};
pub use constructor::ConstructorDefinition;
pub use expr::{
    Body, Expression, Invocation, NewInstance, Statement, VariableAssignment, VariableDefinition,
};
pub use method::MethodDefinition;
pub use modifier::Visibility;
pub use package::{Import, PackageDeclaration};
pub use parameter::Parameter;
