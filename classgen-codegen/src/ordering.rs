//! Total orders over members, so member sets serialize the same way no
//! matter how they were collected.

use std::cmp::Ordering;

use crate::{ConstructorDefinition, MethodDefinition, Parameter};

/// Shorter lists first, then element-wise by (position, type).
pub fn compare_parameters(a: &[Parameter], b: &[Parameter]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.iter().cmp(b.iter()))
}

/// By owner type, then by parameter list.
pub fn compare_constructors(a: &ConstructorDefinition, b: &ConstructorDefinition) -> Ordering {
    a.owner()
        .cmp(b.owner())
        .then_with(|| compare_parameters(a.params(), b.params()))
}

/// By name, then by parameter list.
pub fn compare_methods(a: &MethodDefinition, b: &MethodDefinition) -> Ordering {
    a.name()
        .cmp(b.name())
        .then_with(|| compare_parameters(a.params(), b.params()))
}
