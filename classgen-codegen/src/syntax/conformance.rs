//! Conformance entries and the stub members they contribute.

use std::collections::HashSet;

use classgen_core::{ConformanceSpec, TypeName, TypeSig};

use crate::{Element, Error, MethodDefinition, Parameter, Render, Result, TokenKind, TypeRef};

/// One entry of an `implements` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformance {
    ty: TypeName,
    args: Vec<TypeRef>,
}

impl Conformance {
    /// Build the entry for `spec`, failing if the target is not an
    /// interface.
    ///
    /// Type arguments are rendered only when at least one type parameter
    /// is bound; unbound parameters become the universal root type.
    pub fn from_spec(spec: &ConformanceSpec) -> Result<Self> {
        let target = &spec.target;
        if !target.is_interface_like() {
            return Err(Error::IllegalConformance {
                target: target.name.canonical(),
                kind: target.kind.as_str(),
            });
        }
        let args = if spec.bindings.is_empty() {
            Vec::new()
        } else {
            target
                .type_params
                .iter()
                .map(|param| TypeRef::Explicit(bound(spec, param)))
                .collect()
        };
        Ok(Self {
            ty: target.name.clone(),
            args,
        })
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }
}

impl Element for Conformance {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        sink.append_kind(TokenKind::InheritedElementBegin)?;
        sink.append_kind(TokenKind::InheritedElementType)?;
        sink.append_type(&TypeRef::Explicit(self.ty.clone()))?;
        if !self.args.is_empty() {
            sink.append_kind(TokenKind::GenericArgsBlockBegin)?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    sink.append_kind(TokenKind::GenericArgsSeparator)?;
                }
                sink.append_kind(TokenKind::InheritedElementType)?;
                sink.append_type(arg)?;
            }
            sink.append_kind(TokenKind::GenericArgsBlockEnd)?;
        }
        sink.append_kind(TokenKind::InheritedElementEnd)
    }
}

fn bound(spec: &ConformanceSpec, param: &str) -> TypeName {
    spec.bindings
        .get(param)
        .cloned()
        .unwrap_or_else(TypeName::object)
}

fn substitute(spec: &ConformanceSpec, sig: &TypeSig) -> TypeRef {
    match sig {
        TypeSig::Concrete(ty) => TypeRef::Explicit(ty.clone()),
        TypeSig::Variable(param) => TypeRef::Explicit(bound(spec, param)),
    }
}

/// Stub methods for every abstract member of the target that is not
/// declared by the universal root type, with type variables replaced by
/// their bindings. Unnamed parameters are called `a0`, `a1`, ... skipping
/// names already used by the method's other parameters.
pub fn stub_methods(spec: &ConformanceSpec) -> Vec<MethodDefinition> {
    spec.target
        .abstract_methods()
        .map(|method| {
            let mut taken: HashSet<String> =
                method.params.iter().filter_map(|p| p.name.clone()).collect();
            method.params.iter().enumerate().fold(
                MethodDefinition::new(method.name.clone()).returns(substitute(spec, &method.returns)),
                |stub, (i, param)| {
                    let name = match &param.name {
                        Some(name) => name.clone(),
                        None => positional_name(i, &mut taken),
                    };
                    let order = u32::try_from(i + 1).unwrap_or(u32::MAX);
                    stub.param(Parameter::new(order, name, substitute(spec, &param.ty)))
                },
            )
        })
        .collect()
}

/// First free `a<n>` with `n >= index`, marked as taken.
fn positional_name(index: usize, taken: &mut HashSet<String>) -> String {
    let name = (index..)
        .map(|n| format!("a{n}"))
        .find(|name| !taken.contains(name))
        .unwrap_or_else(|| format!("a{index}"));
    taken.insert(name.clone());
    name
}
