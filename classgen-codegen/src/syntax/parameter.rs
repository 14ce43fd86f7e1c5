use std::cmp::Ordering;

use crate::{Element, Error, Render, Result, TokenKind, TypeRef, error::require_name};

/// A method or constructor parameter.
///
/// Parameters order by position, then by type; the name does not take
/// part in ordering or equality.
#[derive(Debug, Clone)]
pub struct Parameter {
    order: u32,
    name: String,
    ty: TypeRef,
}

impl Parameter {
    /// `order` is the 1-based position in the parameter list.
    pub fn new(order: u32, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            order,
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

impl Ord for Parameter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.ty.cmp(&other.ty))
    }
}

impl PartialOrd for Parameter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Parameter {}

impl Element for Parameter {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        require_name("parameter name", &self.name)?;
        if self.ty.is_blank() {
            return Err(Error::rendering("parameter type", self.ty.canonical()));
        }
        sink.append_kind(TokenKind::ParameterBegin)?;
        sink.append_kind(TokenKind::ParameterType)?;
        sink.append_type(&self.ty)?;
        sink.append_kind(TokenKind::ParameterName)?;
        sink.append_text(&self.name)?;
        sink.append_kind(TokenKind::ParameterEnd)
    }
}

/// Insert `param` keeping the list sorted by position. A parameter already
/// at the same position is replaced.
pub(crate) fn insert_param(params: &mut Vec<Parameter>, param: Parameter) {
    params.retain(|p| p.order != param.order);
    let at = params.partition_point(|p| p.order < param.order);
    params.insert(at, param);
}
