use classgen_core::{MethodDescriptor, ParamDescriptor, TypeDescriptor, TypeKind, TypeName, TypeSig};
use serde::Deserialize;

use crate::{Result, validate::ParseContext};

/// A catalog entry under `[types."<canonical name>"]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    #[serde(default = "default_kind")]
    pub kind: TypeKind,

    #[serde(default)]
    pub type_params: Vec<String>,

    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

fn default_kind() -> TypeKind {
    TypeKind::Interface
}

/// A method of a catalog type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,

    /// Return type; `void` when omitted
    pub returns: Option<String>,

    #[serde(default)]
    pub params: Vec<ParamDecl>,

    /// The method has a default body and needs no stub
    #[serde(default, rename = "default")]
    pub has_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub ty: String,
}

impl TypeDecl {
    pub(crate) fn descriptor<'a>(
        &self,
        name: &'a str,
        ctx: &ParseContext<'a>,
    ) -> Result<TypeDescriptor> {
        let ty = ctx.type_name(name)?;
        let ctx = ctx.push(name);

        let mut descriptor = TypeDescriptor::new(ty, self.kind);
        for (index, param) in self.type_params.iter().enumerate() {
            ctx.identifier(param, "type parameter")?;
            if self.type_params[..index].contains(param) {
                return Err(ctx.source().validation_error(
                    format!("duplicate {} '{}'", ctx.context_for("type parameter"), param),
                    ctx.value_span(param),
                ));
            }
            descriptor = descriptor.type_param(param.as_str());
        }
        for method in &self.methods {
            descriptor = descriptor.method(method.descriptor(&self.type_params, &ctx)?);
        }
        Ok(descriptor)
    }
}

impl MethodDecl {
    fn descriptor(&self, type_params: &[String], ctx: &ParseContext) -> Result<MethodDescriptor> {
        ctx.identifier(&self.name, "method name")?;

        let returns = match &self.returns {
            Some(text) => ctx.type_sig(text, type_params)?,
            None => TypeSig::concrete(TypeName::void()),
        };
        let mut method = MethodDescriptor::new(self.name.as_str()).returns(returns);
        for param in &self.params {
            let ty = ctx.type_sig(&param.ty, type_params)?;
            let param = match &param.name {
                Some(name) => {
                    ctx.identifier(name, "parameter name")?;
                    ParamDescriptor::named(name.as_str(), ty)
                }
                None => ParamDescriptor::new(ty),
            };
            method = method.param(param);
        }
        if self.has_default {
            method = method.concrete();
        }
        Ok(method)
    }
}
