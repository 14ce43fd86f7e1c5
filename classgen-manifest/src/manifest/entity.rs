use classgen_core::{ConformanceSpec, EntityDescriptor, TypeDescriptor};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Result, validate::ParseContext};

/// An `[[entities]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDecl {
    /// Canonical name of the entity
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub conforms: Vec<ConformsDecl>,
}

/// A conformance target of an entity's stub, with type-parameter bindings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConformsDecl {
    /// Canonical name of a `[types]` entry
    #[serde(rename = "type")]
    pub ty: String,

    /// Type parameter -> canonical name of the bound type
    #[serde(default)]
    pub bind: IndexMap<String, String>,
}

impl EntityDecl {
    pub(crate) fn descriptor<'a>(
        &'a self,
        catalog: &IndexMap<String, TypeDescriptor>,
        ctx: &ParseContext<'a>,
    ) -> Result<EntityDescriptor> {
        let ty = ctx.type_name(&self.ty)?;
        let ctx = ctx.push(&self.ty);

        let mut entity = EntityDescriptor::new(ty);
        for conforms in &self.conforms {
            entity = entity.conforms_to(conforms.spec(catalog, &ctx)?);
        }
        Ok(entity)
    }
}

impl ConformsDecl {
    fn spec(
        &self,
        catalog: &IndexMap<String, TypeDescriptor>,
        ctx: &ParseContext,
    ) -> Result<ConformanceSpec> {
        let Some(target) = catalog.get(&self.ty) else {
            return Err(ctx
                .source()
                .unknown_type_error(&self.ty, ctx.value_span(&self.ty)));
        };

        let mut spec = ConformanceSpec::new(target.clone());
        for (param, bound) in &self.bind {
            if !target.declares_type_param(param) {
                return Err(ctx.source().unbound_type_parameter_error(
                    param,
                    &self.ty,
                    &target.type_params,
                    ctx.key_span(param),
                ));
            }
            spec = spec.bind(param.as_str(), ctx.type_name(bound)?);
        }
        Ok(spec)
    }
}
