//! Block-anchored pipeline: one index document with many function sections.
//!
//! Per section, the invocation example supplies the shape (name, argument
//! names, defaults) and the Parameters/Returns tables supply the types.

pub mod blocks;
pub mod invocation;
pub mod tables;

use crate::error::SkipReason;
use crate::model::{Parameter, Signature, NOTHING, UNKNOWN};
use crate::output::Extraction;
use crate::types::prose::ProseTypeMapper;
use crate::types::{is_concrete, optional_of};
use invocation::Invocation;
use std::collections::HashMap;
use tables::{ParamDoc, Section};
use tracing::debug;

pub struct ScriptExtractor {
    module: String,
    mapper: ProseTypeMapper,
}

impl ScriptExtractor {
    pub fn new(module: impl Into<String>, mapper: ProseTypeMapper) -> Self {
        Self {
            module: module.into(),
            mapper,
        }
    }

    /// Extract every function section of an index document.
    pub fn extract_document(&self, doc: &str) -> Extraction {
        let mut extraction = Extraction::default();
        for block in blocks::blocks(doc) {
            let outcome = self.extract_block(block.body);
            extraction.record(&block.anchor, outcome);
        }
        extraction
    }

    /// Extract one function section.
    pub fn extract_block(&self, panel: &str) -> Result<Signature, SkipReason> {
        let example = invocation::find(panel).ok_or(SkipReason::NoInvocation)?;
        let call = invocation::parse(&example).ok_or(SkipReason::MalformedInvocation)?;

        let params = tables::section_text(panel, Section::Parameters)
            .map(|text| tables::parse_params(&text, &self.mapper))
            .unwrap_or_default();
        let returns = tables::section_text(panel, Section::Returns)
            .map(|text| tables::parse_returns(&text, &self.mapper))
            .unwrap_or_else(|| NOTHING.to_string());

        debug!(function = %call.name, documented = params.len(), "assembling");
        Ok(self.assemble(call, &params, returns))
    }

    fn assemble(
        &self,
        call: Invocation,
        docs: &HashMap<String, ParamDoc>,
        returns: String,
    ) -> Signature {
        let params = call
            .args
            .into_iter()
            .map(|arg| {
                let (mut ty, optional) = docs
                    .get(&arg.name)
                    .map_or((UNKNOWN.to_string(), false), |d| (d.ty.clone(), d.optional));
                let mut default = arg.default;
                if optional && default.is_none() && is_concrete(&ty) {
                    ty = optional_of(&ty);
                    default = Some(NOTHING.to_string());
                }
                Parameter::new(arg.name, ty).with_default(default)
            })
            .collect();

        Signature {
            qualified_name: format!("{}.{}", self.module, call.name),
            params,
            returns,
            is_instance: false,
        }
    }
}
