//! Merge a help id with its (optional) declaration into one signature.
//!
//! Rules:
//! - Types always come from the help id; names from the declaration, or
//!   `arg1..argN` when the two disagree on arity.
//! - The qualified prefix is always the help-id container.
//! - A constructor (help-id `#ctor`, or a declaration named after its
//!   class) becomes `__init__(self, ...) -> None`.
//! - A non-static member with a declaration gets the receiver parameter.
//! - Operators take their name from the help id (`op_Addition`) and their
//!   return type from the declaration.

use super::declaration::Declaration;
use super::help_id::HelpId;
use crate::model::{
    is_identifier, placeholder_names, Member, Parameter, Signature, INITIALIZER, NOTHING,
    UNKNOWN,
};
use crate::types::clr;

/// Declaration name usable as an emitted member name. `Foo<T>` reduces to `Foo`;
/// operator and other symbolic names are rejected.
fn usable_name(decl: &Declaration) -> Option<&str> {
    let name = decl.name.split('<').next().unwrap_or(&decl.name);
    is_identifier(name).then_some(name)
}

pub fn assemble(help: &HelpId, decl: Option<&Declaration>) -> Signature {
    let owner = &help.identity;
    let decl_name = decl.and_then(usable_name);

    let types: Vec<String> = help
        .param_types
        .iter()
        .map(|t| clr::normalize(t, Some(owner)))
        .collect();
    let names = match decl {
        Some(d) if d.param_names.len() == types.len() => d.param_names.clone(),
        _ => placeholder_names(types.len()),
    };
    let params = names
        .into_iter()
        .zip(types)
        .map(|(name, ty)| Parameter::new(name, ty))
        .collect();

    let is_ctor =
        owner.member == Member::Constructor || decl_name == Some(owner.container_simple());

    let (member, returns, is_instance) = if is_ctor {
        (INITIALIZER.to_string(), NOTHING.to_string(), true)
    } else {
        let member = match (decl_name, &owner.member) {
            (Some(name), _) => name.to_string(),
            (None, Member::Named(name)) => name.clone(),
            (None, Member::Constructor) => INITIALIZER.to_string(),
        };
        let returns = match decl {
            Some(d) if decl_name.is_some() || d.is_operator() => {
                clr::normalize(d.return_type.as_deref().unwrap_or(NOTHING), Some(owner))
            }
            _ => UNKNOWN.to_string(),
        };
        let is_instance = decl.is_some_and(|d| !d.is_static);
        (member, returns, is_instance)
    };

    Signature {
        qualified_name: format!("{}.{}", owner.container, member),
        params,
        returns,
        is_instance,
    }
}
