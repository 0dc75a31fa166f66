use serde::Serialize;

use crate::position::{HasLocation, Location};
use crate::symbol::Symbol;

/// A class declaration as produced by the parser.
///
/// Immutable once constructed: the semantic passes only ever read it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: Symbol,
    /// `_no_class` only for `Object`.
    pub parent: Symbol,
    pub features: Vec<Feature>,
    pub location: Location,
}

impl ClassDecl {
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.features.iter().filter_map(|feature| match feature {
            Feature::Method(method) => Some(method),
            Feature::Attribute(_) => None,
        })
    }
}

impl HasLocation for ClassDecl {
    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    Method(Method),
    Attribute(Attribute),
}

impl Feature {
    pub fn name(&self) -> Symbol {
        match self {
            Self::Method(method) => method.name,
            Self::Attribute(attr) => attr.name,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: Symbol,
    pub formals: Vec<Formal>,
    pub return_ty: Symbol,
    /// Built-in methods have no body; their implementations live in the
    /// runtime system.
    pub has_body: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Symbol,
    pub ty: Symbol,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Formal {
    pub name: Symbol,
    pub ty: Symbol,
}
