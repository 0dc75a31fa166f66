use coolsem::analysis;
use coolsem::ast::{ClassDecl, Feature, Formal, Method};
use coolsem::errors::Diagnostics;
use coolsem::position::Location;
use coolsem::symbol::Symbol;

pub const TEST_FILE: &str = "test.cl";

pub fn class(name: &str, parent: &str, line: u32) -> ClassDecl {
    class_with(name, parent, line, vec![])
}

pub fn class_with(name: &str, parent: &str, line: u32, features: Vec<Feature>) -> ClassDecl {
    ClassDecl {
        name: Symbol::intern(name),
        parent: Symbol::intern(parent),
        features,
        location: Location::new(Symbol::intern(TEST_FILE), line),
    }
}

pub fn method(name: &str, formals: &[(&str, &str)], return_ty: &str) -> Feature {
    Feature::Method(Method {
        name: Symbol::intern(name),
        formals: formals
            .iter()
            .map(|&(name, ty)| Formal {
                name: Symbol::intern(name),
                ty: Symbol::intern(ty),
            })
            .collect(),
        return_ty: Symbol::intern(return_ty),
        has_body: true,
    })
}

/// Runs the semantic phase over `user_classes` (built-ins prepended) and
/// returns the rendered diagnostics in emission order.
pub fn check(user_classes: &[ClassDecl]) -> Vec<String> {
    let mut diagnostics = Diagnostics::new();
    analysis::check_program(user_classes, &mut diagnostics);

    diagnostics.iter().map(ToString::to_string).collect()
}
