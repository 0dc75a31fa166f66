use crate::ast::{Attribute, ClassDecl, Feature, Formal, Method};
use crate::position::Location;
use crate::symbol::{sym, Symbol};

fn method(name: &str, formals: &[(&str, Symbol)], return_ty: Symbol) -> Feature {
    Feature::Method(Method {
        name: Symbol::intern(name),
        formals: formals
            .iter()
            .map(|&(name, ty)| Formal {
                name: Symbol::intern(name),
                ty,
            })
            .collect(),
        return_ty,
        has_body: false,
    })
}

fn attr(name: Symbol, ty: Symbol) -> Feature {
    Feature::Attribute(Attribute { name, ty })
}

/// Constructs the five base classes every program compiles against.
///
/// Their method bodies are provided by the runtime system, so the features
/// here carry signatures only. The synthetic `<basic class>` filename keeps
/// them out of user-facing diagnostics.
pub fn builtin_classes() -> Vec<ClassDecl> {
    let location = Location::new(*sym::BASIC_CLASS_FILE, 0);

    let object = ClassDecl {
        name: *sym::OBJECT,
        parent: *sym::NO_CLASS,
        features: vec![
            method("abort", &[], *sym::OBJECT),
            method("type_name", &[], *sym::STRING),
            method("copy", &[], *sym::SELF_TYPE),
        ],
        location,
    };

    let io = ClassDecl {
        name: *sym::IO,
        parent: *sym::OBJECT,
        features: vec![
            method("out_string", &[("arg", *sym::STRING)], *sym::SELF_TYPE),
            method("out_int", &[("arg", *sym::INT)], *sym::SELF_TYPE),
            method("in_string", &[], *sym::STRING),
            method("in_int", &[], *sym::INT),
        ],
        location,
    };

    let int = ClassDecl {
        name: *sym::INT,
        parent: *sym::OBJECT,
        features: vec![attr(*sym::VAL, *sym::PRIM_SLOT)],
        location,
    };

    let bool_ = ClassDecl {
        name: *sym::BOOL,
        parent: *sym::OBJECT,
        features: vec![attr(*sym::VAL, *sym::PRIM_SLOT)],
        location,
    };

    let string = ClassDecl {
        name: *sym::STRING,
        parent: *sym::OBJECT,
        features: vec![
            attr(*sym::VAL, *sym::INT),
            attr(*sym::STR_FIELD, *sym::PRIM_SLOT),
            method("length", &[], *sym::INT),
            method("concat", &[("arg", *sym::STRING)], *sym::STRING),
            method(
                "substr",
                &[("arg", *sym::INT), ("arg2", *sym::INT)],
                *sym::STRING,
            ),
        ],
        location,
    };

    vec![object, io, int, bool_, string]
}
