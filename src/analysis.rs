mod builtins;
pub mod error;
mod hierarchy;

use crate::ast::ClassDecl;
use crate::errors::Diagnostics;

pub use builtins::builtin_classes;
pub use error::SemantError;
pub use hierarchy::{build_graph, check_class_hierarchy, check_graph, ClassGraph, ClassNode};

/// Runs semantic analysis over a parsed program.
///
/// Prepends the built-in classes to the user's class list and checks the
/// combined hierarchy. The caller inspects `diagnostics.error_count()` to
/// decide whether compilation proceeds.
pub fn check_program(user_classes: &[ClassDecl], diagnostics: &mut Diagnostics) {
    let mut classes = builtin_classes();
    classes.extend_from_slice(user_classes);

    check_class_hierarchy(&classes, diagnostics);
}
