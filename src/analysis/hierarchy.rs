use std::collections::HashSet;
use std::iter::successors;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::ast::ClassDecl;
use crate::errors::Diagnostics;
use crate::symbol::{sym, Symbol};

use super::error::SemantError;

/// The inheritance graph, keyed by class name in declaration order.
///
/// Built once by [`build_graph`] and only read afterwards. The declaration
/// order is load-bearing: every later phase iterates the map in insertion
/// order so that diagnostics come out in a stable, user-visible order.
pub struct ClassGraph<'cls> {
    nodes: IndexMap<Symbol, ClassNode<'cls>>,
    main_class: Option<&'cls ClassDecl>,
    // classes whose cycle diagnostic was already emitted during the build
    // phase (self-inheritance)
    reported_cyclic: HashSet<Symbol>,
}

pub struct ClassNode<'cls> {
    pub parent: Symbol,
    pub decl: &'cls ClassDecl,
}

impl<'cls> ClassGraph<'cls> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.nodes.contains_key(&name)
    }

    pub fn get(&self, name: Symbol) -> Option<&ClassNode<'cls>> {
        self.nodes.get(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &ClassNode<'cls>)> {
        self.nodes.iter().map(|(&name, node)| (name, node))
    }

    pub fn main_class(&self) -> Option<&'cls ClassDecl> {
        self.main_class
    }

    /// The parent chain starting at `start` (inclusive), following edges
    /// only through classes present in the graph.
    ///
    /// The iterator is infinite on cyclic inputs; callers must bound it by
    /// the class count.
    fn ancestors(&self, start: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        successors(Some(start), move |&name| {
            self.nodes
                .get(&name)
                .map(|node| node.parent)
                .filter(|&parent| parent != *sym::NO_CLASS)
        })
    }

    /// Whether following parent edges from `name` returns to `name` within
    /// `len()` hops.
    fn on_cycle(&self, name: Symbol) -> bool {
        self.ancestors(name)
            .skip(1)
            .take(self.nodes.len())
            .any(|ancestor| ancestor == name)
    }
}

/// Builds the inheritance graph from the full class list (built-ins
/// included), emitting diagnostics for self-inheritance and duplicate
/// definitions along the way.
///
/// A self-inheriting class is still inserted so that classes below it are
/// recognized as feeding into its cycle. On a duplicate name the first
/// declaration wins and the rest are discarded, which keeps lookups in the
/// later phases deterministic; the diagnostic is emitted regardless.
pub fn build_graph<'cls>(
    classes: &'cls [ClassDecl],
    diagnostics: &mut Diagnostics,
) -> ClassGraph<'cls> {
    let mut graph = ClassGraph {
        nodes: IndexMap::with_capacity(classes.len()),
        main_class: None,
        reported_cyclic: HashSet::new(),
    };

    for class in classes {
        trace!(class = %class.name, parent = %class.parent, "adding class to the graph");

        if class.name == class.parent {
            diagnostics
                .error()
                .with_located_error(SemantError::InheritanceCycle {
                    class: class.name,
                    location: class.location,
                })
                .emit();

            graph.reported_cyclic.insert(class.name);
        }

        match graph.nodes.entry(class.name) {
            Entry::Occupied(_) => {
                diagnostics
                    .error()
                    .with_located_error(SemantError::PreviouslyDefined {
                        class: class.name,
                        location: class.location,
                    })
                    .emit();
            }

            Entry::Vacant(entry) => {
                entry.insert(ClassNode {
                    parent: class.parent,
                    decl: class,
                });
            }
        }

        if class.name == *sym::MAIN && graph.main_class.is_none() {
            graph.main_class = Some(class);
        }
    }

    debug!(classes = graph.len(), "built the inheritance graph");

    graph
}

/// Runs the read-only phases over a built graph: undefined parents, cycle
/// detection, and the entry-point check, in that order.
pub fn check_graph(graph: &ClassGraph<'_>, diagnostics: &mut Diagnostics) {
    check_parents(graph, diagnostics);
    check_cycles(graph, diagnostics);
    check_entry_point(graph, diagnostics);
}

/// Checks the full class hierarchy: [`build_graph`] composed with
/// [`check_graph`]. The graph does not outlive the call.
pub fn check_class_hierarchy(classes: &[ClassDecl], diagnostics: &mut Diagnostics) {
    let graph = build_graph(classes, diagnostics);
    check_graph(&graph, diagnostics);
}

fn check_parents(graph: &ClassGraph<'_>, diagnostics: &mut Diagnostics) {
    for (name, node) in graph.iter() {
        if node.parent == *sym::NO_CLASS {
            // the root marker, legal only on `Object`
            continue;
        }

        if node.parent != *sym::OBJECT && !graph.contains(node.parent) {
            diagnostics
                .error()
                .with_located_error(SemantError::UndefinedParent {
                    class: name,
                    parent: node.parent,
                    location: node.decl.location,
                })
                .emit();
        }
    }
}

/// Reports every class that lies on an inheritance cycle or whose parent
/// chain passes through one, at most once per class.
///
/// Every chain walk is bounded by the total class count, so the phase
/// terminates on arbitrary malformed graphs.
fn check_cycles(graph: &ClassGraph<'_>, diagnostics: &mut Diagnostics) {
    let cyclic: HashSet<Symbol> = graph
        .iter()
        .map(|(name, _)| name)
        .filter(|&name| graph.on_cycle(name))
        .collect();

    if !cyclic.is_empty() {
        debug!(classes = cyclic.len(), "found classes on inheritance cycles");
    }

    let bound = graph.len() + 1;

    for (name, node) in graph.iter() {
        if graph.reported_cyclic.contains(&name) {
            continue;
        }

        let involved = graph
            .ancestors(name)
            .take(bound)
            .any(|ancestor| cyclic.contains(&ancestor));

        if involved {
            diagnostics
                .error()
                .with_located_error(SemantError::InheritanceCycle {
                    class: name,
                    location: node.decl.location,
                })
                .emit();
        }
    }
}

fn check_entry_point(graph: &ClassGraph<'_>, diagnostics: &mut Diagnostics) {
    let Some(main_class) = graph.main_class() else {
        diagnostics
            .error()
            .with_located_error(SemantError::NoMainClass)
            .emit();

        return;
    };

    let has_main_method = main_class
        .methods()
        .any(|method| method.name == *sym::MAIN_METH && method.formals.is_empty());

    if !has_main_method {
        diagnostics
            .error()
            .with_located_error(SemantError::NoMainMethod {
                location: main_class.location,
            })
            .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Location;

    fn class(name: &str, parent: &str, line: u32) -> ClassDecl {
        ClassDecl {
            name: Symbol::intern(name),
            parent: Symbol::intern(parent),
            features: vec![],
            location: Location::new(Symbol::intern("test.cl"), line),
        }
    }

    #[test]
    fn duplicate_keeps_first_declaration() {
        let classes = vec![class("A", "Object", 1), class("A", "B", 2)];
        let mut diagnostics = Diagnostics::new();
        let graph = build_graph(&classes, &mut diagnostics);

        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(graph.len(), 1);
        assert_eq!(
            graph.get(Symbol::intern("A")).unwrap().parent,
            Symbol::intern("Object")
        );
    }

    #[test]
    fn main_class_is_tracked() {
        let classes = vec![class("A", "Object", 1), class("Main", "Object", 2)];
        let mut diagnostics = Diagnostics::new();
        let graph = build_graph(&classes, &mut diagnostics);

        assert_eq!(diagnostics.error_count(), 0);
        assert_eq!(graph.main_class().unwrap().location.line, 2);
    }

    #[test]
    fn on_cycle_finds_long_cycles() {
        let classes = vec![
            class("A", "B", 1),
            class("B", "C", 2),
            class("C", "A", 3),
            class("D", "A", 4),
        ];
        let mut diagnostics = Diagnostics::new();
        let graph = build_graph(&classes, &mut diagnostics);

        assert!(graph.on_cycle(Symbol::intern("A")));
        assert!(graph.on_cycle(Symbol::intern("B")));
        assert!(graph.on_cycle(Symbol::intern("C")));
        assert!(!graph.on_cycle(Symbol::intern("D")));
    }

    #[test]
    fn ancestors_stop_at_missing_parents() {
        let classes = vec![class("A", "Missing", 1)];
        let mut diagnostics = Diagnostics::new();
        let graph = build_graph(&classes, &mut diagnostics);

        let chain: Vec<_> = graph.ancestors(Symbol::intern("A")).collect();
        assert_eq!(chain, [Symbol::intern("A"), Symbol::intern("Missing")]);
    }
}
