use std::fmt::{self, Debug, Display};

use lasso::{Spur, ThreadedRodeo};
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

static INTERNER: Lazy<ThreadedRodeo> = Lazy::new(ThreadedRodeo::new);

/// An interned name.
///
/// Comparison and hashing go through the interner key, so two symbols are
/// equal iff their underlying strings are equal, in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(Spur);

impl Symbol {
    pub fn intern(name: &str) -> Self {
        Self(INTERNER.get_or_intern(name))
    }

    pub fn as_str(self) -> &'static str {
        INTERNER.resolve(&self.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

macro_rules! predefined {
    ($( $name:ident => $text:literal, )+) => {
        $(
            pub static $name: Lazy<Symbol> = Lazy::new(|| Symbol::intern($text));
        )+
    };
}

/// Names fixed by the language definition and the runtime system.
///
/// The underscore-prefixed ones cannot clash with user-defined classes: the
/// lexer never produces an identifier starting with `_`.
pub mod sym {
    use super::*;

    predefined! {
        OBJECT => "Object",
        IO => "IO",
        INT => "Int",
        BOOL => "Bool",
        STRING => "String",
        MAIN => "Main",
        MAIN_METH => "main",
        SELF_TYPE => "SELF_TYPE",
        NO_CLASS => "_no_class",
        PRIM_SLOT => "_prim_slot",
        VAL => "_val",
        STR_FIELD => "_str_field",
        BASIC_CLASS_FILE => "<basic class>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_dedupes() {
        let a = Symbol::intern("Foo");
        let b = Symbol::intern("Foo");
        let c = Symbol::intern("Bar");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "Foo");
    }

    #[test]
    fn predefined_names_resolve() {
        assert_eq!(sym::OBJECT.as_str(), "Object");
        assert_eq!(sym::NO_CLASS.as_str(), "_no_class");
        assert_eq!(*sym::MAIN_METH, Symbol::intern("main"));
    }
}
