use std::fmt::{self, Display};

use serde::Serialize;

use crate::symbol::Symbol;

/// A source location attached to a class declaration.
///
/// The parser resolves filenames to symbols up front; built-in classes carry
/// the synthetic `<basic class>` filename.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: Symbol,
    pub line: u32,
}

impl Location {
    pub fn new(file: Symbol, line: u32) -> Self {
        Self { file, line }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

pub trait HasLocation {
    fn location(&self) -> Option<&Location>;
}
