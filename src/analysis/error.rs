use std::error::Error;
use std::fmt::{self, Display};

use crate::errors::DiagnosticMessage;
use crate::position::{HasLocation, Location};
use crate::symbol::Symbol;

/// An error detected while checking the class hierarchy.
///
/// The rendered messages reproduce the templates the surrounding tooling
/// matches on, so their wording is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemantError {
    InheritanceCycle {
        class: Symbol,
        location: Location,
    },

    PreviouslyDefined {
        class: Symbol,
        location: Location,
    },

    UndefinedParent {
        class: Symbol,
        parent: Symbol,
        location: Location,
    },

    NoMainClass,

    NoMainMethod {
        location: Location,
    },
}

impl HasLocation for SemantError {
    fn location(&self) -> Option<&Location> {
        match self {
            Self::InheritanceCycle { location, .. }
            | Self::PreviouslyDefined { location, .. }
            | Self::UndefinedParent { location, .. }
            | Self::NoMainMethod { location } => Some(location),

            Self::NoMainClass => None,
        }
    }
}

impl Display for SemantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InheritanceCycle { class, .. } => write!(
                f,
                "Class {}, or an ancestor of {}, is involved in an inheritance cycle.",
                class, class
            ),

            Self::PreviouslyDefined { class, .. } => {
                write!(f, "Class {} was previously defined.", class)
            }

            Self::UndefinedParent { class, parent, .. } => write!(
                f,
                "Class {} inherits from an undefined class {}.",
                class, parent
            ),

            Self::NoMainClass => write!(f, "Class Main is not defined."),

            Self::NoMainMethod { .. } => write!(f, "No 'main' method in class Main."),
        }
    }
}

impl Error for SemantError {}

impl From<SemantError> for DiagnosticMessage {
    fn from(err: SemantError) -> DiagnosticMessage {
        DiagnosticMessage {
            location: err.location().copied(),
            message: err.to_string(),
        }
    }
}
