use std::error::Error;
use std::fmt::{self, Display};

use serde::Serialize;

use crate::position::{HasLocation, Location};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal,
    Error,
    Warn,
    Info,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub location: Option<Location>,
    pub message: String,
}

impl DiagnosticMessage {
    pub fn new(message: String) -> Self {
        Self {
            location: None,
            message,
        }
    }

    pub fn at(location: Location, message: String) -> Self {
        Self {
            location: Some(location),
            message,
        }
    }
}

impl Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: DiagnosticMessage,
    pub source: Option<Box<dyn Error + 'static>>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl Error for Diagnostic {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref()
    }
}

#[must_use = "DiagnosticBuilder is useless unless emitted"]
pub struct DiagnosticBuilder<'a> {
    owner: &'a mut Diagnostics,
    level: Level,
    message: Option<DiagnosticMessage>,
    source: Option<Box<dyn Error + 'static>>,
}

pub trait LocatedError: Error + HasLocation {}

impl<T: Error + HasLocation> LocatedError for T {}

impl<'a> DiagnosticBuilder<'a> {
    fn new(owner: &'a mut Diagnostics, level: Level) -> Self {
        Self {
            owner,
            level,
            message: None,
            source: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<DiagnosticMessage>) -> Self {
        let message = message.into();

        self.message = Some(message);

        self
    }

    /// Uses the `error` to fill in the following details of the diagnostic
    /// to be emitted:
    /// - the location (unless already set)
    /// - the message (unless already set)
    /// - the source
    pub fn with_located_error(mut self, error: impl LocatedError + 'static) -> Self {
        self.message = self.message.or_else(|| {
            Some(DiagnosticMessage {
                location: error.location().copied(),
                message: format!("{}", error),
            })
        });

        self.source = Some(Box::new(error));

        self
    }

    /// Emits the diagnostic.
    ///
    /// Panics if the message is not set.
    pub fn emit(self) {
        let diagnostic = Diagnostic {
            level: self.level,
            message: self.message.expect("message must be set"),
            source: self.source,
        };

        self.owner.emit(diagnostic);
    }
}

/// The diagnostics accumulator shared by all semantic passes.
///
/// Diagnostics are kept in emission order; the error count is the sole signal
/// the driver consults to decide whether compilation proceeds.
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            diagnostics: vec![],
            errors: 0,
        }
    }

    pub fn with_level(&mut self, level: Level) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder::new(self, level)
    }

    pub fn fatal(&mut self) -> DiagnosticBuilder<'_> {
        self.with_level(Level::Fatal)
    }

    pub fn error(&mut self) -> DiagnosticBuilder<'_> {
        self.with_level(Level::Error)
    }

    pub fn warn(&mut self) -> DiagnosticBuilder<'_> {
        self.with_level(Level::Warn)
    }

    pub fn info(&mut self) -> DiagnosticBuilder<'_> {
        self.with_level(Level::Info)
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.level <= Level::Error {
            self.errors += 1;
        }

        self.diagnostics.push(diagnostic);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}
