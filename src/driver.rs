use std::process::ExitCode;

use owo_colors::{OwoColorize, Stream};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

use crate::analysis;
use crate::ast::ClassDecl;
use crate::errors::{Diagnostic, Diagnostics, Level};

const LOG_ENV_NAME: &str = "COOLSEM_LOG";

/// Installs the env-filtered tracing subscriber. Call once, from the
/// compiler entry point.
pub fn install_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV_NAME)
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    // the `file:line: message` format is what downstream tooling matches
    // on, so color only, never reshape
    match diagnostic.level {
        Level::Fatal | Level::Error => eprintln!(
            "{}",
            diagnostic.if_supports_color(Stream::Stderr, |text| text.bright_red())
        ),

        Level::Warn => eprintln!(
            "{}",
            diagnostic.if_supports_color(Stream::Stderr, |text| text.yellow())
        ),

        Level::Info => eprintln!("{}", diagnostic),
    }
}

/// The driver entry point for the semantic phase.
///
/// Runs the hierarchy checks over the user's classes, prints every
/// accumulated diagnostic to stderr in emission order, and reports failure
/// if any of them was an error.
pub fn run_semant(user_classes: &[ClassDecl]) -> ExitCode {
    let mut diagnostics = Diagnostics::new();
    analysis::check_program(user_classes, &mut diagnostics);

    for diagnostic in diagnostics.iter() {
        print_diagnostic(diagnostic);
    }

    if diagnostics.has_errors() {
        eprintln!("Compilation halted due to static semantic errors.");

        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
