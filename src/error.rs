use crate::object::Object;
use crate::token::{Location, Token, Type};

/// Tracks whether any stage of the pipeline has reported an error.
///
/// The driver owns one reporter and threads it through the scanner, parser,
/// resolver and interpreter; a stage that sees a raised flag from an earlier
/// stage does not run. The REPL clears the flags between prompts.
#[derive(Debug, Default)]
pub struct Reporter {
    had_error: bool,
    had_runtime_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Returns if a scan, parse or resolve error was reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Returns if a runtime error was reported.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears both flags. Used between REPL prompts.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    fn error(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {line}] error {location}: {message}");
        self.had_error = true;
    }
}

/// Every error type must implement this trait.
pub trait Error {
    /// Prints the error message to standard error and raises the matching
    /// flag on the reporter.
    fn report(&self, reporter: &mut Reporter);
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub location: Location,
    pub message: String,
}

impl Error for ScanError {
    fn report(&self, reporter: &mut Reporter) {
        reporter.error(self.location.line, "", &self.message);
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn report(&self, reporter: &mut Reporter) {
        if self.token.r#type == Type::EOF {
            reporter.error(self.token.location.line, "at end", &self.message);
        } else {
            let location = format!("at '{}'", self.token.lexeme);
            reporter.error(self.token.location.line, &location, &self.message);
        }
    }
}

/// Represents an error that occurs during resolution.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn report(&self, reporter: &mut Reporter) {
        let location = format!("at '{}'", self.token.lexeme);
        reporter.error(self.token.location.line, &location, &self.message);
    }
}

/// Represents an error that occurs during runtime.
/// The token pins the diagnostic to a line in the source.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn report(&self, reporter: &mut Reporter) {
        eprintln!("[line {}] {}", self.token.location.line, self.message);
        reporter.had_runtime_error = true;
    }
}

/// A signal that unwinds statement execution.
///
/// `Return` is not an error: it carries the value of a return statement up
/// the execution stack until the nearest function call catches it. `Error`
/// unwinds all the way to `Interpreter::interpret`, which reports it and
/// stops the program.
#[derive(Debug)]
pub enum Interrupt {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Interrupt::Error(error)
    }
}
