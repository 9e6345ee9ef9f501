//! Slate is a tree-walk interpreter for the Lox language, a small dynamically
//! typed scripting language with first-class closures, single-inheritance
//! classes and lexically scoped variables.
//!
//! The pipeline has four stages, each in its own module:
//!
//! ## Scanning
//! The [`scanner`] turns the source text into a flat list of tokens. It is a
//! single left-to-right pass; trivial problems like an unterminated string or
//! a stray character are reported as a [`ScanError`](error::ScanError) and
//! scanning carries on, so one run surfaces every lexical error at once.
//!
//! ## Parsing
//! The [`parser`] is a hand-written recursive descent parser that turns the
//! token list into a syntax tree of [`expressions`](expr::Expr) and
//! [`statements`](stmt::Stmt). On a [`ParseError`](error::ParseError) it
//! synchronizes to the next statement boundary and keeps parsing, again so
//! that one run reports as much as possible.
//!
//! ## Resolving
//! The [`resolver`] is a static pass over the finished tree that binds every
//! variable use to the lexical scope that declared it, recording how many
//! environments sit between the two. It also rejects the programs that are
//! syntactically fine but semantically not — reading a variable in its own
//! initializer, returning from the top level, using `this` outside a class —
//! as [`ResolveError`](error::ResolveError)s.
//!
//! ## Interpreting
//! The [`interpreter`] walks the tree and evaluates it against a chain of
//! [`environments`](environment::Environment). Type mismatches, undefined
//! names, arity mismatches and the like surface here as
//! [`RuntimeError`](error::RuntimeError)s, which abort the program (but not
//! the REPL).
//!
//! Any error in an earlier stage stops the later stages from running; the
//! [`error::Reporter`] carries that state through the pipeline.

use std::fs;
use std::io::Write;
use std::process;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::Reporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The interpreter driver: owns the long-lived interpreter state and the
/// error reporter, and runs source through the whole pipeline.
///
/// `print` output goes to the injected writer so that tests can capture it;
/// diagnostics go to standard error.
#[allow(non_camel_case_types)]
pub struct slate<'a> {
    interpreter: Interpreter<'a>,
    reporter: Reporter,
}

impl<'a> slate<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        slate {
            interpreter: Interpreter::new(out),
            reporter: Reporter::new(),
        }
    }

    /// Runs a script file. Exits the process with 65 if the script had a
    /// compile-time error and 70 if it had a runtime error.
    pub fn run_file(&mut self, path: String) {
        let contents = fs::read_to_string(path)
            .expect("Should have been able to read the file");

        self.run(contents);

        if self.reporter.had_error() {
            process::exit(65);
        }
        if self.reporter.had_runtime_error() {
            process::exit(70);
        }
    }

    /// Runs an interactive prompt until end of input. Definitions carry over
    /// from one line to the next; errors are reported and forgotten so the
    /// next prompt starts clean.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("to create a prompt editor");

        let history = home::home_dir().map(|path| path.join(".slate_history"));
        if let Some(history) = &history {
            let _ = editor.load_history(history);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());

                    self.run(line);
                    self.reporter.reset();
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("{error}");
                    break;
                },
            }
        }

        if let Some(history) = &history {
            let _ = editor.save_history(history);
        }
    }

    /// Runs a piece of source code through scan, parse, resolve and
    /// interpret. Each stage only runs if the previous ones reported no
    /// error.
    fn run(&mut self, source: String) {
        let mut scanner = Scanner::new(&source, &mut self.reporter);
        let tokens = scanner.scan_tokens();

        if self.reporter.had_error() {
            return;
        }

        let mut parser = Parser::new(tokens, &mut self.reporter);
        let statements = parser.parse();

        if self.reporter.had_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter, &mut self.reporter);
        resolver.resolve(&statements);

        if self.reporter.had_error() {
            return;
        }

        self.interpreter.interpret(&statements, &mut self.reporter);
    }
}
