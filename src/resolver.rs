use std::collections::HashMap;
use std::mem;

use crate::error::{Error, Reporter, ResolveError};
use crate::expr::Expr;
use crate::interpreter::Interpreter;
use crate::stmt::{FunctionData, Stmt};
use crate::token::Token;

/// The kind of function body currently being resolved.
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

/// The kind of class body currently being resolved.
enum ClassType {
    None,
    Class,
    Subclass,
}

/// Resolves every variable use to the lexical scope depth of its declaration
/// before the program runs.
///
/// The resolver walks the statements once, maintaining a stack of scopes. A
/// scope maps a name to whether its initializer has finished; reading a name
/// whose entry is still `false` is the read-in-own-initializer error. The
/// depth of each resolvable use site is recorded into the interpreter's side
/// table; names found in no scope are left out and fall back to the global
/// environment at runtime.
pub struct Resolver<'a, 'out> {
    interpreter: &'a mut Interpreter<'out>,
    reporter: &'a mut Reporter,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'a, 'out> Resolver<'a, 'out> {
    pub fn new(interpreter: &'a mut Interpreter<'out>, reporter: &'a mut Reporter) -> Self {
        Resolver {
            interpreter,
            reporter,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Introduces a name in the innermost scope without marking it usable.
    fn declare(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        let scope = self.scopes.last_mut().expect("stack to be not empty");
        if scope.contains_key(&name.lexeme) {
            ResolveError {
                token: name.clone(),
                message: format!("A variable is already defined with name '{}' in this scope", name.lexeme),
            }.report(self.reporter);
        }
        scope.insert(name.lexeme.to_owned(), false);
    }

    /// Marks a declared name as usable.
    fn define(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert(name.lexeme.to_owned(), true);
    }

    /// Records the depth of the use site: the number of scopes between it and
    /// the scope declaring the name. Unfound names resolve globally.
    fn resolve_local(&mut self, name: &Token) {
        for (i, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(name, i);
                return;
            }
        }
    }

    fn resolve_function(&mut self, function: &FunctionData, r#type: FunctionType) {
        let enclosing_function = mem::replace(&mut self.current_function, r#type);

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&function.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => {
                self.begin_scope();
                self.resolve(&block.statements);
                self.end_scope();
            },

            Stmt::Var(var) => {
                self.declare(&var.name);
                if let Some(initializer) = &var.initializer {
                    self.resolve_expr(initializer);
                }
                self.define(&var.name);
            },

            Stmt::Function(function) => {
                self.declare(&function.name);
                self.define(&function.name);

                self.resolve_function(function, FunctionType::Function);
            },

            Stmt::Expression(expression) => self.resolve_expr(&expression.expr),

            Stmt::Print(print) => self.resolve_expr(&print.expr),

            Stmt::If(if_stmt) => {
                self.resolve_expr(&if_stmt.condition);
                self.resolve_stmt(&if_stmt.then_branch);
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.resolve_stmt(else_branch);
                }
            },

            Stmt::While(while_stmt) => {
                self.resolve_expr(&while_stmt.condition);
                self.resolve_stmt(&while_stmt.body);
            },

            Stmt::Return(return_stmt) => {
                if let FunctionType::None = self.current_function {
                    ResolveError {
                        token: return_stmt.keyword.clone(),
                        message: "cannot return from top level".to_string(),
                    }.report(self.reporter);
                }

                if let Some(value) = &return_stmt.value {
                    if let FunctionType::Initializer = self.current_function {
                        ResolveError {
                            token: return_stmt.keyword.clone(),
                            message: "Cannot return a value from an initializer".to_string(),
                        }.report(self.reporter);
                        return;
                    }

                    self.resolve_expr(value);
                }
            },

            Stmt::Class(class_stmt) => {
                let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

                self.declare(&class_stmt.name);
                self.define(&class_stmt.name);

                if let Some(superclass) = &class_stmt.superclass {
                    let Expr::Variable(variable) = superclass else { unreachable!() };

                    if class_stmt.name.lexeme == variable.name.lexeme {
                        ResolveError {
                            token: variable.name.clone(),
                            message: "A class cannot inherit from itself".to_string(),
                        }.report(self.reporter);
                    }

                    self.current_class = ClassType::Subclass;

                    self.resolve_expr(superclass);

                    // The scope holding `super` encloses the one holding
                    // `this`, which encloses every method body.
                    self.begin_scope();
                    self.scopes
                        .last_mut()
                        .expect("stack to be not empty")
                        .insert("super".to_string(), true);
                }

                self.begin_scope();
                self.scopes
                    .last_mut()
                    .expect("stack to be not empty")
                    .insert("this".to_string(), true);

                for method in &class_stmt.methods {
                    let Stmt::Function(function) = method else { unreachable!() };

                    let declaration = if function.name.lexeme.eq("init") {
                        FunctionType::Initializer
                    } else {
                        FunctionType::Method
                    };
                    self.resolve_function(function, declaration);
                }

                self.end_scope();

                if class_stmt.superclass.is_some() {
                    self.end_scope();
                }

                self.current_class = enclosing_class;
            },
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => (),

            Expr::Variable(variable) => {
                if let Some(scope) = self.scopes.last() {
                    if let Some(defined) = scope.get(&variable.name.lexeme) {
                        if !defined {
                            ResolveError {
                                token: variable.name.to_owned(),
                                message: "cannot read variable in its own initializer".to_string(),
                            }.report(self.reporter);
                        }
                    }
                }

                self.resolve_local(&variable.name);
            },

            Expr::Assign(assign) => {
                self.resolve_expr(&assign.value);
                self.resolve_local(&assign.name);
            },

            Expr::Logical(logical) => {
                self.resolve_expr(&logical.left);
                self.resolve_expr(&logical.right);
            },

            Expr::Unary(unary) => self.resolve_expr(&unary.expr),

            Expr::Binary(binary) => {
                self.resolve_expr(&binary.left);
                self.resolve_expr(&binary.right);
            },

            Expr::Grouping(grouping) => self.resolve_expr(&grouping.expr),

            Expr::Call(call) => {
                self.resolve_expr(&call.callee);

                for argument in &call.arguments {
                    self.resolve_expr(argument);
                }
            },

            Expr::Get(get) => self.resolve_expr(&get.object),

            Expr::Set(set) => {
                self.resolve_expr(&set.value);
                self.resolve_expr(&set.object);
            },

            Expr::This(this) => {
                if let ClassType::None = self.current_class {
                    ResolveError {
                        token: this.keyword.clone(),
                        message: "Cannot use 'this' outside of a class".to_string(),
                    }.report(self.reporter);

                    return;
                }

                self.resolve_local(&this.keyword);
            },

            Expr::Super(super_expr) => {
                match self.current_class {
                    ClassType::Subclass => (),
                    ClassType::None => ResolveError {
                        token: super_expr.keyword.clone(),
                        message: "Cannot use 'super' outside of a class".to_string(),
                    }.report(self.reporter),
                    ClassType::Class => ResolveError {
                        token: super_expr.keyword.clone(),
                        message: "Cannot use 'super' in a class with no superclass".to_string(),
                    }.report(self.reporter),
                }

                self.resolve_local(&super_expr.keyword);
            },
        }
    }
}
