use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{Error, Interrupt, Reporter, RuntimeError};
use crate::expr::Expr;
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::Stmt;
use crate::token::{Token, Type};

/// Walks the syntax tree and evaluates it.
///
/// Expressions evaluate to a `Result<Object, RuntimeError>`; statements
/// execute to a `Result<(), Interrupt>` so that a return statement can unwind
/// through any number of nested statements up to the function call that
/// catches it. Runtime errors travel the same road but are only caught at
/// [`Interpreter::interpret`], which reports them and stops the program.
///
/// The interpreter is long-lived: the REPL reuses one instance across
/// prompts, so globals and resolved locals carry forward.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<Token, usize>,
    out: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.lexeme.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            globals: Rc::clone(&globals),
            environment: globals,
            locals: HashMap::new(),
            out,
        }
    }

    /// Executes the statements in order. The first runtime error is reported
    /// and stops execution; the statements after it do not run.
    pub fn interpret(&mut self, statements: &[Stmt], reporter: &mut Reporter) {
        for statement in statements {
            if let Err(interrupt) = self.execute(statement) {
                match interrupt {
                    Interrupt::Error(error) => error.report(reporter),
                    // The resolver rejects top-level returns before anything
                    // runs.
                    Interrupt::Return(_) => unreachable!(),
                }
                return;
            }
        }
    }

    /// Records the scope depth of a use-site token. Called by the resolver.
    pub fn resolve(&mut self, name: &Token, depth: usize) {
        self.locals.insert(name.clone(), depth);
    }

    /// Executes the statements inside the given environment, restoring the
    /// previous environment afterwards even when unwinding.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<(), Interrupt> {
        let previous = mem::replace(&mut self.environment, environment);

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        result
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), Interrupt> {
        match stmt {
            Stmt::Expression(data) => {
                self.evaluate(&data.expr)?;
                Ok(())
            },

            Stmt::Print(data) => {
                let value = self.evaluate(&data.expr)?;
                writeln!(self.out, "{value}").expect("to write to the output stream");
                Ok(())
            },

            Stmt::Var(data) => {
                let value = match &data.initializer {
                    Some(initializer) => self.evaluate(initializer)?,
                    None => Object::Literal(Literal::Nil),
                };

                self.environment.borrow_mut().define(&data.name.lexeme, value);
                Ok(())
            },

            Stmt::Block(data) => {
                let environment = Environment::new(Some(Rc::clone(&self.environment)));
                self.execute_block(&data.statements, Rc::new(RefCell::new(environment)))
            },

            Stmt::If(data) => {
                if self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.then_branch)
                } else if let Some(else_branch) = &data.else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },

            Stmt::While(data) => {
                while self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.body)?;
                }
                Ok(())
            },

            Stmt::Function(data) => {
                let function = Function::new(data, Rc::clone(&self.environment), false);
                self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
                Ok(())
            },

            Stmt::Return(data) => {
                let value = match &data.value {
                    Some(value) => self.evaluate(value)?,
                    None => Object::Literal(Literal::Nil),
                };

                Err(Interrupt::Return(value))
            },

            Stmt::Class(data) => {
                let superclass = match &data.superclass {
                    Some(superclass) => match self.evaluate(superclass)? {
                        Object::Class(class) => Some(class),
                        _ => {
                            let Expr::Variable(variable) = superclass else { unreachable!() };
                            return Err(Interrupt::Error(RuntimeError {
                                token: variable.name.clone(),
                                message: "Superclass must be a class".to_string(),
                            }));
                        },
                    },
                    None => None,
                };

                self.environment.borrow_mut()
                    .define(&data.name.lexeme, Object::Literal(Literal::Nil));

                // Methods close over a scope holding `super`, so super calls
                // inside them reach the superclass no matter where the method
                // ends up bound.
                if let Some(superclass) = &superclass {
                    let mut environment = Environment::new(Some(Rc::clone(&self.environment)));
                    environment.define("super", Object::Class(Rc::clone(superclass)));
                    self.environment = Rc::new(RefCell::new(environment));
                }

                let mut methods = HashMap::new();
                for method in &data.methods {
                    let Stmt::Function(function) = method else { unreachable!() };

                    let is_initializer = function.name.lexeme.eq("init");
                    methods.insert(
                        function.name.lexeme.clone(),
                        Function::new(function, Rc::clone(&self.environment), is_initializer),
                    );
                }

                let class = Class::new(data.name.lexeme.clone(), superclass, methods);

                if class.superclass.is_some() {
                    let enclosing = self.environment.borrow().enclosing.clone()
                        .expect("class environment to have an enclosing scope");
                    self.environment = enclosing;
                }

                self.environment.borrow_mut()
                    .assign(&data.name, Object::from(Rc::new(RefCell::new(class))))?;

                Ok(())
            },
        }
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(Object::from(literal.clone())),

            Expr::Grouping(grouping) => self.evaluate(&grouping.expr),

            Expr::Unary(unary) => {
                let right = self.evaluate(&unary.expr)?;

                match unary.operator.r#type {
                    Type::Minus => (-right).ok_or_else(|| RuntimeError {
                        token: unary.operator.clone(),
                        message: "operand must be a number".to_string(),
                    }),
                    Type::Bang => Ok(Object::from(!right.is_truthy())),
                    _ => unreachable!(),
                }
            },

            Expr::Binary(binary) => {
                let left = self.evaluate(&binary.left)?;
                let right = self.evaluate(&binary.right)?;

                match binary.operator.r#type {
                    Type::Greater | Type::GreaterEqual | Type::Less | Type::LessEqual => {
                        let ordering = left.partial_cmp(&right)
                            .ok_or_else(|| number_operands_error(&binary.operator))?;

                        let result = match binary.operator.r#type {
                            Type::Greater => ordering == Ordering::Greater,
                            Type::GreaterEqual => ordering != Ordering::Less,
                            Type::Less => ordering == Ordering::Less,
                            Type::LessEqual => ordering != Ordering::Greater,
                            _ => unreachable!(),
                        };

                        Ok(Object::from(result))
                    },

                    Type::EqualEqual => Ok(Object::from(left == right)),
                    Type::BangEqual => Ok(Object::from(left != right)),

                    Type::Minus => (left - right)
                        .ok_or_else(|| number_operands_error(&binary.operator)),
                    Type::Star => (left * right)
                        .ok_or_else(|| number_operands_error(&binary.operator)),

                    Type::Slash => {
                        if let (
                            Object::Literal(Literal::Number(_)),
                            Object::Literal(Literal::Number(divisor)),
                        ) = (&left, &right)
                        {
                            if *divisor == 0.0 {
                                return Err(RuntimeError {
                                    token: binary.operator.clone(),
                                    message: "cannot divide by zero".to_string(),
                                });
                            }
                        }

                        (left / right).ok_or_else(|| number_operands_error(&binary.operator))
                    },

                    Type::Plus => (left + right).ok_or_else(|| RuntimeError {
                        token: binary.operator.clone(),
                        message: "operands must be two numbers or two strings".to_string(),
                    }),

                    _ => unreachable!(),
                }
            },

            Expr::Logical(logical) => {
                let left = self.evaluate(&logical.left)?;

                // The operand itself is the result, not a coerced boolean.
                match logical.operator.r#type {
                    Type::Or if left.is_truthy() => Ok(left),
                    Type::And if !left.is_truthy() => Ok(left),
                    _ => self.evaluate(&logical.right),
                }
            },

            Expr::Variable(variable) => self.look_up_variable(&variable.name),

            Expr::Assign(assign) => {
                let value = self.evaluate(&assign.value)?;

                match self.locals.get(&assign.name) {
                    Some(distance) => {
                        self.environment.borrow_mut()
                            .assign_at(*distance, &assign.name, value.clone());
                    },
                    None => {
                        self.globals.borrow_mut().assign(&assign.name, value.clone())?;
                    },
                }

                Ok(value)
            },

            Expr::Call(call) => {
                let callee = self.evaluate(&call.callee)?;

                let mut arguments = Vec::new();
                for argument in &call.arguments {
                    arguments.push(self.evaluate(argument)?);
                }

                match callee {
                    Object::Function(function) => {
                        check_arity(function.arity(), arguments.len(), &call.paren)?;
                        function.call(self, arguments)
                    },
                    Object::NativeFunction(function) => {
                        check_arity(function.arity(), arguments.len(), &call.paren)?;
                        function.call(self, arguments)
                    },
                    Object::Class(class) => {
                        check_arity(class.arity(), arguments.len(), &call.paren)?;
                        class.call(self, arguments)
                    },
                    _ => Err(RuntimeError {
                        token: call.paren.clone(),
                        message: "Can only call functions and classes".to_string(),
                    }),
                }
            },

            Expr::Get(get) => {
                let object = self.evaluate(&get.object)?;

                match object {
                    Object::Instance(ref instance) => instance.borrow().get(&get.name, &object),
                    _ => Err(RuntimeError {
                        token: get.name.clone(),
                        message: "only instances have properties".to_string(),
                    }),
                }
            },

            Expr::Set(set) => {
                let object = self.evaluate(&set.object)?;

                match object {
                    Object::Instance(instance) => {
                        let value = self.evaluate(&set.value)?;
                        instance.borrow_mut().set(&set.name, value.clone());
                        Ok(value)
                    },
                    _ => Err(RuntimeError {
                        token: set.name.clone(),
                        message: "only instances have fields".to_string(),
                    }),
                }
            },

            Expr::This(this) => self.look_up_variable(&this.keyword),

            Expr::Super(super_expr) => {
                let distance = *self.locals.get(&super_expr.keyword)
                    .expect("'super' to have been resolved");

                let superclass = self.environment.borrow()
                    .get_at(distance, &super_expr.keyword)?;
                let Object::Class(superclass) = superclass else { unreachable!() };

                // `this` lives in the scope just inside the one holding
                // `super`.
                let object = self.environment.borrow()
                    .get_at(distance - 1, &Token::synthetic("this"))?;

                let found = superclass.borrow().find_method(&super_expr.method.lexeme);
                match found {
                    Some(method) => Ok(Object::from(method.bind(object))),
                    None => Err(RuntimeError {
                        token: super_expr.method.clone(),
                        message: format!("Undefined property '{}'", super_expr.method.lexeme),
                    }),
                }
            },
        }
    }

    /// Fetches a variable from the scope the resolver recorded for this use
    /// site, or from the globals when no depth was recorded.
    fn look_up_variable(&self, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(name) {
            Some(distance) => self.environment.borrow().get_at(*distance, name),
            None => self.globals.borrow().get(name),
        }
    }
}

fn check_arity(arity: usize, got: usize, paren: &Token) -> Result<(), RuntimeError> {
    if arity != got {
        return Err(RuntimeError {
            token: paren.clone(),
            message: format!("Expected {arity} arguments but got {got}"),
        });
    }

    Ok(())
}

fn number_operands_error(operator: &Token) -> RuntimeError {
    RuntimeError {
        token: operator.clone(),
        message: "operands must be numbers".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::{BinaryData, GroupingData, UnaryData};
    use crate::token::Location;

    fn token(r#type: Type, lexeme: &str) -> Token {
        Token::new(r#type, lexeme, None, Location::new(1, 1))
    }

    fn literal(value: f64) -> Box<Expr> {
        Box::new(Expr::Literal(Literal::Number(value)))
    }

    #[test]
    fn evaluate_literal() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Literal(Literal::Number(12.0));
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(12.0));
    }

    #[test]
    fn evaluate_unary() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Unary(UnaryData {
            operator: token(Type::Minus, "-"),
            expr: literal(12.0),
        });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(-12.0));
    }

    #[test]
    fn evaluate_unary_minus_requires_number() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Unary(UnaryData {
            operator: token(Type::Minus, "-"),
            expr: Box::new(Expr::Literal(Literal::from("x"))),
        });

        let error = interpreter.evaluate(&expr).unwrap_err();
        assert_eq!(error.message, "operand must be a number");
    }

    #[test]
    fn evaluate_binary() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Binary(BinaryData {
            left: literal(12.0),
            operator: token(Type::Minus, "-"),
            right: literal(4.0),
        });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(8.0));
    }

    #[test]
    fn evaluate_grouping() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Grouping(GroupingData { expr: literal(12.0) });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(12.0));
    }

    #[test]
    fn evaluate_string_concatenation() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Binary(BinaryData {
            left: Box::new(Expr::Literal(Literal::from("Hello"))),
            operator: token(Type::Plus, "+"),
            right: Box::new(Expr::Literal(Literal::from("World"))),
        });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from("HelloWorld"));
    }

    #[test]
    fn evaluate_mixed_addition_is_an_error() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Binary(BinaryData {
            left: literal(1.0),
            operator: token(Type::Plus, "+"),
            right: Box::new(Expr::Literal(Literal::from("x"))),
        });

        let error = interpreter.evaluate(&expr).unwrap_err();
        assert_eq!(error.message, "operands must be two numbers or two strings");
    }

    #[test]
    fn evaluate_division_by_zero() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Binary(BinaryData {
            left: literal(1.0),
            operator: token(Type::Slash, "/"),
            right: literal(0.0),
        });

        let error = interpreter.evaluate(&expr).unwrap_err();
        assert_eq!(error.message, "cannot divide by zero");
    }

    #[test]
    fn evaluate_comparison_requires_numbers() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let expr = Expr::Binary(BinaryData {
            left: Box::new(Expr::Literal(Literal::from("a"))),
            operator: token(Type::Less, "<"),
            right: Box::new(Expr::Literal(Literal::from("b"))),
        });

        let error = interpreter.evaluate(&expr).unwrap_err();
        assert_eq!(error.message, "operands must be numbers");
    }

    #[test]
    fn evaluate_nil_equality() {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);

        let both_nil = Expr::Binary(BinaryData {
            left: Box::new(Expr::Literal(Literal::Nil)),
            operator: token(Type::EqualEqual, "=="),
            right: Box::new(Expr::Literal(Literal::Nil)),
        });
        assert_eq!(interpreter.evaluate(&both_nil).unwrap(), Object::from(true));

        let nil_and_number = Expr::Binary(BinaryData {
            left: Box::new(Expr::Literal(Literal::Nil)),
            operator: token(Type::EqualEqual, "=="),
            right: literal(0.0),
        });
        assert_eq!(interpreter.evaluate(&nil_and_number).unwrap(), Object::from(false));
    }
}
