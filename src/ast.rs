use crate::expr::Expr;
use crate::stmt::Stmt;

/// Returns a string representation of the expression in parentheses.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$self.print_expr($x);
            )*
            string += ")";

            string
        }
    };
}

/// Renders the syntax tree as parenthesized prefix notation. A debugging aid
/// for inspecting what the parser produced; the interpreter never calls it.
pub struct ASTPrinter;

impl ASTPrinter {
    pub fn print_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => literal.to_string(),

            Expr::Unary(unary) => parenthesize!(self, &unary.operator.lexeme, &unary.expr),

            Expr::Binary(binary) => {
                parenthesize!(self, &binary.operator.lexeme, &binary.left, &binary.right)
            },

            Expr::Logical(logical) => {
                parenthesize!(self, &logical.operator.lexeme, &logical.left, &logical.right)
            },

            Expr::Grouping(grouping) => parenthesize!(self, "group", &grouping.expr),

            Expr::Variable(variable) => variable.name.lexeme.clone(),

            Expr::Assign(assign) => {
                parenthesize!(self, format!("= {}", &assign.name.lexeme).as_str(), &assign.value)
            },

            Expr::Call(call) => {
                let mut string = String::new();
                string += &self.print_expr(&call.callee);
                string += "(";
                for argument in &call.arguments {
                    string += &self.print_expr(argument);
                    string += " ";
                }
                string = string.trim_end().to_string();
                string += ")";
                string
            },

            Expr::Get(get) => {
                parenthesize!(self, format!(". {}", &get.name.lexeme).as_str(), &get.object)
            },

            Expr::Set(set) => {
                parenthesize!(
                    self,
                    format!("= . {}", &set.name.lexeme).as_str(),
                    &set.object,
                    &set.value
                )
            },

            Expr::This(_) => "this".to_string(),

            Expr::Super(super_expr) => format!("(super {})", super_expr.method.lexeme),
        }
    }

    pub fn print_stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(data) => parenthesize!(self, "expr", &data.expr),

            Stmt::Print(data) => parenthesize!(self, "print", &data.expr),

            Stmt::Var(data) => {
                let mut string = String::new();
                string += "(var ";
                string += &data.name.lexeme;
                if let Some(initializer) = &data.initializer {
                    string += " = ";
                    string += &self.print_expr(initializer);
                }
                string += ")";

                string
            },

            Stmt::Block(data) => {
                let mut string = String::new();
                string += "{";
                for statement in &data.statements {
                    string += " ";
                    string += &self.print_stmt(statement);
                }
                string += " }";

                string
            },

            Stmt::If(data) => {
                let mut string = String::new();
                string += "(if ";
                string += &self.print_expr(&data.condition);
                string += " ";
                string += &self.print_stmt(&data.then_branch);
                if let Some(else_branch) = &data.else_branch {
                    string += " else ";
                    string += &self.print_stmt(else_branch);
                }
                string += ")";

                string
            },

            Stmt::While(data) => {
                let mut string = String::new();
                string += "(while ";
                string += &self.print_expr(&data.condition);
                string += " ";
                string += &self.print_stmt(&data.body);
                string += ")";

                string
            },

            Stmt::Function(data) => {
                let mut string = String::new();
                string += "(fun ";
                string += &data.name.lexeme;
                string += "(";
                for param in &data.params {
                    string += &param.lexeme;
                    string += " ";
                }
                string = string.trim_end().to_string();
                string += ") { ";
                string += &data.body.iter()
                    .map(|statement| self.print_stmt(statement))
                    .collect::<Vec<String>>()
                    .join(" ");
                string += " })";

                string
            },

            Stmt::Return(data) => {
                match &data.value {
                    Some(value) => parenthesize!(self, "return", value),
                    None => "(return)".to_string(),
                }
            },

            Stmt::Class(data) => {
                let mut string = String::new();
                string += "(class ";
                string += &data.name.lexeme;
                if let Some(superclass) = &data.superclass {
                    string += " < ";
                    string += &self.print_expr(superclass);
                }
                string += " { ";
                string += &data.methods.iter()
                    .map(|method| self.print_stmt(method))
                    .collect::<Vec<String>>()
                    .join(" ");
                string += " })";

                string
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Reporter;
    use crate::parser::Parser;
    use crate::scanner::Scanner;

    fn print(source: &str) -> String {
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(source, &mut reporter).scan_tokens();
        let statements = Parser::new(tokens, &mut reporter).parse();

        assert!(!reporter.had_error());

        statements.iter()
            .map(|statement| ASTPrinter.print_stmt(statement))
            .collect::<Vec<String>>()
            .join(" ")
    }

    #[test]
    fn print_precedence() {
        assert_eq!(print("1 + 2 * 3;"), "(expr (+ 1 (* 2 3)))");
    }

    #[test]
    fn print_grouping_binds_tighter() {
        assert_eq!(print("(1 + 2) * 3;"), "(expr (* (group (+ 1 2)) 3))");
    }

    #[test]
    fn print_variable_declaration() {
        assert_eq!(print("var a = 1;"), "(var a = 1)");
        assert_eq!(print("var b;"), "(var b)");
    }

    #[test]
    fn print_function() {
        assert_eq!(
            print("fun add(a, b) { return a + b; }"),
            "(fun add(a b) { (return (+ a b)) })",
        );
    }

    #[test]
    fn print_property_chain() {
        assert_eq!(print("point.x = point.y;"), "(expr (= . x point (. y point)))");
    }
}
