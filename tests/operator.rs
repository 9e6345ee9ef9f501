#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        precedence in operator is OK
        "7"
        "9"
        "1"
        "-2"
        "26"
    }

    tests! {
        comparison in operator is OK
        "true"
        "true"
        "false"
        "true"
    }

    tests! {
        equality in operator is OK
        "true"
        "false"
        "true"
        "false"
        "true"
        "false"
        "true"
        "true"
    }

    tests! {
        unary in operator is OK
        "-3"
        "3"
        "false"
        "true"
        "false"
    }

    tests! {
        add_mixed_types in operator is ERR
        "[line 1] operands must be two numbers or two strings"
    }

    tests! {
        divide_by_zero in operator is ERR
        "[line 1] cannot divide by zero"
    }

    tests! {
        compare_strings in operator is ERR
        "[line 1] operands must be numbers"
    }

    tests! {
        negate_string in operator is ERR
        "[line 1] operand must be a number"
    }
}
