#[macro_use]
mod common;

#[cfg(test)]
mod if_stmt {
    tests! {
        then_branch in if_stmt is OK
        "yes"
    }

    tests! {
        else_branch in if_stmt is OK
        "else"
    }

    tests! {
        truthiness in if_stmt is OK
        "zero is truthy"
        "empty string is truthy"
        "nil is falsy"
    }

    tests! {
        dangling_else in if_stmt is OK
        "b"
    }
}
