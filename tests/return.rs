#[macro_use]
mod common;

#[cfg(test)]
mod return_stmt {
    tests! {
        early_return in return_stmt is OK
        "early"
    }

    tests! {
        implicit_nil in return_stmt is OK
        "nil"
    }

    tests! {
        bare_return in return_stmt is OK
        "nil"
    }

    tests! {
        from_nested_blocks in return_stmt is OK
        "nested"
    }
}
