#[macro_use]
mod common;

#[cfg(test)]
mod while_stmt {
    tests! {
        countdown in while_stmt is OK
        "3"
        "2"
        "1"
    }

    tests! {
        false_condition_skips_body in while_stmt is OK
        "done"
    }
}
