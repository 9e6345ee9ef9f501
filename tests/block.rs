#[macro_use]
mod common;

#[cfg(test)]
mod block {
    tests! {
        scope in block is OK
        "outer"
        "inner"
        "outer"
    }

    tests! {
        empty in block is OK
    }

    tests! {
        nested in block is OK
        "innermost"
        "middle"
        "outer"
    }
}
