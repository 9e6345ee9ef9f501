#[macro_use]
mod common;

#[cfg(test)]
mod logical_operator {
    tests! {
        or_returns_operand in logical_operator is OK
        "hi"
        "first"
        "false"
    }

    tests! {
        and_returns_operand in logical_operator is OK
        "x"
        "nil"
        "second"
    }

    tests! {
        short_circuit in logical_operator is OK
        "unchanged"
        "unchanged"
    }
}
