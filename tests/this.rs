#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        refers_to_instance in this is OK
        "jane"
    }

    tests! {
        captured_by_nested_function in this is OK
        "thing"
    }
}
