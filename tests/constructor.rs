#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        init_runs_on_call in constructor is OK
        "7"
    }

    tests! {
        init_stores_fields in constructor is OK
        "3"
    }

    tests! {
        early_return_yields_instance in constructor is OK
        "set"
    }

    tests! {
        calling_init_directly_returns_instance in constructor is OK
        "Foo instance"
    }

    tests! {
        return_value_from_init in constructor is ERR
        "[line 3] error at 'return': Cannot return a value from an initializer"
    }

    tests! {
        arity_mismatch in constructor is ERR
        "[line 7] Expected 2 arguments but got 1"
    }
}
