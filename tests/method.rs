#[macro_use]
mod common;

#[cfg(test)]
mod method {
    tests! {
        call in method is OK
        "hello"
    }

    tests! {
        bound_method_value in method is OK
        "hi ada"
    }

    tests! {
        method_value_displays in method is OK
        "<function m>"
    }

    tests! {
        fields_shadow_methods in method is OK
        "method"
        "field"
    }

    tests! {
        this_outside_class in method is ERR
        "[line 1] error at 'this': Cannot use 'this' outside of a class"
    }
}
