#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        call_with_arguments in function is OK
        "3"
    }

    tests! {
        recursion in function is OK
        "55"
    }

    tests! {
        function_values_display in function is OK
        "<function f>"
        "<native function>"
    }

    tests! {
        nested_calls in function is OK
        "2"
    }

    tests! {
        params_shadow_globals in function is OK
        "param"
        "global"
    }

    tests! {
        arity_mismatch in function is ERR
        "[line 2] Expected 1 arguments but got 2"
    }

    tests! {
        call_non_callable in function is ERR
        "[line 1] Can only call functions and classes"
    }

    tests! {
        return_from_top_level in function is ERR
        "[line 1] error at 'return': cannot return from top level"
    }
}
